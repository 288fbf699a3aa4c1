pub mod project_votes;
