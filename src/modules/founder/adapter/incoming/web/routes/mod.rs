pub mod get_my_founder;
pub mod get_scout_project;
pub mod list_scout_projects;
pub mod patch_my_founder;

pub use get_my_founder::get_my_founder_handler;
pub use get_scout_project::get_scout_project_handler;
pub use list_scout_projects::{list_scout_projects_handler, ScoutListQuery};
pub use patch_my_founder::patch_my_founder_handler;
