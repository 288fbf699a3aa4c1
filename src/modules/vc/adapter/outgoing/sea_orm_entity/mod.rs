pub mod vcs;
