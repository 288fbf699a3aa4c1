pub mod get_my_founder;
pub mod get_scout_project;
pub mod list_scout_projects;
pub mod patch_my_founder;

pub use get_my_founder::{GetMyFounderError, GetMyFounderUseCase};
pub use get_scout_project::{GetScoutProjectError, GetScoutProjectUseCase};
pub use list_scout_projects::{ListScoutProjectsError, ListScoutProjectsUseCase};
pub use patch_my_founder::{PatchMyFounderError, PatchMyFounderUseCase};
