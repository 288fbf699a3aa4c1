pub mod get_my_founder_service;
pub mod get_scout_project_service;
pub mod list_scout_projects_service;
pub mod patch_my_founder_service;

pub use get_my_founder_service::GetMyFounderService;
pub use get_scout_project_service::GetScoutProjectService;
pub use list_scout_projects_service::ListScoutProjectsService;
pub use patch_my_founder_service::PatchMyFounderService;
