pub mod create_vc_service;
pub mod get_my_vc_service;
pub mod get_vc_contact_service;
pub mod get_vc_service;
pub mod list_all_vcs_service;
pub mod list_unlocked_vcs_service;
pub mod list_vcs_service;
pub mod patch_my_vc_service;
pub mod review_pending_changes_service;
pub mod verify_vc_service;

pub use create_vc_service::CreateVcService;
pub use get_my_vc_service::GetMyVcService;
pub use get_vc_contact_service::GetVcContactService;
pub use get_vc_service::GetVcService;
pub use list_all_vcs_service::ListAllVcsService;
pub use list_unlocked_vcs_service::ListUnlockedVcsService;
pub use list_vcs_service::ListVcsService;
pub use patch_my_vc_service::PatchMyVcService;
pub use review_pending_changes_service::ReviewPendingChangesService;
pub use verify_vc_service::VerifyVcService;
