pub mod admin_list_vcs;
pub mod admin_review_changes;
pub mod admin_verify_vc;
pub mod create_vc;
pub mod get_my_vc;
pub mod get_vc;
pub mod get_vc_contact;
pub mod list_unlocked_vcs;
pub mod list_vcs;
pub mod patch_my_vc;

pub use admin_list_vcs::admin_list_vcs_handler;
pub use admin_review_changes::{admin_review_changes_handler, ReviewChangesRequest};
pub use admin_verify_vc::{admin_verify_vc_handler, VerifyVcRequest};
pub use create_vc::create_vc_handler;
pub use get_my_vc::get_my_vc_handler;
pub use get_vc::get_vc_handler;
pub use get_vc_contact::get_vc_contact_handler;
pub use list_unlocked_vcs::list_unlocked_vcs_handler;
pub use list_vcs::{list_vcs_handler, VcListQuery};
pub use patch_my_vc::patch_my_vc_handler;
