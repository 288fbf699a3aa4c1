pub mod create_vc;
pub mod get_my_vc;
pub mod get_vc;
pub mod get_vc_contact;
pub mod list_all_vcs;
pub mod list_unlocked_vcs;
pub mod list_vcs;
pub mod patch_my_vc;
pub mod review_pending_changes;
pub mod verify_vc;

pub use create_vc::{CreateVcError, CreateVcUseCase};
pub use get_my_vc::{GetMyVcError, GetMyVcUseCase};
pub use get_vc::{GetVcError, GetVcUseCase};
pub use get_vc_contact::{GetVcContactError, GetVcContactUseCase};
pub use list_all_vcs::{ListAllVcsError, ListAllVcsUseCase};
pub use list_unlocked_vcs::{ListUnlockedVcsError, ListUnlockedVcsUseCase};
pub use list_vcs::{ListVcsError, ListVcsUseCase};
pub use patch_my_vc::{PatchMyVcError, PatchMyVcUseCase};
pub use review_pending_changes::{ReviewPendingChangesError, ReviewPendingChangesUseCase};
pub use verify_vc::{VerifyVcError, VerifyVcUseCase};
