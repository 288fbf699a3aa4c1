use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::auth::application::domain::entities::{UserProfile, UserRole};
use crate::auth::application::ports::outgoing::user_query::{
    UserQuery, UserQueryError, UserQueryResult,
};
use crate::auth::application::use_cases::delete_account::{
    DeleteAccountError, IDeleteAccountUseCase,
};
use crate::auth::application::use_cases::fetch_profile::{FetchUserError, FetchUserProfileUseCase};
use crate::auth::application::use_cases::list_users::ListUsersUseCase;
use crate::auth::application::use_cases::login_user::{
    ILoginUserUseCase, LoginError, LoginRequest, LoginUserResponse,
};
use crate::auth::application::use_cases::logout_user::{ILogoutUseCase, LogoutError, LogoutRequest};
use crate::auth::application::use_cases::register_user::{
    IRegisterUserUseCase, RegisterUserError, RegisterUserRequest,
};
use crate::auth::application::use_cases::update_profile::{
    UpdateUserError, UpdateUserInput, UpdateUserProfileUseCase,
};
use crate::modules::cold_investor::application::domain::entities::{
    ColdInvestor, ColdInvestorListing, DecisionMakerView, NewColdInvestor, NewDecisionMaker,
};
use crate::modules::cold_investor::application::ports::incoming::use_cases::{
    CreateColdInvestorError, CreateColdInvestorUseCase, CreateDecisionMakerError,
    CreateDecisionMakerUseCase, ListColdInvestorsError, ListColdInvestorsUseCase,
};
use crate::modules::directory::application::domain::entities::DirectoryEntry;
use crate::modules::directory::application::ports::incoming::use_cases::{
    GetDirectoryError, GetDirectoryUseCase,
};
use crate::modules::email_gate::application::domain::entities::EmailAccess;
use crate::modules::email_gate::application::ports::incoming::use_cases::{
    CheckAccessError, CheckAccessUseCase, SubmitEmailError, SubmitEmailUseCase,
};
use crate::modules::founder::application::domain::entities::{
    FounderPatch, FounderProfile, ScoutProject, ScoutSort,
};
use crate::modules::founder::application::ports::incoming::use_cases::{
    GetMyFounderError, GetMyFounderUseCase, GetScoutProjectError, GetScoutProjectUseCase,
    ListScoutProjectsError, ListScoutProjectsUseCase, PatchMyFounderError, PatchMyFounderUseCase,
};
use crate::modules::payment::application::domain::entities::{
    Payer, Payment, PaymentConfirmation, PaymentIntent, PaymentTarget,
};
use crate::modules::payment::application::ports::incoming::use_cases::{
    ConfirmPaymentError, ConfirmPaymentUseCase, CreatePaymentIntentError,
    CreatePaymentIntentUseCase, ListMyPaymentsError, ListMyPaymentsUseCase,
};
use crate::modules::vc::application::domain::entities::{
    NewVc, UnlockedVc, VcCard, VcChanges, VcContact, VcFilter, VcListing,
};
use crate::modules::vc::application::ports::incoming::use_cases::{
    CreateVcError, CreateVcUseCase, GetMyVcError, GetMyVcUseCase, GetVcContactError,
    GetVcContactUseCase, GetVcError, GetVcUseCase, ListAllVcsError, ListAllVcsUseCase,
    ListUnlockedVcsError, ListUnlockedVcsUseCase, ListVcsError, ListVcsUseCase, PatchMyVcError,
    PatchMyVcUseCase, ReviewPendingChangesError, ReviewPendingChangesUseCase, VerifyVcError,
    VerifyVcUseCase,
};
use crate::modules::vc_request::application::domain::entities::VcRequestStats;
use crate::modules::vc_request::application::ports::incoming::use_cases::{
    GetMyRequestStatsError, GetMyRequestStatsUseCase,
};
use crate::modules::vote::application::domain::entities::VoteStatus;
use crate::modules::vote::application::ports::incoming::use_cases::{
    CastVoteError, CastVoteUseCase, RemoveVoteError, RemoveVoteUseCase, VoteStatusError,
    VoteStatusUseCase,
};
use crate::shared::pagination::{PageRequest, PageResult};

// auth

#[derive(Default, Clone)]
pub struct StubRegisterUserUseCase;

#[async_trait]
impl IRegisterUserUseCase for StubRegisterUserUseCase {
    async fn execute(&self, _request: RegisterUserRequest) -> Result<UserProfile, RegisterUserError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubLoginUserUseCase;

#[async_trait]
impl ILoginUserUseCase for StubLoginUserUseCase {
    async fn execute(&self, _request: LoginRequest) -> Result<LoginUserResponse, LoginError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubLogoutUserUseCase;

#[async_trait]
impl ILogoutUseCase for StubLogoutUserUseCase {
    async fn execute(&self, _request: LogoutRequest) -> Result<(), LogoutError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubFetchUserProfileUseCase;

#[async_trait]
impl FetchUserProfileUseCase for StubFetchUserProfileUseCase {
    async fn execute(&self, _user_id: Uuid) -> Result<UserProfile, FetchUserError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubUpdateUserProfileUseCase;

#[async_trait]
impl UpdateUserProfileUseCase for StubUpdateUserProfileUseCase {
    async fn execute(&self, _data: UpdateUserInput) -> Result<UserProfile, UpdateUserError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubDeleteAccountUseCase;

#[async_trait]
impl IDeleteAccountUseCase for StubDeleteAccountUseCase {
    async fn execute(&self, _session: LogoutRequest) -> Result<(), DeleteAccountError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubListUsersUseCase;

#[async_trait]
impl ListUsersUseCase for StubListUsersUseCase {
    async fn execute(&self, _page: PageRequest) -> Result<PageResult<UserProfile>, UserQueryError> {
        unimplemented!("Not used in this test")
    }
}

/// Answers every lookup with one user whose admin flag is fixed.
#[derive(Default, Clone)]
pub struct StubUserQuery {
    pub is_admin: bool,
}

impl StubUserQuery {
    fn user(&self, id: Uuid, email: &str) -> UserQueryResult {
        let now = Utc::now();
        UserQueryResult {
            id,
            email: email.to_string(),
            password_hash: String::new(),
            full_name: "Test User".to_string(),
            role: UserRole::Founder,
            is_admin: self.is_admin,
            created_at: now,
            updated_at: now,
        }
    }
}

#[async_trait]
impl UserQuery for StubUserQuery {
    async fn find_by_id(&self, user_id: Uuid) -> Result<Option<UserQueryResult>, UserQueryError> {
        Ok(Some(self.user(user_id, "user@example.com")))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<UserQueryResult>, UserQueryError> {
        Ok(Some(self.user(Uuid::new_v4(), email)))
    }

    async fn list_users(
        &self,
        page: &PageRequest,
    ) -> Result<PageResult<UserQueryResult>, UserQueryError> {
        Ok(PageResult::empty(page))
    }
}

// founder

#[derive(Default, Clone)]
pub struct StubGetMyFounderUseCase;

#[async_trait]
impl GetMyFounderUseCase for StubGetMyFounderUseCase {
    async fn execute(&self, _user_id: Uuid) -> Result<FounderProfile, GetMyFounderError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubPatchMyFounderUseCase;

#[async_trait]
impl PatchMyFounderUseCase for StubPatchMyFounderUseCase {
    async fn execute(
        &self,
        _user_id: Uuid,
        _patch: FounderPatch,
    ) -> Result<FounderProfile, PatchMyFounderError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubListScoutProjectsUseCase;

#[async_trait]
impl ListScoutProjectsUseCase for StubListScoutProjectsUseCase {
    async fn execute(
        &self,
        _sort: ScoutSort,
        _page: PageRequest,
    ) -> Result<PageResult<ScoutProject>, ListScoutProjectsError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetScoutProjectUseCase;

#[async_trait]
impl GetScoutProjectUseCase for StubGetScoutProjectUseCase {
    async fn execute(&self, _project_id: Uuid) -> Result<ScoutProject, GetScoutProjectError> {
        unimplemented!("Not used in this test")
    }
}

// vc

#[derive(Default, Clone)]
pub struct StubCreateVcUseCase;

#[async_trait]
impl CreateVcUseCase for StubCreateVcUseCase {
    async fn execute(&self, _user_id: Uuid, _data: NewVc) -> Result<VcListing, CreateVcError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubListVcsUseCase;

#[async_trait]
impl ListVcsUseCase for StubListVcsUseCase {
    async fn execute(
        &self,
        _filter: VcFilter,
        _page: PageRequest,
    ) -> Result<PageResult<VcCard>, ListVcsError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetVcUseCase;

#[async_trait]
impl GetVcUseCase for StubGetVcUseCase {
    async fn execute(&self, _vc_id: Uuid) -> Result<VcCard, GetVcError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetMyVcUseCase;

#[async_trait]
impl GetMyVcUseCase for StubGetMyVcUseCase {
    async fn execute(&self, _user_id: Uuid) -> Result<VcListing, GetMyVcError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubPatchMyVcUseCase;

#[async_trait]
impl PatchMyVcUseCase for StubPatchMyVcUseCase {
    async fn execute(&self, _user_id: Uuid, _changes: VcChanges) -> Result<VcListing, PatchMyVcError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetVcContactUseCase;

#[async_trait]
impl GetVcContactUseCase for StubGetVcContactUseCase {
    async fn execute(&self, _founder_user_id: Uuid, _vc_id: Uuid) -> Result<VcContact, GetVcContactError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubListUnlockedVcsUseCase;

#[async_trait]
impl ListUnlockedVcsUseCase for StubListUnlockedVcsUseCase {
    async fn execute(&self, _founder_user_id: Uuid) -> Result<Vec<UnlockedVc>, ListUnlockedVcsError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubVerifyVcUseCase;

#[async_trait]
impl VerifyVcUseCase for StubVerifyVcUseCase {
    async fn execute(&self, _vc_id: Uuid, _is_verified: bool) -> Result<VcListing, VerifyVcError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubListAllVcsUseCase;

#[async_trait]
impl ListAllVcsUseCase for StubListAllVcsUseCase {
    async fn execute(&self, _page: PageRequest) -> Result<PageResult<VcListing>, ListAllVcsError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubReviewPendingChangesUseCase;

#[async_trait]
impl ReviewPendingChangesUseCase for StubReviewPendingChangesUseCase {
    async fn execute(
        &self,
        _vc_id: Uuid,
        _approve: bool,
    ) -> Result<VcListing, ReviewPendingChangesError> {
        unimplemented!("Not used in this test")
    }
}

// vote

#[derive(Default, Clone)]
pub struct StubCastVoteUseCase;

#[async_trait]
impl CastVoteUseCase for StubCastVoteUseCase {
    async fn execute(&self, _project_id: Uuid, _email: &str) -> Result<VoteStatus, CastVoteError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubRemoveVoteUseCase;

#[async_trait]
impl RemoveVoteUseCase for StubRemoveVoteUseCase {
    async fn execute(&self, _project_id: Uuid, _email: &str) -> Result<VoteStatus, RemoveVoteError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubVoteStatusUseCase;

#[async_trait]
impl VoteStatusUseCase for StubVoteStatusUseCase {
    async fn execute(&self, _project_id: Uuid, _email: &str) -> Result<VoteStatus, VoteStatusError> {
        unimplemented!("Not used in this test")
    }
}

// email gate

#[derive(Default, Clone)]
pub struct StubSubmitEmailUseCase;

#[async_trait]
impl SubmitEmailUseCase for StubSubmitEmailUseCase {
    async fn execute(&self, _email: &str, _source: &str) -> Result<EmailAccess, SubmitEmailError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubCheckAccessUseCase;

#[async_trait]
impl CheckAccessUseCase for StubCheckAccessUseCase {
    async fn execute(&self, _email: &str, _source: &str) -> Result<EmailAccess, CheckAccessError> {
        unimplemented!("Not used in this test")
    }
}

// cold investors

#[derive(Default, Clone)]
pub struct StubListColdInvestorsUseCase;

#[async_trait]
impl ListColdInvestorsUseCase for StubListColdInvestorsUseCase {
    async fn execute(
        &self,
        _viewer_email: Option<String>,
        _page: PageRequest,
    ) -> Result<PageResult<ColdInvestorListing>, ListColdInvestorsError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubCreateColdInvestorUseCase;

#[async_trait]
impl CreateColdInvestorUseCase for StubCreateColdInvestorUseCase {
    async fn execute(&self, _investor: NewColdInvestor) -> Result<ColdInvestor, CreateColdInvestorError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubCreateDecisionMakerUseCase;

#[async_trait]
impl CreateDecisionMakerUseCase for StubCreateDecisionMakerUseCase {
    async fn execute(
        &self,
        _cold_investor_id: Uuid,
        _decision_maker: NewDecisionMaker,
    ) -> Result<DecisionMakerView, CreateDecisionMakerError> {
        unimplemented!("Not used in this test")
    }
}

// vc requests

#[derive(Default, Clone)]
pub struct StubGetMyRequestStatsUseCase;

#[async_trait]
impl GetMyRequestStatsUseCase for StubGetMyRequestStatsUseCase {
    async fn execute(&self, _investor_user_id: Uuid) -> Result<VcRequestStats, GetMyRequestStatsError> {
        unimplemented!("Not used in this test")
    }
}

// payments

#[derive(Default, Clone)]
pub struct StubCreatePaymentIntentUseCase;

#[async_trait]
impl CreatePaymentIntentUseCase for StubCreatePaymentIntentUseCase {
    async fn execute(
        &self,
        _payer: Payer,
        _target: PaymentTarget,
    ) -> Result<PaymentIntent, CreatePaymentIntentError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubConfirmPaymentUseCase;

#[async_trait]
impl ConfirmPaymentUseCase for StubConfirmPaymentUseCase {
    async fn execute(
        &self,
        _payer: Payer,
        _payment_id: &str,
    ) -> Result<PaymentConfirmation, ConfirmPaymentError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubListMyPaymentsUseCase;

#[async_trait]
impl ListMyPaymentsUseCase for StubListMyPaymentsUseCase {
    async fn execute(&self, _founder_user_id: Uuid) -> Result<Vec<Payment>, ListMyPaymentsError> {
        unimplemented!("Not used in this test")
    }
}

// directory

#[derive(Default, Clone)]
pub struct StubGetDirectoryUseCase;

#[async_trait]
impl GetDirectoryUseCase for StubGetDirectoryUseCase {
    async fn execute(&self, _email: &str) -> Result<Vec<DirectoryEntry>, GetDirectoryError> {
        unimplemented!("Not used in this test")
    }
}
