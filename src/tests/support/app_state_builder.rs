use std::sync::Arc;

use actix_web::web;

use crate::auth::application::auth_use_cases::AuthUseCases;
use crate::auth::application::helpers::AdminGuard;
use crate::auth::application::use_cases::delete_account::IDeleteAccountUseCase;
use crate::auth::application::use_cases::fetch_profile::FetchUserProfileUseCase;
use crate::auth::application::use_cases::list_users::ListUsersUseCase;
use crate::auth::application::use_cases::login_user::ILoginUserUseCase;
use crate::auth::application::use_cases::logout_user::ILogoutUseCase;
use crate::auth::application::use_cases::register_user::IRegisterUserUseCase;
use crate::auth::application::use_cases::update_profile::UpdateUserProfileUseCase;
use crate::modules::cold_investor::application::cold_investor_use_cases::ColdInvestorUseCases;
use crate::modules::cold_investor::application::ports::incoming::use_cases::{
    CreateColdInvestorUseCase, CreateDecisionMakerUseCase, ListColdInvestorsUseCase,
};
use crate::modules::directory::application::directory_use_cases::DirectoryUseCases;
use crate::modules::directory::application::ports::incoming::use_cases::GetDirectoryUseCase;
use crate::modules::email_gate::application::email_gate_use_cases::EmailGateUseCases;
use crate::modules::email_gate::application::ports::incoming::use_cases::{
    CheckAccessUseCase, SubmitEmailUseCase,
};
use crate::modules::founder::application::founder_use_cases::FounderUseCases;
use crate::modules::founder::application::ports::incoming::use_cases::{
    GetMyFounderUseCase, GetScoutProjectUseCase, ListScoutProjectsUseCase, PatchMyFounderUseCase,
};
use crate::modules::payment::application::payment_use_cases::PaymentUseCases;
use crate::modules::payment::application::ports::incoming::use_cases::{
    ConfirmPaymentUseCase, CreatePaymentIntentUseCase, ListMyPaymentsUseCase,
};
use crate::modules::vc::application::ports::incoming::use_cases::{
    CreateVcUseCase, GetMyVcUseCase, GetVcContactUseCase, GetVcUseCase, ListAllVcsUseCase,
    ListUnlockedVcsUseCase, ListVcsUseCase, PatchMyVcUseCase, ReviewPendingChangesUseCase,
    VerifyVcUseCase,
};
use crate::modules::vc::application::vc_use_cases::VcUseCases;
use crate::modules::vc_request::application::ports::incoming::use_cases::GetMyRequestStatsUseCase;
use crate::modules::vc_request::application::vc_request_use_cases::VcRequestUseCases;
use crate::modules::vote::application::ports::incoming::use_cases::{
    CastVoteUseCase, RemoveVoteUseCase, VoteStatusUseCase,
};
use crate::modules::vote::application::vote_use_cases::VoteUseCases;
use crate::tests::support::stubs::*;
use crate::AppState;

/// AppState for route tests. Every use case starts as a stub that panics when
/// called; tests swap in the one their handler needs.
pub struct TestAppStateBuilder {
    auth: AuthUseCases,
    founder: FounderUseCases,
    vc: VcUseCases,
    vote: VoteUseCases,
    email_gate: EmailGateUseCases,
    cold_investor: ColdInvestorUseCases,
    vc_request: VcRequestUseCases,
    payment: PaymentUseCases,
    directory: DirectoryUseCases,
    is_admin: bool,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            auth: AuthUseCases {
                register: Arc::new(StubRegisterUserUseCase),
                login: Arc::new(StubLoginUserUseCase),
                logout: Arc::new(StubLogoutUserUseCase),
                fetch_profile: Arc::new(StubFetchUserProfileUseCase),
                update_profile: Arc::new(StubUpdateUserProfileUseCase),
                delete_account: Arc::new(StubDeleteAccountUseCase),
                list_users: Arc::new(StubListUsersUseCase),
            },
            founder: FounderUseCases {
                get_mine: Arc::new(StubGetMyFounderUseCase),
                patch_mine: Arc::new(StubPatchMyFounderUseCase),
                list_scout: Arc::new(StubListScoutProjectsUseCase),
                get_scout: Arc::new(StubGetScoutProjectUseCase),
            },
            vc: VcUseCases {
                create: Arc::new(StubCreateVcUseCase),
                list: Arc::new(StubListVcsUseCase),
                get: Arc::new(StubGetVcUseCase),
                get_mine: Arc::new(StubGetMyVcUseCase),
                patch_mine: Arc::new(StubPatchMyVcUseCase),
                get_contact: Arc::new(StubGetVcContactUseCase),
                list_unlocked: Arc::new(StubListUnlockedVcsUseCase),
                verify: Arc::new(StubVerifyVcUseCase),
                list_all: Arc::new(StubListAllVcsUseCase),
                review_pending: Arc::new(StubReviewPendingChangesUseCase),
            },
            vote: VoteUseCases {
                cast: Arc::new(StubCastVoteUseCase),
                remove: Arc::new(StubRemoveVoteUseCase),
                status: Arc::new(StubVoteStatusUseCase),
            },
            email_gate: EmailGateUseCases {
                submit: Arc::new(StubSubmitEmailUseCase),
                check: Arc::new(StubCheckAccessUseCase),
            },
            cold_investor: ColdInvestorUseCases {
                list: Arc::new(StubListColdInvestorsUseCase),
                create_investor: Arc::new(StubCreateColdInvestorUseCase),
                create_decision_maker: Arc::new(StubCreateDecisionMakerUseCase),
            },
            vc_request: VcRequestUseCases {
                my_stats: Arc::new(StubGetMyRequestStatsUseCase),
            },
            payment: PaymentUseCases {
                create_intent: Arc::new(StubCreatePaymentIntentUseCase),
                confirm: Arc::new(StubConfirmPaymentUseCase),
                list_mine: Arc::new(StubListMyPaymentsUseCase),
            },
            directory: DirectoryUseCases {
                get: Arc::new(StubGetDirectoryUseCase),
            },
            is_admin: false,
        }
    }
}

impl TestAppStateBuilder {
    /// Every caller passes the admin check.
    pub fn with_admin_access(mut self) -> Self {
        self.is_admin = true;
        self
    }

    // auth

    pub fn with_register_user(mut self, uc: impl IRegisterUserUseCase + Send + Sync + 'static) -> Self {
        self.auth.register = Arc::new(uc);
        self
    }

    pub fn with_login_user(mut self, uc: impl ILoginUserUseCase + Send + Sync + 'static) -> Self {
        self.auth.login = Arc::new(uc);
        self
    }

    pub fn with_logout_user(mut self, uc: impl ILogoutUseCase + Send + Sync + 'static) -> Self {
        self.auth.logout = Arc::new(uc);
        self
    }

    pub fn with_fetch_user_profile(
        mut self,
        uc: impl FetchUserProfileUseCase + Send + Sync + 'static,
    ) -> Self {
        self.auth.fetch_profile = Arc::new(uc);
        self
    }

    pub fn with_update_user_profile(
        mut self,
        uc: impl UpdateUserProfileUseCase + Send + Sync + 'static,
    ) -> Self {
        self.auth.update_profile = Arc::new(uc);
        self
    }

    pub fn with_delete_account(
        mut self,
        uc: impl IDeleteAccountUseCase + Send + Sync + 'static,
    ) -> Self {
        self.auth.delete_account = Arc::new(uc);
        self
    }

    pub fn with_list_users(mut self, uc: impl ListUsersUseCase + Send + Sync + 'static) -> Self {
        self.auth.list_users = Arc::new(uc);
        self
    }

    // founder

    pub fn with_get_my_founder(mut self, uc: impl GetMyFounderUseCase + Send + Sync + 'static) -> Self {
        self.founder.get_mine = Arc::new(uc);
        self
    }

    pub fn with_patch_my_founder(
        mut self,
        uc: impl PatchMyFounderUseCase + Send + Sync + 'static,
    ) -> Self {
        self.founder.patch_mine = Arc::new(uc);
        self
    }

    pub fn with_list_scout_projects(
        mut self,
        uc: impl ListScoutProjectsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.founder.list_scout = Arc::new(uc);
        self
    }

    pub fn with_get_scout_project(
        mut self,
        uc: impl GetScoutProjectUseCase + Send + Sync + 'static,
    ) -> Self {
        self.founder.get_scout = Arc::new(uc);
        self
    }

    // vc

    pub fn with_create_vc(mut self, uc: impl CreateVcUseCase + Send + Sync + 'static) -> Self {
        self.vc.create = Arc::new(uc);
        self
    }

    pub fn with_list_vcs(mut self, uc: impl ListVcsUseCase + Send + Sync + 'static) -> Self {
        self.vc.list = Arc::new(uc);
        self
    }

    pub fn with_get_vc(mut self, uc: impl GetVcUseCase + Send + Sync + 'static) -> Self {
        self.vc.get = Arc::new(uc);
        self
    }

    pub fn with_get_my_vc(mut self, uc: impl GetMyVcUseCase + Send + Sync + 'static) -> Self {
        self.vc.get_mine = Arc::new(uc);
        self
    }

    pub fn with_patch_my_vc(mut self, uc: impl PatchMyVcUseCase + Send + Sync + 'static) -> Self {
        self.vc.patch_mine = Arc::new(uc);
        self
    }

    pub fn with_get_vc_contact(mut self, uc: impl GetVcContactUseCase + Send + Sync + 'static) -> Self {
        self.vc.get_contact = Arc::new(uc);
        self
    }

    pub fn with_list_unlocked_vcs(
        mut self,
        uc: impl ListUnlockedVcsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.vc.list_unlocked = Arc::new(uc);
        self
    }

    pub fn with_verify_vc(mut self, uc: impl VerifyVcUseCase + Send + Sync + 'static) -> Self {
        self.vc.verify = Arc::new(uc);
        self
    }

    pub fn with_list_all_vcs(mut self, uc: impl ListAllVcsUseCase + Send + Sync + 'static) -> Self {
        self.vc.list_all = Arc::new(uc);
        self
    }

    pub fn with_review_pending_changes(
        mut self,
        uc: impl ReviewPendingChangesUseCase + Send + Sync + 'static,
    ) -> Self {
        self.vc.review_pending = Arc::new(uc);
        self
    }

    // vote

    pub fn with_cast_vote(mut self, uc: impl CastVoteUseCase + Send + Sync + 'static) -> Self {
        self.vote.cast = Arc::new(uc);
        self
    }

    pub fn with_remove_vote(mut self, uc: impl RemoveVoteUseCase + Send + Sync + 'static) -> Self {
        self.vote.remove = Arc::new(uc);
        self
    }

    pub fn with_vote_status(mut self, uc: impl VoteStatusUseCase + Send + Sync + 'static) -> Self {
        self.vote.status = Arc::new(uc);
        self
    }

    // email gate

    pub fn with_submit_email(mut self, uc: impl SubmitEmailUseCase + Send + Sync + 'static) -> Self {
        self.email_gate.submit = Arc::new(uc);
        self
    }

    pub fn with_check_access(mut self, uc: impl CheckAccessUseCase + Send + Sync + 'static) -> Self {
        self.email_gate.check = Arc::new(uc);
        self
    }

    // cold investors

    pub fn with_list_cold_investors(
        mut self,
        uc: impl ListColdInvestorsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.cold_investor.list = Arc::new(uc);
        self
    }

    pub fn with_create_cold_investor(
        mut self,
        uc: impl CreateColdInvestorUseCase + Send + Sync + 'static,
    ) -> Self {
        self.cold_investor.create_investor = Arc::new(uc);
        self
    }

    pub fn with_create_decision_maker(
        mut self,
        uc: impl CreateDecisionMakerUseCase + Send + Sync + 'static,
    ) -> Self {
        self.cold_investor.create_decision_maker = Arc::new(uc);
        self
    }

    // vc requests

    pub fn with_get_my_request_stats(
        mut self,
        uc: impl GetMyRequestStatsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.vc_request.my_stats = Arc::new(uc);
        self
    }

    // payments

    pub fn with_create_payment_intent(
        mut self,
        uc: impl CreatePaymentIntentUseCase + Send + Sync + 'static,
    ) -> Self {
        self.payment.create_intent = Arc::new(uc);
        self
    }

    pub fn with_confirm_payment(mut self, uc: impl ConfirmPaymentUseCase + Send + Sync + 'static) -> Self {
        self.payment.confirm = Arc::new(uc);
        self
    }

    pub fn with_list_my_payments(
        mut self,
        uc: impl ListMyPaymentsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.payment.list_mine = Arc::new(uc);
        self
    }

    // directory

    pub fn with_get_directory(mut self, uc: impl GetDirectoryUseCase + Send + Sync + 'static) -> Self {
        self.directory.get = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            auth: self.auth,
            founder: self.founder,
            vc: self.vc,
            vote: self.vote,
            email_gate: self.email_gate,
            cold_investor: self.cold_investor,
            vc_request: self.vc_request,
            payment: self.payment,
            directory: self.directory,
            admin_guard: AdminGuard::new(Arc::new(StubUserQuery {
                is_admin: self.is_admin,
            })),
            secure_cookies: false,
        })
    }
}
