pub mod api;
pub mod config;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::auth;

use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::adapter::outgoing::security::argon2_hasher::Argon2Hasher;
use crate::auth::adapter::outgoing::session_blacklist_redis::RedisSessionBlacklist;
use crate::auth::adapter::outgoing::user_query_postgres::UserQueryPostgres;
use crate::auth::adapter::outgoing::user_repository_postgres::UserRepositoryPostgres;
use crate::auth::application::auth_use_cases::AuthUseCases;
use crate::auth::application::helpers::AdminGuard;
use crate::auth::application::ports::outgoing::{
    PasswordHasher, SessionBlacklist, TokenProvider, UserQuery,
};
use crate::auth::application::use_cases::{
    delete_account::DeleteAccountUseCase, fetch_profile::FetchUserProfileService,
    list_users::ListUsersService, login_user::LoginUserUseCase, logout_user::LogoutUseCase,
    register_user::RegisterUserUseCase, update_profile::UpdateUserProfileService,
};
use crate::config::AppConfig;
use crate::modules::cold_investor::adapter::outgoing::{
    ColdInvestorQueryPostgres, ColdInvestorRepositoryPostgres,
};
use crate::modules::cold_investor::application::cold_investor_use_cases::ColdInvestorUseCases;
use crate::modules::cold_investor::application::service::{
    CreateColdInvestorService, CreateDecisionMakerService, ListColdInvestorsService,
};
use crate::modules::directory::adapter::outgoing::{AirtableConfig, AirtableDirectorySource};
use crate::modules::directory::application::directory_use_cases::DirectoryUseCases;
use crate::modules::directory::application::service::GetDirectoryService;
use crate::modules::email_gate::adapter::outgoing::EmailSubmissionRepositoryPostgres;
use crate::modules::email_gate::application::email_gate_use_cases::EmailGateUseCases;
use crate::modules::email_gate::application::service::{CheckAccessService, SubmitEmailService};
use crate::modules::founder::adapter::outgoing::{FounderQueryPostgres, FounderRepositoryPostgres};
use crate::modules::founder::application::founder_use_cases::FounderUseCases;
use crate::modules::founder::application::service::{
    GetMyFounderService, GetScoutProjectService, ListScoutProjectsService, PatchMyFounderService,
};
use crate::modules::payment::adapter::outgoing::{
    OpenAiConfig, OpenAiIntroGenerator, PaymentRepositoryPostgres, StripeConfig, StripeGateway,
};
use crate::modules::payment::application::payment_use_cases::PaymentUseCases;
use crate::modules::payment::application::service::{
    ConfirmPaymentService, CreatePaymentIntentService, ListMyPaymentsService, PaymentPorts,
};
use crate::modules::vc::adapter::outgoing::{VcQueryPostgres, VcRepositoryPostgres};
use crate::modules::vc::application::service::{
    CreateVcService, GetMyVcService, GetVcContactService, GetVcService, ListAllVcsService,
    ListUnlockedVcsService, ListVcsService, PatchMyVcService, ReviewPendingChangesService,
    VerifyVcService,
};
use crate::modules::vc::application::vc_use_cases::VcUseCases;
use crate::modules::vc_request::adapter::outgoing::VcRequestRepositoryPostgres;
use crate::modules::vc_request::application::service::GetMyRequestStatsService;
use crate::modules::vc_request::application::vc_request_use_cases::VcRequestUseCases;
use crate::modules::vote::adapter::outgoing::VoteRepositoryPostgres;
use crate::modules::vote::application::service::{
    CastVoteService, RemoveVoteService, VoteStatusService,
};
use crate::modules::vote::application::vote_use_cases::VoteUseCases;
use crate::shared::api::{custom_json_config, custom_query_config};

use actix_web::{web, App, HttpServer};
use deadpool_redis::{Config, Runtime};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database};
use std::sync::Arc;
use std::time::Duration;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub auth: AuthUseCases,
    pub founder: FounderUseCases,
    pub vc: VcUseCases,
    pub vote: VoteUseCases,
    pub email_gate: EmailGateUseCases,
    pub cold_investor: ColdInvestorUseCases,
    pub vc_request: VcRequestUseCases,
    pub payment: PaymentUseCases,
    pub directory: DirectoryUseCases,
    pub admin_guard: AdminGuard,
    pub secure_cookies: bool,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Try .env.{environment} first, then fall back to .env
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    // Redis TLS goes through rustls; pick the ring provider once per process.
    let _ = rustls::crypto::ring::default_provider().install_default();

    let config = AppConfig::from_env();
    let server_url = config.server_url();
    info!(environment = %config.environment, "Server run on: {}", server_url);

    // Database connection
    let mut opt = ConnectOptions::new(config.database_url.clone());
    opt.max_connections(50)
        .min_connections(5)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .expect("Failed to connect to database");

    Migrator::up(&conn, None)
        .await
        .expect("Failed to run database migrations");

    let db_arc = Arc::new(conn);

    // Redis connection
    let redis_pool = Config::from_url(&config.redis_url)
        .create_pool(Some(Runtime::Tokio1))
        .expect("Failed to create Redis pool");

    let redis_arc = Arc::new(redis_pool);

    // Shared adapters
    let jwt_service = JwtTokenService::new(JwtConfig::from_env());
    let token_provider: Arc<dyn TokenProvider + Send + Sync> = Arc::new(jwt_service);
    let blacklist: Arc<dyn SessionBlacklist + Send + Sync> =
        Arc::new(RedisSessionBlacklist::new(Arc::clone(&redis_arc)));
    let password_hasher: Arc<dyn PasswordHasher + Send + Sync> =
        Arc::new(Argon2Hasher::from_env());

    let user_repo = UserRepositoryPostgres::new(Arc::clone(&db_arc));
    let user_query = UserQueryPostgres::new(Arc::clone(&db_arc));
    let founder_repo = FounderRepositoryPostgres::new(Arc::clone(&db_arc));
    let founder_query = FounderQueryPostgres::new(Arc::clone(&db_arc));
    let vc_repo = VcRepositoryPostgres::new(Arc::clone(&db_arc));
    let vc_query = VcQueryPostgres::new(Arc::clone(&db_arc));
    let vote_repo = VoteRepositoryPostgres::new(Arc::clone(&db_arc));
    let submission_repo = EmailSubmissionRepositoryPostgres::new(Arc::clone(&db_arc));
    let cold_investor_query = ColdInvestorQueryPostgres::new(Arc::clone(&db_arc));
    let cold_investor_repo = ColdInvestorRepositoryPostgres::new(Arc::clone(&db_arc));
    let vc_request_repo = VcRequestRepositoryPostgres::new(Arc::clone(&db_arc));
    let payment_repo = PaymentRepositoryPostgres::new(Arc::clone(&db_arc));

    let stripe = StripeGateway::new(StripeConfig::from_env())
        .expect("Failed to build Stripe client");
    let intro_generator = OpenAiIntroGenerator::new(OpenAiConfig::from_env())
        .expect("Failed to build OpenAI client");
    let airtable = AirtableDirectorySource::new(AirtableConfig::from_env())
        .expect("Failed to build Airtable client");

    let founders_arc = Arc::new(founder_repo.clone());
    let vcs_arc = Arc::new(vc_query.clone());
    let unlocks_arc = Arc::new(payment_repo.clone());

    // Use cases
    let auth = AuthUseCases {
        register: Arc::new(RegisterUserUseCase::new(
            user_repo.clone(),
            Arc::clone(&password_hasher),
        )),
        login: Arc::new(LoginUserUseCase::new(
            user_query.clone(),
            Arc::clone(&password_hasher),
            Arc::clone(&token_provider),
        )),
        logout: Arc::new(LogoutUseCase::new(Arc::clone(&blacklist))),
        fetch_profile: Arc::new(FetchUserProfileService::new(user_query.clone())),
        update_profile: Arc::new(UpdateUserProfileService::new(user_repo.clone())),
        delete_account: Arc::new(DeleteAccountUseCase::new(user_repo, Arc::clone(&blacklist))),
        list_users: Arc::new(ListUsersService::new(user_query.clone())),
    };

    let founder = FounderUseCases {
        get_mine: Arc::new(GetMyFounderService::new(founder_repo.clone())),
        patch_mine: Arc::new(PatchMyFounderService::new(founder_repo.clone())),
        list_scout: Arc::new(ListScoutProjectsService::new(founder_query.clone())),
        get_scout: Arc::new(GetScoutProjectService::new(founder_query.clone())),
    };

    let vc = VcUseCases {
        create: Arc::new(CreateVcService::new(vc_repo.clone())),
        list: Arc::new(ListVcsService::new(vc_query.clone())),
        get: Arc::new(GetVcService::new(vc_query.clone())),
        get_mine: Arc::new(GetMyVcService::new(vc_query.clone())),
        patch_mine: Arc::new(PatchMyVcService::new(vc_repo.clone())),
        get_contact: Arc::new(GetVcContactService::new(
            vcs_arc.clone(),
            founders_arc.clone(),
            unlocks_arc.clone(),
        )),
        list_unlocked: Arc::new(ListUnlockedVcsService::new(
            vcs_arc.clone(),
            founders_arc.clone(),
            unlocks_arc.clone(),
        )),
        verify: Arc::new(VerifyVcService::new(vc_repo.clone())),
        list_all: Arc::new(ListAllVcsService::new(vc_query.clone())),
        review_pending: Arc::new(ReviewPendingChangesService::new(vc_repo)),
    };

    let founder_query_arc = Arc::new(founder_query);
    let vote = VoteUseCases {
        cast: Arc::new(CastVoteService::new(
            vote_repo.clone(),
            founder_query_arc.clone(),
        )),
        remove: Arc::new(RemoveVoteService::new(vote_repo.clone())),
        status: Arc::new(VoteStatusService::new(vote_repo, founder_query_arc)),
    };

    let email_gate = EmailGateUseCases {
        submit: Arc::new(SubmitEmailService::new(submission_repo.clone())),
        check: Arc::new(CheckAccessService::new(submission_repo.clone())),
    };

    let cold_investor = ColdInvestorUseCases {
        list: Arc::new(ListColdInvestorsService::new(cold_investor_query.clone())),
        create_investor: Arc::new(CreateColdInvestorService::new(cold_investor_repo.clone())),
        create_decision_maker: Arc::new(CreateDecisionMakerService::new(
            cold_investor_repo.clone(),
        )),
    };

    let vc_request = VcRequestUseCases {
        my_stats: Arc::new(GetMyRequestStatsService::new(
            vc_request_repo.clone(),
            vcs_arc.clone(),
        )),
    };

    let payment_ports = PaymentPorts {
        payments: Arc::new(payment_repo.clone()),
        unlocks: unlocks_arc,
        gateway: Arc::new(stripe),
        intro_templates: Arc::new(intro_generator),
        founders: founders_arc.clone(),
        vcs: vcs_arc,
        cold_investors: Arc::new(cold_investor_query),
        decision_maker_unlocks: Arc::new(cold_investor_repo),
        vc_requests: Arc::new(vc_request_repo),
    };
    let payment = PaymentUseCases {
        create_intent: Arc::new(CreatePaymentIntentService::new(
            payment_ports.clone(),
            config.pricing.clone(),
        )),
        confirm: Arc::new(ConfirmPaymentService::new(payment_ports)),
        list_mine: Arc::new(ListMyPaymentsService::new(payment_repo, founders_arc)),
    };

    let directory = DirectoryUseCases {
        get: Arc::new(GetDirectoryService::new(airtable, Arc::new(submission_repo))),
    };

    let admin_users: Arc<dyn UserQuery + Send + Sync> = Arc::new(user_query);
    let state = AppState {
        auth,
        founder,
        vc,
        vote,
        email_gate,
        cold_investor,
        vc_request,
        payment,
        directory,
        admin_guard: AdminGuard::new(admin_users),
        secure_cookies: config.secure_cookies(),
    };

    let openapi = crate::api::openapi::ApiDoc::openapi();
    let db_for_server = Arc::clone(&db_arc);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider)))
            .app_data(web::Data::new(Arc::clone(&blacklist)))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .app_data(web::Data::new(Arc::clone(&redis_arc)))
            .app_data(custom_json_config())
            .app_data(custom_query_config())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi.clone()),
            )
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    use crate::modules::auth::adapter::incoming::web::routes as auth;
    use crate::modules::cold_investor::adapter::incoming::web::routes as cold_investor;
    use crate::modules::directory::adapter::incoming::web::routes as directory;
    use crate::modules::email_gate::adapter::incoming::web::routes as email_gate;
    use crate::modules::founder::adapter::incoming::web::routes as founder;
    use crate::modules::payment::adapter::incoming::web::routes as payment;
    use crate::modules::vc::adapter::incoming::web::routes as vc;
    use crate::modules::vc_request::adapter::incoming::web::routes as vc_request;
    use crate::modules::vote::adapter::incoming::web::routes as vote;

    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth
    cfg.service(auth::register_user_handler);
    cfg.service(auth::login_user_handler);
    cfg.service(auth::logout_user_handler);
    cfg.service(auth::get_user_profile_handler);
    cfg.service(auth::update_user_profile_handler);
    cfg.service(auth::delete_account_handler);
    // Founders and Scout
    cfg.service(founder::get_my_founder_handler);
    cfg.service(founder::patch_my_founder_handler);
    cfg.service(founder::list_scout_projects_handler);
    cfg.service(founder::get_scout_project_handler);
    cfg.service(vote::cast_vote_handler);
    cfg.service(vote::remove_vote_handler);
    cfg.service(vote::vote_status_handler);
    // VCs: literal segments before /api/vcs/{id}
    cfg.service(vc::get_my_vc_handler);
    cfg.service(vc::patch_my_vc_handler);
    cfg.service(vc::list_unlocked_vcs_handler);
    cfg.service(vc_request::get_my_request_stats_handler);
    cfg.service(vc::create_vc_handler);
    cfg.service(vc::list_vcs_handler);
    cfg.service(vc::get_vc_contact_handler);
    cfg.service(vc::get_vc_handler);
    // Payments
    cfg.service(payment::create_payment_intent_handler);
    cfg.service(payment::confirm_payment_handler);
    cfg.service(payment::list_my_payments_handler);
    // Email gate, directory, cold investors
    cfg.service(email_gate::submit_email_handler);
    cfg.service(email_gate::check_access_handler);
    cfg.service(directory::get_directory_handler);
    cfg.service(cold_investor::list_cold_investors_handler);
    // Admin
    cfg.service(auth::list_users_handler);
    cfg.service(vc::admin_list_vcs_handler);
    cfg.service(vc::admin_verify_vc_handler);
    cfg.service(vc::admin_review_changes_handler);
    cfg.service(cold_investor::admin_create_cold_investor_handler);
    cfg.service(cold_investor::admin_create_decision_maker_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
