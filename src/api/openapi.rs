use crate::api::schemas::{ErrorDetail, ErrorResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::modules::auth::adapter::incoming::web::routes as auth_routes;
use crate::modules::cold_investor::adapter::incoming::web::routes as cold_investor_routes;
use crate::modules::directory::adapter::incoming::web::routes as directory_routes;
use crate::modules::email_gate::adapter::incoming::web::routes as email_gate_routes;
use crate::modules::founder::adapter::incoming::web::routes as founder_routes;
use crate::modules::payment::adapter::incoming::web::routes as payment_routes;
use crate::modules::vc::adapter::incoming::web::routes as vc_routes;
use crate::modules::vc_request::adapter::incoming::web::routes as vc_request_routes;
use crate::modules::vote::adapter::incoming::web::routes as vote_routes;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "VC Market API",
        version = "1.0.0",
        description = "Founder and investor marketplace: listings, paid unlocks, Scout voting and the cold investor catalog",
    ),
    paths(
        // Auth
        auth_routes::register_user::register_user_handler,
        auth_routes::login_user::login_user_handler,
        auth_routes::logout_user::logout_user_handler,
        auth_routes::fetch_user::get_user_profile_handler,
        auth_routes::update_profile::update_user_profile_handler,
        auth_routes::delete_account::delete_account_handler,

        // Founders and Scout
        founder_routes::get_my_founder::get_my_founder_handler,
        founder_routes::patch_my_founder::patch_my_founder_handler,
        founder_routes::list_scout_projects::list_scout_projects_handler,
        founder_routes::get_scout_project::get_scout_project_handler,

        // Votes
        vote_routes::cast_vote::cast_vote_handler,
        vote_routes::remove_vote::remove_vote_handler,
        vote_routes::vote_status::vote_status_handler,

        // VCs
        vc_routes::create_vc::create_vc_handler,
        vc_routes::list_vcs::list_vcs_handler,
        vc_routes::get_vc::get_vc_handler,
        vc_routes::get_my_vc::get_my_vc_handler,
        vc_routes::patch_my_vc::patch_my_vc_handler,
        vc_routes::get_vc_contact::get_vc_contact_handler,
        vc_routes::list_unlocked_vcs::list_unlocked_vcs_handler,
        vc_request_routes::get_my_request_stats::get_my_request_stats_handler,

        // Admin
        vc_routes::admin_verify_vc::admin_verify_vc_handler,
        vc_routes::admin_review_changes::admin_review_changes_handler,
        cold_investor_routes::admin_create_cold_investor::admin_create_cold_investor_handler,
        cold_investor_routes::admin_create_decision_maker::admin_create_decision_maker_handler,

        // Payments
        payment_routes::create_payment_intent::create_payment_intent_handler,
        payment_routes::confirm_payment::confirm_payment_handler,
        payment_routes::list_my_payments::list_my_payments_handler,

        // Email gate, directory and cold investors
        email_gate_routes::submit_email::submit_email_handler,
        email_gate_routes::check_access::check_access_handler,
        directory_routes::get_directory::get_directory_handler,
        cold_investor_routes::list_cold_investors::list_cold_investors_handler,
    ),
    components(
        schemas(
            ErrorResponse,
            ErrorDetail,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Accounts and sessions"),
        (name = "founders", description = "Founder profiles"),
        (name = "scout", description = "Public project board and voting"),
        (name = "vcs", description = "Investor listings and unlocked contacts"),
        (name = "admin", description = "Verification and catalog management"),
        (name = "payments", description = "Card payments and fulfilment"),
        (name = "email-gate", description = "Email-gated access to free resources"),
        (name = "directory", description = "Public VC directory"),
        (name = "cold-investors", description = "Fund catalog with paid decision-maker contacts"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Session token from /api/auth/login"))
                        .build(),
                ),
            )
        }
    }
}
