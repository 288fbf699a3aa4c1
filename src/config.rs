use std::env;

use crate::modules::payment::application::domain::entities::PricingConfig;

/// Process-level settings read once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: String,
    pub database_url: String,
    pub redis_url: String,
    pub environment: String,
    pub pricing: PricingConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let environment = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

        Self {
            host: env::var("HOST").expect("HOST is not set in .env file"),
            port: env::var("PORT").expect("PORT is not set in .env file"),
            database_url: env::var("DATABASE_URL").expect("DATABASE_URL is not set in .env file"),
            redis_url: env::var("REDIS_URL").expect("REDIS_URL is not set in .env file"),
            environment,
            pricing: PricingConfig::from_env(),
        }
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Session cookies carry `Secure` everywhere except local development.
    pub fn secure_cookies(&self) -> bool {
        self.environment != "development" && self.environment != "test"
    }
}

impl PricingConfig {
    pub fn from_env() -> Self {
        fn price(key: &str, default: i32) -> i32 {
            match env::var(key) {
                Ok(v) => match v.parse::<i32>() {
                    Ok(n) if n > 0 => n,
                    _ => panic!("{key} must be a positive integer"),
                },
                Err(_) => default,
            }
        }

        let defaults = PricingConfig::default();
        Self {
            project_visibility_price: price(
                "PROJECT_VISIBILITY_PRICE",
                defaults.project_visibility_price,
            ),
            decision_maker_unlock_price: price(
                "DECISION_MAKER_UNLOCK_PRICE",
                defaults.decision_maker_unlock_price,
            ),
            currency: env::var("PAYMENT_CURRENCY")
                .map(|c| c.trim().to_lowercase())
                .unwrap_or(defaults.currency),
        }
    }
}
