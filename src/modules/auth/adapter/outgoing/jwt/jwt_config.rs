use std::env;

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    pub issuer: String,
    /// Session lifetime in seconds
    pub session_expiry: i64,
}

impl JwtConfig {
    /// Load JWT configuration from environment variables
    pub fn from_env() -> Self {
        let secret_key = env::var("JWT_SECRET").expect("JWT_SECRET must be set");

        // HS256 needs at least 32 bytes of key material
        if secret_key.len() < 32 {
            panic!("JWT_SECRET must be at least 32 characters long for HS256 algorithm");
        }

        let session_expiry = env::var("JWT_SESSION_EXPIRY")
            .unwrap_or_else(|_| "604800".to_string())
            .parse::<i64>()
            .unwrap_or_else(|_| panic!("Invalid JWT_SESSION_EXPIRY value"));

        if session_expiry <= 0 || session_expiry > 30 * 86400 {
            panic!("JWT_SESSION_EXPIRY must be between 1 second and 30 days");
        }

        let issuer = env::var("JWT_ISSUER").unwrap_or_else(|_| "vc-market".to_string());

        Self {
            secret_key,
            issuer,
            session_expiry,
        }
    }
}
