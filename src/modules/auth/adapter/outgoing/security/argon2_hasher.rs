use argon2::{
    password_hash::{
        Error as PasswordHashError, PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString,
    },
    Algorithm, Argon2, Params, Version,
};
use async_trait::async_trait;
use rand_core::OsRng;

use crate::auth::application::ports::outgoing::password_hasher::{
    HashError, PasswordHasher as HasherTrait,
};

/// argon2id hasher. Hashing and verification run on the blocking pool.
#[derive(Clone)]
pub struct Argon2Hasher {
    params: Params,
}

impl Argon2Hasher {
    pub fn with_params(memory_kib: u32, iterations: u32, parallelism: u32) -> Self {
        let params = Params::new(memory_kib, iterations, parallelism, None)
            .unwrap_or_else(|e| panic!("Invalid Argon2 params: {e}"));

        Self { params }
    }

    /// Cheap parameters for local development and tests.
    pub fn fast() -> Self {
        Self::with_params(4 * 1024, 1, 1)
    }

    /// Reads ARGON2_MEMORY_KIB / ARGON2_ITERATIONS / ARGON2_PARALLELISM, defaulting to 19 MiB, t=2, p=1.
    pub fn from_env() -> Self {
        fn read(key: &str, default: u32) -> u32 {
            match std::env::var(key) {
                Ok(v) => v
                    .parse()
                    .unwrap_or_else(|_| panic!("{key} must be a positive integer")),
                Err(_) => default,
            }
        }

        Self::with_params(
            read("ARGON2_MEMORY_KIB", 19 * 1024),
            read("ARGON2_ITERATIONS", 2),
            read("ARGON2_PARALLELISM", 1),
        )
    }
}

#[async_trait]
impl HasherTrait for Argon2Hasher {
    async fn hash_password(&self, password: &str) -> Result<String, HashError> {
        let password = password.to_string();
        let params = self.params.clone();

        tokio::task::spawn_blocking(move || {
            let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);
            let salt = SaltString::generate(&mut OsRng);

            argon2
                .hash_password(password.as_bytes(), &salt)
                .map(|hash| hash.to_string())
                .map_err(|_| HashError::HashFailed)
        })
        .await
        .map_err(|_| HashError::TaskFailed)?
    }

    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError> {
        let password = password.to_string();
        let hash = hash.to_string();

        tokio::task::spawn_blocking(move || {
            let parsed_hash = PasswordHash::new(&hash).map_err(|_| HashError::VerifyFailed)?;

            // Cost parameters come from the PHC string itself.
            match Argon2::default().verify_password(password.as_bytes(), &parsed_hash) {
                Ok(_) => Ok(true),
                Err(PasswordHashError::Password) => Ok(false),
                Err(_) => Err(HashError::VerifyFailed),
            }
        })
        .await
        .map_err(|_| HashError::TaskFailed)?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_hash_then_verify() {
        let hasher = Argon2Hasher::fast();

        let hash = hasher.hash_password("pitchdeck42").await.unwrap();
        assert!(hash.starts_with("$argon2id$"));

        assert!(hasher.verify_password("pitchdeck42", &hash).await.unwrap());
        assert!(!hasher.verify_password("pitchdeck43", &hash).await.unwrap());
    }

    #[tokio::test]
    async fn test_hashes_are_salted() {
        let hasher = Argon2Hasher::fast();

        let a = hasher.hash_password("same-password1").await.unwrap();
        let b = hasher.hash_password("same-password1").await.unwrap();
        assert_ne!(a, b);
    }

    #[tokio::test]
    async fn test_verify_rejects_garbage_hash() {
        let hasher = Argon2Hasher::fast();

        let result = hasher.verify_password("whatever1", "not-a-phc-string").await;
        assert!(matches!(result, Err(HashError::VerifyFailed)));
    }

    #[tokio::test]
    async fn test_verify_with_hash_from_different_params() {
        let strong = Argon2Hasher::with_params(8 * 1024, 2, 1);
        let hash = strong.hash_password("cross-check9").await.unwrap();

        assert!(Argon2Hasher::fast()
            .verify_password("cross-check9", &hash)
            .await
            .unwrap());
    }
}
