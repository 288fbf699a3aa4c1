use crate::auth::application::ports::incoming::password_policy::{
    PasswordPolicy, PasswordPolicyError,
};

#[derive(Debug, Clone, Copy, Default)]
pub struct BasicPasswordPolicy;

impl PasswordPolicy for BasicPasswordPolicy {
    fn validate(&self, password: &str) -> Result<(), PasswordPolicyError> {
        let length = password.chars().count();

        if length < 8 {
            return Err(PasswordPolicyError::TooShort);
        }

        if length > 128 {
            return Err(PasswordPolicyError::TooLong);
        }

        let has_letter = password.chars().any(|c| c.is_alphabetic());
        let has_digit = password.chars().any(|c| c.is_ascii_digit());
        if !has_letter || !has_digit {
            return Err(PasswordPolicyError::TooWeak);
        }

        Ok(())
    }
}
