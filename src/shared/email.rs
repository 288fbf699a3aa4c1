use email_address::EmailAddress;

/// Trims, lower-cases and validates an address.
pub fn normalize_email(raw: &str) -> Result<String, String> {
    let email = raw.trim().to_lowercase();
    if email.is_empty() {
        return Err("email is required".to_string());
    }
    if !EmailAddress::is_valid(&email) {
        return Err(format!("'{}' is not a valid email", email));
    }
    Ok(email)
}
