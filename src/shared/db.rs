use sea_orm::{DbErr, SqlErr};

/// True when the database rejected a write on a unique index.
pub fn is_unique_violation(e: &DbErr) -> bool {
    if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) {
        return true;
    }
    let msg = e.to_string().to_lowercase();
    msg.contains("23505") || msg.contains("duplicate key") || msg.contains("unique constraint")
}

/// True when a write referenced a parent row that does not exist.
pub fn is_foreign_key_violation(e: &DbErr) -> bool {
    if matches!(e.sql_err(), Some(SqlErr::ForeignKeyConstraintViolation(_))) {
        return true;
    }
    let msg = e.to_string().to_lowercase();
    msg.contains("23503") || msg.contains("foreign key constraint")
}

/// Escapes `LIKE`/`ILIKE` wildcards so user text matches literally under the
/// default backslash escape.
pub fn escape_like(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
