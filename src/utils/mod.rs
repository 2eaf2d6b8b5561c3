//! Utility modules for the casework service
//!
//! - **auth**: password hashing
//! - **error**: crate-wide error type and HTTP mapping
//! - **logging**: tracing subscriber setup

pub mod auth;
pub mod error;
pub mod logging;

/// Check if a string looks like an email address
pub fn is_valid_email(email: &str) -> bool {
    let email_regex = regex::Regex::new(r#"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$"#);
    email_regex.map(|re| re.is_match(email)).unwrap_or(false)
}

/// Trim a user-supplied name field, rejecting blanks
pub fn required_text(field: &str, value: &str) -> error::Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(error::CaseworkError::validation(format!(
            "{} is required",
            field
        )));
    }
    Ok(trimmed.to_string())
}
