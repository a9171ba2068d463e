//! Field-level input validators for the HTTP boundary.
//!
//! Each rule returns `Ok(())` or a [`FieldError`] naming the offending field.
//! Handlers collect the failures into `CoreError::Validation` so the API can
//! surface a structured error list instead of a single opaque message.
//! Email and URL syntax checks delegate to the `validator` crate.

use serde::Serialize;
use validator::{ValidateEmail, ValidateUrl};

/// Minimum display-name length at registration.
pub const MIN_NAME_LENGTH: usize = 3;

/// Minimum password length at registration and login.
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Earliest valid release year (the year of the first film).
pub const MIN_RELEASE_YEAR: i32 = 1888;

/// A single validation failure, serialized into the API's error list.
#[derive(Debug, Clone, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

pub fn validate_name(name: &str) -> Result<(), FieldError> {
    if name.trim().chars().count() < MIN_NAME_LENGTH {
        return Err(FieldError::new(
            "name",
            format!("Name must be at least {MIN_NAME_LENGTH} characters long"),
        ));
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), FieldError> {
    if !email.validate_email() {
        return Err(FieldError::new("email", "Invalid email address"));
    }
    Ok(())
}

pub fn validate_password(password: &str) -> Result<(), FieldError> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(FieldError::new(
            "password",
            format!("Password must be at least {MIN_PASSWORD_LENGTH} characters long"),
        ));
    }
    Ok(())
}

/// Require a non-empty value after trimming.
pub fn validate_required(field: &'static str, value: &str) -> Result<(), FieldError> {
    if value.trim().is_empty() {
        return Err(FieldError::new(field, format!("{} is required", title_case(field))));
    }
    Ok(())
}

pub fn validate_budget(budget: f64) -> Result<(), FieldError> {
    if !(budget > 0.0) {
        return Err(FieldError::new("budget", "Budget must be a positive number"));
    }
    Ok(())
}

pub fn validate_release_year(year: i32) -> Result<(), FieldError> {
    if year < MIN_RELEASE_YEAR {
        return Err(FieldError::new("releaseYear", "Invalid year"));
    }
    Ok(())
}

/// Poster/thumbnail URLs are optional: the empty string is accepted,
/// anything else must parse as a URL.
pub fn validate_url_or_empty(field: &'static str, value: &str) -> Result<(), FieldError> {
    if value.is_empty() || value.validate_url() {
        return Ok(());
    }
    Err(FieldError::new(field, "Must be a valid URL"))
}

fn title_case(field: &str) -> String {
    let mut chars = field.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
