use crate::types::DbId;
use crate::validation::FieldError;

/// Domain error taxonomy.
///
/// Every variant maps to exactly one HTTP status in the API layer:
/// validation and duplicate-key errors to 400, authentication to 401,
/// authorization to 403, missing (or soft-deleted) entities to 404, and
/// everything unexpected to a sanitized 500.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    /// One or more request fields failed validation.
    #[error("Validation failed")]
    Validation(Vec<FieldError>),

    /// A unique key (e.g. email) already exists.
    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Shorthand for a single-field validation failure.
    pub fn invalid(field: &'static str, message: impl Into<String>) -> Self {
        CoreError::Validation(vec![FieldError::new(field, message)])
    }
}
