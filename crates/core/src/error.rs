use crate::validation::ValidationErrors;

/// Domain-level errors shared across the backend crates.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The top-level request object itself was absent.
    #[error("Empty payload")]
    EmptyPayload,

    /// One or more field-level validation failures.
    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),

    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<ValidationErrors> for CoreError {
    fn from(errors: ValidationErrors) -> Self {
        CoreError::Validation(errors)
    }
}
