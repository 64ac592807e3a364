use thiserror::Error;

use crate::repository::RepositoryError;

/// Generic error type used by service layer functions.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Requested aggregate was not found.
    #[error("{entity} with ID {id} was not found")]
    NotFound { entity: &'static str, id: String },
    /// The store failed; the original error is kept untouched.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    /// Caller input could not be turned into a constrained domain value.
    #[error("invalid input: {0}")]
    TypeConstraint(String),
    /// A submitted form failed validation.
    #[error("{0}")]
    Form(String),
}

impl ServiceError {
    pub fn not_found(entity: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            entity,
            id: id.to_string(),
        }
    }
}

/// Convenient alias for results returned from service functions.
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Two-armed result of a mutating use case: the output, or every validation error.
pub type Outcome<T> = Result<T, crate::domain::validation::Notification>;
