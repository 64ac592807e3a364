//! Error conversion glue between layers.
//!
//! The domain layer must not depend on service/repository error types, so the
//! `From` implementations bridging them live here.

use crate::domain::types::TypeConstraintError;
use crate::forms::categories::ListCategoriesFormError;
use crate::repository::RepositoryError;
use crate::services::ServiceError;

impl From<TypeConstraintError> for ServiceError {
    fn from(val: TypeConstraintError) -> Self {
        ServiceError::TypeConstraint(val.to_string())
    }
}

impl From<TypeConstraintError> for RepositoryError {
    fn from(val: TypeConstraintError) -> Self {
        RepositoryError::ValidationError(val.to_string())
    }
}

impl From<ListCategoriesFormError> for ServiceError {
    fn from(val: ListCategoriesFormError) -> Self {
        ServiceError::Form(val.to_string())
    }
}
