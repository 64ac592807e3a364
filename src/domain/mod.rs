//! Persistence-agnostic domain model.

use crate::domain::validation::Notification;

pub mod category;
pub mod pagination;
pub mod types;
pub mod validation;

/// Capability shared by aggregate roots: a stable identity and self-validation.
pub trait AggregateRoot {
    type Id: Eq;

    fn id(&self) -> &Self::Id;

    /// Appends every rule violation to `notification`.
    fn validate(&self, notification: &mut Notification);
}
