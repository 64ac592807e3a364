use chrono::{NaiveDateTime, SubsecRound, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use validator::ValidateLength;

use crate::domain::AggregateRoot;
use crate::domain::types::CategoryId;
use crate::domain::validation::{Notification, ValidationError};

pub const NAME_MIN_LENGTH: u64 = 3;
pub const NAME_MAX_LENGTH: u64 = 255;

/// Current UTC time at the microsecond precision the store keeps.
fn current_timestamp() -> NaiveDateTime {
    Utc::now().naive_utc().trunc_subsecs(6)
}

/// A timestamp strictly after `previous`, normally the current time.
fn next_timestamp(previous: NaiveDateTime) -> NaiveDateTime {
    let now = current_timestamp();
    if now > previous {
        now
    } else {
        previous + TimeDelta::microseconds(1)
    }
}

/// Catalog category aggregate.
///
/// `active` and `deleted_at` move in lockstep: a category is active iff it
/// carries no deletion timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    id: CategoryId,
    name: Option<String>,
    description: Option<String>,
    active: bool,
    created_at: NaiveDateTime,
    updated_at: NaiveDateTime,
    deleted_at: Option<NaiveDateTime>,
}

impl Category {
    /// Creates a category with a fresh identifier. Input is not validated here.
    pub fn new_category(name: Option<String>, description: Option<String>, active: bool) -> Self {
        let now = current_timestamp();
        Self {
            id: CategoryId::unique(),
            name,
            description,
            active,
            created_at: now,
            updated_at: now,
            deleted_at: if active { None } else { Some(now) },
        }
    }

    /// Rebuilds a category from previously stored state.
    pub fn restore(
        id: CategoryId,
        name: Option<String>,
        description: Option<String>,
        active: bool,
        created_at: NaiveDateTime,
        updated_at: NaiveDateTime,
        deleted_at: Option<NaiveDateTime>,
    ) -> Self {
        Self {
            id,
            name,
            description,
            active,
            created_at,
            updated_at,
            deleted_at,
        }
    }

    pub fn update(
        &mut self,
        name: Option<String>,
        description: Option<String>,
        active: bool,
    ) -> &mut Self {
        if active {
            self.activate();
        } else {
            self.deactivate();
        }
        self.name = name;
        self.description = description;
        self.updated_at = next_timestamp(self.updated_at);
        self
    }

    pub fn activate(&mut self) -> &mut Self {
        self.deleted_at = None;
        self.active = true;
        self.updated_at = next_timestamp(self.updated_at);
        self
    }

    /// Marks the category inactive. An existing deletion timestamp is kept.
    pub fn deactivate(&mut self) -> &mut Self {
        if self.deleted_at.is_none() {
            self.deleted_at = Some(current_timestamp());
        }
        self.active = false;
        self.updated_at = next_timestamp(self.updated_at);
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn created_at(&self) -> NaiveDateTime {
        self.created_at
    }

    pub fn updated_at(&self) -> NaiveDateTime {
        self.updated_at
    }

    pub fn deleted_at(&self) -> Option<NaiveDateTime> {
        self.deleted_at
    }
}

impl AggregateRoot for Category {
    type Id = CategoryId;

    fn id(&self) -> &CategoryId {
        &self.id
    }

    fn validate(&self, notification: &mut Notification) {
        CategoryValidator::new(self).validate(notification);
    }
}

/// Rule set applied to a [`Category`].
pub struct CategoryValidator<'a> {
    category: &'a Category,
}

impl<'a> CategoryValidator<'a> {
    pub fn new(category: &'a Category) -> Self {
        Self { category }
    }

    /// Appends every violation found; never stops early across fields.
    pub fn validate(&self, notification: &mut Notification) {
        notification.capture(|| self.check_name_constraints());
    }

    fn check_name_constraints(&self) -> Result<(), ValidationError> {
        let Some(name) = self.category.name() else {
            return Err(ValidationError::new("'name' should not be null"));
        };

        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::new("'name' should not be empty"));
        }

        if !trimmed.validate_length(Some(NAME_MIN_LENGTH), Some(NAME_MAX_LENGTH), None) {
            return Err(ValidationError::new(format!(
                "'name' must be between {NAME_MIN_LENGTH} and {NAME_MAX_LENGTH} characters"
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validate(category: &Category) -> Notification {
        let mut notification = Notification::new();
        category.validate(&mut notification);
        notification
    }

    fn some(value: &str) -> Option<String> {
        Some(value.to_string())
    }

    #[test]
    fn new_active_category_has_no_deleted_at() {
        let category =
            Category::new_category(some("Filmes"), some("A categoria mais assistida"), true);

        assert!(category.is_active());
        assert!(category.deleted_at().is_none());
        assert_eq!(category.created_at(), category.updated_at());
        assert_eq!(category.name(), Some("Filmes"));
        assert!(validate(&category).is_empty());
    }

    #[test]
    fn new_inactive_category_has_deleted_at() {
        let category = Category::new_category(some("Filmes"), None, false);

        assert!(!category.is_active());
        assert!(category.deleted_at().is_some());
    }

    #[test]
    fn null_name_yields_single_error() {
        let category = Category::new_category(None, some("desc"), true);

        let notification = validate(&category);

        assert_eq!(notification.len(), 1);
        assert_eq!(
            notification.first_error().unwrap().message(),
            "'name' should not be null"
        );
    }

    #[test]
    fn blank_name_is_rejected() {
        let category = Category::new_category(some("   "), None, true);

        let notification = validate(&category);

        assert_eq!(notification.len(), 1);
        assert_eq!(
            notification.first_error().unwrap().message(),
            "'name' should not be empty"
        );
    }

    #[test]
    fn name_length_bounds_are_inclusive() {
        let shortest = Category::new_category(some("abc"), None, true);
        let longest = Category::new_category(Some("a".repeat(255)), None, true);
        assert!(validate(&shortest).is_empty());
        assert!(validate(&longest).is_empty());

        let too_short = Category::new_category(some("ab "), None, true);
        let too_long = Category::new_category(Some("a".repeat(256)), None, true);
        for category in [too_short, too_long] {
            let notification = validate(&category);
            assert_eq!(notification.len(), 1);
            assert_eq!(
                notification.first_error().unwrap().message(),
                "'name' must be between 3 and 255 characters"
            );
        }
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        let category = Category::new_category(some("ção"), None, true);
        assert!(validate(&category).is_empty());
    }

    #[test]
    fn deactivate_is_idempotent_for_deleted_at() {
        let mut category = Category::new_category(some("Filmes"), None, true);

        category.deactivate();
        let first_deleted_at = category.deleted_at();
        let first_updated_at = category.updated_at();
        category.deactivate();

        assert!(first_deleted_at.is_some());
        assert_eq!(category.deleted_at(), first_deleted_at);
        assert!(category.updated_at() > first_updated_at);
        assert!(!category.is_active());
    }

    #[test]
    fn activate_clears_deleted_at() {
        let mut category = Category::new_category(some("Filmes"), None, false);
        let before = category.updated_at();

        category.activate();

        assert!(category.is_active());
        assert!(category.deleted_at().is_none());
        assert!(category.updated_at() > before);
    }

    #[test]
    fn update_mutates_in_place_and_advances_updated_at() {
        let mut category = Category::new_category(some("Film"), None, true);
        let id = category.id().clone();
        let created_at = category.created_at();
        let before = category.updated_at();

        let updated = category.update(some("Filmes"), some("A categoria mais assistida"), false);

        assert_eq!(updated.name(), Some("Filmes"));
        assert!(!updated.is_active());
        assert!(updated.deleted_at().is_some());
        assert_eq!(category.id(), &id);
        assert_eq!(category.created_at(), created_at);
        assert!(category.updated_at() > before);
        assert_eq!(category.description(), Some("A categoria mais assistida"));
    }

    #[test]
    fn update_to_active_clears_deleted_at() {
        let mut category = Category::new_category(some("Filmes"), None, false);

        category.update(some("Filmes"), None, true);

        assert!(category.is_active());
        assert!(category.deleted_at().is_none());
    }

    #[test]
    fn update_accepts_invalid_name_and_leaves_rejection_to_validation() {
        let mut category = Category::new_category(some("Filmes"), None, true);

        category.update(None, None, true);

        assert!(category.name().is_none());
        assert_eq!(validate(&category).len(), 1);
    }

    #[test]
    fn next_timestamp_is_strictly_after_future_previous() {
        let future = current_timestamp() + TimeDelta::seconds(60);
        assert!(next_timestamp(future) > future);
    }
}
