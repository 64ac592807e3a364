use crate::commands::{CreateCategoryCommand, UpdateCategoryCommand};
use crate::domain::AggregateRoot;
use crate::domain::category::Category;
use crate::domain::pagination::Pagination;
use crate::domain::types::CategoryId;
use crate::domain::validation::{Notification, ValidationError};
use crate::dto::categories::{
    CategoryListOutput, CategoryOutput, CreateCategoryOutput, UpdateCategoryOutput,
};
use crate::repository::{CategoryReader, CategorySearchQuery, CategoryWriter};

use super::{Outcome, ServiceError, ServiceResult};

const CATEGORY: &str = "Category";

fn validate(category: &Category) -> Notification {
    let mut notification = Notification::new();
    category.validate(&mut notification);
    notification
}

/// Validates and stores a new category.
///
/// Validation failures come back as `Ok(Err(notification))` without touching
/// the store. Store failures are returned unchanged as `ServiceError::Repository`.
pub fn create_category<R>(
    command: CreateCategoryCommand,
    repo: &R,
) -> ServiceResult<Outcome<CreateCategoryOutput>>
where
    R: CategoryWriter,
{
    let category = Category::new_category(command.name, command.description, command.active);

    let notification = validate(&category);
    if notification.has_errors() {
        log::warn!("Rejected new category: {notification}");
        return Ok(Err(notification));
    }

    match repo.create(&category) {
        Ok(stored) => {
            log::info!("Created category {}", stored.id());
            Ok(Ok(CreateCategoryOutput::from(&stored)))
        }
        Err(e) => {
            log::error!("Failed to create category: {e}");
            Err(e.into())
        }
    }
}

/// Applies an update to an existing category.
///
/// A missing category is a `ServiceError::NotFound`. Unlike the other use
/// cases, a store failure while writing is reported as a single-error
/// notification instead of an error.
pub fn update_category<R>(
    command: UpdateCategoryCommand,
    repo: &R,
) -> ServiceResult<Outcome<UpdateCategoryOutput>>
where
    R: CategoryReader + CategoryWriter,
{
    let id = CategoryId::from(command.id);

    let mut category = match repo.find_by_id(&id) {
        Ok(Some(category)) => category,
        Ok(None) => return Err(ServiceError::not_found(CATEGORY, &id)),
        Err(e) => {
            log::error!("Failed to get category {id}: {e}");
            return Err(e.into());
        }
    };

    category.update(command.name, command.description, command.active);

    let notification = validate(&category);
    if notification.has_errors() {
        log::warn!("Rejected update of category {id}: {notification}");
        return Ok(Err(notification));
    }

    match repo.update(&category) {
        Ok(stored) => {
            log::info!("Updated category {id}");
            Ok(Ok(UpdateCategoryOutput::from(&stored)))
        }
        Err(e) => {
            log::error!("Failed to update category {id}: {e}");
            Ok(Err(Notification::from_error(ValidationError::new(
                e.to_string(),
            ))))
        }
    }
}

/// Deletes a category. Unknown identifiers succeed without side effects.
pub fn delete_category<R>(id: &str, repo: &R) -> ServiceResult<()>
where
    R: CategoryWriter,
{
    let id = CategoryId::from(id);
    match repo.delete_by_id(&id) {
        Ok(()) => {
            log::info!("Deleted category {id}");
            Ok(())
        }
        Err(e) => {
            log::error!("Failed to delete category {id}: {e}");
            Err(e.into())
        }
    }
}

pub fn get_category_by_id<R>(id: &str, repo: &R) -> ServiceResult<CategoryOutput>
where
    R: CategoryReader,
{
    let id = CategoryId::from(id);
    match repo.find_by_id(&id) {
        Ok(Some(category)) => Ok(CategoryOutput::from(category)),
        Ok(None) => Err(ServiceError::not_found(CATEGORY, &id)),
        Err(e) => {
            log::error!("Failed to get category {id}: {e}");
            Err(e.into())
        }
    }
}

pub fn list_categories<R>(
    query: &CategorySearchQuery,
    repo: &R,
) -> ServiceResult<Pagination<CategoryListOutput>>
where
    R: CategoryReader,
{
    match repo.find_all(query) {
        Ok(page) => {
            log::debug!(
                "Listed {} of {} categories (page {})",
                page.items.len(),
                page.total,
                page.current_page
            );
            Ok(page.map(CategoryListOutput::from))
        }
        Err(e) => {
            log::error!("Failed to list categories: {e}");
            Err(e.into())
        }
    }
}
