use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::types::{CategorySortField, PerPage, SortDirection, TypeConstraintError};
use crate::repository::CategorySearchQuery;

/// Raw listing parameters as submitted by a client.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct ListCategoriesForm {
    #[validate(range(max = 1_000_000))]
    pub page: Option<usize>,
    #[validate(range(min = 1, max = 100))]
    pub per_page: Option<usize>,
    pub search: Option<String>,
    #[validate(length(min = 1))]
    pub sort: Option<String>,
    #[validate(length(min = 1))]
    pub dir: Option<String>,
}

#[derive(Debug, Error)]
pub enum ListCategoriesFormError {
    #[error("List categories form validation failed: {0}")]
    Validation(String),
    #[error("List categories form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for ListCategoriesFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for ListCategoriesFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<ListCategoriesForm> for CategorySearchQuery {
    type Error = ListCategoriesFormError;

    fn try_from(value: ListCategoriesForm) -> Result<Self, Self::Error> {
        value.validate()?;

        let per_page = match value.per_page {
            Some(per_page) => PerPage::new(per_page)?,
            None => PerPage::DEFAULT,
        };
        let sort = match value.sort {
            Some(sort) => CategorySortField::try_from(sort)?,
            None => CategorySortField::default(),
        };
        let direction = match value.dir {
            Some(dir) => SortDirection::try_from(dir)?,
            None => SortDirection::default(),
        };

        Ok(CategorySearchQuery::default()
            .paginate(value.page.unwrap_or(0), per_page)
            .search(value.search.unwrap_or_default())
            .sort_by(sort, direction))
    }
}
