use chrono::NaiveDateTime;
use serde::Serialize;

use crate::domain::AggregateRoot;
use crate::domain::category::Category;

/// Full projection of a category.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryOutput {
    pub id: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub deleted_at: Option<NaiveDateTime>,
}

impl From<&Category> for CategoryOutput {
    fn from(value: &Category) -> Self {
        Self {
            id: value.id().to_string(),
            name: value.name().map(str::to_string),
            description: value.description().map(str::to_string),
            active: value.is_active(),
            created_at: value.created_at(),
            updated_at: value.updated_at(),
            deleted_at: value.deleted_at(),
        }
    }
}

impl From<Category> for CategoryOutput {
    fn from(value: Category) -> Self {
        Self::from(&value)
    }
}

/// Listing row for a category.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryListOutput {
    pub id: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub active: bool,
    pub created_at: NaiveDateTime,
    pub deleted_at: Option<NaiveDateTime>,
}

impl From<Category> for CategoryListOutput {
    fn from(value: Category) -> Self {
        Self {
            id: value.id().to_string(),
            name: value.name().map(str::to_string),
            description: value.description().map(str::to_string),
            active: value.is_active(),
            created_at: value.created_at(),
            deleted_at: value.deleted_at(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateCategoryOutput {
    pub id: String,
}

impl From<&Category> for CreateCategoryOutput {
    fn from(value: &Category) -> Self {
        Self {
            id: value.id().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateCategoryOutput {
    pub id: String,
}

impl From<&Category> for UpdateCategoryOutput {
    fn from(value: &Category) -> Self {
        Self {
            id: value.id().to_string(),
        }
    }
}
