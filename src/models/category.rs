use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::AggregateRoot;
use crate::domain::category::Category as DomainCategory;
use crate::domain::types::{CategoryId, TypeConstraintError};

/// Diesel model representing the `categories` table.
#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::categories)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Category {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub deleted_at: Option<NaiveDateTime>,
    pub name_search: String,
    pub description_search: Option<String>,
}

/// Insertable form of [`Category`].
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::categories)]
pub struct NewCategory {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub deleted_at: Option<NaiveDateTime>,
    pub name_search: String,
    pub description_search: Option<String>,
}

/// Mutable columns written on update. `None` clears the column.
#[derive(Debug, AsChangeset)]
#[diesel(table_name = crate::schema::categories)]
#[diesel(treat_none_as_null = true)]
pub struct CategoryChanges {
    pub name: String,
    pub description: Option<String>,
    pub active: bool,
    pub updated_at: NaiveDateTime,
    pub deleted_at: Option<NaiveDateTime>,
    pub name_search: String,
    pub description_search: Option<String>,
}

/// Case-folded form of `value` stored alongside it for searching.
pub fn search_key(value: &str) -> String {
    value.to_lowercase()
}

fn required_name(category: &DomainCategory) -> Result<String, TypeConstraintError> {
    category
        .name()
        .map(str::to_string)
        .ok_or(TypeConstraintError::EmptyString("name"))
}

impl From<Category> for DomainCategory {
    fn from(category: Category) -> Self {
        DomainCategory::restore(
            CategoryId::from(category.id),
            Some(category.name),
            category.description,
            category.active,
            category.created_at,
            category.updated_at,
            category.deleted_at,
        )
    }
}

impl TryFrom<&DomainCategory> for NewCategory {
    type Error = TypeConstraintError;

    fn try_from(category: &DomainCategory) -> Result<Self, Self::Error> {
        let name = required_name(category)?;
        Ok(Self {
            id: category.id().as_str().to_string(),
            name_search: search_key(&name),
            name,
            description: category.description().map(str::to_string),
            active: category.is_active(),
            created_at: category.created_at(),
            updated_at: category.updated_at(),
            deleted_at: category.deleted_at(),
            description_search: category.description().map(search_key),
        })
    }
}

impl TryFrom<&DomainCategory> for CategoryChanges {
    type Error = TypeConstraintError;

    fn try_from(category: &DomainCategory) -> Result<Self, Self::Error> {
        let name = required_name(category)?;
        Ok(Self {
            name_search: search_key(&name),
            name,
            description: category.description().map(str::to_string),
            active: category.is_active(),
            updated_at: category.updated_at(),
            deleted_at: category.deleted_at(),
            description_search: category.description().map(search_key),
        })
    }
}
