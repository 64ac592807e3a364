//! Inputs accepted by the category use cases.

use serde::Deserialize;

/// Request to create a category.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateCategoryCommand {
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(default = "active_by_default")]
    pub active: bool,
}

impl CreateCategoryCommand {
    pub fn with(name: Option<String>, description: Option<String>, active: bool) -> Self {
        Self {
            name,
            description,
            active,
        }
    }
}

/// Request to replace the mutable fields of an existing category.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UpdateCategoryCommand {
    pub id: String,
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(default = "active_by_default")]
    pub active: bool,
}

impl UpdateCategoryCommand {
    pub fn with(
        id: impl Into<String>,
        name: Option<String>,
        description: Option<String>,
        active: bool,
    ) -> Self {
        Self {
            id: id.into(),
            name,
            description,
            active,
        }
    }
}

fn active_by_default() -> bool {
    true
}
