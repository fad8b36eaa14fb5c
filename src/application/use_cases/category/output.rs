use chrono::{DateTime, Utc};

use crate::domain::category::{Category, CategoryId};
use crate::domain::entity::Entity;

/// Read model of a category, shared by get and list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryOutput {
    pub id: CategoryId,
    pub name: Option<String>,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl From<&Category> for CategoryOutput {
    fn from(category: &Category) -> Self {
        Self {
            id: *category.id(),
            name: category.name().map(str::to_owned),
            description: category.description().map(str::to_owned),
            is_active: category.is_active(),
            created_at: category.created_at(),
            updated_at: category.updated_at(),
            deleted_at: category.deleted_at(),
        }
    }
}
