use chrono::{DateTime, Utc};

use super::validator::CategoryValidator;
use crate::domain::entity::{self, uuid_identifier, AggregateRoot, Entity};
use crate::domain::validation::{ValidationHandler, Validator};

uuid_identifier!(
    /// Identifier of a `Category`
    CategoryId
);

/// A catalog category (e.g. "Movies", "Documentaries")
///
/// Categories are immutable values: every mutation returns a new instance
/// with a refreshed `updated_at`. An inactive category always carries a
/// `deleted_at` timestamp and an active one never does.
#[derive(Debug, Clone)]
pub struct Category {
    id: CategoryId,
    name: Option<String>,
    description: Option<String>,
    is_active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
}

impl Category {
    /// Creates a category with a fresh identifier
    ///
    /// The name is trimmed but not checked here; callers run `validate`
    /// afterwards so that every violation can be reported at once.
    pub fn new_category(name: Option<String>, description: Option<String>, is_active: bool) -> Self {
        let now = entity::now();
        Self {
            id: CategoryId::unique(),
            name: entity::normalize_name(name),
            description,
            is_active,
            created_at: now,
            updated_at: now,
            deleted_at: if is_active { None } else { Some(now) },
        }
    }

    /// Rebuilds a category from stored state
    #[allow(clippy::too_many_arguments)]
    pub fn with(
        id: CategoryId,
        name: Option<String>,
        description: Option<String>,
        is_active: bool,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
        deleted_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id,
            name,
            description,
            is_active,
            created_at,
            updated_at,
            deleted_at,
        }
    }

    pub fn activate(self) -> Self {
        Self {
            is_active: true,
            updated_at: entity::now(),
            deleted_at: None,
            ..self
        }
    }

    /// Marks the category inactive, keeping an existing deletion date
    pub fn deactivate(self) -> Self {
        let now = entity::now();
        Self {
            is_active: false,
            updated_at: now,
            deleted_at: self.deleted_at.or(Some(now)),
            ..self
        }
    }

    pub fn update(self, name: Option<String>, description: Option<String>, is_active: bool) -> Self {
        let now = entity::now();
        // 停用时保留已有的删除时间
        let deleted_at = if is_active {
            None
        } else {
            self.deleted_at.or(Some(now))
        };

        Self {
            name: entity::normalize_name(name),
            description,
            is_active,
            updated_at: now,
            deleted_at,
            ..self
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn deleted_at(&self) -> Option<DateTime<Utc>> {
        self.deleted_at
    }
}

impl Entity for Category {
    type Id = CategoryId;

    fn id(&self) -> &CategoryId {
        &self.id
    }

    fn validate(&self, handler: &mut dyn ValidationHandler) {
        CategoryValidator::new(self).validate(handler);
    }
}

impl AggregateRoot for Category {
    const NAME: &'static str = "Category";
}

impl PartialEq for Category {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Category {}
