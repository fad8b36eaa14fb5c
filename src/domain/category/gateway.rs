/// Category Persistence Port
///
/// The domain declares what it needs from storage; infrastructure provides
/// the implementations (Postgres in production, in-memory for tests and
/// local runs). Use cases depend only on this trait.

use async_trait::async_trait;
use std::str::FromStr;
use thiserror::Error;

use super::{Category, CategoryId};
use crate::domain::errors::GatewayError;
use crate::domain::pagination::Pagination;

/// Persistence operations for categories
#[async_trait]
pub trait CategoryGateway: Send + Sync {
    /// Stores a new category and returns the stored state
    async fn create(&self, category: Category) -> Result<Category, GatewayError>;

    /// Removes a category; removing an unknown id is not an error
    async fn delete_by_id(&self, id: &CategoryId) -> Result<(), GatewayError>;

    async fn find_by_id(&self, id: &CategoryId) -> Result<Option<Category>, GatewayError>;

    /// Overwrites an existing category and returns the stored state
    async fn update(&self, category: Category) -> Result<Category, GatewayError>;

    /// Searches, sorts and pages categories
    async fn find_all(&self, query: &CategorySearchQuery) -> Result<Pagination<Category>, GatewayError>;

    /// Checks that the underlying store is reachable
    async fn ping(&self) -> Result<(), GatewayError> {
        Ok(())
    }
}

/// A search parameter that could not be interpreted
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid value '{value}' for parameter '{parameter}'")]
pub struct InvalidSearchParameter {
    pub parameter: &'static str,
    pub value: String,
}

/// Attribute a listing can be sorted by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    #[default]
    Name,
    Description,
    CreatedAt,
    UpdatedAt,
}

impl SortField {
    /// Storage column backing this field
    pub fn column(&self) -> &'static str {
        match self {
            SortField::Name => "name",
            SortField::Description => "description",
            SortField::CreatedAt => "created_at",
            SortField::UpdatedAt => "updated_at",
        }
    }
}

impl FromStr for SortField {
    type Err = InvalidSearchParameter;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "name" => Ok(SortField::Name),
            "description" => Ok(SortField::Description),
            "createdAt" | "created_at" => Ok(SortField::CreatedAt),
            "updatedAt" | "updated_at" => Ok(SortField::UpdatedAt),
            other => Err(InvalidSearchParameter {
                parameter: "sort",
                value: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_sql(&self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

impl FromStr for SortDirection {
    type Err = InvalidSearchParameter;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            _ => Err(InvalidSearchParameter {
                parameter: "direction",
                value: s.to_string(),
            }),
        }
    }
}

/// Listing request: page window, free-text terms and ordering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySearchQuery {
    /// Zero-based page index
    pub page: u32,
    pub per_page: u32,
    /// Matched case-insensitively against name or description
    pub terms: String,
    pub sort: SortField,
    pub direction: SortDirection,
}

impl CategorySearchQuery {
    pub fn new(
        page: u32,
        per_page: u32,
        terms: impl Into<String>,
        sort: SortField,
        direction: SortDirection,
    ) -> Self {
        Self {
            page,
            per_page,
            terms: terms.into(),
            sort,
            direction,
        }
    }

    /// Trimmed search terms, or `None` when blank
    pub fn search_terms(&self) -> Option<&str> {
        let terms = self.terms.trim();
        (!terms.is_empty()).then_some(terms)
    }

    /// Number of rows skipped before this page
    pub fn offset(&self) -> u64 {
        u64::from(self.page) * u64::from(self.per_page)
    }
}

impl Default for CategorySearchQuery {
    fn default() -> Self {
        Self::new(0, 10, "", SortField::Name, SortDirection::Asc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_field_parsing() {
        assert_eq!("name".parse::<SortField>().unwrap(), SortField::Name);
        assert_eq!("description".parse::<SortField>().unwrap(), SortField::Description);
        assert_eq!("createdAt".parse::<SortField>().unwrap(), SortField::CreatedAt);
        assert_eq!("updated_at".parse::<SortField>().unwrap(), SortField::UpdatedAt);

        let err = "id; DROP TABLE category".parse::<SortField>().unwrap_err();
        assert_eq!(err.parameter, "sort");
    }

    #[test]
    fn test_sort_direction_parsing() {
        assert_eq!("ASC".parse::<SortDirection>().unwrap(), SortDirection::Asc);
        assert_eq!("desc".parse::<SortDirection>().unwrap(), SortDirection::Desc);
        assert!("sideways".parse::<SortDirection>().is_err());
    }

    #[test]
    fn test_search_terms_and_offset() {
        let query = CategorySearchQuery::new(3, 2, "  ", SortField::Name, SortDirection::Asc);
        assert!(query.search_terms().is_none());
        assert_eq!(query.offset(), 6);

        let query = CategorySearchQuery::new(0, 10, " fil ", SortField::Name, SortDirection::Asc);
        assert_eq!(query.search_terms(), Some("fil"));
    }
}
