/// In-Memory Category Gateway
///
/// Keeps categories in a `HashMap` behind a `RwLock`. Used by the HTTP
/// tests and by `--storage memory` for local runs without a database.
/// Only NULL placement and the id tie-break follow Postgres: a missing
/// description sorts after every present one when ascending. Text compares
/// by code point, not by the database collation, so `"Beta"` sorts before
/// `"alpha"` here.

use async_trait::async_trait;
use parking_lot::RwLock;
use std::cmp::Ordering;
use std::collections::HashMap;

use crate::domain::category::{
    Category, CategoryGateway, CategoryId, CategorySearchQuery, SortDirection, SortField,
};
use crate::domain::entity::{Entity, Identifier};
use crate::domain::errors::GatewayError;
use crate::domain::pagination::Pagination;

#[derive(Default)]
pub struct InMemoryCategoryGateway {
    /// 按 id 索引的全部分类
    categories: RwLock<HashMap<CategoryId, Category>>,
}

impl InMemoryCategoryGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.categories.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.read().is_empty()
    }
}

fn matches_terms(category: &Category, terms: &str) -> bool {
    let needle = terms.to_lowercase();
    let contains = |value: Option<&str>| value.is_some_and(|v| v.to_lowercase().contains(&needle));
    contains(category.name()) || contains(category.description())
}

/// `None` sorts last; present values compare with their own `Ord`
fn cmp_nullable<T: Ord>(a: Option<T>, b: Option<T>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn compare(a: &Category, b: &Category, sort: SortField) -> Ordering {
    let by_field = match sort {
        SortField::Name => cmp_nullable(a.name(), b.name()),
        SortField::Description => cmp_nullable(a.description(), b.description()),
        SortField::CreatedAt => a.created_at().cmp(&b.created_at()),
        SortField::UpdatedAt => a.updated_at().cmp(&b.updated_at()),
    };
    by_field.then_with(|| a.id().value().cmp(&b.id().value()))
}

#[async_trait]
impl CategoryGateway for InMemoryCategoryGateway {
    async fn create(&self, category: Category) -> Result<Category, GatewayError> {
        let mut categories = self.categories.write();
        if categories.contains_key(category.id()) {
            return Err(GatewayError::new(format!(
                "category {} already exists",
                category.id()
            )));
        }
        categories.insert(*category.id(), category.clone());
        Ok(category)
    }

    async fn delete_by_id(&self, id: &CategoryId) -> Result<(), GatewayError> {
        self.categories.write().remove(id);
        Ok(())
    }

    async fn find_by_id(&self, id: &CategoryId) -> Result<Option<Category>, GatewayError> {
        Ok(self.categories.read().get(id).cloned())
    }

    async fn update(&self, category: Category) -> Result<Category, GatewayError> {
        let mut categories = self.categories.write();
        match categories.get_mut(category.id()) {
            Some(stored) => {
                *stored = category.clone();
                Ok(category)
            }
            None => Err(GatewayError::new(format!(
                "category {} does not exist",
                category.id()
            ))),
        }
    }

    async fn find_all(&self, query: &CategorySearchQuery) -> Result<Pagination<Category>, GatewayError> {
        let mut matching: Vec<Category> = {
            let categories = self.categories.read();
            categories
                .values()
                .filter(|c| query.search_terms().map_or(true, |terms| matches_terms(c, terms)))
                .cloned()
                .collect()
        };

        // 降序时整体反转，包括 id 次序
        matching.sort_by(|a, b| {
            let ordering = compare(a, b, query.sort);
            match query.direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        });

        let total = matching.len() as u64;
        let offset = usize::try_from(query.offset()).unwrap_or(usize::MAX);
        let items = matching
            .into_iter()
            .skip(offset)
            .take(query.per_page as usize)
            .collect();

        Ok(Pagination::new(query.page, query.per_page, total, items))
    }
}
