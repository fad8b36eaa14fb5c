use async_trait::async_trait;
use std::sync::Arc;

use super::CategoryOutput;
use crate::application::error::UseCaseError;
use crate::application::use_cases::UseCase;
use crate::domain::category::{CategoryGateway, CategorySearchQuery};
use crate::domain::pagination::Pagination;

/// Searches categories and returns one page of read models
pub struct ListCategoriesUseCase<G: CategoryGateway + ?Sized> {
    gateway: Arc<G>,
}

impl<G: CategoryGateway + ?Sized> ListCategoriesUseCase<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl<G: CategoryGateway + ?Sized> UseCase for ListCategoriesUseCase<G> {
    type Input = CategorySearchQuery;
    type Output = Pagination<CategoryOutput>;

    async fn execute(&self, query: CategorySearchQuery) -> Result<Pagination<CategoryOutput>, UseCaseError> {
        let page = self.gateway.find_all(&query).await?;
        Ok(page.map(|category| CategoryOutput::from(&category)))
    }
}
