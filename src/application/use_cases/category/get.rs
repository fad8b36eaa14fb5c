use async_trait::async_trait;
use std::sync::Arc;

use super::{not_found, parse_category_id, CategoryOutput};
use crate::application::error::UseCaseError;
use crate::application::use_cases::UseCase;
use crate::domain::category::CategoryGateway;

/// Loads one category by its textual id
///
/// A malformed id is reported exactly like an unknown one.
pub struct GetCategoryByIdUseCase<G: CategoryGateway + ?Sized> {
    gateway: Arc<G>,
}

impl<G: CategoryGateway + ?Sized> GetCategoryByIdUseCase<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl<G: CategoryGateway + ?Sized> UseCase for GetCategoryByIdUseCase<G> {
    type Input = String;
    type Output = CategoryOutput;

    async fn execute(&self, id: String) -> Result<CategoryOutput, UseCaseError> {
        let category_id = parse_category_id(&id)?;

        self.gateway
            .find_by_id(&category_id)
            .await?
            .map(|category| CategoryOutput::from(&category))
            .ok_or_else(|| not_found(id))
    }
}
