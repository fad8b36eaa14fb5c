/// Update Category Use Case
///
/// ## Workflow
/// 1. Load the category (unknown or malformed id → not found)
/// 2. Apply the new values and validate the result
/// 3. Persist only if validation passed

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, warn};

use super::{not_found, parse_category_id};
use crate::application::error::UseCaseError;
use crate::application::use_cases::UseCase;
use crate::domain::category::{CategoryGateway, CategoryId};
use crate::domain::entity::Entity;
use crate::domain::validation::{Notification, ValidationHandler};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateCategoryCommand {
    pub id: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub is_active: bool,
}

impl UpdateCategoryCommand {
    pub fn new(
        id: impl Into<String>,
        name: Option<String>,
        description: Option<String>,
        is_active: bool,
    ) -> Self {
        Self {
            id: id.into(),
            name,
            description,
            is_active,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateCategoryOutput {
    pub id: CategoryId,
}

pub struct UpdateCategoryUseCase<G: CategoryGateway + ?Sized> {
    gateway: Arc<G>,
}

impl<G: CategoryGateway + ?Sized> UpdateCategoryUseCase<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl<G: CategoryGateway + ?Sized> UseCase for UpdateCategoryUseCase<G> {
    type Input = UpdateCategoryCommand;
    type Output = UpdateCategoryOutput;

    async fn execute(&self, command: UpdateCategoryCommand) -> Result<UpdateCategoryOutput, UseCaseError> {
        let category_id = parse_category_id(&command.id)?;

        let found = self
            .gateway
            .find_by_id(&category_id)
            .await?
            .ok_or_else(|| not_found(command.id.as_str()))?;

        let category = found.update(command.name, command.description, command.is_active);

        let mut notification = Notification::new();
        category.validate(&mut notification);
        if notification.has_errors() {
            debug!(id = %category_id, errors = notification.errors().len(), "category update rejected by validation");
            return Err(UseCaseError::validation(notification));
        }

        let updated = self.gateway.update(category).await.map_err(|e| {
            warn!(id = %category_id, error = %e, "failed to update category");
            UseCaseError::from(e)
        })?;

        Ok(UpdateCategoryOutput { id: *updated.id() })
    }
}
