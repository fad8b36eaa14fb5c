/// Create Category Use Case
///
/// ## Workflow
/// 1. Build a new `Category` from the command
/// 2. Validate it, accumulating every violation
/// 3. Persist through the gateway only if validation passed

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::application::error::UseCaseError;
use crate::application::use_cases::UseCase;
use crate::domain::category::{Category, CategoryGateway, CategoryId};
use crate::domain::entity::Entity;
use crate::domain::validation::{Notification, ValidationHandler};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateCategoryCommand {
    pub name: Option<String>,
    pub description: Option<String>,
    pub is_active: bool,
}

impl CreateCategoryCommand {
    pub fn new(name: Option<String>, description: Option<String>, is_active: bool) -> Self {
        Self {
            name,
            description,
            is_active,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreateCategoryOutput {
    pub id: CategoryId,
}

/// Generic over the gateway so tests can inject a double and production
/// code can share one `Arc<dyn CategoryGateway>`.
pub struct CreateCategoryUseCase<G: CategoryGateway + ?Sized> {
    gateway: Arc<G>,
}

impl<G: CategoryGateway + ?Sized> CreateCategoryUseCase<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl<G: CategoryGateway + ?Sized> UseCase for CreateCategoryUseCase<G> {
    type Input = CreateCategoryCommand;
    type Output = CreateCategoryOutput;

    async fn execute(&self, command: CreateCategoryCommand) -> Result<CreateCategoryOutput, UseCaseError> {
        let category = Category::new_category(command.name, command.description, command.is_active);

        let mut notification = Notification::new();
        category.validate(&mut notification);
        if notification.has_errors() {
            debug!(errors = notification.errors().len(), "category rejected by validation");
            return Err(UseCaseError::validation(notification));
        }

        let created = self.gateway.create(category).await.map_err(|e| {
            warn!(error = %e, "failed to store category");
            UseCaseError::from(e)
        })?;

        Ok(CreateCategoryOutput { id: *created.id() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::use_cases::category::testing::RecordingGateway;

    fn command(name: Option<&str>, is_active: bool) -> CreateCategoryCommand {
        CreateCategoryCommand::new(name.map(String::from), Some("descrição".into()), is_active)
    }

    #[tokio::test]
    async fn test_create_valid_category() {
        let gateway = Arc::new(RecordingGateway::new());
        let use_case = CreateCategoryUseCase::new(gateway.clone());

        let output = use_case.execute(command(Some("filme"), true)).await.unwrap();

        assert_eq!(gateway.count("create"), 1);
        let written = gateway.written.lock();
        let category = &written[0];
        assert_eq!(*category.id(), output.id);
        assert_eq!(category.name(), Some("filme"));
        assert_eq!(category.description(), Some("descrição"));
        assert!(category.is_active());
        assert!(category.deleted_at().is_none());
    }

    #[tokio::test]
    async fn test_create_inactive_category() {
        let gateway = Arc::new(RecordingGateway::new());
        let use_case = CreateCategoryUseCase::new(gateway.clone());

        use_case.execute(command(Some("filme"), false)).await.unwrap();

        let written = gateway.written.lock();
        assert!(!written[0].is_active());
        assert!(written[0].deleted_at().is_some());
    }

    #[tokio::test]
    async fn test_create_with_null_name() {
        let gateway = Arc::new(RecordingGateway::new());
        let use_case = CreateCategoryUseCase::new(gateway.clone());

        let err = use_case.execute(command(None, true)).await.unwrap_err();

        assert_eq!(err.kind(), "validation");
        assert_eq!(err.errors().len(), 1);
        assert_eq!(err.errors()[0].message, "'name' cannot be null");
        assert_eq!(gateway.count("create"), 0);
    }

    #[tokio::test]
    async fn test_create_when_gateway_fails() {
        let gateway = Arc::new(RecordingGateway::failing("Gateway error"));
        let use_case = CreateCategoryUseCase::new(gateway.clone());

        let err = use_case.execute(command(Some("filme"), true)).await.unwrap_err();

        assert_eq!(err, UseCaseError::unexpected("Gateway error"));
        assert_eq!(gateway.count("create"), 1);
        assert_eq!(gateway.written.lock()[0].name(), Some("filme"));
    }
}
