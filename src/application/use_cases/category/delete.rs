use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

use crate::application::error::UseCaseError;
use crate::application::use_cases::UseCase;
use crate::domain::category::{CategoryGateway, CategoryId};

/// Deletes a category by its textual id
///
/// Deleting is idempotent: malformed and unknown ids succeed without
/// touching anything.
pub struct DeleteCategoryUseCase<G: CategoryGateway + ?Sized> {
    gateway: Arc<G>,
}

impl<G: CategoryGateway + ?Sized> DeleteCategoryUseCase<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl<G: CategoryGateway + ?Sized> UseCase for DeleteCategoryUseCase<G> {
    type Input = String;
    type Output = ();

    async fn execute(&self, id: String) -> Result<(), UseCaseError> {
        match CategoryId::parse(&id) {
            Ok(category_id) => {
                self.gateway.delete_by_id(&category_id).await?;
                Ok(())
            }
            Err(_) => {
                debug!(id = %id, "ignoring delete of malformed category id");
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::use_cases::category::testing::RecordingGateway;
    use crate::domain::category::Category;
    use crate::domain::entity::Entity;

    #[tokio::test]
    async fn test_delete_existing_category() {
        let category = Category::new_category(Some("Filmes".into()), None, true);
        let id = *category.id();
        let gateway = Arc::new(RecordingGateway::with_categories(vec![category]));
        let use_case = DeleteCategoryUseCase::new(gateway.clone());

        use_case.execute(id.to_string()).await.unwrap();

        assert_eq!(gateway.count("delete_by_id"), 1);
        assert!(gateway.stored.lock().is_empty());
    }

    #[tokio::test]
    async fn test_delete_unknown_category() {
        let gateway = Arc::new(RecordingGateway::new());
        let use_case = DeleteCategoryUseCase::new(gateway.clone());

        assert!(use_case.execute(CategoryId::unique().to_string()).await.is_ok());
        assert_eq!(gateway.count("delete_by_id"), 1);
    }

    #[tokio::test]
    async fn test_delete_malformed_id() {
        let gateway = Arc::new(RecordingGateway::new());
        let use_case = DeleteCategoryUseCase::new(gateway.clone());

        assert!(use_case.execute("123".to_string()).await.is_ok());
        assert!(gateway.calls().is_empty());
    }

    #[tokio::test]
    async fn test_delete_when_gateway_fails() {
        let gateway = Arc::new(RecordingGateway::failing("Gateway error"));
        let use_case = DeleteCategoryUseCase::new(gateway);

        let err = use_case.execute(CategoryId::unique().to_string()).await.unwrap_err();
        assert_eq!(err.kind(), "unexpected");
    }
}
