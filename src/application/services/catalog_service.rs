/// Catalog Service - Use Case Dispatcher
///
/// This service owns one instance of every category use case, all sharing
/// the same gateway, and is the single entry point the transport layer
/// talks to.
///
/// ## Responsibilities
/// - Route each operation to its use case
/// - Record per-operation outcome counters and latency
/// - Log failures at a level matching their severity
///
/// ## Usage
/// ```rust,ignore
/// use catalog_admin::application::services::CatalogService;
/// use catalog_admin::infrastructure::persistence::InMemoryCategoryGateway;
/// use std::sync::Arc;
///
/// let service = CatalogService::new(Arc::new(InMemoryCategoryGateway::new()));
/// let output = service.create_category(command).await?;
/// ```

use std::sync::Arc;
use tracing::{debug, error};

use crate::application::error::UseCaseError;
use crate::application::use_cases::{
    CategoryOutput, CreateCategoryCommand, CreateCategoryOutput,
    CreateCategoryUseCase, DeleteCategoryUseCase, GetCategoryByIdUseCase, ListCategoriesUseCase,
    UpdateCategoryCommand, UpdateCategoryOutput, UpdateCategoryUseCase, UseCase,
};
use crate::domain::category::{CategoryGateway, CategorySearchQuery};
use crate::domain::errors::GatewayError;
use crate::domain::pagination::Pagination;
use crate::shared::metrics::METRICS;

/// 目录服务
pub struct CatalogService {
    /// 所有用例共享的存储端口
    gateway: Arc<dyn CategoryGateway>,
    create_category: CreateCategoryUseCase<dyn CategoryGateway>,
    get_category: GetCategoryByIdUseCase<dyn CategoryGateway>,
    list_categories: ListCategoriesUseCase<dyn CategoryGateway>,
    update_category: UpdateCategoryUseCase<dyn CategoryGateway>,
    delete_category: DeleteCategoryUseCase<dyn CategoryGateway>,
}

impl CatalogService {
    pub fn new(gateway: Arc<dyn CategoryGateway>) -> Self {
        Self {
            create_category: CreateCategoryUseCase::new(gateway.clone()),
            get_category: GetCategoryByIdUseCase::new(gateway.clone()),
            list_categories: ListCategoriesUseCase::new(gateway.clone()),
            update_category: UpdateCategoryUseCase::new(gateway.clone()),
            delete_category: DeleteCategoryUseCase::new(gateway.clone()),
            gateway,
        }
    }

    pub async fn create_category(
        &self,
        command: CreateCategoryCommand,
    ) -> Result<CreateCategoryOutput, UseCaseError> {
        dispatch("create_category", &self.create_category, command).await
    }

    pub async fn get_category(&self, id: String) -> Result<CategoryOutput, UseCaseError> {
        dispatch("get_category", &self.get_category, id).await
    }

    pub async fn list_categories(
        &self,
        query: CategorySearchQuery,
    ) -> Result<Pagination<CategoryOutput>, UseCaseError> {
        dispatch("list_categories", &self.list_categories, query).await
    }

    pub async fn update_category(
        &self,
        command: UpdateCategoryCommand,
    ) -> Result<UpdateCategoryOutput, UseCaseError> {
        dispatch("update_category", &self.update_category, command).await
    }

    pub async fn delete_category(&self, id: String) -> Result<(), UseCaseError> {
        dispatch("delete_category", &self.delete_category, id).await
    }

    /// Checks that the backing store is reachable
    pub async fn ping(&self) -> Result<(), GatewayError> {
        self.gateway.ping().await
    }
}

async fn dispatch<U: UseCase>(
    name: &'static str,
    use_case: &U,
    input: U::Input,
) -> Result<U::Output, UseCaseError> {
    let timer = METRICS.use_case_duration.with_label_values(&[name]).start_timer();
    let result = use_case.execute(input).await;
    timer.observe_duration();

    // 按结果分类计数：success / validation / not_found / unexpected
    let outcome = match &result {
        Ok(_) => "success",
        Err(e) => e.kind(),
    };
    METRICS.use_case_total.with_label_values(&[name, outcome]).inc();

    // 只有意外错误记为 error，客户端输入问题记为 debug
    match &result {
        Ok(_) => debug!(use_case = name, "use case completed"),
        Err(e @ UseCaseError::Unexpected { .. }) => error!(use_case = name, error = %e, "use case failed"),
        Err(e) => debug!(use_case = name, outcome, error = %e, "use case rejected input"),
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::use_cases::category::testing::RecordingGateway;
    use crate::domain::category::CategoryId;

    fn service(gateway: RecordingGateway) -> CatalogService {
        CatalogService::new(Arc::new(gateway))
    }

    #[tokio::test]
    async fn test_create_then_get() {
        let service = service(RecordingGateway::new());

        let created = service
            .create_category(CreateCategoryCommand::new(Some("Filmes".into()), None, true))
            .await
            .unwrap();
        let found = service.get_category(created.id.to_string()).await.unwrap();

        assert_eq!(found.id, created.id);
        assert_eq!(found.name.as_deref(), Some("Filmes"));
    }

    #[tokio::test]
    async fn test_update_then_list_then_delete() {
        let service = service(RecordingGateway::new());
        let created = service
            .create_category(CreateCategoryCommand::new(Some("Film".into()), None, true))
            .await
            .unwrap();

        service
            .update_category(UpdateCategoryCommand::new(created.id.to_string(), Some("Filmes".into()), None, false))
            .await
            .unwrap();

        let page = service.list_categories(CategorySearchQuery::default()).await.unwrap();
        assert_eq!(page.total, 1);
        assert_eq!(page.items[0].name.as_deref(), Some("Filmes"));
        assert!(!page.items[0].is_active);

        service.delete_category(created.id.to_string()).await.unwrap();
        let err = service.get_category(created.id.to_string()).await.unwrap_err();
        assert_eq!(err.kind(), "not_found");
    }

    #[tokio::test]
    async fn test_dispatch_records_metrics() {
        let service = service(RecordingGateway::new());
        let _ = service.get_category(CategoryId::unique().to_string()).await;

        let output = METRICS.export();
        assert!(output.contains("get_category"));
    }

    #[tokio::test]
    async fn test_ping_delegates_to_gateway() {
        let service = service(RecordingGateway::new());
        assert!(service.ping().await.is_ok());
    }
}
