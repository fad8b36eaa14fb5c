/// Use Cases - High-level business operations
///
/// Each use case represents one operation the catalog can perform. Use
/// cases orchestrate domain entities and the gateway ports; they never see
/// HTTP or SQL types.
///
/// ## Available Use Cases
/// - `CreateCategoryUseCase`
/// - `GetCategoryByIdUseCase`
/// - `ListCategoriesUseCase`
/// - `UpdateCategoryUseCase`
/// - `DeleteCategoryUseCase`

use async_trait::async_trait;

use super::error::UseCaseError;

pub mod category;

// Re-export key types
pub use category::{
    CategoryOutput, CreateCategoryCommand, CreateCategoryOutput,
    CreateCategoryUseCase, DeleteCategoryUseCase, GetCategoryByIdUseCase, ListCategoriesUseCase,
    UpdateCategoryCommand, UpdateCategoryOutput, UpdateCategoryUseCase,
};

/// A single application operation
///
/// `execute` either returns the operation's output or a `UseCaseError`
/// describing why it could not complete. Validation failures are
/// accumulated, never reported one at a time.
#[async_trait]
pub trait UseCase: Send + Sync {
    type Input: Send + 'static;
    type Output: Send + 'static;

    async fn execute(&self, input: Self::Input) -> Result<Self::Output, UseCaseError>;
}
