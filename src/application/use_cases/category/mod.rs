/// Category use cases
///
/// ## Modules
/// - `create`, `get`, `list`, `update`, `delete`: one use case each
/// - `output`: the read model shared by `get` and `list`

pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod output;
pub mod update;

pub use create::{CreateCategoryCommand, CreateCategoryOutput, CreateCategoryUseCase};
pub use delete::DeleteCategoryUseCase;
pub use get::GetCategoryByIdUseCase;
pub use list::ListCategoriesUseCase;
pub use output::CategoryOutput;
pub use update::{UpdateCategoryCommand, UpdateCategoryOutput, UpdateCategoryUseCase};

use crate::application::error::UseCaseError;
use crate::domain::category::{Category, CategoryId};
use crate::domain::entity::AggregateRoot;
use crate::domain::errors::DomainError;

/// Parses a textual id, treating malformed input as an unknown category
fn parse_category_id(id: &str) -> Result<CategoryId, UseCaseError> {
    CategoryId::parse(id).map_err(|_| not_found(id))
}

fn not_found(id: impl Into<String>) -> UseCaseError {
    DomainError::not_found(Category::NAME, id).into()
}
