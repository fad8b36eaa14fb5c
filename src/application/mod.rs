/// Application Layer - Use Cases and Services
///
/// This layer orchestrates domain logic to implement the catalog's
/// operations. It depends on the domain layer but is independent of
/// infrastructure details: storage is reached only through the gateway
/// traits declared in the domain.
///
/// ## Modules
/// - `use_cases`: one use case per operation
/// - `services`: `CatalogService`, the dispatcher in front of the use cases
/// - `error`: `UseCaseError`, the normalized failure type

pub mod error;
pub mod use_cases;
pub mod services;

// Re-export key types
pub use error::UseCaseError;
pub use services::CatalogService;
pub use use_cases::UseCase;
