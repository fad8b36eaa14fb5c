/// Infrastructure Layer - Technical Implementations
///
/// This layer contains all technical implementations that interact with
/// external systems: HTTP, the database, metrics and health probes.
///
/// The infrastructure layer depends on the domain and application layers
/// but neither of them depends on infrastructure (dependency inversion).
///
/// ## Modules
/// - `api`: axum router and category handlers
/// - `persistence`: gateway implementations and schema migrations
/// - `observability`: health checks and the metrics endpoint
/// - `config`: database connection settings

pub mod api;
pub mod config;
pub mod observability;
pub mod persistence;

// Re-export key types
pub use api::router;
pub use config::DatabaseConfig;
pub use persistence::{InMemoryCategoryGateway, PostgresCategoryGateway};
