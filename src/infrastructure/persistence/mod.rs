/// Persistence - Gateway Implementations
///
/// - `postgres`: `PostgresCategoryGateway` over a sqlx `PgPool`
/// - `memory`: `InMemoryCategoryGateway` for tests and local runs
/// - `migrations`: embedded schema migrations

pub mod memory;
pub mod migrations;
pub mod postgres;

pub use memory::InMemoryCategoryGateway;
pub use migrations::run_migrations;
pub use postgres::{connect_pool, PoolError, PostgresCategoryGateway};
