/// Domain Layer - Core Business Logic
///
/// Entities, identifiers, validation rules and the persistence ports of the
/// catalog. This layer has no dependency on the application or
/// infrastructure layers and performs no I/O.
///
/// ## Modules
/// - `entity`: entity/identifier traits and the clock
/// - `validation`: error accumulation (`Notification`, `Validator`)
/// - `errors`: `DomainError` and `GatewayError`
/// - `pagination`: paged listings
/// - `category`: the `Category` aggregate and its gateway
/// - `genre`: the `Genre` aggregate

pub mod entity;
pub mod validation;
pub mod errors;
pub mod pagination;
pub mod category;
pub mod genre;

// Re-export key types
pub use entity::{AggregateRoot, Entity, Identifier};
pub use errors::{DomainError, GatewayError};
pub use pagination::Pagination;
pub use validation::{Notification, ValidationError, ValidationHandler};
