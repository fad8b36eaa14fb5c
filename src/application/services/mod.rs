/// Application Services
///
/// - `CatalogService`: dispatches every catalog operation to its use case

pub mod catalog_service;

pub use catalog_service::CatalogService;
