/// Category Aggregate
///
/// ## Modules
/// - `aggregate`: the `Category` aggregate root and its identifier
/// - `validator`: name and description rules for categories
/// - `gateway`: persistence port and search query

mod aggregate;
pub mod gateway;
pub mod validator;

pub use aggregate::{Category, CategoryId};
pub use gateway::{
    CategoryGateway, CategorySearchQuery, InvalidSearchParameter, SortDirection, SortField,
};
pub use validator::CategoryValidator;
