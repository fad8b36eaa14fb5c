use super::Category;
use crate::domain::validation::{check_max_length, check_name, ValidationHandler, Validator};

pub const NAME_MIN_LENGTH: usize = 3;
pub const NAME_MAX_LENGTH: usize = 255;
/// 与 `category.description` 列宽一致
pub const DESCRIPTION_MAX_LENGTH: usize = 4000;

/// Category rules
///
/// - name is required and not blank
/// - trimmed name has between 3 and 255 characters
/// - description, when present, has at most 4000 characters
pub struct CategoryValidator<'a> {
    category: &'a Category,
}

impl<'a> CategoryValidator<'a> {
    pub fn new(category: &'a Category) -> Self {
        Self { category }
    }
}

impl Validator for CategoryValidator<'_> {
    fn validate(&self, handler: &mut dyn ValidationHandler) {
        check_name(self.category.name(), NAME_MIN_LENGTH, NAME_MAX_LENGTH, handler);
        check_max_length("description", self.category.description(), DESCRIPTION_MAX_LENGTH, handler);
    }
}
