use super::models::{CategoryResponse, IdResponse};
use crate::application::use_cases::{
    CategoryOutput, CreateCategoryOutput, UpdateCategoryOutput,
};

impl From<CategoryOutput> for CategoryResponse {
    fn from(output: CategoryOutput) -> Self {
        Self {
            id: output.id.to_string(),
            name: output.name,
            description: output.description,
            is_active: output.is_active,
            created_at: output.created_at,
            updated_at: output.updated_at,
            deleted_at: output.deleted_at,
        }
    }
}

impl From<CreateCategoryOutput> for IdResponse {
    fn from(output: CreateCategoryOutput) -> Self {
        Self {
            id: output.id.to_string(),
        }
    }
}

impl From<UpdateCategoryOutput> for IdResponse {
    fn from(output: UpdateCategoryOutput) -> Self {
        Self {
            id: output.id.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::category::Category;
    use crate::domain::entity::Entity;

    #[test]
    fn test_category_response_from_output() {
        let category = Category::new_category(Some("Filmes".to_string()), None, false);
        let response = CategoryResponse::from(CategoryOutput::from(&category));

        assert_eq!(response.id, category.id().to_string());
        assert_eq!(response.name.as_deref(), Some("Filmes"));
        assert!(!response.is_active);
        assert!(response.deleted_at.is_some());

        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("created_at").is_some());
        assert!(json.get("is_active").is_some());
    }
}
