/// HTTP request and response bodies
///
/// All payloads use snake_case field names. Timestamps are RFC 3339.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::category::{CategorySearchQuery, InvalidSearchParameter};

/// 创建分类请求体
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CreateCategoryRequest {
    /// 缺失时由校验报告 `'name' cannot be null`
    pub name: Option<String>,
    pub description: Option<String>,
    /// `true` when omitted
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UpdateCategoryRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    /// `true` when omitted
    pub is_active: Option<bool>,
}

/// 单个分类，get 与 list 共用
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryResponse {
    pub id: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// 停用时间，启用的分类为 null
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Body returned by create and update
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdResponse {
    pub id: String,
}

/// Query string of `GET /categories`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ListParams {
    pub search: Option<String>,
    pub page: Option<u32>,
    pub size: Option<u32>,
    pub sort: Option<String>,
    #[serde(alias = "order")]
    pub dir: Option<String>,
}

impl ListParams {
    pub fn into_query(self) -> Result<CategorySearchQuery, InvalidSearchParameter> {
        let defaults = CategorySearchQuery::default();

        let sort = match self.sort {
            Some(sort) => sort.parse()?,
            None => defaults.sort,
        };
        let direction = match self.dir {
            Some(dir) => dir.parse()?,
            None => defaults.direction,
        };

        Ok(CategorySearchQuery::new(
            self.page.unwrap_or(defaults.page),
            self.size.unwrap_or(defaults.per_page),
            self.search.unwrap_or(defaults.terms),
            sort,
            direction,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::category::{SortDirection, SortField};

    #[test]
    fn test_list_params_defaults() {
        let query = ListParams::default().into_query().unwrap();
        assert_eq!(query, CategorySearchQuery::default());
    }

    #[test]
    fn test_list_params_mapping() {
        let params = ListParams {
            search: Some("doc".to_string()),
            page: Some(2),
            size: Some(5),
            sort: Some("createdAt".to_string()),
            dir: Some("DESC".to_string()),
        };

        let query = params.into_query().unwrap();
        assert_eq!(query.page, 2);
        assert_eq!(query.per_page, 5);
        assert_eq!(query.terms, "doc");
        assert_eq!(query.sort, SortField::CreatedAt);
        assert_eq!(query.direction, SortDirection::Desc);
    }

    #[test]
    fn test_list_params_rejects_unknown_sort() {
        let params = ListParams {
            sort: Some("password".to_string()),
            ..ListParams::default()
        };
        let err = params.into_query().unwrap_err();
        assert_eq!(err.parameter, "sort");
    }

    #[test]
    fn test_order_alias() {
        let params: ListParams = serde_json::from_str(r#"{"order":"desc"}"#).unwrap();
        assert_eq!(params.dir.as_deref(), Some("desc"));
    }

    #[test]
    fn test_create_request_optional_fields() {
        let request: CreateCategoryRequest = serde_json::from_str(r#"{"name":"Filmes"}"#).unwrap();
        assert_eq!(request.name.as_deref(), Some("Filmes"));
        assert!(request.description.is_none());
        assert!(request.is_active.is_none());
    }
}
