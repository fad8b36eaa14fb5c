//! OpenAPI document served at `/api-docs`

use axum::Json;
use serde_json::{json, Value};

pub async fn api_docs() -> Json<Value> {
    Json(document())
}

fn error_response(description: &str) -> Value {
    json!({
        "description": description,
        "content": { "application/json": { "schema": { "$ref": "#/components/schemas/ApiError" } } }
    })
}

fn id_parameter() -> Value {
    json!({
        "name": "id",
        "in": "path",
        "required": true,
        "schema": { "type": "string", "format": "uuid" }
    })
}

fn query_parameter(name: &str, schema: Value) -> Value {
    json!({ "name": name, "in": "query", "required": false, "schema": schema })
}

pub fn document() -> Value {
    json!({
        "openapi": "3.0.3",
        "info": {
            "title": "Catalog Admin API",
            "version": env!("CARGO_PKG_VERSION")
        },
        "paths": {
            "/categories": collection_path(),
            "/categories/{id}": item_path()
        },
        "components": { "schemas": schemas() }
    })
}

fn category_body() -> Value {
    json!({
        "required": true,
        "content": { "application/json": { "schema": { "$ref": "#/components/schemas/CategoryRequest" } } }
    })
}

fn collection_path() -> Value {
    json!({
        "get": {
            "tags": ["Categories"],
            "summary": "List all categories paginated",
            "parameters": [
                query_parameter("search", json!({ "type": "string", "default": "" })),
                query_parameter("page", json!({ "type": "integer", "minimum": 0, "default": 0 })),
                query_parameter("size", json!({ "type": "integer", "minimum": 0, "default": 10 })),
                query_parameter("sort", json!({
                    "type": "string",
                    "enum": ["name", "description", "createdAt", "updatedAt"],
                    "default": "name"
                })),
                query_parameter("dir", json!({ "type": "string", "enum": ["asc", "desc"], "default": "asc" }))
            ],
            "responses": {
                "200": {
                    "description": "Listed successfully",
                    "content": { "application/json": { "schema": { "$ref": "#/components/schemas/CategoryPage" } } }
                },
                "400": error_response("An invalid parameter was received"),
                "500": error_response("An internal server error was thrown")
            }
        },
        "post": {
            "tags": ["Categories"],
            "summary": "Create a new category",
            "requestBody": category_body(),
            "responses": {
                "201": {
                    "description": "Created successfully",
                    "headers": { "Location": { "schema": { "type": "string" } } },
                    "content": { "application/json": { "schema": { "$ref": "#/components/schemas/IdResponse" } } }
                },
                "422": error_response("A validation error was thrown"),
                "500": error_response("An internal server error was thrown")
            }
        }
    })
}

fn item_path() -> Value {
    json!({
        "get": {
            "tags": ["Categories"],
            "summary": "Get a category by its identifier",
            "parameters": [id_parameter()],
            "responses": {
                "200": {
                    "description": "Category retrieved successfully",
                    "content": { "application/json": { "schema": { "$ref": "#/components/schemas/Category" } } }
                },
                "404": error_response("Category was not found"),
                "500": error_response("An internal server error was thrown")
            }
        },
        "put": {
            "tags": ["Categories"],
            "summary": "Update a category by its identifier",
            "parameters": [id_parameter()],
            "requestBody": category_body(),
            "responses": {
                "200": {
                    "description": "Category updated successfully",
                    "content": { "application/json": { "schema": { "$ref": "#/components/schemas/IdResponse" } } }
                },
                "404": error_response("Category was not found"),
                "422": error_response("A validation error was thrown"),
                "500": error_response("An internal server error was thrown")
            }
        },
        "delete": {
            "tags": ["Categories"],
            "summary": "Delete a category by its identifier",
            "parameters": [id_parameter()],
            "responses": {
                "204": { "description": "Category deleted successfully" },
                "500": error_response("An internal server error was thrown")
            }
        }
    })
}

fn schemas() -> Value {
    json!({
        "CategoryRequest": {
            "type": "object",
            "properties": {
                "name": { "type": "string", "minLength": 3, "maxLength": 255 },
                "description": { "type": "string", "nullable": true, "maxLength": 4000 },
                "is_active": { "type": "boolean", "default": true }
            }
        },
        "Category": {
            "type": "object",
            "properties": {
                "id": { "type": "string", "format": "uuid" },
                "name": { "type": "string" },
                "description": { "type": "string", "nullable": true },
                "is_active": { "type": "boolean" },
                "created_at": { "type": "string", "format": "date-time" },
                "updated_at": { "type": "string", "format": "date-time" },
                "deleted_at": { "type": "string", "format": "date-time", "nullable": true }
            }
        },
        "CategoryPage": {
            "type": "object",
            "properties": {
                "current_page": { "type": "integer" },
                "per_page": { "type": "integer" },
                "total": { "type": "integer" },
                "items": { "type": "array", "items": { "$ref": "#/components/schemas/Category" } }
            }
        },
        "IdResponse": {
            "type": "object",
            "properties": { "id": { "type": "string", "format": "uuid" } }
        },
        "ApiError": {
            "type": "object",
            "properties": {
                "message": { "type": "string" },
                "errors": {
                    "type": "array",
                    "items": { "type": "object", "properties": { "message": { "type": "string" } } }
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_category_operations() {
        let doc = document();

        assert_eq!(doc["openapi"], "3.0.3");
        let collection = &doc["paths"]["/categories"];
        assert!(collection.get("get").is_some());
        assert!(collection.get("post").is_some());

        let item = &doc["paths"]["/categories/{id}"];
        for method in ["get", "put", "delete"] {
            assert!(item.get(method).is_some(), "missing {method}");
        }
        assert!(item["delete"]["responses"].get("204").is_some());
    }
}
