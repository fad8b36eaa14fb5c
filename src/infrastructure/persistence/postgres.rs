/// Postgres Category Gateway
///
/// Stores categories in the `category` table created by the embedded
/// migrations. Listing builds its statement with `QueryBuilder` so the
/// search terms, limit and offset are always bound parameters; only the
/// sort column and direction are spliced in, and both come from closed
/// enums.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::{PgPool, PgPoolOptions};
use sqlx::{Postgres, QueryBuilder};
use std::time::Duration;
use tracing::{debug, info};
use uuid::Uuid;

use crate::domain::category::{Category, CategoryGateway, CategoryId, CategorySearchQuery};
use crate::domain::entity::{Entity, Identifier};
use crate::domain::errors::GatewayError;
use crate::domain::pagination::Pagination;
use crate::infrastructure::config::{ConfigError, DatabaseConfig};

const SELECT_COLUMNS: &str =
    "SELECT id, name, description, is_active, created_at, updated_at, deleted_at FROM category";

/// Opens a connection pool for the configured database
pub async fn connect_pool(config: &DatabaseConfig) -> Result<PgPool, PoolError> {
    let options = config.connect_options()?;
    info!(url = %config.url, max_connections = config.max_connections, "connecting to database");

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(5))
        .connect_with(options)
        .await?;
    Ok(pool)
}

#[derive(Debug, thiserror::Error)]
pub enum PoolError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to connect to database: {0}")]
    Connect(#[from] sqlx::Error),
}

/// `category` 表的一行
#[derive(Debug, sqlx::FromRow)]
struct CategoryRow {
    id: Uuid,
    name: String,
    description: Option<String>,
    is_active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
}

impl CategoryRow {
    fn into_domain(self) -> Category {
        Category::with(
            CategoryId::from_uuid(self.id),
            Some(self.name),
            self.description,
            self.is_active,
            self.created_at,
            self.updated_at,
            self.deleted_at,
        )
    }
}

fn db_error(operation: &str, err: sqlx::Error) -> GatewayError {
    GatewayError::new(format!("{operation} failed: {err}"))
}

/// Escapes `%`, `_` and `\` so the terms match literally inside ILIKE
fn like_pattern(terms: &str) -> String {
    let mut pattern = String::with_capacity(terms.len() + 2);
    pattern.push('%');
    for c in terms.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

fn push_search_filter(builder: &mut QueryBuilder<'_, Postgres>, query: &CategorySearchQuery) {
    if let Some(terms) = query.search_terms() {
        let pattern = like_pattern(terms);
        builder
            .push(" WHERE name ILIKE ")
            .push_bind(pattern.clone())
            .push(" OR description ILIKE ")
            .push_bind(pattern);
    }
}

pub struct PostgresCategoryGateway {
    pool: PgPool,
}

impl PostgresCategoryGateway {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryGateway for PostgresCategoryGateway {
    async fn create(&self, category: Category) -> Result<Category, GatewayError> {
        let row: CategoryRow = sqlx::query_as(
            "INSERT INTO category (id, name, description, is_active, created_at, updated_at, deleted_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING id, name, description, is_active, created_at, updated_at, deleted_at",
        )
        .bind(category.id().value())
        .bind(category.name().unwrap_or_default())
        .bind(category.description())
        .bind(category.is_active())
        .bind(category.created_at())
        .bind(category.updated_at())
        .bind(category.deleted_at())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| db_error("insert category", e))?;

        debug!(id = %row.id, "category inserted");
        Ok(row.into_domain())
    }

    async fn delete_by_id(&self, id: &CategoryId) -> Result<(), GatewayError> {
        let result = sqlx::query("DELETE FROM category WHERE id = $1")
            .bind(id.value())
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("delete category", e))?;

        debug!(%id, rows = result.rows_affected(), "category delete executed");
        Ok(())
    }

    async fn find_by_id(&self, id: &CategoryId) -> Result<Option<Category>, GatewayError> {
        let row: Option<CategoryRow> = sqlx::query_as(&format!("{SELECT_COLUMNS} WHERE id = $1"))
            .bind(id.value())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("find category", e))?;

        Ok(row.map(CategoryRow::into_domain))
    }

    async fn update(&self, category: Category) -> Result<Category, GatewayError> {
        let row: Option<CategoryRow> = sqlx::query_as(
            "UPDATE category \
             SET name = $2, description = $3, is_active = $4, created_at = $5, updated_at = $6, deleted_at = $7 \
             WHERE id = $1 \
             RETURNING id, name, description, is_active, created_at, updated_at, deleted_at",
        )
        .bind(category.id().value())
        .bind(category.name().unwrap_or_default())
        .bind(category.description())
        .bind(category.is_active())
        .bind(category.created_at())
        .bind(category.updated_at())
        .bind(category.deleted_at())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("update category", e))?;

        // 查找与更新之间行被删除
        match row {
            Some(row) => Ok(row.into_domain()),
            None => Err(GatewayError::new(format!(
                "category {} does not exist",
                category.id()
            ))),
        }
    }

    async fn find_all(&self, query: &CategorySearchQuery) -> Result<Pagination<Category>, GatewayError> {
        let mut count: QueryBuilder<Postgres> = QueryBuilder::new("SELECT COUNT(*) FROM category");
        push_search_filter(&mut count, query);
        let total: i64 = count
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(|e| db_error("count categories", e))?;

        let mut select: QueryBuilder<Postgres> = QueryBuilder::new(SELECT_COLUMNS);
        push_search_filter(&mut select, query);
        // 列名来自封闭枚举，id 作为第二排序键保证分页稳定
        select
            .push(format!(
                " ORDER BY {} {}, id {}",
                query.sort.column(),
                query.direction.as_sql(),
                query.direction.as_sql()
            ))
            .push(" LIMIT ")
            .push_bind(i64::from(query.per_page))
            .push(" OFFSET ")
            .push_bind(i64::try_from(query.offset()).unwrap_or(i64::MAX));

        let rows: Vec<CategoryRow> = select
            .build_query_as()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| db_error("list categories", e))?;

        Ok(Pagination::new(
            query.page,
            query.per_page,
            total.max(0) as u64,
            rows.into_iter().map(CategoryRow::into_domain).collect(),
        ))
    }

    async fn ping(&self) -> Result<(), GatewayError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("ping", e))?;
        Ok(())
    }
}
