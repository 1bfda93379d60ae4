//! Postgres-backed product store.
//!
//! ## Error Mapping
//!
//! | SQLx Error | PostgreSQL Error Code | StoreError |
//! |------------|----------------------|------------|
//! | Database (not-null violation) | `23502` | `Constraint` |
//! | Database (check violation) | `23514` | `Constraint` |
//! | Database (other) | Any other | `Backend` |
//! | PoolClosed / Io / other | N/A | `Backend` |
//!
//! Draft validation runs before any query, so the common constraint failures
//! never reach the database.

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use tracing::instrument;

use productos_core::ProductId;
use productos_products::{Product, ProductDraft};

use super::r#trait::{ProductStore, StoreError};

const CREATE_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS productos (
        id BIGSERIAL PRIMARY KEY,
        name TEXT NOT NULL,
        price DOUBLE PRECISION NOT NULL
    )
"#;

#[derive(Debug, FromRow)]
struct ProductRow {
    id: i64,
    name: String,
    price: f64,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Product::new(ProductId::new(row.id), row.name, row.price)
    }
}

fn map_sqlx_error(err: sqlx::Error) -> StoreError {
    match &err {
        sqlx::Error::Database(db) => match db.code().as_deref() {
            Some("23502") | Some("23514") => StoreError::Constraint(db.message().to_string()),
            _ => StoreError::Backend(db.message().to_string()),
        },
        _ => StoreError::Backend(err.to_string()),
    }
}

/// Product store backed by a single `productos` table.
///
/// Uses the SQLx connection pool, which is `Send + Sync`; every call is a
/// single statement, so no explicit transactions are needed.
#[derive(Debug, Clone)]
pub struct PostgresProductStore {
    pool: Arc<PgPool>,
}

impl PostgresProductStore {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool: Arc::new(pool),
        }
    }

    /// Connect to `database_url` and make sure the table exists.
    pub async fn connect(database_url: &str) -> Result<Self, StoreError> {
        let pool = PgPool::connect(database_url).await.map_err(map_sqlx_error)?;
        let store = Self::new(pool);
        store.ensure_schema().await?;
        Ok(store)
    }

    /// Create the `productos` table if it is not there yet.
    pub async fn ensure_schema(&self) -> Result<(), StoreError> {
        sqlx::query(CREATE_TABLE)
            .execute(&*self.pool)
            .await
            .map_err(map_sqlx_error)?;
        Ok(())
    }
}

#[async_trait]
impl ProductStore for PostgresProductStore {
    #[instrument(skip(self))]
    async fn find_all(&self) -> Result<Vec<Product>, StoreError> {
        let rows: Vec<ProductRow> =
            sqlx::query_as("SELECT id, name, price FROM productos ORDER BY id ASC")
                .fetch_all(&*self.pool)
                .await
                .map_err(map_sqlx_error)?;
        Ok(rows.into_iter().map(Product::from).collect())
    }

    #[instrument(skip(self), fields(product_id = %id))]
    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, StoreError> {
        let row: Option<ProductRow> =
            sqlx::query_as("SELECT id, name, price FROM productos WHERE id = $1")
                .bind(id.get())
                .fetch_optional(&*self.pool)
                .await
                .map_err(map_sqlx_error)?;
        Ok(row.map(Product::from))
    }

    #[instrument(skip(self, draft), fields(product_id = ?draft.id))]
    async fn save(&self, draft: ProductDraft) -> Result<Product, StoreError> {
        let (name, price) = draft.validate()?;

        let row: Option<ProductRow> = match draft.id {
            None => sqlx::query_as(
                r#"
                INSERT INTO productos (name, price)
                VALUES ($1, $2)
                RETURNING id, name, price
                "#,
            )
            .bind(name)
            .bind(price)
            .fetch_optional(&*self.pool)
            .await
            .map_err(map_sqlx_error)?,
            Some(id) => sqlx::query_as(
                r#"
                UPDATE productos
                SET name = $2, price = $3
                WHERE id = $1
                RETURNING id, name, price
                "#,
            )
            .bind(id.get())
            .bind(name)
            .bind(price)
            .fetch_optional(&*self.pool)
            .await
            .map_err(map_sqlx_error)?,
        };

        match (row, draft.id) {
            (Some(row), _) => Ok(row.into()),
            (None, Some(id)) => Err(StoreError::Missing(id)),
            (None, None) => Err(StoreError::Backend("insert returned no row".to_string())),
        }
    }

    #[instrument(skip(self), fields(product_id = %id))]
    async fn exists_by_id(&self, id: ProductId) -> Result<bool, StoreError> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM productos WHERE id = $1)")
                .bind(id.get())
                .fetch_one(&*self.pool)
                .await
                .map_err(map_sqlx_error)?;
        Ok(exists)
    }

    #[instrument(skip(self), fields(product_id = %id))]
    async fn delete_by_id(&self, id: ProductId) -> Result<(), StoreError> {
        sqlx::query("DELETE FROM productos WHERE id = $1")
            .bind(id.get())
            .execute(&*self.pool)
            .await
            .map_err(map_sqlx_error)?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn count(&self) -> Result<u64, StoreError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM productos")
            .fetch_one(&*self.pool)
            .await
            .map_err(map_sqlx_error)?;
        Ok(u64::try_from(count).unwrap_or_default())
    }
}
