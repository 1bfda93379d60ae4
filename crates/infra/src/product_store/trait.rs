use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use productos_core::{DomainError, ProductId};
use productos_products::{Product, ProductDraft};

/// Failure surfaced by a product store.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum StoreError {
    /// The record was rejected by a field constraint (null/blank name, missing price, ...).
    #[error("constraint violated: {0}")]
    Constraint(String),

    /// A save targeted an identifier that no longer exists.
    #[error("product {0} does not exist")]
    Missing(ProductId),

    /// The backend itself failed (connection, poisoned lock, unexpected row shape).
    #[error("store backend failure: {0}")]
    Backend(String),
}

impl From<DomainError> for StoreError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => StoreError::Constraint(msg),
            // Stores never parse identifiers; kept so the match stays exhaustive.
            DomainError::InvalidId(msg) => StoreError::Backend(msg),
        }
    }
}

/// Persistence contract for products.
///
/// Implementations must be safe for concurrent use: the HTTP layer shares one
/// store across all requests and performs no locking of its own.
///
/// ## Semantics
///
/// - `find_all` returns products ordered by identifier (ascending).
/// - `save` assigns a fresh identifier when `draft.id` is `None`; otherwise it
///   replaces the fields of the existing product with that identifier and
///   fails with [`StoreError::Missing`] if there is none.
/// - `delete_by_id` of an absent identifier is a no-op.
#[async_trait]
pub trait ProductStore: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Product>, StoreError>;

    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, StoreError>;

    async fn save(&self, draft: ProductDraft) -> Result<Product, StoreError>;

    async fn exists_by_id(&self, id: ProductId) -> Result<bool, StoreError>;

    async fn delete_by_id(&self, id: ProductId) -> Result<(), StoreError>;

    async fn count(&self) -> Result<u64, StoreError>;
}

#[async_trait]
impl<S> ProductStore for Arc<S>
where
    S: ProductStore + ?Sized,
{
    async fn find_all(&self) -> Result<Vec<Product>, StoreError> {
        (**self).find_all().await
    }

    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, StoreError> {
        (**self).find_by_id(id).await
    }

    async fn save(&self, draft: ProductDraft) -> Result<Product, StoreError> {
        (**self).save(draft).await
    }

    async fn exists_by_id(&self, id: ProductId) -> Result<bool, StoreError> {
        (**self).exists_by_id(id).await
    }

    async fn delete_by_id(&self, id: ProductId) -> Result<(), StoreError> {
        (**self).delete_by_id(id).await
    }

    async fn count(&self) -> Result<u64, StoreError> {
        (**self).count().await
    }
}
