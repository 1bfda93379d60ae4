//! Product request handling, independent of the HTTP framework.
//!
//! `ProductService` holds the store and nothing else; each method is one
//! stateless exchange that returns an [`Outcome`] for the router to map.

use std::sync::Arc;

use productos_core::ProductId;
use productos_infra::{InMemoryProductStore, ProductStore, StoreError};
use productos_products::{Product, ProductDraft, ProductPayload};

use crate::app::outcome::Outcome;

#[derive(Clone)]
pub struct ProductService {
    store: Arc<dyn ProductStore>,
}

impl core::fmt::Debug for ProductService {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ProductService").finish_non_exhaustive()
    }
}

impl ProductService {
    pub fn new(store: Arc<dyn ProductStore>) -> Self {
        Self { store }
    }

    /// Service over a fresh in-memory store (dev/test).
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryProductStore::new()))
    }

    pub async fn list(&self) -> Result<Outcome<Vec<Product>>, StoreError> {
        Ok(Outcome::Ok(self.store.find_all().await?))
    }

    pub async fn get(&self, id: ProductId) -> Result<Outcome<Product>, StoreError> {
        Ok(Outcome::found(self.store.find_by_id(id).await?))
    }

    /// Create a product. Every store failure collapses into `BadRequest`.
    pub async fn create(&self, payload: ProductPayload) -> Outcome<Product> {
        match self.store.save(ProductDraft::for_create(payload)).await {
            Ok(product) => {
                tracing::info!(product_id = %product.id_typed(), "product created");
                Outcome::Created(product)
            }
            Err(e) => {
                tracing::warn!(error = %e, "product creation rejected");
                Outcome::BadRequest(e)
            }
        }
    }

    /// Overwrite name and price of an existing product.
    ///
    /// A failing save is not mapped here and propagates to the caller.
    pub async fn update(
        &self,
        id: ProductId,
        payload: ProductPayload,
    ) -> Result<Outcome<Product>, StoreError> {
        let Some(existing) = self.store.find_by_id(id).await? else {
            return Ok(Outcome::NotFound);
        };

        let saved = self.store.save(existing.apply_changes(&payload)).await?;
        tracing::info!(product_id = %saved.id_typed(), "product updated");
        Ok(Outcome::Ok(saved))
    }

    /// Delete by id.
    ///
    /// Existence check and delete are two separate store calls; a concurrent
    /// delete in between is absorbed by the store's idempotent `delete_by_id`.
    pub async fn delete(&self, id: ProductId) -> Result<Outcome<()>, StoreError> {
        if !self.store.exists_by_id(id).await? {
            return Ok(Outcome::NotFound);
        }

        self.store.delete_by_id(id).await?;
        tracing::info!(product_id = %id, "product deleted");
        Ok(Outcome::NoContent)
    }

    pub async fn count(&self) -> Result<Outcome<u64>, StoreError> {
        Ok(Outcome::Ok(self.store.count().await?))
    }
}
