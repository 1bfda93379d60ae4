//! Fakes shared by the app unit tests.

use async_trait::async_trait;

use productos_core::ProductId;
use productos_infra::{ProductStore, StoreError};
use productos_products::{Product, ProductDraft};

/// Store whose every call fails as if the backend were unreachable.
#[derive(Debug, Default)]
pub(crate) struct FailingStore;

fn unavailable() -> StoreError {
    StoreError::Backend("store unavailable".to_string())
}

#[async_trait]
impl ProductStore for FailingStore {
    async fn find_all(&self) -> Result<Vec<Product>, StoreError> {
        Err(unavailable())
    }

    async fn find_by_id(&self, _id: ProductId) -> Result<Option<Product>, StoreError> {
        Err(unavailable())
    }

    async fn save(&self, _draft: ProductDraft) -> Result<Product, StoreError> {
        Err(unavailable())
    }

    async fn exists_by_id(&self, _id: ProductId) -> Result<bool, StoreError> {
        Err(unavailable())
    }

    async fn delete_by_id(&self, _id: ProductId) -> Result<(), StoreError> {
        Err(unavailable())
    }

    async fn count(&self) -> Result<u64, StoreError> {
        Err(unavailable())
    }
}
