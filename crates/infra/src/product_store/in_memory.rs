use std::collections::BTreeMap;
use std::sync::RwLock;

use async_trait::async_trait;

use productos_core::ProductId;
use productos_products::{Product, ProductDraft};

use super::r#trait::{ProductStore, StoreError};

#[derive(Debug)]
struct Table {
    rows: BTreeMap<ProductId, Product>,
    next_id: ProductId,
}

impl Default for Table {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            next_id: ProductId::new(1),
        }
    }
}

/// In-memory product store.
///
/// Identifiers start at 1 and are never reused, even after deletes.
/// Intended for tests/dev.
#[derive(Debug, Default)]
pub struct InMemoryProductStore {
    table: RwLock<Table>,
}

impl InMemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned<T>(_: T) -> StoreError {
    StoreError::Backend("in-memory product table lock poisoned".to_string())
}

#[async_trait]
impl ProductStore for InMemoryProductStore {
    async fn find_all(&self) -> Result<Vec<Product>, StoreError> {
        let table = self.table.read().map_err(poisoned)?;
        Ok(table.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, StoreError> {
        let table = self.table.read().map_err(poisoned)?;
        Ok(table.rows.get(&id).cloned())
    }

    async fn save(&self, draft: ProductDraft) -> Result<Product, StoreError> {
        // Validate before taking the lock so a rejected draft never consumes an id.
        draft.validate()?;

        let mut table = self.table.write().map_err(poisoned)?;
        let id = match draft.id {
            Some(id) if table.rows.contains_key(&id) => id,
            Some(id) => return Err(StoreError::Missing(id)),
            None => {
                let id = table.next_id;
                table.next_id = id.next();
                id
            }
        };

        let product = draft.into_product(id)?;
        table.rows.insert(product.id_typed(), product.clone());
        Ok(product)
    }

    async fn exists_by_id(&self, id: ProductId) -> Result<bool, StoreError> {
        let table = self.table.read().map_err(poisoned)?;
        Ok(table.rows.contains_key(&id))
    }

    async fn delete_by_id(&self, id: ProductId) -> Result<(), StoreError> {
        let mut table = self.table.write().map_err(poisoned)?;
        table.rows.remove(&id);
        Ok(())
    }

    async fn count(&self) -> Result<u64, StoreError> {
        let table = self.table.read().map_err(poisoned)?;
        Ok(table.rows.len() as u64)
    }
}
