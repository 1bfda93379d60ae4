//! Infrastructure layer: product persistence adapters.

pub mod product_store;

pub use product_store::{InMemoryProductStore, ProductStore, StoreError};
#[cfg(feature = "postgres")]
pub use product_store::PostgresProductStore;
