//! Product persistence boundary.
//!
//! Defines the store contract the HTTP layer depends on, plus an in-memory
//! implementation (tests/dev) and a Postgres implementation (feature `postgres`).

pub mod in_memory;
#[cfg(feature = "postgres")]
pub mod postgres;
pub mod r#trait;

pub use in_memory::InMemoryProductStore;
#[cfg(feature = "postgres")]
pub use postgres::PostgresProductStore;
pub use r#trait::{ProductStore, StoreError};
