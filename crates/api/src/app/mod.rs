//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: the product handler logic over a `ProductStore`
//! - `outcome.rs`: response variants and their single mapping to HTTP status
//! - `routes/`: HTTP routes + handlers
//! - `extract.rs`: product body extractor (rejections → empty 400)
//! - `errors.rs`: fallback (5xx) error responses

use axum::{routing::get, Extension, Router};
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;

use productos_infra::StoreError;

use crate::config::StoreBackend;
use crate::middleware;

pub mod errors;
pub mod extract;
pub mod outcome;
pub mod routes;
pub mod services;
#[cfg(test)]
pub(crate) mod test_helpers;

pub use services::ProductService;

/// Build the product service for the configured backend.
pub async fn build_service(backend: &StoreBackend) -> Result<ProductService, StoreError> {
    match backend {
        StoreBackend::Memory => Ok(ProductService::in_memory()),
        StoreBackend::Postgres { database_url } => {
            #[cfg(feature = "postgres")]
            {
                let store = productos_infra::PostgresProductStore::connect(database_url).await?;
                tracing::info!("using postgres product store");
                Ok(ProductService::new(std::sync::Arc::new(store)))
            }
            #[cfg(not(feature = "postgres"))]
            {
                let _ = database_url;
                tracing::warn!(
                    "STORE_BACKEND=postgres but postgres feature not enabled, \
                     falling back to in-memory"
                );
                Ok(ProductService::in_memory())
            }
        }
    }
}

/// Build the full HTTP router (public entrypoint used by `main.rs` and tests).
pub fn build_app(service: ProductService) -> Router {
    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::router().layer(Extension(service)))
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn(middleware::request_logging))
                .layer(CatchPanicLayer::custom(errors::panic_response)),
        )
}

/// Build the router over a fresh in-memory store.
pub fn build_in_memory_app() -> Router {
    build_app(ProductService::in_memory())
}
