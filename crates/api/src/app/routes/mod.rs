use axum::Router;

pub mod products;
pub mod system;

/// Router for the product resource, relative to the API root.
pub fn router() -> Router {
    Router::new().nest("/api/productos", products::router())
}
