use axum::{
    extract::{Extension, Path},
    routing::get,
    Router,
};

use productos_core::ProductId;
use productos_products::Product;

use crate::app::errors::ApiError;
use crate::app::extract::ProductBody;
use crate::app::outcome::Outcome;
use crate::app::services::ProductService;

/// Routes mounted under `/api/productos`.
pub fn router() -> Router {
    Router::new()
        .route("/", get(list_products).post(create_product))
        .route("/count", get(count_products))
        .route(
            "/:id",
            get(get_product).put(update_product).delete(delete_product),
        )
}

pub async fn list_products(
    Extension(service): Extension<ProductService>,
) -> Result<Outcome<Vec<Product>>, ApiError> {
    Ok(service.list().await?)
}

pub async fn get_product(
    Extension(service): Extension<ProductService>,
    Path(id): Path<ProductId>,
) -> Result<Outcome<Product>, ApiError> {
    Ok(service.get(id).await?)
}

pub async fn create_product(
    Extension(service): Extension<ProductService>,
    ProductBody(body): ProductBody,
) -> Outcome<Product> {
    service.create(body).await
}

pub async fn update_product(
    Extension(service): Extension<ProductService>,
    Path(id): Path<ProductId>,
    ProductBody(body): ProductBody,
) -> Result<Outcome<Product>, ApiError> {
    Ok(service.update(id, body).await?)
}

pub async fn delete_product(
    Extension(service): Extension<ProductService>,
    Path(id): Path<ProductId>,
) -> Result<Outcome<()>, ApiError> {
    Ok(service.delete(id).await?)
}

pub async fn count_products(
    Extension(service): Extension<ProductService>,
) -> Result<Outcome<u64>, ApiError> {
    Ok(service.count().await?)
}
