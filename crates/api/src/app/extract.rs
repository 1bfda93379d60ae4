//! Request body extraction for product create/update.
//!
//! Any body axum's `Json` would reject (bad syntax, wrong field types, missing
//! content type) answers `400` with an empty body, like every other client
//! error on the product resource.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use productos_products::ProductPayload;

/// JSON product payload; rejections become an empty `400`.
#[derive(Debug, Clone)]
pub struct ProductBody(pub ProductPayload);

#[async_trait]
impl<S> FromRequest<S> for ProductBody
where
    S: Send + Sync,
{
    type Rejection = BodyRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(payload) = Json::<ProductPayload>::from_request(req, state)
            .await
            .map_err(BodyRejection)?;
        Ok(Self(payload))
    }
}

/// Wraps axum's JSON rejection; the detail is logged, never sent.
#[derive(Debug)]
pub struct BodyRejection(pub JsonRejection);

impl IntoResponse for BodyRejection {
    fn into_response(self) -> Response {
        tracing::warn!(error = %self.0.body_text(), "rejected product body");
        StatusCode::BAD_REQUEST.into_response()
    }
}
