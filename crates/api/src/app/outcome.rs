//! Response variants produced by the product handlers.
//!
//! Every handler result is expressed as an [`Outcome`] and mapped to an HTTP
//! status in exactly one place, the `IntoResponse` impl below.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use productos_infra::StoreError;

/// Result of a product operation, before it becomes an HTTP response.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    /// 200 with the value as JSON.
    Ok(T),
    /// 201 with the created value as JSON.
    Created(T),
    /// 204, empty body.
    NoContent,
    /// 404, empty body.
    NotFound,
    /// 400, empty body. The cause is kept for logging only.
    BadRequest(StoreError),
}

impl<T> Outcome<T> {
    /// Status code this outcome maps to.
    pub fn status(&self) -> StatusCode {
        match self {
            Outcome::Ok(_) => StatusCode::OK,
            Outcome::Created(_) => StatusCode::CREATED,
            Outcome::NoContent => StatusCode::NO_CONTENT,
            Outcome::NotFound => StatusCode::NOT_FOUND,
            Outcome::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }

    /// Wrap an optional lookup result: `Some` → `Ok`, `None` → `NotFound`.
    pub fn found(value: Option<T>) -> Self {
        value.map_or(Outcome::NotFound, Outcome::Ok)
    }
}

impl<T: Serialize> IntoResponse for Outcome<T> {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            Outcome::Ok(value) | Outcome::Created(value) => (status, Json(value)).into_response(),
            Outcome::NoContent | Outcome::NotFound | Outcome::BadRequest(_) => {
                status.into_response()
            }
        }
    }
}
