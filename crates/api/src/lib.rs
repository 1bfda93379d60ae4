//! HTTP API: server, routing, and request/response mapping for `/api/productos`.

pub mod app;
pub mod config;
pub mod middleware;
pub mod shutdown;
