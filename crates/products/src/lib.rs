//! Products domain module.
//!
//! This crate contains the product record and the rules for creating and
//! overwriting it, implemented as plain domain logic (no IO, no HTTP, no storage).

pub mod product;

pub use product::{Product, ProductDraft, ProductPayload};
