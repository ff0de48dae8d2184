//! Shared domain model and view-model logic for the farmgate web client.
//!
//! Everything in this crate is pure and synchronous so it can be exercised
//! natively with `cargo test`, independent of the browser.

pub mod display;
pub mod farmers;
pub mod model;
pub mod normalize;
pub mod orders;
pub mod validate;
