//! Shared types and the pest risk engine for the LeafGuard platform
//!
//! This crate contains the pure assessment logic shared between the backend,
//! the browser (via WASM), and other components of the system. Nothing in
//! here performs I/O.

pub mod advice;
pub mod engine;
pub mod models;
pub mod types;
pub mod validation;

pub use advice::*;
pub use engine::*;
pub use models::*;
pub use types::*;
pub use validation::*;
