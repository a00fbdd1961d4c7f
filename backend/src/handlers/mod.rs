//! HTTP handlers

pub mod advice;
pub mod diagnosis;
pub mod health;
pub mod pest_risk;

pub use advice::*;
pub use diagnosis::*;
pub use health::*;
pub use pest_risk::*;
