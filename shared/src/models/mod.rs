//! Domain models for the LeafGuard platform

mod assessment;
mod classification;
mod pest;
mod risk;
mod weather;

pub use assessment::*;
pub use classification::*;
pub use pest::*;
pub use risk::*;
pub use weather::*;
