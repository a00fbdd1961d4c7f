//! Pest risk assessment engine
//!
//! Weather reading → per-category scores → overall verdict plus guidance →
//! optional override from the leaf classifier. Every stage is a pure
//! function of its inputs.

pub mod aggregator;
pub mod reconcile;
pub mod recommendations;
pub mod rules;
pub mod scorer;

pub use aggregator::*;
pub use reconcile::*;
pub use recommendations::*;
pub use rules::*;
pub use scorer::*;
