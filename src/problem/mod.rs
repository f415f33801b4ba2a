//! Problem model.
//!
//! - [`Item`]: a `(weight, value)` pair
//! - [`Problem`]: validated capacity plus an index-stable item list
//! - [`Selection`]: items chosen by a solver, reported 1-based
//! - [`generate`]: seeded random instances for tests and benchmarks

mod generator;
mod types;

pub use generator::{generate, Correlation, GeneratorConfig};
pub use types::{Item, Problem, Selection};
