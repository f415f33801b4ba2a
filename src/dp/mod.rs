//! Dynamic programming with solution reconstruction.
//!
//! Fills a table of best values for every item prefix and residual
//! capacity, then walks it backwards to recover which items were packed.
//! Runs in `O(n * capacity)` time and memory, so it suits instances with
//! moderate capacities regardless of item count.
//!
//! # Reference
//!
//! Bellman (1957), *Dynamic Programming*

mod config;
mod runner;
mod table;

pub use config::DpConfig;
pub use runner::{DpResult, DpRunner};
pub use table::DpTable;
