//! Exhaustive backtracking.
//!
//! Enumerates every include/exclude decision without pruning. It is the
//! slowest solver and the reference every other solver is checked against.

mod runner;

pub use runner::{BacktrackResult, BacktrackRunner};
