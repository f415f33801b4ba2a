//! Branch-and-bound.
//!
//! Explores include/exclude decisions over items ordered by value density,
//! discarding any subtree whose fractional-relaxation bound cannot beat
//! the best feasible value found so far.
//!
//! # Key Types
//!
//! - [`RelaxationOrder`]: density-sorted view of a problem
//! - [`PartialSolution`]: a search node; [`upper_bound`] computes its bound
//! - [`Frontier`]: FIFO or best-first node container
//! - [`BranchBoundConfig`]: discipline, pruning switch, frontier limit
//! - [`BranchBoundRunner`]: executes the search
//!
//! # References
//!
//! - Dantzig (1957), "Discrete-Variable Extremum Problems"
//! - Kolesar (1967), "A Branch and Bound Algorithm for the Knapsack Problem"
//! - Martello & Toth (1990), *Knapsack Problems: Algorithms and Computer Implementations*

mod bound;
mod config;
mod frontier;
mod runner;

pub use bound::{upper_bound, PartialSolution, RelaxationOrder};
pub use config::BranchBoundConfig;
pub use frontier::{Frontier, FrontierDiscipline};
pub use runner::{BranchBoundResult, BranchBoundRunner};
