//! Exact solvers for the 0/1 knapsack problem.
//!
//! Three independent strategies compute the same optimum:
//!
//! - **Backtracking**: exhaustive include/exclude enumeration, no pruning.
//!   The reference the other two are checked against.
//! - **Branch-and-Bound (B&B)**: frontier search over density-ordered
//!   items, pruned with the fractional-relaxation (LP) upper bound.
//! - **Dynamic Programming (DP)**: bottom-up table over item prefixes and
//!   capacities, with a traceback that recovers the chosen items.
//!
//! # Quick Start
//!
//! ```
//! let weights = [10, 20, 30];
//! let values = [60, 100, 120];
//!
//! assert_eq!(u_knapsack::backtracking(50, &weights, &values).unwrap(), 220);
//! assert_eq!(u_knapsack::branch_and_bound(50, &weights, &values).unwrap(), 220);
//!
//! let (value, items) = u_knapsack::dp(50, &weights, &values).unwrap();
//! assert_eq!(value, 220);
//! assert_eq!(items, vec![3, 2]);
//! ```
//!
//! # Degenerate items
//!
//! Items with zero weight and positive value are packed unconditionally by
//! every solver.

pub mod backtrack;
pub mod bnb;
pub mod dp;
pub mod error;
pub mod problem;
pub mod solver;

pub use error::KnapsackError;
pub use solver::{BacktrackSolver, BranchBoundSolver, DpSolver, KnapsackSolver, Strategy};

use bnb::{BranchBoundConfig, BranchBoundRunner};
use dp::{DpConfig, DpRunner};
use problem::Problem;

/// Optimal value by exhaustive backtracking.
///
/// `weights` and `values` must have the same length and, like `capacity`,
/// contain no negative numbers.
pub fn backtracking(capacity: i64, weights: &[i64], values: &[i64]) -> Result<u64, KnapsackError> {
    let problem = Problem::from_arrays(capacity, weights, values)?;
    Ok(backtrack::BacktrackRunner::run(&problem).best_value)
}

/// Optimal value by FIFO branch-and-bound.
pub fn branch_and_bound(
    capacity: i64,
    weights: &[i64],
    values: &[i64],
) -> Result<u64, KnapsackError> {
    let problem = Problem::from_arrays(capacity, weights, values)?;
    Ok(BranchBoundRunner::run(&problem, &BranchBoundConfig::default())?.best_value)
}

/// Optimal value and selected items by dynamic programming.
///
/// Selected items are 1-based positions, highest first.
pub fn dp(
    capacity: i64,
    weights: &[i64],
    values: &[i64],
) -> Result<(u64, Vec<usize>), KnapsackError> {
    let problem = Problem::from_arrays(capacity, weights, values)?;
    let result = DpRunner::run(&problem, &DpConfig::default())?;
    Ok((result.best_value, result.selection.one_based()))
}
