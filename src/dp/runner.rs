//! Dynamic programming execution engine.

use tracing::debug;

use super::config::DpConfig;
use super::table::DpTable;
use crate::error::KnapsackError;
use crate::problem::{Problem, Selection};

/// Result of a dynamic programming run.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DpResult {
    /// Optimal total value.
    pub best_value: u64,
    /// One optimal item set, highest index first.
    pub selection: Selection,
}

/// Dynamic programming runner.
pub struct DpRunner;

impl DpRunner {
    /// Solves the instance and reconstructs an optimal selection.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_knapsack::dp::{DpConfig, DpRunner};
    /// use u_knapsack::problem::Problem;
    ///
    /// let problem = Problem::from_arrays(50, &[10, 20, 30], &[60, 100, 120]).unwrap();
    /// let result = DpRunner::run(&problem, &DpConfig::default()).unwrap();
    /// assert_eq!(result.best_value, 220);
    /// assert_eq!(result.selection.one_based(), vec![3, 2]);
    /// ```
    pub fn run(problem: &Problem, config: &DpConfig) -> Result<DpResult, KnapsackError> {
        config.validate().map_err(KnapsackError::InvalidConfig)?;

        debug!(
            items = problem.len(),
            capacity = problem.capacity(),
            "dynamic programming started"
        );

        let table = DpTable::build(problem, config.max_cells)?;
        let best_value = table.value();
        let selection = table.reconstruct();

        debug_assert_eq!(selection.total_value(), best_value);
        debug_assert!(selection.total_weight() <= problem.capacity());

        debug!(
            best_value,
            selected = selection.len(),
            cells = table.rows() * table.columns(),
            "dynamic programming finished"
        );

        Ok(DpResult {
            best_value,
            selection,
        })
    }
}
