//! Uniform solver interface.
//!
//! Each strategy sits behind [`KnapsackSolver`] so a caller, such as a
//! benchmark harness, can run all of them the same way and compare the
//! optima they return.

use crate::backtrack::BacktrackRunner;
use crate::bnb::{BranchBoundConfig, BranchBoundRunner};
use crate::dp::{DpConfig, DpRunner};
use crate::error::KnapsackError;
use crate::problem::Problem;

/// An exact 0/1 knapsack solver.
pub trait KnapsackSolver {
    /// Short identifier for reports.
    fn name(&self) -> &'static str;

    /// Returns the optimal total value.
    fn solve(&self, problem: &Problem) -> Result<u64, KnapsackError>;
}

/// Exhaustive backtracking.
#[derive(Debug, Clone, Copy, Default)]
pub struct BacktrackSolver;

impl KnapsackSolver for BacktrackSolver {
    fn name(&self) -> &'static str {
        "backtracking"
    }

    fn solve(&self, problem: &Problem) -> Result<u64, KnapsackError> {
        Ok(BacktrackRunner::run(problem).best_value)
    }
}

/// Branch-and-bound with a fractional-relaxation bound.
#[derive(Debug, Clone, Default)]
pub struct BranchBoundSolver {
    pub config: BranchBoundConfig,
}

impl BranchBoundSolver {
    pub fn new(config: BranchBoundConfig) -> Self {
        Self { config }
    }
}

impl KnapsackSolver for BranchBoundSolver {
    fn name(&self) -> &'static str {
        "branch-and-bound"
    }

    fn solve(&self, problem: &Problem) -> Result<u64, KnapsackError> {
        BranchBoundRunner::run(problem, &self.config).map(|r| r.best_value)
    }
}

/// Bottom-up dynamic programming.
#[derive(Debug, Clone, Default)]
pub struct DpSolver {
    pub config: DpConfig,
}

impl DpSolver {
    pub fn new(config: DpConfig) -> Self {
        Self { config }
    }
}

impl KnapsackSolver for DpSolver {
    fn name(&self) -> &'static str {
        "dynamic-programming"
    }

    fn solve(&self, problem: &Problem) -> Result<u64, KnapsackError> {
        DpRunner::run(problem, &self.config).map(|r| r.best_value)
    }
}

/// The available strategies, each run with its default configuration.
///
/// # Examples
///
/// ```
/// use u_knapsack::problem::Problem;
/// use u_knapsack::Strategy;
///
/// let problem = Problem::from_arrays(50, &[10, 20, 30], &[60, 100, 120]).unwrap();
/// for strategy in Strategy::ALL {
///     assert_eq!(strategy.solve(&problem).unwrap(), 220);
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strategy {
    Backtracking,
    BranchAndBound,
    DynamicProgramming,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [
        Strategy::Backtracking,
        Strategy::BranchAndBound,
        Strategy::DynamicProgramming,
    ];

    /// A solver for this strategy with default configuration.
    pub fn solver(self) -> Box<dyn KnapsackSolver> {
        match self {
            Strategy::Backtracking => Box::new(BacktrackSolver),
            Strategy::BranchAndBound => Box::new(BranchBoundSolver::default()),
            Strategy::DynamicProgramming => Box::new(DpSolver::default()),
        }
    }

    pub fn name(self) -> &'static str {
        self.solver().name()
    }

    pub fn solve(self, problem: &Problem) -> Result<u64, KnapsackError> {
        self.solver().solve(problem)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategies_agree() {
        let problem = Problem::from_arrays(10, &[5, 4, 6, 3], &[10, 40, 30, 50]).unwrap();
        let values: Vec<u64> = Strategy::ALL
            .iter()
            .map(|s| s.solve(&problem).unwrap())
            .collect();
        assert_eq!(values, vec![90, 90, 90]);
    }

    #[test]
    fn test_strategy_names() {
        assert_eq!(Strategy::Backtracking.name(), "backtracking");
        assert_eq!(Strategy::BranchAndBound.name(), "branch-and-bound");
        assert_eq!(Strategy::DynamicProgramming.name(), "dynamic-programming");
    }

    #[test]
    fn test_configured_solver_errors_propagate() {
        let problem = Problem::from_arrays(100, &[1, 2, 3], &[1, 2, 3]).unwrap();
        let solver = DpSolver::new(DpConfig::default().with_max_cells(10));
        assert!(matches!(
            solver.solve(&problem),
            Err(KnapsackError::TableTooLarge { .. })
        ));
    }
}
