//! Branch-and-bound execution engine.
//!
//! # Algorithm
//!
//! 1. Order the items by density and enqueue the root with its bound
//! 2. Repeatedly take a node from the frontier:
//!    a. A node with every item decided is a leaf: drop it
//!    b. Build the include-child; if it fits and beats the incumbent,
//!       it becomes the new incumbent right away
//!    c. Build the exclude-child
//!    d. Enqueue each child only if its bound beats the incumbent
//! 3. Stop when the frontier is empty
//!
//! # Reference
//!
//! Kolesar (1967), "A Branch and Bound Algorithm for the Knapsack Problem"

use tracing::{debug, trace};

use super::bound::{PartialSolution, RelaxationOrder};
use super::config::BranchBoundConfig;
use super::frontier::{Frontier, FrontierDiscipline};
use crate::error::KnapsackError;
use crate::problem::Problem;

/// Result of a branch-and-bound run.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BranchBoundResult {
    /// Optimal total value.
    pub best_value: u64,
    /// Nodes taken from the frontier.
    pub nodes_expanded: u64,
    /// Nodes admitted to the frontier, root included.
    pub nodes_enqueued: u64,
    /// Children discarded without being enqueued.
    pub nodes_pruned: u64,
    /// Times the incumbent improved.
    pub improvements: u64,
    /// Largest frontier size reached.
    pub peak_frontier: usize,
}

/// Branch-and-bound runner.
pub struct BranchBoundRunner;

impl BranchBoundRunner {
    /// Solves the instance.
    ///
    /// Fails only on an invalid config or when a bounded frontier overflows.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_knapsack::bnb::{BranchBoundConfig, BranchBoundRunner};
    /// use u_knapsack::problem::Problem;
    ///
    /// let problem = Problem::from_arrays(50, &[10, 20, 30], &[60, 100, 120]).unwrap();
    /// let result = BranchBoundRunner::run(&problem, &BranchBoundConfig::default()).unwrap();
    /// assert_eq!(result.best_value, 220);
    /// ```
    pub fn run(
        problem: &Problem,
        config: &BranchBoundConfig,
    ) -> Result<BranchBoundResult, KnapsackError> {
        config.validate().map_err(KnapsackError::InvalidConfig)?;

        let capacity = problem.capacity();
        let order = RelaxationOrder::new(problem);
        let n = order.len();

        debug!(
            items = n,
            free_value = order.free_value(),
            capacity,
            discipline = ?config.discipline,
            pruning = config.pruning,
            "branch-and-bound started"
        );

        let mut frontier = Frontier::new(config.discipline, config.max_frontier);
        let mut best = order.free_value();
        let mut nodes_expanded = 0u64;
        let mut nodes_enqueued = 0u64;
        let mut nodes_pruned = 0u64;
        let mut improvements = 0u64;

        let root = PartialSolution::root(order.free_value()).with_bound(&order, capacity);
        frontier.push(root)?;
        nodes_enqueued += 1;

        while let Some(node) = frontier.pop() {
            // Under best-first no node left can beat this one's bound.
            if config.pruning
                && config.discipline == FrontierDiscipline::BestFirst
                && node.bound() <= best
            {
                break;
            }

            nodes_expanded += 1;

            if node.decided() == n {
                continue;
            }

            let item = order.item(node.decided());
            let level = node.decided() + 1;

            let include = PartialSolution::child(
                level,
                node.weight() + item.weight,
                node.value() + item.value,
            );
            if include.weight() <= capacity && include.value() > best {
                best = include.value();
                improvements += 1;
                trace!(best, level, "incumbent improved");
            }
            let include = include.with_bound(&order, capacity);

            let exclude =
                PartialSolution::child(level, node.weight(), node.value()).with_bound(&order, capacity);

            for child in [include, exclude] {
                let admit = if config.pruning {
                    child.bound() > best
                } else {
                    child.weight() <= capacity
                };
                if admit {
                    frontier.push(child)?;
                    nodes_enqueued += 1;
                } else {
                    nodes_pruned += 1;
                }
            }
        }

        debug!(
            best_value = best,
            nodes_expanded,
            nodes_pruned,
            peak_frontier = frontier.peak(),
            "branch-and-bound finished"
        );

        Ok(BranchBoundResult {
            best_value: best,
            nodes_expanded,
            nodes_enqueued,
            nodes_pruned,
            improvements,
            peak_frontier: frontier.peak(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem::Item;

    fn solve_with(problem: &Problem, config: &BranchBoundConfig) -> u64 {
        BranchBoundRunner::run(problem, config).unwrap().best_value
    }

    fn all_configs() -> Vec<BranchBoundConfig> {
        let mut configs = Vec::new();
        for discipline in [FrontierDiscipline::Fifo, FrontierDiscipline::BestFirst] {
            for pruning in [true, false] {
                configs.push(
                    BranchBoundConfig::default()
                        .with_discipline(discipline)
                        .with_pruning(pruning),
                );
            }
        }
        configs
    }

    #[test]
    fn test_bnb_classic_instance() {
        let problem = Problem::from_arrays(50, &[10, 20, 30], &[60, 100, 120]).unwrap();
        for config in all_configs() {
            assert_eq!(solve_with(&problem, &config), 220, "{config:?}");
        }
    }

    #[test]
    fn test_bnb_six_items() {
        let problem = Problem::from_arrays(
            400,
            &[40, 80, 120, 160, 200, 240],
            &[240, 400, 480, 560, 600, 800],
        )
        .unwrap();
        for config in all_configs() {
            assert_eq!(solve_with(&problem, &config), 1680, "{config:?}");
        }
    }

    #[test]
    fn test_bnb_unsorted_input() {
        // Densest item last in input order.
        let problem = Problem::from_arrays(10, &[5, 4, 6, 3], &[10, 40, 30, 50]).unwrap();
        assert_eq!(solve_with(&problem, &BranchBoundConfig::default()), 90);
    }

    #[test]
    fn test_bnb_trivial_instances() {
        let empty = Problem::from_arrays(10, &[], &[]).unwrap();
        let zero = Problem::from_arrays(0, &[1, 2], &[3, 4]).unwrap();
        let heavy = Problem::from_arrays(4, &[5], &[9]).unwrap();
        let exact = Problem::from_arrays(5, &[5], &[9]).unwrap();
        for config in all_configs() {
            assert_eq!(solve_with(&empty, &config), 0);
            assert_eq!(solve_with(&zero, &config), 0);
            assert_eq!(solve_with(&heavy, &config), 0);
            assert_eq!(solve_with(&exact, &config), 9);
        }
    }

    #[test]
    fn test_bnb_free_items() {
        let problem = Problem::new(
            3,
            vec![Item::new(0, 4), Item::new(3, 10), Item::new(2, 11), Item::new(0, 0)],
        )
        .unwrap();
        for config in all_configs() {
            assert_eq!(solve_with(&problem, &config), 15, "{config:?}");
        }

        let no_room = problem.with_capacity(0);
        for config in all_configs() {
            assert_eq!(solve_with(&no_room, &config), 4, "{config:?}");
        }
    }

    #[test]
    fn test_bnb_pruning_reduces_work() {
        let problem = Problem::from_arrays(
            400,
            &[40, 80, 120, 160, 200, 240],
            &[240, 400, 480, 560, 600, 800],
        )
        .unwrap();
        let pruned = BranchBoundRunner::run(&problem, &BranchBoundConfig::default()).unwrap();
        let full = BranchBoundRunner::run(
            &problem,
            &BranchBoundConfig::default().with_pruning(false),
        )
        .unwrap();
        assert_eq!(pruned.best_value, full.best_value);
        assert!(
            pruned.nodes_expanded < full.nodes_expanded,
            "pruned {} vs full {}",
            pruned.nodes_expanded,
            full.nodes_expanded
        );
        assert!(pruned.improvements >= 1);
    }

    #[test]
    fn test_bnb_frontier_limit_is_an_error() {
        let problem = Problem::from_arrays(
            400,
            &[40, 80, 120, 160, 200, 240],
            &[240, 400, 480, 560, 600, 800],
        )
        .unwrap();
        let config = BranchBoundConfig::default()
            .with_pruning(false)
            .with_max_frontier(2);
        let err = BranchBoundRunner::run(&problem, &config).unwrap_err();
        assert_eq!(err, KnapsackError::FrontierExhausted { limit: 2 });
    }

    #[test]
    fn test_bnb_invalid_config() {
        let problem = Problem::from_arrays(1, &[1], &[1]).unwrap();
        let config = BranchBoundConfig::default().with_max_frontier(0);
        assert!(matches!(
            BranchBoundRunner::run(&problem, &config),
            Err(KnapsackError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_bnb_values_beyond_float_precision() {
        let big = 1u64 << 60;
        let problem = Problem::new(2, vec![Item::new(1, big), Item::new(2, big + 1)]).unwrap();
        for config in all_configs() {
            assert_eq!(solve_with(&problem, &config), big + 1, "{config:?}");
        }
    }

    #[test]
    fn test_bnb_stats_are_consistent() {
        let problem = Problem::from_arrays(50, &[10, 20, 30], &[60, 100, 120]).unwrap();
        let result = BranchBoundRunner::run(&problem, &BranchBoundConfig::default()).unwrap();
        // Every enqueued node is expanded under FIFO.
        assert_eq!(result.nodes_enqueued, result.nodes_expanded);
        assert!(result.peak_frontier >= 1);
    }
}
