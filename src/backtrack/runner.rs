//! Exhaustive include/exclude search.
//!
//! # Algorithm
//!
//! Looks at the last unconsidered item of the instance:
//!
//! 1. No items left, or no capacity left: the branch ends
//! 2. Item heavier than the remaining capacity: exclude it
//! 3. Otherwise branch on including and excluding it
//!
//! The best value over all ended branches is the optimum. There is no
//! memoization and no pruning, so the search visits up to `2^n` nodes.
//! Branches live on an explicit stack, so item count does not bound the
//! call depth.

use tracing::debug;

use crate::problem::Problem;

/// Result of a backtracking run.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BacktrackResult {
    /// Optimal total value.
    pub best_value: u64,
    /// Search nodes popped from the stack.
    pub nodes_visited: u64,
}

/// One pending branch: the first `remaining` items are still open.
struct Frame {
    remaining: usize,
    capacity: u64,
    value: u64,
}

/// Backtracking runner.
pub struct BacktrackRunner;

impl BacktrackRunner {
    /// Solves the instance by exhaustive case analysis.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_knapsack::backtrack::BacktrackRunner;
    /// use u_knapsack::problem::Problem;
    ///
    /// let problem = Problem::from_arrays(50, &[10, 20, 30], &[60, 100, 120]).unwrap();
    /// assert_eq!(BacktrackRunner::run(&problem).best_value, 220);
    /// ```
    pub fn run(problem: &Problem) -> BacktrackResult {
        let items = problem.items();
        debug!(
            items = items.len(),
            capacity = problem.capacity(),
            "backtracking started"
        );

        // free_prefix[k]: value of the zero-weight items among the first k.
        // A branch that runs out of capacity still collects these.
        let mut free_prefix = Vec::with_capacity(items.len() + 1);
        free_prefix.push(0u64);
        for item in items {
            let last = free_prefix[free_prefix.len() - 1];
            free_prefix.push(if item.weight == 0 { last + item.value } else { last });
        }

        let mut stack = vec![Frame {
            remaining: items.len(),
            capacity: problem.capacity(),
            value: 0,
        }];
        let mut best_value = 0u64;
        let mut nodes_visited = 0u64;

        while let Some(frame) = stack.pop() {
            nodes_visited += 1;

            if frame.remaining == 0 || frame.capacity == 0 {
                best_value = best_value.max(frame.value + free_prefix[frame.remaining]);
                continue;
            }

            let item = items[frame.remaining - 1];
            let remaining = frame.remaining - 1;

            if item.weight > frame.capacity {
                stack.push(Frame { remaining, ..frame });
                continue;
            }

            stack.push(Frame {
                remaining,
                capacity: frame.capacity - item.weight,
                value: frame.value + item.value,
            });
            stack.push(Frame { remaining, ..frame });
        }

        debug!(best_value, nodes_visited, "backtracking finished");

        BacktrackResult {
            best_value,
            nodes_visited,
        }
    }
}
