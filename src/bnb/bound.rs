//! Fractional-relaxation upper bound.
//!
//! The bound fills the remaining capacity greedily by value density and
//! takes a fraction of the first item that does not fit. This is the LP
//! relaxation of the subproblem, so it never underestimates the best
//! integer completion of a node. Pruning is sound only because of that.
//!
//! The bound is kept in integers: the fractional term is rounded down,
//! which stays valid because any integer completion is at most the floor
//! of the relaxation. Float rounding would break pruning once values pass
//! 2^53.
//!
//! The greedy fill is a valid relaxation only over items sorted by
//! descending density. [`RelaxationOrder`] builds that order itself and
//! sets zero-weight items aside, so the fractional term never divides by
//! zero.
//!
//! # Reference
//!
//! Dantzig (1957), "Discrete-Variable Extremum Problems"

use std::cmp::Ordering;

use crate::problem::{Item, Problem};

/// Items with positive weight, sorted by descending value density.
///
/// Ties keep the original item order. Zero-weight items are not part of
/// the order: those with positive value are always packed and summed into
/// [`free_value`](Self::free_value).
#[derive(Debug, Clone)]
pub struct RelaxationOrder {
    items: Vec<Item>,
    original: Vec<usize>,
    free_value: u64,
}

impl RelaxationOrder {
    pub fn new(problem: &Problem) -> Self {
        let mut ranked: Vec<(usize, Item)> = problem
            .items()
            .iter()
            .copied()
            .enumerate()
            .filter(|(_, item)| item.weight > 0)
            .collect();
        ranked.sort_by(|(_, a), (_, b)| density_cmp(b, a));

        let free_value = problem
            .items()
            .iter()
            .filter(|item| item.weight == 0)
            .map(|item| item.value)
            .sum();

        Self {
            original: ranked.iter().map(|&(i, _)| i).collect(),
            items: ranked.into_iter().map(|(_, item)| item).collect(),
            free_value,
        }
    }

    /// Number of positive-weight items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The `rank`-th densest item.
    pub fn item(&self, rank: usize) -> Item {
        self.items[rank]
    }

    /// Index of the `rank`-th densest item in the source problem.
    pub fn original_index(&self, rank: usize) -> usize {
        self.original[rank]
    }

    /// Total value of zero-weight items.
    pub fn free_value(&self) -> u64 {
        self.free_value
    }
}

/// Compares two positive-weight items by density, exactly.
fn density_cmp(a: &Item, b: &Item) -> Ordering {
    let lhs = a.value as u128 * b.weight as u128;
    let rhs = b.value as u128 * a.weight as u128;
    lhs.cmp(&rhs)
}

/// A node of the branch-and-bound tree.
///
/// The first `decided` items of the [`RelaxationOrder`] have been either
/// packed or skipped. The root has decided nothing; its level is `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartialSolution {
    decided: usize,
    weight: u64,
    value: u64,
    bound: u64,
}

impl PartialSolution {
    /// The root sentinel, carrying the value of the free items.
    pub fn root(free_value: u64) -> Self {
        Self {
            decided: 0,
            weight: 0,
            value: free_value,
            bound: 0,
        }
    }

    /// A child with the given totals and an unset bound.
    pub fn child(decided: usize, weight: u64, value: u64) -> Self {
        Self {
            decided,
            weight,
            value,
            bound: 0,
        }
    }

    /// Rank of the last decided item, `None` at the root.
    pub fn level(&self) -> Option<usize> {
        self.decided.checked_sub(1)
    }

    /// Number of items decided so far.
    pub fn decided(&self) -> usize {
        self.decided
    }

    pub fn weight(&self) -> u64 {
        self.weight
    }

    pub fn value(&self) -> u64 {
        self.value
    }

    pub fn bound(&self) -> u64 {
        self.bound
    }

    /// Computes and stores this node's bound.
    pub fn with_bound(mut self, order: &RelaxationOrder, capacity: u64) -> Self {
        self.bound = upper_bound(&self, order, capacity);
        self
    }
}

/// Upper bound on the best value reachable by extending `partial`.
///
/// Returns `0` when the node has no capacity left, and exactly the node's
/// value when no undecided items remain. The fractional term is rounded
/// down.
pub fn upper_bound(partial: &PartialSolution, order: &RelaxationOrder, capacity: u64) -> u64 {
    if partial.weight >= capacity {
        return 0;
    }

    // Never exceeds the problem's total value, so `u64` cannot overflow.
    let mut bound = partial.value;
    let mut total_weight = partial.weight;
    let mut j = partial.decided;

    while j < order.len() && order.item(j).weight <= capacity - total_weight {
        let item = order.item(j);
        total_weight += item.weight;
        bound += item.value;
        j += 1;
    }

    if j < order.len() {
        let item = order.item(j);
        let remaining = (capacity - total_weight) as u128;
        // remaining < item.weight, so the quotient is below item.value.
        bound += (remaining * item.value as u128 / item.weight as u128) as u64;
    }

    bound
}
