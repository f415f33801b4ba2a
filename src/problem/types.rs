//! Items, problem instances, and selections.

use std::collections::HashSet;
use std::fmt;

use crate::error::KnapsackError;

/// A single knapsack item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    /// Weight consumed when the item is packed.
    pub weight: u64,
    /// Value gained when the item is packed.
    pub value: u64,
}

impl Item {
    pub fn new(weight: u64, value: u64) -> Self {
        Self { weight, value }
    }

    /// Value per unit of weight, or `None` for a zero-weight item.
    pub fn density(&self) -> Option<f64> {
        if self.weight == 0 {
            None
        } else {
            Some(self.value as f64 / self.weight as f64)
        }
    }

    /// Whether the item costs no capacity but still adds value.
    ///
    /// Such items are packed unconditionally by every solver.
    pub fn is_free(&self) -> bool {
        self.weight == 0 && self.value > 0
    }
}

/// A validated 0/1 knapsack instance.
///
/// Construction checks that the sums of all weights and all values fit in
/// `u64`, so solvers can accumulate either quantity without overflow checks.
///
/// # Examples
///
/// ```
/// use u_knapsack::problem::{Item, Problem};
///
/// let problem = Problem::new(
///     50,
///     vec![Item::new(10, 60), Item::new(20, 100), Item::new(30, 120)],
/// )
/// .unwrap();
/// assert_eq!(problem.len(), 3);
/// assert_eq!(problem.total_value(), 280);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Problem {
    capacity: u64,
    items: Vec<Item>,
    total_weight: u64,
    total_value: u64,
}

impl Problem {
    /// Creates a problem from typed items.
    pub fn new(capacity: u64, items: Vec<Item>) -> Result<Self, KnapsackError> {
        let total_weight = items
            .iter()
            .try_fold(0u64, |acc, item| acc.checked_add(item.weight))
            .ok_or(KnapsackError::Overflow { quantity: "weight" })?;
        let total_value = items
            .iter()
            .try_fold(0u64, |acc, item| acc.checked_add(item.value))
            .ok_or(KnapsackError::Overflow { quantity: "value" })?;

        Ok(Self {
            capacity,
            items,
            total_weight,
            total_value,
        })
    }

    /// Creates a problem from parallel signed arrays.
    ///
    /// Rejects negative numbers and mismatched lengths instead of
    /// reporting them as a zero-valued answer.
    pub fn from_arrays(
        capacity: i64,
        weights: &[i64],
        values: &[i64],
    ) -> Result<Self, KnapsackError> {
        if capacity < 0 {
            return Err(KnapsackError::NegativeCapacity(capacity));
        }
        if weights.len() != values.len() {
            return Err(KnapsackError::LengthMismatch {
                weights: weights.len(),
                values: values.len(),
            });
        }

        let mut items = Vec::with_capacity(weights.len());
        for (index, (&weight, &value)) in weights.iter().zip(values).enumerate() {
            if weight < 0 {
                return Err(KnapsackError::NegativeWeight { index, weight });
            }
            if value < 0 {
                return Err(KnapsackError::NegativeValue { index, value });
            }
            items.push(Item::new(weight as u64, value as u64));
        }

        Self::new(capacity as u64, items)
    }

    pub fn capacity(&self) -> u64 {
        self.capacity
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn item(&self, index: usize) -> Item {
        self.items[index]
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of all item weights.
    pub fn total_weight(&self) -> u64 {
        self.total_weight
    }

    /// Sum of all item values. No selection can exceed it.
    pub fn total_value(&self) -> u64 {
        self.total_value
    }

    /// Returns a copy with a different capacity and the same items.
    pub fn with_capacity(&self, capacity: u64) -> Self {
        Self {
            capacity,
            ..self.clone()
        }
    }

    /// Checks a 0-based selection and returns its `(weight, value)`.
    ///
    /// Fails on out-of-range or repeated indices, and on selections that
    /// exceed the capacity.
    pub fn evaluate(&self, indices: &[usize]) -> Result<(u64, u64), KnapsackError> {
        let mut seen = HashSet::with_capacity(indices.len());
        let mut weight = 0u64;
        let mut value = 0u64;

        for &index in indices {
            if index >= self.items.len() {
                return Err(KnapsackError::InvalidSelection(format!(
                    "item {index} is out of bounds for {} items",
                    self.items.len()
                )));
            }
            if !seen.insert(index) {
                return Err(KnapsackError::InvalidSelection(format!(
                    "item {index} selected more than once"
                )));
            }
            // Bounded by the totals checked in `new`.
            weight += self.items[index].weight;
            value += self.items[index].value;
        }

        if weight > self.capacity {
            return Err(KnapsackError::InvalidSelection(format!(
                "total weight {weight} exceeds capacity {}",
                self.capacity
            )));
        }
        Ok((weight, value))
    }
}

/// The items chosen by a solver.
///
/// Indices are 0-based and kept in the order the solver recorded them; the
/// dynamic programming traceback records the highest index first.
/// [`one_based`](Self::one_based) and `Display` report them 1-based.
///
/// Serialize-only: the totals are derived from the pushed items and a
/// deserialized value could disagree with its indices.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Selection {
    indices: Vec<usize>,
    total_weight: u64,
    total_value: u64,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the item at `index` as chosen.
    pub fn push(&mut self, index: usize, item: Item) {
        self.indices.push(index);
        self.total_weight += item.weight;
        self.total_value += item.value;
    }

    /// Chosen 0-based indices, in recording order.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Chosen indices converted to 1-based positions.
    pub fn one_based(&self) -> Vec<usize> {
        self.indices.iter().map(|&i| i + 1).collect()
    }

    pub fn total_weight(&self) -> u64 {
        self.total_weight
    }

    pub fn total_value(&self) -> u64 {
        self.total_value
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn contains(&self, index: usize) -> bool {
        self.indices.contains(&index)
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (k, index) in self.indices.iter().enumerate() {
            if k > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", index + 1)?;
        }
        write!(
            f,
            "}} (weight {}, value {})",
            self.total_weight, self.total_value
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Problem {
        Problem::from_arrays(50, &[10, 20, 30], &[60, 100, 120]).unwrap()
    }

    #[test]
    fn test_from_arrays_builds_items() {
        let problem = sample();
        assert_eq!(problem.capacity(), 50);
        assert_eq!(problem.item(1), Item::new(20, 100));
        assert_eq!(problem.total_weight(), 60);
        assert_eq!(problem.total_value(), 280);
    }

    #[test]
    fn test_from_arrays_rejects_negative_capacity() {
        let err = Problem::from_arrays(-1, &[], &[]).unwrap_err();
        assert_eq!(err, KnapsackError::NegativeCapacity(-1));
    }

    #[test]
    fn test_from_arrays_rejects_negative_weight_and_value() {
        let err = Problem::from_arrays(10, &[1, -2], &[3, 4]).unwrap_err();
        assert_eq!(
            err,
            KnapsackError::NegativeWeight {
                index: 1,
                weight: -2
            }
        );

        let err = Problem::from_arrays(10, &[1, 2], &[-3, 4]).unwrap_err();
        assert_eq!(err, KnapsackError::NegativeValue { index: 0, value: -3 });
    }

    #[test]
    fn test_from_arrays_rejects_length_mismatch() {
        let err = Problem::from_arrays(10, &[1, 2], &[3]).unwrap_err();
        assert_eq!(
            err,
            KnapsackError::LengthMismatch {
                weights: 2,
                values: 1
            }
        );
    }

    #[test]
    fn test_new_rejects_value_overflow() {
        let items = vec![Item::new(1, u64::MAX), Item::new(1, 1)];
        let err = Problem::new(5, items).unwrap_err();
        assert_eq!(err, KnapsackError::Overflow { quantity: "value" });
    }

    #[test]
    fn test_new_rejects_weight_overflow() {
        let items = vec![Item::new(u64::MAX, 1), Item::new(2, 1)];
        let err = Problem::new(5, items).unwrap_err();
        assert_eq!(err, KnapsackError::Overflow { quantity: "weight" });
    }

    #[test]
    fn test_density() {
        assert_eq!(Item::new(10, 60).density(), Some(6.0));
        assert_eq!(Item::new(0, 60).density(), None);
        assert!(Item::new(0, 1).is_free());
        assert!(!Item::new(0, 0).is_free());
    }

    #[test]
    fn test_evaluate_accepts_feasible_selection() {
        assert_eq!(sample().evaluate(&[1, 2]).unwrap(), (50, 220));
        assert_eq!(sample().evaluate(&[]).unwrap(), (0, 0));
    }

    #[test]
    fn test_evaluate_rejects_bad_selections() {
        let problem = sample();
        assert!(problem.evaluate(&[3]).is_err());
        assert!(problem.evaluate(&[0, 0]).is_err());
        assert!(problem.evaluate(&[0, 1, 2]).is_err());
    }

    #[test]
    fn test_with_capacity_keeps_items() {
        let problem = sample().with_capacity(5);
        assert_eq!(problem.capacity(), 5);
        assert_eq!(problem.len(), 3);
        assert_eq!(problem.total_value(), 280);
    }

    #[test]
    fn test_selection_reports_one_based() {
        let problem = sample();
        let mut selection = Selection::new();
        selection.push(2, problem.item(2));
        selection.push(1, problem.item(1));

        assert_eq!(selection.indices(), &[2, 1]);
        assert_eq!(selection.one_based(), vec![3, 2]);
        assert_eq!(selection.total_weight(), 50);
        assert_eq!(selection.total_value(), 220);
        assert!(selection.contains(1));
        assert!(!selection.contains(0));
        assert_eq!(selection.to_string(), "{3, 2} (weight 50, value 220)");
    }

    #[test]
    fn test_selection_totals_match_evaluate() {
        let problem = sample();
        let mut selection = Selection::new();
        for index in [2, 0] {
            selection.push(index, problem.item(index));
        }
        let (weight, value) = problem.evaluate(selection.indices()).unwrap();
        assert_eq!(selection.total_weight(), weight);
        assert_eq!(selection.total_value(), value);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_derived_types_serialize() {
        fn serializable<T: serde::Serialize>() {}
        serializable::<Problem>();
        serializable::<Selection>();
    }
}
