//! Bottom-up value table and its traceback.

use crate::error::KnapsackError;
use crate::problem::{Problem, Selection};

/// Best values for every item prefix and residual capacity.
///
/// Cell `(i, w)` holds the best value using only the first `i` items with
/// capacity `w`. Rows are stored back to back in one allocation. For a
/// fixed row, values never decrease as `w` grows.
pub struct DpTable<'a> {
    problem: &'a Problem,
    columns: usize,
    cells: Vec<u64>,
}

impl<'a> DpTable<'a> {
    /// Fills the table for `problem`.
    ///
    /// Fails with [`KnapsackError::TableTooLarge`] before allocating when
    /// the table would need more than `max_cells` cells.
    pub fn build(problem: &'a Problem, max_cells: usize) -> Result<Self, KnapsackError> {
        let rows = problem.len() + 1;
        let required = rows as u128 * (problem.capacity() as u128 + 1);
        let columns = usize::try_from(problem.capacity())
            .ok()
            .and_then(|c| c.checked_add(1))
            .filter(|_| required <= max_cells as u128)
            .ok_or(KnapsackError::TableTooLarge {
                required,
                limit: max_cells,
            })?;

        let mut cells = vec![0u64; rows * columns];

        for i in 1..rows {
            let item = problem.item(i - 1);
            let (done, rest) = cells.split_at_mut(i * columns);
            let prev = &done[(i - 1) * columns..];
            let cur = &mut rest[..columns];

            for (w, cell) in cur.iter_mut().enumerate() {
                *cell = if item.weight > w as u64 {
                    prev[w]
                } else {
                    let with = prev[w - item.weight as usize] + item.value;
                    prev[w].max(with)
                };
            }
        }

        Ok(Self {
            problem,
            columns,
            cells,
        })
    }

    /// Number of rows, one more than the item count.
    pub fn rows(&self) -> usize {
        self.cells.len() / self.columns
    }

    /// Number of columns, one more than the capacity.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Best value over the first `items` items with capacity `capacity`.
    pub fn get(&self, items: usize, capacity: usize) -> u64 {
        self.cells[items * self.columns + capacity]
    }

    pub fn row(&self, items: usize) -> &[u64] {
        &self.cells[items * self.columns..(items + 1) * self.columns]
    }

    /// The optimum: every item, full capacity.
    pub fn value(&self) -> u64 {
        self.get(self.rows() - 1, self.columns - 1)
    }

    /// Walks the table backwards to recover one optimal item set.
    ///
    /// Items are visited from the last to the first. An item is taken
    /// whenever the residual value differs from the row above; the walk
    /// ends early once the residual value reaches zero.
    pub fn reconstruct(&self) -> Selection {
        let mut selection = Selection::new();
        let mut residual = self.value();
        let mut w = self.columns - 1;

        for i in (1..self.rows()).rev() {
            if residual == 0 {
                break;
            }
            if residual == self.get(i - 1, w) {
                continue;
            }
            let item = self.problem.item(i - 1);
            selection.push(i - 1, item);
            residual -= item.value;
            w -= item.weight as usize;
        }

        selection
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem::Item;

    fn classic() -> Problem {
        Problem::from_arrays(50, &[10, 20, 30], &[60, 100, 120]).unwrap()
    }

    #[test]
    fn test_table_shape() {
        let problem = classic();
        let table = DpTable::build(&problem, 1_000).unwrap();
        assert_eq!(table.rows(), 4);
        assert_eq!(table.columns(), 51);
        assert!(table.row(0).iter().all(|&v| v == 0));
    }

    #[test]
    fn test_table_values() {
        let problem = classic();
        let table = DpTable::build(&problem, 1_000).unwrap();
        assert_eq!(table.get(1, 9), 0);
        assert_eq!(table.get(1, 10), 60);
        assert_eq!(table.get(2, 30), 160);
        assert_eq!(table.value(), 220);
    }

    #[test]
    fn test_rows_are_non_decreasing() {
        let problem = Problem::from_arrays(20, &[3, 7, 2, 9, 4], &[4, 9, 3, 11, 6]).unwrap();
        let table = DpTable::build(&problem, 1_000).unwrap();
        for i in 0..table.rows() {
            for pair in table.row(i).windows(2) {
                assert!(pair[0] <= pair[1], "row {i}: {} > {}", pair[0], pair[1]);
            }
        }
    }

    #[test]
    fn test_reconstruct_classic() {
        let problem = classic();
        let table = DpTable::build(&problem, 1_000).unwrap();
        let selection = table.reconstruct();
        assert_eq!(selection.indices(), &[2, 1]);
        assert_eq!(selection.total_value(), 220);
        assert_eq!(selection.total_weight(), 50);
    }

    #[test]
    fn test_reconstruct_free_item() {
        let problem = Problem::new(0, vec![Item::new(2, 5), Item::new(0, 3)]).unwrap();
        let table = DpTable::build(&problem, 1_000).unwrap();
        assert_eq!(table.value(), 3);
        assert_eq!(table.reconstruct().indices(), &[1]);
    }

    #[test]
    fn test_reconstruct_skips_zero_value_items() {
        let problem = Problem::from_arrays(5, &[1, 1], &[0, 0]).unwrap();
        let table = DpTable::build(&problem, 1_000).unwrap();
        assert!(table.reconstruct().is_empty());
    }

    #[test]
    fn test_table_too_large() {
        let problem = classic();
        let err = DpTable::build(&problem, 100).err().unwrap();
        assert_eq!(
            err,
            KnapsackError::TableTooLarge {
                required: 204,
                limit: 100
            }
        );
    }

    #[test]
    fn test_huge_capacity_rejected_before_allocation() {
        let problem = Problem::new(u64::MAX, vec![Item::new(1, 1)]).unwrap();
        let err = DpTable::build(&problem, usize::MAX).err().unwrap();
        assert!(matches!(err, KnapsackError::TableTooLarge { .. }));
    }
}
