//! Dynamic programming configuration.

/// Configuration for [`DpRunner`](super::DpRunner).
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DpConfig {
    /// Largest table, in cells, the solver may allocate.
    ///
    /// The table has `(items + 1) * (capacity + 1)` cells of 8 bytes each.
    /// The default of 2^27 cells is 1 GiB.
    pub max_cells: usize,
}

impl Default for DpConfig {
    fn default() -> Self {
        Self {
            max_cells: 1 << 27,
        }
    }
}

impl DpConfig {
    pub fn with_max_cells(mut self, cells: usize) -> Self {
        self.max_cells = cells;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.max_cells == 0 {
            return Err("max_cells must be positive".into());
        }
        Ok(())
    }
}
