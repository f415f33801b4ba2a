//! Branch-and-bound configuration.

use super::frontier::FrontierDiscipline;

/// Configuration for [`BranchBoundRunner`](super::BranchBoundRunner).
///
/// # Examples
///
/// ```
/// use u_knapsack::bnb::{BranchBoundConfig, FrontierDiscipline};
///
/// let config = BranchBoundConfig::default()
///     .with_discipline(FrontierDiscipline::BestFirst)
///     .with_max_frontier(10_000);
/// assert!(config.validate().is_ok());
/// assert!(config.pruning);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BranchBoundConfig {
    /// Frontier ordering. FIFO by default.
    pub discipline: FrontierDiscipline,

    /// Whether children whose bound cannot beat the incumbent are dropped.
    ///
    /// With pruning off, every feasible child is explored. The optimum is
    /// the same either way; turning it off only serves to check the bound.
    pub pruning: bool,

    /// Maximum number of nodes held in the frontier at once.
    ///
    /// `None` lets the frontier grow as needed.
    pub max_frontier: Option<usize>,
}

impl Default for BranchBoundConfig {
    fn default() -> Self {
        Self {
            discipline: FrontierDiscipline::Fifo,
            pruning: true,
            max_frontier: None,
        }
    }
}

impl BranchBoundConfig {
    pub fn with_discipline(mut self, discipline: FrontierDiscipline) -> Self {
        self.discipline = discipline;
        self
    }

    pub fn with_pruning(mut self, pruning: bool) -> Self {
        self.pruning = pruning;
        self
    }

    pub fn with_max_frontier(mut self, limit: usize) -> Self {
        self.max_frontier = Some(limit);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.max_frontier == Some(0) {
            return Err("max_frontier must be at least 1".into());
        }
        Ok(())
    }
}
