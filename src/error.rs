//! Error type shared by every solver.

/// Errors raised while building a problem or running a solver.
///
/// Instance errors are raised before any search starts; a solver either
/// returns the exact optimum or one of these, never a partial answer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KnapsackError {
    /// Capacity below zero.
    #[error("capacity must be non-negative, got {0}")]
    NegativeCapacity(i64),

    /// An item weight below zero. `index` is 0-based.
    #[error("item {index} has negative weight {weight}")]
    NegativeWeight { index: usize, weight: i64 },

    /// An item value below zero. `index` is 0-based.
    #[error("item {index} has negative value {value}")]
    NegativeValue { index: usize, value: i64 },

    /// Weight and value arrays of different length.
    #[error("weights and values differ in length ({weights} vs {values})")]
    LengthMismatch { weights: usize, values: usize },

    /// The sum of all weights or all values does not fit in `u64`.
    #[error("total {quantity} of all items overflows u64")]
    Overflow { quantity: &'static str },

    /// A bounded branch-and-bound frontier ran out of room.
    #[error("branch-and-bound frontier exceeded its limit of {limit} nodes")]
    FrontierExhausted { limit: usize },

    /// The dynamic programming table would exceed the configured size.
    #[error("dynamic programming table needs {required} cells, limit is {limit}")]
    TableTooLarge { required: u128, limit: usize },

    /// A configuration failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A candidate selection was rejected by [`Problem::evaluate`](crate::problem::Problem::evaluate).
    #[error("invalid selection: {0}")]
    InvalidSelection(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            KnapsackError::NegativeCapacity(-3).to_string(),
            "capacity must be non-negative, got -3"
        );
        assert_eq!(
            KnapsackError::LengthMismatch {
                weights: 2,
                values: 3
            }
            .to_string(),
            "weights and values differ in length (2 vs 3)"
        );
        assert_eq!(
            KnapsackError::FrontierExhausted { limit: 8 }.to_string(),
            "branch-and-bound frontier exceeded its limit of 8 nodes"
        );
    }
}
