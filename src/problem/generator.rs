//! Seeded random instance generation.
//!
//! Produces the classic uncorrelated, weakly correlated and strongly
//! correlated instance classes. Correlated classes are the hard ones for
//! bound-based search because item densities cluster together.
//!
//! # Reference
//!
//! Pisinger (2005), "Where are the hard knapsack problems?"

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::types::{Item, Problem};
use crate::error::KnapsackError;

/// How item values relate to item weights.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Correlation {
    /// Values drawn independently in `1..=max_value`.
    #[default]
    Uncorrelated,
    /// `value = weight ± max_weight / 10`, at least 1.
    WeaklyCorrelated,
    /// `value = weight + max_weight / 10`.
    StronglyCorrelated,
}

/// Parameters for [`generate`].
///
/// # Examples
///
/// ```
/// use u_knapsack::problem::{generate, Correlation, GeneratorConfig};
///
/// let config = GeneratorConfig::default()
///     .with_num_items(20)
///     .with_correlation(Correlation::StronglyCorrelated)
///     .with_seed(7);
/// let problem = generate(&config).unwrap();
/// assert_eq!(problem.len(), 20);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeneratorConfig {
    /// Number of items.
    pub num_items: usize,
    /// Largest item weight. Weights are drawn in `1..=max_weight`.
    pub max_weight: u64,
    /// Largest item value for [`Correlation::Uncorrelated`].
    pub max_value: u64,
    /// Capacity as a fraction of the total item weight, in `[0, 1]`.
    pub capacity_ratio: f64,
    /// Value/weight relationship.
    pub correlation: Correlation,
    /// Random seed (None uses 42).
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            num_items: 20,
            max_weight: 100,
            max_value: 100,
            capacity_ratio: 0.5,
            correlation: Correlation::default(),
            seed: None,
        }
    }
}

impl GeneratorConfig {
    pub fn with_num_items(mut self, n: usize) -> Self {
        self.num_items = n;
        self
    }

    pub fn with_max_weight(mut self, w: u64) -> Self {
        self.max_weight = w;
        self
    }

    pub fn with_max_value(mut self, v: u64) -> Self {
        self.max_value = v;
        self
    }

    pub fn with_capacity_ratio(mut self, ratio: f64) -> Self {
        self.capacity_ratio = ratio;
        self
    }

    pub fn with_correlation(mut self, correlation: Correlation) -> Self {
        self.correlation = correlation;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.max_weight == 0 {
            return Err("max_weight must be positive".into());
        }
        if self.max_value == 0 {
            return Err("max_value must be positive".into());
        }
        if !(0.0..=1.0).contains(&self.capacity_ratio) {
            return Err(format!(
                "capacity_ratio must be in [0, 1], got {}",
                self.capacity_ratio
            ));
        }
        Ok(())
    }
}

/// Generates a random instance.
///
/// The same config (including seed) always yields the same instance.
pub fn generate(config: &GeneratorConfig) -> Result<Problem, KnapsackError> {
    config.validate().map_err(KnapsackError::InvalidConfig)?;

    let mut rng = StdRng::seed_from_u64(config.seed.unwrap_or(42));
    let spread = config.max_weight / 10;

    let items: Vec<Item> = (0..config.num_items)
        .map(|_| {
            let weight = rng.random_range(1..=config.max_weight);
            let value = match config.correlation {
                Correlation::Uncorrelated => rng.random_range(1..=config.max_value),
                Correlation::WeaklyCorrelated => {
                    let noise = rng.random_range(0..=2 * spread);
                    weight.saturating_add(noise).saturating_sub(spread).max(1)
                }
                Correlation::StronglyCorrelated => weight.saturating_add(spread),
            };
            Item::new(weight, value)
        })
        .collect();

    let total_weight = items
        .iter()
        .try_fold(0u64, |acc, item| acc.checked_add(item.weight))
        .ok_or(KnapsackError::Overflow { quantity: "weight" })?;
    let capacity = scale_floor(total_weight, config.capacity_ratio);

    Problem::new(capacity, items)
}

/// `floor(total * ratio)` for `ratio` in `[0, 1]`, computed exactly.
///
/// The ratio is split into its integer mantissa and power-of-two exponent,
/// so totals beyond 2^53 are not rounded through `f64`.
fn scale_floor(total: u64, ratio: f64) -> u64 {
    if ratio >= 1.0 {
        return total;
    }
    if ratio <= 0.0 {
        return 0;
    }

    let bits = ratio.to_bits();
    let exponent = ((bits >> 52) & 0x7ff) as u32;
    let fraction = bits & ((1u64 << 52) - 1);
    // ratio == mantissa * 2^-shift
    let (mantissa, shift) = if exponent == 0 {
        (fraction, 1074)
    } else {
        (fraction | (1u64 << 52), 1075 - exponent)
    };

    // The product is below 2^117.
    if shift >= 128 {
        return 0;
    }
    ((total as u128 * mantissa as u128) >> shift) as u64
}
