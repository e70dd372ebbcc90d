use crate::core::pbrt::types::Float;
use serde::{Deserialize, Serialize};

/// Tuning knobs for the solid-angle ellipse inversion. The defaults are
/// deliberately coarse: the result feeds a stochastic light sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NumericOptions {
    /// Subintervals used by composite Simpson when integrating `2 h_p`.
    pub simpson_intervals: u32,
    pub bisection_iterations: u32,
    pub bisection_tolerance: Float,
}

impl Default for NumericOptions {
    fn default() -> Self {
        NumericOptions {
            simpson_intervals: 10,
            bisection_iterations: 10,
            bisection_tolerance: 0.001,
        }
    }
}

impl NumericOptions {
    /// Tighter settings for reference renders and tests.
    pub fn precise() -> Self {
        NumericOptions {
            simpson_intervals: 64,
            bisection_iterations: 40,
            bisection_tolerance: 1e-6,
        }
    }
}
