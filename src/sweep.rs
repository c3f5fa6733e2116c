//! Formula sweeps over one input at a time.
//!
//! Useful for sizing studies and plots: how do K and L move as the dataset
//! grows, or as the approximation guarantee tightens? Each sweep is just
//! repeated closed-form evaluation — no index is touched.

use serde::Serialize;

use crate::error::Result;
use crate::params::{compute_parameters, LshParameters, Rounding};

/// One row of a sweep: the varied input and its derived parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SweepPoint {
    /// Value of the swept input (n or C, depending on the sweep).
    pub input: f64,
    /// Derivation record at that input.
    pub params: LshParameters,
}

/// Derives parameters for each dataset size in `sizes`, holding C and t
/// fixed.
///
/// Fails fast on the first invalid size (e.g. a size ≤ t); a partial table
/// is never returned.
pub fn sweep_dataset_size(
    sizes: &[f64],
    c: f64,
    t: f64,
    rounding: Rounding,
) -> Result<Vec<SweepPoint>> {
    sizes
        .iter()
        .map(|&n| {
            let params = compute_parameters(n, c, t, rounding)?;
            Ok(SweepPoint { input: n, params })
        })
        .collect()
}

/// Derives parameters for each approximation ratio in `ratios`, holding n
/// and t fixed.
///
/// Fails fast on the first invalid ratio (too close to 1, or large enough
/// to saturate the collision probabilities).
pub fn sweep_ratio(n: f64, ratios: &[f64], t: f64, rounding: Rounding) -> Result<Vec<SweepPoint>> {
    ratios
        .iter()
        .map(|&c| {
            let params = compute_parameters(n, c, t, rounding)?;
            Ok(SweepPoint { input: c, params })
        })
        .collect()
}
