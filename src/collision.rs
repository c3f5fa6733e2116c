//! Collision probability model for p-stable hashing.
//!
//! # Intuition
//!
//! An E2LSH hash function projects a point onto a random Gaussian direction
//! and quantizes the line into buckets of width `w`. Two points at distance
//! `tau` collide exactly when their projected difference lands inside a
//! window of half-width `w / (2·tau)` around zero. Since the projected
//! difference of a unit-separated pair is standard normal, the collision
//! probability is the normal mass inside that window.
//!
//! # Mathematical Foundation
//!
//! ```text
//! p(tau; w) = Φ(w / 2tau) − Φ(−w / 2tau) = 2·Φ(w / 2tau) − 1
//! ```
//!
//! Monotonicity is what makes the downstream K/L derivation work:
//! `p` is strictly increasing in `w` and strictly decreasing in `tau`,
//! so near points (small `tau`) always collide more often than far ones.
//!
//! # References
//!
//! - Datar, Immorlica, Indyk, Mirrokni (2004). "Locality-sensitive hashing
//!   scheme based on p-stable distributions."
//! - Indyk & Motwani (1998). "Approximate nearest neighbors: towards
//!   removing the curse of dimensionality."

use crate::error::{Result, TuneError};

/// Standard normal CDF: Φ(x) = (1 + erf(x/√2)) / 2.
///
/// Accurate to the precision of `libm::erf` (full f64). Total over all
/// reals; Φ(0) = 0.5 and Φ(−x) = 1 − Φ(x).
#[must_use]
pub fn normal_cdf(x: f64) -> f64 {
    0.5 * (1.0 + libm::erf(x * std::f64::consts::FRAC_1_SQRT_2))
}

/// Probability that two points at distance `tau` share a bucket of width `w`.
///
/// Evaluates `2·Φ(w/(2·tau)) − 1`, the normal mass inside the quantization
/// window. Both arguments must be strictly positive; `tau = 0` would divide
/// by zero and a non-positive width has no geometric meaning, so either is
/// rejected as [`TuneError::InvalidDomain`] rather than returned as NaN/Inf.
///
/// The result is strictly inside (0, 1) for any finite positive inputs.
pub fn collision_probability(tau: f64, w: f64) -> Result<f64> {
    if !(tau > 0.0) {
        return Err(TuneError::InvalidDomain {
            name: "tau",
            value: tau,
        });
    }
    if !(w > 0.0) {
        return Err(TuneError::InvalidDomain { name: "w", value: w });
    }

    let half_window = w / (2.0 * tau);
    Ok(2.0 * normal_cdf(half_window) - 1.0)
}
