//! Closed-form derivation of the E2LSH tuning parameters K and L.
//!
//! # Intuition
//!
//! An E2LSH index concatenates K hash functions per table (sharpening each
//! table's buckets) and keeps L independent tables (recovering the recall
//! that sharpening costs). Given a dataset of n points, an approximation
//! ratio C, and a target per-query candidate budget of n/t points, both
//! counts follow in closed form from two collision probabilities — no
//! search or optimization involved.
//!
//! # Mathematical Foundation
//!
//! With bucket width w0 = 4C² and p(τ; w) the collision probability of a
//! pair at distance τ:
//!
//! ```text
//! p1 = p(1; w0)          near pairs (true neighbors)
//! p2 = p(C; w0)          far pairs (approximation boundary)
//! ρ  = ln(1/p1) / ln(1/p2)            ∈ (0, 1)
//! K  = ln(n/t) / ln(1/p2)   rounded per policy
//! L  = ceil((n/t)^ρ)        always rounded up
//! ```
//!
//! K is chosen so one table's expected far-point load is n/t; L then covers
//! the recall loss at rate ρ. L always rounds up: under-provisioning tables
//! directly degrades recall, so no policy choice applies to it.
//!
//! # References
//!
//! - Datar, Immorlica, Indyk, Mirrokni (2004). "Locality-sensitive hashing
//!   scheme based on p-stable distributions."

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::collision::collision_probability;
use crate::error::{Result, TuneError};

/// Minimum gap required between the approximation ratio and 1.
///
/// As C → 1 the near and far reference distances collapse, ρ → 1, and the
/// derivation stops separating anything. Ratios at or below `1 + margin`
/// are rejected as invalid configuration.
pub const MIN_RATIO_MARGIN: f64 = 1e-3;

/// Largest value a derived count may round to.
const MAX_COUNT: f64 = u32::MAX as f64;

/// How the real-valued K estimate becomes an integer.
///
/// L is unaffected by this choice; it always rounds up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Rounding {
    /// Smallest integer ≥ K_real. The default: never under-provisions
    /// per-table precision.
    Ceil,
    /// Nearest integer, ties away from zero (`f64::round` semantics).
    Round,
    /// Largest integer ≤ K_real.
    Floor,
}

impl Rounding {
    fn apply(self, x: f64) -> f64 {
        match self {
            Rounding::Ceil => x.ceil(),
            Rounding::Round => x.round(),
            Rounding::Floor => x.floor(),
        }
    }

    /// Canonical lowercase token, as accepted by [`FromStr`].
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Rounding::Ceil => "ceil",
            Rounding::Round => "round",
            Rounding::Floor => "floor",
        }
    }
}

impl Default for Rounding {
    fn default() -> Self {
        Rounding::Ceil
    }
}

impl fmt::Display for Rounding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Rounding {
    type Err = TuneError;

    /// Parses a policy token, ASCII case-insensitively. Unknown tokens are
    /// rejected outright; there is no silent fallback policy.
    fn from_str(s: &str) -> Result<Self> {
        if s.eq_ignore_ascii_case("ceil") {
            Ok(Rounding::Ceil)
        } else if s.eq_ignore_ascii_case("round") {
            Ok(Rounding::Round)
        } else if s.eq_ignore_ascii_case("floor") {
            Ok(Rounding::Floor)
        } else {
            Err(TuneError::UnknownRounding(s.to_string()))
        }
    }
}

/// Full derivation record for one (n, C, t) configuration.
///
/// All intermediates are part of the contract, not just K and L: consumers
/// inspect `p1`/`p2`/`rho` to sanity-check a configuration, and tests pin
/// them directly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LshParameters {
    /// Bucket width, fixed at 4C².
    pub w0: f64,
    /// Collision probability at the near reference distance 1.
    pub p1: f64,
    /// Collision probability at the far reference distance C.
    pub p2: f64,
    /// LSH exponent ln(1/p1)/ln(1/p2), in (0, 1).
    pub rho: f64,
    /// Real-valued K estimate before rounding.
    #[serde(rename = "K_real")]
    pub k_real: f64,
    /// Hash functions per table.
    #[serde(rename = "K")]
    pub k: u32,
    /// Real-valued L estimate before rounding.
    #[serde(rename = "L_real")]
    pub l_real: f64,
    /// Number of hash tables, always ceil(l_real).
    #[serde(rename = "L")]
    pub l: u32,
}

impl fmt::Display for LshParameters {
    /// Eight `key: value` lines in fixed order, matching the CLI contract.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "w0: {}\np1: {}\np2: {}\nrho: {}\nK_real: {}\nK: {}\nL_real: {}\nL: {}",
            self.w0, self.p1, self.p2, self.rho, self.k_real, self.k, self.l_real, self.l
        )
    }
}

fn checked_probability(which: &'static str, p: f64) -> Result<f64> {
    // Mathematically p ∈ (0, 1); at f64 precision 2Φ(x)−1 saturates to
    // exactly 1.0 once x ≳ 8.3, i.e. C ≳ 2.04 for the near probability.
    if p <= 0.0 || p >= 1.0 || !p.is_finite() {
        return Err(TuneError::DegenerateProbability { which, value: p });
    }
    Ok(p)
}

fn checked_count(name: &'static str, rounded: f64) -> Result<u32> {
    if !rounded.is_finite() || rounded < 0.0 || rounded > MAX_COUNT {
        return Err(TuneError::CountOutOfRange {
            name,
            value: rounded,
        });
    }
    Ok(rounded as u32)
}

/// Derives (K, L) for `n` points, approximation ratio `c`, and query-cost
/// divisor `t`.
///
/// Pure and deterministic: identical inputs yield an identical record.
/// Inputs are validated up front, before any logarithm is evaluated:
///
/// - `n > 0`, `t > 0`, and `n/t > 1` (a per-table objective ≤ 1 would
///   round K to zero or below);
/// - `c > 1 +` [`MIN_RATIO_MARGIN`].
///
/// Probabilities that saturate to 0 or 1 at f64 precision (large `c`) are
/// reported as [`TuneError::DegenerateProbability`] rather than flowing
/// into K/L as Inf or NaN.
///
/// # Example
///
/// ```
/// use lshtune::{compute_parameters, Rounding};
///
/// let params = compute_parameters(10_000.0, 1.2, 3000.0, Rounding::Ceil)?;
/// assert_eq!(params.k, 73);
/// assert_eq!(params.l, 2);
/// # Ok::<(), lshtune::TuneError>(())
/// ```
pub fn compute_parameters(n: f64, c: f64, t: f64, rounding: Rounding) -> Result<LshParameters> {
    if !(n > 0.0) {
        return Err(TuneError::InvalidPointCount { n });
    }
    if !(t > 0.0) {
        return Err(TuneError::InvalidTarget { t });
    }
    if !(c > 1.0 + MIN_RATIO_MARGIN) {
        return Err(TuneError::InvalidRatio {
            c,
            margin: MIN_RATIO_MARGIN,
        });
    }
    let objective = n / t;
    if !(objective > 1.0) || !objective.is_finite() {
        return Err(TuneError::TargetExceedsPoints { objective });
    }

    let w0 = 4.0 * c * c;
    let p1 = checked_probability("p1", collision_probability(1.0, w0)?)?;
    let p2 = checked_probability("p2", collision_probability(c, w0)?)?;

    // Guaranteed by monotonicity in tau for c > 1; a breach means the
    // collision model itself is broken, so it is never carried forward.
    if p1 <= p2 {
        return Err(TuneError::OrderingViolated { p1, p2 });
    }

    let rho = (1.0 / p1).ln() / (1.0 / p2).ln();

    let base = 1.0 / p2;
    let k_real = objective.ln() / base.ln();
    let k = checked_count("K", rounding.apply(k_real))?;

    let l_real = objective.powf(rho);
    let l = checked_count("L", l_real.ceil())?;

    tracing::debug!(w0, p1, p2, rho, k_real, k, l_real, l, "derived LSH parameters");

    Ok(LshParameters {
        w0,
        p1,
        p2,
        rho,
        k_real,
        k,
        l_real,
        l,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-3;

    #[test]
    fn reference_scenario() {
        // n=10000, C=1.2, t=3000 — the worked example from the derivation
        let p = compute_parameters(10_000.0, 1.2, 3000.0, Rounding::Ceil).unwrap();

        assert!((p.w0 - 5.76).abs() < 1e-12);
        assert!((p.p1 - 0.99602).abs() < TOL);
        assert!((p.p2 - 0.98360).abs() < TOL);
        assert!((p.rho - 0.2412).abs() < TOL);
        assert!((p.k_real - 72.8).abs() < 0.1);
        assert_eq!(p.k, 73);
        assert!((p.l_real - 1.34).abs() < 0.01);
        assert_eq!(p.l, 2);
    }

    #[test]
    fn invariants_across_ratios() {
        for c in [1.05, 1.2, 1.5, 1.8, 2.0] {
            let p = compute_parameters(50_000.0, c, 1000.0, Rounding::Ceil).unwrap();
            assert!(p.p1 > p.p2, "c={c}: p1={} p2={}", p.p1, p.p2);
            assert!(p.rho > 0.0 && p.rho < 1.0, "c={c}: rho={}", p.rho);
            assert!(p.l >= 1);
        }
    }

    #[test]
    fn idempotent() {
        let a = compute_parameters(10_000.0, 1.2, 3000.0, Rounding::Round).unwrap();
        let b = compute_parameters(10_000.0, 1.2, 3000.0, Rounding::Round).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn rounding_law() {
        let ceil = compute_parameters(10_000.0, 1.2, 3000.0, Rounding::Ceil).unwrap();
        let round = compute_parameters(10_000.0, 1.2, 3000.0, Rounding::Round).unwrap();
        let floor = compute_parameters(10_000.0, 1.2, 3000.0, Rounding::Floor).unwrap();

        assert!(ceil.k >= round.k);
        assert!(round.k >= floor.k);
        // The policy never touches L
        assert_eq!(ceil.l, round.l);
        assert_eq!(round.l, floor.l);
        assert_eq!(ceil.l as f64, ceil.l_real.ceil());
    }

    #[test]
    fn ratio_too_close_to_one_rejected() {
        let err = compute_parameters(10_000.0, 1.0001, 3000.0, Rounding::Ceil).unwrap_err();
        assert!(matches!(err, TuneError::InvalidRatio { .. }));

        let err = compute_parameters(10_000.0, 1.0, 3000.0, Rounding::Ceil).unwrap_err();
        assert!(matches!(err, TuneError::InvalidRatio { .. }));
    }

    #[test]
    fn nonpositive_inputs_rejected() {
        assert!(matches!(
            compute_parameters(0.0, 1.2, 3000.0, Rounding::Ceil).unwrap_err(),
            TuneError::InvalidPointCount { .. }
        ));
        assert!(matches!(
            compute_parameters(10_000.0, 1.2, 0.0, Rounding::Ceil).unwrap_err(),
            TuneError::InvalidTarget { .. }
        ));
        assert!(matches!(
            compute_parameters(-5.0, 1.2, 3000.0, Rounding::Ceil).unwrap_err(),
            TuneError::InvalidPointCount { .. }
        ));
    }

    #[test]
    fn target_at_or_above_n_rejected() {
        let err = compute_parameters(1000.0, 1.2, 1000.0, Rounding::Ceil).unwrap_err();
        assert!(matches!(err, TuneError::TargetExceedsPoints { .. }));

        let err = compute_parameters(1000.0, 1.2, 5000.0, Rounding::Ceil).unwrap_err();
        assert!(matches!(err, TuneError::TargetExceedsPoints { .. }));
    }

    #[test]
    fn large_ratio_saturates_and_is_reported() {
        // w0/2 = 2C² ≥ 8.3 pushes p1 to exactly 1.0 in f64
        let err = compute_parameters(10_000.0, 3.0, 3000.0, Rounding::Ceil).unwrap_err();
        assert!(matches!(err, TuneError::DegenerateProbability { .. }));
    }

    #[test]
    fn rounding_tokens() {
        assert_eq!("ceil".parse::<Rounding>().unwrap(), Rounding::Ceil);
        assert_eq!("Round".parse::<Rounding>().unwrap(), Rounding::Round);
        assert_eq!("FLOOR".parse::<Rounding>().unwrap(), Rounding::Floor);
        assert!(matches!(
            "truncate".parse::<Rounding>().unwrap_err(),
            TuneError::UnknownRounding(_)
        ));
    }

    #[test]
    fn display_layout() {
        let p = compute_parameters(10_000.0, 1.2, 3000.0, Rounding::Ceil).unwrap();
        let text = p.to_string();
        let keys: Vec<&str> = text
            .lines()
            .map(|l| l.split(':').next().unwrap())
            .collect();
        assert_eq!(
            keys,
            ["w0", "p1", "p2", "rho", "K_real", "K", "L_real", "L"]
        );
    }
}
