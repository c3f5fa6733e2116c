//! Error types for parameter derivation.

use thiserror::Error;

/// Errors that can occur while deriving LSH tuning parameters.
///
/// Every variant is raised at the point of violation; no partial result
/// record is ever returned alongside an error.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TuneError {
    /// A quantity reaching the collision model must be strictly positive
    /// (division by `tau` and a window of width `w` both appear in the
    /// integrand bounds).
    #[error("invalid domain: {name} = {value} (must be > 0)")]
    InvalidDomain { name: &'static str, value: f64 },

    /// Dataset size must be strictly positive.
    #[error("invalid configuration: n = {n} (must be > 0)")]
    InvalidPointCount { n: f64 },

    /// Approximation ratio too close to (or below) 1: the near and far
    /// reference distances collapse and the exponent rho is undefined.
    #[error("invalid configuration: c = {c} (must exceed 1 + {margin})")]
    InvalidRatio { c: f64, margin: f64 },

    /// Query-cost divisor must be strictly positive.
    #[error("invalid configuration: t = {t} (must be > 0)")]
    InvalidTarget { t: f64 },

    /// The per-table load objective n/t must exceed 1, otherwise K would
    /// round to zero or below and no table layout is meaningful.
    #[error("invalid configuration: n/t = {objective} (need n > t)")]
    TargetExceedsPoints { objective: f64 },

    /// A collision probability saturated to 0 or 1 at f64 precision, so
    /// `ln(1/p)` is 0 or infinite and K/L cannot be derived.
    #[error("degenerate probability: {which} = {value} at f64 precision")]
    DegenerateProbability { which: &'static str, value: f64 },

    /// p1 <= p2 for C > 1 means the collision model lost its near/far
    /// ordering. Treated as a precondition breach, never carried forward.
    #[error("collision ordering violated: p1 = {p1} <= p2 = {p2}")]
    OrderingViolated { p1: f64, p2: f64 },

    /// A derived count rounded outside the representable range. Reached
    /// only for extreme inputs (p2 within a few ULP of 1, or an enormous
    /// n/t objective).
    #[error("derived count out of range: {name} = {value}")]
    CountOutOfRange { name: &'static str, value: f64 },

    /// Rounding policy token not one of ceil / round / floor.
    #[error("unknown rounding policy: {0:?} (expected ceil, round, or floor)")]
    UnknownRounding(String),
}

/// Result type for parameter derivation.
pub type Result<T> = std::result::Result<T, TuneError>;
