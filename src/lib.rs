//! lshtune: closed-form parameter selection for E2LSH-style indexes.
//!
//! Given a dataset size `n`, an approximation ratio `C`, and a target
//! query-cost divisor `t`, this crate derives the two knobs every E2LSH
//! deployment has to pick:
//!
//! - **K** — hash functions concatenated per table (false-positive control)
//! - **L** — independent hash tables (recall control)
//!
//! # The LSH Tuning Trade-off
//!
//! A single locality-sensitive hash function is a blunt instrument: near
//! pairs collide with probability p1, far pairs with p2, and p1 > p2 is all
//! you get. Concatenating K functions sharpens a table (collision rates
//! become p1ᴷ and p2ᴷ) but eventually drops true neighbors too; running L
//! tables in parallel buys the recall back. The standard analysis picks K
//! so that one table's expected far-point load is n/t, and then
//! L = ceil((n/t)^ρ) with ρ = ln(1/p1)/ln(1/p2) covers the recall loss.
//!
//! Everything here is a deterministic pure function: no index is built, no
//! data is touched, and repeated calls yield identical records.
//!
//! # Example
//!
//! ```
//! use lshtune::{compute_parameters, Rounding};
//!
//! let params = compute_parameters(10_000.0, 1.2, 3000.0, Rounding::Ceil)?;
//! assert_eq!(params.k, 73); // 73 hash functions per table
//! assert_eq!(params.l, 2);  // 2 tables
//! # Ok::<(), lshtune::TuneError>(())
//! ```
//!
//! # References
//!
//! - Datar, Immorlica, Indyk, Mirrokni (2004). "Locality-sensitive hashing
//!   scheme based on p-stable distributions."
//! - Indyk & Motwani (1998). "Approximate nearest neighbors: towards
//!   removing the curse of dimensionality."

pub mod collision;
pub mod error;
pub mod params;
pub mod sweep;

pub use collision::{collision_probability, normal_cdf};
pub use error::{Result, TuneError};
pub use params::{compute_parameters, LshParameters, Rounding, MIN_RATIO_MARGIN};
pub use sweep::{sweep_dataset_size, sweep_ratio, SweepPoint};
