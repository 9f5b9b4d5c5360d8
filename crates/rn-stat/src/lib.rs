//! # rn-stat
//!
//! Statistical conveniences built on `rn-math`: the [`RealNumber`]
//! uncertainty-propagating scalar and the [`Distribution`] capability
//! trait with a Gaussian implementation.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Probability distribution capabilities and the normal distribution.
pub mod distributions;

/// Gaussian-distributed scalar with error propagation.
pub mod real_number;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use distributions::{Distribution, NormalDistribution};
pub use real_number::RealNumber;
