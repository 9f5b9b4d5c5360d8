//! # raining
//!
//! Elementary transcendental functions – exponential, logarithm,
//! trigonometric, hyperbolic, and error functions, plus their inverses –
//! computed from truncated power series and range reduction, without
//! delegating to a platform math library.
//!
//! This crate is a **façade** that re-exports the public items of the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `rn-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! raining = "0.1"
//! ```
//!
//! ```rust
//! use raining::math::{cos, sin};
//!
//! let x = 0.75;
//! let identity = sin(x) * sin(x) + cos(x) * cos(x);
//! assert!((identity - 1.0).abs() < f64::EPSILON.sqrt());
//! ```
//!
//! Out-of-domain inputs produce IEEE-754 sentinel values rather than
//! errors:
//!
//! ```rust
//! use raining::math::{arccosh, log};
//!
//! assert!(log(-1.0).is_nan());
//! assert!(arccosh(0.5).is_nan());
//! assert_eq!(log(0.0), f64::NEG_INFINITY);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, aliases, and error definitions.
pub use rn_core as core;

/// Transcendental functions and shared constants.
pub use rn_math as math;

/// Uncertainty-propagating scalars and probability distributions.
pub use rn_stat as stat;
