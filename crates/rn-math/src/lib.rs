//! # rn-math
//!
//! Elementary transcendental functions – exponential, logarithm,
//! trigonometric, hyperbolic, and error functions, plus their inverses –
//! computed from truncated power series and range reduction, without
//! delegating to a platform math library.
//!
//! Every function is pure and terminating: series loops have fixed maximum
//! iteration counts with early-exit convergence checks, and out-of-domain
//! inputs produce IEEE-754 sentinel values (NaN, ±∞) rather than errors.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

use rn_core::Real;

// ── Modules ───────────────────────────────────────────────────────────────────

/// Floating-point comparison utilities.
pub mod comparison;

/// Error function, complementary error function, and their inverses.
pub mod error_function;

/// Exponential, logarithm, and the hyperbolic family.
pub mod exponential;

/// Sine, cosine, and the derived trigonometric ratios.
pub mod trigonometric;

// ── Shared constants ──────────────────────────────────────────────────────────

/// π as a fixed double-precision literal, shared by the trigonometric and
/// error-function modules. Bit-identical at every call site.
pub const PI: Real = 3.141592653589793;

/// Machine epsilon for [`Real`], the universal convergence tolerance.
pub const EPS: Real = f64::EPSILON;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use comparison::{close, close_enough};
pub use error_function::{erf, erfc, erfcinv, erfinv};
pub use exponential::{
    arccosh, arccoth, arccsch, arcsech, arcsinh, arctanh, cosh, coth, csch, exp, log, sech, sinh,
    tanh,
};
pub use trigonometric::{cos, cot, csc, sec, sin, tan};
