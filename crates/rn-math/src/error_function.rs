//! Error function, complementary error function, and their inverses.
//!
//! `erf` is summed directly from its Maclaurin series scaled by 2/√π;
//! the other three are identities over it. Only the shared π constant is
//! needed here; the module is independent of the exponential and
//! trigonometric series.

use rn_core::Real;

use crate::{EPS, PI};

/// The error function, `erf(x) = 2/√π ∫₀ˣ e^{−t²} dt`.
///
/// Sums `Σ (−1)ⁱ x^(2i+1) / (2i+1) / i!` for up to 63 terms, stopping
/// once a term's magnitude falls below ε (an absolute check, unlike the
/// relative checks in the exponential and logarithm series).
pub fn erf(x: Real) -> Real {
    let mut out = 0.0;
    let mut den = 1.0;
    for i in 0..63 {
        if i > 0 {
            den *= i as Real;
        }
        let term = x.powi(2 * i + 1) / (2 * i + 1) as Real / den;
        if i % 2 == 1 {
            out -= term;
        } else {
            out += term;
        }
        if term.abs() < EPS {
            break;
        }
    }
    out * 2.0 / PI.sqrt()
}

/// The complementary error function, `erfc(x) = 1 − erf(x)`.
pub fn erfc(x: Real) -> Real {
    1.0 - erf(x)
}

/// The inverse error function.
///
/// Returns NaN outside [−1, 1] and reduces to x ≥ 0 through oddness.
/// Sums terms `2^(2i+1) x^(2i+1) / (2i+1) / π` for up to 63 terms,
/// stopping once a term falls below `ε · |sum|` after the first
/// iteration.
pub fn erfinv(x: Real) -> Real {
    if x < -1.0 || x > 1.0 {
        return Real::NAN;
    }
    if x < 0.0 {
        return -erfinv(-x);
    }
    let mut out = 0.0;
    for i in 0..63 {
        let term = (2.0 as Real).powi(2 * i + 1) * x.powi(2 * i + 1) / (2 * i + 1) as Real / PI;
        out += term;
        if term.abs() < EPS * out.abs() && i > 0 {
            break;
        }
    }
    out
}

/// The inverse complementary error function, `erfcinv(x) = erfinv(1 − x)`.
pub fn erfcinv(x: Real) -> Real {
    erfinv(1.0 - x)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries() {
        let lim = EPS * 2.0;
        assert!(erf(0.0).abs() < lim);
        assert!((erfc(0.0) - 1.0).abs() < lim);
        assert!((erf(2.0) - 1.0).abs() < 1e-2);
        assert!(erfc(2.0).abs() < 1e-2);
        assert!((erf(-2.0) + 1.0).abs() < 1e-2);
        assert!((erfc(-2.0) - 2.0).abs() < 1e-2);
    }

    #[test]
    fn odd_symmetry() {
        for &x in &[0.25, 0.5, 1.0, 1.75] {
            assert_eq!(erf(-x), -erf(x));
        }
    }

    #[test]
    fn inverse_domain() {
        assert!(erfinv(1.5).is_nan());
        assert!(erfinv(-1.5).is_nan());
        assert!(erfcinv(-0.5).is_nan());
        assert!(erfcinv(2.5).is_nan());
        assert!(erfinv(0.0).abs() < EPS);
        assert!(erfcinv(1.0).abs() < EPS);
    }

    #[test]
    fn inverse_oddness() {
        assert_eq!(erfinv(-0.25), -erfinv(0.25));
        assert!(erfinv(0.999) > 1.0);
        assert!(erfinv(-0.999) < -1.0);
    }
}
