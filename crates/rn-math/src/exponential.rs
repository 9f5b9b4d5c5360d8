//! Exponential and logarithm from truncated Maclaurin series, and the
//! hyperbolic family derived from them.
//!
//! `exp` reduces its argument to [0, 1] before summing the series; `log`
//! reduces to [1, 3/2). The hyperbolic functions are closed forms over
//! `exp`, and their inverses are closed forms over `log`, each returning
//! NaN outside its domain.

use rn_core::Real;

use crate::EPS;

/// ln 2, used by the recursive reduction in [`log`].
const LOG_2: Real = 0.693147180559945;

/// ln 3, used by the recursive reduction in [`log`].
const LOG_3: Real = 1.0986122886681091;

/// The exponential function eˣ.
///
/// Saturates to +∞ for x > 32. Negative arguments reduce through
/// `1 / exp(-x)`; arguments above 1 split into `exp(1)^⌊x⌋ · exp(frac)`
/// with the integer power formed by repeated multiplication. On [0, 1]
/// the Maclaurin series `Σ xⁱ/i!` is summed with a running factorial
/// denominator, up to 31 terms, stopping once a term drops below
/// `√ε · |sum|`.
pub fn exp(x: Real) -> Real {
    if x == 0.0 {
        return 1.0;
    }
    if x > 32.0 {
        return Real::INFINITY;
    }
    if x < 0.0 {
        return 1.0 / exp(-x);
    }
    if x > 1.0 {
        let whole = x.floor();
        let e = exp(1.0);
        let mut power = 1.0;
        for _ in 0..whole as u32 {
            power *= e;
        }
        return power * exp(x - whole);
    }
    let mut out = 1.0;
    let mut den = 1.0;
    for i in 1..32 {
        den *= i as Real;
        let term = x.powi(i) / den;
        out += term;
        if term.abs() < EPS.sqrt() * out.abs() {
            break;
        }
    }
    out
}

/// The natural logarithm ln x.
///
/// Returns −∞ at 0 and NaN for negative arguments. Arguments within
/// `ε^¼` of 1 short-circuit to 0. Arguments below 1 reduce through
/// `-log(1/x)`; arguments at or above 3/2 shrink recursively via
/// `log(x) = log(2x/3) − ln 2 + ln 3` until the alternating series
/// `Σ (−1)^(i+1) (x−1)ⁱ / i` applies on [1, 3/2), summed for up to 62
/// terms with a relative `ε` stopping check.
pub fn log(x: Real) -> Real {
    if x == 0.0 {
        return Real::NEG_INFINITY;
    }
    if x == Real::INFINITY {
        // the 2x/3 reduction cannot shrink an infinite argument
        return Real::INFINITY;
    }
    if (x - 1.0) * (x - 1.0) < EPS.sqrt() {
        return 0.0;
    }
    if x < 0.0 {
        return Real::NAN;
    }
    if x < 1.0 {
        return -log(1.0 / x);
    }
    if x >= 1.5 {
        return log(x * 2.0 / 3.0) - LOG_2 + LOG_3;
    }
    let mut out = 0.0;
    for i in 1..63 {
        let term = (x - 1.0).powi(i) / i as Real;
        out += if i % 2 == 1 { term } else { -term };
        if term.abs() < EPS * out.abs() {
            break;
        }
    }
    out
}

/// The hyperbolic sine, `(eˣ − e⁻ˣ) / 2`.
pub fn sinh(x: Real) -> Real {
    (exp(x) - exp(-x)) / 2.0
}

/// The hyperbolic cosine, `(eˣ + e⁻ˣ) / 2`.
pub fn cosh(x: Real) -> Real {
    (exp(x) + exp(-x)) / 2.0
}

/// The hyperbolic tangent, sinh x / cosh x.
///
/// The saturated branches are resolved explicitly so that ∞/∞ never
/// reaches the division: ±1 when both factors saturate with matching
/// sign, 0 when only cosh saturates, NaN when both vanish.
pub fn tanh(x: Real) -> Real {
    let (s, c) = (sinh(x), cosh(x));
    if c == Real::INFINITY {
        if s == Real::INFINITY {
            return 1.0;
        }
        if s == Real::NEG_INFINITY {
            return -1.0;
        }
        return 0.0;
    }
    if c != 0.0 {
        if s == Real::INFINITY {
            return Real::INFINITY;
        }
        if s == Real::NEG_INFINITY {
            return Real::NEG_INFINITY;
        }
        return s / c;
    }
    if s != 0.0 {
        return Real::INFINITY;
    }
    Real::NAN
}

/// The hyperbolic cotangent, cosh x / sinh x.
pub fn coth(x: Real) -> Real {
    let (s, c) = (sinh(x), cosh(x));
    if c == Real::INFINITY {
        if s == Real::INFINITY {
            return 1.0;
        }
        if s == Real::NEG_INFINITY {
            return -1.0;
        }
        return Real::INFINITY;
    }
    if s == Real::INFINITY {
        return 0.0;
    }
    if s != 0.0 && c != 0.0 {
        return c / s;
    }
    Real::NAN
}

/// The hyperbolic secant, 1 / cosh x.
pub fn sech(x: Real) -> Real {
    let c = cosh(x);
    if c == Real::INFINITY {
        return 0.0;
    }
    if c != 0.0 {
        return 1.0 / c;
    }
    Real::INFINITY
}

/// The hyperbolic cosecant, 1 / sinh x.
pub fn csch(x: Real) -> Real {
    let s = sinh(x);
    if s.is_infinite() {
        return 0.0;
    }
    if s != 0.0 {
        return 1.0 / s;
    }
    Real::INFINITY
}

/// The inverse hyperbolic sine, `ln(x + √(x² + 1))`.
pub fn arcsinh(x: Real) -> Real {
    log(x + (x * x + 1.0).sqrt())
}

/// The inverse hyperbolic cosine, `ln(x + √(x² − 1))`.
///
/// Requires x ≥ 1; returns NaN below.
pub fn arccosh(x: Real) -> Real {
    if x < 1.0 {
        return Real::NAN;
    }
    if x == 1.0 {
        return 0.0;
    }
    log(x + (x * x - 1.0).sqrt())
}

/// The inverse hyperbolic tangent, `½ ln((1 + x) / (1 − x))`.
///
/// Requires |x| < 1; returns NaN outside.
pub fn arctanh(x: Real) -> Real {
    if x.abs() >= 1.0 {
        return Real::NAN;
    }
    0.5 * log((1.0 + x) / (1.0 - x))
}

/// The inverse hyperbolic cotangent, `½ ln((x + 1) / (x − 1))`.
///
/// Returns NaN at 0; for |x| < 1 the log of a negative ratio propagates
/// NaN on its own.
pub fn arccoth(x: Real) -> Real {
    if x == 0.0 {
        return Real::NAN;
    }
    0.5 * log((x + 1.0) / (x - 1.0))
}

/// The inverse hyperbolic secant, `ln((1 + √(1 − x²)) / x)`.
///
/// Requires 0 < x < 1; returns NaN outside.
pub fn arcsech(x: Real) -> Real {
    if x <= 0.0 || x >= 1.0 {
        return Real::NAN;
    }
    log((1.0 + (1.0 - x * x).sqrt()) / x)
}

/// The inverse hyperbolic cosecant, `ln(1/x + √(1 + 1/x²))`.
///
/// Returns NaN at 0.
pub fn arccsch(x: Real) -> Real {
    if x == 0.0 {
        return Real::NAN;
    }
    log(1.0 / x + (1.0 + 1.0 / (x * x)).sqrt())
}
