//! Integration tests for the natural logarithm.
//!
//! The near-identity fast path flattens a small neighbourhood of 1, so
//! the value checks use an absolute tolerance of 1e-3.

use rn_math::{exp, log};

const LIMIT: f64 = 1e-3;

#[test]
fn round_trip_through_exp() {
    for &value in &[0.125, 0.73, 1.46, 2.92, 5.84, 11.68, 17.3, 23.5, 28.0] {
        let left = log(exp(value));
        assert!(
            (left - value).abs() < LIMIT * value.abs().max(1.0),
            "log(exp({value})) = {left}"
        );
    }
}

#[test]
fn known_values() {
    assert!((log(2.0) - std::f64::consts::LN_2).abs() < LIMIT);
    assert!((log(10.0) - 2.302585092994046).abs() < LIMIT);
    assert!((log(0.5) + std::f64::consts::LN_2).abs() < LIMIT);
    assert!((log(1e-6) + 13.815510557964274).abs() < LIMIT * 14.0);
}

#[test]
fn reciprocal_antisymmetry() {
    for &value in &[1.25, 2.0, 7.5, 144.0] {
        assert!((log(1.0 / value) + log(value)).abs() < 1e-12);
    }
}

#[test]
fn sentinels() {
    assert_eq!(log(0.0), f64::NEG_INFINITY);
    assert!(log(-2.0).is_nan());
    assert_eq!(log(1.0), 0.0);
}
