//! `RealNumber` – a Gaussian-distributed scalar that propagates its
//! standard deviation through arithmetic.
//!
//! Addition and subtraction combine deviations in quadrature; products
//! and quotients combine relative deviations and rescale by the new
//! magnitude, treating the operands as independent errors.

use std::fmt;
use std::ops::{Add, Div, Mul, Sub};
use std::sync::Arc;

use rand::Rng;
use rand_distr::StandardNormal;
use rn_core::{Error, Real, Result};

/// Standard deviation assigned when none is given.
pub const DEFAULT_STD_DEV: Real = 1e-9;

type Sampler = Arc<dyn Fn() -> Real + Send + Sync>;

/// A scalar with an expected value, a standard deviation, and a Gaussian
/// sampling rule.
///
/// Arithmetic accepts either another `RealNumber` or a bare [`Real`] on
/// the right-hand side; the result carries the propagated deviation and
/// the default sampling rule.
#[derive(Clone)]
pub struct RealNumber {
    expected: Real,
    std_dev: Real,
    sampler: Option<Sampler>,
}

impl RealNumber {
    /// Create a value with the given expected value and standard
    /// deviation.
    pub fn new(expected: Real, std_dev: Real) -> Self {
        Self {
            expected,
            std_dev,
            sampler: None,
        }
    }

    /// Create a value with the default standard deviation.
    pub fn from_expected(expected: Real) -> Self {
        Self::new(expected, DEFAULT_STD_DEV)
    }

    /// Create a value whose samples are drawn from a custom rule instead
    /// of the default normal draw.
    pub fn from_sampler<F>(sampler: F) -> Self
    where
        F: Fn() -> Real + Send + Sync + 'static,
    {
        Self {
            expected: 0.0,
            std_dev: DEFAULT_STD_DEV,
            sampler: Some(Arc::new(sampler)),
        }
    }

    /// The expected value.
    pub fn expected(&self) -> Real {
        self.expected
    }

    /// The standard deviation.
    pub fn std_dev(&self) -> Real {
        self.std_dev
    }

    /// Draw a sample: the custom rule if one was given, otherwise
    /// `expected + std_dev · z` with `z` a standard normal deviate.
    pub fn sample(&self) -> Real {
        match &self.sampler {
            Some(draw) => draw(),
            None => {
                let z: Real = rand::thread_rng().sample(StandardNormal);
                self.expected + self.std_dev * z
            }
        }
    }

    /// Division that signals instead of panicking: returns
    /// [`Error::DivisionByZero`] when `other` has zero expected value.
    pub fn checked_div(&self, other: &RealNumber) -> Result<RealNumber> {
        if other.expected == 0.0 {
            return Err(Error::DivisionByZero);
        }
        Ok(self.clone() / other.clone())
    }
}

impl Default for RealNumber {
    fn default() -> Self {
        Self::new(0.0, DEFAULT_STD_DEV)
    }
}

impl fmt::Debug for RealNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RealNumber")
            .field("expected", &self.expected)
            .field("std_dev", &self.std_dev)
            .field("custom_sampler", &self.sampler.is_some())
            .finish()
    }
}

impl Add for RealNumber {
    type Output = RealNumber;
    fn add(self, rhs: RealNumber) -> RealNumber {
        RealNumber::new(
            self.expected + rhs.expected,
            (self.std_dev * self.std_dev + rhs.std_dev * rhs.std_dev).sqrt(),
        )
    }
}

impl Add<Real> for RealNumber {
    type Output = RealNumber;
    fn add(self, rhs: Real) -> RealNumber {
        RealNumber::new(self.expected + rhs, self.std_dev)
    }
}

impl Sub for RealNumber {
    type Output = RealNumber;
    fn sub(self, rhs: RealNumber) -> RealNumber {
        RealNumber::new(
            self.expected - rhs.expected,
            (self.std_dev * self.std_dev + rhs.std_dev * rhs.std_dev).sqrt(),
        )
    }
}

impl Sub<Real> for RealNumber {
    type Output = RealNumber;
    fn sub(self, rhs: Real) -> RealNumber {
        RealNumber::new(self.expected - rhs, self.std_dev)
    }
}

impl Mul for RealNumber {
    type Output = RealNumber;
    fn mul(self, rhs: RealNumber) -> RealNumber {
        let expected = self.expected * rhs.expected;
        let relative = (self.std_dev / self.expected) * (self.std_dev / self.expected)
            + (rhs.std_dev / rhs.expected) * (rhs.std_dev / rhs.expected);
        RealNumber::new(expected, relative.sqrt() * expected.abs())
    }
}

impl Mul<Real> for RealNumber {
    type Output = RealNumber;
    fn mul(self, rhs: Real) -> RealNumber {
        RealNumber::new(self.expected * rhs, self.std_dev * rhs.abs())
    }
}

impl Div for RealNumber {
    type Output = RealNumber;
    fn div(self, rhs: RealNumber) -> RealNumber {
        assert!(rhs.expected != 0.0, "division by zero");
        let expected = self.expected / rhs.expected;
        let relative = (self.std_dev / self.expected) * (self.std_dev / self.expected)
            + (rhs.std_dev / rhs.expected) * (rhs.std_dev / rhs.expected);
        RealNumber::new(expected, relative.sqrt() * expected.abs())
    }
}

impl Div<Real> for RealNumber {
    type Output = RealNumber;
    fn div(self, rhs: Real) -> RealNumber {
        assert!(rhs != 0.0, "division by zero");
        RealNumber::new(self.expected / rhs, self.std_dev / rhs.abs())
    }
}
