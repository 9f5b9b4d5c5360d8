//! Probability distribution capabilities.
//!
//! [`Distribution`] defines the capability set `{pdf, cdf, icdf, sample}`;
//! every method defaults to a `NotImplemented` error so a concrete
//! distribution overrides exactly what it supports and anything else
//! fails fast. [`NormalDistribution`] implements all four on top of the
//! series in `rn-math`.

use rand::Rng;
use rand_distr::StandardNormal;
use rn_core::{ensure, Error, Real, Result};
use rn_math::{erf, erfinv, exp, PI};

/// A univariate probability distribution.
pub trait Distribution {
    /// The probability density function at `x`.
    fn pdf(&self, x: Real) -> Result<Real> {
        let _ = x;
        Err(Error::NotImplemented("pdf".into()))
    }

    /// The cumulative distribution function at `x`.
    fn cdf(&self, x: Real) -> Result<Real> {
        let _ = x;
        Err(Error::NotImplemented("cdf".into()))
    }

    /// The inverse cumulative distribution function at probability `p`.
    fn icdf(&self, p: Real) -> Result<Real> {
        let _ = p;
        Err(Error::NotImplemented("icdf".into()))
    }

    /// Draw a random sample.
    fn sample(&self) -> Result<Real> {
        Err(Error::NotImplemented("sample".into()))
    }
}

/// The normal distribution N(μ, σ²).
#[derive(Debug, Clone, PartialEq)]
pub struct NormalDistribution {
    mean: Real,
    std_dev: Real,
}

impl NormalDistribution {
    /// Create a normal distribution with the given mean and standard
    /// deviation. The standard deviation must be positive.
    pub fn new(mean: Real, std_dev: Real) -> Result<Self> {
        if !(std_dev > 0.0) {
            return Err(Error::InvalidArgument(format!(
                "standard deviation must be positive, got {std_dev}"
            )));
        }
        Ok(Self { mean, std_dev })
    }

    /// The standard normal distribution N(0, 1).
    pub fn standard() -> Self {
        Self {
            mean: 0.0,
            std_dev: 1.0,
        }
    }

    /// The mean μ.
    pub fn mean(&self) -> Real {
        self.mean
    }

    /// The standard deviation σ.
    pub fn std_dev(&self) -> Real {
        self.std_dev
    }
}

impl Distribution for NormalDistribution {
    /// `φ(x) = exp(−z²/2) / (σ √(2π))` with `z = (x − μ)/σ`.
    fn pdf(&self, x: Real) -> Result<Real> {
        let z = (x - self.mean) / self.std_dev;
        Ok(exp(-0.5 * z * z) / (self.std_dev * (2.0 * PI).sqrt()))
    }

    /// `Φ(x) = (1 + erf(z/√2)) / 2` with `z = (x − μ)/σ`.
    fn cdf(&self, x: Real) -> Result<Real> {
        let z = (x - self.mean) / self.std_dev;
        Ok((1.0 + erf(z / (2.0 as Real).sqrt())) / 2.0)
    }

    /// `Φ⁻¹(p) = μ + σ √2 · erfinv(2p − 1)`, requiring p ∈ (0, 1).
    fn icdf(&self, p: Real) -> Result<Real> {
        ensure!(p > 0.0 && p < 1.0, "probability must lie in (0, 1), got {p}");
        Ok(self.mean + self.std_dev * (2.0 as Real).sqrt() * erfinv(2.0 * p - 1.0))
    }

    fn sample(&self) -> Result<Real> {
        let z: Real = rand::thread_rng().sample(StandardNormal);
        Ok(self.mean + self.std_dev * z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    struct Opaque;
    impl Distribution for Opaque {}

    #[test]
    fn unimplemented_capabilities_fail_fast() {
        let d = Opaque;
        assert!(matches!(d.pdf(0.0), Err(Error::NotImplemented(_))));
        assert!(matches!(d.cdf(0.0), Err(Error::NotImplemented(_))));
        assert!(matches!(d.icdf(0.5), Err(Error::NotImplemented(_))));
        assert!(matches!(d.sample(), Err(Error::NotImplemented(_))));
    }

    #[test]
    fn rejects_non_positive_deviation() {
        assert!(matches!(
            NormalDistribution::new(0.0, 0.0),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            NormalDistribution::new(0.0, -1.0),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn standard_normal_values() {
        let d = NormalDistribution::standard();
        assert_abs_diff_eq!(d.pdf(0.0).unwrap(), 0.3989422804014327, epsilon = 1e-9);
        assert_abs_diff_eq!(d.cdf(0.0).unwrap(), 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(d.cdf(1.0).unwrap(), 0.8413447460685429, epsilon = 1e-6);
        assert_abs_diff_eq!(d.icdf(0.5).unwrap(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn icdf_domain() {
        let d = NormalDistribution::standard();
        assert!(matches!(d.icdf(0.0), Err(Error::Precondition(_))));
        assert!(matches!(d.icdf(1.0), Err(Error::Precondition(_))));
    }

    #[test]
    fn shifted_distribution() {
        let d = NormalDistribution::new(10.0, 2.0).unwrap();
        assert_abs_diff_eq!(d.cdf(10.0).unwrap(), 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(d.icdf(0.5).unwrap(), 10.0, epsilon = 1e-9);
        assert!(d.sample().unwrap().is_finite());
    }
}
