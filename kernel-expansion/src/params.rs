use crate::{monomials, ExpansionError, Kernel, Result};

/// The bandwidth used when none is supplied
pub const DEFAULT_SIGMA: f64 = 1.0;

/// The configuration of a kernel expansion
#[derive(Debug, Clone, PartialEq)]
pub struct Params {
    /// Which expansion family to apply
    pub kernel: Kernel,
    /// Order of the expansion, i.e. the highest monomial degree.
    /// Ignored by the linear kernel
    pub d: usize,
    /// Bandwidth of the radial basis kernel, ignored by the others
    pub sigma: f64,
    /// Length of the input vectors
    pub input_dim: usize,
}

impl Params {
    /// Create parameters with the default bandwidth
    pub fn new(kernel: Kernel, d: usize, input_dim: usize) -> Self {
        Self {
            kernel,
            d,
            sigma: DEFAULT_SIGMA,
            input_dim,
        }
    }

    /// Override the bandwidth
    pub fn with_sigma(mut self, sigma: f64) -> Self {
        self.sigma = sigma;
        self
    }

    /// Check that every parameter the kernel uses is within its domain.
    /// Returns the dimensionality of the expanded vectors.
    pub fn validate(&self) -> Result<usize> {
        if self.kernel.uses_sigma() && !(self.sigma.is_finite() && self.sigma > 0.0) {
            return Err(ExpansionError::InvalidConfiguration {
                reason: format!(
                    "sigma must be finite and positive for the {} kernel, got {}",
                    self.kernel, self.sigma
                ),
            });
        }
        self.features_dim()
    }

    /// Dimensionality of the expanded vectors
    pub(crate) fn features_dim(&self) -> Result<usize> {
        if self.kernel == Kernel::Linear {
            return Ok(self.input_dim);
        }
        match monomials::num_monomials(self.input_dim, self.d) {
            Some(dim) => Ok(dim),
            None => Err(ExpansionError::InvalidConfiguration {
                reason: format!(
                    "order {} over {} inputs exceeds the maximum of {} features",
                    self.d,
                    self.input_dim,
                    monomials::MAX_FEATURES_DIM
                ),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn params_default_sigma() {
        let params = Params::new(Kernel::RadialBasis, 2, 3);
        assert_eq!(params.sigma, DEFAULT_SIGMA);
        assert_eq!(params.with_sigma(0.5).sigma, 0.5);
    }

    #[test]
    fn params_validate_sigma() {
        for sigma in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let err = Params::new(Kernel::RadialBasis, 2, 3).with_sigma(sigma).validate();
            assert!(matches!(err, Err(ExpansionError::InvalidConfiguration { .. })));
        }
        // only the radial basis kernel cares about the bandwidth
        assert!(Params::new(Kernel::Polynomial, 2, 3).with_sigma(-1.0).validate().is_ok());
        assert!(Params::new(Kernel::Linear, 0, 3).with_sigma(0.0).validate().is_ok());
    }

    #[test]
    fn params_features_dim() {
        assert_eq!(Params::new(Kernel::Linear, 7, 3).features_dim(), Ok(3));
        assert_eq!(Params::new(Kernel::Polynomial, 2, 3).features_dim(), Ok(10));
        assert_eq!(Params::new(Kernel::Polynomial, 2, 3).validate(), Ok(10));
        assert_eq!(Params::new(Kernel::RadialBasis, 3, 2).features_dim(), Ok(10));
        assert!(Params::new(Kernel::Polynomial, 10, 1000).validate().is_err());
        assert!(Params::new(Kernel::Polynomial, usize::MAX, 2).validate().is_err());
    }
}
