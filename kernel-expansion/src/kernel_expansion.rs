use nalgebra::{Dim, Matrix};

use crate::{
    monomials::MonomialBasis, ExpansionError, FeatureExpansion, FeatureRow, Kernel, Params,
    Result, DEFAULT_SIGMA,
};

/// Maps input vectors into the explicit feature space of a kernel.
///
/// The configuration is fixed at construction, so a single instance can be
/// shared between threads and used for any number of expansions.
#[derive(Debug, Clone)]
pub struct KernelExpansion {
    params: Params,
    features_dim: usize,
    // not used by the linear kernel
    basis: Option<MonomialBasis>,
    // weight of each monomial relative to its parent
    steps: Vec<f64>,
}

impl KernelExpansion {
    /// Create a new kernel expansion
    ///
    /// # Arguments:
    /// params: The kernel, its order and bandwidth and the input dimensionality
    pub fn new(params: Params) -> Result<Self> {
        let features_dim = params.validate()?;

        if !params.kernel.uses_sigma() && params.sigma != DEFAULT_SIGMA {
            warn!("sigma = {} has no effect on the {:?} kernel", params.sigma, params.kernel);
        }

        let (basis, steps) = match params.kernel {
            Kernel::Linear => (None, vec![]),
            Kernel::Polynomial => {
                let basis = MonomialBasis::new(params.input_dim, params.d);
                let steps = polynomial_steps(&basis, params.d);
                (Some(basis), steps)
            }
            Kernel::RadialBasis => {
                let basis = MonomialBasis::new(params.input_dim, params.d);
                let steps = radial_basis_steps(&basis, params.sigma);
                (Some(basis), steps)
            }
        };
        debug!(
            "kernel expansion {:?}: d: {}, sigma: {}, input_dim: {} -> features_dim: {}",
            params.kernel, params.d, params.sigma, params.input_dim, features_dim
        );

        Ok(Self {
            params,
            features_dim,
            basis,
            steps,
        })
    }

    /// Create a new kernel expansion from the identifier used in model
    /// configurations, where the empty string selects the linear kernel.
    ///
    /// # Arguments:
    /// kernel_name: One of "", "poly" or "rbf"
    /// d: Order of the expansion
    /// sigma: Bandwidth, defaults to `DEFAULT_SIGMA`
    /// input_dim: Length of the input vectors
    pub fn from_name(
        kernel_name: &str,
        d: usize,
        sigma: Option<f64>,
        input_dim: usize,
    ) -> Result<Self> {
        let kernel: Kernel = kernel_name.parse()?;
        let params = Params::new(kernel, d, input_dim).with_sigma(sigma.unwrap_or(DEFAULT_SIGMA));
        Self::new(params)
    }

    /// The configuration this expansion was built from
    #[inline(always)]
    pub fn params(&self) -> &Params {
        &self.params
    }

    /// The expansion family
    #[inline(always)]
    pub fn kernel(&self) -> Kernel {
        self.params.kernel
    }

    /// Order of the expansion
    #[inline(always)]
    pub fn degree(&self) -> usize {
        self.params.d
    }

    /// Bandwidth of the radial basis kernel
    #[inline(always)]
    pub fn sigma(&self) -> f64 {
        self.params.sigma
    }

    /// Evaluate the kernel function the expansion realizes, such that
    /// `kernel_value(x, y)` equals the dot product of `expand(x)` and `expand(y)`
    pub fn kernel_value(&self, x: &[f64], y: &[f64]) -> Result<f64> {
        self.check_input(x)?;
        self.check_input(y)?;

        let xy = dot(x, y);
        let value = match (self.params.kernel, &self.basis) {
            (Kernel::Polynomial, Some(basis)) => {
                (0..basis.max_degree()).fold(1.0, |acc, _| acc * (1.0 + xy))
            }
            (Kernel::RadialBasis, Some(basis)) => {
                let s2 = self.params.sigma * self.params.sigma;
                // truncated taylor series of exp(x·y / σ²), each term carrying
                // the envelope so that large terms are damped before summing
                let mut term = (-(dot(x, x) + dot(y, y)) / (2.0 * s2)).exp();
                let mut sum = term;
                for k in 1..=basis.max_degree() {
                    term *= xy / (s2 * k as f64);
                    sum += term;
                }
                sum
            }
            _ => xy,
        };

        Ok(value)
    }

    fn check_input(&self, x: &[f64]) -> Result<()> {
        if x.len() != self.params.input_dim {
            return Err(ExpansionError::InvalidInput {
                expected: self.params.input_dim,
                got: x.len(),
            });
        }
        Ok(())
    }
}

impl FeatureExpansion for KernelExpansion {
    #[inline(always)]
    fn input_dim(&self) -> usize {
        self.params.input_dim
    }

    #[inline(always)]
    fn features_dim(&self) -> usize {
        self.features_dim
    }

    #[inline(always)]
    fn is_linear_kernel(&self) -> bool {
        self.params.kernel == Kernel::Linear
    }

    fn expand(&self, x: &[f64]) -> Result<FeatureRow> {
        self.check_input(x)?;

        let features: Vec<f64> = match (self.params.kernel, &self.basis) {
            (Kernel::Polynomial, Some(basis)) => basis.evaluate(x, &self.steps, 1.0),
            (Kernel::RadialBasis, Some(basis)) => {
                let s2 = self.params.sigma * self.params.sigma;
                let envelope = (-dot(x, x) / (2.0 * s2)).exp();
                basis.evaluate(x, &self.steps, envelope)
            }
            _ => x.to_vec(),
        };
        trace!("expand: {:?} -> {:?}", x, features);

        Ok(Matrix::from_vec_generic(
            Dim::from_usize(1),
            Dim::from_usize(features.len()),
            features,
        ))
    }
}

#[inline(always)]
fn dot(x: &[f64], y: &[f64]) -> f64 {
    x.iter().zip(y.iter()).map(|(a, b)| a * b).sum()
}

/// The multinomial weight of (1 + x·y)^d for a monomial of degree k with
/// exponents c is sqrt(d! / ((d - k)! Π c_i!)). Relative to its parent that is
/// sqrt((d - k + 1) / run).
fn polynomial_steps(basis: &MonomialBasis, d: usize) -> Vec<f64> {
    basis
        .iter()
        .map(|m| match m.degree {
            0 => 1.0,
            k => ((d - k + 1) as f64 / m.run as f64).sqrt(),
        })
        .collect()
}

/// The weight 1 / (σ^k sqrt(Π c_i!)) relative to the parent is 1 / (σ sqrt(run))
fn radial_basis_steps(basis: &MonomialBasis, sigma: f64) -> Vec<f64> {
    basis
        .iter()
        .map(|m| match m.degree {
            0 => 1.0,
            _ => 1.0 / (sigma * (m.run as f64).sqrt()),
        })
        .collect()
}
