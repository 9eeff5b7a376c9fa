//! Explicit kernel feature expansions, mapping input vectors into a higher
//! dimensional space so that a linear predictor can learn non-linear
//! decision boundaries.

#![deny(unused_imports)]
#![warn(missing_docs)]

#[macro_use]
extern crate log;

use nalgebra::{Const, DMatrix, Dim, Dyn, Matrix, VecStorage};

mod error;
mod kernel;
mod kernel_expansion;
mod monomials;
mod params;

pub use error::{ExpansionError, Result};
pub use kernel::Kernel;
pub use kernel_expansion::KernelExpansion;
pub use monomials::MAX_FEATURES_DIM;
pub use params::{Params, DEFAULT_SIGMA};

/// An owned row of expanded features
pub type FeatureRow = Matrix<f64, Const<1>, Dyn, VecStorage<f64, Const<1>, Dyn>>;

/// Anything that maps input vectors into a fixed size feature space
pub trait FeatureExpansion {
    /// The length every input vector must have
    fn input_dim(&self) -> usize;

    /// The length of every vector produced by `expand`
    fn features_dim(&self) -> usize;

    /// Whether `expand` is the identity map
    fn is_linear_kernel(&self) -> bool;

    /// Expand a single input vector
    fn expand(&self, x: &[f64]) -> Result<FeatureRow>;

    /// Expand a batch of inputs
    ///
    /// # Arguments
    /// inputs: Number of rows are the observed datapoints and number of columns
    /// represent the input features
    fn expand_rows(&self, inputs: &DMatrix<f64>) -> Result<DMatrix<f64>> {
        if inputs.ncols() != self.input_dim() {
            return Err(ExpansionError::InvalidInput {
                expected: self.input_dim(),
                got: inputs.ncols(),
            });
        }

        let mut full_features: DMatrix<f64> = Matrix::from_element_generic(
            Dim::from_usize(inputs.nrows()),
            Dim::from_usize(self.features_dim()),
            0.0,
        );
        for i in 0..inputs.nrows() {
            let x: Vec<f64> = inputs.row(i).iter().cloned().collect();
            full_features.set_row(i, &self.expand(&x)?);
        }
        debug!(
            "expanded {} rows from {} to {} features",
            inputs.nrows(),
            inputs.ncols(),
            full_features.ncols()
        );

        Ok(full_features)
    }
}
