use std::{fmt, str::FromStr};

use crate::ExpansionError;

/// The family of expansion to apply to input vectors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Kernel {
    /// No expansion, the features are passed through unchanged
    #[default]
    Linear,
    /// Monomials realizing the kernel (1 + x·y)^d
    Polynomial,
    /// Truncated Taylor features of the gaussian kernel exp(-|x - y|² / 2σ²)
    RadialBasis,
}

impl Kernel {
    /// The identifier used for this kernel in model configurations.
    /// The linear kernel is identified by the empty string.
    pub const fn name(&self) -> &'static str {
        match self {
            Kernel::Linear => "",
            Kernel::Polynomial => "poly",
            Kernel::RadialBasis => "rbf",
        }
    }

    /// Whether the bandwidth parameter has any effect on this kernel
    #[inline(always)]
    pub const fn uses_sigma(&self) -> bool {
        matches!(self, Kernel::RadialBasis)
    }
}

impl FromStr for Kernel {
    type Err = ExpansionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" => Ok(Kernel::Linear),
            "poly" => Ok(Kernel::Polynomial),
            "rbf" => Ok(Kernel::RadialBasis),
            other => Err(ExpansionError::UnknownKernel {
                name: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Kernel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
