use thiserror::Error;

/// Everything that can go wrong while configuring or applying an expansion
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExpansionError {
    /// The parameters are outside the domain the kernel accepts
    #[error("invalid kernel configuration: {reason}")]
    InvalidConfiguration {
        /// What was wrong with the parameters
        reason: String,
    },

    /// The kernel identifier is not one of the recognized names
    #[error("unrecognized kernel name {name:?}, expected one of \"\", \"poly\" or \"rbf\"")]
    UnknownKernel {
        /// The rejected identifier
        name: String,
    },

    /// The input vector does not have the configured dimensionality
    #[error("invalid input: expected a vector of length {expected}, got {got}")]
    InvalidInput {
        /// The configured input dimensionality
        expected: usize,
        /// The length of the supplied vector
        got: usize,
    },
}

impl ExpansionError {
    /// Whether this error was raised while constructing an expansion
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            ExpansionError::InvalidConfiguration { .. } | ExpansionError::UnknownKernel { .. }
        )
    }
}

/// Result type of all fallible expansion operations
pub type Result<T> = std::result::Result<T, ExpansionError>;
