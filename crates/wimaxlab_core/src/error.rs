use std::fmt;

/// Errors from the randomized sampling helpers.
#[derive(Debug, Clone, PartialEq)]
pub enum SampleError {
    /// Categorical weights were rejected by the weighted sampler
    InvalidWeights { what: &'static str },
    /// A uniform range had invalid bounds
    InvalidUniform { low: f64, high: f64 },
}

impl fmt::Display for SampleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SampleError::InvalidWeights { what } => {
                write!(f, "invalid weights for {what}")
            }
            SampleError::InvalidUniform { low, high } => {
                write!(f, "invalid uniform range [{low}, {high})")
            }
        }
    }
}

impl std::error::Error for SampleError {}
