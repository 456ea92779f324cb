use std::fmt;

/// Failures of the pure analytics. None of these are retried.
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisError {
    /// The reference date index was empty, so there is nothing to snap onto
    InvalidIndex,
    /// An input that would otherwise turn into NaN/inf (e.g. non-positive start price)
    InvalidInput(String),
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalysisError::InvalidIndex => write!(f, "Cannot snap onto an empty date index"),
            AnalysisError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
        }
    }
}

impl std::error::Error for AnalysisError {}
