//! Error types for the summarization core.
//!
//! Every variant is a precondition violation surfaced to the caller at call
//! time. Degenerate inputs (empty documents, all-stopword documents,
//! zero-degree graph nodes) are not errors; they produce empty or zero
//! results instead.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SummarizeError>;

/// Errors raised by summarizer configuration and invocation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SummarizeError {
    /// A required word set (bonus, stigma, null) was not provided.
    #[error("set of {kind} words is empty, provide it before calling this method")]
    EmptyWordSet { kind: &'static str },

    /// Scorer weights must be non-negative.
    #[error("negative weights are not allowed, got {value}")]
    NegativeWeight { value: f64 },

    /// The term-frequency smoothing constant is outside `0.0 <= smooth < 1.0`.
    #[error("smoothing constant must satisfy 0.0 <= smooth < 1.0, got {value}")]
    InvalidSmoothing { value: f64 },

    /// An items-count expression could not be parsed.
    #[error("unsupported items count '{input}'")]
    InvalidItemsCount { input: String },

    /// An unknown summarization method name was requested.
    #[error("unknown summarization method '{name}'")]
    UnknownMethod { name: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = SummarizeError::EmptyWordSet { kind: "bonus" };
        assert!(err.to_string().contains("bonus"));

        let err = SummarizeError::NegativeWeight { value: -1.5 };
        assert!(err.to_string().contains("-1.5"));

        let err = SummarizeError::InvalidItemsCount {
            input: "many".to_string(),
        };
        assert!(err.to_string().contains("many"));
    }
}
