//! Error types for line search operations.
//!
//! Errors fall into three groups: configuration errors raised when an engine
//! is built with invalid constants, convergence failures raised when the
//! iteration budget runs out, and validation or evaluation failures raised
//! while the search is running. A search that stalls is not an error; it is
//! reported through the exit condition of a successful result.

use thiserror::Error;

/// Errors that can occur while configuring or running a line search.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LineSearchError {
    /// Invalid configuration or argument.
    ///
    /// Raised at construction for invalid Wolfe constants, or by input
    /// validation hooks for invalid search arguments.
    #[error("Invalid parameter: {reason}")]
    InvalidParameter {
        /// Description of the invalid parameter
        reason: String,
    },

    /// The iteration budget was exhausted without meeting a stopping condition.
    #[error("Maximum iterations ({max_iterations}) reached.{}", unbounded_suffix(.unbounded))]
    MaxIterationsReached {
        /// Iteration budget of the engine
        max_iterations: usize,
        /// True if the bracket never acquired a finite upper bound
        unbounded: bool,
    },

    /// A validation hook rejected an evaluation.
    #[error("Validation failed: {reason}")]
    Validation {
        /// Description of the rejected quantity
        reason: String,
    },

    /// Dimension mismatch between vectors.
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Expected dimension
        expected: String,
        /// Actual dimension
        actual: String,
    },

    /// The objective function could not be evaluated.
    #[error("Objective evaluation failed: {reason}")]
    Evaluation {
        /// Description reported by the objective
        reason: String,
    },
}

impl LineSearchError {
    /// Create an InvalidParameter error with a custom reason.
    pub fn invalid_parameter<S: Into<String>>(reason: S) -> Self {
        Self::InvalidParameter {
            reason: reason.into(),
        }
    }

    /// Create a MaxIterationsReached error.
    pub fn max_iterations(max_iterations: usize, unbounded: bool) -> Self {
        Self::MaxIterationsReached {
            max_iterations,
            unbounded,
        }
    }

    /// Create a Validation error with a custom reason.
    pub fn validation<S: Into<String>>(reason: S) -> Self {
        Self::Validation {
            reason: reason.into(),
        }
    }

    /// Create a DimensionMismatch error.
    pub fn dimension_mismatch<S1, S2>(expected: S1, actual: S2) -> Self
    where
        S1: std::fmt::Display,
        S2: std::fmt::Display,
    {
        Self::DimensionMismatch {
            expected: expected.to_string(),
            actual: actual.to_string(),
        }
    }

    /// Create an Evaluation error with a custom reason.
    pub fn evaluation<S: Into<String>>(reason: S) -> Self {
        Self::Evaluation {
            reason: reason.into(),
        }
    }

    /// Returns true for errors caused by the engine's own configuration.
    pub fn is_configuration_error(&self) -> bool {
        matches!(self, Self::InvalidParameter { .. })
    }

    /// Returns true if the search ran out of iterations.
    pub fn is_convergence_failure(&self) -> bool {
        matches!(self, Self::MaxIterationsReached { .. })
    }
}

fn unbounded_suffix(unbounded: &bool) -> &'static str {
    if *unbounded {
        " Function appears to be unbounded in search direction."
    } else {
        ""
    }
}

/// Result type alias for line search operations.
pub type Result<T> = std::result::Result<T, LineSearchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = LineSearchError::invalid_parameter("c1 0 should be greater than 0");
        assert!(matches!(err, LineSearchError::InvalidParameter { .. }));
        assert_eq!(
            err.to_string(),
            "Invalid parameter: c1 0 should be greater than 0"
        );

        let err = LineSearchError::dimension_mismatch(3, 4);
        assert!(matches!(err, LineSearchError::DimensionMismatch { .. }));
        assert_eq!(err.to_string(), "Dimension mismatch: expected 3, got 4");
    }

    #[test]
    fn test_max_iterations_messages() {
        let unbounded = LineSearchError::max_iterations(5, true);
        assert_eq!(
            unbounded.to_string(),
            "Maximum iterations (5) reached. Function appears to be unbounded in search direction."
        );

        let bounded = LineSearchError::max_iterations(10, false);
        assert_eq!(bounded.to_string(), "Maximum iterations (10) reached.");
    }

    #[test]
    fn test_error_classification() {
        assert!(LineSearchError::invalid_parameter("bad c2").is_configuration_error());
        assert!(!LineSearchError::invalid_parameter("bad c2").is_convergence_failure());
        assert!(LineSearchError::max_iterations(3, false).is_convergence_failure());
        assert!(!LineSearchError::validation("NaN").is_configuration_error());
        assert!(!LineSearchError::evaluation("domain").is_convergence_failure());
    }

    #[test]
    fn test_error_display() {
        let errors = vec![
            LineSearchError::invalid_parameter("c2 1 should be less than 1"),
            LineSearchError::max_iterations(10, true),
            LineSearchError::validation("non-finite gradient"),
            LineSearchError::dimension_mismatch("2", "3"),
            LineSearchError::evaluation("log of negative number"),
        ];

        for err in errors {
            assert!(!err.to_string().is_empty());
        }
    }
}
