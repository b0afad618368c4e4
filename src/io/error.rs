//! Error types for maze generation operations

use std::fmt;

/// Main error type for all maze generation operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    /// Shape parameters derive a cell space too small (or too large) to carve
    InvalidShape {
        /// Name of the offending shape parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is unusable
        reason: String,
    },

    /// Carver state disagrees with the topology it is walking
    ///
    /// Cannot occur while the visited-set latch and adjacency enumeration
    /// uphold their invariants; any occurrence is fatal and surfaced as-is.
    Inconsistency {
        /// Name of the operation that detected the disagreement
        operation: &'static str,
        /// Description of the disagreement
        reason: String,
    },
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidShape {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid shape '{parameter}' = '{value}': {reason}")
            }
            Self::Inconsistency { operation, reason } => {
                write!(f, "Internal inconsistency in {operation}: {reason}")
            }
        }
    }
}

impl std::error::Error for MazeError {}

/// Convenience type alias for maze generation results
pub type Result<T> = std::result::Result<T, MazeError>;

/// Create an invalid shape error
pub fn invalid_shape(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> MazeError {
    MazeError::InvalidShape {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an internal inconsistency error
pub fn inconsistency(operation: &'static str, reason: &impl ToString) -> MazeError {
    MazeError::Inconsistency {
        operation,
        reason: reason.to_string(),
    }
}
