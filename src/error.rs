//! Error types for threshold function identification
//!
//! Identification has two kinds of negative outcome: the function is proven
//! not to be a threshold function (a binate variable, or an infeasible
//! system of inequalities), or the machinery failed (solver trouble, or a
//! solution that does not reproduce the function). Both are reported through
//! [`ThresholdError`]; [`ThresholdError::is_proven_non_threshold`] tells them
//! apart.

use std::fmt;
use std::io;

/// Failure reported by a [`LinearSolver`](crate::LinearSolver) backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    /// No assignment satisfies the constraints
    Infeasible,
    /// The objective can be improved without bound
    Unbounded,
    /// The solver returned a value that is not an integer
    NonIntegral {
        /// Column holding the offending value
        column: usize,
    },
    /// The backend failed for another reason
    Backend(String),
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolveError::Infeasible => write!(f, "the linear program is infeasible"),
            SolveError::Unbounded => write!(f, "the linear program is unbounded"),
            SolveError::NonIntegral { column } => {
                write!(f, "solver returned a non-integral value in column {}", column)
            }
            SolveError::Backend(message) => write!(f, "solver failure: {}", message),
        }
    }
}

impl std::error::Error for SolveError {}

/// The error type for threshold identification
///
/// # Examples
///
/// ```
/// use threshold_logic::{identify, ThresholdError, TruthTable};
///
/// let xor = TruthTable::from_hex(2, "6").unwrap();
/// match identify(&xor) {
///     Err(ThresholdError::Binate { variable }) => assert_eq!(variable, 0),
///     other => panic!("unexpected result {:?}", other),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThresholdError {
    /// The function depends on a variable in both polarities
    ///
    /// Threshold functions are unate in every variable, so this settles the
    /// question without solving anything.
    Binate {
        /// The first binate variable found
        variable: usize,
    },
    /// The function is unate but no integer linear form realizes it
    NotLinearlySeparable,
    /// The solver failed for a reason other than infeasibility
    Solver(SolveError),
    /// The computed linear form disagrees with the function
    Verification {
        /// The first assignment on which form and function differ
        assignment: usize,
    },
}

impl ThresholdError {
    /// Whether this error proves the function is not a threshold function
    ///
    /// `false` for solver and verification failures, which say nothing about
    /// the function itself.
    pub fn is_proven_non_threshold(&self) -> bool {
        matches!(
            self,
            ThresholdError::Binate { .. } | ThresholdError::NotLinearlySeparable
        )
    }
}

impl fmt::Display for ThresholdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThresholdError::Binate { variable } => {
                write!(f, "binate in variable x{}", variable)
            }
            ThresholdError::NotLinearlySeparable => {
                write!(f, "unate but not linearly separable")
            }
            ThresholdError::Solver(err) => write!(f, "{}", err),
            ThresholdError::Verification { assignment } => write!(
                f,
                "linear form disagrees with the function on assignment {}",
                assignment
            ),
        }
    }
}

impl std::error::Error for ThresholdError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ThresholdError::Solver(err) => Some(err),
            _ => None,
        }
    }
}

// Infeasibility is the expected answer for unate non-threshold functions
impl From<SolveError> for ThresholdError {
    fn from(err: SolveError) -> Self {
        match err {
            SolveError::Infeasible => ThresholdError::NotLinearlySeparable,
            other => ThresholdError::Solver(other),
        }
    }
}

impl From<ThresholdError> for io::Error {
    fn from(err: ThresholdError) -> Self {
        io::Error::other(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_binate_display() {
        let err = ThresholdError::Binate { variable: 2 };
        assert_eq!(err.to_string(), "binate in variable x2");
    }

    #[test]
    fn test_infeasible_maps_to_not_linearly_separable() {
        let err: ThresholdError = SolveError::Infeasible.into();
        assert_eq!(err, ThresholdError::NotLinearlySeparable);
        assert!(err.is_proven_non_threshold());
    }

    #[test]
    fn test_solver_failures_are_not_proofs() {
        let err: ThresholdError = SolveError::Unbounded.into();
        assert_eq!(err, ThresholdError::Solver(SolveError::Unbounded));
        assert!(!err.is_proven_non_threshold());
        assert!(err.source().is_some());

        let err = ThresholdError::Verification { assignment: 5 };
        assert!(!err.is_proven_non_threshold());
        assert!(err.source().is_none());
        assert!(err.to_string().contains("assignment 5"));
    }

    #[test]
    fn test_backend_message_is_kept() {
        let err = ThresholdError::Solver(SolveError::Backend("singular basis".to_string()));
        assert!(err.to_string().contains("singular basis"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err: io::Error = ThresholdError::NotLinearlySeparable.into();
        assert_eq!(io_err.kind(), io::ErrorKind::Other);
        assert!(io_err.to_string().contains("not linearly separable"));
    }
}
