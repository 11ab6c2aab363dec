//! Error types for cover operations

use std::fmt;
use std::io;

/// Errors related to cover operations
///
/// These errors occur when a cover is turned into a completely specified
/// truth table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoverError {
    /// The cover has more inputs than a truth table can hold
    TooManyInputs {
        /// Number of inputs of the cover
        inputs: usize,
        /// The largest supported number of inputs
        max: usize,
    },
    /// An ON-set cube and an OFF-set cube share an assignment
    OverlappingSets {
        /// An assignment index lying in both sets
        assignment: usize,
    },
    /// ON-set and OFF-set together leave an assignment unspecified
    IncompleteFunction {
        /// An assignment index lying in neither set
        assignment: usize,
    },
}

impl fmt::Display for CoverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoverError::TooManyInputs { inputs, max } => write!(
                f,
                "Cover has {} inputs, truth tables support at most {}",
                inputs, max
            ),
            CoverError::OverlappingSets { assignment } => write!(
                f,
                "Assignment {} is covered by both the ON-set and the OFF-set",
                assignment
            ),
            CoverError::IncompleteFunction { assignment } => write!(
                f,
                "Assignment {} is covered by neither the ON-set nor the OFF-set",
                assignment
            ),
        }
    }
}

impl std::error::Error for CoverError {}

impl From<CoverError> for io::Error {
    fn from(err: CoverError) -> Self {
        io::Error::new(io::ErrorKind::InvalidInput, err)
    }
}
