//! Error types for truth table construction and parsing

use std::fmt;
use std::io;

/// Errors that can occur when building a truth table from external input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TruthTableError {
    /// Requested variable count exceeds the supported maximum
    TooManyVariables {
        /// The requested number of variables
        requested: usize,
        /// The largest supported number of variables
        max: usize,
    },
    /// Input string length does not match the variable count
    LengthMismatch {
        /// Number of variables of the table being parsed
        num_vars: usize,
        /// Number of characters required
        expected: usize,
        /// Number of characters provided
        actual: usize,
    },
    /// Character that is not a valid digit for the chosen radix
    InvalidCharacter {
        /// The invalid character
        character: char,
        /// Position in the input string
        position: usize,
    },
}

impl fmt::Display for TruthTableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TruthTableError::TooManyVariables { requested, max } => write!(
                f,
                "Truth table with {} variables requested, at most {} are supported",
                requested, max
            ),
            TruthTableError::LengthMismatch {
                num_vars,
                expected,
                actual,
            } => write!(
                f,
                "A {}-variable truth table needs {} digits, got {}",
                num_vars, expected, actual
            ),
            TruthTableError::InvalidCharacter {
                character,
                position,
            } => write!(
                f,
                "Invalid truth table character '{}' at position {}",
                character, position
            ),
        }
    }
}

impl std::error::Error for TruthTableError {}

impl From<TruthTableError> for io::Error {
    fn from(err: TruthTableError) -> Self {
        io::Error::new(io::ErrorKind::InvalidInput, err)
    }
}
