//! Error types for PLA format parsing and validation

use std::fmt;
use std::io;
use std::sync::Arc;

/// Errors related to PLA format parsing and validation
///
/// These errors occur when reading or parsing PLA files with invalid format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PLAError {
    /// PLA file has no .i directive and no cubes to infer it from
    MissingInputDirective,
    /// Invalid value in .i directive
    InvalidInputDirective {
        /// The invalid value string
        value: Arc<str>,
    },
    /// Invalid value in .o directive
    InvalidOutputDirective {
        /// The invalid value string
        value: Arc<str>,
    },
    /// Only single-output functions can be identified
    UnsupportedOutputCount {
        /// The declared number of outputs
        count: usize,
    },
    /// A .type other than f or fr
    UnsupportedType {
        /// The declared type string
        value: Arc<str>,
    },
    /// Invalid character in input portion of a cube
    InvalidInputCharacter {
        /// The invalid character
        character: char,
        /// Position in the input string
        position: usize,
        /// Line number (1-based)
        line: usize,
    },
    /// Invalid character in output portion of a cube
    InvalidOutputCharacter {
        /// The invalid character
        character: char,
        /// Line number (1-based)
        line: usize,
    },
    /// A don't-care output; only completely specified functions are accepted
    DontCareOutput {
        /// Line number (1-based)
        line: usize,
    },
    /// Cube line without a separable output part
    MalformedCube {
        /// Line number (1-based)
        line: usize,
    },
    /// Cube dimensions don't match declared dimensions
    CubeDimensionMismatch {
        /// Line number (1-based)
        line: usize,
        /// Expected number of inputs
        expected_inputs: usize,
        /// Actual number of inputs in the cube
        actual_inputs: usize,
        /// Actual number of outputs in the cube
        actual_outputs: usize,
    },
    /// Input label count doesn't match the input count
    LabelCountMismatch {
        /// Expected number of labels
        expected: usize,
        /// Actual number of labels provided
        actual: usize,
    },
}

impl fmt::Display for PLAError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PLAError::MissingInputDirective => {
                write!(f, "PLA file missing .i directive and no cubes to infer from")
            }
            PLAError::InvalidInputDirective { value } => {
                write!(f, "Invalid .i directive value: '{}'", value)
            }
            PLAError::InvalidOutputDirective { value } => {
                write!(f, "Invalid .o directive value: '{}'", value)
            }
            PLAError::UnsupportedOutputCount { count } => {
                write!(f, "PLA file declares {} outputs, only 1 is supported", count)
            }
            PLAError::UnsupportedType { value } => {
                write!(f, "Unsupported .type '{}' (expected f or fr)", value)
            }
            PLAError::InvalidInputCharacter {
                character,
                position,
                line,
            } => write!(
                f,
                "Invalid input character '{}' at position {} on line {}",
                character, position, line
            ),
            PLAError::InvalidOutputCharacter { character, line } => {
                write!(f, "Invalid output character '{}' on line {}", character, line)
            }
            PLAError::DontCareOutput { line } => write!(
                f,
                "Don't-care output on line {}: only completely specified functions are supported",
                line
            ),
            PLAError::MalformedCube { line } => write!(f, "Malformed cube on line {}", line),
            PLAError::CubeDimensionMismatch {
                line,
                expected_inputs,
                actual_inputs,
                actual_outputs,
            } => write!(
                f,
                "Cube on line {} has dimensions (inputs: {}, outputs: {}), expected (inputs: {}, outputs: 1)",
                line, actual_inputs, actual_outputs, expected_inputs
            ),
            PLAError::LabelCountMismatch { expected, actual } => write!(
                f,
                "input label count ({}) doesn't match input count ({})",
                actual, expected
            ),
        }
    }
}

impl std::error::Error for PLAError {}

impl From<PLAError> for io::Error {
    fn from(err: PLAError) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, err)
    }
}

/// Errors that can occur when reading PLA format data
///
/// This error type is returned by `Cover::from_pla_*` methods.
#[derive(Debug)]
pub enum PLAReadError {
    /// PLA format error
    PLA(PLAError),
    /// IO error during reading
    Io(io::Error),
}

impl fmt::Display for PLAReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PLAReadError::PLA(e) => write!(f, "PLA format error: {}", e),
            PLAReadError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for PLAReadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PLAReadError::PLA(e) => Some(e),
            PLAReadError::Io(e) => Some(e),
        }
    }
}

impl From<PLAError> for PLAReadError {
    fn from(err: PLAError) -> Self {
        PLAReadError::PLA(err)
    }
}

impl From<io::Error> for PLAReadError {
    fn from(err: io::Error) -> Self {
        PLAReadError::Io(err)
    }
}

impl From<PLAReadError> for io::Error {
    fn from(err: PLAReadError) -> Self {
        match err {
            PLAReadError::Io(e) => e,
            PLAReadError::PLA(e) => io::Error::new(io::ErrorKind::InvalidData, e),
        }
    }
}

/// Errors that can occur when writing PLA format data
///
/// This error type is returned by `Cover::to_pla_*` methods.
#[derive(Debug)]
pub enum PLAWriteError {
    /// IO error during writing
    Io(io::Error),
}

impl fmt::Display for PLAWriteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PLAWriteError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for PLAWriteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PLAWriteError::Io(e) => Some(e),
        }
    }
}

impl From<io::Error> for PLAWriteError {
    fn from(err: io::Error) -> Self {
        PLAWriteError::Io(err)
    }
}

impl From<PLAWriteError> for io::Error {
    fn from(err: PLAWriteError) -> Self {
        match err {
            PLAWriteError::Io(e) => e,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pla_error_missing_input_directive() {
        let msg = PLAError::MissingInputDirective.to_string();
        assert!(msg.contains("missing .i directive"));
    }

    #[test]
    fn test_pla_error_invalid_input_character() {
        let err = PLAError::InvalidInputCharacter {
            character: 'q',
            position: 3,
            line: 7,
        };
        let msg = err.to_string();
        assert!(msg.contains("'q'"));
        assert!(msg.contains("position 3"));
        assert!(msg.contains("line 7"));
    }

    #[test]
    fn test_pla_error_dont_care_output() {
        let msg = PLAError::DontCareOutput { line: 4 }.to_string();
        assert!(msg.contains("line 4"));
        assert!(msg.contains("completely specified"));
    }

    #[test]
    fn test_pla_read_error_from_pla_error() {
        let read_err: PLAReadError = PLAError::MissingInputDirective.into();
        assert!(matches!(read_err, PLAReadError::PLA(_)));
    }

    #[test]
    fn test_pla_read_error_to_io_error_preserves_io_error() {
        let original = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let io_err: io::Error = PLAReadError::Io(original).into();
        assert_eq!(io_err.kind(), io::ErrorKind::NotFound);
        assert_eq!(io_err.to_string(), "file not found");
    }

    #[test]
    fn test_pla_read_error_pla_to_io_error() {
        let io_err: io::Error = PLAReadError::PLA(PLAError::MissingInputDirective).into();
        assert_eq!(io_err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_pla_write_error_to_io_error() {
        let original = io::Error::new(io::ErrorKind::PermissionDenied, "permission denied");
        let io_err: io::Error = PLAWriteError::Io(original).into();
        assert_eq!(io_err.kind(), io::ErrorKind::PermissionDenied);
    }
}
