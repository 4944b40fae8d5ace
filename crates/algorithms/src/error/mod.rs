//! Error handling for arithmetic primitives

use core::fmt;
use ffcrypt_api::error::Error as CoreError;

/// Error type for arithmetic primitive operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The modulus is not usable (zero, even, or too small)
    InvalidModulus { reason: &'static str },

    /// An input value does not fit the modulus-specific representation
    ValueTooLarge { context: &'static str },

    /// A buffer does not have the exact length the operation requires
    LengthMismatch {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// The supplied working region is smaller than the queried requirement
    ScratchTooSmall {
        context: &'static str,
        needed: usize,
        actual: usize,
    },

    /// The engine does not implement the requested number format
    UnsupportedFormat { format: &'static str },
}

/// Result type for arithmetic primitive operations
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidModulus { reason } => {
                write!(f, "Invalid modulus: {}", reason)
            }
            Self::ValueTooLarge { context } => {
                write!(f, "{}: value too large for modulus", context)
            }
            Self::LengthMismatch {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "{}: length mismatch (expected {}, got {})",
                    context, expected, actual
                )
            }
            Self::ScratchTooSmall {
                context,
                needed,
                actual,
            } => {
                write!(
                    f,
                    "{}: scratch region too small (needed {}, got {})",
                    context, needed, actual
                )
            }
            Self::UnsupportedFormat { format } => {
                write!(f, "Number format {} is not supported", format)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

// Conversion to the library-level error type. Encoding failures keep their
// identity so callers see the primitive's own status.
impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::InvalidModulus { reason } => CoreError::InvalidArgument {
                context: reason,
                #[cfg(feature = "std")]
                message: std::string::String::new(),
            },
            Error::ValueTooLarge { context } => CoreError::InvalidArgument {
                context,
                #[cfg(feature = "std")]
                message: std::string::String::new(),
            },
            Error::LengthMismatch {
                context,
                expected,
                actual,
            } => CoreError::WrongOutputSize {
                context,
                expected,
                actual,
            },
            Error::ScratchTooSmall { context, .. } => CoreError::Primitive { context },
            Error::UnsupportedFormat { format } => CoreError::UnsupportedFormat { context: format },
        }
    }
}
