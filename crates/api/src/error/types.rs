//! Error type definitions for cryptographic operations

#[cfg(feature = "std")]
use std::string::String;

/// Primary error type for cryptographic operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An argument did not satisfy the operation's contract: unknown flag
    /// bits, a key missing required material, or keys from different groups.
    InvalidArgument {
        context: &'static str,
        #[cfg(feature = "std")]
        message: String,
    },

    /// The destination buffer does not have the exact size the operation
    /// requires.
    WrongOutputSize {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Allocation of transient working memory failed.
    MemoryAllocationFailure {
        context: &'static str,
    },

    /// A computed value is unusable: for secret agreement, an all-zero
    /// shared secret.
    InvalidBlob {
        context: &'static str,
        #[cfg(feature = "std")]
        message: String,
    },

    /// The requested numeric output format is not supported by the
    /// arithmetic engine.
    UnsupportedFormat {
        context: &'static str,
    },

    /// Failure reported by an underlying arithmetic primitive.
    Primitive {
        context: &'static str,
    },
}

/// Result type for cryptographic operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Add context to an existing error
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::InvalidArgument { .. } => Self::InvalidArgument {
                context,
                #[cfg(feature = "std")]
                message: String::new(),
            },
            Self::WrongOutputSize {
                expected, actual, ..
            } => Self::WrongOutputSize {
                context,
                expected,
                actual,
            },
            Self::MemoryAllocationFailure { .. } => Self::MemoryAllocationFailure { context },
            Self::InvalidBlob { .. } => Self::InvalidBlob {
                context,
                #[cfg(feature = "std")]
                message: String::new(),
            },
            Self::UnsupportedFormat { .. } => Self::UnsupportedFormat { context },
            Self::Primitive { .. } => Self::Primitive { context },
        }
    }

    /// Add a message to an existing error (when std is available)
    #[cfg(feature = "std")]
    pub fn with_message(self, message: impl Into<String>) -> Self {
        let message = message.into();
        match self {
            Self::InvalidArgument { context, .. } => Self::InvalidArgument { context, message },
            Self::InvalidBlob { context, .. } => Self::InvalidBlob { context, message },
            other => other,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidArgument { context, .. } => {
                write!(f, "Invalid argument: {}", context)
            }
            Self::WrongOutputSize {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "{}: wrong output size (expected {}, got {})",
                    context, expected, actual
                )
            }
            Self::MemoryAllocationFailure { context } => {
                write!(f, "Memory allocation failure: {}", context)
            }
            Self::InvalidBlob { context, .. } => {
                write!(f, "Invalid blob: {}", context)
            }
            Self::UnsupportedFormat { context } => {
                write!(f, "Unsupported number format: {}", context)
            }
            Self::Primitive { context } => {
                write!(f, "Arithmetic primitive failure: {}", context)
            }
        }
    }
}
