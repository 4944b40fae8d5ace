//! Validation utilities for cryptographic operations

use super::{Error, Result};

/// Validate an argument-level precondition
pub fn parameter(condition: bool, context: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::InvalidArgument {
            context,
            #[cfg(feature = "std")]
            message: std::string::String::new(),
        });
    }
    Ok(())
}

/// Validate an exact output-buffer size
pub fn output_size(
    actual: usize,
    expected: usize,
    context: &'static str,
) -> Result<()> {
    if actual != expected {
        return Err(Error::WrongOutputSize {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}
