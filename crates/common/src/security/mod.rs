//! Security primitives and memory safety utilities
//!
//! This module provides foundational security types and patterns used throughout
//! the ffcrypt ecosystem to ensure proper handling of sensitive cryptographic material.

pub mod secret;

// Re-export core security types
pub use secret::{SecureZeroingType, ZeroizeGuard};

// Conditionally re-export SecretVec only when alloc feature is enabled
#[cfg(feature = "alloc")]
pub use secret::SecretVec;
