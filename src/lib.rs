//! # ffcrypt
//!
//! A pure-Rust library for finite-field public-key cryptography, centered
//! on Diffie-Hellman secret agreement over discrete-log groups.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! ffcrypt = "0.3"
//! ```
//!
//! ## Features
//!
//! - `dh` (default): Finite-field Diffie-Hellman key agreement
//! - `algorithms`: The modular-arithmetic layer on its own
//! - `full`: All features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several
//! sub-crates:
//!
//! - [`ffcrypt-api`]: Error types, number formats, and the scheme traits
//! - [`ffcrypt-common`]: Secret-memory types with guaranteed zeroization
//! - [`ffcrypt-params`]: RFC 3526 MODP group parameters
//! - [`ffcrypt-algorithms`]: Modular arithmetic over fixed odd moduli
//! - [`ffcrypt-dh`]: Groups, keys, and the secret-agreement operation

#![cfg_attr(not(feature = "std"), no_std)]

// Core re-exports (always available)
pub use ffcrypt_api as api;
pub use ffcrypt_common as common;
pub use ffcrypt_internal as internal;
pub use ffcrypt_params as params;

// Feature-gated re-exports
#[cfg(feature = "algorithms")]
pub use ffcrypt_algorithms as algorithms;

#[cfg(feature = "dh")]
pub use ffcrypt_dh as dh;

/// Common imports for ffcrypt users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Re-export core traits and formats
    pub use crate::api::{KeyAgreement, NumberFormat, Serialize, SerializeSecret};

    // Re-export security types
    pub use crate::common::{SecretVec, SecureZeroingType, ZeroizeGuard};

    #[cfg(feature = "dh")]
    pub use crate::dh::{
        dh_secret_agreement, DhGroup, DhKey, ExponentDomain, Ffdh2048, FfdhPrivateKey,
        FfdhPublicKey, FfdhSharedSecret,
    };
}
