//! Trait definition for key-agreement schemes with enhanced type safety
//!
//! This module provides a type-safe interface for two-party key agreement:
//! both parties hold a keypair for the same set of domain parameters, and
//! each derives the identical shared secret from its own private key and
//! the counterpart's public key.

use super::serialize::{Serialize, SerializeSecret};
use crate::Result;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

/// Trait for key agreement with domain-specific types.
///
/// # Security Design
///
/// This trait enforces strong type safety and clear contracts for
/// serialization, preventing common security vulnerabilities.
pub trait KeyAgreement {
    /// Public key type with appropriate constraints.
    ///
    /// # Security Note
    /// Implements `Serialize` to guarantee safe `from_bytes` and `to_bytes` methods.
    type PublicKey: Clone + Serialize;

    /// Private key type with security guarantees.
    ///
    /// # Security Note
    /// Implements `SerializeSecret` so exported key material is zeroized on drop.
    type PrivateKey: Clone + SerializeSecret;

    /// Shared secret type with security guarantees.
    ///
    /// # Security Note
    /// - Implements `Zeroize` for secure memory cleanup.
    /// - Should be converted to application keys immediately after derivation.
    type SharedSecret: Zeroize + Clone + SerializeSecret;

    /// Keypair type for efficient storage of related keys. It is an intermediate
    /// type and does not require a serialization contract itself.
    type KeyPair: Clone;

    /// Returns the scheme name.
    fn name() -> &'static str;

    /// Generate a new keypair.
    ///
    /// # Security Requirements
    /// - Must use the provided CSPRNG for all randomness.
    /// - Keys must be generated according to the scheme specification.
    fn keypair<R: CryptoRng + RngCore>(rng: &mut R) -> Result<Self::KeyPair>;

    /// Extract public key from keypair.
    fn public_key(keypair: &Self::KeyPair) -> Self::PublicKey;

    /// Extract private key from keypair.
    ///
    /// # Security Note
    /// The returned private key should be protected and zeroized after use.
    fn private_key(keypair: &Self::KeyPair) -> Self::PrivateKey;

    /// Derive the shared secret from our private key and the counterpart's
    /// public key.
    ///
    /// # Security Requirements
    /// - Must validate that both keys belong to the same domain parameters.
    /// - Must not leak information about the private key through timing.
    /// - Must reject degenerate results that would yield an unusable secret.
    fn agree(
        private_key: &Self::PrivateKey,
        public_key: &Self::PublicKey,
    ) -> Result<Self::SharedSecret>;
}
