//! Finite-field Diffie-Hellman key agreement
//!
//! This crate implements classic Diffie-Hellman over discrete-log groups:
//! immutable group descriptors ([`DhGroup`]), keys bound to a group
//! ([`DhKey`]), and the secret-agreement operation
//! ([`dh_secret_agreement`]) that derives the shared secret
//! `Y^x mod P` as a fixed-width byte string.
//!
//! The [`Ffdh2048`] type packages the RFC 3526 2048-bit MODP group behind
//! the [`ffcrypt_api::KeyAgreement`] trait for callers that want a
//! ready-made scheme instead of explicit groups and keys.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(all(feature = "alloc", not(feature = "std")))]
extern crate alloc;

pub mod agreement;
pub mod ffdh;
pub mod group;
pub mod key;

// Re-exports
pub use agreement::dh_secret_agreement;
pub use ffdh::{Ffdh2048, FfdhPrivateKey, FfdhPublicKey, FfdhSharedSecret};
pub use group::DhGroup;
pub use key::{DhKey, ExponentDomain};
