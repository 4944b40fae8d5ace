//! Modular-arithmetic primitives for the ffcrypt library
//!
//! This crate provides the multi-precision engine that the public-key
//! crates build on: `Modulus`, fixed-iteration modular exponentiation,
//! and the `ModArith` capability trait that allows the engine to be
//! substituted by any compliant implementation.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(all(feature = "alloc", not(feature = "std")))]
extern crate alloc;

pub mod error;

#[cfg(feature = "modular")]
pub mod modular;

pub use error::{Error, Result};

#[cfg(feature = "modular")]
pub use modular::{ModArith, Modulus};
