//! Constant values for the ffcrypt library
//!
//! Domain parameters and sizing constants used across the ffcrypt crates.
//! This crate is constants-only and always no_std.

#![no_std]

pub mod traditional;

pub use traditional::dh;
