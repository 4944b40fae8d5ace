//! Internal utilities shared by the ffcrypt crates
//!
//! These helpers are implementation details of the library. They carry no
//! stability guarantees and should not be used directly by applications.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod constant_time;

pub use constant_time::{ct_assign, ct_eq, ct_is_zero};
