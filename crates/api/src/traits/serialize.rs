//! Byte serialization contracts for keys and secrets

use crate::Result;
use zeroize::Zeroizing;

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::vec::Vec;

/// Serialization for public values.
///
/// `from_bytes` validates lengths and encodings; it never constructs a
/// value from malformed input.
pub trait Serialize: Sized {
    /// Parse a value from its byte encoding.
    fn from_bytes(bytes: &[u8]) -> Result<Self>;
    /// Encode the value as bytes.
    fn to_bytes(&self) -> Vec<u8>;
}

/// Serialization for secret values.
///
/// Exported bytes come back in a [`Zeroizing`] wrapper so the caller
/// cannot accidentally leave key material behind on the heap. Callers
/// importing with `from_bytes` are responsible for wiping their copy of
/// the input.
pub trait SerializeSecret: Sized {
    /// Parse a secret from its byte encoding.
    fn from_bytes(bytes: &[u8]) -> Result<Self>;
    /// Encode the secret as bytes that are wiped on drop.
    fn to_bytes_zeroizing(&self) -> Zeroizing<Vec<u8>>;
}
