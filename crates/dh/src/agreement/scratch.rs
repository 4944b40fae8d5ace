//! Transient working memory for one agreement call
//!
//! The agreement operation performs exactly one allocation, sized from the
//! engine's scratch queries, and splits it into the result-element region
//! and the arithmetic working region. The buffer is owned exclusively by
//! one invocation and its full extent is overwritten with zeros before
//! release on every exit path, including error paths — that is what keeps
//! the exponentiation's intermediate state and the raw secret out of
//! freed memory.

use ffcrypt_api::{Error, Result};
use ffcrypt_common::security::secret::SecretVec;

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::vec::Vec;

/// A single zeroize-on-drop scratch buffer
#[derive(Debug)]
pub(crate) struct Scratch {
    buf: SecretVec,
}

impl Scratch {
    /// Allocate `len` zeroed bytes, reporting allocator failure as a
    /// status instead of aborting
    pub(crate) fn allocate(len: usize) -> Result<Self> {
        let mut data = Vec::new();
        data.try_reserve_exact(len)
            .map_err(|_| Error::MemoryAllocationFailure {
                context: "dh agreement scratch",
            })?;
        data.resize(len, 0u8);
        Ok(Self {
            buf: SecretVec::new(data),
        })
    }

    pub(crate) fn len(&self) -> usize {
        self.buf.len()
    }

    /// Split into the element region and the remaining working region
    pub(crate) fn split_mut(&mut self, element_len: usize) -> (&mut [u8], &mut [u8]) {
        self.buf.as_mut_slice().split_at_mut(element_len)
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [u8] {
        self.buf.as_mut_slice()
    }
}
