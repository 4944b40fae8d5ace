//! Modular arithmetic over a fixed odd modulus
//!
//! Values of the residue ring are handled as fixed-width little-endian byte
//! images ("elements") whose length equals the byte length of the modulus.
//! Elements are modulus-specific: an element produced for one modulus is
//! meaningless for another. Callers provide the backing storage for
//! elements and a working region sized by the scratch queries, which keeps
//! every secret-dependent intermediate inside memory the caller controls
//! and wipes.
//!
//! The exponentiation routine runs a fixed square-and-multiply schedule
//! driven by an explicit bit count: both the square and the multiply are
//! computed on every iteration and the exponent bit only selects which
//! result is kept, so the operation sequence does not depend on the
//! exponent's value. The limb arithmetic underneath is `num-bigint`, which
//! is not hardened at the instruction level; deployments that need that
//! guarantee substitute their own [`ModArith`] implementation.

use crate::error::{Error, Result};
use ffcrypt_api::NumberFormat;
use ffcrypt_internal::constant_time::{ct_assign, ct_is_zero};
use num_bigint::{BigUint, RandBigInt};
use num_traits::One;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroizing;

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::vec::Vec;

#[cfg(test)]
mod tests;

/// Capability interface for modular arithmetic over one fixed modulus
///
/// The secret-agreement core depends on this trait rather than on a
/// concrete engine, so any compliant constant-time implementation can be
/// substituted.
pub trait ModArith {
    /// Byte length of one element's backing storage
    fn element_bytes(&self) -> usize;

    /// Working-region bytes required by [`ModArith::mod_exp`]
    fn modexp_scratch_bytes(&self) -> usize;

    /// Working-region bytes required by [`ModArith::get_value`]
    fn encode_scratch_bytes(&self) -> usize;

    /// Construct an element from a big-endian integer, reducing it into the
    /// ring. `element` must be exactly [`ModArith::element_bytes`] long.
    fn set_element(&self, value_be: &[u8], element: &mut [u8]) -> Result<()>;

    /// Compute `result := base ^ exponent mod P`.
    ///
    /// `exponent` is a fixed-width little-endian byte image; exactly
    /// `exponent_bits` low-order bits drive the iteration schedule, and
    /// bits at index `exponent_bits` and above are ignored. The iteration
    /// count therefore depends only on `exponent_bits`, never on the
    /// exponent's numeric value.
    fn mod_exp(
        &self,
        base: &[u8],
        exponent: &[u8],
        exponent_bits: u32,
        result: &mut [u8],
        scratch: &mut [u8],
    ) -> Result<()>;

    /// Test whether an element is the additive identity, in constant time
    fn is_zero(&self, element: &[u8]) -> bool;

    /// Extract an element's integer value into `out` in the requested
    /// format. `out` must be exactly [`ModArith::element_bytes`] long.
    fn get_value(
        &self,
        element: &[u8],
        format: NumberFormat,
        out: &mut [u8],
        scratch: &mut [u8],
    ) -> Result<()>;
}

/// An odd modulus together with its sizing metadata
///
/// Immutable after construction and shared by reference across all values
/// computed in its ring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Modulus {
    value: BigUint,
    bits: u32,
    bytes: usize,
}

impl Modulus {
    /// Construct a modulus from its big-endian byte representation.
    ///
    /// The modulus must be odd and at least 3; evenness would break the
    /// ring structure this engine assumes. Primality is not checked here.
    pub fn from_be_bytes(p_be: &[u8]) -> Result<Self> {
        let value = BigUint::from_bytes_be(p_be);
        if value < BigUint::from(3u8) {
            return Err(Error::InvalidModulus {
                reason: "modulus must be at least 3",
            });
        }
        if !value.bit(0) {
            return Err(Error::InvalidModulus {
                reason: "modulus must be odd",
            });
        }
        let bits = value.bits() as u32;
        let bytes = ((bits as usize) + 7) / 8;
        Ok(Self { value, bits, bytes })
    }

    /// Bit length of the modulus
    pub fn bit_len(&self) -> u32 {
        self.bits
    }

    /// Byte length of the modulus (and of every element in its ring)
    pub fn byte_len(&self) -> usize {
        self.bytes
    }

    /// Big-endian bytes of `P - 1`
    pub fn minus_one_be(&self) -> Vec<u8> {
        (&self.value - 1u8).to_bytes_be()
    }

    /// Whether a big-endian integer is strictly below the modulus
    pub fn contains_be(&self, value_be: &[u8]) -> bool {
        BigUint::from_bytes_be(value_be) < self.value
    }

    fn element_to_biguint(&self, element: &[u8]) -> BigUint {
        BigUint::from_bytes_le(element)
    }

    fn biguint_to_element(&self, value: &BigUint, element: &mut [u8]) {
        let le = value.to_bytes_le();
        debug_assert!(le.len() <= element.len());
        element[..le.len()].copy_from_slice(&le);
        for b in element[le.len()..].iter_mut() {
            *b = 0;
        }
    }

    fn check_element_len(&self, len: usize, context: &'static str) -> Result<()> {
        if len != self.bytes {
            return Err(Error::LengthMismatch {
                context,
                expected: self.bytes,
                actual: len,
            });
        }
        Ok(())
    }
}

impl ModArith for Modulus {
    fn element_bytes(&self) -> usize {
        self.bytes
    }

    fn modexp_scratch_bytes(&self) -> usize {
        // One staging element for the always-computed multiply
        self.bytes
    }

    fn encode_scratch_bytes(&self) -> usize {
        // One staging element for the format conversion
        self.bytes
    }

    fn set_element(&self, value_be: &[u8], element: &mut [u8]) -> Result<()> {
        self.check_element_len(element.len(), "Modulus::set_element")?;

        let reduced = BigUint::from_bytes_be(value_be) % &self.value;
        self.biguint_to_element(&reduced, element);
        Ok(())
    }

    fn mod_exp(
        &self,
        base: &[u8],
        exponent: &[u8],
        exponent_bits: u32,
        result: &mut [u8],
        scratch: &mut [u8],
    ) -> Result<()> {
        self.check_element_len(base.len(), "Modulus::mod_exp base")?;
        self.check_element_len(result.len(), "Modulus::mod_exp result")?;
        if (exponent_bits as usize) > exponent.len() * 8 {
            return Err(Error::ValueTooLarge {
                context: "Modulus::mod_exp exponent bits",
            });
        }
        let needed = self.modexp_scratch_bytes();
        if scratch.len() < needed {
            return Err(Error::ScratchTooSmall {
                context: "Modulus::mod_exp",
                needed,
                actual: scratch.len(),
            });
        }
        let staging = &mut scratch[..needed];

        let base_value = self.element_to_biguint(base);

        // acc starts at the multiplicative identity and lives in `result`
        self.biguint_to_element(&BigUint::one(), result);

        // Left-to-right ladder with a fixed schedule: every iteration
        // squares and multiplies; the exponent bit only selects which of
        // the two values survives.
        for i in (0..exponent_bits).rev() {
            let acc = self.element_to_biguint(result);
            let squared = &acc * &acc % &self.value;
            let multiplied = &squared * &base_value % &self.value;

            self.biguint_to_element(&squared, result);
            self.biguint_to_element(&multiplied, staging);

            let byte = exponent[(i / 8) as usize];
            let bit = (byte >> (i % 8)) & 1;
            ct_assign(result, staging, bit == 1);
        }

        Ok(())
    }

    fn is_zero(&self, element: &[u8]) -> bool {
        // Elements are canonical (fully reduced), so the additive identity
        // is exactly the all-zero image.
        ct_is_zero(element)
    }

    fn get_value(
        &self,
        element: &[u8],
        format: NumberFormat,
        out: &mut [u8],
        scratch: &mut [u8],
    ) -> Result<()> {
        self.check_element_len(element.len(), "Modulus::get_value element")?;
        self.check_element_len(out.len(), "Modulus::get_value out")?;
        let needed = self.encode_scratch_bytes();
        if scratch.len() < needed {
            return Err(Error::ScratchTooSmall {
                context: "Modulus::get_value",
                needed,
                actual: scratch.len(),
            });
        }
        let staging = &mut scratch[..needed];

        match format {
            NumberFormat::LittleEndian => {
                staging.copy_from_slice(element);
            }
            NumberFormat::BigEndian => {
                for (dst, src) in staging.iter_mut().zip(element.iter().rev()) {
                    *dst = *src;
                }
            }
        }
        out.copy_from_slice(staging);
        Ok(())
    }
}

/// Bit length of a big-endian integer
pub fn bit_length_be(bytes: &[u8]) -> u32 {
    BigUint::from_bytes_be(bytes).bits() as u32
}

/// Big-endian bytes of `(P - 1) / 2` for an odd `P`
///
/// For a safe prime this is the order of the prime-order subgroup.
pub fn safe_prime_order_be(p_be: &[u8]) -> Vec<u8> {
    let p = BigUint::from_bytes_be(p_be);
    ((p - 1u8) >> 1u8).to_bytes_be()
}

/// Uniform random integer in `[1, upper)` as a fixed-width little-endian
/// byte image of `width` bytes, zeroized on drop.
pub fn random_range_le<R: CryptoRng + RngCore>(
    upper_be: &[u8],
    width: usize,
    rng: &mut R,
) -> Result<Zeroizing<Vec<u8>>> {
    let upper = BigUint::from_bytes_be(upper_be);
    if upper <= BigUint::one() {
        return Err(Error::ValueTooLarge {
            context: "random_range_le upper bound",
        });
    }
    let sample = rng.gen_biguint_range(&BigUint::one(), &upper);

    // The staging copy holds the raw exponent, so it gets the same wipe
    // guarantee as the returned buffer
    let le = Zeroizing::new(sample.to_bytes_le());
    if le.len() > width {
        return Err(Error::ValueTooLarge {
            context: "random_range_le width",
        });
    }
    let mut out = Zeroizing::new(Vec::new());
    out.extend_from_slice(&le);
    out.resize(width, 0);
    Ok(out)
}
