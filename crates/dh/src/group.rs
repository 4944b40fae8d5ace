//! Discrete-log group descriptors
//!
//! A [`DhGroup`] holds the prime modulus P, the generator G, and the
//! optional subgroup order Q, together with precomputed sizing metadata.
//! Groups are immutable after construction and shared by reference across
//! every key that belongs to them.

use ffcrypt_algorithms::modular::{self, ModArith, Modulus};
use ffcrypt_api::Result;
use ffcrypt_params::dh as dh_params;

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::vec::Vec;

/// An immutable finite-field DH group: modulus, generator, optional order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DhGroup {
    modulus: Modulus,
    // Generator as a modulus-specific element image
    generator: Vec<u8>,
    // Subgroup order Q, big-endian, when known
    order_be: Option<Vec<u8>>,
    order_bits: u32,
}

impl DhGroup {
    /// Construct a group from big-endian parameter encodings.
    ///
    /// Checks well-formedness only: P odd and at least 3, G at least 2
    /// after reduction, Q (when given) nonzero and strictly less than P.
    /// Primality of P and the subgroup structure are the caller's
    /// responsibility; validating them on every construction would be far
    /// too expensive, and protocols obtain group parameters from trusted
    /// or authenticated sources.
    pub fn from_params(p_be: &[u8], g_be: &[u8], q_be: Option<&[u8]>) -> Result<Self> {
        let modulus = Modulus::from_be_bytes(p_be)?;

        let mut generator = Vec::new();
        generator.resize(modulus.byte_len(), 0u8);
        modulus.set_element(g_be, &mut generator)?;

        // G must be at least 2; 0 and 1 generate nothing
        let is_zero = generator.iter().all(|&b| b == 0);
        let is_one = generator[0] == 1 && generator[1..].iter().all(|&b| b == 0);
        if is_zero || is_one {
            return Err(ffcrypt_api::Error::InvalidArgument {
                context: "DhGroup::from_params generator",
                #[cfg(feature = "std")]
                message: "generator must be at least 2".into(),
            });
        }

        let (order_be, order_bits) = match q_be {
            Some(q) => {
                let bits = modular::bit_length_be(q);
                if bits == 0 || !modulus.contains_be(q) {
                    return Err(ffcrypt_api::Error::InvalidArgument {
                        context: "DhGroup::from_params order",
                        #[cfg(feature = "std")]
                        message: "order must be nonzero and less than the modulus".into(),
                    });
                }
                (Some(q.to_vec()), bits)
            }
            None => (None, 0),
        };

        Ok(Self {
            modulus,
            generator,
            order_be,
            order_bits,
        })
    }

    /// The RFC 3526 2048-bit MODP group (group 14), generator 2
    pub fn modp_2048() -> Self {
        Self::modp(&dh_params::DH_MODP_2048_PRIME)
    }

    /// The RFC 3526 3072-bit MODP group (group 15), generator 2
    pub fn modp_3072() -> Self {
        Self::modp(&dh_params::DH_MODP_3072_PRIME)
    }

    /// The RFC 3526 4096-bit MODP group (group 16), generator 2
    pub fn modp_4096() -> Self {
        Self::modp(&dh_params::DH_MODP_4096_PRIME)
    }

    fn modp(p_be: &[u8]) -> Self {
        // Safe primes: the generator 2 has order (P - 1) / 2
        let q = modular::safe_prime_order_be(p_be);
        Self::from_params(p_be, &[dh_params::DH_MODP_GENERATOR], Some(&q))
            .expect("RFC 3526 group parameters are well-formed")
    }

    /// The group's modulus and arithmetic engine
    pub fn modulus(&self) -> &Modulus {
        &self.modulus
    }

    /// The generator as a modulus-specific element image
    pub(crate) fn generator_element(&self) -> &[u8] {
        &self.generator
    }

    /// Bit length of the modulus P
    pub fn bit_len(&self) -> u32 {
        self.modulus.bit_len()
    }

    /// Serialized size of a public key (and of the agreed secret)
    pub fn public_key_bytes(&self) -> usize {
        self.modulus.byte_len()
    }

    /// Subgroup order Q in big-endian, when the group carries one
    pub fn order_be(&self) -> Option<&[u8]> {
        self.order_be.as_deref()
    }

    /// Bit length of Q, when the group carries one
    pub fn order_bits(&self) -> Option<u32> {
        self.order_be.as_ref().map(|_| self.order_bits)
    }

    /// Structural identity test.
    ///
    /// Two groups are the same when modulus, generator, and order all
    /// match. Callers holding shared references short-circuit through
    /// pointer identity first.
    pub fn is_same(&self, other: &DhGroup) -> bool {
        self.modulus == other.modulus
            && self.generator == other.generator
            && self.order_be == other.order_be
    }
}
