//! Keys bound to a discrete-log group
//!
//! A [`DhKey`] references exactly one [`DhGroup`] and carries an optional
//! private exponent and/or an optional public element. The private
//! exponent records its reduction domain — whether it is reduced modulo
//! the subgroup order Q or modulo the full modulus P — and the declared
//! bit length that drives the fixed-iteration exponentiation schedule.
//! The declared length is a property of the key's *shape*, never of the
//! exponent's numeric value, so structurally identical keys always run
//! the same schedule.

use crate::agreement::scratch::Scratch;
use crate::group::DhGroup;
use core::fmt;
use ffcrypt_algorithms::modular::{self, ModArith};
use ffcrypt_api::{Error, NumberFormat, Result};
use ffcrypt_common::security::secret::SecretVec;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroizing;

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::{sync::Arc, vec::Vec};

#[cfg(feature = "std")]
use std::sync::Arc;

/// Reduction domain of a private exponent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExponentDomain {
    /// Exponent is reduced modulo the subgroup order Q; the schedule runs
    /// over the group's declared Q bit length
    SubgroupOrder,
    /// Exponent is reduced modulo the full modulus P; the schedule runs
    /// over P's full bit length
    FullModulus,
}

#[derive(Clone)]
pub(crate) struct PrivateExponent {
    // Little-endian, fixed element width
    bytes: SecretVec,
    domain: ExponentDomain,
    declared_bits: u32,
}

impl PrivateExponent {
    pub(crate) fn as_le_bytes(&self) -> &[u8] {
        self.bytes.as_slice()
    }

    pub(crate) fn domain(&self) -> ExponentDomain {
        self.domain
    }

    pub(crate) fn declared_bits(&self) -> u32 {
        self.declared_bits
    }
}

/// A key bound to one [`DhGroup`]
///
/// Carries an optional private exponent and/or public element. Keys are
/// read-only once constructed, so concurrent agreement calls over the
/// same key are safe.
#[derive(Clone)]
pub struct DhKey {
    group: Arc<DhGroup>,
    private: Option<PrivateExponent>,
    public: Option<Vec<u8>>,
}

impl DhKey {
    /// Import a public-only key from the big-endian value of the element
    pub fn from_public_bytes(group: Arc<DhGroup>, value_be: &[u8]) -> Result<Self> {
        let modulus = group.modulus();
        let mut element = Vec::new();
        element.resize(modulus.element_bytes(), 0u8);
        modulus.set_element(value_be, &mut element)?;

        Ok(Self {
            group,
            private: None,
            public: Some(element),
        })
    }

    /// Import a private key from its big-endian exponent.
    ///
    /// `domain` declares how the exponent was reduced. For
    /// [`ExponentDomain::SubgroupOrder`] the group must carry an order Q,
    /// and the exponent must fit Q's bit length; for
    /// [`ExponentDomain::FullModulus`] it must fit P's bit length. The
    /// matching public element `G^x mod P` is computed as part of the
    /// import.
    pub fn from_private_exponent(
        group: Arc<DhGroup>,
        exponent_be: &[u8],
        domain: ExponentDomain,
    ) -> Result<Self> {
        let declared_bits = match domain {
            ExponentDomain::SubgroupOrder => {
                group.order_bits().ok_or(Error::InvalidArgument {
                    context: "DhKey::from_private_exponent",
                    #[cfg(feature = "std")]
                    message: "group carries no subgroup order".into(),
                })?
            }
            ExponentDomain::FullModulus => group.bit_len(),
        };

        let actual_bits = modular::bit_length_be(exponent_be);
        if actual_bits == 0 || actual_bits > declared_bits {
            return Err(Error::InvalidArgument {
                context: "DhKey::from_private_exponent",
                #[cfg(feature = "std")]
                message: "exponent does not fit its declared domain".into(),
            });
        }

        let width = group.modulus().element_bytes();
        let mut le = Zeroizing::new(Vec::new());
        le.extend(exponent_be.iter().rev().copied());
        le.resize(width, 0);

        Self::from_private_le(group, SecretVec::from_slice(le.as_slice()), domain, declared_bits)
    }

    /// Generate a fresh keypair for the group.
    ///
    /// With a known order Q the exponent is uniform in [1, Q-1] and the
    /// key is subgroup-order-reduced; otherwise it is uniform in [1, P-2]
    /// and full-modulus-reduced.
    pub fn generate<R: CryptoRng + RngCore>(group: Arc<DhGroup>, rng: &mut R) -> Result<Self> {
        let width = group.modulus().element_bytes();

        let (le, domain, declared_bits) = match group.order_be() {
            Some(q_be) => {
                let le = modular::random_range_le(q_be, width, rng)?;
                let bits = group
                    .order_bits()
                    .ok_or(Error::Primitive { context: "DhKey::generate" })?;
                (le, ExponentDomain::SubgroupOrder, bits)
            }
            None => {
                // Upper bound P - 1 keeps the exponent in [1, P-2]
                let p_minus_1 = group.modulus().minus_one_be();
                let le = modular::random_range_le(&p_minus_1, width, rng)?;
                (le, ExponentDomain::FullModulus, group.bit_len())
            }
        };

        Self::from_private_le(group, SecretVec::from_slice(le.as_slice()), domain, declared_bits)
    }

    // Shared tail of the private-key constructors: stores the exponent and
    // computes the matching public element
    fn from_private_le(
        group: Arc<DhGroup>,
        bytes: SecretVec,
        domain: ExponentDomain,
        declared_bits: u32,
    ) -> Result<Self> {
        let modulus = group.modulus();
        let element_len = modulus.element_bytes();

        let mut public = Vec::new();
        public.resize(element_len, 0u8);

        let mut scratch = Scratch::allocate(modulus.modexp_scratch_bytes())?;
        modulus.mod_exp(
            group.generator_element(),
            bytes.as_slice(),
            declared_bits,
            &mut public,
            scratch.as_mut_slice(),
        )?;

        Ok(Self {
            group,
            private: Some(PrivateExponent {
                bytes,
                domain,
                declared_bits,
            }),
            public: Some(public),
        })
    }

    /// The group this key belongs to
    pub fn group(&self) -> &Arc<DhGroup> {
        &self.group
    }

    /// Whether a private exponent is present
    pub fn has_private_key(&self) -> bool {
        self.private.is_some()
    }

    /// Whether a public element is present
    pub fn has_public_key(&self) -> bool {
        self.public.is_some()
    }

    /// Export the public element in the requested format
    pub fn public_key_bytes(&self, format: NumberFormat) -> Result<Vec<u8>> {
        let element = self.public.as_deref().ok_or(Error::InvalidArgument {
            context: "DhKey::public_key_bytes",
            #[cfg(feature = "std")]
            message: "key has no public element".into(),
        })?;

        let modulus = self.group.modulus();
        let mut out = Vec::new();
        out.resize(modulus.element_bytes(), 0u8);
        let mut scratch = Scratch::allocate(modulus.encode_scratch_bytes())?;
        modulus.get_value(element, format, &mut out, scratch.as_mut_slice())?;
        Ok(out)
    }

    /// Export the private exponent in big-endian, zeroized on drop
    pub fn private_exponent_be(&self) -> Option<Zeroizing<Vec<u8>>> {
        self.private.as_ref().map(|exp| {
            let mut be = Zeroizing::new(Vec::new());
            be.extend(exp.bytes.as_slice().iter().rev().copied());
            // Strip the fixed-width padding
            let first = be.iter().position(|&b| b != 0).unwrap_or(be.len() - 1);
            Zeroizing::new(be[first..].to_vec())
        })
    }

    pub(crate) fn private_exponent(&self) -> Option<&PrivateExponent> {
        self.private.as_ref()
    }

    pub(crate) fn public_element(&self) -> Option<&[u8]> {
        self.public.as_deref()
    }
}

impl fmt::Debug for DhKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DhKey")
            .field("group_bits", &self.group.bit_len())
            .field("has_private", &self.private.is_some())
            .field("has_public", &self.public.is_some())
            .finish()
    }
}
