//! The Diffie-Hellman secret-agreement operation
//!
//! Given a private-bearing key and a peer key in the same group, derives
//! the shared value `Y^x mod P` and writes it to the caller's buffer as a
//! fixed-width byte string in the requested format. The operation is
//! read-only with respect to both keys and allocates exactly one scratch
//! buffer, which is wiped on every exit path.
//!
//! The peer's public element is not screened beyond membership in the
//! ring and a zero check on the derived value. In particular Y = 0,
//! Y = 1, and Y = P - 1 are accepted as inputs; only a derived value of
//! zero is rejected, as [`Error::InvalidBlob`]. Callers that require full
//! public-key validation per SP 800-56A perform it before importing the
//! peer key.

pub(crate) mod scratch;

use crate::key::{DhKey, ExponentDomain};
use crate::agreement::scratch::Scratch;
use core::cmp;
use ffcrypt_algorithms::modular::ModArith;
use ffcrypt_api::error::validate;
use ffcrypt_api::{Error, NumberFormat, Result};

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::sync::Arc;

#[cfg(feature = "std")]
use std::sync::Arc;

/// Derive the shared secret `Y^x mod P` into `agreed_secret`.
///
/// `private` must carry a private exponent and `public` a public element,
/// and both must belong to the same group. `agreed_secret` must be exactly
/// the group's element width ([`crate::DhGroup::public_key_bytes`]);
/// shorter or longer buffers are rejected before any computation.
/// `flags` is reserved and must be zero.
///
/// The exponentiation schedule is driven by the private key's declared
/// exponent bit length, so two structurally identical keys run the same
/// number of iterations regardless of their exponent values. The derived
/// value is checked against zero before encoding; a zero result means the
/// peer element was degenerate and reports [`Error::InvalidBlob`] without
/// touching the output buffer.
pub fn dh_secret_agreement(
    private: &DhKey,
    public: &DhKey,
    format: NumberFormat,
    flags: u32,
    agreed_secret: &mut [u8],
) -> Result<()> {
    validate::parameter(flags == 0, "dh_secret_agreement flags")?;

    let exponent = private.private_exponent().ok_or(Error::InvalidArgument {
        context: "dh_secret_agreement",
        #[cfg(feature = "std")]
        message: "private-side key carries no private exponent".into(),
    })?;

    // Pointer identity is the fast path; structurally equal groups built
    // from the same parameters are also accepted
    let same_group = Arc::ptr_eq(private.group(), public.group())
        || private.group().is_same(public.group());
    validate::parameter(same_group, "dh_secret_agreement group")?;

    let peer = public.public_element().ok_or(Error::InvalidArgument {
        context: "dh_secret_agreement",
        #[cfg(feature = "std")]
        message: "peer key carries no public element".into(),
    })?;

    let modulus = private.group().modulus();
    validate::output_size(
        agreed_secret.len(),
        modulus.element_bytes(),
        "dh_secret_agreement output",
    )?;

    // One allocation covers the result element plus the larger of the two
    // working regions; exponentiation and encoding reuse the same tail
    let element_len = modulus.element_bytes();
    let work_len = cmp::max(modulus.modexp_scratch_bytes(), modulus.encode_scratch_bytes());
    let mut scratch = Scratch::allocate(element_len + work_len)?;
    let (result, work) = scratch.split_mut(element_len);

    let exponent_bits = match exponent.domain() {
        ExponentDomain::SubgroupOrder => exponent.declared_bits(),
        ExponentDomain::FullModulus => private.group().bit_len(),
    };

    modulus.mod_exp(peer, exponent.as_le_bytes(), exponent_bits, result, work)?;

    // The zero test runs on the derived value, not on the peer input
    if modulus.is_zero(result) {
        return Err(Error::InvalidBlob {
            context: "dh_secret_agreement",
            #[cfg(feature = "std")]
            message: "derived secret is zero".into(),
        });
    }

    modulus.get_value(result, format, agreed_secret, work)?;
    Ok(())
}
