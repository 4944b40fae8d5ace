//! RFC 3526 finite-field DH packaged as a [`KeyAgreement`] scheme
//!
//! [`Ffdh2048`] fixes the group to the 2048-bit MODP group and exposes
//! length-checked, byte-oriented key types so callers never handle raw
//! group elements. Secrets are zeroized on drop and never printed.

use crate::agreement::dh_secret_agreement;
use crate::group::DhGroup;
use crate::key::{DhKey, ExponentDomain};
use core::fmt;
use ffcrypt_api::error::validate;
use ffcrypt_api::{KeyAgreement, NumberFormat, Result, Serialize, SerializeSecret};
use ffcrypt_common::security::secret::SecretVec;
use ffcrypt_params::dh::DH_2048_BYTE_LENGTH;
use rand::{CryptoRng, RngCore};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::{sync::Arc, vec::Vec};

#[cfg(feature = "std")]
use std::sync::Arc;

/// Key agreement over the RFC 3526 2048-bit MODP group
pub struct Ffdh2048;

/// A 2048-bit MODP public element, big-endian, fixed width
#[derive(Clone, PartialEq, Eq)]
pub struct FfdhPublicKey(Vec<u8>);

/// A private key for the 2048-bit MODP group
#[derive(Clone)]
pub struct FfdhPrivateKey(DhKey);

/// The derived shared value, big-endian, fixed width
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct FfdhSharedSecret(SecretVec);

impl FfdhSharedSecret {
    /// The raw shared value; feed it to a KDF, never use it directly
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_slice()
    }
}

impl AsRef<[u8]> for FfdhSharedSecret {
    fn as_ref(&self) -> &[u8] {
        self.0.as_slice()
    }
}

impl Serialize for FfdhPublicKey {
    fn from_bytes(bytes: &[u8]) -> Result<Self> {
        validate::output_size(bytes.len(), DH_2048_BYTE_LENGTH, "FfdhPublicKey::from_bytes")?;
        Ok(Self(bytes.to_vec()))
    }

    fn to_bytes(&self) -> Vec<u8> {
        self.0.clone()
    }
}

impl SerializeSecret for FfdhPrivateKey {
    fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let key = DhKey::from_private_exponent(
            Arc::new(DhGroup::modp_2048()),
            bytes,
            ExponentDomain::SubgroupOrder,
        )?;
        Ok(Self(key))
    }

    fn to_bytes_zeroizing(&self) -> Zeroizing<Vec<u8>> {
        self.0
            .private_exponent_be()
            .unwrap_or_else(|| Zeroizing::new(Vec::new()))
    }
}

impl SerializeSecret for FfdhSharedSecret {
    fn from_bytes(bytes: &[u8]) -> Result<Self> {
        validate::output_size(
            bytes.len(),
            DH_2048_BYTE_LENGTH,
            "FfdhSharedSecret::from_bytes",
        )?;
        Ok(Self(SecretVec::from_slice(bytes)))
    }

    fn to_bytes_zeroizing(&self) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(self.0.as_slice().to_vec())
    }
}

impl fmt::Debug for FfdhPublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FfdhPublicKey({} bytes)", self.0.len())
    }
}

impl fmt::Debug for FfdhPrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FfdhPrivateKey([REDACTED])")
    }
}

impl fmt::Debug for FfdhSharedSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FfdhSharedSecret([REDACTED])")
    }
}

impl KeyAgreement for Ffdh2048 {
    type PublicKey = FfdhPublicKey;
    type PrivateKey = FfdhPrivateKey;
    type SharedSecret = FfdhSharedSecret;
    type KeyPair = (FfdhPublicKey, FfdhPrivateKey);

    fn name() -> &'static str {
        "FFDH-2048"
    }

    fn keypair<R: CryptoRng + RngCore>(rng: &mut R) -> Result<Self::KeyPair> {
        let key = DhKey::generate(Arc::new(DhGroup::modp_2048()), rng)?;
        let public = FfdhPublicKey(key.public_key_bytes(NumberFormat::BigEndian)?);
        Ok((public, FfdhPrivateKey(key)))
    }

    fn public_key(keypair: &Self::KeyPair) -> Self::PublicKey {
        keypair.0.clone()
    }

    fn private_key(keypair: &Self::KeyPair) -> Self::PrivateKey {
        keypair.1.clone()
    }

    fn agree(
        private_key: &Self::PrivateKey,
        public_key: &Self::PublicKey,
    ) -> Result<Self::SharedSecret> {
        let peer = DhKey::from_public_bytes(private_key.0.group().clone(), &public_key.0)?;

        let mut secret = Vec::new();
        secret.resize(DH_2048_BYTE_LENGTH, 0u8);
        dh_secret_agreement(
            &private_key.0,
            &peer,
            NumberFormat::BigEndian,
            0,
            &mut secret,
        )?;
        Ok(FfdhSharedSecret(SecretVec::new(secret)))
    }
}
