//! End-to-end tests for finite-field Diffie-Hellman

use std::sync::Arc;

use ffcrypt_api::{Error, KeyAgreement, NumberFormat, Serialize, SerializeSecret};
use ffcrypt_dh::{
    dh_secret_agreement, DhGroup, DhKey, ExponentDomain, Ffdh2048, FfdhPrivateKey, FfdhPublicKey,
};
use ffcrypt_params::dh::{DH_2048_BYTE_LENGTH, DH_MODP_2048_PRIME, DH_MODP_GENERATOR};
use ffcrypt_tests::reference_mod_exp;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

#[test]
fn modp_2048_agreement_end_to_end() {
    let group = Arc::new(DhGroup::modp_2048());
    let mut rng = ChaCha20Rng::seed_from_u64(0xD1FF);

    let alice = DhKey::generate(group.clone(), &mut rng).unwrap();
    let bob = DhKey::generate(group, &mut rng).unwrap();

    let mut ab = vec![0u8; DH_2048_BYTE_LENGTH];
    let mut ba = vec![0u8; DH_2048_BYTE_LENGTH];
    dh_secret_agreement(&alice, &bob, NumberFormat::BigEndian, 0, &mut ab).unwrap();
    dh_secret_agreement(&bob, &alice, NumberFormat::BigEndian, 0, &mut ba).unwrap();

    assert_eq!(ab, ba);
    assert!(ab.iter().any(|&b| b != 0));
}

#[test]
fn modp_2048_matches_reference_arithmetic() {
    let group = Arc::new(DhGroup::modp_2048());
    let mut rng = ChaCha20Rng::seed_from_u64(0xBEEF);

    let alice = DhKey::generate(group.clone(), &mut rng).unwrap();
    let bob = DhKey::generate(group, &mut rng).unwrap();

    let mut agreed = vec![0u8; DH_2048_BYTE_LENGTH];
    dh_secret_agreement(&alice, &bob, NumberFormat::BigEndian, 0, &mut agreed).unwrap();

    let exponent = alice.private_exponent_be().unwrap();
    let peer = bob.public_key_bytes(NumberFormat::BigEndian).unwrap();
    let expected = reference_mod_exp(&peer, &exponent, &DH_MODP_2048_PRIME);
    assert_eq!(agreed, expected);
}

#[test]
fn modp_2048_public_key_matches_reference() {
    let group = Arc::new(DhGroup::modp_2048());
    let mut rng = ChaCha20Rng::seed_from_u64(0xCAFE);

    let key = DhKey::generate(group, &mut rng).unwrap();
    let exponent = key.private_exponent_be().unwrap();
    let public = key.public_key_bytes(NumberFormat::BigEndian).unwrap();

    let expected = reference_mod_exp(&[DH_MODP_GENERATOR], &exponent, &DH_MODP_2048_PRIME);
    assert_eq!(public, expected);
}

#[test]
fn repeated_agreement_is_byte_identical() {
    let group = Arc::new(DhGroup::modp_2048());
    let mut rng = ChaCha20Rng::seed_from_u64(1);

    let alice = DhKey::generate(group.clone(), &mut rng).unwrap();
    let bob = DhKey::generate(group, &mut rng).unwrap();

    let mut first = vec![0u8; DH_2048_BYTE_LENGTH];
    let mut second = vec![0u8; DH_2048_BYTE_LENGTH];
    dh_secret_agreement(&alice, &bob, NumberFormat::LittleEndian, 0, &mut first).unwrap();
    dh_secret_agreement(&alice, &bob, NumberFormat::LittleEndian, 0, &mut second).unwrap();
    assert_eq!(first, second);
}

#[test]
fn little_endian_output_is_reversed_big_endian() {
    let group = Arc::new(DhGroup::modp_2048());
    let mut rng = ChaCha20Rng::seed_from_u64(2);

    let alice = DhKey::generate(group.clone(), &mut rng).unwrap();
    let bob = DhKey::generate(group, &mut rng).unwrap();

    let mut be = vec![0u8; DH_2048_BYTE_LENGTH];
    let mut le = vec![0u8; DH_2048_BYTE_LENGTH];
    dh_secret_agreement(&alice, &bob, NumberFormat::BigEndian, 0, &mut be).unwrap();
    dh_secret_agreement(&alice, &bob, NumberFormat::LittleEndian, 0, &mut le).unwrap();

    le.reverse();
    assert_eq!(be, le);
}

#[test]
fn wrong_output_length_is_rejected_up_front() {
    let group = Arc::new(DhGroup::modp_2048());
    let mut rng = ChaCha20Rng::seed_from_u64(3);

    let alice = DhKey::generate(group.clone(), &mut rng).unwrap();
    let bob = DhKey::generate(group, &mut rng).unwrap();

    let mut short = vec![0xAAu8; DH_2048_BYTE_LENGTH - 1];
    let err =
        dh_secret_agreement(&alice, &bob, NumberFormat::BigEndian, 0, &mut short).unwrap_err();
    assert!(matches!(
        err,
        Error::WrongOutputSize {
            expected: DH_2048_BYTE_LENGTH,
            actual: 255,
            ..
        }
    ));
    assert!(short.iter().all(|&b| b == 0xAA));
}

#[test]
fn keys_from_different_groups_do_not_agree() {
    let mut rng = ChaCha20Rng::seed_from_u64(4);
    let alice = DhKey::generate(Arc::new(DhGroup::modp_2048()), &mut rng).unwrap();
    let bob = DhKey::generate(Arc::new(DhGroup::modp_3072()), &mut rng).unwrap();

    let mut out = vec![0u8; DH_2048_BYTE_LENGTH];
    let err = dh_secret_agreement(&alice, &bob, NumberFormat::BigEndian, 0, &mut out).unwrap_err();
    assert!(matches!(err, Error::InvalidArgument { .. }));
}

#[test]
fn imported_private_key_reproduces_the_agreement() {
    let group = Arc::new(DhGroup::modp_2048());
    let mut rng = ChaCha20Rng::seed_from_u64(5);

    let alice = DhKey::generate(group.clone(), &mut rng).unwrap();
    let bob = DhKey::generate(group.clone(), &mut rng).unwrap();

    let exported = alice.private_exponent_be().unwrap();
    let restored =
        DhKey::from_private_exponent(group, &exported, ExponentDomain::SubgroupOrder).unwrap();

    let mut original = vec![0u8; DH_2048_BYTE_LENGTH];
    let mut replayed = vec![0u8; DH_2048_BYTE_LENGTH];
    dh_secret_agreement(&alice, &bob, NumberFormat::BigEndian, 0, &mut original).unwrap();
    dh_secret_agreement(&restored, &bob, NumberFormat::BigEndian, 0, &mut replayed).unwrap();
    assert_eq!(original, replayed);
}

#[test]
fn public_only_peer_key_is_sufficient() {
    let group = Arc::new(DhGroup::modp_2048());
    let mut rng = ChaCha20Rng::seed_from_u64(6);

    let alice = DhKey::generate(group.clone(), &mut rng).unwrap();
    let bob = DhKey::generate(group.clone(), &mut rng).unwrap();

    let bob_public = bob.public_key_bytes(NumberFormat::BigEndian).unwrap();
    let bob_imported = DhKey::from_public_bytes(group, &bob_public).unwrap();

    let mut via_full = vec![0u8; DH_2048_BYTE_LENGTH];
    let mut via_public = vec![0u8; DH_2048_BYTE_LENGTH];
    dh_secret_agreement(&alice, &bob, NumberFormat::BigEndian, 0, &mut via_full).unwrap();
    dh_secret_agreement(&alice, &bob_imported, NumberFormat::BigEndian, 0, &mut via_public)
        .unwrap();
    assert_eq!(via_full, via_public);
}

#[test]
fn modp_2048_prime_head_matches_rfc_3526() {
    // First 16 octets of the RFC 3526 group 14 prime
    let head = hex::decode("ffffffffffffffffc90fdaa22168c234").unwrap();
    assert_eq!(&DH_MODP_2048_PRIME[..16], &head[..]);
    // The prime ends ...FFFFFFFF FFFFFFFF
    assert_eq!(&DH_MODP_2048_PRIME[DH_2048_BYTE_LENGTH - 8..], &[0xFF; 8]);
}

#[test]
fn modp_group_metadata() {
    let group = DhGroup::modp_2048();
    assert_eq!(group.bit_len(), 2048);
    assert_eq!(group.public_key_bytes(), DH_2048_BYTE_LENGTH);
    assert_eq!(group.order_bits(), Some(2047));

    assert_eq!(DhGroup::modp_3072().bit_len(), 3072);
    assert_eq!(DhGroup::modp_4096().bit_len(), 4096);
}

#[test]
fn ffdh_scheme_roundtrip() {
    let mut rng = ChaCha20Rng::seed_from_u64(7);
    let (alice_pub, alice_priv) = Ffdh2048::keypair(&mut rng).unwrap();
    let (bob_pub, bob_priv) = Ffdh2048::keypair(&mut rng).unwrap();

    // Serialize both public keys across a simulated wire
    let alice_wire = FfdhPublicKey::from_bytes(&alice_pub.to_bytes()).unwrap();
    let bob_wire = FfdhPublicKey::from_bytes(&bob_pub.to_bytes()).unwrap();

    let ab = Ffdh2048::agree(&alice_priv, &bob_wire).unwrap();
    let ba = Ffdh2048::agree(&bob_priv, &alice_wire).unwrap();
    assert_eq!(ab.as_bytes(), ba.as_bytes());
}

#[test]
fn ffdh_private_key_import_export() {
    let mut rng = ChaCha20Rng::seed_from_u64(8);
    let (_, private) = Ffdh2048::keypair(&mut rng).unwrap();

    let exported = private.to_bytes_zeroizing();
    let restored = FfdhPrivateKey::from_bytes(&exported).unwrap();
    assert_eq!(&restored.to_bytes_zeroizing()[..], &exported[..]);
}

mod properties {
    use super::*;
    use proptest::prelude::*;

    fn toy_group() -> Arc<DhGroup> {
        // P = 227 (safe prime, Q = 113), G = 4 generates the order-113 subgroup
        Arc::new(DhGroup::from_params(&[227], &[4], Some(&[113])).unwrap())
    }

    proptest! {
        #[test]
        fn agreement_commutes_for_all_exponents(a in 1u8..113, b in 1u8..113) {
            let group = toy_group();
            let alice =
                DhKey::from_private_exponent(group.clone(), &[a], ExponentDomain::SubgroupOrder)
                    .unwrap();
            let bob =
                DhKey::from_private_exponent(group, &[b], ExponentDomain::SubgroupOrder).unwrap();

            let mut ab = [0u8; 1];
            let mut ba = [0u8; 1];
            dh_secret_agreement(&alice, &bob, NumberFormat::BigEndian, 0, &mut ab).unwrap();
            dh_secret_agreement(&bob, &alice, NumberFormat::BigEndian, 0, &mut ba).unwrap();
            prop_assert_eq!(ab, ba);
        }

        #[test]
        fn agreement_matches_reference(a in 1u8..113, b in 1u8..113) {
            let group = toy_group();
            let alice =
                DhKey::from_private_exponent(group.clone(), &[a], ExponentDomain::SubgroupOrder)
                    .unwrap();
            let bob =
                DhKey::from_private_exponent(group, &[b], ExponentDomain::SubgroupOrder).unwrap();

            let mut agreed = [0u8; 1];
            dh_secret_agreement(&alice, &bob, NumberFormat::BigEndian, 0, &mut agreed).unwrap();

            let peer = bob.public_key_bytes(NumberFormat::BigEndian).unwrap();
            let expected = reference_mod_exp(&peer, &[a], &[227]);
            prop_assert_eq!(&agreed[..], &expected[..]);
        }
    }
}
