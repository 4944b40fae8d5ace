use super::*;
use ffcrypt_api::NumberFormat;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

// Largest 64-bit prime
const P64: u64 = 0xFFFF_FFFF_FFFF_FFC5;

fn modulus_64() -> Modulus {
    Modulus::from_be_bytes(&P64.to_be_bytes()).unwrap()
}

fn element_from_u64(m: &Modulus, v: u64) -> Vec<u8> {
    let mut e = vec![0u8; m.element_bytes()];
    m.set_element(&v.to_be_bytes(), &mut e).unwrap();
    e
}

#[test]
fn test_modulus_construction() {
    let m = modulus_64();
    assert_eq!(m.bit_len(), 64);
    assert_eq!(m.byte_len(), 8);
    assert_eq!(m.element_bytes(), 8);
}

#[test]
fn test_modulus_rejects_even() {
    let err = Modulus::from_be_bytes(&[0x10]).unwrap_err();
    assert!(matches!(err, Error::InvalidModulus { .. }));
}

#[test]
fn test_modulus_rejects_tiny() {
    assert!(Modulus::from_be_bytes(&[]).is_err());
    assert!(Modulus::from_be_bytes(&[0x01]).is_err());
    // 3 is the smallest accepted modulus
    assert!(Modulus::from_be_bytes(&[0x03]).is_ok());
}

#[test]
fn test_set_element_reduces() {
    let m = Modulus::from_be_bytes(&[23]).unwrap();
    let mut e = vec![0u8; 1];
    // 100 mod 23 = 8
    m.set_element(&[100], &mut e).unwrap();
    assert_eq!(e, [8]);
}

#[test]
fn test_set_element_wrong_width() {
    let m = modulus_64();
    let mut e = vec![0u8; 4];
    let err = m.set_element(&[1], &mut e).unwrap_err();
    assert!(matches!(err, Error::LengthMismatch { .. }));
}

#[test]
fn test_mod_exp_small_cases() {
    let m = Modulus::from_be_bytes(&[23]).unwrap();
    let mut scratch = vec![0u8; m.modexp_scratch_bytes()];
    let mut result = vec![0u8; 1];

    // 2^11 mod 23 = 1 (2 generates the order-11 subgroup)
    let base = element_from_u64(&m, 2);
    let exp = [11u8];
    m.mod_exp(&base, &exp, 4, &mut result, &mut scratch).unwrap();
    assert_eq!(result, [1]);

    // 5^3 mod 23 = 10
    let base = element_from_u64(&m, 5);
    let exp = [3u8];
    m.mod_exp(&base, &exp, 2, &mut result, &mut scratch).unwrap();
    assert_eq!(result, [10]);
}

#[test]
fn test_mod_exp_zero_bits_yields_one() {
    let m = modulus_64();
    let mut scratch = vec![0u8; m.modexp_scratch_bytes()];
    let mut result = vec![0u8; 8];

    let base = element_from_u64(&m, 123_456_789);
    let exp = [0u8; 8];
    m.mod_exp(&base, &exp, 0, &mut result, &mut scratch).unwrap();

    let mut one = vec![0u8; 8];
    m.set_element(&1u64.to_be_bytes(), &mut one).unwrap();
    assert_eq!(result, one);
}

#[test]
fn test_mod_exp_ignores_bits_above_declared_count() {
    let m = modulus_64();
    let mut scratch = vec![0u8; m.modexp_scratch_bytes()];

    let base = element_from_u64(&m, 7);

    // exponent image carries a high bit beyond the declared 8 bits
    let mut exp = vec![0u8; 8];
    exp[0] = 0x2A; // 42
    exp[4] = 0xFF;

    let mut with_noise = vec![0u8; 8];
    m.mod_exp(&base, &exp, 8, &mut with_noise, &mut scratch)
        .unwrap();

    let clean = [0x2Au8];
    let mut without_noise = vec![0u8; 8];
    m.mod_exp(&base, &clean, 8, &mut without_noise, &mut scratch)
        .unwrap();

    assert_eq!(with_noise, without_noise);
}

#[test]
fn test_mod_exp_matches_reference() {
    let m = modulus_64();
    let mut rng = ChaCha20Rng::seed_from_u64(7);
    let p = BigUint::from(P64);

    let mut scratch = vec![0u8; m.modexp_scratch_bytes()];
    let mut result = vec![0u8; 8];

    for _ in 0..16 {
        let base = rng.gen_biguint_below(&p);
        let exp = rng.gen_biguint(64);

        let mut base_elem = vec![0u8; 8];
        m.set_element(&base.to_bytes_be(), &mut base_elem).unwrap();

        let mut exp_le = exp.to_bytes_le();
        exp_le.resize(8, 0);

        m.mod_exp(&base_elem, &exp_le, 64, &mut result, &mut scratch)
            .unwrap();

        let expected = base.modpow(&exp, &p);
        assert_eq!(BigUint::from_bytes_le(&result), expected);
    }
}

#[test]
fn test_mod_exp_scratch_too_small() {
    let m = modulus_64();
    let base = element_from_u64(&m, 2);
    let exp = [1u8; 8];
    let mut result = vec![0u8; 8];
    let mut scratch = vec![0u8; m.modexp_scratch_bytes() - 1];

    let err = m
        .mod_exp(&base, &exp, 64, &mut result, &mut scratch)
        .unwrap_err();
    assert!(matches!(err, Error::ScratchTooSmall { .. }));
}

#[test]
fn test_is_zero() {
    let m = modulus_64();
    assert!(m.is_zero(&[0u8; 8]));

    let e = element_from_u64(&m, 1);
    assert!(!m.is_zero(&e));
}

#[test]
fn test_get_value_formats() {
    let m = modulus_64();
    let e = element_from_u64(&m, 0x0102_0304_0506_0708);
    let mut scratch = vec![0u8; m.encode_scratch_bytes()];

    let mut out = vec![0u8; 8];
    m.get_value(&e, NumberFormat::BigEndian, &mut out, &mut scratch)
        .unwrap();
    assert_eq!(out, [1, 2, 3, 4, 5, 6, 7, 8]);

    m.get_value(&e, NumberFormat::LittleEndian, &mut out, &mut scratch)
        .unwrap();
    assert_eq!(out, [8, 7, 6, 5, 4, 3, 2, 1]);
}

#[test]
fn test_bit_length_be() {
    assert_eq!(bit_length_be(&[0]), 0);
    assert_eq!(bit_length_be(&[1]), 1);
    assert_eq!(bit_length_be(&[0x80, 0x00]), 16);
    assert_eq!(bit_length_be(&P64.to_be_bytes()), 64);
}

#[test]
fn test_safe_prime_order() {
    // P = 23 -> Q = 11
    assert_eq!(safe_prime_order_be(&[23]), [11]);
    // P = 2027 -> Q = 1013, multi-byte halving
    assert_eq!(safe_prime_order_be(&[0x07, 0xEB]), [0x03, 0xF5]);
}

#[test]
fn test_contains_be() {
    let modulus = Modulus::from_be_bytes(&[23]).unwrap();
    assert!(modulus.contains_be(&[22]));
    assert!(modulus.contains_be(&[0, 22]));
    assert!(!modulus.contains_be(&[23]));
    assert!(!modulus.contains_be(&[29]));
}

#[test]
fn test_random_range_le() {
    let mut rng = ChaCha20Rng::seed_from_u64(3);
    let upper = [23u8];
    for _ in 0..64 {
        let sample = random_range_le(&upper, 4, &mut rng).unwrap();
        assert_eq!(sample.len(), 4);
        let v = BigUint::from_bytes_le(&sample);
        assert!(v >= BigUint::one());
        assert!(v < BigUint::from(23u8));
    }
}

#[test]
fn test_random_range_le_rejects_trivial_bound() {
    let mut rng = ChaCha20Rng::seed_from_u64(3);
    assert!(random_range_le(&[1], 4, &mut rng).is_err());
}
