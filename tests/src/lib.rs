//! Shared helpers for the ffcrypt integration tests

use num_bigint::BigUint;

/// Reference modular exponentiation over big-endian byte strings.
///
/// Returns `base ^ exp mod p` left-padded to the byte length of `p`.
pub fn reference_mod_exp(base_be: &[u8], exp_be: &[u8], p_be: &[u8]) -> Vec<u8> {
    let base = BigUint::from_bytes_be(base_be);
    let exp = BigUint::from_bytes_be(exp_be);
    let p = BigUint::from_bytes_be(p_be);
    let width = (p.bits() as usize + 7) / 8;

    let result = base.modpow(&exp, &p).to_bytes_be();
    let mut out = vec![0u8; width];
    out[width - result.len()..].copy_from_slice(&result);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_mod_exp_small() {
        // 2^15 mod 23 = 16
        assert_eq!(reference_mod_exp(&[2], &[15], &[23]), vec![16]);
    }

    #[test]
    fn test_reference_mod_exp_pads_to_modulus_width() {
        // 3^2 mod 65521 = 9, two-byte width
        assert_eq!(
            reference_mod_exp(&[3], &[2], &65521u16.to_be_bytes()),
            vec![0, 9]
        );
    }
}
