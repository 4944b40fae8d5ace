//! Two-party key exchange over the RFC 3526 2048-bit MODP group

use std::sync::Arc;

use ffcrypt_api::NumberFormat;
use ffcrypt_dh::{dh_secret_agreement, DhGroup, DhKey};
use rand::rngs::OsRng;

fn main() -> ffcrypt_api::Result<()> {
    let group = Arc::new(DhGroup::modp_2048());

    let alice = DhKey::generate(group.clone(), &mut OsRng)?;
    let bob = DhKey::generate(group.clone(), &mut OsRng)?;

    let mut alice_view = vec![0u8; group.public_key_bytes()];
    let mut bob_view = vec![0u8; group.public_key_bytes()];
    dh_secret_agreement(&alice, &bob, NumberFormat::BigEndian, 0, &mut alice_view)?;
    dh_secret_agreement(&bob, &alice, NumberFormat::BigEndian, 0, &mut bob_view)?;

    assert_eq!(alice_view, bob_view);
    println!("both parties derived the same {}-byte secret", alice_view.len());
    Ok(())
}
