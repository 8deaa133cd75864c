use hex_literal::hex;
use table_des::crypto::context::Context;
use table_des::crypto::error::CipherError;
use table_des::crypto::key_schedule::generate_key_schedule;
use table_des::crypto::utils::bits_to_bytes;

const KEY: [u8; 8] = hex!("13 34 57 79 9B BC DF F1");

#[test]
fn test_schedule_shape() {
    let ctx = Context::canonical();
    let schedule = generate_key_schedule(&KEY, &ctx, 16).unwrap();

    assert_eq!(schedule.len(), 16);
    for subkey in &schedule {
        assert_eq!(subkey.len(), 48);
    }
}

// FIPS worked example: K1 and K16 for key 0x133457799BBCDFF1.
#[test]
fn test_canonical_first_and_last_subkeys() {
    let ctx = Context::canonical();
    let schedule = generate_key_schedule(&KEY, &ctx, 16).unwrap();

    assert_eq!(bits_to_bytes(&schedule[0]), hex!("1B 02 EF FC 70 72"));
    assert_eq!(bits_to_bytes(&schedule[15]), hex!("CB 3D 8B 0E 17 F5"));
}

#[test]
fn test_reduced_round_count_is_a_prefix() {
    let ctx = Context::canonical();

    let full = generate_key_schedule(&KEY, &ctx, 16).unwrap();
    let short = generate_key_schedule(&KEY, &ctx, 4).unwrap();

    assert_eq!(short.len(), 4);
    assert_eq!(short[..], full[..4]);
}

#[test]
fn test_zero_rotation_yields_identical_subkeys() {
    let ctx = Context::default();
    let schedule = generate_key_schedule(&KEY, &ctx, 16).unwrap();

    assert_eq!(schedule.len(), 16);
    for subkey in &schedule[1..] {
        assert_eq!(*subkey, schedule[0]);
    }
}

#[test]
fn test_different_keys_differ_in_schedule() {
    let ctx = Context::canonical();

    let a = generate_key_schedule(&hex!("00 00 00 00 00 00 00 01"), &ctx, 16).unwrap();
    let b = generate_key_schedule(&hex!("80 00 00 00 00 00 00 00"), &ctx, 16).unwrap();

    assert_ne!(a, b);
}

#[test]
fn test_short_key_is_rejected() {
    let ctx = Context::canonical();

    let err = generate_key_schedule(b"1234567", &ctx, 16).unwrap_err();
    assert_eq!(err, CipherError::InvalidKeyLength(7));
}

#[test]
fn test_excessive_round_count_is_rejected() {
    let ctx = Context::canonical();

    let err = generate_key_schedule(&KEY, &ctx, 17).unwrap_err();
    assert_eq!(err, CipherError::InvalidRoundCount(17));
}
