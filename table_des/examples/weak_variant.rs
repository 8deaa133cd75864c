use std::sync::Arc;

use table_des::crypto::cipher_traits::CipherAlgorithm;
use table_des::crypto::context::Context;
use table_des::crypto::des::Des;

// Context::default() leaves the key-rotation table at zero, so every round
// consumes the same subkey. The variant is cryptographically weak but still
// a well-formed, invertible cipher.
fn main() {
    let weak = Des::new(Arc::new(Context::default()), b"weakkey!").unwrap();
    let strong = Des::new(Arc::new(Context::canonical()), b"weakkey!").unwrap();

    let block = b"8 bytes!";

    let weak_ct = weak.encrypt(block).unwrap();
    let strong_ct = strong.encrypt(block).unwrap();

    assert_ne!(weak_ct, strong_ct);
    assert_eq!(weak.decrypt(&weak_ct).unwrap(), block.to_vec());

    println!("weak   ciphertext: {:02X?}", weak_ct);
    println!("strong ciphertext: {:02X?}", strong_ct);
    println!("weak variant round-trips, OK");
}
