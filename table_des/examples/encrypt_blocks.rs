use std::sync::Arc;

use rayon::prelude::*;
use table_des::crypto::cipher_traits::CipherAlgorithm;
use table_des::crypto::context::Context;
use table_des::crypto::des::{BLOCK_SIZE, Des};

fn random_bytes(len: usize) -> Vec<u8> {
    use rand::RngCore;
    let mut buf = vec![0u8; len];
    rand::rng().fill_bytes(&mut buf);
    buf
}

// The engine operates on single 8-byte blocks; splitting a longer message
// into blocks (and padding the tail) is the caller's job. Blocks are
// independent, so they can be processed in parallel.
fn main() {
    let text = "The quick brown fox jumps over the lazy dog. Table-driven DES test string!";
    let mut data = text.as_bytes().to_vec();
    while data.len() % BLOCK_SIZE != 0 {
        data.push(0);
    }

    let key = random_bytes(BLOCK_SIZE);
    let des = Des::new(Arc::new(Context::canonical()), &key).unwrap();

    let encrypted: Vec<Vec<u8>> = data
        .par_chunks(BLOCK_SIZE)
        .map(|block| des.encrypt(block).unwrap())
        .collect();

    let decrypted: Vec<u8> = encrypted
        .par_iter()
        .flat_map(|block| des.decrypt(block).unwrap())
        .collect();

    assert_eq!(decrypted, data);
    println!("{} blocks encrypted and decrypted, OK", encrypted.len());
}
