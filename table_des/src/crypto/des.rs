use std::sync::Arc;

use crate::crypto::cipher_traits::CipherAlgorithm;
use crate::crypto::context::Context;
use crate::crypto::error::CipherError;
use crate::crypto::key_schedule::{KeySchedule, generate_key_schedule};
use crate::crypto::transformation::round_function;
use crate::crypto::utils::{bits_to_bytes, bytes_to_bits, join_bits, permutate, split_bits, xor_bits};

/// Block size in bytes. Keys share the same size.
pub const BLOCK_SIZE: usize = 8;

/// Default number of Feistel rounds.
pub const DEFAULT_ROUNDS: usize = 16;

/// Table-driven DES block engine.
///
/// Holds a shared [`Context`] and two key schedules computed once at
/// construction: the forward schedule and its exact reverse. Decryption runs
/// the identical block transform with the reversed schedule — reversal of
/// subkey order is the sole mechanism of invertibility. Immutable after
/// construction; concurrent `encrypt`/`decrypt` calls need no locking.
#[derive(Debug)]
pub struct Des {
    context: Arc<Context>,
    round_keys: KeySchedule,
    reversed_round_keys: KeySchedule,
}

impl Des {
    /// Engine with the default 16 rounds.
    pub fn new(context: Arc<Context>, key: &[u8]) -> Result<Self, CipherError> {
        Self::with_rounds(context, key, DEFAULT_ROUNDS)
    }

    /// Engine with an explicit round count.
    ///
    /// `rounds` may be anything up to the context's rotation-table length;
    /// fewer than 16 rounds (including 0) is a valid, weakened variant.
    pub fn with_rounds(
        context: Arc<Context>,
        key: &[u8],
        rounds: usize,
    ) -> Result<Self, CipherError> {
        let round_keys = generate_key_schedule(key, &context, rounds)?;
        let reversed_round_keys = round_keys.iter().rev().cloned().collect();

        Ok(Des {
            context,
            round_keys,
            reversed_round_keys,
        })
    }

    fn process_block(&self, block: &[u8], schedule: &KeySchedule) -> Result<Vec<u8>, CipherError> {
        if block.len() != BLOCK_SIZE {
            return Err(CipherError::InvalidBlockLength(block.len()));
        }

        let bits = bytes_to_bits(block);
        let bits = permutate(&bits, &self.context.initial_permutation);

        let (mut left, mut right) = split_bits(&bits, 32);

        for subkey in schedule {
            let mixed = xor_bits(&round_function(&right, subkey, &self.context), &left);

            left = right;
            right = mixed;
        }

        // The final halves are joined swapped; the customary last un-swap is
        // omitted, schedule reversal alone inverts the transform.
        let joined = join_bits(&right, &left);
        let bits = permutate(&joined, &self.context.final_permutation);

        Ok(bits_to_bytes(&bits))
    }
}

impl CipherAlgorithm for Des {
    fn encrypt(&self, block: &[u8]) -> Result<Vec<u8>, CipherError> {
        self.process_block(block, &self.round_keys)
    }

    fn decrypt(&self, block: &[u8]) -> Result<Vec<u8>, CipherError> {
        self.process_block(block, &self.reversed_round_keys)
    }
}
