use bitvec::prelude::BitVec;

use crate::crypto::context::Context;
use crate::crypto::error::CipherError;
use crate::crypto::utils::{bytes_to_bits, join_bits, permutate, split_bits};

/// Ordered round subkeys, 48 bits each.
pub type KeySchedule = Vec<BitVec>;

/// Derives `rounds` subkeys from an 8-byte key and a context.
///
/// PC1 drops the parity bits and splits the key into two 28-bit halves; each
/// round rotates both halves left by the context's rotation amount and
/// compresses the joined halves through PC2. Rotation values are applied as
/// given, circularly — a degenerate table (e.g. all zeros) yields a schedule
/// of identical subkeys and is a supported configuration.
///
/// Fails fast on a key that is not exactly 8 bytes or a round count that
/// exceeds the rotation table.
pub fn generate_key_schedule(
    key: &[u8],
    ctx: &Context,
    rounds: usize,
) -> Result<KeySchedule, CipherError> {
    if key.len() != 8 {
        return Err(CipherError::InvalidKeyLength(key.len()));
    }
    if rounds > ctx.max_rounds() {
        return Err(CipherError::InvalidRoundCount(rounds));
    }

    let bits = bytes_to_bits(key);
    let bits = permutate(&bits, &ctx.pc1);

    let (mut left, mut right) = split_bits(&bits, 28);

    let mut schedule = Vec::with_capacity(rounds);

    for round in 0..rounds {
        let rotation = ctx.key_rotation[round] % left.len();

        left.rotate_left(rotation);
        right.rotate_left(rotation);

        let joined = join_bits(&left, &right);
        schedule.push(permutate(&joined, &ctx.pc2));
    }

    Ok(schedule)
}
