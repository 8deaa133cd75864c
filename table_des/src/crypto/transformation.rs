use bitvec::prelude::{BitSlice, BitVec};

use crate::crypto::context::{Context, Mapping};
use crate::crypto::utils::{permutate, xor_bits};

/// S-box network: 48 bits in, 32 bits out.
///
/// Each 6-bit group addresses its box with the outer bits as the row
/// (`(piece & 1) | ((piece >> 4) & 0b10)`) and the middle four bits as the
/// column; the selected nibbles are concatenated MSB-first. This exact bit
/// layout is what makes the canonical tables reproduce DES.
pub fn substitute(bits: &BitSlice, mapping: &Mapping) -> BitVec {
    let mut result = BitVec::with_capacity(32);

    for (i, group) in bits.chunks(6).enumerate() {
        let mut piece = 0u8;
        for bit in group.iter().by_vals() {
            piece = (piece << 1) | bit as u8;
        }

        let row = (piece & 1) | ((piece >> 4) & 0b10);
        let column = (piece & 0b011110) >> 1;
        let value = mapping[i][(row * 16 + column) as usize];

        for j in (0..4).rev() {
            result.push((value >> j) & 1 != 0);
        }
    }

    result
}

/// The Feistel round function F: expansion, subkey XOR, substitution, round
/// permutation. Pure function of its inputs and the context tables.
pub fn round_function(half: &BitSlice, subkey: &BitSlice, ctx: &Context) -> BitVec {
    let expanded = permutate(half, &ctx.expansion);
    let mixed = xor_bits(&expanded, subkey);
    let substituted = substitute(&mixed, &ctx.sbox);

    permutate(&substituted, &ctx.round_permutation)
}
