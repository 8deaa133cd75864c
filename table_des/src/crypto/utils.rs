use bitvec::prelude::{BitSlice, BitVec};

/// Flattens bytes into bits, most significant bit first within each byte.
pub fn bytes_to_bits(input: &[u8]) -> BitVec {
    let mut bits = BitVec::with_capacity(input.len() * 8);
    for &byte in input {
        for i in (0..8).rev() {
            bits.push((byte >> i) & 1 != 0);
        }
    }
    bits
}

/// Packs bits back into bytes, MSB-first. Inverse of [`bytes_to_bits`].
pub fn bits_to_bytes(bits: &BitSlice) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(bits.len() / 8);

    for chunk in bits.chunks(8) {
        let mut byte = 0;
        for (i, bit) in chunk.iter().enumerate() {
            if *bit {
                byte |= 1 << (7 - i);
            }
        }
        bytes.push(byte);
    }
    bytes
}

/// Splits a bit sequence into (prefix of length `at`, remaining suffix).
///
/// Panics if `at` exceeds the sequence length; callers own that contract.
pub fn split_bits(bits: &BitSlice, at: usize) -> (BitVec, BitVec) {
    let (first, second) = bits.split_at(at);
    (first.to_bitvec(), second.to_bitvec())
}

/// Concatenates two bit sequences.
pub fn join_bits(first: &BitSlice, second: &BitSlice) -> BitVec {
    let mut bits = first.to_bitvec();
    bits.extend_from_bitslice(second);
    bits
}

/// Bitwise XOR over the overlapping length of the operands.
///
/// Mismatched lengths truncate to the shorter operand rather than erroring.
pub fn xor_bits(first: &BitSlice, second: &BitSlice) -> BitVec {
    first
        .iter()
        .by_vals()
        .zip(second.iter().by_vals())
        .map(|(a, b)| a ^ b)
        .collect()
}

/// Table-driven bit reordering: `output[i] = input[table[i] - 1]`.
///
/// Indices are one-based. The same operation serves as a pure permutation
/// (table length == input length) and as an expansion (table length greater,
/// with repeated indices).
pub fn permutate(bits: &BitSlice, table: &[usize]) -> BitVec {
    let mut result = BitVec::with_capacity(table.len());
    for &position in table {
        result.push(bits[position - 1]);
    }
    result
}
