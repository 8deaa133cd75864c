#[cfg(test)]
mod tests {
    use bitvec::prelude::*;
    use table_des::crypto::utils::*;

    #[test]
    fn test_bytes_to_bits() {
        let input = vec![0b10101010, 0b11001100];
        let expected = bitvec![1, 0, 1, 0, 1, 0, 1, 0, 1, 1, 0, 0, 1, 1, 0, 0];
        assert_eq!(bytes_to_bits(&input), expected);
    }

    #[test]
    fn test_bits_to_bytes() {
        let bits = bitvec![1, 0, 1, 0, 1, 0, 1, 0, 1, 1, 0, 0, 1, 1, 0, 0];
        let expected = vec![0b10101010, 0b11001100];
        assert_eq!(bits_to_bytes(&bits), expected);
    }

    #[test]
    fn test_bytes_bits_roundtrip() {
        let input = vec![0x01, 0x23, 0x45, 0x67, 0x89, 0xAB, 0xCD, 0xEF];
        assert_eq!(bits_to_bytes(&bytes_to_bits(&input)), input);
    }

    #[test]
    fn test_split_bits() {
        let bits = bytes_to_bits(&[0b11110000]);
        let (prefix, suffix) = split_bits(&bits, 4);
        assert_eq!(prefix, bitvec![1, 1, 1, 1]);
        assert_eq!(suffix, bitvec![0, 0, 0, 0]);
    }

    #[test]
    fn test_join_bits_concatenates() {
        let first = bitvec![1, 0, 1];
        let second = bitvec![0, 1];
        assert_eq!(join_bits(&first, &second), bitvec![1, 0, 1, 0, 1]);
    }

    #[test]
    fn test_split_then_join_is_identity() {
        let bits = bytes_to_bits(&[0xDE, 0xAD, 0xBE, 0xEF]);
        let (left, right) = split_bits(&bits, 13);
        assert_eq!(join_bits(&left, &right), bits);
    }

    #[test]
    fn test_xor_bits() {
        let a = bitvec![1, 1, 0, 0];
        let b = bitvec![1, 0, 1, 0];
        assert_eq!(xor_bits(&a, &b), bitvec![0, 1, 1, 0]);
    }

    #[test]
    fn test_xor_bits_truncates_to_shorter_operand() {
        let a = bitvec![1, 1, 1, 1, 1, 1, 1, 1];
        let b = bitvec![0, 1, 0];
        assert_eq!(xor_bits(&a, &b), bitvec![1, 0, 1]);
        assert_eq!(xor_bits(&b, &a), bitvec![1, 0, 1]);
    }

    #[test]
    fn test_permutate_identity_table() {
        let bits = bytes_to_bits(&[0x3C, 0xA5]);
        let identity: Vec<usize> = (1..=16).collect();
        assert_eq!(permutate(&bits, &identity), bits);
    }

    #[test]
    fn test_permutate_reverses() {
        let bits = bitvec![1, 1, 0, 1, 0, 0, 0, 0];
        let table = [8, 7, 6, 5, 4, 3, 2, 1];
        assert_eq!(permutate(&bits, &table), bitvec![0, 0, 0, 0, 1, 0, 1, 1]);
    }

    #[test]
    fn test_permutate_expands_with_repeated_indices() {
        let bits = bitvec![1, 0];
        let table = [2, 1, 1, 2, 1, 1];
        let expanded = permutate(&bits, &table);
        assert_eq!(expanded, bitvec![0, 1, 1, 0, 1, 1]);
        assert_eq!(expanded.len(), table.len());
    }
}
