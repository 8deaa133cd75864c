use std::fmt;

/// Precondition violations reported by the cipher core.
///
/// Degenerate-but-well-formed configurations (an all-zero rotation table,
/// a reduced round count) are not errors and never reach this type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CipherError {
    /// Key length is not exactly 8 bytes.
    InvalidKeyLength(usize),
    /// Block length is not exactly 8 bytes.
    InvalidBlockLength(usize),
    /// Requested round count exceeds the key-rotation table length.
    InvalidRoundCount(usize),
    /// A permutation or expansion table entry lies outside [1, source length].
    TableIndexOutOfRange {
        table: &'static str,
        position: usize,
        index: usize,
    },
    /// An S-box entry lies outside [0, 15].
    SboxEntryOutOfRange { sbox: usize, position: usize, value: u8 },
}

impl fmt::Display for CipherError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CipherError::InvalidKeyLength(len) => {
                write!(f, "key must be exactly 8 bytes, got {}", len)
            }
            CipherError::InvalidBlockLength(len) => {
                write!(f, "block must be exactly 8 bytes, got {}", len)
            }
            CipherError::InvalidRoundCount(rounds) => {
                write!(
                    f,
                    "round count {} exceeds the key-rotation table length",
                    rounds
                )
            }
            CipherError::TableIndexOutOfRange {
                table,
                position,
                index,
            } => {
                write!(
                    f,
                    "{} table entry {} is {}, outside the source bit range",
                    table, position, index
                )
            }
            CipherError::SboxEntryOutOfRange {
                sbox,
                position,
                value,
            } => {
                write!(
                    f,
                    "S-box {} entry {} is {}, outside [0, 15]",
                    sbox, position, value
                )
            }
        }
    }
}

impl std::error::Error for CipherError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_invalid_key_length() {
        let err = CipherError::InvalidKeyLength(7);
        assert_eq!(format!("{}", err), "key must be exactly 8 bytes, got 7");
    }

    #[test]
    fn test_display_table_index() {
        let err = CipherError::TableIndexOutOfRange {
            table: "PC1",
            position: 3,
            index: 65,
        };
        assert_eq!(
            format!("{}", err),
            "PC1 table entry 3 is 65, outside the source bit range"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(
            CipherError::InvalidBlockLength(9),
            CipherError::InvalidBlockLength(9)
        );
        assert_ne!(
            CipherError::InvalidBlockLength(9),
            CipherError::InvalidKeyLength(9)
        );
    }
}
