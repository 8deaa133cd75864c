use crate::crypto::error::CipherError;

/// A block cipher operating on single fixed-size blocks.
///
/// Implementations transform exactly one block per call; splitting longer
/// messages into blocks and reassembling the results is the caller's job.
pub trait CipherAlgorithm {
    fn encrypt(&self, block: &[u8]) -> Result<Vec<u8>, CipherError>;
    fn decrypt(&self, block: &[u8]) -> Result<Vec<u8>, CipherError>;
}
