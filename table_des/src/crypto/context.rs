use crate::crypto::des_tables;
use crate::crypto::error::CipherError;

/// Fixed-length table of one-based bit indices into a source sequence.
pub type Table<const N: usize> = [usize; N];

/// One S-box: 64 entries addressed as `row * 16 + column`.
pub type SboxTable = [u8; 64];

/// The full S-box set: eight boxes applied to eight 6-bit groups.
pub type Mapping = [SboxTable; 8];

/// Immutable bundle of the 8 tables that parameterize one cipher variant.
///
/// Table lengths are fixed by the array types; index and entry ranges are
/// checked by [`Context::new`]. A `Context` is constructed once, read-only
/// thereafter, and shared by any number of engines via `Arc`.
#[derive(Debug, Clone)]
pub struct Context {
    pub(crate) pc1: Table<56>,
    pub(crate) pc2: Table<48>,
    pub(crate) key_rotation: Table<16>,
    pub(crate) initial_permutation: Table<64>,
    pub(crate) round_permutation: Table<32>,
    pub(crate) final_permutation: Table<64>,
    pub(crate) expansion: Table<48>,
    pub(crate) sbox: Mapping,
}

fn check_table<const N: usize>(
    name: &'static str,
    table: &Table<N>,
    source_len: usize,
) -> Result<(), CipherError> {
    for (position, &index) in table.iter().enumerate() {
        if index < 1 || index > source_len {
            return Err(CipherError::TableIndexOutOfRange {
                table: name,
                position,
                index,
            });
        }
    }
    Ok(())
}

fn check_sbox(mapping: &Mapping) -> Result<(), CipherError> {
    for (sbox, table) in mapping.iter().enumerate() {
        for (position, &value) in table.iter().enumerate() {
            if value > 15 {
                return Err(CipherError::SboxEntryOutOfRange {
                    sbox,
                    position,
                    value,
                });
            }
        }
    }
    Ok(())
}

impl Context {
    /// Builds a context from explicit tables, failing fast on any entry
    /// outside its valid range. Rotation values are deliberately not
    /// validated: degenerate rotation tables are a supported configuration.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        pc1: Table<56>,
        pc2: Table<48>,
        key_rotation: Table<16>,
        initial_permutation: Table<64>,
        round_permutation: Table<32>,
        final_permutation: Table<64>,
        expansion: Table<48>,
        sbox: Mapping,
    ) -> Result<Self, CipherError> {
        check_table("PC1", &pc1, 64)?;
        check_table("PC2", &pc2, 56)?;
        check_table("initial permutation", &initial_permutation, 64)?;
        check_table("round permutation", &round_permutation, 32)?;
        check_table("final permutation", &final_permutation, 64)?;
        check_table("expansion", &expansion, 32)?;
        check_sbox(&sbox)?;

        Ok(Context {
            pc1,
            pc2,
            key_rotation,
            initial_permutation,
            round_permutation,
            final_permutation,
            expansion,
            sbox,
        })
    }

    /// The canonical DES context, including the standard rotation sequence.
    pub fn canonical() -> Self {
        Context {
            key_rotation: des_tables::KEY_ROTATION,
            ..Self::default()
        }
    }

    /// Number of entries in the key-rotation table, the upper bound on the
    /// round count an engine may request.
    pub fn max_rounds(&self) -> usize {
        self.key_rotation.len()
    }
}

/// Canonical tables with the key-rotation table left at zero.
///
/// The resulting schedule applies no rotation, so every subkey is identical:
/// a severely weakened but valid variant. Use [`Context::canonical`] for the
/// standard cipher.
impl Default for Context {
    fn default() -> Self {
        Context {
            pc1: des_tables::PC1,
            pc2: des_tables::PC2,
            key_rotation: [0; 16],
            initial_permutation: des_tables::INITIAL_PERMUTATION,
            round_permutation: des_tables::ROUND_PERMUTATION,
            final_permutation: des_tables::FINAL_PERMUTATION,
            expansion: des_tables::EXPANSION,
            sbox: des_tables::SBOX,
        }
    }
}
