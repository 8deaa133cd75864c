//! Table-driven DES: a Feistel block cipher whose permutation, expansion,
//! substitution and key-rotation tables are supplied as data, so the
//! canonical cipher and deliberately weakened variants share one engine.

pub mod crypto;
