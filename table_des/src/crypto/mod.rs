pub mod cipher_traits;
pub mod context;
pub mod des;
pub mod des_tables;
pub mod error;
pub mod key_schedule;
pub mod transformation;
pub mod utils;
