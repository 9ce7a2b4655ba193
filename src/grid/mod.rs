//! MGRS 100 km grid lettering, encoding and decoding

pub mod decode;
pub mod encode;
pub mod tables;

pub use decode::decode;
pub use encode::{encode, get_100k_id};
