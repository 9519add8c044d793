//! Canonical Huffman entropy coding: bit I/O, encoder tables, decoder tables.

pub mod bitio;
pub mod decode;
pub mod encode;

pub use bitio::{BitReader, BitWriter};
pub use decode::HuffDecoder;
pub use encode::{analyze_sequences, encode_sequences, HuffTable, MAX_CODE_BITS, TABLES_SIZE};
