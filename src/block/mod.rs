//! Single-block encode/decode.
//!
//! Block wire layout (one block per `block_size` chunk of input):
//!
//! - raw: `[0][payload…]` — payload length is implied: `min(block_size,
//!   bytes remaining in the frame)`.
//! - compressed: `[1][orig_size: u32 LE][384 bytes of packed code-length
//!   nibbles][bitstream…]` — the bitstream is byte-aligned at the end so the
//!   next block starts on a byte boundary.

pub mod compress;
pub mod decompress;

pub use compress::compress_block;
pub use decompress::decompress_block;

/// Block type byte: payload stored verbatim.
pub const BLOCK_RAW: u8 = 0;
/// Block type byte: entropy-coded payload.
pub const BLOCK_COMPRESSED: u8 = 1;

/// Compressed-block header size: type byte + original size.
pub const BLOCK_HEADER_SIZE: usize = 5;

/// One LZ77 parse unit: a literal run followed by an optional match.
/// `match_len == 0` marks the trailing literals-only sequence.
#[derive(Debug, Clone, Copy)]
pub struct Sequence<'a> {
    pub literals: &'a [u8],
    pub offset: u16,
    pub match_len: usize,
}
