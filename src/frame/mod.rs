//! Zyphrax frame format: 12-byte header followed by independent blocks.

pub mod compress;
pub mod decompress;
pub mod header;
pub mod types;

pub use compress::{compress_frame, compress_frame_to_vec};
pub use decompress::{decompress_frame, decompress_frame_to_vec};
pub use header::{compress_bound, parse_header, FrameHeader};
pub use types::{
    FrameDecodeError, FrameEncodeError, ZyphraxParams, BLOCK_SIZE_DEFAULT, BLOCK_SIZE_MAX,
    BLOCK_SIZE_MIN, HEADER_SIZE, LEVEL_DEFAULT, LEVEL_MAX, ZYPHRAX_MAGIC,
};
