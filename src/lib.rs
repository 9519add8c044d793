// zyphrax — Rust port of the Zyphrax block codec (libzyphrax).

pub mod binding;
pub mod block;
pub mod engine;
pub mod frame;
pub mod huffman;
pub mod lz77;
pub mod xxhash;

#[cfg(feature = "c-abi")]
pub mod abi;

// ── Version constants ─────────────────────────────────────────────────────────
pub const ZYPHRAX_VERSION_MAJOR: u32 = 0;
pub const ZYPHRAX_VERSION_MINOR: u32 = 9;
pub const ZYPHRAX_VERSION_RELEASE: u32 = 0;
pub const ZYPHRAX_VERSION_NUMBER: u32 =
    ZYPHRAX_VERSION_MAJOR * 100 * 100 + ZYPHRAX_VERSION_MINOR * 100 + ZYPHRAX_VERSION_RELEASE;
pub const ZYPHRAX_VERSION_STRING: &str = "0.9.0";

/// Returns the runtime version number.
pub fn version_number() -> u32 {
    ZYPHRAX_VERSION_NUMBER
}

/// Returns the runtime version string.
pub fn version_string() -> &'static str {
    ZYPHRAX_VERSION_STRING
}

// ── Top-level re-exports ──────────────────────────────────────────────────────
pub use binding::{compress, Binding, BindingError};
pub use engine::{CodecEngine, ZyphraxEngine};
pub use frame::header::compress_bound;
pub use frame::types::{
    ZyphraxParams, BLOCK_SIZE_DEFAULT, HEADER_SIZE, LEVEL_DEFAULT, ZYPHRAX_MAGIC,
};
pub use frame::{compress_frame, compress_frame_to_vec, decompress_frame, decompress_frame_to_vec};
