//! Byte-order helpers, the worst-case bound, and frame header read/write.
//!
//! Header layout (12 bytes, all words little-endian):
//!
//! | offset | field                                             |
//! |--------|---------------------------------------------------|
//! | 0..4   | magic (`ZYPHRAX_MAGIC`)                           |
//! | 4..8   | `block_size` (low 24 bits) \| flag byte `<< 24`   |
//! | 8..12  | XXH32 content checksum (0 when checksums are off) |

use super::types::{
    pack_flags, parse_flags, FrameDecodeError, ZyphraxParams, HEADER_SIZE, ZYPHRAX_MAGIC,
};

// ─────────────────────────────────────────────────────────────────────────────
// Byte-order I/O helpers
// ─────────────────────────────────────────────────────────────────────────────

/// Read a little-endian `u32` from `src` at byte `offset`.
///
/// Portable — no alignment or host-endianness assumptions.
#[inline]
pub fn read_le32(src: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        src[offset],
        src[offset + 1],
        src[offset + 2],
        src[offset + 3],
    ])
}

/// Write a little-endian `u32` into `dst` at byte `offset`.
#[inline]
pub fn write_le32(dst: &mut [u8], offset: usize, value: u32) {
    dst[offset..offset + 4].copy_from_slice(&value.to_le_bytes());
}

// ─────────────────────────────────────────────────────────────────────────────
// Worst-case bound
// ─────────────────────────────────────────────────────────────────────────────

/// Worst-case compressed size for an input of `src_size` bytes.
///
/// Pure and deterministic. Covers the frame header, one type byte per block,
/// per-block table overhead, and the raw-store fallback; never returns 0
/// (an empty input still produces a bare 12-byte header).
#[inline]
pub fn compress_bound(src_size: usize) -> usize {
    src_size + (src_size / 255) + 256
}

// ─────────────────────────────────────────────────────────────────────────────
// Header read/write
// ─────────────────────────────────────────────────────────────────────────────

/// Frame header fields as parsed from the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameHeader {
    /// Level recorded at compression time (informational only).
    pub level: u32,
    /// Block size used to chunk the payload; governs raw-block sizing.
    pub block_size: u32,
    /// Whether the frame carries a content checksum.
    pub checksum: bool,
    /// Stored XXH32 of the uncompressed payload (0 when `checksum` is false).
    pub content_checksum: u32,
}

/// Write the 12-byte frame header. `params` must already be normalized.
///
/// # Panics
/// Panics if `dst` is shorter than [`HEADER_SIZE`]; the frame encoder checks
/// capacity before calling.
pub fn write_header(dst: &mut [u8], params: &ZyphraxParams, content_checksum: u32) {
    write_le32(dst, 0, ZYPHRAX_MAGIC);
    let word1 = (params.block_size & 0x00FF_FFFF) | (u32::from(pack_flags(params)) << 24);
    write_le32(dst, 4, word1);
    write_le32(dst, 8, content_checksum);
}

/// Parse and validate the 12-byte frame header.
pub fn parse_header(src: &[u8]) -> Result<FrameHeader, FrameDecodeError> {
    if src.len() < HEADER_SIZE {
        return Err(FrameDecodeError::Truncated);
    }
    let magic = read_le32(src, 0);
    if magic != ZYPHRAX_MAGIC {
        return Err(FrameDecodeError::BadMagic(magic));
    }
    let word1 = read_le32(src, 4);
    let block_size = word1 & 0x00FF_FFFF;
    let (level, checksum) = parse_flags((word1 >> 24) as u8);
    if block_size == 0 {
        // A zero block size would make raw-block sizing diverge; the encoder
        // never emits it.
        return Err(FrameDecodeError::CorruptStream);
    }
    Ok(FrameHeader {
        level,
        block_size,
        checksum,
        content_checksum: read_le32(src, 8),
    })
}
