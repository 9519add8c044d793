//! Zyphrax frame format types, constants, and error handling.
//!
//! Covers:
//! - Frame format constants (`ZYPHRAX_MAGIC`, `HEADER_SIZE`, block-size limits)
//! - [`ZyphraxParams`] — the fixed-layout parameter record shared with the
//!   C ABI (`zyphrax_params_t`)
//! - Header flag packing/parsing
//! - [`FrameEncodeError`] / [`FrameDecodeError`] with `Display` + `Error` impls

use core::fmt;

// ─────────────────────────────────────────────────────────────────────────────
// Frame format constants
// ─────────────────────────────────────────────────────────────────────────────

/// Frame magic number, stored little-endian as the first four header bytes
/// (`"YFYX"` on disk).
pub const ZYPHRAX_MAGIC: u32 = 0x5859_4659;

/// Fixed frame header size in bytes: magic (4) + flags/block-size word (4) +
/// content checksum word (4).
pub const HEADER_SIZE: usize = 12;

/// Default block size: 64 KiB.
pub const BLOCK_SIZE_DEFAULT: u32 = 64 << 10;

/// Largest block size representable in the header's 24-bit field (16 MiB − 1).
pub const BLOCK_SIZE_MAX: u32 = 0x00FF_FFFF;

/// Smallest accepted block size. Below this the one-byte-per-raw-block
/// overhead would outgrow what [`crate::compress_bound`] reserves.
pub const BLOCK_SIZE_MIN: u32 = 256;

/// Default compression level.
pub const LEVEL_DEFAULT: u32 = 3;

/// Maximum compression level accepted by [`ZyphraxParams::normalized`].
/// Levels above this are clamped, matching the C engine's behaviour.
pub const LEVEL_MAX: u32 = 9;

// Flag byte layout (header word 1, bits 24..32):
//   bits 0..3: level       (3 bits — levels above 7 are recorded modulo 8,
//                           informational only; decoding never consults it)
//   bit  3:    checksum enabled
//   bits 4..8: reserved, written as zero
const FLAG_LEVEL_MASK: u8 = 0x7;
const FLAG_CHECKSUM_BIT: u8 = 1 << 3;

// ─────────────────────────────────────────────────────────────────────────────
// Parameter record
// ─────────────────────────────────────────────────────────────────────────────

/// Compression parameters, passed by reference across the C ABI.
///
/// The memory layout (field order, `u32` widths, no padding) is part of the
/// ABI contract with `zyphrax_params_t`; field order is load-bearing.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZyphraxParams {
    /// Compression effort, 1–9. Higher levels search longer hash chains.
    pub level: u32,
    /// Size in bytes of the independent processing unit. Must fit in 24 bits.
    pub block_size: u32,
    /// 0 = no checksum; nonzero = embed an XXH32 content checksum in the
    /// frame header and verify it on decompression.
    pub checksum: u32,
}

impl Default for ZyphraxParams {
    fn default() -> Self {
        Self {
            level: LEVEL_DEFAULT,
            block_size: BLOCK_SIZE_DEFAULT,
            checksum: 0,
        }
    }
}

impl ZyphraxParams {
    /// Returns a copy with defaults substituted and the level clamped into
    /// range. A `block_size` that cannot be represented in the header's
    /// 24-bit field is rejected rather than silently clamped: clamping would
    /// desynchronise the encoder's chunking from what the decoder reads back.
    pub fn normalized(mut self) -> Result<Self, FrameEncodeError> {
        if self.block_size == 0 {
            self.block_size = BLOCK_SIZE_DEFAULT;
        }
        if self.block_size > BLOCK_SIZE_MAX {
            return Err(FrameEncodeError::BlockSizeTooLarge(self.block_size));
        }
        if self.block_size < BLOCK_SIZE_MIN {
            self.block_size = BLOCK_SIZE_MIN;
        }
        if self.level == 0 {
            self.level = LEVEL_DEFAULT;
        }
        if self.level > LEVEL_MAX {
            self.level = LEVEL_MAX;
        }
        Ok(self)
    }

    /// Whether the content checksum is enabled.
    #[inline]
    pub fn checksum_enabled(&self) -> bool {
        self.checksum != 0
    }
}

/// Pack level + checksum flag into the header flag byte.
pub(crate) fn pack_flags(params: &ZyphraxParams) -> u8 {
    let mut flags = (params.level as u8) & FLAG_LEVEL_MASK;
    if params.checksum_enabled() {
        flags |= FLAG_CHECKSUM_BIT;
    }
    flags
}

/// Unpack the header flag byte into (level, checksum-enabled).
pub(crate) fn parse_flags(flags: u8) -> (u32, bool) {
    (
        (flags & FLAG_LEVEL_MASK) as u32,
        flags & FLAG_CHECKSUM_BIT != 0,
    )
}

// ─────────────────────────────────────────────────────────────────────────────
// Error types
// ─────────────────────────────────────────────────────────────────────────────

/// Errors returned by frame compression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameEncodeError {
    /// The destination buffer is too small to hold the compressed frame.
    OutputTooSmall,
    /// `block_size` exceeds the 24 bits the header can record.
    BlockSizeTooLarge(u32),
}

impl fmt::Display for FrameEncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrameEncodeError::OutputTooSmall => {
                write!(f, "destination buffer too small for compressed frame")
            }
            FrameEncodeError::BlockSizeTooLarge(bs) => {
                write!(f, "block size {bs} exceeds 24-bit header field")
            }
        }
    }
}

impl std::error::Error for FrameEncodeError {}

/// Errors returned by frame decompression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameDecodeError {
    /// Input ends before a complete header or block could be read.
    Truncated,
    /// The first header word is not [`ZYPHRAX_MAGIC`].
    BadMagic(u32),
    /// The compressed stream is structurally invalid (bad Huffman table,
    /// zero offset, match underflow, …).
    CorruptStream,
    /// The destination buffer cannot hold the decoded payload. Retrying
    /// with a larger buffer may succeed.
    OutputTooSmall,
    /// The frame carries a content checksum and the decoded payload does
    /// not hash to it.
    ChecksumMismatch { stored: u32, computed: u32 },
}

impl fmt::Display for FrameDecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrameDecodeError::Truncated => write!(f, "truncated frame"),
            FrameDecodeError::BadMagic(m) => {
                write!(f, "bad frame magic {m:#010x} (expected {ZYPHRAX_MAGIC:#010x})")
            }
            FrameDecodeError::CorruptStream => write!(f, "corrupt compressed stream"),
            FrameDecodeError::OutputTooSmall => {
                write!(f, "destination buffer too small for decoded payload")
            }
            FrameDecodeError::ChecksumMismatch { stored, computed } => write!(
                f,
                "content checksum mismatch: header {stored:#010x}, payload {computed:#010x}"
            ),
        }
    }
}

impl std::error::Error for FrameDecodeError {}
