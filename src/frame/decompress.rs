//! Frame decompression: header parse + block loop + checksum verification.

use super::header::parse_header;
use super::types::{FrameDecodeError, HEADER_SIZE};
use crate::block::{decompress_block, BLOCK_COMPRESSED, BLOCK_RAW};
use crate::xxhash::xxh32_oneshot;

/// Hard ceiling for [`decompress_frame_to_vec`]'s grow-and-retry loop.
/// A frame claiming more than this is treated as hostile.
const MAX_DECODED_SIZE: usize = 1 << 31;

/// Decompress a complete frame from `src` into `dst`.
///
/// Returns the decoded payload length; `Ok(0)` is the legitimate result for
/// a header-only frame (an empty input compressed). The caller supplies the
/// capacity — the frame format records no total payload size, so
/// [`FrameDecodeError::OutputTooSmall`] signals that a retry with a larger
/// buffer may succeed.
pub fn decompress_frame(src: &[u8], dst: &mut [u8]) -> Result<usize, FrameDecodeError> {
    let header = parse_header(src)?;
    let block_size = header.block_size as usize;

    let mut in_pos = HEADER_SIZE;
    let mut out = 0usize;
    while in_pos < src.len() {
        let block_type = src[in_pos];
        in_pos += 1;
        match block_type {
            BLOCK_RAW => {
                // Raw payload length is implied: a full block, or whatever
                // remains of the frame for the final block.
                let chunk = block_size.min(src.len() - in_pos);
                if out + chunk > dst.len() {
                    return Err(FrameDecodeError::OutputTooSmall);
                }
                dst[out..out + chunk].copy_from_slice(&src[in_pos..in_pos + chunk]);
                in_pos += chunk;
                out += chunk;
            }
            BLOCK_COMPRESSED => {
                let (consumed, produced) = decompress_block(&src[in_pos..], &mut dst[out..])?;
                in_pos += consumed;
                out += produced;
            }
            _ => return Err(FrameDecodeError::CorruptStream),
        }
    }

    if header.checksum {
        let computed = xxh32_oneshot(&dst[..out], 0);
        if computed != header.content_checksum {
            return Err(FrameDecodeError::ChecksumMismatch {
                stored: header.content_checksum,
                computed,
            });
        }
    }
    Ok(out)
}

/// One-shot convenience around [`decompress_frame`].
///
/// The frame format does not record the total decoded size, so this starts
/// from a 4× estimate and doubles on [`FrameDecodeError::OutputTooSmall`],
/// up to [`MAX_DECODED_SIZE`]. An empty input decodes to an empty vector,
/// mirroring the compression side's empty-input short-circuit.
pub fn decompress_frame_to_vec(src: &[u8]) -> Result<Vec<u8>, FrameDecodeError> {
    if src.is_empty() {
        return Ok(Vec::new());
    }
    let mut capacity = src.len().saturating_mul(4).max(64 << 10);
    loop {
        let mut dst = vec![0u8; capacity];
        match decompress_frame(src, &mut dst) {
            Ok(n) => {
                dst.truncate(n);
                return Ok(dst);
            }
            Err(FrameDecodeError::OutputTooSmall) if capacity < MAX_DECODED_SIZE => {
                capacity = capacity.saturating_mul(2).min(MAX_DECODED_SIZE);
            }
            Err(e) => return Err(e),
        }
    }
}
