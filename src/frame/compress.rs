//! Frame compression: header + per-block encode loop.

use super::header::{compress_bound, write_header};
use super::types::{FrameEncodeError, ZyphraxParams, HEADER_SIZE};
use crate::block::compress_block;
use crate::xxhash::xxh32_oneshot;

/// Compress `src` into `dst` as a complete frame.
///
/// Returns the number of bytes written. A zero-length input is valid and
/// produces a bare 12-byte header. `dst` sized by [`compress_bound`] can
/// never be too small.
pub fn compress_frame(
    src: &[u8],
    dst: &mut [u8],
    params: &ZyphraxParams,
) -> Result<usize, FrameEncodeError> {
    let params = params.normalized()?;
    if dst.len() < HEADER_SIZE {
        return Err(FrameEncodeError::OutputTooSmall);
    }

    // The checksum covers the uncompressed payload and lives in the header,
    // so it is computed up front.
    let content_checksum = if params.checksum_enabled() {
        xxh32_oneshot(src, 0)
    } else {
        0
    };
    write_header(dst, &params, content_checksum);

    let mut out = HEADER_SIZE;
    for chunk in src.chunks(params.block_size as usize) {
        out += compress_block(chunk, &mut dst[out..], params.level)?;
    }
    Ok(out)
}

/// One-shot convenience: allocate a bound-sized buffer, compress, truncate.
pub fn compress_frame_to_vec(
    src: &[u8],
    params: &ZyphraxParams,
) -> Result<Vec<u8>, FrameEncodeError> {
    let mut dst = vec![0u8; compress_bound(src.len())];
    let n = compress_frame(src, &mut dst, params)?;
    dst.truncate(n);
    Ok(dst)
}
