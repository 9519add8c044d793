//! Block decoder for entropy-coded blocks.
//!
//! The caller has already consumed the type byte; `src` starts at the
//! original-size word. Returns `(bytes consumed from src, bytes produced)`.
//! The consumed count is exact — the bit reader's reservoir may pre-read
//! bytes belonging to the next block, so resynchronisation is computed from
//! the number of bits actually consumed, rounded up to the byte boundary the
//! encoder flushed to.

use crate::frame::types::FrameDecodeError;
use crate::huffman::{BitReader, HuffDecoder, TABLES_SIZE};

/// Read a 255-run length escape. A truncated stream reads as zero bits and
/// terminates the run; the caller's output bound catches the damage.
fn read_extra_len(br: &mut BitReader<'_>) -> usize {
    let mut val = 0usize;
    loop {
        let b = br.read(8);
        val += b as usize;
        if b < 255 {
            break;
        }
    }
    val
}

/// Unpack one 256-entry code-length table from packed nibbles.
fn unpack_code_lens(src: &[u8]) -> [u8; 256] {
    let mut lens = [0u8; 256];
    for (i, &b) in src.iter().take(128).enumerate() {
        lens[2 * i] = b >> 4;
        lens[2 * i + 1] = b & 0xF;
    }
    lens
}

/// Decode one compressed block into the front of `dst`.
pub fn decompress_block(
    src: &[u8],
    dst: &mut [u8],
) -> Result<(usize, usize), FrameDecodeError> {
    if src.len() < 4 + TABLES_SIZE {
        return Err(FrameDecodeError::Truncated);
    }
    let orig_size = u32::from_le_bytes([src[0], src[1], src[2], src[3]]) as usize;
    if orig_size > dst.len() {
        // Retryable: the caller may grow the destination.
        return Err(FrameDecodeError::OutputTooSmall);
    }

    let token_dec = HuffDecoder::from_code_lens(&unpack_code_lens(&src[4..4 + 128]));
    let lit_dec = HuffDecoder::from_code_lens(&unpack_code_lens(&src[4 + 128..4 + 256]));
    let off_dec = HuffDecoder::from_code_lens(&unpack_code_lens(&src[4 + 256..4 + TABLES_SIZE]));

    let payload = &src[4 + TABLES_SIZE..];
    let mut br = BitReader::new(payload);
    let mut out = 0usize;

    while out < orig_size {
        let token = token_dec.decode(&mut br).ok_or(FrameDecodeError::CorruptStream)?;
        let t_ll = (token >> 4) as usize;
        let t_ml = (token & 0xF) as usize;
        if t_ll == 0 && t_ml == 0 {
            // A legal stream never codes an empty sequence; accepting one
            // would stall the decode loop.
            return Err(FrameDecodeError::CorruptStream);
        }

        let mut ll = t_ll;
        if t_ll == 15 {
            ll += read_extra_len(&mut br);
        }
        if out + ll > orig_size {
            return Err(FrameDecodeError::CorruptStream);
        }
        for _ in 0..ll {
            let lit = lit_dec.decode(&mut br).ok_or(FrameDecodeError::CorruptStream)?;
            dst[out] = lit;
            out += 1;
        }

        if out >= orig_size {
            break;
        }

        if t_ml > 0 {
            let mut ml = t_ml + 3;
            if t_ml == 15 {
                ml += read_extra_len(&mut br);
            }

            let off_hi = off_dec.decode(&mut br).ok_or(FrameDecodeError::CorruptStream)?;
            let off_lo = br.read(8);
            let offset = ((off_hi as usize) << 8) | off_lo as usize;
            // The encoder's window never crosses a block boundary, so a
            // back-reference must land inside the bytes decoded so far.
            if offset == 0 || offset > out {
                return Err(FrameDecodeError::CorruptStream);
            }
            if out + ml > orig_size {
                return Err(FrameDecodeError::CorruptStream);
            }
            // Byte-at-a-time copy: overlapping matches (offset < ml)
            // deliberately re-read freshly written bytes.
            for _ in 0..ml {
                dst[out] = dst[out - offset];
                out += 1;
            }
        }
    }

    let consumed_payload = (br.bits_consumed() + 7) / 8;
    Ok((4 + TABLES_SIZE + consumed_payload, out))
}
