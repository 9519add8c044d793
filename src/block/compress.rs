//! Block encoder: LZ77 parse → three Huffman alphabets → interleaved
//! bitstream, with a raw-store fallback whenever entropy coding would not
//! shrink the block.

use super::{Sequence, BLOCK_COMPRESSED, BLOCK_HEADER_SIZE, BLOCK_RAW};
use crate::frame::types::FrameEncodeError;
use crate::huffman::{analyze_sequences, encode_sequences};
use crate::lz77::MatchFinder;

/// Store the block verbatim: `[0][payload]`.
fn store_raw(src: &[u8], dst: &mut [u8]) -> Result<usize, FrameEncodeError> {
    if dst.len() < src.len() + 1 {
        return Err(FrameEncodeError::OutputTooSmall);
    }
    dst[0] = BLOCK_RAW;
    dst[1..=src.len()].copy_from_slice(src);
    Ok(src.len() + 1)
}

/// Compress one block into `dst`, returning the number of bytes written.
///
/// Falls back to a raw store when the coded form would not beat
/// `src.len() + BLOCK_HEADER_SIZE` — a raw block always round-trips, so the
/// only hard failure is an output buffer that cannot even hold that.
///
/// `src` must be non-empty; the frame loop never produces an empty chunk.
pub fn compress_block(src: &[u8], dst: &mut [u8], level: u32) -> Result<usize, FrameEncodeError> {
    debug_assert!(!src.is_empty());

    // 1. LZ77 parse into sequences. Fresh finder per block keeps blocks
    // independently decodable.
    let mut finder = MatchFinder::new(level);
    let mut seqs: Vec<Sequence<'_>> = Vec::with_capacity(src.len() / 16 + 8);
    let mut pos = 0;
    let mut lit_start = 0;
    while pos < src.len() {
        match finder.find_best_match(src, pos) {
            Some(m) => {
                seqs.push(Sequence {
                    literals: &src[lit_start..pos],
                    offset: m.offset,
                    match_len: m.len,
                });
                pos += m.len;
                lit_start = pos;
            }
            None => pos += 1,
        }
    }
    if lit_start < src.len() {
        seqs.push(Sequence {
            literals: &src[lit_start..],
            offset: 0,
            match_len: 0,
        });
    }

    // 2. Frequency analysis and canonical code construction.
    let (mut token_hf, mut lit_hf, mut off_hf) = analyze_sequences(&seqs);
    token_hf.build();
    lit_hf.build();
    off_hf.build();

    // 3. Emit `[1][orig_size]` then the coded stream; fall back to raw on
    // overflow or expansion.
    if dst.len() < BLOCK_HEADER_SIZE {
        return store_raw(src, dst);
    }
    dst[0] = BLOCK_COMPRESSED;
    dst[1..5].copy_from_slice(&(src.len() as u32).to_le_bytes());

    match encode_sequences(&seqs, &mut dst[5..], &token_hf, &lit_hf, &off_hf) {
        Some(coded) if coded + BLOCK_HEADER_SIZE < src.len() => Ok(coded + BLOCK_HEADER_SIZE),
        _ => store_raw(src, dst),
    }
}
