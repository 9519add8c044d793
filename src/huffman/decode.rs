//! Huffman decode tables — single-level 15-bit direct lookup.
//!
//! Each table is 2^15 `u16` entries (64 KiB). An entry packs
//! `[symbol:8][code_len:8]`; index by the next 15 bits of the (LSB-first)
//! stream, emit the symbol, consume `code_len` bits. Entry 0 marks an index
//! no code maps to — hitting one means the stream is corrupt.

use crate::huffman::bitio::{bit_reverse, BitReader};
use crate::huffman::encode::MAX_CODE_BITS;

const TABLE_SIZE: usize = 1 << MAX_CODE_BITS;

/// Direct-lookup decoder for one 256-symbol alphabet.
pub struct HuffDecoder {
    table: Vec<u16>,
}

impl HuffDecoder {
    /// Build the lookup table from the serialized code lengths (canonical
    /// codes are reconstructed the same way the encoder assigned them).
    pub fn from_code_lens(code_lens: &[u8; 256]) -> Self {
        // u32 arithmetic: the lengths come off the wire, and an
        // over-subscribed (corrupt) table must not wrap the code counter.
        let mut bl_count = [0u32; 16];
        for &len in code_lens.iter() {
            bl_count[len as usize & 0xF] += 1;
        }
        bl_count[0] = 0;

        let mut next_code = [0u32; 16];
        let mut code = 0u32;
        for bits in 1..=15 {
            code = (code + bl_count[bits - 1]) << 1;
            next_code[bits] = code;
        }

        let mut table = vec![0u16; TABLE_SIZE];
        for sym in 0..256usize {
            let len = code_lens[sym] as u32;
            if len == 0 {
                continue;
            }
            let c = next_code[len as usize];
            next_code[len as usize] += 1;

            // The stream is LSB-first, so the table index seen by the
            // decoder is the bit-reversed code, extended by every possible
            // suffix: fill all indices congruent to it modulo 2^len.
            let rev = bit_reverse(c, len) as usize;
            let stride = 1usize << len;
            let entry = ((sym as u16) << 8) | len as u16;
            let mut idx = rev;
            while idx < TABLE_SIZE {
                table[idx] = entry;
                idx += stride;
            }
        }

        Self { table }
    }

    /// Decode one symbol from the reader.
    ///
    /// Returns `None` on a table miss (corrupt stream); consuming zero bits
    /// forever is not an option.
    #[inline]
    pub fn decode(&self, br: &mut BitReader<'_>) -> Option<u8> {
        br.refill();
        let entry = self.table[br.peek(MAX_CODE_BITS) as usize];
        let nbits = entry & 0xFF;
        if nbits == 0 {
            return None;
        }
        br.consume(u32::from(nbits));
        Some((entry >> 8) as u8)
    }
}
