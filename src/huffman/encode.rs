//! Canonical Huffman construction and the interleaved sequence encoder.
//!
//! Three alphabets are coded per block, each 256 symbols wide:
//!   - tokens (`[lit_len:4][match_code:4]`)
//!   - literal bytes
//!   - offset high bytes (the low byte is stored raw — it is close to
//!     uniformly distributed and not worth a table)
//!
//! Code lengths are capped at [`MAX_CODE_BITS`] so they fit the 4-bit
//! serialized table entries and the decoder's direct lookup. When a skewed
//! distribution would produce a deeper tree, frequencies are halved (keeping
//! every live symbol at weight ≥ 1) and the tree rebuilt.

use crate::block::Sequence;
use crate::huffman::bitio::BitWriter;
use crate::lz77::MIN_MATCH;

/// Longest accepted Huffman code, in bits.
pub const MAX_CODE_BITS: u32 = 15;

/// Serialized size of the three code-length tables: 3 × 256 nibbles.
pub const TABLES_SIZE: usize = 384;

/// Token byte for a sequence: literal length in the high nibble (15 =
/// escape), biased match length in the low nibble (0 = no match, 15 =
/// escape). An encoded match code `c >= 1` stands for length `c + 3`.
#[inline]
pub fn token_for(lit_len: usize, match_len: usize) -> u8 {
    let t_ll = lit_len.min(15) as u8;
    let t_ml = if match_len >= MIN_MATCH {
        (match_len - 3).min(15) as u8
    } else {
        0
    };
    (t_ll << 4) | t_ml
}

// ─────────────────────────────────────────────────────────────────────────────
// Table
// ─────────────────────────────────────────────────────────────────────────────

/// Per-alphabet frequency counts and the canonical code built from them.
pub struct HuffTable {
    pub freq: [u32; 256],
    pub code_len: [u8; 256],
    pub code: [u16; 256],
}

impl Default for HuffTable {
    fn default() -> Self {
        Self {
            freq: [0; 256],
            code_len: [0; 256],
            code: [0; 256],
        }
    }
}

impl HuffTable {
    /// Build canonical codes from the accumulated frequencies.
    pub fn build(&mut self) {
        loop {
            let max_depth = self.assign_depths();
            if max_depth <= MAX_CODE_BITS {
                break;
            }
            // Flatten the distribution and retry; live symbols keep weight 1+.
            for f in self.freq.iter_mut() {
                if *f > 0 {
                    *f = (*f >> 1) | 1;
                }
            }
        }
        self.assign_canonical_codes();
    }

    /// Compute tree depths from frequencies into `code_len`; returns the
    /// maximum depth (0 when the alphabet is empty).
    fn assign_depths(&mut self) -> u32 {
        self.code_len = [0; 256];

        // Nodes 0..256 are leaves; internal nodes are appended above.
        let mut weight = [0u64; 512];
        let mut parent = [-1i32; 512];
        let mut active: Vec<usize> = Vec::with_capacity(256);
        for i in 0..256 {
            if self.freq[i] > 0 {
                weight[i] = u64::from(self.freq[i]);
                active.push(i);
            }
        }

        match active.len() {
            0 => return 0,
            1 => {
                self.code_len[active[0]] = 1;
                return 1;
            }
            _ => {}
        }

        // Repeated two-minimum selection. O(n²) with n ≤ 256 — the tree
        // build is a rounding error next to the match search.
        let mut next_node = 256;
        while active.len() > 1 {
            let (i1, _) = active
                .iter()
                .enumerate()
                .min_by_key(|&(_, &n)| weight[n])
                .unwrap();
            let node1 = active.swap_remove(i1);
            let (i2, _) = active
                .iter()
                .enumerate()
                .min_by_key(|&(_, &n)| weight[n])
                .unwrap();
            let node2 = active[i2];

            let p = next_node;
            next_node += 1;
            weight[p] = weight[node1] + weight[node2];
            parent[node1] = p as i32;
            parent[node2] = p as i32;
            active[i2] = p;
        }

        let mut max_depth = 0;
        for i in 0..256 {
            if self.freq[i] > 0 {
                let mut depth = 0u32;
                let mut cur = i;
                while parent[cur] != -1 {
                    cur = parent[cur] as usize;
                    depth += 1;
                }
                self.code_len[i] = depth as u8;
                max_depth = max_depth.max(depth);
            }
        }
        max_depth
    }

    /// Standard canonical code assignment from `code_len`.
    fn assign_canonical_codes(&mut self) {
        let mut bl_count = [0u16; 16];
        for &len in self.code_len.iter() {
            bl_count[len as usize] += 1;
        }
        bl_count[0] = 0;

        let mut next_code = [0u16; 16];
        let mut code = 0u16;
        for bits in 1..=15 {
            code = (code + bl_count[bits - 1]) << 1;
            next_code[bits] = code;
        }

        for i in 0..256 {
            let len = self.code_len[i] as usize;
            if len != 0 {
                self.code[i] = next_code[len];
                next_code[len] += 1;
            }
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Frequency analysis
// ─────────────────────────────────────────────────────────────────────────────

/// Count symbol frequencies over a block's sequences.
///
/// Returns `(token, literal, offset-high)` tables with frequencies filled in
/// but codes not yet built.
pub fn analyze_sequences(seqs: &[Sequence<'_>]) -> (HuffTable, HuffTable, HuffTable) {
    let mut token_hf = HuffTable::default();
    let mut lit_hf = HuffTable::default();
    let mut off_hf = HuffTable::default();

    for s in seqs {
        for &lit in s.literals {
            lit_hf.freq[lit as usize] += 1;
        }
        if s.match_len >= MIN_MATCH {
            off_hf.freq[(s.offset >> 8) as usize] += 1;
        }
        token_hf.freq[token_for(s.literals.len(), s.match_len) as usize] += 1;
    }

    (token_hf, lit_hf, off_hf)
}

// ─────────────────────────────────────────────────────────────────────────────
// Encoder
// ─────────────────────────────────────────────────────────────────────────────

/// Length escape: a 255-run byte encoding of `val` (each 255 continues).
fn put_extra_len(bw: &mut BitWriter<'_>, mut val: usize) {
    while val >= 255 {
        bw.put(255, 8);
        val -= 255;
    }
    bw.put(val as u32, 8);
}

#[inline]
fn put_sym(bw: &mut BitWriter<'_>, hf: &HuffTable, sym: u8) {
    bw.put_code(u32::from(hf.code[sym as usize]), u32::from(hf.code_len[sym as usize]));
}

/// Serialize the three code-length tables (packed nibbles, token/lit/off
/// order) followed by the interleaved coded stream, byte-aligned at the end.
///
/// Returns `None` when the destination cannot hold the output; the block
/// encoder then falls back to a raw store.
pub fn encode_sequences(
    seqs: &[Sequence<'_>],
    dst: &mut [u8],
    token_hf: &HuffTable,
    lit_hf: &HuffTable,
    off_hf: &HuffTable,
) -> Option<usize> {
    let mut bw = BitWriter::new(dst);

    for hf in [token_hf, lit_hf, off_hf] {
        for i in (0..256).step_by(2) {
            let n1 = hf.code_len[i] & 0xF;
            let n2 = hf.code_len[i + 1] & 0xF;
            bw.put(u32::from((n1 << 4) | n2), 8);
        }
    }

    for s in seqs {
        let ll = s.literals.len();
        let ml = s.match_len;
        let token = token_for(ll, ml);
        put_sym(&mut bw, token_hf, token);

        if token >> 4 == 15 {
            put_extra_len(&mut bw, ll - 15);
        }
        for &lit in s.literals {
            put_sym(&mut bw, lit_hf, lit);
        }

        if ml >= MIN_MATCH {
            put_sym(&mut bw, off_hf, (s.offset >> 8) as u8);
            bw.put(u32::from(s.offset & 0xFF), 8);
            if token & 0xF == 15 {
                put_extra_len(&mut bw, ml - 3 - 15);
            }
        }
    }

    bw.flush();
    if bw.overflowed() {
        None
    } else {
        Some(bw.written())
    }
}
