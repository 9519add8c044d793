//! LZ77 match finder — hash-chain search over a 64 KiB window.
//!
//! The finder keeps a head table (hash of the next 4 bytes → most recent
//! position) and a chain table (position → previous position with the same
//! hash). Positions are stored biased by +1 in 16 bits so that 0 can act as
//! the empty sentinel; the bias cancels out when computing distances. A
//! position that wraps to a stored value of 0 (pos ≡ 65535 mod 65536) is
//! simply invisible to later searches — an accepted blind spot.

// ─────────────────────────────────────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────────────────────────────────────

pub const HASH_LOG: u32 = 16;
pub const HASH_SIZE: usize = 1 << HASH_LOG;

const CHAIN_LOG: u32 = 18;
const CHAIN_SIZE: usize = 1 << CHAIN_LOG;
const CHAIN_MASK: usize = CHAIN_SIZE - 1;

/// Minimum match length the block format can encode.
pub const MIN_MATCH: usize = 4;
/// Maximum match length searched for (longer runs split into several matches).
pub const MAX_MATCH: usize = 258;
/// Maximum back-reference distance (16-bit offsets).
pub const MAX_DIST: usize = 65_535;

/// Knuth multiplicative hash of the next four bytes.
#[inline]
fn hash4(p: &[u8]) -> usize {
    let v = (u32::from(p[0]) << 24) | (u32::from(p[1]) << 16) | (u32::from(p[2]) << 8)
        | u32::from(p[3]);
    (v.wrapping_mul(2_654_435_761) >> (32 - HASH_LOG)) as usize
}

/// Number of leading bytes `a` and `b` have in common, up to `max_len`.
///
/// Compares 8 bytes at a time; the tail falls back to a byte loop.
#[inline]
pub fn match_len(a: &[u8], b: &[u8], max_len: usize) -> usize {
    let mut len = 0;
    while len + 8 <= max_len {
        let va = u64::from_le_bytes(a[len..len + 8].try_into().unwrap());
        let vb = u64::from_le_bytes(b[len..len + 8].try_into().unwrap());
        let diff = va ^ vb;
        if diff != 0 {
            return len + (diff.trailing_zeros() / 8) as usize;
        }
        len += 8;
    }
    while len < max_len && a[len] == b[len] {
        len += 1;
    }
    len
}

// ─────────────────────────────────────────────────────────────────────────────
// Match finder
// ─────────────────────────────────────────────────────────────────────────────

/// A back-reference: `offset` bytes behind the current position, `len` bytes
/// long. `offset` is never 0; `len >= MIN_MATCH`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match {
    pub offset: u16,
    pub len: usize,
}

/// Hash-chain match finder state. One instance per block; tables are freshly
/// zeroed so blocks stay independently decodable.
pub struct MatchFinder {
    head: Vec<u16>,
    chain: Vec<u16>,
    max_chain: usize,
}

impl MatchFinder {
    /// Create a finder for the given compression level. The level sets how
    /// many chain entries each search may visit (level 3 → 256, doubling per
    /// level).
    pub fn new(level: u32) -> Self {
        let level = level.clamp(1, 9);
        Self {
            head: vec![0; HASH_SIZE],
            chain: vec![0; CHAIN_SIZE],
            max_chain: 32usize << level,
        }
    }

    /// Find the longest previous occurrence of the bytes at `data[pos..]`
    /// and record `pos` in the hash chain.
    ///
    /// Returns `None` when fewer than [`MIN_MATCH`] bytes remain or no
    /// candidate reaches the minimum length.
    pub fn find_best_match(&mut self, data: &[u8], pos: usize) -> Option<Match> {
        if pos + MIN_MATCH > data.len() {
            return None;
        }

        let h = hash4(&data[pos..]);
        let mut cur = self.head[h];

        // Insert the current position before scanning so overlapping matches
        // one byte apart remain reachable.
        let scan = (pos as u16).wrapping_add(1);
        self.chain[pos & CHAIN_MASK] = cur;
        self.head[h] = scan;

        let max_possible = MAX_MATCH.min(data.len() - pos);
        let mut best: Option<Match> = None;
        let mut best_len = MIN_MATCH - 1;
        let mut depth = 0;

        while cur != 0 && depth < self.max_chain {
            depth += 1;

            // Both values carry the +1 bias, so the wrapping difference is
            // the true distance. A zero delta is a 64 KiB alias of the
            // current position itself; following its chain link would loop.
            let delta = scan.wrapping_sub(cur) as usize;
            if delta == 0 || delta > pos {
                break;
            }

            let cand = pos - delta;

            // Cheap rejection before the full comparison: the candidate must
            // at least extend the current best by one byte.
            if data[pos + best_len] == data[cand + best_len] && data[pos] == data[cand] {
                let len = match_len(&data[pos..], &data[cand..], max_possible);
                if len > best_len {
                    best_len = len;
                    best = Some(Match {
                        offset: delta as u16,
                        len,
                    });
                    if len >= max_possible {
                        break;
                    }
                }
            }

            cur = self.chain[cand & CHAIN_MASK];
        }

        best
    }
}
