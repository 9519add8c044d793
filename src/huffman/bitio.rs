//! LSB-first bit I/O over byte slices.
//!
//! The bitstream convention is DEFLATE-style: values are packed from the
//! least-significant bit of each byte upward. Canonical Huffman codes are
//! numerically MSB-first, so they are bit-reversed before writing (and the
//! decode table is indexed by the reversed code).

/// Reverse the low `len` bits of `code`.
#[inline]
pub fn bit_reverse(code: u32, len: u32) -> u32 {
    let mut r = 0;
    let mut c = code;
    for _ in 0..len {
        r = (r << 1) | (c & 1);
        c >>= 1;
    }
    r
}

// ─────────────────────────────────────────────────────────────────────────────
// Writer
// ─────────────────────────────────────────────────────────────────────────────

/// Accumulates bits into a 64-bit reservoir and spills whole bytes into the
/// destination slice. Running out of destination space sets a sticky overflow
/// flag instead of failing mid-write; callers check [`BitWriter::overflowed`]
/// once at the end.
pub struct BitWriter<'a> {
    dst: &'a mut [u8],
    pos: usize,
    bits: u64,
    count: u32,
    overflow: bool,
}

impl<'a> BitWriter<'a> {
    pub fn new(dst: &'a mut [u8]) -> Self {
        Self {
            dst,
            pos: 0,
            bits: 0,
            count: 0,
            overflow: false,
        }
    }

    /// Append the low `nbits` bits of `value`, LSB-first. `nbits <= 24`.
    #[inline]
    pub fn put(&mut self, value: u32, nbits: u32) {
        let value = value & ((1u32 << nbits) - 1);
        self.bits |= u64::from(value) << self.count;
        self.count += nbits;
        while self.count >= 8 {
            if self.pos < self.dst.len() {
                self.dst[self.pos] = (self.bits & 0xFF) as u8;
                self.pos += 1;
            } else {
                self.overflow = true;
            }
            self.bits >>= 8;
            self.count -= 8;
        }
    }

    /// Append a canonical Huffman code (bit-reversed for the LSB stream).
    #[inline]
    pub fn put_code(&mut self, code: u32, len: u32) {
        self.put(bit_reverse(code, len), len);
    }

    /// Flush any partial byte, zero-padded to a byte boundary.
    pub fn flush(&mut self) {
        if self.count > 0 {
            if self.pos < self.dst.len() {
                self.dst[self.pos] = (self.bits & 0xFF) as u8;
                self.pos += 1;
            } else {
                self.overflow = true;
            }
            self.bits = 0;
            self.count = 0;
        }
    }

    /// Bytes emitted so far.
    pub fn written(&self) -> usize {
        self.pos
    }

    /// Whether any write fell past the end of the destination.
    pub fn overflowed(&self) -> bool {
        self.overflow
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Reader
// ─────────────────────────────────────────────────────────────────────────────

/// Mirror of [`BitWriter`]: refills a 64-bit reservoir from the source slice
/// and serves LSB-first peeks/reads. Reading past the end of the source
/// yields zero bits; decoders detect truncation via symbol bounds, not here.
pub struct BitReader<'a> {
    src: &'a [u8],
    pos: usize,
    bits: u64,
    count: u32,
}

impl<'a> BitReader<'a> {
    pub fn new(src: &'a [u8]) -> Self {
        Self {
            src,
            pos: 0,
            bits: 0,
            count: 0,
        }
    }

    /// Top up the reservoir to at least 56 bits (or until the source ends).
    #[inline]
    pub fn refill(&mut self) {
        while self.count <= 56 && self.pos < self.src.len() {
            self.bits |= u64::from(self.src[self.pos]) << self.count;
            self.pos += 1;
            self.count += 8;
        }
    }

    /// Look at the next `nbits` bits without consuming them.
    #[inline]
    pub fn peek(&self, nbits: u32) -> u32 {
        (self.bits & ((1u64 << nbits) - 1)) as u32
    }

    #[inline]
    pub fn consume(&mut self, nbits: u32) {
        self.bits >>= nbits;
        self.count = self.count.saturating_sub(nbits);
    }

    /// Read and consume `nbits` bits (refilling first).
    #[inline]
    pub fn read(&mut self, nbits: u32) -> u32 {
        self.refill();
        let v = self.peek(nbits);
        self.consume(nbits);
        v
    }

    /// Total bits consumed from the source so far. The reservoir may have
    /// pre-read bytes beyond this point; block framing uses this count to
    /// resync exactly on the next byte boundary.
    #[inline]
    pub fn bits_consumed(&self) -> usize {
        self.pos * 8 - self.count as usize
    }

    /// True once every source bit has been consumed.
    pub fn exhausted(&self) -> bool {
        self.pos >= self.src.len() && self.count == 0
    }
}
