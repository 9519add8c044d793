//! The caller-facing binding: capacity computation, call marshaling, and
//! result interpretation around a [`CodecEngine`].
//!
//! This is the layer a managed-runtime binding would implement with pinned
//! buffers and guaranteed-cleanup blocks. In Rust the pinning collapses to
//! ordinary ownership — a `&[u8]`/`&mut [u8]` borrow is address-stable for
//! the duration of the call by construction, and every exit path releases
//! the destination buffer via RAII. What remains load-bearing here is the
//! contract itself:
//!
//! 1. size the destination by the engine's bound,
//! 2. invoke the engine exactly once per call,
//! 3. interpret the raw byte count strictly — `0` is a codec failure, a
//!    count above the supplied capacity is a contract violation, anything
//!    else truncates the buffer to exactly that length.

use core::fmt;

use crate::engine::{CodecEngine, ZyphraxEngine};
use crate::frame::types::ZyphraxParams;

// ─────────────────────────────────────────────────────────────────────────────
// Error type
// ─────────────────────────────────────────────────────────────────────────────

/// Failures surfaced by the binding layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingError {
    /// The engine reported failure (returned 0). Recoverable: the caller may
    /// retry with different parameters. No output bytes exist.
    CodecFailure,
    /// The engine claimed to have written more bytes than the capacity it
    /// was given, or produced an impossible bound. Memory may already be
    /// corrupt; treat as non-recoverable and never ignore it.
    ContractViolation { reported: usize, capacity: usize },
    /// The destination buffer could not be allocated.
    Allocation(usize),
}

impl fmt::Display for BindingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BindingError::CodecFailure => write!(f, "codec reported failure"),
            BindingError::ContractViolation { reported, capacity } => write!(
                f,
                "codec contract violation: reported {reported} bytes for a \
                 {capacity}-byte destination"
            ),
            BindingError::Allocation(n) => {
                write!(f, "failed to allocate {n}-byte destination buffer")
            }
        }
    }
}

impl std::error::Error for BindingError {}

// ─────────────────────────────────────────────────────────────────────────────
// Result interpreter
// ─────────────────────────────────────────────────────────────────────────────

/// Map the engine's raw return value onto the destination buffer.
///
/// Pure in `(raw, dst.len())`: performs no I/O and can only fail on the
/// sentinel or the capacity invariant. On success the buffer is truncated to
/// exactly `raw` bytes, so unused capacity never leaks into the result; on
/// failure the buffer is dropped — its contents are undefined and must not
/// be observed.
pub fn interpret(raw: usize, mut dst: Vec<u8>) -> Result<Vec<u8>, BindingError> {
    let capacity = dst.len();
    match raw {
        0 => Err(BindingError::CodecFailure),
        n if n > capacity => Err(BindingError::ContractViolation {
            reported: n,
            capacity,
        }),
        n => {
            dst.truncate(n);
            Ok(dst)
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Binding
// ─────────────────────────────────────────────────────────────────────────────

/// A configured compressor over some engine.
///
/// Stateless across calls: each [`Binding::compress`] builds its own
/// parameter record and destination buffer, so independent calls on
/// independent data are data-race-free and may run concurrently.
#[derive(Debug, Clone)]
pub struct Binding<E: CodecEngine> {
    engine: E,
    params: ZyphraxParams,
}

impl Binding<ZyphraxEngine> {
    /// Binding over the in-process engine with default parameters
    /// (level 3, 64 KiB blocks, checksum off).
    pub fn new() -> Self {
        Self::with_engine(ZyphraxEngine)
    }
}

impl Default for Binding<ZyphraxEngine> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: CodecEngine> Binding<E> {
    /// Binding over an arbitrary engine with default parameters.
    pub fn with_engine(engine: E) -> Self {
        Self {
            engine,
            params: ZyphraxParams::default(),
        }
    }

    /// Replace the parameter record used for subsequent calls.
    pub fn params(mut self, params: ZyphraxParams) -> Self {
        self.params = params;
        self
    }

    /// Compress `data`, returning exactly the compressed bytes.
    ///
    /// Empty input short-circuits to an empty result without invoking the
    /// engine (the engine itself also accepts zero-length input, producing a
    /// header-only frame; callers wanting that go through
    /// [`crate::frame::compress_frame`] directly).
    pub fn compress(&self, data: &[u8]) -> Result<Vec<u8>, BindingError> {
        if data.is_empty() {
            return Ok(Vec::new());
        }

        let capacity = self.engine.compress_bound(data.len());
        // A bound below the input length cannot cover the raw-store path;
        // the estimator is broken and the call must not proceed.
        if capacity < data.len() {
            return Err(BindingError::ContractViolation {
                reported: capacity,
                capacity: data.len(),
            });
        }

        let mut dst: Vec<u8> = Vec::new();
        dst.try_reserve_exact(capacity)
            .map_err(|_| BindingError::Allocation(capacity))?;
        dst.resize(capacity, 0);

        let raw = self.engine.compress(data, &mut dst, &self.params);
        interpret(raw, dst)
    }
}

/// One-shot compression with the default engine and parameters — the
/// binding-facing surface: bytes in, compressed bytes out, empty in ⇒ empty
/// out.
pub fn compress(data: &[u8]) -> Result<Vec<u8>, BindingError> {
    Binding::new().compress(data)
}
