//! The codec as a two-operation capability.
//!
//! The binding layer ([`crate::binding`]) never calls the frame encoder
//! directly; it goes through [`CodecEngine`], so the marshaling and
//! result-interpretation logic can be exercised against a test double with
//! no real codec behind it. Production wiring supplies [`ZyphraxEngine`].
//!
//! The `compress` operation deliberately keeps the raw wire-level return
//! convention — a plain byte count with `0` as the failure sentinel — rather
//! than a `Result`. Interpreting that raw value (including the
//! written-more-than-capacity case) is the result interpreter's job, and it
//! applies equally to the native engine behind the C ABI and to this one.

use crate::frame::compress_frame;
use crate::frame::header::compress_bound;
use crate::frame::types::ZyphraxParams;

/// A compression engine: worst-case bound plus a single-shot transform.
pub trait CodecEngine {
    /// Worst-case output size for `src_size` input bytes. Pure and
    /// deterministic; must not depend on buffer contents.
    fn compress_bound(&self, src_size: usize) -> usize;

    /// Compress `src` into `dst`, returning the number of bytes written or
    /// `0` on failure. Must never write past `dst.len()`. Synchronous and
    /// single-shot: no state survives the call.
    fn compress(&self, src: &[u8], dst: &mut [u8], params: &ZyphraxParams) -> usize;
}

/// The in-process Zyphrax engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZyphraxEngine;

impl CodecEngine for ZyphraxEngine {
    #[inline]
    fn compress_bound(&self, src_size: usize) -> usize {
        compress_bound(src_size)
    }

    fn compress(&self, src: &[u8], dst: &mut [u8], params: &ZyphraxParams) -> usize {
        compress_frame(src, dst, params).unwrap_or(0)
    }
}
