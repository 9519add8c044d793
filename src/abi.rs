//! C-ABI shims — export the three `libzyphrax` symbols.
//!
//! Enabled with:
//!   cargo build --release --features c-abi
//!
//! The produced `target/release/libzyphrax.a` can replace the native engine
//! behind existing language bindings. Size-typed values are `size_t` on the
//! C side and `usize` here — pointer-width on every platform, no truncation.

use std::slice;

use crate::frame::header::compress_bound;
use crate::frame::types::ZyphraxParams;
use crate::frame::{compress_frame, decompress_frame};

// ─────────────────────────────────────────────────────────────────────────────
// zyphrax_compress_bound
//
// size_t zyphrax_compress_bound(size_t src_size);
//
// Pure worst-case bound; never returns 0.
// ─────────────────────────────────────────────────────────────────────────────
#[no_mangle]
pub extern "C" fn zyphrax_compress_bound(src_size: usize) -> usize {
    compress_bound(src_size)
}

// ─────────────────────────────────────────────────────────────────────────────
// zyphrax_compress
//
// size_t zyphrax_compress(const uint8_t *src, size_t src_size,
//                         uint8_t *dst, size_t dst_cap,
//                         const zyphrax_params_t *params);
//
// Returns bytes written to dst, or 0 on any failure. NULL params selects
// the defaults (level 3, 64 KiB blocks, checksum off).
// ─────────────────────────────────────────────────────────────────────────────
#[no_mangle]
pub unsafe extern "C" fn zyphrax_compress(
    src: *const u8,
    src_size: usize,
    dst: *mut u8,
    dst_cap: usize,
    params: *const ZyphraxParams,
) -> usize {
    if dst.is_null() || (src.is_null() && src_size > 0) {
        return 0;
    }
    let src_slice: &[u8] = if src_size == 0 {
        &[]
    } else {
        slice::from_raw_parts(src, src_size)
    };
    let dst_slice = slice::from_raw_parts_mut(dst, dst_cap);
    let p = if params.is_null() {
        ZyphraxParams::default()
    } else {
        *params
    };
    match compress_frame(src_slice, dst_slice, &p) {
        Ok(n) => n,
        Err(_) => 0,
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// zyphrax_decompress
//
// size_t zyphrax_decompress(const uint8_t *src, size_t src_size,
//                           uint8_t *dst, size_t dst_cap);
//
// Returns decoded bytes, or 0 on failure. The native convention cannot
// distinguish "error" from "empty payload": a header-only frame also yields
// 0. Callers needing the distinction use the Rust API.
// ─────────────────────────────────────────────────────────────────────────────
#[no_mangle]
pub unsafe extern "C" fn zyphrax_decompress(
    src: *const u8,
    src_size: usize,
    dst: *mut u8,
    dst_cap: usize,
) -> usize {
    if src.is_null() || (dst.is_null() && dst_cap > 0) {
        return 0;
    }
    let src_slice = slice::from_raw_parts(src, src_size);
    let dst_slice: &mut [u8] = if dst_cap == 0 {
        &mut []
    } else {
        slice::from_raw_parts_mut(dst, dst_cap)
    };
    match decompress_frame(src_slice, dst_slice) {
        Ok(n) => n,
        Err(_) => 0,
    }
}
