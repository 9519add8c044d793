// Tests for the binding layer: capacity bound, call marshaling, and result
// interpretation — exercised against engine test doubles so no behaviour of
// the real codec leaks into the contract checks.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use zyphrax::{compress_bound, Binding, BindingError, CodecEngine, ZyphraxParams};

// ─────────────────────────────────────────────────────────────────────────────
// Engine doubles
// ─────────────────────────────────────────────────────────────────────────────

/// Always reports failure (raw return 0).
struct FailingEngine;

impl CodecEngine for FailingEngine {
    fn compress_bound(&self, src_size: usize) -> usize {
        src_size + 64
    }
    fn compress(&self, _src: &[u8], _dst: &mut [u8], _params: &ZyphraxParams) -> usize {
        0
    }
}

/// Claims to have written more bytes than the destination holds.
struct LyingEngine;

impl CodecEngine for LyingEngine {
    fn compress_bound(&self, src_size: usize) -> usize {
        src_size + 64
    }
    fn compress(&self, _src: &[u8], dst: &mut [u8], _params: &ZyphraxParams) -> usize {
        dst.len() + 1
    }
}

/// Reports a bound smaller than the input itself.
struct BrokenBoundEngine;

impl CodecEngine for BrokenBoundEngine {
    fn compress_bound(&self, src_size: usize) -> usize {
        src_size / 2
    }
    fn compress(&self, _src: &[u8], dst: &mut [u8], _params: &ZyphraxParams) -> usize {
        dst.len()
    }
}

/// Counts invocations and writes a recognisable payload.
struct CountingEngine {
    calls: Arc<AtomicUsize>,
}

impl CodecEngine for CountingEngine {
    fn compress_bound(&self, src_size: usize) -> usize {
        src_size + 16
    }
    fn compress(&self, src: &[u8], dst: &mut [u8], _params: &ZyphraxParams) -> usize {
        self.calls.fetch_add(1, Ordering::SeqCst);
        dst[..src.len()].copy_from_slice(src);
        src.len()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Failure propagation
// ─────────────────────────────────────────────────────────────────────────────

/// A raw return of 0 must surface as CodecFailure with no output observable.
#[test]
fn zero_return_raises_codec_failure() {
    let binding = Binding::with_engine(FailingEngine);
    let err = binding.compress(b"some input data").unwrap_err();
    assert_eq!(err, BindingError::CodecFailure);
}

/// CodecFailure is an error, never an empty-success conversion.
#[test]
fn codec_failure_is_not_an_empty_vec() {
    let binding = Binding::with_engine(FailingEngine);
    assert!(binding.compress(b"x").is_err());
}

// ─────────────────────────────────────────────────────────────────────────────
// Contract violation
// ─────────────────────────────────────────────────────────────────────────────

/// A reported length above the supplied capacity must raise
/// ContractViolation, never a truncated success.
#[test]
fn overlong_report_raises_contract_violation() {
    let binding = Binding::with_engine(LyingEngine);
    let err = binding.compress(b"payload").unwrap_err();
    match err {
        BindingError::ContractViolation { reported, capacity } => {
            assert_eq!(reported, capacity + 1);
        }
        other => panic!("expected ContractViolation, got {other:?}"),
    }
}

/// A bound below the input length cannot cover the raw-store path and is
/// rejected before the engine is ever invoked.
#[test]
fn implausible_bound_raises_contract_violation() {
    let binding = Binding::with_engine(BrokenBoundEngine);
    let err = binding.compress(&[0u8; 1000]).unwrap_err();
    assert!(matches!(err, BindingError::ContractViolation { .. }));
}

// ─────────────────────────────────────────────────────────────────────────────
// Marshaling discipline
// ─────────────────────────────────────────────────────────────────────────────

/// The engine is invoked exactly once per call.
#[test]
fn engine_invoked_exactly_once() {
    let calls = Arc::new(AtomicUsize::new(0));
    let binding = Binding::with_engine(CountingEngine {
        calls: Arc::clone(&calls),
    });
    let out = binding.compress(b"abcdef").unwrap();
    assert_eq!(out, b"abcdef");
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    // Second call: one more invocation, no state carried over.
    binding.compress(b"ghijkl").unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

/// Empty input short-circuits without touching the engine at all.
#[test]
fn empty_input_short_circuits() {
    struct PanickingEngine;
    impl CodecEngine for PanickingEngine {
        fn compress_bound(&self, _src_size: usize) -> usize {
            panic!("bound must not be computed for empty input");
        }
        fn compress(&self, _src: &[u8], _dst: &mut [u8], _params: &ZyphraxParams) -> usize {
            panic!("engine must not be invoked for empty input");
        }
    }
    let binding = Binding::with_engine(PanickingEngine);
    assert_eq!(binding.compress(&[]).unwrap(), Vec::<u8>::new());
}

/// Unused destination capacity never leaks into the result.
#[test]
fn result_is_truncated_to_reported_length() {
    struct HalfEngine;
    impl CodecEngine for HalfEngine {
        fn compress_bound(&self, src_size: usize) -> usize {
            src_size * 3
        }
        fn compress(&self, src: &[u8], dst: &mut [u8], _params: &ZyphraxParams) -> usize {
            dst[..src.len()].copy_from_slice(src);
            src.len()
        }
    }
    let binding = Binding::with_engine(HalfEngine);
    let out = binding.compress(b"0123456789").unwrap();
    assert_eq!(out.len(), 10);
    assert_eq!(out, b"0123456789");
}

// ─────────────────────────────────────────────────────────────────────────────
// Bound estimator
// ─────────────────────────────────────────────────────────────────────────────

/// Pure function: repeated calls with the same size agree.
#[test]
fn bound_is_idempotent() {
    for n in [0usize, 1, 255, 256, 65_536, 1_000_000] {
        assert_eq!(compress_bound(n), compress_bound(n));
    }
}

/// Monotone and always above the input (raw storage must fit).
#[test]
fn bound_dominates_input_size() {
    let mut prev = 0;
    for n in [0usize, 1, 100, 65_535, 65_536, 1 << 20] {
        let b = compress_bound(n);
        assert!(b > n, "bound({n}) = {b} must exceed n");
        assert!(b >= prev);
        prev = b;
    }
}

/// Empty input still gets a nonzero capacity (header bytes).
#[test]
fn bound_of_zero_is_positive() {
    assert!(compress_bound(0) > 0);
}

/// Real engine: output length never exceeds the advertised bound.
#[test]
fn output_within_bound_for_real_engine() {
    let inputs: Vec<Vec<u8>> = vec![
        b"a".to_vec(),
        b"hello hello hello hello".to_vec(),
        (0..10_000u32).flat_map(|i| i.to_le_bytes()).collect(),
        vec![0u8; 100_000],
    ];
    for data in inputs {
        let out = zyphrax::compress(&data).unwrap();
        assert!(
            out.len() <= compress_bound(data.len()),
            "len {} > bound {}",
            out.len(),
            compress_bound(data.len())
        );
    }
}
