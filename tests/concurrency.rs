// Concurrency: the contract carries no shared state, so N independent
// compressions on disjoint buffers must equal their sequential results.

use std::thread;

use zyphrax::frame::decompress_frame_to_vec;

fn sample(i: usize) -> Vec<u8> {
    // Distinct per-thread payloads, all compressible.
    format!("thread {i} payload: {}", "abcdefgh".repeat(2_000 + i * 37)).into_bytes()
}

#[test]
fn concurrent_calls_match_sequential() {
    const N: usize = 8;

    let sequential: Vec<Vec<u8>> = (0..N).map(|i| zyphrax::compress(&sample(i)).unwrap()).collect();

    let handles: Vec<_> = (0..N)
        .map(|i| thread::spawn(move || zyphrax::compress(&sample(i)).unwrap()))
        .collect();
    let concurrent: Vec<Vec<u8>> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    for i in 0..N {
        assert_eq!(sequential[i], concurrent[i], "thread {i} diverged");
        // And each result still decodes to its own input.
        assert_eq!(decompress_frame_to_vec(&concurrent[i]).unwrap(), sample(i));
    }
}

#[test]
fn concurrent_roundtrips_do_not_interfere() {
    let handles: Vec<_> = (0..16)
        .map(|i| {
            thread::spawn(move || {
                let data = sample(i);
                let compressed = zyphrax::compress(&data).unwrap();
                assert_eq!(decompress_frame_to_vec(&compressed).unwrap(), data);
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }
}
