// Unit tests for the hash-chain match finder.

use zyphrax::lz77::{match_len, MatchFinder, MAX_MATCH, MIN_MATCH};

// ---------------------------------------------------------------------------
// match_len
// ---------------------------------------------------------------------------

#[test]
fn match_len_identical_slices() {
    let a = vec![7u8; 100];
    assert_eq!(match_len(&a, &a, 100), 100);
}

#[test]
fn match_len_first_difference() {
    let a = b"abcdefghijklmnop";
    let b = b"abcdefghXjklmnop";
    assert_eq!(match_len(a, b, a.len()), 8);
}

#[test]
fn match_len_respects_max() {
    let a = vec![0u8; 64];
    assert_eq!(match_len(&a, &a, 10), 10);
}

#[test]
fn match_len_difference_in_tail() {
    // Difference lands in the byte-loop tail after the 8-byte chunks.
    let a = b"0123456789abc";
    let b = b"0123456789abX";
    assert_eq!(match_len(a, b, a.len()), 12);
}

// ---------------------------------------------------------------------------
// MatchFinder
// ---------------------------------------------------------------------------

/// A repeated phrase must be found as a back-reference with the right offset.
#[test]
fn finds_repeated_phrase() {
    let data = b"zyphrax codec zyphrax codec";
    let mut mf = MatchFinder::new(3);

    // Walk positions like the block encoder does.
    let mut pos = 0;
    let mut found = None;
    while pos < data.len() {
        match mf.find_best_match(data, pos) {
            Some(m) => {
                found = Some((pos, m));
                break;
            }
            None => pos += 1,
        }
    }

    let (pos, m) = found.expect("repetition should produce a match");
    assert_eq!(pos, 14);
    assert_eq!(m.offset, 14);
    assert!(m.len >= MIN_MATCH);
    assert_eq!(&data[pos..pos + m.len], &data[pos - 14..pos - 14 + m.len]);
}

/// All-distinct 4-grams: no match may be reported.
#[test]
fn no_match_in_unique_data() {
    let data: Vec<u8> = (0..255u8).collect();
    let mut mf = MatchFinder::new(3);
    for pos in 0..data.len() {
        assert!(mf.find_best_match(&data, pos).is_none());
    }
}

/// Fewer than MIN_MATCH bytes remaining can never match.
#[test]
fn tail_shorter_than_min_match() {
    let data = b"aaaaaaaa";
    let mut mf = MatchFinder::new(3);
    for pos in 0..data.len() {
        let _ = mf.find_best_match(data, pos);
    }
    // Positions with < 4 bytes left return None regardless of history.
    let mut mf = MatchFinder::new(3);
    let _ = mf.find_best_match(data, 0);
    assert!(mf.find_best_match(data, data.len() - MIN_MATCH + 1).is_none());
}

/// A long run of one byte yields overlapping matches (offset can be smaller
/// than the length) capped at MAX_MATCH.
#[test]
fn run_produces_overlapping_match() {
    let data = vec![0xAAu8; 1000];
    let mut mf = MatchFinder::new(3);
    assert!(mf.find_best_match(&data, 0).is_none()); // nothing inserted yet
    let m = mf.find_best_match(&data, 1).expect("run should match");
    assert_eq!(m.offset, 1);
    assert_eq!(m.len, MAX_MATCH.min(data.len() - 1));
}

/// Higher levels search at least as hard; the reported match never gets
/// shorter when the level goes up.
#[test]
fn deeper_levels_never_find_worse_matches() {
    // Data with several candidate matches of different lengths at the same
    // hash: a short early copy and a longer later one.
    let mut data = Vec::new();
    data.extend_from_slice(b"patternAAAA--------");
    data.extend_from_slice(b"patternBBBBBBBB----");
    data.extend_from_slice(b"patternBBBBBBBB!!!!");
    let probe = data.len() - 19; // start of the third "pattern…"

    let mut lens = Vec::new();
    for level in [1u32, 3, 9] {
        let mut mf = MatchFinder::new(level);
        // Replay history so the finder knows both earlier occurrences.
        let mut pos = 0;
        while pos < probe {
            let _ = mf.find_best_match(&data, pos);
            pos += 1;
        }
        let m = mf.find_best_match(&data, probe).expect("match exists");
        lens.push(m.len);
    }
    assert!(lens[0] <= lens[1] && lens[1] <= lens[2], "lens: {lens:?}");
}
