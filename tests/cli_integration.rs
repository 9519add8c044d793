// End-to-end CLI tests: run the built `zyphrax` binary against temp files.

use std::fs;
use std::process::Command;

fn zyphrax_bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_zyphrax"))
}

#[test]
fn cli_compress_then_decompress_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.bin");
    let packed = dir.path().join("input.zyx");
    let unpacked = dir.path().join("output.bin");

    let data = b"cli roundtrip payload ".repeat(5_000);
    fs::write(&input, &data).unwrap();

    let status = zyphrax_bin()
        .args([input.as_os_str(), packed.as_os_str()])
        .status()
        .unwrap();
    assert!(status.success());
    assert!(fs::metadata(&packed).unwrap().len() < data.len() as u64);

    let status = zyphrax_bin()
        .arg("-d")
        .args([packed.as_os_str(), unpacked.as_os_str()])
        .status()
        .unwrap();
    assert!(status.success());
    assert_eq!(fs::read(&unpacked).unwrap(), data);
}

#[test]
fn cli_checksum_flag_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in");
    let packed = dir.path().join("out.zyx");
    let unpacked = dir.path().join("back");

    let data = b"checksummed cli data".repeat(1_000);
    fs::write(&input, &data).unwrap();

    assert!(zyphrax_bin()
        .arg("-C")
        .args([input.as_os_str(), packed.as_os_str()])
        .status()
        .unwrap()
        .success());
    assert!(zyphrax_bin()
        .arg("-d")
        .args([packed.as_os_str(), unpacked.as_os_str()])
        .status()
        .unwrap()
        .success());
    assert_eq!(fs::read(&unpacked).unwrap(), data);
}

#[test]
fn cli_decompress_garbage_fails() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("garbage");
    let output = dir.path().join("out");
    fs::write(&input, b"definitely not a zyphrax frame").unwrap();

    let status = zyphrax_bin()
        .arg("-d")
        .args([input.as_os_str(), output.as_os_str()])
        .status()
        .unwrap();
    assert!(!status.success());
}

#[test]
fn cli_empty_file_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("empty");
    let packed = dir.path().join("empty.zyx");
    let unpacked = dir.path().join("empty.out");
    fs::write(&input, b"").unwrap();

    assert!(zyphrax_bin()
        .args([input.as_os_str(), packed.as_os_str()])
        .status()
        .unwrap()
        .success());
    // Header-only frame.
    assert_eq!(fs::metadata(&packed).unwrap().len(), 12);

    assert!(zyphrax_bin()
        .arg("-d")
        .args([packed.as_os_str(), unpacked.as_os_str()])
        .status()
        .unwrap()
        .success());
    assert_eq!(fs::metadata(&unpacked).unwrap().len(), 0);
}
