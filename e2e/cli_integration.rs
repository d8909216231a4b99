//! Black-box CLI integration tests driving the built `lz8s`/`lz8dec`
//! binaries via `std::process::Command`.

use std::fs;
use std::path::PathBuf;
use std::process::Command;
use tempfile::TempDir;

fn lz8s_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_lz8s"))
}

fn lz8dec_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_lz8dec"))
}

fn make_temp_input(content: &[u8]) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let input_path = dir.path().join("input.bin");
    fs::write(&input_path, content).unwrap();
    (dir, input_path)
}

// ── 1. File-to-file compress / decompress roundtrip ─────────────────────────

#[test]
fn cli_compress_decompress_roundtrip_through_files() {
    let content = "Hello, LZ8S! Hello, LZ8S! Hello, LZ8S!\n".repeat(50);
    let (dir, input) = make_temp_input(content.as_bytes());

    let compressed = dir.path().join("output.lz8s");
    let roundtrip = dir.path().join("roundtrip.bin");

    let status = Command::new(lz8s_bin())
        .args(["-q", input.to_str().unwrap(), compressed.to_str().unwrap()])
        .status()
        .expect("failed to run lz8s");
    assert!(status.success(), "lz8s compress should exit 0");
    assert!(compressed.exists());

    let status = Command::new(lz8dec_bin())
        .args([compressed.to_str().unwrap(), roundtrip.to_str().unwrap()])
        .status()
        .expect("failed to run lz8dec");
    assert!(status.success(), "lz8dec should exit 0");

    assert_eq!(fs::read(&roundtrip).unwrap(), content.as_bytes());
}

// ── 2. stdin/stdout pipeline, no files at all ───────────────────────────────

#[test]
fn cli_roundtrip_through_stdin_stdout() {
    let data = b"the quick brown fox jumps over the lazy dog";

    let compress = Command::new(lz8s_bin())
        .arg("-q")
        .stdin(std::process::Stdio::piped())
        .stdout(std::process::Stdio::piped())
        .spawn()
        .expect("failed to spawn lz8s");
    {
        use std::io::Write;
        compress.stdin.as_ref().unwrap().write_all(data).unwrap();
    }
    let compressed_out = compress.wait_with_output().unwrap();
    assert!(compressed_out.status.success());

    let decompress = Command::new(lz8dec_bin())
        .stdin(std::process::Stdio::piped())
        .stdout(std::process::Stdio::piped())
        .spawn()
        .expect("failed to spawn lz8dec");
    {
        use std::io::Write;
        decompress.stdin.as_ref().unwrap().write_all(&compressed_out.stdout).unwrap();
    }
    let decompressed_out = decompress.wait_with_output().unwrap();
    assert!(decompressed_out.status.success());
    assert_eq!(decompressed_out.stdout, data);
}

// ── 3. -h / --help ───────────────────────────────────────────────────────────

#[test]
fn cli_help_flag_exits_zero_and_mentions_usage() {
    for bin in [lz8s_bin(), lz8dec_bin()] {
        let output = Command::new(&bin).arg("-h").output().expect("failed to run -h");
        assert!(output.status.success(), "-h should exit 0 for {bin:?}");
        let combined = format!(
            "{}{}",
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        );
        assert!(combined.to_lowercase().contains("usage"), "got: {combined}");
    }
}

// ── 4. Non-default parameters must match on both ends ───────────────────────

#[test]
fn cli_custom_parameters_round_trip() {
    let data = "mississippi river mississippi".repeat(8);
    let (dir, input) = make_temp_input(data.as_bytes());

    let compressed = dir.path().join("custom.lz8s");
    let roundtrip = dir.path().join("custom_out.bin");

    let status = Command::new(lz8s_bin())
        .args(["-q", "-o16", "-m500", "-l500", input.to_str().unwrap(), compressed.to_str().unwrap()])
        .status()
        .unwrap();
    assert!(status.success());

    let status = Command::new(lz8dec_bin())
        .args(["-o16", "-m500", "-l500", compressed.to_str().unwrap(), roundtrip.to_str().unwrap()])
        .status()
        .unwrap();
    assert!(status.success());

    assert_eq!(fs::read(&roundtrip).unwrap(), data.as_bytes());
}

// ── 5. Mismatched parameters produce garbage, not a crash ───────────────────

#[test]
fn cli_mismatched_parameters_do_not_crash_the_decoder() {
    let data = b"AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA";
    let (dir, input) = make_temp_input(data);
    let compressed = dir.path().join("mismatch.lz8s");
    let roundtrip = dir.path().join("mismatch_out.bin");

    Command::new(lz8s_bin())
        .args(["-q", input.to_str().unwrap(), compressed.to_str().unwrap()])
        .status()
        .unwrap();

    // Decode with a different offset width than it was encoded with.
    let status = Command::new(lz8dec_bin())
        .args(["-o16", compressed.to_str().unwrap(), roundtrip.to_str().unwrap()])
        .status()
        .unwrap();
    // The decoder never fails hard on misinterpreted bytes; it just writes
    // whatever bytes the state machine produces.
    assert!(status.success());
}

// ── 6. Invalid parameters are rejected before any I/O ───────────────────────

#[test]
fn cli_rejects_out_of_range_max_mlen() {
    let (dir, input) = make_temp_input(b"data");
    let output = Command::new(lz8s_bin())
        .args(["-m0", input.to_str().unwrap(), "/dev/null"])
        .current_dir(dir.path())
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("32895"));
}

#[test]
fn cli_rejects_absolute_address_with_unsupported_offset_width() {
    let (dir, input) = make_temp_input(b"data");
    let output = Command::new(lz8s_bin())
        .args(["-o4", "-A", "0", input.to_str().unwrap(), "/dev/null"])
        .current_dir(dir.path())
        .output()
        .unwrap();
    assert!(!output.status.success());
}

// ── 7. Nonexistent input file is an I/O error, not a panic ──────────────────

#[test]
fn cli_nonexistent_input_is_a_clean_error() {
    let dir = TempDir::new().unwrap();
    let status = Command::new(lz8s_bin())
        .args(["/nonexistent_path_abc123_lz8s_test", "/tmp/out_lz8s_test.lz8s"])
        .current_dir(dir.path())
        .status()
        .expect("failed to run lz8s");
    assert!(!status.success());
}

// ── 8. Truncated stream decodes best-effort, still exits 0 ──────────────────

#[test]
fn cli_decoder_is_best_effort_on_truncated_input() {
    let dir = TempDir::new().unwrap();
    // Claims a 5-byte literal but only 2 follow: truncated mid-payload.
    let truncated = dir.path().join("truncated.lz8s");
    fs::write(&truncated, [0x05, b'h', b'i']).unwrap();

    let out = dir.path().join("out.bin");
    let output = Command::new(lz8dec_bin())
        .args([truncated.to_str().unwrap(), out.to_str().unwrap()])
        .output()
        .expect("failed to run lz8dec");

    assert!(output.status.success(), "truncated decode is still a clean exit");
    assert_eq!(fs::read(&out).unwrap(), b"hi");
}

// ── 9. Verbose stats are printed to stderr, not stdout ──────────────────────

#[test]
fn cli_verbose_stats_go_to_stderr() {
    let (dir, input) = make_temp_input(b"AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA");
    let compressed = dir.path().join("verbose.lz8s");

    let output = Command::new(lz8s_bin())
        .args(["-v", input.to_str().unwrap(), compressed.to_str().unwrap()])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(output.stdout.is_empty(), "compressed bytes went to the file, not stdout");
    assert!(!output.stderr.is_empty(), "-v should print stats to stderr");
    assert!(String::from_utf8_lossy(&output.stderr).contains("ratio"));
}

// ── 10. Ratio line is printed even under -q; a single -v shows the histogram ─

#[test]
fn cli_quiet_still_prints_the_ratio_line() {
    let (dir, input) = make_temp_input(b"the quick brown fox jumps over the lazy dog");
    let compressed = dir.path().join("quiet.lz8s");

    let output = Command::new(lz8s_bin())
        .args(["-q", input.to_str().unwrap(), compressed.to_str().unwrap()])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ratio"), "-q must still print the ratio line, got: {stderr}");
    // -q hides the byte/bit breakdown that the default verbosity shows.
    assert!(!stderr.contains("Compression Information"));
}

#[test]
fn cli_default_verbosity_shows_the_byte_bit_breakdown() {
    let (dir, input) = make_temp_input(b"AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA");
    let compressed = dir.path().join("default.lz8s");

    let output = Command::new(lz8s_bin())
        .args([input.to_str().unwrap(), compressed.to_str().unwrap()])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ratio"));
    assert!(stderr.contains("Compression Information"));
    assert!(!stderr.contains("MPOS"), "histogram needs -v, got: {stderr}");
}

#[test]
fn cli_single_dash_v_shows_the_full_histogram() {
    let (dir, input) = make_temp_input(b"AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA");
    let compressed = dir.path().join("histogram.lz8s");

    let output = Command::new(lz8s_bin())
        .args(["-v", input.to_str().unwrap(), compressed.to_str().unwrap()])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("MPOS"), "a single -v should show the histogram, got: {stderr}");
}

// ── 11. Round-trip through the real binaries for a compressed stream larger
//        than the 128 KiB original-data cap (a large incompressible input) ──

#[test]
fn cli_round_trips_an_incompressible_input_whose_compressed_stream_exceeds_128kib() {
    let data: Vec<u8> = (0..131_072u32).map(|i| ((i * 2654435761) >> 16) as u8).collect();
    let (dir, input) = make_temp_input(&data);

    let compressed = dir.path().join("big.lz8s");
    let roundtrip = dir.path().join("big_out.bin");

    let status = Command::new(lz8s_bin())
        .args(["-q", input.to_str().unwrap(), compressed.to_str().unwrap()])
        .status()
        .unwrap();
    assert!(status.success());

    // Incompressible data saturates into one literal-length byte plus a
    // zero-match splice per run of max_llen bytes, so the compressed stream
    // is larger than the 131072-byte original — past the compressor's own
    // input cap, which must not also apply to the decompressor's read.
    let compressed_len = fs::metadata(&compressed).unwrap().len();
    assert!(
        compressed_len > 131_072,
        "expected the compressed stream to exceed 128 KiB, got {compressed_len}"
    );

    let status = Command::new(lz8dec_bin())
        .args([compressed.to_str().unwrap(), roundtrip.to_str().unwrap()])
        .status()
        .unwrap();
    assert!(status.success());

    assert_eq!(fs::read(&roundtrip).unwrap(), data);
}
