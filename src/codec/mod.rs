//! The LZ8S codec: cost model, match finder, optimal parser, emitter and
//! decoder (components C1–C5 of the design). `Params` (C0, if you like) is
//! threaded by reference through all of them; nothing here holds process-wide
//! mutable state.

pub mod cost;
pub mod debug;
pub mod decoder;
pub mod emitter;
pub mod matcher;
pub mod params;
pub mod parser;

pub use cost::{Cost, INFINITE_COST};
pub use debug::dump_parse;
pub use decoder::{decode, DecodeError, DecodeOutcome};
pub use emitter::Stats;
pub use params::{ConfigError, Params};

/// Compresses `data` into its LZ8S wire form under `params`.
///
/// Runs the optimal parser (C3) followed by the emitter (C4). Callers are
/// responsible for enforcing the 128 KiB input cap before calling
/// this — the codec itself has no opinion on where bytes come from.
pub fn compress_buffer(data: &[u8], params: &Params) -> Vec<u8> {
    let table = parser::build_table(data, params);
    emitter::emit(data, &table, params)
}

/// Like [`compress_buffer`], but also returns the [`Stats`] counters behind
/// the CLI's default and `-v` diagnostics and the bit-cost oracle.
pub fn compress_buffer_with_stats(data: &[u8], params: &Params) -> (Vec<u8>, Stats, Cost) {
    let table = parser::build_table(data, params);
    let predicted_bits = table.first().map_or(0, |e| e.lbits.min(e.mbits));
    let (out, stats) = emitter::emit_with_stats(data, &table, params);
    (out, stats, predicted_bits)
}

/// Decompresses an LZ8S wire-format stream into the original bytes.
///
/// See [`decoder::decode`] for truncation handling: this never panics on
/// malformed input, but a [`DecodeOutcome::Truncated`] result reports a
/// best-effort prefix of the original data.
pub fn decompress_buffer(data: &[u8], params: &Params) -> DecodeOutcome {
    decoder::decode(data, params)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roundtrip(data: &[u8], params: &Params) {
        let packed = compress_buffer(data, params);
        let out = decompress_buffer(&packed, params);
        assert_eq!(out.bytes(), data, "roundtrip mismatch for {data:?} under {params:?}");
    }

    #[test]
    fn roundtrips_default_params() {
        roundtrip(b"", &Params::default());
        roundtrip(b"A", &Params::default());
        roundtrip(b"ABABAB", &Params::default());
        roundtrip(b"AAAAAAAA", &Params::default());
        roundtrip(b"the quick brown fox jumps over the lazy dog", &Params::default());
    }

    #[test]
    fn roundtrips_256_distinct_bytes() {
        let data: Vec<u8> = (0u16..256).map(|b| b as u8).collect();
        roundtrip(&data, &Params::default());
    }

    #[test]
    fn roundtrips_zero_bits_moff() {
        let params = Params { bits_moff: 0, ..Params::default() };
        roundtrip(b"AAAA", &params);
        roundtrip(b"hello world hello world", &params);
    }

    #[test]
    fn roundtrips_absolute_offset_mode() {
        let params = Params { offset_rel: Some(0), ..Params::default() };
        roundtrip(b"ABABAB", &params);
        roundtrip(b"mississippi river mississippi", &params);
    }

    #[test]
    fn roundtrips_zero_offset_and_exor() {
        let params = Params { zero_offset: true, exor_offset: true, ..Params::default() };
        roundtrip(b"aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa", &params);
    }

    #[test]
    fn roundtrips_two_byte_length_fields() {
        let params = Params { max_mlen: 500, max_llen: 500, ..Params::default() };
        let data = vec![b'Z'; 450];
        roundtrip(&data, &params);
    }

    #[test]
    fn cost_monotonicity_larger_max_mlen_never_hurts() {
        let data = b"abcabcabcabcabcXYZabcabcabcabc";
        let small = Params { max_mlen: 4, ..Params::default() };
        let large = Params { max_mlen: 5, ..Params::default() };
        let out_small = compress_buffer(data, &small);
        let out_large = compress_buffer(data, &large);
        assert!(out_large.len() <= out_small.len());
    }

    #[test]
    fn determinism() {
        let data = b"the quick brown fox jumps over the lazy dog, twice.";
        let a = compress_buffer(data, &Params::default());
        let b = compress_buffer(data, &Params::default());
        assert_eq!(a, b);
    }
}
