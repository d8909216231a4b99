#![no_main]
use libfuzzer_sys::fuzz_target;

use lz8s::codec::{decompress_buffer, Params};

// Feeds arbitrary bytes through the decoder under a handful of fixed
// parameter sets. The decoder must never panic on malformed input — a
// truncated field or payload is reported as `DecodeOutcome::Truncated`
// with a best-effort prefix, never a crash.
fuzz_target!(|data: &[u8]| {
    let param_sets = [
        Params::default(),
        Params { bits_moff: 0, ..Params::default() },
        Params { bits_moff: 16, ..Params::default() },
        Params { zero_offset: true, exor_offset: true, ..Params::default() },
        Params { offset_rel: Some(0), ..Params::default() },
        Params { max_mlen: 32895, max_llen: 32895, ..Params::default() },
    ];

    for params in &param_sets {
        let _ = decompress_buffer(data, params);
    }
});
