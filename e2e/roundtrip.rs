//! End-to-end round-trip coverage of the public library API across a matrix
//! of parameter sets and corpora: round-trip fidelity and determinism,
//! exercised broadly rather than case-by-case.

use lz8s::codec::{compress_buffer, decompress_buffer, Params};
use lz8s::lorem::gen_buffer;

fn param_matrix() -> Vec<Params> {
    vec![
        Params::default(),
        Params { bits_moff: 0, ..Params::default() },
        Params { bits_moff: 16, ..Params::default() },
        Params { max_mlen: 32895, max_llen: 32895, ..Params::default() },
        Params { max_mlen: 4, max_llen: 6, min_mlen: 2, ..Params::default() },
        Params { zero_offset: true, ..Params::default() },
        Params { zero_offset: true, exor_offset: true, ..Params::default() },
        Params { offset_rel: Some(0), ..Params::default() },
        Params { bits_moff: 16, offset_rel: Some(1000), ..Params::default() },
        Params { max_llen: 300, max_mlen: 300, ..Params::default() },
    ]
}

fn assert_round_trips(data: &[u8], params: &Params) {
    let packed = compress_buffer(data, params);
    let recovered = decompress_buffer(&packed, params);
    assert_eq!(recovered.bytes(), data, "round-trip mismatch under {params:?} for {} bytes", data.len());
}

#[test]
fn every_parameter_set_round_trips_lorem_corpora() {
    for params in param_matrix() {
        for size in [0usize, 1, 17, 128, 1000, 8192] {
            let data = gen_buffer(size, 0xABCD ^ size as u32);
            assert_round_trips(&data, &params);
        }
    }
}

#[test]
fn every_parameter_set_round_trips_degenerate_inputs() {
    let degenerate: Vec<Vec<u8>> = vec![
        Vec::new(),
        vec![0u8],
        vec![0xFFu8; 1],
        vec![b'A'; 500],
        (0u16..256).map(|b| b as u8).collect(),
        (0u16..256).rev().map(|b| b as u8).collect(),
        b"abababababababababababababababab".to_vec(),
        {
            let mut v = Vec::new();
            for i in 0..2000u32 {
                v.push((i % 7) as u8);
            }
            v
        },
    ];

    for params in param_matrix() {
        for data in &degenerate {
            assert_round_trips(data, &params);
        }
    }
}

#[test]
fn compression_is_deterministic_across_repeated_calls() {
    let data = gen_buffer(16_384, 99);
    for params in param_matrix() {
        let a = compress_buffer(&data, &params);
        let b = compress_buffer(&data, &params);
        assert_eq!(a, b, "non-deterministic output under {params:?}");
    }
}

#[test]
fn larger_max_mlen_never_increases_output_size() {
    let data = gen_buffer(4096, 7);
    for k in [1u32, 2, 4, 8, 16, 32, 64, 254] {
        let small = Params { max_mlen: k, ..Params::default() };
        let large = Params { max_mlen: k + 1, ..Params::default() };
        let out_small = compress_buffer(&data, &small).len();
        let out_large = compress_buffer(&data, &large).len();
        assert!(out_large <= out_small, "max_mlen={k} -> {out_small}, max_mlen={} -> {out_large}", k + 1);
    }
}

#[test]
fn literal_saturation_boundary_round_trips_at_every_offset() {
    // Exercise inputs right around max_llen + 1 in both directions, where
    // the splice-insertion logic is most likely to be off by one.
    let params = Params::default(); // max_llen = 255
    for len in 250..=262usize {
        let data: Vec<u8> = (0..len).map(|i| (i * 37 + 5) as u8).collect();
        assert_round_trips(&data, &params);
    }
}

#[test]
fn maximum_input_size_round_trips() {
    let data = gen_buffer(131_072, 0x5EED);
    assert_round_trips(&data, &Params::default());
}
