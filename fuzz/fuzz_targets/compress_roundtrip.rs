#![no_main]
use libfuzzer_sys::arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use lz8s::codec::{compress_buffer, decompress_buffer, Params};

/// A constrained parameter set covering the legal ranges the codec accepts,
/// small enough that `cargo fuzz` can explore it alongside the input bytes.
#[derive(Debug, Arbitrary)]
struct FuzzParams {
    bits_moff: u8,
    max_mlen_low_bits: u16,
    max_llen_low_bits: u16,
    min_mlen: u8,
    zero_offset: bool,
    exor_offset: bool,
    use_absolute: bool,
}

impl From<FuzzParams> for Params {
    fn from(f: FuzzParams) -> Self {
        let bits_moff = (f.bits_moff % 17) as u32;
        let max_mlen = 1 + (f.max_mlen_low_bits as u32 % 32895);
        let max_llen = 1 + (f.max_llen_low_bits as u32 % 32895);
        let min_mlen = 1 + (f.min_mlen as u32 % 4);
        let offset_rel = if f.use_absolute && matches!(bits_moff, 8 | 16) {
            Some(if bits_moff == 8 { 0 } else { 0 })
        } else {
            None
        };
        Params {
            bits_moff,
            max_mlen,
            max_llen,
            min_mlen,
            zero_offset: f.zero_offset,
            offset_rel,
            exor_offset: f.exor_offset,
        }
    }
}

fuzz_target!(|input: (FuzzParams, Vec<u8>)| {
    let (fuzz_params, mut data) = input;
    data.truncate(131_072);
    let params: Params = fuzz_params.into();
    if params.validate().is_err() {
        return;
    }

    let compressed = compress_buffer(&data, &params);
    let recovered = decompress_buffer(&compressed, &params);
    assert_eq!(
        recovered.bytes(),
        data.as_slice(),
        "round-trip mismatch for {} bytes under {params:?}",
        data.len()
    );
});
