//! Forward emission (component C4) — walks the DP table built by
//! [`super::parser::build_table`] left to right and writes the wire records.
//!
//! Every position is visited exactly once; a position already covered by a
//! record emitted from an earlier one is either copied through (inside a
//! literal run) or skipped silently (inside a match), mirroring the
//! `lpos`/`in_literal` bookkeeping in the upstream `lzop_encode`.

use super::cost::{mlen_cost, moff_cost, zero_match_cost, Cost};
use super::params::Params;
use super::parser::StateEntry;

/// Compression counters gathered while emitting, surfaced by the default and
/// `-v` CLI diagnostics (SPEC_FULL.md §3, mirroring `lz8s.c`'s `show_stats`).
#[derive(Debug, Clone)]
pub struct Stats {
    pub bytes_literal: u32,
    pub bytes_matches: u32,
    pub bits_literal: Cost,
    pub bits_matches: Cost,
    /// Histogram of literal-run lengths actually emitted, indexed by length.
    pub llen_hist: Vec<u32>,
    /// Histogram of match lengths actually emitted, indexed by length.
    pub mlen_hist: Vec<u32>,
    /// Histogram of match back-distances actually emitted, indexed by distance.
    pub moff_hist: Vec<u32>,
}

impl Stats {
    fn new(params: &Params) -> Self {
        Stats {
            bytes_literal: 0,
            bytes_matches: 0,
            bits_literal: 0,
            bits_matches: 0,
            llen_hist: vec![0; params.max_llen as usize + 1],
            mlen_hist: vec![0; params.max_mlen as usize + 1],
            moff_hist: vec![0; params.max_off() as usize + 1],
        }
    }

    fn record_llen(&mut self, len: u32) {
        if let Some(slot) = self.llen_hist.get_mut(len as usize) {
            *slot += 1;
        }
    }

    fn record_match(&mut self, len: u32, dist: u32) {
        if let Some(slot) = self.mlen_hist.get_mut(len as usize) {
            *slot += 1;
        }
        if let Some(slot) = self.moff_hist.get_mut(dist as usize) {
            *slot += 1;
        }
    }
}

/// Encodes `data` into its wire form, given the DP table `sp` built for it.
///
/// `sp` must have exactly `data.len() + 1` entries, as returned by
/// [`super::parser::build_table`] called with the same `params`.
pub fn emit(data: &[u8], sp: &[StateEntry], params: &Params) -> Vec<u8> {
    emit_with_stats(data, sp, params).0
}

/// Like [`emit`], but also returns the [`Stats`] counters the CLI's `-v`
/// verbosity levels report.
pub fn emit_with_stats(data: &[u8], sp: &[StateEntry], params: &Params) -> (Vec<u8>, Stats) {
    debug_assert_eq!(sp.len(), data.len() + 1);
    let zmc = zero_match_cost(params);
    let size = data.len();
    let mut out = Vec::with_capacity(size + size / 8 + 4);
    let mut stats = Stats::new(params);
    let mut in_literal = false;
    // Last position already committed to an emitted record, or -1 if none.
    let mut last_emitted: isize = -1;
    let mut pos = 0usize;

    while pos < size {
        if (pos as isize) <= last_emitted {
            if in_literal {
                out.push(data[pos]);
                stats.bytes_literal += 1;
            } else {
                stats.bytes_matches += 1;
            }
            pos += 1;
            continue;
        }

        let entry = &sp[pos];
        let extra: Cost = if in_literal { zmc } else { 0 };
        if entry.lbits + extra <= entry.mbits {
            let len = entry.llen.min(params.max_llen);
            if in_literal {
                // Already mid-literal: splice with a zero-length match first.
                // Its cost is booked against `bits_literal`, as it exists
                // only to serve this literal run (mirrors `code_match`'s
                // `len ? bits_matches : bits_literal` split in the upstream
                // source for a zero-length match).
                write_len_field(&mut out, 0, params.max_mlen);
                if params.zero_offset {
                    write_offset_field(&mut out, 0, params.bits_moff);
                }
                stats.bits_literal += zmc;
            }
            write_len_field(&mut out, len, params.max_llen);
            stats.record_llen(len);
            stats.bits_literal += if len > 127 && params.max_llen > 255 { 16 } else { 8 };
            out.push(data[pos]);
            stats.bytes_literal += 1;
            in_literal = true;
            last_emitted = (pos + len as usize - 1) as isize;
        } else {
            let mlen = entry.mlen;
            let wire_off = offset_to_wire(params, pos, entry.mpos);
            if !in_literal {
                // Two matches in a row: open with a zero-length literal.
                // Booked against `bits_matches` — the mirror image of the
                // splice case above.
                write_len_field(&mut out, 0, params.max_llen);
                stats.record_llen(0);
                stats.bits_matches += 8;
            }
            write_len_field(&mut out, mlen, params.max_mlen);
            stats.bits_matches += mlen_cost(mlen, params);
            if mlen > 0 || params.zero_offset {
                write_offset_field(&mut out, wire_off, params.bits_moff);
                stats.bits_matches += moff_cost(entry.mpos, params);
            }
            stats.record_match(mlen, entry.mpos);
            stats.bytes_matches += 1;
            in_literal = false;
            last_emitted = (pos + mlen as usize - 1) as isize;
        }
        pos += 1;
    }

    (out, stats)
}

/// Converts a DP back-distance (`mpos`, always ≥ 1 for a real match) into the
/// wire offset value, applying relative or absolute addressing.
/// Never applies `exor_offset` — that transform is decoder-only.
fn offset_to_wire(params: &Params, pos: usize, mpos: u32) -> u32 {
    let w: i64 = match params.offset_rel {
        None => mpos as i64 - 1,
        Some(base) => pos as i64 + base as i64 - mpos as i64,
    };
    (w as u32) & 0xFFFF
}

/// Writes a length field: one byte for values up to 127, or two when
/// `max > 255` and the value needs the extended range.
fn write_len_field(out: &mut Vec<u8>, value: u32, max: u32) {
    if value > 127 && max > 255 {
        out.push((0x80 | (value & 0x7F)) as u8);
        out.push(((value >> 7) - 1) as u8);
    } else {
        out.push((value & 0xFF) as u8);
    }
}

/// Writes an offset field: absent when `bits_moff == 0`, one byte when ≤ 8,
/// two bytes (low byte first) otherwise.
fn write_offset_field(out: &mut Vec<u8>, value: u32, bits_moff: u32) {
    if bits_moff == 0 {
        return;
    }
    out.push((value & 0xFF) as u8);
    if bits_moff > 8 {
        out.push(((value >> 8) & 0xFF) as u8);
    }
}

#[cfg(test)]
mod tests {
    use super::super::parser::build_table;
    use super::*;

    fn encode(data: &[u8], params: &Params) -> Vec<u8> {
        let sp = build_table(data, params);
        emit(data, &sp, params)
    }

    #[test]
    fn empty_input_emits_nothing() {
        assert_eq!(encode(b"", &Params::default()), Vec::<u8>::new());
    }

    #[test]
    fn single_literal_byte() {
        assert_eq!(encode(b"A", &Params::default()), vec![0x01, 0x41]);
    }

    #[test]
    fn literal_then_match() {
        // "AB" literal, then a 4-byte match at relative distance 2.
        assert_eq!(
            encode(b"ABABAB", &Params::default()),
            vec![0x02, 0x41, 0x42, 0x04, 0x01]
        );
    }

    #[test]
    fn self_referential_run() {
        // One literal byte 'A', then a 7-byte match copying from distance 1.
        assert_eq!(encode(b"AAAAAAAA", &Params::default()), vec![0x01, 0x41, 0x07, 0x00]);
    }

    #[test]
    fn zero_bits_moff_omits_offset_field() {
        let params = Params { bits_moff: 0, ..Params::default() };
        assert_eq!(encode(b"AAAA", &params), vec![0x01, 0x41, 0x03]);
    }

    #[test]
    fn stats_account_for_every_output_byte() {
        let data = b"AAAAAAAA"; // lit 'A' + match len 7 off 1
        let params = Params::default();
        let sp = build_table(data, &params);
        let (out, stats) = emit_with_stats(data, &sp, &params);
        assert_eq!(out, vec![0x01, 0x41, 0x07, 0x00]);
        assert_eq!(stats.bytes_literal, 1);
        assert_eq!(stats.bytes_matches, 7);
        assert_eq!(stats.mlen_hist[7], 1);
        assert_eq!(stats.moff_hist[1], 1);
        assert_eq!(stats.llen_hist[1], 1);
    }

    #[test]
    fn stats_bit_totals_match_oracle_for_simple_case() {
        let data = b"AAAAAAAA";
        let params = Params::default();
        let sp = build_table(data, &params);
        let (_out, stats) = emit_with_stats(data, &sp, &params);
        // 'A' literal: 8 bits length field. Match len7 off1: 8+8 bits.
        assert_eq!(stats.bits_literal, 8);
        assert_eq!(stats.bits_matches, 16);
    }

    #[test]
    fn output_length_matches_bit_cost_oracle() {
        let data = b"the quick brown fox jumps over the lazy dog";
        let params = Params::default();
        let sp = build_table(data, &params);
        let out = emit(data, &sp, &params);
        let predicted_bits = sp[0].lbits.min(sp[0].mbits);
        assert_eq!(predicted_bits, 8 * out.len() as Cost);
    }

    #[test]
    fn literal_run_longer_than_max_llen_gets_a_splice() {
        let data: Vec<u8> = (0u16..256).map(|b| b as u8).collect();
        let params = Params::default(); // max_llen = 255
        let out = encode(&data, &params);
        // First chunk: 0xFF-length literal field + 255 raw bytes.
        assert_eq!(out[0], 0xFF);
        assert_eq!(&out[1..256], &data[0..255]);
        // Splice: zero-length match record (no offset field, zero_offset=false).
        assert_eq!(out[256], 0x00);
        // Second chunk: one more literal byte.
        assert_eq!(out[257], 0x01);
        assert_eq!(out[258], data[255]);
    }

    #[test]
    fn two_byte_length_field_round_trips_through_the_emitter() {
        let params = Params { max_llen: 300, ..Params::default() };
        let data = vec![b'Q'; 200];
        let out = encode(&data, &params);
        // 200 > 127 and max_llen > 255, so the length field is two bytes.
        assert_eq!(out[0], 0x80 | (200 & 0x7F));
        assert_eq!(out[1], (200u32 >> 7) - 1);
    }

    #[test]
    fn absolute_offset_mode_uses_configured_base() {
        let params = Params { offset_rel: Some(0), ..Params::default() };
        let data = b"ABABAB";
        let sp = build_table(data, &params);
        let out = emit(data, &sp, &params);
        // Literal "AB" (pos 0,1), match at pos=2, mpos=2 (distance 2).
        // Absolute wire offset = pos + base - mpos = 2 + 0 - 2 = 0.
        assert_eq!(out, vec![0x02, 0x41, 0x42, 0x04, 0x00]);
    }
}
