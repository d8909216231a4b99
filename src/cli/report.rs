//! Human-readable statistics output for the compressor's `-v`/`-q` flags.
//! Grounded on `lz8s.c`'s `show_stats` block in `main()`: the ratio line is
//! printed unconditionally (even under `-q`), the byte/bit breakdown gates on
//! level ≥ 1 (i.e. shown by default, hidden only by `-q`), and the per-value
//! histogram on level ≥ 2 (i.e. a single `-v`) — see [`super::constants`]'s
//! level scale.

use crate::codec::{Params, Stats};

/// Always-on summary: `LZ8S: max offset= N, max mlen= N, max llen= N, ratio: ...`.
pub fn print_ratio_line(params: &Params, input_len: usize, output_len: usize) {
    let ratio = if input_len == 0 { 0.0 } else { 100.0 * output_len as f64 / input_len as f64 };
    eprintln!(
        "LZ8S: max offset= {},\tmax mlen= {},\tmax llen= {},\tratio: {:5} / {} = {:5.2}%",
        params.max_off(),
        params.max_mlen,
        params.max_llen,
        output_len,
        input_len,
        ratio
    );
}

/// Default-verbosity diagnostic (level ≥ 1): bit-cost oracle plus the
/// bytes/bits breakdown between literal and match output.
pub fn print_summary(stats: &Stats, predicted_bits: i64, input_len: usize, output_len: usize) {
    let real_bits = output_len as i64 * 8;
    eprint!(" Total size estimated {predicted_bits} bits");
    if real_bits - predicted_bits != 0 {
        eprint!("(difference of {} with real)", real_bits - predicted_bits);
    }
    eprintln!();

    let total1 = if input_len == 0 { 0.0 } else { 100.0 / input_len as f64 };
    let total2 = if output_len == 0 { 0.0 } else { 100.0 / output_len as f64 };
    eprintln!(" Compression Information:                Input  Output");
    eprintln!(
        " Bytes encoded as matches: {:5} bytes,  {:4.1}%     -",
        stats.bytes_matches,
        total1 * stats.bytes_matches as f64
    );
    eprintln!(
        " Bytes encoded as literal: {:5} bytes,  {:4.1}%   {:4.1}%",
        stats.bytes_literal,
        total1 * stats.bytes_literal as f64,
        total2 * stats.bytes_literal as f64
    );
    eprintln!(
        " Total matches overhead: {:7} bits,     -     {:4.1}%",
        stats.bits_matches,
        total2 * 0.125 * stats.bits_matches as f64
    );
    eprintln!(
        " Total literal overhead: {:7} bits,     -     {:4.1}%",
        stats.bits_literal,
        total2 * 0.125 * stats.bits_literal as f64
    );
}

/// `-v` diagnostic (level ≥ 2): the full per-value `MPOS`/`MLEN`/`LLEN` histogram.
pub fn print_histogram(stats: &Stats) {
    eprintln!();
    eprintln!("value\t  MPOS\t  MLEN\t  LLEN");
    let rows = stats.moff_hist.len().max(stats.mlen_hist.len()).max(stats.llen_hist.len());
    for i in 0..rows {
        let moff = stats.moff_hist.get(i).copied().unwrap_or(0);
        let mlen = stats.mlen_hist.get(i).copied().unwrap_or(0);
        let llen = stats.llen_hist.get(i).copied().unwrap_or(0);
        eprintln!("{i:2}\t{moff:5}\t{mlen:5}\t{llen:5}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratio_line_handles_empty_input_without_dividing_by_zero() {
        print_ratio_line(&Params::default(), 0, 0);
    }

    #[test]
    fn summary_and_histogram_run_on_a_real_stats_value() {
        let params = Params::default();
        let data = b"AAAAAAAA";
        let (out, stats, predicted_bits) = crate::codec::compress_buffer_with_stats(data, &params);
        print_summary(&stats, predicted_bits, data.len(), out.len());
        print_histogram(&stats);
    }
}
