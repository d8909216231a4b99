//! `-h` usage text for both binaries. Reproduces the shape of the upstream
//! `lz8s.c`/`lz8dec.c` usage strings (options table, defaults interpolated)
//! without copying them line for line.

use super::args::{DEFAULT_BITS_MOFF, DEFAULT_MAX_LLEN, DEFAULT_MAX_MLEN};

pub fn print_compress_usage(prog_name: &str) {
    eprintln!("LZ8S ultra-simple LZ based compressor.");
    eprintln!();
    eprintln!("Usage: {prog_name} [options] [input_file] [output_file]");
    eprintln!();
    eprintln!("If output_file is omitted, writes to standard output, and if");
    eprintln!("input_file is also omitted, reads from standard input.");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -o BITS  Sets match offset bits (default = {DEFAULT_BITS_MOFF}).");
    eprintln!("  -l NUM   Sets max literal run length (default = {DEFAULT_MAX_LLEN}).");
    eprintln!("  -m NUM   Sets max match run length (default = {DEFAULT_MAX_MLEN}).");
    eprintln!("  -A ADDR  Encodes position relative to address instead of offset.");
    eprintln!("  -n       Do not omit match offset on zero match length.");
    eprintln!("  -v       Shows match length/offset statistics.");
    eprintln!("  -d       Shows debug information on the compression chain.");
    eprintln!("  -q       Don't show detailed compression stats.");
    eprintln!("  -h       Shows this help.");
}

pub fn print_decompress_usage(prog_name: &str) {
    eprintln!("LZ8S ultra-simple LZ based decompressor.");
    eprintln!();
    eprintln!("Usage: {prog_name} [options] [input_file] [output_file]");
    eprintln!();
    eprintln!("If output_file is omitted, writes to standard output, and if");
    eprintln!("input_file is also omitted, reads from standard input.");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -o BITS  Sets match offset bits (default = {DEFAULT_BITS_MOFF}).");
    eprintln!("  -l NUM   Sets max literal run length (default = {DEFAULT_MAX_LLEN}).");
    eprintln!("  -m NUM   Sets max match run length (default = {DEFAULT_MAX_MLEN}).");
    eprintln!("  -A ADDR  Decodes position relative to address instead of offset.");
    eprintln!("  -n       Do not omit match offset on zero match length.");
    eprintln!("  -x       Offsets are inverted.");
    eprintln!("  -v       Shows decoded output size.");
    eprintln!("  -h       Shows this help.");
}
