//! `lz8s` — the LZ8S compressor binary.
//!
//! Parses argv, reads the input (file or stdin, capped at 128 KiB), runs the
//! optimal parser and emitter, writes the compressed stream, and reports
//! compression statistics at the configured verbosity.

use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;

use lz8s::cli::args::{parse_compress_args, ArgsError, CompressArgs};
use lz8s::cli::constants::{display_level, set_display_level};
use lz8s::cli::help::print_compress_usage;
use lz8s::cli::report::{print_histogram, print_ratio_line, print_summary};
use lz8s::codec::{debug, emitter, parser};
use lz8s::io::{read_input, write_output};

fn prog_name(argv0: &str) -> String {
    Path::new(argv0).file_name().map(|s| s.to_string_lossy().into_owned()).unwrap_or_else(|| argv0.to_owned())
}

fn cmd_error(prog: &str, msg: impl std::fmt::Display) -> ExitCode {
    eprintln!("{prog}: error, {msg}");
    eprintln!("Try '{prog} -h' for help.");
    ExitCode::FAILURE
}

/// Reads, compresses and writes. Kept separate from `main` so every I/O
/// failure can be reported through one `anyhow::Context`-annotated path.
fn run(args: &CompressArgs) -> anyhow::Result<()> {
    let name = args.files.input.as_deref().unwrap_or("<stdin>");
    let data = read_input(args.files.input.as_deref())
        .with_context(|| format!("can't open input file '{name}'"))?;

    let table = parser::build_table(&data, &args.params);
    if args.debug {
        debug::dump_parse(&table, &args.params);
    }

    let (out, stats) = emitter::emit_with_stats(&data, &table, &args.params);
    let predicted_bits = table.first().map_or(0, |e| e.lbits.min(e.mbits));

    let out_name = args.files.output.as_deref().unwrap_or("<stdout>");
    write_output(args.files.output.as_deref(), &out)
        .with_context(|| format!("can't open output file '{out_name}'"))?;

    // The ratio line is shown unconditionally, even under `-q` (lz8s.c:608-610).
    print_ratio_line(&args.params, data.len(), out.len());
    if display_level() >= 1 {
        print_summary(&stats, predicted_bits, data.len(), out.len());
    }
    if display_level() >= 2 {
        print_histogram(&stats);
    }
    Ok(())
}

fn main() -> ExitCode {
    let argv: Vec<String> = std::env::args().collect();
    let prog = prog_name(argv.first().map(String::as_str).unwrap_or("lz8s"));

    let args = match parse_compress_args(&argv[1..]) {
        Ok(a) => a,
        Err(ArgsError::HelpRequested) => {
            print_compress_usage(&prog);
            return ExitCode::SUCCESS;
        }
        Err(e) => return cmd_error(&prog, e),
    };

    set_display_level(args.verbosity.0);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => cmd_error(&prog, e),
    }
}
