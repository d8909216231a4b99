//! `lz8dec` — the LZ8S decompressor binary.
//!
//! Parses argv, reads the compressed stream (file or stdin), decodes it,
//! writes the recovered bytes, and exits 0 even on a truncated stream — the
//! decoder is deliberately best-effort.

use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;

use lz8s::cli::args::{parse_decompress_args, ArgsError, DecompressArgs};
use lz8s::cli::help::print_decompress_usage;
use lz8s::codec::{decode, DecodeOutcome};
use lz8s::io::{read_all, write_output};

fn prog_name(argv0: &str) -> String {
    Path::new(argv0).file_name().map(|s| s.to_string_lossy().into_owned()).unwrap_or_else(|| argv0.to_owned())
}

fn cmd_error(prog: &str, msg: impl std::fmt::Display) -> ExitCode {
    eprintln!("{prog}: error, {msg}");
    eprintln!("Try '{prog} -h' for help.");
    ExitCode::FAILURE
}

fn run(args: &DecompressArgs) -> anyhow::Result<()> {
    let name = args.files.input.as_deref().unwrap_or("<stdin>");
    let data = read_all(args.files.input.as_deref())
        .with_context(|| format!("can't open input file '{name}'"))?;

    let outcome = decode(&data, &args.params);
    if let DecodeOutcome::Truncated { error, .. } = &outcome {
        eprintln!("warning, {error}");
    }
    let bytes = outcome.bytes();

    let out_name = args.files.output.as_deref().unwrap_or("<stdout>");
    write_output(args.files.output.as_deref(), bytes)
        .with_context(|| format!("can't open output file '{out_name}'"))?;

    if args.verbose {
        eprintln!("LZ8DEC: decoded {} bytes", bytes.len());
    }
    Ok(())
}

fn main() -> ExitCode {
    let argv: Vec<String> = std::env::args().collect();
    let prog = prog_name(argv.first().map(String::as_str).unwrap_or("lz8dec"));

    let args = match parse_decompress_args(&argv[1..]) {
        Ok(a) => a,
        Err(ArgsError::HelpRequested) => {
            print_decompress_usage(&prog);
            return ExitCode::SUCCESS;
        }
        Err(e) => return cmd_error(&prog, e),
    };

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => cmd_error(&prog, e),
    }
}
