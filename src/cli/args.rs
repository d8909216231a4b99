//! Command-line argument parsing shared by `lz8s` and `lz8dec`.
//!
//! A small hand-rolled parser over `&[String]`, in the style of the
//! teacher's `arg_utils`/`args` modules: no external argument-parsing crate,
//! just a `Vec<String>` walked index by index, matching how both upstream
//! C programs drive `getopt`. `getopt("hqvndo:l:m:A:")`/`getopt("hvnxo:l:m:A:")`
//! cluster valueless flags together in one token (`-nv`) and let a
//! value-taking flag consume either the rest of its token or the next one
//! (`-o16` / `-o 16`); [`split_flag_cluster`] reproduces that.

use std::fmt;

use crate::codec::{ConfigError, Params};

pub const DEFAULT_BITS_MOFF: u32 = 8;
pub const DEFAULT_MAX_LLEN: u32 = 255;
pub const DEFAULT_MAX_MLEN: u32 = 255;

/// Flags that take a value (`getopt`'s `o:l:m:A:`), common to both tools.
const VALUE_FLAGS: [char; 4] = ['o', 'l', 'm', 'A'];

/// One flag parsed out of a `-xyz`-style token.
#[derive(Debug, Clone, PartialEq, Eq)]
enum FlagToken {
    Valueless(char),
    Valued(char, String),
}

/// Splits the token at `args[*idx]` (which must start with `-`) into a
/// sequence of flags, honoring `getopt`-style clustering: valueless flags
/// may be packed into one token (`-nv` is `-n` then `-v`), and a
/// value-taking flag consumes the remainder of the token as its value, or
/// (if nothing follows it in-token) the next token (`-o16` or `-o 16`).
/// Advances `*idx` past every token consumed.
fn split_flag_cluster(args: &[String], idx: &mut usize) -> Result<Vec<FlagToken>, ArgsError> {
    let chars: Vec<char> = args[*idx][1..].chars().collect();
    let mut tokens = Vec::new();
    let mut ci = 0;
    while ci < chars.len() {
        let c = chars[ci];
        if VALUE_FLAGS.contains(&c) {
            let inline: String = chars[ci + 1..].iter().collect();
            if !inline.is_empty() {
                tokens.push(FlagToken::Valued(c, inline));
            } else {
                *idx += 1;
                let value = args.get(*idx).cloned().ok_or(ArgsError::MissingValue(c))?;
                tokens.push(FlagToken::Valued(c, value));
            }
            // A value flag always consumes the rest of the token.
            return Ok(tokens);
        }
        tokens.push(FlagToken::Valueless(c));
        ci += 1;
    }
    Ok(tokens)
}

/// Parsed positional file arguments: `[input_file] [output_file]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileArgs {
    pub input: Option<String>,
    pub output: Option<String>,
}

/// Errors from parsing argv, before any `Params` validation runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgsError {
    /// `-h` was given; caller should print usage and exit 0, not an error.
    HelpRequested,
    Config(ConfigError),
    UnknownFlag(String),
    MissingValue(char),
    InvalidNumber(char, String),
    TooManyArguments,
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::HelpRequested => f.write_str("help requested"),
            ArgsError::Config(e) => write!(f, "{e}"),
            ArgsError::UnknownFlag(s) => write!(f, "unknown option '{s}'"),
            ArgsError::MissingValue(c) => write!(f, "option '-{c}' requires a value"),
            ArgsError::InvalidNumber(c, s) => write!(f, "option '-{c}' has invalid value '{s}'"),
            ArgsError::TooManyArguments => {
                f.write_str("too many arguments: one input file and one output file expected")
            }
        }
    }
}

impl std::error::Error for ArgsError {}

impl From<ConfigError> for ArgsError {
    fn from(e: ConfigError) -> Self {
        ArgsError::Config(e)
    }
}

fn parse_u32(flag: char, s: &str) -> Result<u32, ArgsError> {
    s.parse::<u32>().map_err(|_| ArgsError::InvalidNumber(flag, s.to_string()))
}

/// Parses an address: accepts `0x`-prefixed hex (as `strtol(optarg, 0, 0)`
/// does in the C sources) or plain decimal.
fn parse_addr(flag: char, s: &str) -> Result<u32, ArgsError> {
    let parsed = if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        u32::from_str_radix(hex, 16)
    } else {
        s.parse::<u32>()
    };
    parsed.map_err(|_| ArgsError::InvalidNumber(flag, s.to_string()))
}

/// Verbosity requested on the compressor: `-q` sets 0, default is 1, `-v`
/// sets 2 (matching `lz8s.c`'s `show_stats`, which `-v` sets to 2 outright
/// rather than incrementing — repeating `-v` is idempotent). See
/// SPEC_FULL.md §2.1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Verbosity(pub u32);

impl Default for Verbosity {
    fn default() -> Self {
        Verbosity(1)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompressArgs {
    pub params: Params,
    pub verbosity: Verbosity,
    pub debug: bool,
    pub files: FileArgs,
}

pub fn parse_compress_args(args: &[String]) -> Result<CompressArgs, ArgsError> {
    let mut params = Params::default();
    let mut files = FileArgs::default();
    let mut verbosity = Verbosity::default();
    let mut debug = false;
    let mut idx = 0;

    while idx < args.len() {
        let arg = args[idx].clone();
        if arg == "-h" || arg == "--help" {
            return Err(ArgsError::HelpRequested);
        } else if arg.starts_with('-') && arg.len() > 1 {
            for tok in split_flag_cluster(args, &mut idx)? {
                match tok {
                    FlagToken::Valueless('h') => return Err(ArgsError::HelpRequested),
                    FlagToken::Valueless('n') => params.zero_offset = true,
                    FlagToken::Valueless('v') => verbosity.0 = 2,
                    FlagToken::Valueless('q') => verbosity.0 = 0,
                    FlagToken::Valueless('d') => debug = true,
                    FlagToken::Valueless(c) => return Err(ArgsError::UnknownFlag(format!("-{c}"))),
                    FlagToken::Valued('o', v) => params.bits_moff = parse_u32('o', &v)?,
                    FlagToken::Valued('l', v) => params.max_llen = parse_u32('l', &v)?,
                    FlagToken::Valued('m', v) => params.max_mlen = parse_u32('m', &v)?,
                    FlagToken::Valued('A', v) => params.offset_rel = Some(parse_addr('A', &v)?),
                    FlagToken::Valued(c, _) => return Err(ArgsError::UnknownFlag(format!("-{c}"))),
                }
            }
        } else if files.input.is_none() {
            files.input = Some(arg);
        } else if files.output.is_none() {
            files.output = Some(arg);
        } else {
            return Err(ArgsError::TooManyArguments);
        }
        idx += 1;
    }

    params.validate()?;
    Ok(CompressArgs { params, verbosity, debug, files })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecompressArgs {
    pub params: Params,
    pub verbose: bool,
    pub files: FileArgs,
}

pub fn parse_decompress_args(args: &[String]) -> Result<DecompressArgs, ArgsError> {
    let mut params = Params::default();
    let mut files = FileArgs::default();
    let mut verbose = false;
    let mut idx = 0;

    while idx < args.len() {
        let arg = args[idx].clone();
        if arg == "-h" || arg == "--help" {
            return Err(ArgsError::HelpRequested);
        } else if arg.starts_with('-') && arg.len() > 1 {
            for tok in split_flag_cluster(args, &mut idx)? {
                match tok {
                    FlagToken::Valueless('h') => return Err(ArgsError::HelpRequested),
                    FlagToken::Valueless('n') => params.zero_offset = true,
                    FlagToken::Valueless('x') => params.exor_offset = true,
                    FlagToken::Valueless('v') => verbose = true,
                    FlagToken::Valueless(c) => return Err(ArgsError::UnknownFlag(format!("-{c}"))),
                    FlagToken::Valued('o', v) => params.bits_moff = parse_u32('o', &v)?,
                    FlagToken::Valued('l', v) => params.max_llen = parse_u32('l', &v)?,
                    FlagToken::Valued('m', v) => params.max_mlen = parse_u32('m', &v)?,
                    FlagToken::Valued('A', v) => params.offset_rel = Some(parse_addr('A', &v)?),
                    FlagToken::Valued(c, _) => return Err(ArgsError::UnknownFlag(format!("-{c}"))),
                }
            }
        } else if files.input.is_none() {
            files.input = Some(arg);
        } else if files.output.is_none() {
            files.output = Some(arg);
        } else {
            return Err(ArgsError::TooManyArguments);
        }
        idx += 1;
    }

    params.validate()?;
    Ok(DecompressArgs { params, verbose, files })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn defaults_with_no_flags() {
        let parsed = parse_compress_args(&args(&[])).unwrap();
        assert_eq!(parsed.params, Params::default());
        assert_eq!(parsed.verbosity, Verbosity(1));
        assert!(!parsed.debug);
        assert_eq!(parsed.files, FileArgs::default());
    }

    #[test]
    fn positional_input_and_output() {
        let parsed = parse_compress_args(&args(&["in.bin", "out.lz8"])).unwrap();
        assert_eq!(parsed.files.input.as_deref(), Some("in.bin"));
        assert_eq!(parsed.files.output.as_deref(), Some("out.lz8"));
    }

    #[test]
    fn too_many_positionals_is_an_error() {
        let err = parse_compress_args(&args(&["a", "b", "c"])).unwrap_err();
        assert_eq!(err, ArgsError::TooManyArguments);
    }

    #[test]
    fn attached_and_separate_flag_values() {
        let a = parse_compress_args(&args(&["-o16"])).unwrap();
        assert_eq!(a.params.bits_moff, 16);
        let b = parse_compress_args(&args(&["-o", "16"])).unwrap();
        assert_eq!(b.params.bits_moff, 16);
    }

    #[test]
    fn verbosity_levels() {
        assert_eq!(parse_compress_args(&args(&[])).unwrap().verbosity, Verbosity(1));
        assert_eq!(parse_compress_args(&args(&["-q"])).unwrap().verbosity, Verbosity(0));
        assert_eq!(parse_compress_args(&args(&["-v"])).unwrap().verbosity, Verbosity(2));
        // -v sets the level to 2 outright (like lz8s.c's show_stats = 2),
        // so repeating it — whether as two tokens or clustered in one — is
        // idempotent, not cumulative.
        assert_eq!(parse_compress_args(&args(&["-v", "-v"])).unwrap().verbosity, Verbosity(2));
        assert_eq!(parse_compress_args(&args(&["-vv"])).unwrap().verbosity, Verbosity(2));
    }

    #[test]
    fn clustered_valueless_flags_are_all_applied() {
        let parsed = parse_compress_args(&args(&["-nv"])).unwrap();
        assert!(parsed.params.zero_offset);
        assert_eq!(parsed.verbosity, Verbosity(2));
    }

    #[test]
    fn clustered_valueless_flag_followed_by_value_flag() {
        // "-nvo16": -n and -v cluster, then -o consumes the rest ("16").
        let parsed = parse_compress_args(&args(&["-nvo16"])).unwrap();
        assert!(parsed.params.zero_offset);
        assert_eq!(parsed.verbosity, Verbosity(2));
        assert_eq!(parsed.params.bits_moff, 16);
    }

    #[test]
    fn clustered_value_flag_with_separate_value_token() {
        // "-no" takes its value from the next token since nothing follows
        // the 'o' in this token.
        let parsed = parse_compress_args(&args(&["-no", "16"])).unwrap();
        assert!(parsed.params.zero_offset);
        assert_eq!(parsed.params.bits_moff, 16);
    }

    #[test]
    fn debug_flag() {
        assert!(parse_compress_args(&args(&["-d"])).unwrap().debug);
    }

    #[test]
    fn help_flag_short_circuits() {
        assert_eq!(parse_compress_args(&args(&["-h"])).unwrap_err(), ArgsError::HelpRequested);
        assert_eq!(parse_decompress_args(&args(&["--help"])).unwrap_err(), ArgsError::HelpRequested);
    }

    #[test]
    fn unknown_flag_is_rejected() {
        assert!(matches!(
            parse_compress_args(&args(&["-z"])).unwrap_err(),
            ArgsError::UnknownFlag(_)
        ));
    }

    #[test]
    fn invalid_config_propagates() {
        let err = parse_compress_args(&args(&["-m0"])).unwrap_err();
        assert_eq!(err, ArgsError::Config(ConfigError::MatchLenRange));
    }

    #[test]
    fn decompress_specific_flags() {
        let parsed = parse_decompress_args(&args(&["-x", "-v"])).unwrap();
        assert!(parsed.params.exor_offset);
        assert!(parsed.verbose);
    }

    #[test]
    fn decompress_rejects_compressor_only_flags() {
        assert!(matches!(
            parse_decompress_args(&args(&["-d"])).unwrap_err(),
            ArgsError::UnknownFlag(_)
        ));
    }

    #[test]
    fn absolute_address_accepts_hex() {
        let parsed = parse_compress_args(&args(&["-A", "0xFF"])).unwrap();
        assert_eq!(parsed.params.offset_rel, Some(0xFF));
    }

    #[test]
    fn missing_value_is_an_error() {
        assert_eq!(parse_compress_args(&args(&["-o"])).unwrap_err(), ArgsError::MissingValue('o'));
    }
}
