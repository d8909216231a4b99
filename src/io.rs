//! File and stream I/O shared by both binaries (component C6).
//!
//! Only the compressor's source read is capped at
//! [`codec::params::MAX_INPUT_SIZE`] bytes, matching `lz8s.c`'s fixed
//! `fread(buf, 1, sizeof(buf), f)` call into a stack buffer — bytes past that
//! point are silently never read, not reported as an error. `lz8dec.c`'s
//! `decode()` instead streams byte-by-byte via `getchar()` with no size cap
//! at all, since a 128 KiB *original* buffer can compress to a *larger* byte
//! stream (worst case: every literal run saturates and needs a splice), so
//! the decompressor must read its whole input.

use std::fs::File;
use std::io::{self, Read, Write};

use crate::codec::params::MAX_INPUT_SIZE;

/// Reads from `path`, or from standard input when `path` is `None`.
///
/// Stops after [`MAX_INPUT_SIZE`] bytes, whatever the real source length is;
/// this mirrors the fixed-size input buffer `lz8s.c` reads the original data
/// into and is why the wire format never needs to describe a total input
/// length. Use [`read_all`] for the decompressor, whose input is the
/// compressed stream and carries no such cap.
pub fn read_input(path: Option<&str>) -> io::Result<Vec<u8>> {
    let mut buf = vec![0u8; MAX_INPUT_SIZE];
    let mut reader: Box<dyn Read> = match path {
        Some(p) => Box::new(File::open(p)?),
        None => Box::new(io::stdin()),
    };
    let mut total = 0;
    while total < buf.len() {
        let n = reader.read(&mut buf[total..])?;
        if n == 0 {
            break;
        }
        total += n;
    }
    buf.truncate(total);
    Ok(buf)
}

/// Reads the entire contents of `path`, or of standard input when `path` is
/// `None`, with no size cap.
///
/// For `lz8dec`, whose input is an already-compressed byte stream that can
/// exceed [`MAX_INPUT_SIZE`] (a 128 KiB incompressible original saturates
/// into ~515 literal-length bytes plus ~514 zero-match splice bytes of
/// overhead on top of the raw data), mirroring `lz8dec.c`'s uncapped
/// `getchar()` loop.
pub fn read_all(path: Option<&str>) -> io::Result<Vec<u8>> {
    let mut buf = Vec::new();
    let mut reader: Box<dyn Read> = match path {
        Some(p) => Box::new(File::open(p)?),
        None => Box::new(io::stdin()),
    };
    reader.read_to_end(&mut buf)?;
    Ok(buf)
}

/// Writes `data` to `path`, or to standard output when `path` is `None`.
pub fn write_output(path: Option<&str>, data: &[u8]) -> io::Result<()> {
    let mut writer: Box<dyn Write> = match path {
        Some(p) => Box::new(File::create(p)?),
        None => Box::new(io::stdout()),
    };
    writer.write_all(data)?;
    writer.flush()
}
