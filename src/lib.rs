//! LZ8S — a small LZ77-family byte-stream codec with no self-describing
//! header; both ends must agree on a shared [`codec::Params`] out of band.

pub mod cli;
pub mod codec;
pub mod io;
pub mod lorem;

pub use codec::{compress_buffer, compress_buffer_with_stats, decompress_buffer};
pub use codec::{ConfigError, Cost, DecodeError, DecodeOutcome, Params, Stats, INFINITE_COST};
