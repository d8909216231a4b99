//! Pure bit-cost functions for literal lengths, match lengths and match
//! offsets (component C1).
//!
//! All costs are expressed in bits and are always multiples of 8 — the wire
//! format has no sub-byte fields. [`INFINITE_COST`] stands in for "no legal
//! encoding"; it is large enough that summing any chain of finite costs that
//! fits within [`crate::codec::params::MAX_INPUT_SIZE`] can never reach it.

use super::params::Params;

/// Cost, in bits. A plain alias rather than a newtype: these values are
/// summed and compared against plain integer literals throughout the parser.
pub type Cost = i64;

/// Sentinel cost for an illegal encoding. Mirrors `INFINITE_COST` (`INT_MAX/256`)
/// in the upstream C source, widened to `i64` headroom.
pub const INFINITE_COST: Cost = (i32::MAX as i64) / 256;

/// Cost of a match-length field of value `l`.
///
/// - `l > max_mlen` → illegal, [`INFINITE_COST`].
/// - Two-byte length (`max_mlen > 255 && l > 127`) → 16 bits.
/// - Otherwise → 8 bits.
#[inline]
pub fn mlen_cost(l: u32, params: &Params) -> Cost {
    if l > params.max_mlen {
        INFINITE_COST
    } else if params.max_mlen > 255 && l > 127 {
        16
    } else {
        8
    }
}

/// Cost of a match-offset field encoding back-distance `o`.
///
/// - `o` outside `[1, max_off]` → illegal, [`INFINITE_COST`].
/// - `bits_moff == 0` → field is absent, 0 bits.
/// - `bits_moff <= 8` → 8 bits, else 16 bits.
#[inline]
pub fn moff_cost(o: u32, params: &Params) -> Cost {
    if o < 1 || o > params.max_off() {
        INFINITE_COST
    } else if params.bits_moff == 0 {
        0
    } else if params.bits_moff <= 8 {
        8
    } else {
        16
    }
}

/// Cost of a zero-length match record, including the offset field if
/// [`Params::zero_offset`] requires one. Computed once per parse and passed
/// to [`llen_cost`] / the emitter, since it recurs in every literal-run
/// splice and at every literal→literal mode switch.
#[inline]
pub fn zero_match_cost(params: &Params) -> Cost {
    mlen_cost(0, params) + if params.zero_offset { moff_cost(1, params) } else { 0 }
}

/// Cost of encoding a literal run of length `l`, including any zero-length
/// match splices required to stay within `max_llen` per chunk.
///
/// `zmc` is the pre-computed [`zero_match_cost`] for these parameters.
pub fn llen_cost(mut l: u32, params: &Params, zmc: Cost) -> Cost {
    if l == 0 {
        return 0;
    }
    let mut bits: Cost = 0;
    while l > params.max_llen {
        bits += 8 + zmc;
        l -= params.max_llen;
    }
    if params.max_llen > 255 && l > 127 {
        bits += 8;
    }
    8 + bits
}
