//! Optimal parser (component C3) — the core of this codec.
//!
//! Fills a table of per-position decisions by sweeping backward from the
//! end of the input, so that every choice at `p` only ever depends on
//! already-computed entries at `p' > p`. This module is a direct,
//! safe-Rust transcription of that recurrence.

use super::cost::{llen_cost, mlen_cost, moff_cost, zero_match_cost, Cost, INFINITE_COST};
use super::matcher::find_best_match;
use super::params::Params;

/// Bound on how many raw bytes the literal branch considers extending by at
/// each position. Chaining through intermediate positions means this is an
/// empirical shortcut rather than a loss of generality.
const LITERAL_EXTEND_BOUND: usize = 5;

/// One entry of the backward DP table, indexed by input position `p`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateEntry {
    /// Bit-cost of the best encoding that starts a literal run at `p`.
    pub lbits: Cost,
    /// Length of that literal run.
    pub llen: u32,
    /// Bit-cost of the best encoding that starts a match at `p`.
    pub mbits: Cost,
    /// Length of that match.
    pub mlen: u32,
    /// Back-distance of that match (1 = previous byte).
    pub mpos: u32,
}

impl StateEntry {
    const fn sentinel() -> Self {
        StateEntry { lbits: 0, llen: 0, mbits: INFINITE_COST, mlen: 0, mpos: 0 }
    }
}

/// Builds the backward DP table for `data` under `params`.
///
/// The returned table has `data.len() + 1` entries; entry `N` is the
/// sentinel terminator (`lbits = 0, llen = 0, mbits = INFINITE_COST`).
pub fn build_table(data: &[u8], params: &Params) -> Vec<StateEntry> {
    let size = data.len();
    let zmc = zero_match_cost(params);
    let mut sp = vec![StateEntry::sentinel(); size + 1];
    if size == 0 {
        return sp;
    }

    for pos in (0..size).rev() {
        let literal = solve_literal_branch(&sp, pos, size, params, zmc);
        let matched = solve_match_branch(data, &sp, pos, params, zmc);
        sp[pos] = StateEntry {
            lbits: literal.0,
            llen: literal.1,
            mbits: matched.0,
            mlen: matched.1,
            mpos: matched.2,
        };
    }
    sp
}

/// Literal branch: either extend the literal run already starting at
/// `p+i` by `i` raw bytes, or terminate a fresh `i`-byte literal run by
/// transitioning into a match at `p+i`.
fn solve_literal_branch(
    sp: &[StateEntry],
    pos: usize,
    size: usize,
    params: &Params,
    zmc: Cost,
) -> (Cost, u32) {
    let mut best_bits = INFINITE_COST;
    let mut best_len = 0u32;
    let mut max_run_so_far = 0u32;

    for i in 1..=LITERAL_EXTEND_BOUND {
        if pos + i > size {
            break;
        }
        let nxt = &sp[pos + i];
        let run_len = nxt.llen + i as u32;
        if run_len > max_run_so_far {
            max_run_so_far = run_len;
        }
        let bits = nxt.lbits + 8 * i as Cost - llen_cost(nxt.llen, params, zmc)
            + llen_cost(run_len, params, zmc);
        if bits < best_bits {
            best_bits = bits;
            best_len = run_len;
        }
    }

    // i bytes of literal, then a fresh match at p+i. The literal run is
    // exactly i bytes long, so its length field is priced from scratch.
    if max_run_so_far >= 1 {
        for i in 1..=(max_run_so_far - 1) {
            let i = i as usize;
            let nxt = &sp[pos + i];
            let bits = nxt.mbits + 8 * i as Cost + llen_cost(i as u32, params, zmc);
            if bits < best_bits {
                best_bits = bits;
                best_len = i as u32;
            }
        }
    }

    (best_bits, best_len)
}

/// Match branch: find the best back-reference at `p` via [`find_best_match`],
/// then choose the length `l` and successor mode (match or literal) that
/// minimises total cost.
fn solve_match_branch(
    data: &[u8],
    sp: &[StateEntry],
    pos: usize,
    params: &Params,
    _zmc: Cost,
) -> (Cost, u32, u32) {
    let found = find_best_match(data, pos, params);
    if found.len == 0 {
        return (INFINITE_COST, 0, 0);
    }

    let mut best_bits = INFINITE_COST;
    let mut best_len = 0u32;
    let moff = moff_cost(found.dist, params);

    for l in params.min_mlen..=found.len {
        let nxt = &sp[pos + l as usize];
        let base = moff + mlen_cost(l, params);

        // Landing in a match: the successor opens with a one-byte literal splice.
        let mbits = nxt.mbits + llen_cost(1, params, _zmc) + base;
        // Landing in a literal: no splice needed, the literal just continues.
        let lbits = nxt.lbits + base;

        if lbits <= best_bits {
            best_bits = lbits;
            best_len = l;
        }
        if mbits <= best_bits {
            best_bits = mbits;
            best_len = l;
        }
    }

    (best_bits, best_len, found.dist)
}
