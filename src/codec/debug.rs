//! Per-position parse trace for the `-d` flag (spec supplement; mirrors
//! `lz8s.c`'s `debug_encode`). Walks the DP table the same way the emitter
//! does and prints each decision instead of writing bytes.

use super::cost::{llen_cost, mlen_cost, moff_cost, zero_match_cost, Cost};
use super::params::Params;
use super::parser::StateEntry;

/// Writes one line per L/M decision in the parse of `sp`, to stderr.
///
/// Mirrors the upstream layout: position in hex, the raw `(lbits:mbits)`
/// pair, then the chosen branch with its length, overhead and the delta
/// between the table's predicted cost and what this step actually commits.
pub fn dump_parse(sp: &[StateEntry], params: &Params) {
    let zmc = zero_match_cost(params);
    let size = sp.len().saturating_sub(1);
    let mut in_literal = false;
    let mut pos = 0usize;

    while pos < size {
        let cur = &sp[pos];
        let cm = if cur.mbits >= super::cost::INFINITE_COST { -1 } else { cur.mbits };
        let extra_cost: Cost = if in_literal { zmc } else { 0 };

        if cur.lbits + extra_cost <= cur.mbits {
            let len = cur.llen;
            let mut cost = llen_cost(len, params, zmc) + len as Cost * 8;
            if in_literal {
                eprint!("M0 ({:4})\n                        ", zmc / 8);
                cost += zmc;
            }
            eprintln!(
                "[{pos:04X}]: ({:6}:{cm:6}) L {len:3} {:4} | {:6} -{cost:5} ->{:6}",
                cur.lbits,
                llen_cost(len, params, zmc) / 8 + len as Cost,
                cur.lbits,
                cur.lbits - cost
            );
            pos += len as usize;
            in_literal = true;
        } else {
            let mpos = cur.mpos;
            let len = cur.mlen;
            let mut cost = mlen_cost(len, params) + moff_cost(mpos, params);
            if !in_literal {
                eprint!("L0 ({:4})\n                        ", llen_cost(0, params, zmc));
                cost += llen_cost(0, params, zmc);
            }
            eprintln!(
                "[{pos:04X}]: ({:6}:{cm:6}) M {len:3} {:4} | {:6} -{cost:5} ->{:6}",
                cur.lbits,
                (mlen_cost(len, params) + moff_cost(mpos, params)) / 8,
                cur.mbits,
                cur.mbits - cost
            );
            pos += len as usize;
            in_literal = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::parser::build_table;
    use super::*;

    #[test]
    fn dump_does_not_panic_on_varied_inputs() {
        for data in [&b""[..], b"A", b"AAAAAAAA", b"the quick brown fox"] {
            let params = Params::default();
            let sp = build_table(data, &params);
            dump_parse(&sp, &params);
        }
    }
}
