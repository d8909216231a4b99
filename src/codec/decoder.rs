//! Stream decoder (component C5) — the deliberately trivial half of the
//! codec. A direct state-machine inversion of the wire format:
//! `ReadLitLen → ReadLitBytes(n) → ReadMatchLen → [ReadOffset] → CopyMatch`.
//!
//! The circular window is sized as a fixed 64 KiB buffer regardless of
//! `bits_moff`; only the low `mask` bits of `pos`/offset are ever used to
//! index it, matching the upstream decoder's fixed `char buf[65536]`.

use super::params::Params;
use std::fmt;

/// Window size: large enough to cover every legal `bits_moff` (up to 16).
const WINDOW_SIZE: usize = 65536;

/// Where a truncated stream ran out of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// End of file partway through a two-byte length field's second byte.
    LengthSecondByte,
    /// End of file partway through a literal run's payload bytes.
    LiteralPayload,
    /// End of file partway through a match's offset field.
    MatchOffset,
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            DecodeError::LengthSecondByte => "end of file reading second byte of length",
            DecodeError::LiteralPayload => "short file reading literal",
            DecodeError::MatchOffset => "short file reading match offset",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for DecodeError {}

/// Result of decoding a byte stream: either every record was read cleanly
/// (EOF landed exactly on a length-field boundary), or the stream was
/// truncated mid-field/mid-payload. Either way, the bytes produced so far
/// are available — decoding is always best-effort.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeOutcome {
    Complete(Vec<u8>),
    Truncated { partial: Vec<u8>, error: DecodeError },
}

impl DecodeOutcome {
    /// The bytes successfully decoded, regardless of whether the stream was
    /// truncated.
    pub fn bytes(&self) -> &[u8] {
        match self {
            DecodeOutcome::Complete(v) => v,
            DecodeOutcome::Truncated { partial, .. } => partial,
        }
    }

    pub fn is_truncated(&self) -> bool {
        matches!(self, DecodeOutcome::Truncated { .. })
    }
}

enum LenResult {
    /// Clean end of stream: no more bytes at a length-field boundary.
    Eof,
    Value(u32),
    Truncated,
}

/// Reads one length field (LLEN or MLEN encoding): one byte if
/// `max < 256` or the top bit is clear, otherwise two bytes low-byte-first.
fn read_len(data: &[u8], cursor: &mut usize, max: u32) -> LenResult {
    let Some(&c) = data.get(*cursor) else {
        return LenResult::Eof;
    };
    *cursor += 1;
    if max < 256 || c < 128 {
        return LenResult::Value(c as u32);
    }
    let Some(&c2) = data.get(*cursor) else {
        return LenResult::Truncated;
    };
    *cursor += 1;
    LenResult::Value(c as u32 + ((c2 as u32) << 7))
}

/// Decodes an LZ8S byte stream back into the original input.
///
/// `params` must match the parameters used to produce `data` exactly — the
/// wire format carries no self-description.
pub fn decode(data: &[u8], params: &Params) -> DecodeOutcome {
    let mask = params.mask();
    let mut window = vec![0u8; WINDOW_SIZE];
    let mut pos: u32 = 0;
    let mut cursor = 0usize;
    let mut out = Vec::new();

    loop {
        let llen = match read_len(data, &mut cursor, params.max_llen) {
            LenResult::Eof => break,
            LenResult::Value(n) => n,
            LenResult::Truncated => {
                return DecodeOutcome::Truncated { partial: out, error: DecodeError::LengthSecondByte }
            }
        };

        for _ in 0..llen {
            let Some(&b) = data.get(cursor) else {
                return DecodeOutcome::Truncated { partial: out, error: DecodeError::LiteralPayload };
            };
            cursor += 1;
            window[(pos & mask) as usize] = b;
            out.push(b);
            pos += 1;
        }

        let mlen = match read_len(data, &mut cursor, params.max_mlen) {
            LenResult::Eof => break,
            LenResult::Value(n) => n,
            LenResult::Truncated => {
                return DecodeOutcome::Truncated { partial: out, error: DecodeError::LengthSecondByte }
            }
        };

        if mlen == 0 && !params.zero_offset {
            continue;
        }

        let mut wire_off: u32 = 0;
        if params.bits_moff > 0 {
            let Some(&b0) = data.get(cursor) else {
                return DecodeOutcome::Truncated { partial: out, error: DecodeError::MatchOffset };
            };
            cursor += 1;
            wire_off = b0 as u32;
        }
        if params.bits_moff > 8 {
            let Some(&b1) = data.get(cursor) else {
                return DecodeOutcome::Truncated { partial: out, error: DecodeError::MatchOffset };
            };
            cursor += 1;
            wire_off |= (b1 as u32) << 8;
        }
        if params.exor_offset {
            wire_off = mask ^ wire_off;
        }

        let mut src: u32 = match params.offset_rel {
            None => pos.wrapping_sub(wire_off).wrapping_add(mask),
            Some(base) => wire_off.wrapping_add(mask).wrapping_add(1).wrapping_sub(base),
        };

        for _ in 0..mlen {
            let b = window[(src & mask) as usize];
            window[(pos & mask) as usize] = b;
            out.push(b);
            pos += 1;
            src += 1;
        }
    }

    DecodeOutcome::Complete(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_stream_decodes_to_empty() {
        let out = decode(&[], &Params::default());
        assert_eq!(out, DecodeOutcome::Complete(Vec::new()));
    }

    #[test]
    fn single_literal_no_terminator_needed() {
        // "01 41" — lit-len 1, byte 'A'; EOF at the next LLEN read is clean.
        let out = decode(&[0x01, 0x41], &Params::default());
        assert_eq!(out.bytes(), b"A");
        assert!(!out.is_truncated());
    }

    #[test]
    fn literal_then_self_referential_match() {
        // lit 'A', then match len 7 off 0 (distance 1): "AAAAAAAA".
        let stream = [0x01, 0x41, 0x07, 0x00];
        let out = decode(&stream, &Params::default());
        assert_eq!(out.bytes(), b"AAAAAAAA");
    }

    #[test]
    fn literal_then_match_distance_two() {
        // lit "AB", then match len 4 off 1 (distance 2): "ABABAB".
        let stream = [0x02, 0x41, 0x42, 0x04, 0x01];
        let out = decode(&stream, &Params::default());
        assert_eq!(out.bytes(), b"ABABAB");
    }

    #[test]
    fn zero_bits_moff_reads_no_offset_byte() {
        let params = Params { bits_moff: 0, ..Params::default() };
        // lit 'A', match len 3 (no offset field emitted or read).
        let stream = [0x01, 0x41, 0x03];
        let out = decode(&stream, &params);
        assert_eq!(out.bytes(), b"AAAA");
    }

    #[test]
    fn truncated_literal_payload_is_best_effort() {
        // Claims a 5-byte literal but only 2 bytes follow.
        let out = decode(&[0x05, b'h', b'i'], &Params::default());
        assert_eq!(out.bytes(), b"hi");
        assert_eq!(
            out,
            DecodeOutcome::Truncated { partial: b"hi".to_vec(), error: DecodeError::LiteralPayload }
        );
    }

    #[test]
    fn truncated_match_offset_is_best_effort() {
        // Literal "A" decodes fully, then a match length byte with no offset byte.
        let out = decode(&[0x01, b'A', 0x03], &Params::default());
        assert_eq!(out.bytes(), b"A");
        assert!(out.is_truncated());
    }

    #[test]
    fn two_byte_length_field_decodes() {
        let params = Params { max_llen: 300, ..Params::default() };
        // 200-byte literal, length field: 0x80|200&0x7F, (200>>7)-1
        let mut stream = vec![(0x80 | (200u32 & 0x7F)) as u8, ((200u32 >> 7) - 1) as u8];
        stream.extend(std::iter::repeat(b'Q').take(200));
        let out = decode(&stream, &params);
        assert_eq!(out.bytes(), vec![b'Q'; 200]);
    }

    #[test]
    fn exor_offset_inverts_wire_offset() {
        let params = Params { exor_offset: true, ..Params::default() };
        // distance 1 (wire offset 0) becomes wire-visible as mask^0 = 0xFF.
        let stream = [0x01, b'A', 0x03, 0xFF];
        let out = decode(&stream, &params);
        assert_eq!(out.bytes(), b"AAAA");
    }

    #[test]
    fn absolute_offset_mode() {
        let params = Params { offset_rel: Some(0), ..Params::default() };
        // lit "AB" (pos 0,1), match at pos=2 referencing mpos=2: wire off = pos+base-mpos = 0.
        let stream = [0x02, b'A', b'B', 0x04, 0x00];
        let out = decode(&stream, &params);
        assert_eq!(out.bytes(), b"ABABAB");
    }

    #[test]
    fn zero_offset_flag_forces_offset_byte_on_empty_match() {
        let params = Params { zero_offset: true, ..Params::default() };
        // Literal "A", splice: zero-length match WITH an offset byte, then literal "B".
        let stream = [0x01, b'A', 0x00, 0x00, 0x01, b'B'];
        let out = decode(&stream, &params);
        assert_eq!(out.bytes(), b"AB");
    }
}
