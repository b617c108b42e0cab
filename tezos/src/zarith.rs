//! Zarith natural-number encoding (unsigned LEB128), as used by the Tezos
//! operation forge for fees, counters, limits and amounts.

/// Longest valid encoding of a `u64`: ceil(64 / 7) bytes.
const MAX_ENCODED_LEN: usize = 10;

/// Encode `value` in its minimal Zarith form.
pub fn encode_zarith(mut value: u64) -> Vec<u8> {
    let mut out = Vec::with_capacity(MAX_ENCODED_LEN);
    while value >= 0x80 {
        out.push((value as u8 & 0x7f) | 0x80);
        value >>= 7;
    }
    out.push(value as u8);
    out
}

/// Encode a signed quantity that must be non-negative.
///
/// # Panics
///
/// Panics if `value` is negative; Zarith naturals have no sign.
pub fn encode_zarith_signed(value: i64) -> Vec<u8> {
    assert!(value >= 0, "zarith natural cannot encode negative value {value}");
    encode_zarith(value as u64)
}

/// Append the Zarith encoding of `value` to `buf`.
pub fn write_zarith(buf: &mut Vec<u8>, value: u64) {
    buf.extend_from_slice(&encode_zarith(value));
}

/// Decode a Zarith natural from the front of `bytes`.
///
/// Returns the value and the number of bytes consumed, or `None` when the
/// input is truncated or does not fit in 64 bits.
pub fn decode_zarith(bytes: &[u8]) -> Option<(u64, usize)> {
    let mut value: u64 = 0;
    for (i, &byte) in bytes.iter().enumerate().take(MAX_ENCODED_LEN) {
        let chunk = u64::from(byte & 0x7f);
        let shift = 7 * i as u32;
        if shift == 63 && chunk > 1 {
            return None;
        }
        value |= chunk << shift;
        if byte & 0x80 == 0 {
            return Some((value, i + 1));
        }
    }
    None
}
