//! ASCII number decoding shared by the sentence parser.
//!
//! Every routine reads a field up to the end of the slice or the first `0`
//! byte, whichever comes first, and degrades to `0` on malformed input instead
//! of signalling.

/// Bytes of `val` before its terminator.
fn terminated(val: &[u8]) -> &[u8] {
    match val.iter().position(|&b| b == 0) {
        Some(end) => &val[..end],
        None => val,
    }
}

/// Splits an optional leading sign off `val`. True means negative.
fn split_sign(val: &[u8]) -> (bool, &[u8]) {
    match val.first() {
        Some(b'-') => (true, &val[1..]),
        Some(b'+') => (false, &val[1..]),
        _ => (false, val),
    }
}

fn to_digit(b: u8) -> Option<u8> {
    b.is_ascii_digit().then(|| b - b'0')
}

/// Value of a single hex digit in either case. Anything else is `0`.
pub(crate) fn from_hex(c: u8) -> u8 {
    match c {
        b'0'..=b'9' => c - b'0',
        b'a'..=b'f' => c - b'a' + 10,
        b'A'..=b'F' => c - b'A' + 10,
        _ => 0,
    }
}

/// Equality of two terminated byte strings.
pub(crate) fn string_equals(lhs: &[u8], rhs: &[u8]) -> bool {
    terminated(lhs) == terminated(rhs)
}

/// Leading decimal integer of `val`. Overflow wraps.
pub(crate) fn string_to_int(val: &[u8]) -> i32 {
    let (negative, digits) = split_sign(terminated(val));

    let mut result: i32 = 0;
    for d in digits.iter().map_while(|&b| to_digit(b)) {
        result = result.wrapping_mul(10).wrapping_add(d as i32);
    }

    if negative {
        result.wrapping_neg()
    } else {
        result
    }
}

/// Leading decimal number of `val`, with at most one `.`.
pub(crate) fn string_to_float(val: &[u8]) -> f32 {
    let (negative, digits) = split_sign(terminated(val));

    let mut result = 0.0f32;
    let mut places = 0u32;
    let mut found_dot = false;

    for &b in digits {
        match to_digit(b) {
            Some(d) => {
                result = result * 10.0 + d as f32;
                if found_dot {
                    places += 1;
                }
            }
            None if b == b'.' && !found_dot => found_dot = true,
            None => break,
        }
    }

    for _ in 0..places {
        result /= 10.0;
    }

    if negative {
        -result
    } else {
        result
    }
}

/// Decimal degrees from `D..DMM.MMMM` where the degree part is `width` wide.
fn parse_ddmm(val: &[u8], width: usize) -> f32 {
    if val.len() < width {
        return 0.0;
    }

    let (deg, min) = val.split_at(width);
    let degrees = string_to_int(deg) as f32;
    let minutes = string_to_float(min);

    degrees + minutes / 60.0
}

/// Decimal degrees from an unsigned `DDMM.MMMM` latitude field.
pub(crate) fn parse_latitude(val: &[u8]) -> f32 {
    parse_ddmm(val, 2)
}

/// Decimal degrees from an unsigned `DDDMM.MMMM` longitude field.
pub(crate) fn parse_longitude(val: &[u8]) -> f32 {
    parse_ddmm(val, 3)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn hex_digits() {
        for (i, c) in b"0123456789".iter().enumerate() {
            assert_eq!(from_hex(*c), i as u8);
        }
        for (i, c) in b"ABCDEF".iter().enumerate() {
            assert_eq!(from_hex(*c), 10 + i as u8);
        }
        for (i, c) in b"abcdef".iter().enumerate() {
            assert_eq!(from_hex(*c), 10 + i as u8);
        }
    }

    #[test]
    fn hex_rejects_to_zero() {
        assert_eq!(from_hex(b'Z'), 0);
        assert_eq!(from_hex(b'g'), 0);
        assert_eq!(from_hex(0x10), 0);
        assert_eq!(from_hex(0xdd), 0);
        assert_eq!(from_hex(0), 0);
    }

    #[test]
    fn equals() {
        assert!(string_equals(b"ABC", b"ABC"));
        assert!(string_equals(b"GPGGA\0", b"GPGGA"));
        assert!(string_equals(b"", b"\0"));

        assert!(!string_equals(b"ABC", b"ABCDEF"));
        assert!(!string_equals(b"QWERTY", b"WASD"));
        assert!(!string_equals(b"GPGGA\0", b"GPGG"));
        assert!(!string_equals(b"QWERTY", b""));
    }

    #[test]
    fn ints() {
        assert_eq!(string_to_int(b"10"), 10);
        assert_eq!(string_to_int(b"1324"), 1324);
        assert_eq!(string_to_int(b"159.88"), 159);
        assert_eq!(string_to_int(b"153621.000\0"), 153621);
        assert_eq!(string_to_int(b"-42"), -42);
        assert_eq!(string_to_int(b"+42"), 42);
    }

    #[test]
    fn ints_stop_at_non_digit() {
        assert_eq!(string_to_int(b"159aab"), 159);
        assert_eq!(string_to_int(b"abc150"), 0);
        assert_eq!(string_to_int(b"12\034"), 12);
    }

    #[test]
    fn ints_empty_is_zero() {
        assert_eq!(string_to_int(b""), 0);
        assert_eq!(string_to_int(b"\0"), 0);
        assert_eq!(string_to_int(b"-"), 0);
    }

    #[test]
    fn ints_wrap_on_overflow() {
        assert_eq!(string_to_int(b"4294967296"), 0);
        assert_eq!(string_to_int(b"2147483648"), i32::MIN);
    }

    #[test]
    fn floats() {
        assert_eq!(string_to_float(b"10"), 10.0);
        assert_eq!(string_to_float(b"1324"), 1324.0);
        assert_relative_eq!(string_to_float(b"159.88"), 159.88, max_relative = 1e-6);
        assert_relative_eq!(string_to_float(b"-30.1\0"), -30.1, max_relative = 1e-6);
        assert_relative_eq!(string_to_float(b"+2.07"), 2.07, max_relative = 1e-6);
        assert_relative_eq!(string_to_float(b".5"), 0.5, max_relative = 1e-6);
    }

    #[test]
    fn floats_stop_at_non_digit() {
        assert_relative_eq!(string_to_float(b"159.123aab"), 159.123, max_relative = 1e-6);
        assert_relative_eq!(string_to_float(b"1.2.3"), 1.2, max_relative = 1e-6);
        assert_eq!(string_to_float(b"abc150.15"), 0.0);
    }

    #[test]
    fn floats_empty_is_zero() {
        assert_eq!(string_to_float(b""), 0.0);
        assert_eq!(string_to_float(b"\0"), 0.0);
    }

    #[test]
    fn latitude() {
        let expected = 38.0f32 + 54.8732 / 60.0;
        assert_relative_eq!(parse_latitude(b"3854.8732\0"), expected, max_relative = 1e-6);
        assert_relative_eq!(parse_latitude(b"3854.8732"), expected, max_relative = 1e-6);
        assert_eq!(parse_latitude(b"3"), 0.0);
        assert_eq!(parse_latitude(b"\0"), 0.0);
        assert_eq!(parse_latitude(b""), 0.0);
    }

    #[test]
    fn longitude() {
        let expected = 94.0f32 + 45.3680 / 60.0;
        assert_relative_eq!(parse_longitude(b"09445.3680\0"), expected, max_relative = 1e-6);
        assert_relative_eq!(parse_longitude(b"18000.0000"), 180.0, max_relative = 1e-6);
        assert_eq!(parse_longitude(b"09"), 0.0);
        assert_eq!(parse_longitude(b"\0"), 0.0);
    }
}
