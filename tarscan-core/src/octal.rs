//! ASCII-octal numeric fields.

/// Parse an octal number, skipping leading and trailing padding.
///
/// Bytes before the first `'0'..='7'` are skipped (spaces, NULs, anything
/// else), then consecutive octal digits are accumulated until the first
/// non-digit or the end of the field. A field with no digits parses as 0.
/// Malformed input is never an error; this matches the tolerance historical
/// tar readers apply to NUL/space padded fields.
pub fn parse_octal(field: &[u8]) -> u64 {
    field
        .iter()
        .skip_while(|b| !is_octal_digit(**b))
        .take_while(|b| is_octal_digit(**b))
        .fold(0u64, |acc, &b| {
            acc.saturating_mul(8).saturating_add(u64::from(b - b'0'))
        })
}

#[inline]
fn is_octal_digit(b: u8) -> bool {
    (b'0'..=b'7').contains(&b)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(value: u64, width: usize) -> Vec<u8> {
        format!("{:0width$o}", value, width = width).into_bytes()
    }

    #[test]
    fn test_parse_octal() {
        assert_eq!(parse_octal(b"0000644\0"), 0o644);
        assert_eq!(parse_octal(b"0001750\0"), 0o1750);
        assert_eq!(parse_octal(b"00000000015\0"), 13);
    }

    #[test]
    fn test_leading_spaces_trailing_nul() {
        assert_eq!(parse_octal(b"  755\0\0\0"), 493);
    }

    #[test]
    fn test_stops_at_first_non_digit() {
        assert_eq!(parse_octal(b"17 23\0"), 0o17);
        assert_eq!(parse_octal(b"0128"), 0o12);
    }

    #[test]
    fn test_no_digits() {
        assert_eq!(parse_octal(b""), 0);
        assert_eq!(parse_octal(b"\0\0\0\0\0\0\0\0"), 0);
        assert_eq!(parse_octal(b"        "), 0);
        assert_eq!(parse_octal(b"xyz"), 0);
    }

    #[test]
    fn test_bounded_by_field_width() {
        let block = b"0000644\x0077777";
        assert_eq!(parse_octal(&block[..8]), 0o644);
        assert_eq!(parse_octal(&block[..3]), 0);
    }

    #[test]
    fn test_round_trip_boundaries() {
        for width in 1..=11usize {
            let max = 8u64.pow(width as u32) - 1;
            for value in [0, 1, 7, 8, max / 2, max] {
                if value > max {
                    continue;
                }
                assert_eq!(parse_octal(&field(value, width)), value, "width {width}");
            }
        }
    }

    #[test]
    fn test_round_trip_three_digit_exhaustive() {
        for value in 0..8u64.pow(3) {
            assert_eq!(parse_octal(&field(value, 3)), value);
        }
    }

    #[test]
    fn test_saturates_on_long_digit_runs() {
        let digits = vec![b'7'; 64];
        assert_eq!(parse_octal(&digits), u64::MAX);
    }
}
