//! Number literal conversion and display.
//!
//! The lexer accepts any run of digits and dots as a number token, so
//! conversion is lenient: the longest leading `digits[.digits]` prefix is
//! used (`1.2.3` is `1.2`) and text without a digit in that prefix is NaN.

/// Convert number literal text to a float.
pub fn parse_number(text: &str) -> f64 {
    let bytes = text.as_bytes();
    let int_len = bytes.iter().take_while(|b| b.is_ascii_digit()).count();
    let mut frac_len = 0;
    if bytes.get(int_len) == Some(&b'.') {
        frac_len = bytes[int_len + 1..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count();
    }
    if int_len == 0 && frac_len == 0 {
        return f64::NAN;
    }

    let int_part = if int_len == 0 { "0" } else { &text[..int_len] };
    let literal = if frac_len == 0 {
        int_part.to_string()
    } else {
        format!("{int_part}.{}", &text[int_len + 1..int_len + 1 + frac_len])
    };
    literal.parse().unwrap_or(f64::NAN)
}

/// Display a number the way the language prints it: integral values
/// without a fraction, otherwise the shortest form that round-trips.
/// Magnitudes from `1e21` up and below `1e-6` use exponent form (`1e+21`,
/// `1.5e-7`).
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else if n == 0.0 {
        // Covers negative zero.
        "0".to_string()
    } else {
        let scientific = format!("{n:e}");
        match scientific.split_once('e') {
            Some((mantissa, exponent)) => match exponent.parse::<i32>() {
                Ok(e) if e >= 21 => format!("{mantissa}e+{exponent}"),
                Ok(e) if e <= -7 => format!("{mantissa}e{exponent}"),
                _ => n.to_string(),
            },
            None => n.to_string(),
        }
    }
}

/// True if `text` lexes back as a single number literal.
pub fn is_literal(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit() || b == b'.')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_literals() {
        assert_eq!(parse_number("3"), 3.0);
        assert_eq!(parse_number("3.1"), 3.1);
        assert_eq!(parse_number("12.8"), 12.8);
        assert_eq!(parse_number(".128"), 0.128);
        assert_eq!(parse_number("5."), 5.0);
    }

    #[test]
    fn test_parse_uses_longest_valid_prefix() {
        assert_eq!(parse_number("1.2.3"), 1.2);
        assert_eq!(parse_number("7.."), 7.0);
    }

    #[test]
    fn test_parse_without_digits_is_nan() {
        assert!(parse_number(".").is_nan());
        assert!(parse_number("..5").is_nan());
        assert!(parse_number("").is_nan());
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(7.0), "7");
        assert_eq!(format_number(-1.0), "-1");
        assert_eq!(format_number(0.75), "0.75");
        assert_eq!(format_number(22.2), "22.2");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(f64::INFINITY), "Infinity");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(format_number(f64::NAN), "NaN");
    }

    #[test]
    fn test_format_switches_to_exponent_form() {
        assert_eq!(format_number(1e20), "100000000000000000000");
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(-2.5e30), "-2.5e+30");
        assert_eq!(format_number(0.000001), "0.000001");
        assert_eq!(format_number(1e-7), "1e-7");
        assert_eq!(format_number(1.5e-7), "1.5e-7");
    }

    #[test]
    fn test_is_literal() {
        assert!(is_literal("12.5"));
        assert!(!is_literal("1e+21"));
        assert!(!is_literal("-1"));
        assert!(!is_literal(""));
    }
}
