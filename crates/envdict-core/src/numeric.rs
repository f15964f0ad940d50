//! # Numeric Strings
//!
//! Parsing of numeric-looking strings, the one place where a string may
//! stand in for a number.
//!
//! The accepted grammar is the string-to-number conversion used by
//! JavaScript `Number(string)`, since environment values are commonly
//! produced and checked by JS tooling as well:
//!
//! - surrounding whitespace is ignored (Unicode `White_Space` except NEL,
//!   plus BOM),
//! - decimal literals with optional sign, fraction and exponent
//!   (`"42"`, `"-123.5"`, `".5"`, `"5."`, `"1e3"`, `"+7"`),
//! - unsigned radix literals `0x`/`0X`, `0o`/`0O`, `0b`/`0B`.
//!
//! Empty and whitespace-only strings are rejected, as is anything that
//! would produce NaN or an infinity (`"Infinity"`, `"1e400"`).

use serde_json::Number;

/// Parse a numeric string into a finite `f64`.
///
/// Returns `None` for strings that are empty after trimming, not numeric,
/// or not finite.
pub fn parse_numeric_str(input: &str) -> Option<f64> {
    let trimmed = input.trim_matches(is_numeric_whitespace);
    if trimmed.is_empty() {
        return None;
    }

    let parsed = match split_radix_prefix(trimmed) {
        Some((radix, digits)) => parse_radix_digits(digits, radix)?,
        None => parse_decimal(trimmed)?,
    };

    parsed.is_finite().then_some(parsed)
}

/// Convert a finite `f64` into a JSON number.
///
/// Integral values that fit in `i64` become JSON integers, so a coerced
/// `"3000"` compares equal to `json!(3000)`. Everything else becomes a
/// JSON float. Returns `None` for non-finite input.
pub fn numeric_value(n: f64) -> Option<Number> {
    // i64::MAX is not exactly representable; the strict upper bound keeps the cast lossless.
    if n.fract() == 0.0 && n >= i64::MIN as f64 && n < i64::MAX as f64 {
        return Some(Number::from(n as i64));
    }
    Number::from_f64(n)
}

fn is_numeric_whitespace(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}'
}

fn split_radix_prefix(s: &str) -> Option<(u32, &str)> {
    let prefix = s.get(..2)?;
    let rest = s.get(2..)?;
    let radix = match prefix {
        "0x" | "0X" => 16,
        "0o" | "0O" => 8,
        "0b" | "0B" => 2,
        _ => return None,
    };
    Some((radix, rest))
}

fn parse_radix_digits(digits: &str, radix: u32) -> Option<f64> {
    if digits.is_empty() {
        return None;
    }
    digits.chars().try_fold(0.0_f64, |acc, c| {
        c.to_digit(radix)
            .map(|d| acc * f64::from(radix) + f64::from(d))
    })
}

fn parse_decimal(s: &str) -> Option<f64> {
    // `f64::from_str` also accepts "inf" and "nan" spellings; those never
    // yield a finite value, so they are filtered out up front.
    let well_formed = s
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-'));
    if !well_formed {
        return None;
    }
    s.parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decimal_literals() {
        assert_eq!(parse_numeric_str("123"), Some(123.0));
        assert_eq!(parse_numeric_str("0"), Some(0.0));
        assert_eq!(parse_numeric_str("-123.5"), Some(-123.5));
        assert_eq!(parse_numeric_str("+7"), Some(7.0));
        assert_eq!(parse_numeric_str(".5"), Some(0.5));
        assert_eq!(parse_numeric_str("5."), Some(5.0));
        assert_eq!(parse_numeric_str("1e3"), Some(1000.0));
        assert_eq!(parse_numeric_str("2.5E-1"), Some(0.25));
        assert_eq!(parse_numeric_str("00012"), Some(12.0));
    }

    #[test]
    fn test_surrounding_whitespace_ignored() {
        assert_eq!(parse_numeric_str("  42  "), Some(42.0));
        assert_eq!(parse_numeric_str("\n\t8080\r\n"), Some(8080.0));
        assert_eq!(parse_numeric_str("\u{feff}1"), Some(1.0));
    }

    #[test]
    fn test_radix_literals() {
        assert_eq!(parse_numeric_str("0x1F"), Some(31.0));
        assert_eq!(parse_numeric_str("0XfF"), Some(255.0));
        assert_eq!(parse_numeric_str("0o17"), Some(15.0));
        assert_eq!(parse_numeric_str("0b101"), Some(5.0));
        assert_eq!(parse_numeric_str("0x"), None);
        assert_eq!(parse_numeric_str("0b102"), None);
        assert_eq!(parse_numeric_str("-0x10"), None);
    }

    #[test]
    fn test_rejects_empty_and_blank() {
        assert_eq!(parse_numeric_str(""), None);
        assert_eq!(parse_numeric_str("   "), None);
        assert_eq!(parse_numeric_str("\t\n"), None);
    }

    #[test]
    fn test_rejects_garbage_and_non_finite() {
        for input in [
            "abc", "3000x", "1_000", "NaN", "nan", "Infinity", "-Infinity", "inf", "1e400",
            ".", "e5", "1e", "+", "--1", "1 000", "12px", "\u{85}42", "42\u{85}",
        ] {
            assert_eq!(parse_numeric_str(input), None, "accepted {input:?}");
        }
    }

    #[test]
    fn test_numeric_value_integral_becomes_integer() {
        assert_eq!(numeric_value(3000.0).map(serde_json::Value::Number), Some(json!(3000)));
        assert_eq!(numeric_value(-12.0).map(serde_json::Value::Number), Some(json!(-12)));
        assert!(numeric_value(3000.0).is_some_and(|n| n.is_i64()));
    }

    #[test]
    fn test_numeric_value_fraction_stays_float() {
        let n = numeric_value(1.5).unwrap();
        assert!(n.is_f64());
        assert_eq!(n.as_f64(), Some(1.5));
    }

    #[test]
    fn test_numeric_value_rejects_non_finite() {
        assert!(numeric_value(f64::NAN).is_none());
        assert!(numeric_value(f64::INFINITY).is_none());
    }
}
