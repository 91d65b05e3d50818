//! Number formatting for the two display lines

/// Stringifies a computed value for the display and history
///
/// Uses the shortest decimal that round-trips, never exponent notation, so
/// the output can always be fed back into the tokenizer.
#[must_use]
pub fn format_value(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value.is_sign_positive() {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        }
    } else if value == 0.0 {
        // Collapse negative zero
        "0".to_string()
    } else {
        format!("{value}")
    }
}

/// Inserts `,` between groups of three digits in the integer part
///
/// Presentation only. Strings that do not start with a number (`"Error"`,
/// `"NaN"`, `""`) are returned unchanged; anything after the integer digits
/// is copied through as-is.
#[must_use]
pub fn group_thousands(input: &str) -> String {
    let (sign, unsigned) = match input.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", input),
    };
    let digits_end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    if digits_end == 0 {
        return input.to_string();
    }

    let (int_part, rest) = unsigned.split_at(digits_end);
    let mut grouped = String::with_capacity(input.len() + int_part.len() / 3);
    grouped.push_str(sign);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped.push_str(rest);
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_value_integers() {
        assert_eq!(format_value(7.0), "7");
        assert_eq!(format_value(-12.0), "-12");
    }

    #[test]
    fn test_format_value_shortest_round_trip() {
        assert_eq!(format_value(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(format_value(2.5), "2.5");
    }

    #[test]
    fn test_format_value_no_exponent() {
        assert_eq!(format_value(1e21), "1000000000000000000000");
        assert_eq!(format_value(1e-7), "0.0000001");
    }

    #[test]
    fn test_format_value_negative_zero() {
        assert_eq!(format_value(-0.0), "0");
    }

    #[test]
    fn test_format_value_special_values() {
        assert_eq!(format_value(f64::NAN), "NaN");
        assert_eq!(format_value(f64::INFINITY), "Infinity");
        assert_eq!(format_value(f64::NEG_INFINITY), "-Infinity");
    }

    #[test]
    fn test_group_thousands_integers() {
        assert_eq!(group_thousands("0"), "0");
        assert_eq!(group_thousands("999"), "999");
        assert_eq!(group_thousands("1000"), "1,000");
        assert_eq!(group_thousands("1234567"), "1,234,567");
    }

    #[test]
    fn test_group_thousands_leaves_fraction_alone() {
        assert_eq!(group_thousands("1234.5678"), "1,234.5678");
        assert_eq!(group_thousands("1234."), "1,234.");
    }

    #[test]
    fn test_group_thousands_negative() {
        assert_eq!(group_thousands("-1234567.5"), "-1,234,567.5");
    }

    #[test]
    fn test_group_thousands_non_numeric_passthrough() {
        assert_eq!(group_thousands("Error"), "Error");
        assert_eq!(group_thousands("NaN"), "NaN");
        assert_eq!(group_thousands(""), "");
        assert_eq!(group_thousands("-"), "-");
        assert_eq!(group_thousands(".5"), ".5");
    }
}
