// src/core/parse.rs
//
// Numeric extraction from human-formatted listing text. Inputs carry
// thousands separators, unit suffixes and currency ("12 000 kr",
// "150 000 km"). Absence of digits is absence, never zero.

/// Keep only digits and parse base-10. None when no digits remain or
/// the value overflows.
pub fn parse_price(s: &str) -> Option<u32> {
    digits_value(s)
}

/// Mileage and model-year variant: no-break spaces become spaces, and a
/// range band like "10 000 - 15 000" is truncated at the first dash so
/// the lower bound is kept. That lower-bound rule is the intended
/// policy for range-style mileage text.
pub fn parse_range_floor(s: &str) -> Option<u32> {
    let s = s.replace('\u{a0}', " ");
    let head = match s.find('-') {
        Some(i) => &s[..i],
        None => s.as_str(),
    };
    digits_value(head)
}

fn digits_value(s: &str) -> Option<u32> {
    let mut found = false;
    let mut v: u32 = 0;
    for ch in s.chars() {
        if let Some(d) = ch.to_digit(10) {
            found = true;
            v = v.checked_mul(10)?.checked_add(d)?;
        }
    }
    if found { Some(v) } else { None }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_strips_separators_and_units() {
        assert_eq!(parse_price("12 000 kr"), Some(12_000));
        assert_eq!(parse_price("8001"), Some(8001));
        assert_eq!(parse_price("1a2b3"), Some(123));
    }

    #[test]
    fn no_digits_is_absence_not_zero() {
        assert_eq!(parse_price("Pris saknas"), None);
        assert_eq!(parse_price(""), None);
        assert_eq!(parse_range_floor("N/A"), None);
        assert_eq!(parse_range_floor(""), None);
    }

    #[test]
    fn overflow_is_absence() {
        assert_eq!(parse_price("99999999999999"), None);
    }

    #[test]
    fn range_keeps_lower_bound() {
        assert_eq!(parse_range_floor("10\u{a0}000 - 15 000"), Some(10_000));
        assert_eq!(parse_range_floor("150 000 - 154 999 km"), Some(150_000));
    }

    #[test]
    fn range_without_dash_parses_whole() {
        assert_eq!(parse_range_floor("2015"), Some(2015));
        assert_eq!(parse_range_floor("4 500 km"), Some(4500));
    }

    #[test]
    fn leading_dash_truncates_to_absence() {
        assert_eq!(parse_range_floor("-500"), None);
        assert_eq!(parse_range_floor("- 15 000"), None);
    }
}
