//! Numeric normalization.

use crate::normalized::Normalized;

/// Integer quantity: strip everything but digits, dot, and minus, then
/// parse. A decimal survivor (`"3.5"`) truncates toward zero, matching the
/// source system's lenient integer parse. Empty or unparsable input
/// defaults to 0.
pub fn normalize_integer(raw: &str) -> Normalized<i64> {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();
    if cleaned.is_empty() {
        return Normalized::defaulted(0);
    }
    if let Ok(value) = cleaned.parse::<i64>() {
        return Normalized::matched(value);
    }
    if let Ok(value) = cleaned.parse::<f64>()
        && value.is_finite()
    {
        return Normalized::matched(value as i64);
    }
    Normalized::defaulted(0)
}

/// Business level: strip non-digits, parse, bucket into tiers.
/// >= 3 is tier 3, >= 2 is tier 2, everything else tier 1. Empty or
/// unparsable input defaults to tier 1.
pub fn normalize_business_tier(raw: &str) -> Normalized<u8> {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    match digits.parse::<i64>() {
        Ok(value) if value >= 3 => Normalized::matched(3),
        Ok(value) if value >= 2 => Normalized::matched(2),
        Ok(_) => Normalized::matched(1),
        Err(_) => Normalized::defaulted(1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_parses_plain_and_noisy_input() {
        assert_eq!(normalize_integer("5"), Normalized::matched(5));
        assert_eq!(normalize_integer(" 1,024 devices"), Normalized::matched(1024));
        assert_eq!(normalize_integer("-3"), Normalized::matched(-3));
    }

    #[test]
    fn integer_truncates_decimals() {
        assert_eq!(normalize_integer("3.5"), Normalized::matched(3));
        assert_eq!(normalize_integer("-2.9"), Normalized::matched(-2));
    }

    #[test]
    fn integer_defaults_to_zero() {
        assert_eq!(normalize_integer("abc"), Normalized::defaulted(0));
        assert_eq!(normalize_integer(""), Normalized::defaulted(0));
        assert_eq!(normalize_integer("..--"), Normalized::defaulted(0));
    }

    #[test]
    fn tier_buckets() {
        assert_eq!(normalize_business_tier("1"), Normalized::matched(1));
        assert_eq!(normalize_business_tier("2"), Normalized::matched(2));
        assert_eq!(normalize_business_tier("3"), Normalized::matched(3));
        assert_eq!(normalize_business_tier("level 7"), Normalized::matched(3));
        assert_eq!(normalize_business_tier("0"), Normalized::matched(1));
    }

    #[test]
    fn tier_defaults_to_one() {
        assert_eq!(normalize_business_tier(""), Normalized::defaulted(1));
        assert_eq!(normalize_business_tier("unknown"), Normalized::defaulted(1));
    }
}
