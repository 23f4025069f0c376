//! Phone and certificate number cleaning, plus derived-suffix fields.
//!
//! Phone numbers keep digits only; certificate numbers additionally keep
//! the check character `X` (uppercased). The suffix fields prefer an
//! explicitly supplied cell, then derive from the sibling's raw full value,
//! and only fall back to an all-zero placeholder when neither exists.

use crate::normalized::Normalized;

/// Placeholder for a wholly missing phone number (11 digits).
pub const PHONE_PLACEHOLDER: &str = "00000000000";

/// Placeholder for a wholly missing certificate number (18 characters).
pub const CERTNO_PLACEHOLDER: &str = "000000000000000000";

/// Keeps digits only.
pub fn clean_phone(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// Keeps digits and the certificate check character, uppercased.
pub fn clean_certno(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_digit() || *c == 'X' || *c == 'x')
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Phone number: cleaned digits, all-zero placeholder when nothing is left.
pub fn normalize_phone(raw: &str) -> Normalized<String> {
    let cleaned = clean_phone(raw);
    if cleaned.is_empty() {
        Normalized::defaulted(PHONE_PLACEHOLDER.to_string())
    } else {
        Normalized::matched(cleaned)
    }
}

/// Certificate number: cleaned digits plus X, placeholder when empty.
pub fn normalize_certno(raw: &str) -> Normalized<String> {
    let cleaned = clean_certno(raw);
    if cleaned.is_empty() {
        Normalized::defaulted(CERTNO_PLACEHOLDER.to_string())
    } else {
        Normalized::matched(cleaned)
    }
}

/// Derives a trailing-N suffix field.
///
/// `explicit_raw` is the suffix cell itself; `full_raw` is the sibling
/// full-value cell as it appeared in the file (raw, not canonical — the
/// sibling's own normalization may have substituted a placeholder that
/// must not leak into the suffix). Both are cleaned with `clean` before
/// use. The result is always exactly `n` characters, left-padded with `0`.
pub fn normalize_suffix(
    explicit_raw: &str,
    full_raw: &str,
    n: usize,
    clean: impl Fn(&str) -> String,
) -> Normalized<String> {
    let explicit = clean(explicit_raw);
    if !explicit.is_empty() {
        return Normalized::matched(pad_left(&tail(&explicit, n), n));
    }
    let full = clean(full_raw);
    if !full.is_empty() {
        return Normalized::matched(pad_left(&tail(&full, n), n));
    }
    Normalized::defaulted("0".repeat(n))
}

/// Last `n` characters of `value`.
fn tail(value: &str, n: usize) -> String {
    let chars: Vec<char> = value.chars().collect();
    let start = chars.len().saturating_sub(n);
    chars[start..].iter().collect()
}

/// Left-pads with `0` to exactly `n` characters.
fn pad_left(value: &str, n: usize) -> String {
    let len = value.chars().count();
    if len >= n {
        value.to_string()
    } else {
        let mut padded = "0".repeat(n - len);
        padded.push_str(value);
        padded
    }
}
