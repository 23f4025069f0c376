/// Outcome of normalizing one field: the canonical value plus whether a
/// documented default was substituted for the raw input.
///
/// A legitimate match — including a match on the value that happens to be
/// the field's default — is not "defaulted". Only empty or unmatched input
/// sets the flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized<T> {
    pub value: T,
    pub defaulted: bool,
}

impl<T> Normalized<T> {
    /// The raw input resolved to a canonical value on its own merits.
    pub fn matched(value: T) -> Self {
        Self {
            value,
            defaulted: false,
        }
    }

    /// The raw input was unusable; a documented default was substituted.
    pub fn defaulted(value: T) -> Self {
        Self {
            value,
            defaulted: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_set_the_flag() {
        assert!(!Normalized::matched(1).defaulted);
        assert!(Normalized::defaulted(1).defaulted);
        assert_eq!(Normalized::matched("x").value, "x");
    }
}
