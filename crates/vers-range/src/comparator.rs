//! Comparator types for vers constraints

use std::fmt;

/// Comparison operators for vers constraints
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Comparator {
    /// Equal (bare version or `=`)
    Equal,
    /// Not equal (!=)
    NotEqual,
    /// Less than (<)
    LessThan,
    /// Less than or equal (<=)
    LessThanOrEqual,
    /// Greater than (>)
    GreaterThan,
    /// Greater than or equal (>=)
    GreaterThanOrEqual,
}

/// Prefixes tried in order; two character operators come first so that
/// `<=` is never read as `<` followed by a version starting with `=`.
const PREFIXES: [(&str, Comparator); 6] = [
    (">=", Comparator::GreaterThanOrEqual),
    ("<=", Comparator::LessThanOrEqual),
    ("!=", Comparator::NotEqual),
    ("<", Comparator::LessThan),
    (">", Comparator::GreaterThan),
    ("=", Comparator::Equal),
];

impl Comparator {
    /// Split a raw constraint into its comparator and the remaining version text.
    ///
    /// Tokens without a known prefix are `Equal` on the whole token.
    pub fn split_prefix(token: &str) -> (Self, &str) {
        for (prefix, comparator) in PREFIXES {
            if let Some(rest) = token.strip_prefix(prefix) {
                return (comparator, rest);
            }
        }
        (Comparator::Equal, token)
    }

    /// Symbol used in canonical output. `Equal` renders as nothing.
    pub fn as_str(&self) -> &'static str {
        match self {
            Comparator::Equal => "",
            Comparator::NotEqual => "!=",
            Comparator::LessThan => "<",
            Comparator::LessThanOrEqual => "<=",
            Comparator::GreaterThan => ">",
            Comparator::GreaterThanOrEqual => ">=",
        }
    }

    /// `>` or `>=`
    pub fn is_lower_bound(&self) -> bool {
        matches!(self, Comparator::GreaterThan | Comparator::GreaterThanOrEqual)
    }

    /// `<` or `<=`
    pub fn is_upper_bound(&self) -> bool {
        matches!(self, Comparator::LessThan | Comparator::LessThanOrEqual)
    }

    pub fn is_lower_or_equal(&self) -> bool {
        self.is_lower_bound() || *self == Comparator::Equal
    }

    pub fn is_upper_or_equal(&self) -> bool {
        self.is_upper_bound() || *self == Comparator::Equal
    }
}

impl fmt::Display for Comparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_prefix_prefers_two_characters() {
        assert_eq!(Comparator::split_prefix(">=1.0"), (Comparator::GreaterThanOrEqual, "1.0"));
        assert_eq!(Comparator::split_prefix("<=1.0"), (Comparator::LessThanOrEqual, "1.0"));
        assert_eq!(Comparator::split_prefix("!=1.0"), (Comparator::NotEqual, "1.0"));
        assert_eq!(Comparator::split_prefix("<1.0"), (Comparator::LessThan, "1.0"));
        assert_eq!(Comparator::split_prefix(">1.0"), (Comparator::GreaterThan, "1.0"));
        assert_eq!(Comparator::split_prefix("=1.0"), (Comparator::Equal, "1.0"));
    }

    #[test]
    fn test_split_prefix_defaults_to_equal() {
        assert_eq!(Comparator::split_prefix("1.0"), (Comparator::Equal, "1.0"));
        assert_eq!(Comparator::split_prefix("!1.0"), (Comparator::Equal, "!1.0"));
    }

    #[test]
    fn test_split_prefix_only_strips_once() {
        assert_eq!(Comparator::split_prefix(">=="), (Comparator::GreaterThanOrEqual, "="));
        assert_eq!(Comparator::split_prefix(">"), (Comparator::GreaterThan, ""));
    }

    #[test]
    fn test_display() {
        assert_eq!(Comparator::Equal.to_string(), "");
        assert_eq!(Comparator::NotEqual.to_string(), "!=");
        assert_eq!(Comparator::LessThanOrEqual.to_string(), "<=");
    }

    #[test]
    fn test_leaning() {
        assert!(Comparator::GreaterThan.is_lower_bound());
        assert!(Comparator::Equal.is_lower_or_equal());
        assert!(!Comparator::Equal.is_lower_bound());
        assert!(Comparator::LessThan.is_upper_bound());
        assert!(Comparator::Equal.is_upper_or_equal());
        assert!(!Comparator::NotEqual.is_upper_or_equal());
        assert!(!Comparator::NotEqual.is_lower_or_equal());
    }
}
