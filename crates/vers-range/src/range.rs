//! VersionRange - the canonical value produced from a vers string

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::constraint::VersionConstraint;
use crate::error::VersError;
use crate::optimizer::optimize;
use crate::tokenizer::{remove_whitespace, tokenize, URI_SCHEME};
use crate::validate::sort_unique;

const PIPE: &str = "|";

/// A parsed, validated and optimized vers range.
///
/// Values are immutable. Two ranges are equal exactly when their canonical
/// strings are equal.
#[derive(Debug, Clone)]
pub struct VersionRange {
    versioning_system: String,
    constraints: Vec<VersionConstraint>,
}

impl VersionRange {
    /// Run the full pipeline over `input`.
    ///
    /// ```
    /// use vers_range::VersionRange;
    ///
    /// let range = VersionRange::parse("vers:pypi/|1.2.3|||||").unwrap();
    /// assert_eq!(range.canonical(), "vers:pypi/1.2.3");
    /// ```
    pub fn parse(input: &str) -> Result<Self, VersError> {
        let input = remove_whitespace(input);
        let tokens = tokenize(&input)?;

        let constraints = tokens
            .constraints
            .iter()
            .map(|token| VersionConstraint::parse(token))
            .collect::<Result<Vec<_>, _>>()?;

        if constraints.len() > 1 && constraints.iter().any(VersionConstraint::is_wildcard) {
            return Err(VersError::WildcardConflict);
        }

        let constraints = sort_unique(constraints)?;
        let constraints = optimize(constraints);

        log::trace!(
            "parsed {} constraint(s) for {}",
            constraints.len(),
            tokens.versioning_system
        );

        Ok(VersionRange {
            versioning_system: tokens.versioning_system.to_string(),
            constraints,
        })
    }

    /// Normalize again, either `source` or this range's own canonical text.
    ///
    /// A new value is returned; `self` is never modified.
    pub fn normalize(&self, source: Option<&str>) -> Result<Self, VersError> {
        match source {
            Some(source) => Self::parse(source),
            None => Self::parse(&self.canonical()),
        }
    }

    pub fn versioning_system(&self) -> &str {
        &self.versioning_system
    }

    pub fn constraints(&self) -> &[VersionConstraint] {
        &self.constraints
    }

    pub fn is_wildcard(&self) -> bool {
        matches!(self.constraints.as_slice(), [only] if only.is_wildcard())
    }

    /// The canonical `vers:` string
    pub fn canonical(&self) -> String {
        self.to_string()
    }
}

/// Parse `input` and return its canonical string
pub fn normalize(input: &str) -> Result<String, VersError> {
    VersionRange::parse(input).map(|range| range.canonical())
}

impl fmt::Display for VersionRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let constraints: Vec<String> = self.constraints.iter().map(|c| c.to_string()).collect();
        write!(f, "{}{}/{}", URI_SCHEME, self.versioning_system, constraints.join(PIPE))
    }
}

impl FromStr for VersionRange {
    type Err = VersError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl PartialEq for VersionRange {
    fn eq(&self, other: &Self) -> bool {
        self.canonical() == other.canonical()
    }
}

impl Eq for VersionRange {}

impl Hash for VersionRange {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical().hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comparator::Comparator;
    use crate::error::ErrorKind;

    #[test]
    fn test_parse_accessors() {
        let range = VersionRange::parse("vers:npm/1.2.3 | < 5.0.0| >= 2.0.0 ").unwrap();
        assert_eq!(range.versioning_system(), "npm");
        assert_eq!(range.constraints().len(), 3);
        assert_eq!(range.constraints()[1].comparator(), Comparator::GreaterThanOrEqual);
        assert_eq!(range.canonical(), "vers:npm/1.2.3|>=2.0.0|<5.0.0");
    }

    #[test]
    fn test_display_matches_canonical() {
        let range: VersionRange = "vers:pypi/<44|>42".parse().unwrap();
        assert_eq!(range.to_string(), "vers:pypi/>42|<44");
    }

    #[test]
    fn test_normalize_without_source() {
        let range = VersionRange::parse("vers:pypi/|1.2.3||||").unwrap();
        assert_eq!(range.normalize(None).unwrap(), range);
    }

    #[test]
    fn test_normalize_with_source_replaces() {
        let range = VersionRange::parse("vers:abc/42").unwrap();
        let err = range.normalize(Some("vers:pypi/|1.2.3|>||||")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::EmptyVersion);
        assert_eq!(err.report(), "ERROR:<empty version detected>");
        assert_eq!(range.canonical(), "vers:abc/42");

        let other = range.normalize(Some("vers:pypi/|1.2.3|||||")).unwrap();
        assert_eq!(other.canonical(), "vers:pypi/1.2.3");
    }

    #[test]
    fn test_wildcard() {
        let range = VersionRange::parse("vers:pypi/|*|||").unwrap();
        assert!(range.is_wildcard());
        assert_eq!(range.canonical(), "vers:pypi/*");
        assert!(!VersionRange::parse("vers:pypi/1").unwrap().is_wildcard());
    }

    #[test]
    fn test_equality_and_hash_follow_canonical() {
        use std::collections::HashSet;

        let a = VersionRange::parse("vers:npm/<5.0.0|>=2.0.0|1.2.3").unwrap();
        let b = VersionRange::parse("vers:npm/ 1.2.3 | >=2.0.0 | <5.0.0").unwrap();
        assert_eq!(a, b);

        let set: HashSet<VersionRange> = [a, b].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_free_normalize() {
        assert_eq!(normalize("vers:pypi/=42").unwrap(), "vers:pypi/42");
        assert_eq!(normalize("vers:Npm/").unwrap_err().kind(), ErrorKind::Case);
    }
}
