//! A single version constraint: comparator plus opaque version string

use std::borrow::Cow;
use std::fmt;

use crate::comparator::Comparator;
use crate::error::VersError;

/// The wildcard constraint matching all versions
pub const WILDCARD: &str = "*";

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// One `(version, comparator)` pair of a vers range.
///
/// Ordering is by version first, as plain strings. No semantic version
/// comparison is attempted: `v10` sorts before `v9`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VersionConstraint {
    version: String,
    comparator: Comparator,
}

impl VersionConstraint {
    pub fn new(comparator: Comparator, version: impl Into<String>) -> Self {
        VersionConstraint {
            version: version.into(),
            comparator,
        }
    }

    /// The `*` constraint
    pub fn wildcard() -> Self {
        Self::new(Comparator::Equal, WILDCARD)
    }

    /// Parse one raw token (no whitespace, no pipes) into a constraint.
    ///
    /// Percent encoded versions are decoded so that reserved characters
    /// like `|` or `<` can be part of a version.
    pub fn parse(token: &str) -> Result<Self, VersError> {
        if token == WILDCARD {
            return Ok(Self::wildcard());
        }

        let (comparator, version) = Comparator::split_prefix(token);
        if version.is_empty() {
            return Err(VersError::EmptyVersion {
                constraint: token.to_string(),
            });
        }

        let version = if version.contains('%') {
            percent_decode(version)
        } else {
            version.to_string()
        };

        Ok(Self::new(comparator, version))
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn comparator(&self) -> Comparator {
        self.comparator
    }

    pub fn is_wildcard(&self) -> bool {
        self.comparator == Comparator::Equal && self.version == WILDCARD
    }
}

fn percent_decode(version: &str) -> String {
    let bytes = urlencoding::decode_binary(version.as_bytes());
    String::from_utf8_lossy(&bytes).into_owned()
}

/// Percent encode the characters that would change meaning when the
/// version is read back: `%`, `|`, whitespace, and a leading comparator
/// or asterisk character.
fn escape_version(version: &str) -> Cow<'_, str> {
    let needs_escape = |i: usize, c: char| {
        c == '%' || c == '|' || c.is_whitespace() || (i == 0 && matches!(c, '<' | '>' | '=' | '!' | '*'))
    };

    if !version.char_indices().any(|(i, c)| needs_escape(i, c)) {
        return Cow::Borrowed(version);
    }

    let mut escaped = String::with_capacity(version.len() + 6);
    for (i, c) in version.char_indices() {
        if needs_escape(i, c) {
            let mut buf = [0u8; 4];
            for byte in c.encode_utf8(&mut buf).bytes() {
                escaped.push('%');
                escaped.push(HEX_DIGITS[usize::from(byte >> 4)] as char);
                escaped.push(HEX_DIGITS[usize::from(byte & 0x0f)] as char);
            }
        } else {
            escaped.push(c);
        }
    }
    Cow::Owned(escaped)
}

impl fmt::Display for VersionConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_wildcard() {
            return write!(f, "{}", WILDCARD);
        }
        write!(f, "{}{}", self.comparator, escape_version(&self.version))
    }
}
