//! Error types for vers range parsing

use std::fmt;
use thiserror::Error;

/// Kind of failure, independent of the message text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Missing or incorrect `vers:` prefix
    Scheme,
    /// Missing slash between versioning system and constraints
    Grammar,
    /// Versioning system is empty
    EmptySystem,
    /// Versioning system is not lower case
    Case,
    /// No constraint text after the slash
    EmptyConstraints,
    /// Wildcard combined with other constraints
    WildcardConflict,
    /// A constraint has a comparator but no version
    EmptyVersion,
    /// Two constraints share the same decoded version
    DuplicateVersion,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Scheme => "scheme",
            ErrorKind::Grammar => "grammar",
            ErrorKind::EmptySystem => "empty-system",
            ErrorKind::Case => "case",
            ErrorKind::EmptyConstraints => "empty-constraints",
            ErrorKind::WildcardConflict => "wildcard-conflict",
            ErrorKind::EmptyVersion => "empty-version",
            ErrorKind::DuplicateVersion => "duplicate-version",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error type for vers range parsing
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VersError {
    #[error("version range must start with the URI scheme vers")]
    Scheme { received: String },
    #[error("version range must provide <versioning-scheme> followed by a slash (/)")]
    Grammar { received: String },
    #[error("version system must be non empty")]
    EmptySystem,
    #[error("version system must be lower case")]
    Case { versioning_system: String },
    #[error("version constraints must be non empty")]
    EmptyConstraints,
    #[error("if present, asterisk (*) must be the only version constraint")]
    WildcardConflict,
    #[error("empty version detected")]
    EmptyVersion { constraint: String },
    #[error("versions must be unique across all version constraints")]
    DuplicateVersion { version: String },
}

impl VersError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            VersError::Scheme { .. } => ErrorKind::Scheme,
            VersError::Grammar { .. } => ErrorKind::Grammar,
            VersError::EmptySystem => ErrorKind::EmptySystem,
            VersError::Case { .. } => ErrorKind::Case,
            VersError::EmptyConstraints => ErrorKind::EmptyConstraints,
            VersError::WildcardConflict => ErrorKind::WildcardConflict,
            VersError::EmptyVersion { .. } => ErrorKind::EmptyVersion,
            VersError::DuplicateVersion { .. } => ErrorKind::DuplicateVersion,
        }
    }

    /// One line report in the `ERROR:<message>` form
    pub fn report(&self) -> String {
        format!("ERROR:<{}>", self)
    }
}
