//! Parser, validator and canonicalizer for `vers:` version range strings
//!
//! A vers string names a versioning system and a pipe separated list of
//! constraints, e.g. `vers:npm/1.2.3|>=2.0.0|<5.0.0`. Parsing removes all
//! whitespace, checks the grammar, percent decodes versions, rejects
//! duplicate versions, merges redundant bounds and sorts the result.
//!
//! Versions are opaque strings and are ordered lexicographically.
//! Checking whether a concrete version lies inside a range is not supported.

mod comparator;
mod constraint;
mod error;
mod optimizer;
mod range;
mod tokenizer;
mod validate;

pub use comparator::Comparator;
pub use constraint::{VersionConstraint, WILDCARD};
pub use error::{ErrorKind, VersError};
pub use optimizer::optimize;
pub use range::{normalize, VersionRange};
pub use tokenizer::{remove_whitespace, URI_SCHEME};
