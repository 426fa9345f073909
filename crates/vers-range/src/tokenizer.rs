//! Splits a vers string into versioning system and raw constraint tokens

use std::borrow::Cow;

use lazy_static::lazy_static;
use regex::Regex;

use crate::constraint::WILDCARD;
use crate::error::VersError;

pub const URI_SCHEME: &str = "vers:";
const SLASH: char = '/';
const PIPE: char = '|';

lazy_static! {
    static ref WHITESPACE_RE: Regex = Regex::new(r"\s+").unwrap();
}

/// Raw pieces of a vers string, borrowed from the whitespace free input
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Tokens<'a> {
    pub versioning_system: &'a str,
    pub constraints: Vec<&'a str>,
}

/// Remove every whitespace character, wherever it occurs
pub fn remove_whitespace(input: &str) -> Cow<'_, str> {
    WHITESPACE_RE.replace_all(input, "")
}

/// Tokenize a vers string that has already been stripped of whitespace
pub(crate) fn tokenize(input: &str) -> Result<Tokens<'_>, VersError> {
    let rest = input.strip_prefix(URI_SCHEME).ok_or_else(|| VersError::Scheme {
        received: input.to_string(),
    })?;

    let (versioning_system, constraints) = rest.split_once(SLASH).ok_or_else(|| VersError::Grammar {
        received: input.to_string(),
    })?;

    if versioning_system.is_empty() {
        return Err(VersError::EmptySystem);
    }

    if versioning_system.to_lowercase() != versioning_system {
        return Err(VersError::Case {
            versioning_system: versioning_system.to_string(),
        });
    }

    if constraints.is_empty() {
        return Err(VersError::EmptyConstraints);
    }

    Ok(Tokens {
        versioning_system,
        constraints: split_constraints(constraints)?,
    })
}

/// Split the constraint section on pipes. Empty segments from leading,
/// trailing or doubled pipes are dropped.
///
/// A token starting with `*` must be the only token, wherever it sits.
fn split_constraints(constraints: &str) -> Result<Vec<&str>, VersError> {
    let tokens: Vec<&str> = constraints.split(PIPE).filter(|t| !t.is_empty()).collect();

    if tokens.is_empty() {
        return Err(VersError::EmptyConstraints);
    }

    if tokens.len() > 1 && tokens.iter().any(|t| t.starts_with(WILDCARD)) {
        return Err(VersError::WildcardConflict);
    }

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_whitespace() {
        assert_eq!(remove_whitespace(" vers:npm/1.2.3 | < 5.0.0|\t>= 2.0.0 \n"), "vers:npm/1.2.3|<5.0.0|>=2.0.0");
        assert!(matches!(remove_whitespace("vers:npm/1"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_tokenize_simple() {
        let tokens = tokenize("vers:pypi/1.2.3").unwrap();
        assert_eq!(tokens.versioning_system, "pypi");
        assert_eq!(tokens.constraints, vec!["1.2.3"]);
    }

    #[test]
    fn test_tokenize_drops_empty_segments() {
        assert_eq!(tokenize("vers:pypi/|||||42||").unwrap().constraints, vec!["42"]);
        assert_eq!(
            tokenize("vers:pypi/|1|2|3|=4||>=6").unwrap().constraints,
            vec!["1", "2", "3", "=4", ">=6"]
        );
    }

    #[test]
    fn test_tokenize_scheme() {
        assert_eq!(tokenize("").unwrap_err().to_string(), "version range must start with the URI scheme vers");
        assert!(matches!(tokenize("Vers:npm/1"), Err(VersError::Scheme { .. })));
        assert!(matches!(tokenize("asd"), Err(VersError::Scheme { .. })));
    }

    #[test]
    fn test_tokenize_slash() {
        assert!(matches!(tokenize("vers:pypi>42"), Err(VersError::Grammar { .. })));
    }

    #[test]
    fn test_tokenize_versioning_system() {
        assert_eq!(tokenize("vers:/").unwrap_err(), VersError::EmptySystem);
        assert_eq!(
            tokenize("vers:Npm/").unwrap_err(),
            VersError::Case { versioning_system: "Npm".to_string() }
        );
    }

    #[test]
    fn test_tokenize_only_splits_first_slash() {
        let tokens = tokenize("vers:golang/github.com/foo").unwrap();
        assert_eq!(tokens.versioning_system, "golang");
        assert_eq!(tokens.constraints, vec!["github.com/foo"]);
    }

    #[test]
    fn test_tokenize_empty_constraints() {
        assert_eq!(tokenize("vers:pypi/").unwrap_err(), VersError::EmptyConstraints);
        assert_eq!(tokenize("vers:pypi/|||").unwrap_err(), VersError::EmptyConstraints);
    }

    #[test]
    fn test_tokenize_wildcard() {
        assert_eq!(tokenize("vers:pypi/*").unwrap().constraints, vec!["*"]);
        assert_eq!(tokenize("vers:pypi/|*|||").unwrap().constraints, vec!["*"]);
        assert_eq!(tokenize("vers:pypi/*|<=42").unwrap_err(), VersError::WildcardConflict);
        assert_eq!(tokenize("vers:pypi/<=42|*").unwrap_err(), VersError::WildcardConflict);
    }

    #[test]
    fn test_tokenize_leading_asterisk_ignores_position() {
        assert_eq!(tokenize("vers:pypi/*abc|1").unwrap_err(), VersError::WildcardConflict);
        assert_eq!(tokenize("vers:pypi/1|*abc").unwrap_err(), VersError::WildcardConflict);
        assert_eq!(tokenize("vers:pypi/||1||*abc|").unwrap_err(), VersError::WildcardConflict);
    }

    #[test]
    fn test_tokenize_leading_asterisk_ignores_framing() {
        for input in ["vers:pypi/*abc", "vers:pypi/*abc|", "vers:pypi/|*abc||"] {
            assert_eq!(tokenize(input).unwrap().constraints, vec!["*abc"], "input {:?}", input);
        }
    }
}
