//! Uniqueness check over parsed constraints

use crate::constraint::VersionConstraint;
use crate::error::VersError;

/// Sort constraints by version and reject any version used more than once,
/// whatever the comparators are.
pub(crate) fn sort_unique(mut constraints: Vec<VersionConstraint>) -> Result<Vec<VersionConstraint>, VersError> {
    constraints.sort();

    if let Some(pair) = constraints.windows(2).find(|w| w[0].version() == w[1].version()) {
        return Err(VersError::DuplicateVersion {
            version: pair[0].version().to_string(),
        });
    }

    Ok(constraints)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comparator::Comparator;

    #[test]
    fn test_sorts_by_version() {
        let sorted = sort_unique(vec![
            VersionConstraint::new(Comparator::Equal, "3"),
            VersionConstraint::new(Comparator::GreaterThanOrEqual, "6"),
            VersionConstraint::new(Comparator::Equal, "1"),
            VersionConstraint::new(Comparator::Equal, "4"),
        ])
        .unwrap();
        let versions: Vec<&str> = sorted.iter().map(|c| c.version()).collect();
        assert_eq!(versions, vec!["1", "3", "4", "6"]);
    }

    #[test]
    fn test_rejects_duplicates_across_comparators() {
        let err = sort_unique(vec![
            VersionConstraint::new(Comparator::LessThan, "2.0"),
            VersionConstraint::new(Comparator::Equal, "1.0"),
            VersionConstraint::new(Comparator::NotEqual, "2.0"),
        ])
        .unwrap_err();
        assert_eq!(err, VersError::DuplicateVersion { version: "2.0".to_string() });
    }
}
