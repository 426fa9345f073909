//! Merges redundant bound constraints into the tightest equivalent set
//!
//! Versions are opaque strings here. Adjacency is decided by the
//! lexicographic order the constraints arrive in, not by any notion of
//! semantic version distance.

use crate::comparator::Comparator;
use crate::constraint::VersionConstraint;

/// Optimize constraints that are already sorted by version and unique.
///
/// `!=` constraints are kept untouched. Of the remaining constraints a
/// lower bound (`>`, `>=`) absorbs any following `=`, `>` or `>=`, and an
/// upper bound (`<`, `<=`) replaces any preceding `<`, `<=` or `=`.
pub fn optimize(constraints: Vec<VersionConstraint>) -> Vec<VersionConstraint> {
    let (mut inequal, other): (Vec<_>, Vec<_>) = constraints
        .into_iter()
        .partition(|c| c.comparator() == Comparator::NotEqual);

    if other.len() < 2 {
        inequal.extend(other);
        inequal.sort();
        return inequal;
    }

    let mut merged: Vec<VersionConstraint> = Vec::with_capacity(other.len());

    for next in other {
        if let Some(top) = merged.last() {
            if top.comparator().is_lower_bound() && next.comparator().is_lower_or_equal() {
                log::trace!("{} absorbs {}", top, next);
                continue;
            }
        }

        while let Some(top) = merged.last() {
            if !(top.comparator().is_upper_or_equal() && next.comparator().is_upper_bound()) {
                break;
            }
            log::trace!("{} replaces {}", next, top);
            merged.pop();
        }

        merged.push(next);
    }

    merged.extend(inequal);
    merged.sort();
    merged.dedup();
    merged
}
