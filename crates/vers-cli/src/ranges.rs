//! Normalize a version range request and print the canonical form

use anyhow::Result;
use std::io::Write;

use vers_range::VersionRange;

use crate::config::Settings;

/// Exit code for a range that failed to parse
pub const EXIT_INVALID: i32 = 1;
/// Exit code for bad usage
pub const EXIT_USAGE: i32 = 2;

/// Normalize `version_ranges` and write the canonical string to `out`.
///
/// `versions` asks for an inclusion check, which is not available; the
/// request is only logged.
pub fn execute(version_ranges: &str, versions: &[String], settings: &Settings, out: &mut dyn Write) -> Result<i32> {
    if !versions.is_empty() {
        log::warn!("version inclusion assessment requested, but not implemented yet");
        log::warn!("details: requested versions were ('{}')", versions.join("', '"));

        if versions.iter().any(|v| v.trim().is_empty()) {
            log::error!("received empty or space only version identifiers for inclusion test");
            return Ok(EXIT_USAGE);
        }
    }

    let range = match VersionRange::parse(version_ranges) {
        Ok(range) => range,
        Err(e) => {
            log::error!("{}", e);
            return Ok(EXIT_INVALID);
        }
    };

    if settings.debug {
        log::debug!("versioning system: '{}'", range.versioning_system());
        for constraint in range.constraints() {
            log::debug!(
                "- constraint: comparator '{}' version '{}'",
                constraint.comparator(),
                constraint.version()
            );
        }
        log::debug!("version range: '{}'", range);
    }

    writeln!(out, "{}", range)?;
    Ok(0)
}
