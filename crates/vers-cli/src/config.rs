use std::env;

/// Environment variable switching on debug mode
pub const DEBUG_ENV: &str = "VERSIOALUEET_DEBUG";

/// Effective settings, merged from the command line and the environment
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Settings {
    /// Debug mode, from the environment
    pub debug: bool,

    /// Log as little as possible
    pub quiet: bool,

    /// Log progress information
    pub verbose: bool,
}

impl Settings {
    /// Merge flags with the debug switch, rejecting contradictory combinations
    pub fn resolve(quiet: bool, verbose: bool, debug: bool) -> Result<Self, String> {
        if verbose && quiet {
            return Err("you cannot be quiet and verbose at the same time".to_string());
        }

        if debug && quiet {
            return Err("you cannot be quiet and debug at the same time".to_string());
        }

        Ok(Self { debug, quiet, verbose })
    }

    /// Read the debug switch from the process environment
    pub fn debug_from_env() -> bool {
        env::var(DEBUG_ENV).map(|v| is_truthy(&v)).unwrap_or(false)
    }
}

fn is_truthy(value: &str) -> bool {
    let value = value.trim();
    !value.is_empty() && value != "0" && !value.eq_ignore_ascii_case("false")
}
