use log::LevelFilter;

use crate::config::Settings;

/// Level implied by the settings, before any `RUST_LOG` override
pub fn level_for(settings: &Settings) -> LevelFilter {
    if settings.quiet {
        LevelFilter::Error
    } else if settings.debug || settings.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    }
}

/// Install the global logger writing to stderr
pub fn init(settings: &Settings) {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level_for(settings))
        .format_timestamp(None)
        .format_target(false)
        .parse_default_env();

    // A logger may already be installed when running inside tests
    let _ = builder.try_init();
}
