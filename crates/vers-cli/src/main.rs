mod config;
mod logging;
mod ranges;
mod report;

use config::Settings;

use anyhow::Result;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use std::io;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "versioalueet")]
#[command(about = "Version ranges (Finnish: versioalueet)")]
#[command(version)]
struct Args {
    /// Work as quiet as possible
    #[arg(short = 'q', long = "quiet")]
    quiet: bool,

    /// Work logging more information along the way
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,

    /// Report the process environment as JSON and exit
    #[arg(short = 'R', long = "report")]
    report: bool,

    /// Version ranges as valid vers string
    #[arg(short = 'r', long = "version-ranges", value_name = "VERSION_RANGES", default_value = "")]
    version_ranges: String,

    /// Versions to assess for inclusion in the ranges (not implemented yet)
    #[arg(value_name = "VERSIONS")]
    versions: Vec<String>,
}

fn run() -> Result<i32> {
    if std::env::args_os().len() <= 1 {
        Args::command().print_help()?;
        println!();
        return Ok(0);
    }

    let args = Args::parse();

    let settings = match Settings::resolve(args.quiet, args.verbose, Settings::debug_from_env()) {
        Ok(settings) => settings,
        Err(message) => Args::command().error(ErrorKind::ArgumentConflict, message).exit(),
    };

    logging::init(&settings);

    let env_report = report::assess(&settings);

    if args.report {
        println!("{}", env_report.to_json()?);
        return Ok(0);
    }

    if settings.debug {
        for line in env_report.to_text()?.lines() {
            log::debug!("{}", line);
        }
    }

    let stdout = io::stdout();
    ranges::execute(&args.version_ranges, &args.versions, &settings, &mut stdout.lock())
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => ExitCode::from(code as u8),
        Err(e) => {
            eprintln!("Error: {}", e);
            for cause in e.chain().skip(1) {
                eprintln!("  Caused by: {}", cause);
            }
            ExitCode::FAILURE
        }
    }
}
