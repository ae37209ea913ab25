//! `ringcheck` - report self-intersecting rings in an event boundary file.
//!
//! Exits with 0 when every ring is clean (or the file has no features), 1
//! when at least one ring self-intersects, and 2 when the input cannot be
//! validated.
//!
//! Run with: `ringcheck --event paris_france` or `ringcheck --file boundary.geojson`

use clap::Parser;
use ringcheck::config::Config;
use ringcheck::run::{exit_status, run};
use std::process::ExitCode;

fn main() -> ExitCode {
    // Logs go to stderr; stdout carries the report
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let config = Config::parse();

    let result = run(&config);
    match &result {
        Ok(outcome) => print!("{}", outcome.render(config.limit)),
        Err(err) => eprintln!("{err}"),
    }
    ExitCode::from(exit_status(&result))
}
