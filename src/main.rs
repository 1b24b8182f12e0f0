//! # Main — CLI Entry Point
//!
//! Initializes structured logging (`LOG_FORMAT=json` for machine-readable
//! output, human-readable otherwise), parses the three positional arguments,
//! and hands off to the Driver. A non-zero exit code on `Err` is `anyhow`'s
//! default `Termination` behavior; the CLI never calls `std::process::exit`
//! itself.

mod cli;

use clap::Parser;

fn main() -> anyhow::Result<()> {
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_default();
    if log_format == "json" {
        tracing_subscriber::fmt().json().with_target(false).init();
    } else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    }

    let args = cli::Cli::parse();
    cli::run(&args)
}
