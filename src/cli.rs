//! # CLI — Argument Parsing and Driver Invocation
//!
//! Three positional arguments, no subcommands, no flags beyond `--help`/
//! `--version`. Kept as a thin module separate from `main.rs`, mirroring the
//! Cli/execution split used elsewhere in this crate's lineage.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "legendre-search",
    about = "Recover a Legendre-PRG secret key by sliding-window brute-force search"
)]
pub struct Cli {
    /// Bit length of the prime p to generate (2..=256)
    #[arg(value_parser = clap::value_parser!(u32).range(2..=256))]
    pub security_bits: u32,

    /// Length L of the observed hint prefix, in bits
    #[arg(value_parser = clap::value_parser!(u64).range(1..))]
    pub stream_length: u64,

    /// Width of the search window below the planted key, in bits. Omit to
    /// search from anchor 0 (a cold, full-keyspace search).
    pub keyspace_bits: Option<u32>,
}

pub fn run(cli: &Cli) -> anyhow::Result<()> {
    let report = legendre_search::driver::run(cli.security_bits, cli.stream_length as usize, cli.keyspace_bits)?;
    println!(
        "p = {}\nkey = {}\nk0 = {}\nconfidence_bits = {}\nrecovered = {} (verified)",
        report.p, report.key, report.k0, report.confidence_bits, report.recovered
    );
    Ok(())
}
