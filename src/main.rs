//! Three-party signature CLI
//!
//! Without arguments, runs the built-in demonstration and prints the
//! transcript. With `<INPUT> <OUTPUT>`, reads seven comma-separated integers
//! `p,q,kSigner,kChecker,kReceiver,x,y` from INPUT and writes the transcript
//! to OUTPUT.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use triparty_sign::io::{read_scenario, write_transcript, IoError};
use triparty_sign::{DemoConfig, ProtocolConfig, Scenario};

/// Sign, verify and recover over a shared composite modulus.
#[derive(Parser, Debug)]
#[command(name = "triparty-sign")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// File with seven comma-separated integers: p,q,kSigner,kChecker,kReceiver,x,y.
    #[arg(requires = "output")]
    input: Option<PathBuf>,

    /// File to write the signature, verification result and recovered message to.
    #[arg(requires = "input")]
    output: Option<PathBuf>,

    /// Miller-Rabin rounds used to validate P and Q (at least 1).
    #[arg(
        short,
        long,
        default_value_t = ProtocolConfig::default().primality_rounds,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    rounds: u32,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let config = ProtocolConfig { primality_rounds: cli.rounds };

    match (cli.input, cli.output) {
        (Some(input), Some(output)) => run_files(&input, &output, &config),
        _ => run_demo(&config),
    }
}

fn run_demo(config: &ProtocolConfig) -> Result<()> {
    let scenario = Scenario::from(&DemoConfig::default());
    info!("Running built-in demonstration");
    let transcript = scenario
        .run_with_rng(config, &mut rand_core::OsRng)
        .context("demonstration run failed")?;
    println!("{}", transcript);
    Ok(())
}

fn run_files(input: &Path, output: &Path, config: &ProtocolConfig) -> Result<()> {
    let scenario = match read_scenario(input) {
        Ok(scenario) => scenario,
        Err(e @ (IoError::NotFound | IoError::Input(_))) => {
            // Reported to the user; nothing is written.
            eprintln!("{}: {}", input.display(), e);
            return Ok(());
        }
        Err(e) => return Err(e).with_context(|| format!("failed to read {}", input.display())),
    };

    let transcript = scenario
        .run_with_rng(config, &mut rand_core::OsRng)
        .context("protocol run failed")?;
    write_transcript(output, &transcript)
        .with_context(|| format!("failed to write {}", output.display()))?;
    info!("Transcript written to {}", output.display());
    Ok(())
}
