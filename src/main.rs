use std::env;
use std::fs::File;
use std::io::{self, BufReader};

use anyhow::{Context, Result};
use settle_up::process_request;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Logs go to stderr so stdout carries only the CSV plan
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let args: Vec<String> = env::args().collect();

    anyhow::ensure!(
        args.len() == 2,
        "Usage: {} <snapshot.json>",
        args.first().map(String::as_str).unwrap_or("settle-up")
    );

    let filename = &args[1];

    let file = File::open(filename)
        .with_context(|| format!("Failed to open snapshot file '{}'", filename))?;

    process_request(BufReader::new(file), io::stdout())
        .context("Failed to plan settlement and write output")?;

    Ok(())
}
