use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tactus_core::logging::{LoggingConfig, init_logging};
use tactus_replay::{Trace, run};

#[derive(Parser, Debug)]
#[command(
    name = "tactus-replay",
    version,
    about = "Replay a pointer trace and print each recognized gesture as a JSON line"
)]
struct Cli {
    /// Path to the JSON trace file.
    trace: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(LoggingConfig::default());

    let src = fs::read_to_string(&cli.trace)
        .with_context(|| format!("failed to read {}", cli.trace.display()))?;
    let trace = Trace::from_json(&src)
        .with_context(|| format!("failed to parse {}", cli.trace.display()))?;

    let emitted = run(&trace)?;
    for line in &emitted {
        println!("{}", line.to_json());
    }
    log::info!("{} gesture event(s) dispatched", emitted.len());
    Ok(())
}
