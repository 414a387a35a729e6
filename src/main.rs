use anyhow::{Context, Result};
use coffee_machine::{shell, MachineConfig, MachineController};
use std::io;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Logs go to stderr so stdout carries only the machine's dialogue.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let mut controller = MachineController::from_config(&MachineConfig::default());
    shell::run(&mut controller, io::stdin().lock(), io::stdout().lock())
        .context("terminal session failed")?;

    Ok(())
}
