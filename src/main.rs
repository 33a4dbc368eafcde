//! Entry point for the `translated-literal` command line tool.

use std::io::{
    self,
    Read,
    Write,
};
use std::path::Path;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use translated_literal::cli::{
    self,
    Cli,
};
use translated_literal::config::ConfigManager;

fn main() -> anyhow::Result<()> {
    // stdout is reserved for command output
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let config_dir = match &cli.config_dir {
        Some(dir) => dir.clone(),
        None => std::env::current_dir().context("Failed to resolve the current directory")?,
    };
    let mut config_manager = ConfigManager::new();
    config_manager.load_settings(&config_dir).context("Failed to load settings")?;
    config_manager
        .update_settings(cli.apply_to(config_manager.get_settings()))
        .context("Invalid formatting options")?;
    let settings = config_manager.get_settings();

    let input =
        if cli.command.reads_literal() { Some(read_input(cli.input.as_deref())?) } else { None };

    let output = cli::execute(&cli.command, input.as_deref(), settings)?;
    writeln!(io::stdout().lock(), "{output}").context("Failed to write output")?;

    Ok(())
}

fn read_input(path: Option<&Path>) -> anyhow::Result<String> {
    if let Some(path) = path {
        return std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()));
    }

    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer).context("Failed to read stdin")?;
    Ok(buffer)
}
