// squad/src/main.rs

use clap::Parser;
use clap::error::ErrorKind;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::{Cli, USAGE};

fn main() -> anyhow::Result<()> {
    // Arguments first: a bad invocation must not touch the filesystem.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            eprintln!("{}", e);
            println!("{}", USAGE);
            std::process::exit(1);
        }
    };

    // Setup Logging (Tracing) on stderr
    // RUST_LOG=debug squad ... to see every file being read
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    commands::run::execute(cli)
}
