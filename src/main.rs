use clap::Parser;
use colored::*;
use petasos::cli::{exit_code, Cli, Commands};
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    // PETASOS_LOG wins over -v
    let default_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("PETASOS_LOG")
                .unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli) {
        eprintln!("{} {}", "Error:".red().bold(), e);
        process::exit(exit_code(&e));
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = petasos_core::load_config_or_default(cli.config.as_deref())?;

    match cli.command {
        Commands::Align(args) => petasos::cli::commands::align::run(args, &config),
        Commands::Validate(args) => petasos::cli::commands::validate::run(args),
        Commands::Matrix(args) => petasos::cli::commands::matrix::run(args),
    }
}
