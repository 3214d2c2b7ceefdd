pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};
use petasos_core::PetasosError;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "petasos",
    version,
    about = "Exhaustive optimal pairwise alignment of amino-acid sequences",
    long_about = "Petasos aligns two protein sequences globally (Needleman-Wunsch, linear gaps) \
                  or locally (Smith-Waterman, affine gaps) and reports every alignment that \
                  reaches the optimal score."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Configuration file (defaults to $PETASOS_HOME/config.toml when present)
    #[arg(long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Align two sequences and list every optimal alignment
    Align(commands::align::AlignArgs),

    /// Check sequences against the standard amino-acid alphabet
    Validate(commands::validate::ValidateArgs),

    /// Parse a scoring matrix and describe it
    Matrix(commands::matrix::MatrixArgs),
}

/// Process exit code for a failed command
pub fn exit_code(error: &anyhow::Error) -> i32 {
    match error.downcast_ref::<PetasosError>() {
        Some(PetasosError::Configuration(_)) => 2,
        Some(PetasosError::Io(_)) => 3,
        Some(PetasosError::MatrixFormat(_)) => 4,
        Some(e) if e.is_input_error() => 5,
        _ => 1,
    }
}
