//! Output format types for formatting results

use serde::{Deserialize, Serialize};

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output
    Json,
}

impl OutputFormat {
    /// Check if format is machine-readable
    pub fn is_machine_readable(&self) -> bool {
        matches!(self, Self::Json)
    }
}
