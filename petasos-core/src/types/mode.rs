//! Alignment mode definitions

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which classical alignment problem is being solved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum AlignmentMode {
    /// Needleman-Wunsch, every residue aligned, linear gap cost
    Global,
    /// Smith-Waterman, best-scoring subregion, affine gap cost
    Local,
}

impl AlignmentMode {
    /// Whether this mode takes a gap extension penalty
    pub fn uses_extension(&self) -> bool {
        matches!(self, Self::Local)
    }
}

impl fmt::Display for AlignmentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Global => write!(f, "global"),
            Self::Local => write!(f, "local"),
        }
    }
}

impl std::str::FromStr for AlignmentMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "global" | "needleman-wunsch" => Ok(Self::Global),
            "local" | "smith-waterman" => Ok(Self::Local),
            _ => Err(format!("Unknown alignment mode: {}", s)),
        }
    }
}
