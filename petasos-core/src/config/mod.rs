//! Configuration types for Petasos

use crate::types::OutputFormat;
use crate::PetasosError;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub alignment: AlignmentConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AlignmentConfig {
    /// Built-in matrix name (e.g. "BLOSUM62") or path to a BLAST-format file
    #[serde(default = "default_matrix")]
    pub matrix: String,
    /// Linear gap penalty in global mode, gap opening penalty in local mode
    #[serde(default = "default_gap_penalty")]
    pub gap_penalty: i32,
    /// Gap extension penalty; only meaningful in local mode
    #[serde(default)]
    pub gap_extension: Option<i32>,
    /// Check sequences against the amino-acid alphabet before aligning
    #[serde(default = "default_validate_sequences")]
    pub validate_sequences: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

// Default value functions
fn default_matrix() -> String { "BLOSUM62".to_string() }
fn default_gap_penalty() -> i32 { 8 }
fn default_validate_sequences() -> bool { false }

impl Default for AlignmentConfig {
    fn default() -> Self {
        Self {
            matrix: default_matrix(),
            gap_penalty: default_gap_penalty(),
            gap_extension: None,
            validate_sequences: default_validate_sequences(),
        }
    }
}

pub fn default_config() -> Config {
    Config::default()
}

pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, PetasosError> {
    let contents = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&contents)
        .map_err(|e| PetasosError::Configuration(format!("Failed to parse config: {}", e)))?;
    Ok(config)
}

/// Load an explicitly requested config, or the user config if one exists.
///
/// An explicit path that cannot be read is an error; a missing default file is not.
pub fn load_config_or_default(explicit: Option<&Path>) -> Result<Config, PetasosError> {
    if let Some(path) = explicit {
        return load_config(path);
    }

    let path = crate::system::default_config_path();
    if path.exists() {
        tracing::debug!("Loading config from {}", path.display());
        load_config(&path)
    } else {
        Ok(default_config())
    }
}

pub fn save_config<P: AsRef<Path>>(path: P, config: &Config) -> Result<(), PetasosError> {
    let contents = toml::to_string_pretty(config)
        .map_err(|e| PetasosError::Configuration(format!("Failed to serialize config: {}", e)))?;
    std::fs::write(path, contents)?;
    Ok(())
}
