use std::path::PathBuf;
use std::sync::OnceLock;

// Cache the paths to avoid repeated environment lookups
static PETASOS_HOME: OnceLock<PathBuf> = OnceLock::new();

/// Get the Petasos home directory
/// Checks PETASOS_HOME environment variable, falls back to ${HOME}/.petasos
pub fn petasos_home() -> PathBuf {
    PETASOS_HOME
        .get_or_init(|| {
            if let Ok(path) = std::env::var("PETASOS_HOME") {
                PathBuf::from(path)
            } else {
                let home = std::env::var("HOME").unwrap_or_else(|_| {
                    std::env::var("USERPROFILE").unwrap_or_else(|_| ".".to_string())
                });
                PathBuf::from(home).join(".petasos")
            }
        })
        .clone()
}

/// Location of the user configuration file
/// Returns: PETASOS_HOME/config.toml
pub fn default_config_path() -> PathBuf {
    petasos_home().join("config.toml")
}

/// Directory searched for scoring matrices given by bare file name
/// Returns: PETASOS_HOME/matrices
pub fn matrices_dir() -> PathBuf {
    petasos_home().join("matrices")
}
