//! Core utilities and types shared across all Petasos crates

pub mod config;
pub mod error;
pub mod system;
pub mod types;

// Re-export commonly used types
pub use config::{load_config, load_config_or_default, save_config, Config};
pub use error::{MatrixFormatError, PetasosError, PetasosResult};
pub use types::{AlignmentMode, OutputFormat};

// Re-export system utilities
pub use system::{default_config_path, petasos_home};

/// Version information for the Petasos project
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const AUTHORS: &str = env!("CARGO_PKG_AUTHORS");
