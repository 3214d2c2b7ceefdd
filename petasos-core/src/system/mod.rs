pub mod paths;

// Re-export commonly used functions
pub use paths::{default_config_path, matrices_dir, petasos_home};
