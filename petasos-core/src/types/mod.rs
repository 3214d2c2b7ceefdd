/// Core types shared across all Petasos modules
pub mod format;
pub mod mode;

pub use format::OutputFormat;
pub use mode::AlignmentMode;
