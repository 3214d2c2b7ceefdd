//! Pairwise amino-acid alignment for Petasos

pub mod alignment;
pub mod scoring;
pub mod sequence;

// Re-export commonly used types
pub use alignment::{
    align, align_global, align_local, AlignedPair, AlignmentResult, GapModel, NeedlemanWunsch,
    SmithWaterman,
};
pub use scoring::{ScoringMatrix, ScoringTable};
pub use sequence::{is_valid_amino_acid_sequence, validate_sequence};
