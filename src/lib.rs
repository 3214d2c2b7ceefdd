pub mod cli;

pub use petasos_bio::{AlignedPair, AlignmentResult, GapModel, ScoringTable};
pub use petasos_core::{PetasosError, PetasosResult};
