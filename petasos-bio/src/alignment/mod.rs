pub mod affine;
pub mod linear;
pub mod trace;
pub mod types;

pub use affine::SmithWaterman;
pub use linear::NeedlemanWunsch;
pub use trace::{Direction, State, TagSet};
pub use types::{AlignedPair, AlignmentResult, GapModel, GAP};

use crate::scoring::ScoringMatrix;
use petasos_core::PetasosResult;

/// Global alignment of `seq1` against `seq2` with a linear gap penalty.
///
/// Returns the optimal score and every alignment that achieves it.
pub fn align_global<S: ScoringMatrix>(
    seq1: &str,
    seq2: &str,
    scoring: S,
    gap_penalty: i32,
) -> PetasosResult<AlignmentResult> {
    NeedlemanWunsch::new(scoring, gap_penalty)?.align(seq1.as_bytes(), seq2.as_bytes())
}

/// Local alignment of `seq1` against `seq2` with affine gap penalties.
///
/// Returns the best local score and every alignment that achieves it.
pub fn align_local<S: ScoringMatrix>(
    seq1: &str,
    seq2: &str,
    scoring: S,
    gap_open: i32,
    gap_extend: i32,
) -> PetasosResult<AlignmentResult> {
    SmithWaterman::new(scoring, gap_open, gap_extend)?.align(seq1.as_bytes(), seq2.as_bytes())
}

/// Align with the engine matching `gap`: linear is global, affine is local
pub fn align<S: ScoringMatrix>(
    seq1: &str,
    seq2: &str,
    scoring: S,
    gap: GapModel,
) -> PetasosResult<AlignmentResult> {
    match gap {
        GapModel::Linear { .. } => {
            NeedlemanWunsch::with_gap_model(scoring, gap)?.align(seq1.as_bytes(), seq2.as_bytes())
        }
        GapModel::Affine { .. } => {
            SmithWaterman::with_gap_model(scoring, gap)?.align(seq1.as_bytes(), seq2.as_bytes())
        }
    }
}
