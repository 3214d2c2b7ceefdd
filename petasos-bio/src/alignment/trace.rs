//! Predecessor tags recorded by the DP fill and followed by traceback

use petasos_core::{PetasosError, PetasosResult};
use smallvec::SmallVec;

/// Every tag whose recurrence branch attains a cell's maximum, in branch order.
/// At most three branches exist per recurrence, so the set never spills.
pub type TagSet<T> = SmallVec<[T; 3]>;

/// Move taken into a cell of the linear-gap score matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Residue of each sequence aligned to each other
    Diagonal,
    /// Residue of the first sequence against a gap
    Up,
    /// Gap against a residue of the second sequence
    Left,
}

/// Matrix of the affine-gap automaton a score belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum State {
    /// Last column aligns two residues
    Diagonal,
    /// Last column is a gap in the first sequence (consumes the second)
    GapInFirst,
    /// Last column is a gap in the second sequence (consumes the first)
    GapInSecond,
}

impl State {
    pub const ALL: [State; 3] = [State::Diagonal, State::GapInFirst, State::GapInSecond];

    pub(crate) fn index(self) -> usize {
        match self {
            State::Diagonal => 0,
            State::GapInFirst => 1,
            State::GapInSecond => 2,
        }
    }
}

/// Maximum over `candidates` and every tag that reaches it, ties kept in order.
pub(crate) fn best_of<T: Copy>(candidates: &[(T, i32)]) -> (i32, TagSet<T>) {
    let best = candidates
        .iter()
        .map(|&(_, score)| score)
        .max()
        .unwrap_or(i32::MIN);
    let tags = candidates
        .iter()
        .filter(|&&(_, score)| score == best)
        .map(|&(tag, _)| tag)
        .collect();
    (best, tags)
}

/// Score arithmetic result, with overflow reported instead of wrapped
pub(crate) fn checked(score: Option<i32>) -> PetasosResult<i32> {
    score.ok_or_else(|| {
        PetasosError::InvalidParameter(
            "gap penalties or substitution scores too large: alignment score overflows".to_string(),
        )
    })
}

/// Score of a run of `len` gap columns: `open` for the first, `extend` for each after it
pub(crate) fn gap_run(open: i32, extend: i32, len: usize) -> PetasosResult<i32> {
    let extensions = i32::try_from(len.saturating_sub(1)).ok();
    checked(
        extensions
            .and_then(|k| k.checked_mul(extend))
            .and_then(|cost| cost.checked_add(open))
            .map(|cost| -cost),
    )
}
