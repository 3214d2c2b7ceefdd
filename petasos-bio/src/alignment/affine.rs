//! Smith-Waterman local alignment with affine gap penalties
//!
//! Three score matrices are filled side by side, one per [`State`]:
//!
//! ```text
//! D[i,j] = max(D⁺[i-1,j-1], S⁺[i-1,j-1], F⁺[i-1,j-1]) + s(x[i-1], y[j-1])
//! F[i,j] = max(D⁺[i,j-1] - open, F⁺[i,j-1] - extend)    gap in first
//! S[i,j] = max(D⁺[i-1,j] - open, S⁺[i-1,j] - extend)    gap in second
//! ```
//!
//! where `M⁺[..] = max(0, M[..])`. The floor is what makes the alignment local:
//! a prefix that scores below zero contributes nothing to its successors.
use super::trace::{best_of, checked, gap_run, State, TagSet};
use super::types::{AlignedPair, AlignmentResult, GapModel, GAP};
use crate::scoring::ScoringMatrix;
use petasos_core::{PetasosError, PetasosResult};
use std::rc::Rc;

/// Stands in for minus infinity on boundary cells that no state can occupy
const NEG_INF: i32 = i32::MIN / 4;

const LARGE_RESULT_WARNING: usize = 10_000;

pub struct SmithWaterman<S: ScoringMatrix> {
    scoring: S,
    gap_open: i32,
    gap_extend: i32,
}

/// Scores and predecessor tags of all three states
struct StateMatrices {
    scores: [Vec<Vec<i32>>; 3],
    tags: [Vec<Vec<TagSet<State>>>; 3],
}

impl StateMatrices {
    fn new(n: usize, m: usize) -> Self {
        let scores = vec![vec![NEG_INF; m + 1]; n + 1];
        let tags = vec![vec![TagSet::new(); m + 1]; n + 1];
        Self {
            scores: [scores.clone(), scores.clone(), scores],
            tags: [tags.clone(), tags.clone(), tags],
        }
    }

    fn get(&self, state: State, i: usize, j: usize) -> i32 {
        self.scores[state.index()][i][j]
    }

    /// Value offered to successors: never below zero
    fn floor(&self, state: State, i: usize, j: usize) -> i32 {
        self.get(state, i, j).max(0)
    }

    fn set(&mut self, state: State, i: usize, j: usize, score: i32, tags: TagSet<State>) {
        self.scores[state.index()][i][j] = score;
        self.tags[state.index()][i][j] = tags;
    }

    fn tags(&self, state: State, i: usize, j: usize) -> &TagSet<State> {
        &self.tags[state.index()][i][j]
    }

    fn max(&self) -> i32 {
        self.scores
            .iter()
            .flat_map(|matrix| matrix.iter().flatten())
            .copied()
            .max()
            .unwrap_or(0)
    }

    /// Every (state, i, j) holding `score`, state-major then row-major
    fn cells_with(&self, score: i32) -> Vec<(State, usize, usize)> {
        let mut cells = Vec::new();
        for state in State::ALL {
            for (i, row) in self.scores[state.index()].iter().enumerate() {
                for (j, &value) in row.iter().enumerate() {
                    if value == score {
                        cells.push((state, i, j));
                    }
                }
            }
        }
        cells
    }
}

impl<S: ScoringMatrix> SmithWaterman<S> {
    pub fn new(scoring: S, gap_open: i32, gap_extend: i32) -> PetasosResult<Self> {
        GapModel::affine(gap_open, gap_extend)?;
        Ok(Self {
            scoring,
            gap_open,
            gap_extend,
        })
    }

    /// Build from an already validated gap model
    pub fn with_gap_model(scoring: S, gap: GapModel) -> PetasosResult<Self> {
        match gap {
            GapModel::Affine { open, extend } => Self::new(scoring, open, extend),
            GapModel::Linear { .. } => Err(PetasosError::InvalidParameter(
                "local alignment takes gap opening and extension penalties".to_string(),
            )),
        }
    }

    pub fn gap_open(&self) -> i32 {
        self.gap_open
    }

    pub fn gap_extend(&self) -> i32 {
        self.gap_extend
    }

    /// Best local score of `x` against `y` and every alignment reaching it.
    ///
    /// When no substring pair scores above zero the result is score 0 with the
    /// single empty alignment.
    pub fn align(&self, x: &[u8], y: &[u8]) -> PetasosResult<AlignmentResult> {
        let n = x.len();
        let m = y.len();

        let mut matrices = StateMatrices::new(n, m);
        self.initialize_matrices(&mut matrices, n, m)?;
        self.fill_matrices(&mut matrices, x, y)?;

        let score = matrices.max();
        if score <= 0 {
            tracing::debug!("No positive-scoring local alignment of {}x{} residues", n, m);
            return Ok(AlignmentResult {
                score: 0,
                alignments: vec![AlignedPair::default()],
            });
        }

        let starts = matrices.cells_with(score);
        tracing::debug!(
            "Local optimum {} reached at {} cells across the state matrices",
            score,
            starts.len()
        );

        let mut alignments = Vec::new();
        {
            let mut traceback = Traceback::new(&matrices, x, y);
            for (state, i, j) in starts {
                alignments.extend(traceback.expand(state, i, j).iter().cloned());
            }
        }

        tracing::debug!(
            "Local alignment of {}x{} residues: score {}, {} optimal alignments",
            n,
            m,
            score,
            alignments.len()
        );
        if alignments.len() > LARGE_RESULT_WARNING {
            tracing::warn!(
                "{} co-optimal local alignments; inputs are highly degenerate",
                alignments.len()
            );
        }

        Ok(AlignmentResult { score, alignments })
    }

    fn initialize_matrices(
        &self,
        matrices: &mut StateMatrices,
        n: usize,
        m: usize,
    ) -> PetasosResult<()> {
        matrices.set(State::Diagonal, 0, 0, 0, TagSet::new());

        // A gap run may start at the very edge of either sequence
        for j in 1..=m {
            let score = gap_run(self.gap_open, self.gap_extend, j)?;
            matrices.set(State::GapInFirst, 0, j, score, TagSet::new());
        }
        for i in 1..=n {
            let score = gap_run(self.gap_open, self.gap_extend, i)?;
            matrices.set(State::GapInSecond, i, 0, score, TagSet::new());
        }
        Ok(())
    }

    fn fill_matrices(&self, matrices: &mut StateMatrices, x: &[u8], y: &[u8]) -> PetasosResult<()> {
        let open = self.gap_open;
        let extend = self.gap_extend;

        for i in 1..=x.len() {
            for j in 1..=y.len() {
                let substitution = self.scoring.score(x[i - 1], y[j - 1])?;

                let diagonal = |state: State| {
                    checked(matrices.floor(state, i - 1, j - 1).checked_add(substitution))
                };
                let (best, tags) = best_of(&[
                    (State::Diagonal, diagonal(State::Diagonal)?),
                    (State::GapInSecond, diagonal(State::GapInSecond)?),
                    (State::GapInFirst, diagonal(State::GapInFirst)?),
                ]);
                matrices.set(State::Diagonal, i, j, best, tags);

                // Floors are non-negative, so subtracting a penalty cannot overflow
                let (best, tags) = best_of(&[
                    (State::Diagonal, matrices.floor(State::Diagonal, i, j - 1) - open),
                    (State::GapInFirst, matrices.floor(State::GapInFirst, i, j - 1) - extend),
                ]);
                matrices.set(State::GapInFirst, i, j, best, tags);

                let (best, tags) = best_of(&[
                    (State::Diagonal, matrices.floor(State::Diagonal, i - 1, j) - open),
                    (State::GapInSecond, matrices.floor(State::GapInSecond, i - 1, j) - extend),
                ]);
                matrices.set(State::GapInSecond, i, j, best, tags);
            }
        }

        Ok(())
    }
}

/// Memoized enumeration of local paths, one cache per state
struct Traceback<'a> {
    matrices: &'a StateMatrices,
    x: &'a [u8],
    y: &'a [u8],
    memo: [Vec<Vec<Option<Rc<Vec<AlignedPair>>>>>; 3],
}

impl<'a> Traceback<'a> {
    fn new(matrices: &'a StateMatrices, x: &'a [u8], y: &'a [u8]) -> Self {
        let memo = vec![vec![None; y.len() + 1]; x.len() + 1];
        Self {
            matrices,
            x,
            y,
            memo: [memo.clone(), memo.clone(), memo],
        }
    }

    /// All local alignments ending with the column that `state` emits at (i, j).
    ///
    /// Only strictly positive cells are expanded: start cells hold the positive
    /// optimum and a predecessor is followed only while its floored value is
    /// positive, so i and j are at least 1 here.
    fn expand(&mut self, state: State, i: usize, j: usize) -> Rc<Vec<AlignedPair>> {
        if let Some(cached) = &self.memo[state.index()][i][j] {
            return Rc::clone(cached);
        }

        let (pi, pj, a, b) = match state {
            State::Diagonal => (i - 1, j - 1, self.x[i - 1], self.y[j - 1]),
            State::GapInFirst => (i, j - 1, GAP, self.y[j - 1]),
            State::GapInSecond => (i - 1, j, self.x[i - 1], GAP),
        };

        let matrices = self.matrices;
        let mut alignments = Vec::new();
        let mut starts_here = false;
        for &previous in matrices.tags(state, i, j) {
            if matrices.floor(previous, pi, pj) == 0 {
                // At most one fresh start per cell, however many tags reach zero
                if !starts_here {
                    alignments.push(AlignedPair::default().extended(a, b));
                    starts_here = true;
                }
                continue;
            }
            let prefixes = self.expand(previous, pi, pj);
            alignments.extend(prefixes.iter().map(|prefix| prefix.extended(a, b)));
        }

        let alignments = Rc::new(alignments);
        self.memo[state.index()][i][j] = Some(Rc::clone(&alignments));
        alignments
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::ScoringTable;
    use pretty_assertions::assert_eq;

    fn dna() -> ScoringTable {
        "   A  C  G  T\nA  2 -1 -1 -1\nC -1  2 -1 -1\nG -1 -1  2 -1\nT -1 -1 -1  2\n"
            .parse()
            .unwrap()
    }

    #[test]
    fn test_boundary_gap_runs() {
        let aligner = SmithWaterman::new(dna(), 5, 2).unwrap();
        let mut matrices = StateMatrices::new(2, 3);
        aligner.initialize_matrices(&mut matrices, 2, 3);

        assert_eq!(matrices.get(State::Diagonal, 0, 0), 0);
        assert_eq!(matrices.get(State::Diagonal, 0, 2), NEG_INF);
        assert_eq!(matrices.get(State::GapInFirst, 0, 1), -5);
        assert_eq!(matrices.get(State::GapInFirst, 0, 3), -9);
        assert_eq!(matrices.get(State::GapInSecond, 2, 0), -7);
        assert_eq!(matrices.get(State::GapInFirst, 1, 0), NEG_INF);
        assert_eq!(matrices.floor(State::GapInSecond, 0, 1), 0);
    }

    #[test]
    fn test_exact_substring_found() {
        let aligner = SmithWaterman::new(dna(), 3, 1).unwrap();
        let result = aligner.align(b"TTGACGTT", b"CCACGCC").unwrap();

        assert_eq!(result.score, 6);
        assert_eq!(result.alignments, vec![AlignedPair::new("ACG", "ACG")]);
    }

    #[test]
    fn test_gap_opened_then_extended() {
        let aligner = SmithWaterman::new(dna(), 1, 1).unwrap();
        let result = aligner.align(b"AAAACCCC", b"AAAAGGCCCC").unwrap();

        assert_eq!(result.score, 14);
        assert_eq!(
            result.alignments,
            vec![AlignedPair::new("AAAA--CCCC", "AAAAGGCCCC")]
        );
    }

    #[test]
    fn test_no_positive_substring_yields_empty_alignment() {
        let aligner = SmithWaterman::new(dna(), 3, 1).unwrap();
        let result = aligner.align(b"AAA", b"CCC").unwrap();

        assert_eq!(result.score, 0);
        assert_eq!(result.alignments, vec![AlignedPair::default()]);
    }

    #[test]
    fn test_empty_input() {
        let aligner = SmithWaterman::new(dna(), 3, 1).unwrap();
        let result = aligner.align(b"", b"ACGT").unwrap();

        assert_eq!(result.score, 0);
        assert_eq!(result.alignments, vec![AlignedPair::default()]);
    }

    #[test]
    fn test_negative_penalties_rejected() {
        assert!(matches!(
            SmithWaterman::new(dna(), -1, 1),
            Err(PetasosError::InvalidParameter(_))
        ));
        assert!(SmithWaterman::with_gap_model(dna(), GapModel::Linear { penalty: 2 }).is_err());
    }
}
