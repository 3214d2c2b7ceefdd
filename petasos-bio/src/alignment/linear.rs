/// Needleman-Wunsch global alignment with a linear gap penalty
use super::trace::{best_of, checked, gap_run, Direction, TagSet};
use super::types::{AlignedPair, AlignmentResult, GapModel, GAP};
use crate::scoring::ScoringMatrix;
use petasos_core::{PetasosError, PetasosResult};
use std::rc::Rc;

/// Result sets above this size are reported, since ties multiply along a path
const LARGE_RESULT_WARNING: usize = 10_000;

pub struct NeedlemanWunsch<S: ScoringMatrix> {
    scoring: S,
    gap_penalty: i32,
}

impl<S: ScoringMatrix> NeedlemanWunsch<S> {
    pub fn new(scoring: S, gap_penalty: i32) -> PetasosResult<Self> {
        GapModel::linear(gap_penalty)?;
        Ok(Self {
            scoring,
            gap_penalty,
        })
    }

    /// Build from an already validated gap model
    pub fn with_gap_model(scoring: S, gap: GapModel) -> PetasosResult<Self> {
        match gap {
            GapModel::Linear { penalty } => Self::new(scoring, penalty),
            GapModel::Affine { .. } => Err(PetasosError::InvalidParameter(
                "global alignment takes a linear gap penalty".to_string(),
            )),
        }
    }

    pub fn gap_penalty(&self) -> i32 {
        self.gap_penalty
    }

    /// Optimal global score of `x` against `y` and every alignment reaching it
    pub fn align(&self, x: &[u8], y: &[u8]) -> PetasosResult<AlignmentResult> {
        let n = x.len();
        let m = y.len();

        // Allocate matrices
        let mut score_matrix = vec![vec![0i32; m + 1]; n + 1];
        let mut traceback_matrix: Vec<Vec<TagSet<Direction>>> =
            vec![vec![TagSet::new(); m + 1]; n + 1];

        self.initialize_matrices(&mut score_matrix, &mut traceback_matrix, n, m)?;
        self.fill_matrices(&mut score_matrix, &mut traceback_matrix, x, y)?;

        let score = score_matrix[n][m];
        let alignments = {
            let mut traceback = Traceback::new(&traceback_matrix, x, y);
            traceback.expand(n, m)
        };
        let alignments = Rc::try_unwrap(alignments).unwrap_or_else(|shared| (*shared).clone());

        tracing::debug!(
            "Global alignment of {}x{} residues: score {}, {} optimal alignments",
            n,
            m,
            score,
            alignments.len()
        );
        if alignments.len() > LARGE_RESULT_WARNING {
            tracing::warn!(
                "{} co-optimal global alignments; inputs are highly degenerate",
                alignments.len()
            );
        }

        Ok(AlignmentResult { score, alignments })
    }

    fn initialize_matrices(
        &self,
        score_matrix: &mut [Vec<i32>],
        traceback_matrix: &mut [Vec<TagSet<Direction>>],
        n: usize,
        m: usize,
    ) -> PetasosResult<()> {
        let d = self.gap_penalty;

        // First row: gaps in the first sequence
        for j in 1..=m {
            score_matrix[0][j] = gap_run(d, d, j)?;
            traceback_matrix[0][j].push(Direction::Left);
        }

        // First column: gaps in the second sequence
        for i in 1..=n {
            score_matrix[i][0] = gap_run(d, d, i)?;
            traceback_matrix[i][0].push(Direction::Up);
        }
        Ok(())
    }

    fn fill_matrices(
        &self,
        score_matrix: &mut [Vec<i32>],
        traceback_matrix: &mut [Vec<TagSet<Direction>>],
        x: &[u8],
        y: &[u8],
    ) -> PetasosResult<()> {
        let d = self.gap_penalty;
        let mut tied_cells = 0usize;

        for i in 1..=x.len() {
            for j in 1..=y.len() {
                let substitution = self.scoring.score(x[i - 1], y[j - 1])?;

                let (best, directions) = best_of(&[
                    (
                        Direction::Diagonal,
                        checked(score_matrix[i - 1][j - 1].checked_add(substitution))?,
                    ),
                    (Direction::Up, checked(score_matrix[i - 1][j].checked_sub(d))?),
                    (Direction::Left, checked(score_matrix[i][j - 1].checked_sub(d))?),
                ]);

                if directions.len() > 1 {
                    tied_cells += 1;
                }
                score_matrix[i][j] = best;
                traceback_matrix[i][j] = directions;
            }
        }

        tracing::debug!("Linear fill complete, {} cells with tied predecessors", tied_cells);
        Ok(())
    }
}

/// Memoized enumeration of every path from a cell back to the origin
struct Traceback<'a> {
    directions: &'a [Vec<TagSet<Direction>>],
    x: &'a [u8],
    y: &'a [u8],
    memo: Vec<Vec<Option<Rc<Vec<AlignedPair>>>>>,
}

impl<'a> Traceback<'a> {
    fn new(directions: &'a [Vec<TagSet<Direction>>], x: &'a [u8], y: &'a [u8]) -> Self {
        Self {
            directions,
            x,
            y,
            memo: vec![vec![None; y.len() + 1]; x.len() + 1],
        }
    }

    /// All alignments of `x[..i]` against `y[..j]` following recorded directions
    fn expand(&mut self, i: usize, j: usize) -> Rc<Vec<AlignedPair>> {
        if let Some(cached) = &self.memo[i][j] {
            return Rc::clone(cached);
        }

        let alignments = if i == 0 && j == 0 {
            vec![AlignedPair::default()]
        } else {
            let directions = self.directions;
            let mut alignments = Vec::new();
            for &direction in &directions[i][j] {
                let (pi, pj, a, b) = match direction {
                    Direction::Diagonal => (i - 1, j - 1, self.x[i - 1], self.y[j - 1]),
                    Direction::Up => (i - 1, j, self.x[i - 1], GAP),
                    Direction::Left => (i, j - 1, GAP, self.y[j - 1]),
                };
                let prefixes = self.expand(pi, pj);
                alignments.extend(prefixes.iter().map(|prefix| prefix.extended(a, b)));
            }
            alignments
        };

        let alignments = Rc::new(alignments);
        self.memo[i][j] = Some(Rc::clone(&alignments));
        alignments
    }
}
