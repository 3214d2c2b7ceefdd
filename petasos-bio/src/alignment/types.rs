use petasos_core::{AlignmentMode, PetasosError, PetasosResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Symbol used for a gap column in aligned strings
pub const GAP: u8 = b'-';

/// Gap cost model, validated at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GapModel {
    /// Every gap column costs `penalty`
    Linear { penalty: i32 },
    /// First column of a run costs `open`, each further column `extend`
    Affine { open: i32, extend: i32 },
}

fn non_negative(name: &str, value: i32) -> PetasosResult<i32> {
    if value < 0 {
        return Err(PetasosError::InvalidParameter(format!(
            "{} must be non-negative, got {}",
            name, value
        )));
    }
    Ok(value)
}

impl GapModel {
    pub fn linear(penalty: i32) -> PetasosResult<Self> {
        Ok(Self::Linear {
            penalty: non_negative("gap penalty", penalty)?,
        })
    }

    pub fn affine(open: i32, extend: i32) -> PetasosResult<Self> {
        Ok(Self::Affine {
            open: non_negative("gap opening penalty", open)?,
            extend: non_negative("gap extension penalty", extend)?,
        })
    }

    /// The alignment mode this gap model drives
    pub fn mode(&self) -> AlignmentMode {
        match self {
            Self::Linear { .. } => AlignmentMode::Global,
            Self::Affine { .. } => AlignmentMode::Local,
        }
    }
}

/// One optimal alignment: two equal-length rows over residues and [`GAP`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct AlignedPair {
    pub first: String,
    pub second: String,
}

impl AlignedPair {
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self {
            first: first.into(),
            second: second.into(),
        }
    }

    /// Copy of `self` with one more column appended
    pub(crate) fn extended(&self, a: u8, b: u8) -> Self {
        let mut pair = self.clone();
        pair.first.push(char::from(a));
        pair.second.push(char::from(b));
        pair
    }

    /// Number of alignment columns
    pub fn len(&self) -> usize {
        self.first.len()
    }

    pub fn is_empty(&self) -> bool {
        self.first.is_empty()
    }

    /// First row with gap columns removed
    pub fn first_residues(&self) -> String {
        self.first.chars().filter(|&c| c != char::from(GAP)).collect()
    }

    /// Second row with gap columns removed
    pub fn second_residues(&self) -> String {
        self.second.chars().filter(|&c| c != char::from(GAP)).collect()
    }

    /// The same alignment with the two rows exchanged
    pub fn swapped(&self) -> Self {
        Self {
            first: self.second.clone(),
            second: self.first.clone(),
        }
    }
}

impl fmt::Display for AlignedPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.first)?;
        write!(f, "{}", self.second)
    }
}

/// Optimal score and every alignment that reaches it.
///
/// Alignments are listed in traceback order and are not deduplicated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlignmentResult {
    pub score: i32,
    pub alignments: Vec<AlignedPair>,
}

impl AlignmentResult {
    pub fn len(&self) -> usize {
        self.alignments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alignments.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AlignedPair> {
        self.alignments.iter()
    }

    pub fn contains(&self, first: &str, second: &str) -> bool {
        self.alignments
            .iter()
            .any(|pair| pair.first == first && pair.second == second)
    }
}

impl<'a> IntoIterator for &'a AlignmentResult {
    type Item = &'a AlignedPair;
    type IntoIter = std::slice::Iter<'a, AlignedPair>;

    fn into_iter(self) -> Self::IntoIter {
        self.alignments.iter()
    }
}
