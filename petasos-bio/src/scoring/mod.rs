/// Substitution scoring tables for sequence alignment
mod builtin;
mod parser;

pub use builtin::{BLOSUM50_TEXT, BLOSUM62_TEXT};
pub use parser::{parse_blast_matrix, MAX_COLUMNS};

use petasos_core::{PetasosError, PetasosResult};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Pairwise residue scoring consumed by the alignment engines.
///
/// A missing pair is an error, never a silent default.
pub trait ScoringMatrix {
    fn score(&self, a: u8, b: u8) -> PetasosResult<i32>;
}

/// Residue-by-residue substitution scores read from a BLAST-format table.
///
/// Rows and columns are kept separately because the format does not force them
/// to carry the same alphabet; `score(a, b)` reads row `a`, column `b`.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringTable {
    name: String,
    rows: Vec<u8>,
    columns: Vec<u8>,
    row_index: HashMap<u8, usize>,
    column_index: HashMap<u8, usize>,
    scores: Vec<i32>,
}

impl ScoringTable {
    pub(crate) fn from_parts(name: String, rows: Vec<(u8, Vec<i32>)>, columns: Vec<u8>) -> Self {
        let column_index = columns
            .iter()
            .enumerate()
            .map(|(i, &c)| (c, i))
            .collect();
        let mut row_index = HashMap::with_capacity(rows.len());
        let mut row_symbols = Vec::with_capacity(rows.len());
        let mut scores = Vec::with_capacity(rows.len() * columns.len());

        for (i, (symbol, values)) in rows.into_iter().enumerate() {
            row_index.insert(symbol, i);
            row_symbols.push(symbol);
            scores.extend(values);
        }

        Self {
            name,
            rows: row_symbols,
            columns,
            row_index,
            column_index,
            scores,
        }
    }

    /// Parse a table from any buffered reader
    pub fn from_reader<R: BufRead>(name: impl Into<String>, reader: R) -> PetasosResult<Self> {
        parse_blast_matrix(name, reader)
    }

    /// Read and parse a table file
    pub fn from_path<P: AsRef<Path>>(path: P) -> PetasosResult<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let table = Self::from_reader(path.display().to_string(), BufReader::new(file))?;
        tracing::debug!(
            "Loaded scoring matrix {} ({} rows x {} columns)",
            table.name,
            table.rows.len(),
            table.columns.len()
        );
        Ok(table)
    }

    /// BLOSUM50, the matrix of the classic textbook alignments
    pub fn blosum50() -> &'static ScoringTable {
        builtin::blosum50()
    }

    pub fn blosum62() -> &'static ScoringTable {
        builtin::blosum62()
    }

    /// Look up a built-in table by name, ignoring case
    pub fn builtin(name: &str) -> Option<&'static ScoringTable> {
        match name.to_ascii_uppercase().as_str() {
            "BLOSUM50" => Some(builtin::blosum50()),
            "BLOSUM62" => Some(builtin::blosum62()),
            _ => None,
        }
    }

    /// Resolve a user-supplied matrix argument.
    ///
    /// Built-in names win, then paths as given, then bare names under
    /// `PETASOS_HOME/matrices`.
    pub fn resolve(name_or_path: &str) -> PetasosResult<Self> {
        if let Some(table) = Self::builtin(name_or_path) {
            return Ok(table.clone());
        }

        let path = Path::new(name_or_path);
        if path.exists() {
            return Self::from_path(path);
        }

        let candidate = petasos_core::system::matrices_dir().join(name_or_path);
        if candidate.exists() {
            return Self::from_path(candidate);
        }

        // Report the path the caller actually asked for
        Self::from_path(path)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Symbols that have a row
    pub fn rows(&self) -> &[u8] {
        &self.rows
    }

    /// Symbols that have a column, in caption order
    pub fn alphabet(&self) -> &[u8] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Whether `symbol` can appear on both sides of a lookup
    pub fn contains(&self, symbol: u8) -> bool {
        self.row_index.contains_key(&symbol) && self.column_index.contains_key(&symbol)
    }

    pub fn is_symmetric(&self) -> bool {
        self.rows.iter().all(|&a| {
            self.columns.iter().all(|&b| {
                match (self.get(a, b), self.get(b, a)) {
                    (Some(ab), Some(ba)) => ab == ba,
                    _ => false,
                }
            })
        })
    }

    fn get(&self, a: u8, b: u8) -> Option<i32> {
        let row = *self.row_index.get(&a)?;
        let column = *self.column_index.get(&b)?;
        Some(self.scores[row * self.columns.len() + column])
    }
}

impl ScoringMatrix for ScoringTable {
    fn score(&self, a: u8, b: u8) -> PetasosResult<i32> {
        let row = self
            .row_index
            .get(&a)
            .ok_or(PetasosError::Lookup { symbol: char::from(a) })?;
        let column = self
            .column_index
            .get(&b)
            .ok_or(PetasosError::Lookup { symbol: char::from(b) })?;
        Ok(self.scores[row * self.columns.len() + column])
    }
}

impl<S: ScoringMatrix + ?Sized> ScoringMatrix for &S {
    fn score(&self, a: u8, b: u8) -> PetasosResult<i32> {
        (**self).score(a, b)
    }
}

impl std::str::FromStr for ScoringTable {
    type Err = PetasosError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_reader("<inline>", s.as_bytes())
    }
}
