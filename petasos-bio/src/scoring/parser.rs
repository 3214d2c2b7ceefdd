/// BLAST-format scoring matrix parser
use super::ScoringTable;
use petasos_core::{MatrixFormatError, PetasosResult};
use std::collections::HashSet;
use std::io::BufRead;

/// 23 residue codes plus the `*` stop column
pub const MAX_COLUMNS: usize = 24;

fn is_caption(c: char) -> bool {
    // J and O are not amino-acid codes in BLAST tables
    c == '*' || (c.is_ascii_uppercase() && c != 'J' && c != 'O')
}

fn is_skippable(line: &str) -> bool {
    let trimmed = line.trim_start();
    trimmed.is_empty() || trimmed.starts_with('#')
}

/// Parse a BLAST-format substitution table.
///
/// The first line that is neither blank nor a `#` comment carries the column
/// captions; every following line is a row caption followed by one integer per
/// column. All structural problems are reported as [`MatrixFormatError`].
pub fn parse_blast_matrix<R: BufRead>(
    name: impl Into<String>,
    reader: R,
) -> PetasosResult<ScoringTable> {
    let mut lines = reader.lines();

    let header = loop {
        match lines.next() {
            Some(line) => {
                let line = line?;
                if !is_skippable(&line) {
                    break line;
                }
            }
            None => return Err(MatrixFormatError::MissingHeader.into()),
        }
    };

    let captions: Vec<char> = header.chars().filter(|&c| is_caption(c)).collect();
    if captions.len() > MAX_COLUMNS {
        return Err(MatrixFormatError::TooManyColumns {
            found: captions.len(),
            max: MAX_COLUMNS,
        }
        .into());
    }
    let mut seen = HashSet::with_capacity(captions.len());
    for &caption in &captions {
        if !seen.insert(caption) {
            return Err(MatrixFormatError::DuplicateHeader(caption).into());
        }
    }

    let mut rows: Vec<(u8, Vec<i32>)> = Vec::with_capacity(captions.len());
    let mut row_names = HashSet::with_capacity(captions.len());

    for line in lines {
        let line = line?;
        if is_skippable(&line) {
            continue;
        }

        let mut chars = line.chars();
        let row = match chars.next() {
            Some(c) => c,
            None => continue,
        };
        if !row_names.insert(row) {
            return Err(MatrixFormatError::DuplicateRowHeader(row).into());
        }

        let values = chars
            .as_str()
            .split_whitespace()
            .map(|token| {
                token.parse::<i32>().map_err(|_| MatrixFormatError::NonNumericEntry {
                    row,
                    token: token.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        if values.len() != captions.len() {
            return Err(MatrixFormatError::RowColumnCountMismatch {
                row,
                expected: captions.len(),
                found: values.len(),
            }
            .into());
        }

        // Non-ASCII row captions can never match a residue byte, but are kept
        // out of the table rather than truncated
        if row.is_ascii() {
            rows.push((row as u8, values));
        }
    }

    let columns = captions.into_iter().map(|c| c as u8).collect();
    Ok(ScoringTable::from_parts(name.into(), rows, columns))
}
