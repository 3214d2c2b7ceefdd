use super::{parse_blast_matrix, ScoringTable};
use std::sync::OnceLock;

pub const BLOSUM50_TEXT: &str = include_str!("../../data/blosum50.txt");
pub const BLOSUM62_TEXT: &str = include_str!("../../data/blosum62.txt");

static BLOSUM50: OnceLock<ScoringTable> = OnceLock::new();
static BLOSUM62: OnceLock<ScoringTable> = OnceLock::new();

pub(super) fn blosum50() -> &'static ScoringTable {
    BLOSUM50.get_or_init(|| {
        parse_blast_matrix("BLOSUM50", BLOSUM50_TEXT.as_bytes())
            .expect("Invalid embedded BLOSUM50 table")
    })
}

pub(super) fn blosum62() -> &'static ScoringTable {
    BLOSUM62.get_or_init(|| {
        parse_blast_matrix("BLOSUM62", BLOSUM62_TEXT.as_bytes())
            .expect("Invalid embedded BLOSUM62 table")
    })
}
