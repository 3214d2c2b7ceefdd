/// Amino-acid sequence validation
use petasos_core::{PetasosError, PetasosResult};

/// The 20 standard amino-acid one-letter codes
pub const AMINO_ACIDS: &[u8; 20] = b"ACDEFGHIKLMNPQRSTVWY";

pub fn is_amino_acid(c: char) -> bool {
    c.is_ascii() && AMINO_ACIDS.contains(&(c as u8).to_ascii_uppercase())
}

/// Check that every character is a standard amino acid, ignoring case.
///
/// This is a caller-side precondition; the alignment engines never call it and
/// only require that residues are present in the scoring table.
pub fn is_valid_amino_acid_sequence(sequence: &str) -> bool {
    sequence.chars().all(is_amino_acid)
}

/// Like [`is_valid_amino_acid_sequence`] but names the first offending character
pub fn validate_sequence(sequence: &str) -> PetasosResult<()> {
    match sequence
        .char_indices()
        .find(|&(_, c)| !is_amino_acid(c))
    {
        Some((position, c)) => Err(PetasosError::InvalidSequence(format!(
            "'{}' at position {} is not a standard amino acid",
            c,
            position + 1
        ))),
        None => Ok(()),
    }
}
