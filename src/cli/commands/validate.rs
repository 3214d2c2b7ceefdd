use crate::cli::output::{failure, section_header, success};
use clap::Args;
use petasos_bio::sequence::validate_sequence;
use petasos_core::PetasosError;

#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Sequences to check
    #[arg(required = true, value_name = "SEQ")]
    pub sequences: Vec<String>,
}

/// Check each sequence, returning the problem found in each invalid one
pub fn check(sequences: &[String]) -> Vec<(usize, PetasosError)> {
    sequences
        .iter()
        .enumerate()
        .filter_map(|(i, seq)| validate_sequence(seq).err().map(|e| (i, e)))
        .collect()
}

pub fn run(args: ValidateArgs) -> anyhow::Result<()> {
    section_header("Sequence Validation");

    let problems = check(&args.sequences);
    for (i, seq) in args.sequences.iter().enumerate() {
        match problems.iter().find(|(index, _)| *index == i) {
            Some((_, e)) => failure(&format!("{}: {}", seq, e)),
            None => success(seq),
        }
    }

    if problems.is_empty() {
        Ok(())
    } else {
        Err(PetasosError::InvalidSequence(format!(
            "{} of {} sequences contain non-standard residues",
            problems.len(),
            args.sequences.len()
        ))
        .into())
    }
}
