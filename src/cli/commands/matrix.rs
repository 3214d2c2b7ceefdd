use crate::cli::output::{section_header, tree};
use clap::Args;
use petasos_bio::scoring::ScoringTable;

#[derive(Args, Debug)]
pub struct MatrixArgs {
    /// Built-in matrix name or path to a BLAST-format file
    pub matrix: String,
}

/// Summary lines for a parsed table
pub fn describe(table: &ScoringTable) -> Vec<(&'static str, String)> {
    vec![
        ("Alphabet", String::from_utf8_lossy(table.alphabet()).into_owned()),
        ("Size", format!("{} x {}", table.rows().len(), table.len())),
        (
            "Symmetric",
            if table.is_symmetric() { "yes" } else { "no" }.to_string(),
        ),
    ]
}

pub fn run(args: MatrixArgs) -> anyhow::Result<()> {
    let table = ScoringTable::resolve(&args.matrix)?;

    section_header(table.name());
    tree(&describe(&table));
    Ok(())
}
