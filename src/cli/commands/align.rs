use clap::Args;
use petasos_bio::alignment::{align, AlignedPair, AlignmentResult, GapModel};
use petasos_bio::scoring::ScoringTable;
use petasos_bio::sequence::validate_sequence;
use petasos_core::{AlignmentMode, Config, OutputFormat, PetasosError, PetasosResult};
use serde::Serialize;

#[derive(Args, Debug)]
pub struct AlignArgs {
    /// First sequence
    pub seq1: String,

    /// Second sequence
    pub seq2: String,

    /// Scoring matrix: a built-in name (BLOSUM50, BLOSUM62) or a BLAST-format file
    pub matrix: Option<String>,

    /// Gap penalty in global mode, gap-opening penalty in local mode
    #[arg(allow_negative_numbers = true)]
    pub gap_penalty: Option<i32>,

    /// Alignment mode
    #[arg(short, long, value_enum, default_value_t = AlignmentMode::Global)]
    pub mode: AlignmentMode,

    /// Gap-extension penalty (local mode only)
    #[arg(long = "e", value_name = "EXTEND", allow_negative_numbers = true)]
    pub extend: Option<i32>,

    /// Reject residues outside the 20 standard amino acids before aligning
    #[arg(long)]
    pub strict: bool,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
}

/// Everything needed to run one alignment, after config fallbacks
#[derive(Debug)]
pub struct AlignRequest {
    pub mode: AlignmentMode,
    pub table: ScoringTable,
    pub gap: GapModel,
    pub validate: bool,
    pub format: OutputFormat,
}

impl AlignRequest {
    pub fn from_args(args: &AlignArgs, config: &Config) -> PetasosResult<Self> {
        let settings = &config.alignment;
        let penalty = args.gap_penalty.unwrap_or(settings.gap_penalty);

        let gap = match args.mode {
            AlignmentMode::Global => {
                if args.extend.is_some() {
                    return Err(PetasosError::InvalidParameter(
                        "--e applies only to local alignment".to_string(),
                    ));
                }
                GapModel::linear(penalty)?
            }
            AlignmentMode::Local => {
                let extend = args.extend.or(settings.gap_extension).ok_or_else(|| {
                    PetasosError::InvalidParameter(
                        "local alignment requires a gap-extension penalty (--e)".to_string(),
                    )
                })?;
                GapModel::affine(penalty, extend)?
            }
        };

        let matrix = args.matrix.as_deref().unwrap_or(&settings.matrix);
        let table = ScoringTable::resolve(matrix)?;

        Ok(Self {
            mode: args.mode,
            table,
            gap,
            validate: args.strict || settings.validate_sequences,
            format: args.format.unwrap_or(config.output.format),
        })
    }
}

/// Align the two sequences named in `args`
pub fn execute(args: &AlignArgs, request: &AlignRequest) -> PetasosResult<AlignmentResult> {
    if request.validate {
        validate_sequence(&args.seq1)?;
        validate_sequence(&args.seq2)?;
    }

    let result = align(&args.seq1, &args.seq2, &request.table, request.gap)?;
    tracing::info!(
        "{} alignment with {}: score {}, {} optimal alignments",
        request.mode,
        request.table.name(),
        result.score,
        result.len()
    );
    Ok(result)
}

/// Plain-text report: the score, the count, then each alignment on two lines
pub fn render_text(result: &AlignmentResult, mode: AlignmentMode) -> String {
    let mut out = format!(
        "Score: {}\nFound {} optimal {} alignments:\n",
        result.score,
        result.len(),
        mode
    );
    for pair in result {
        out.push_str(&format!("{}\n\n", pair));
    }
    out
}

#[derive(Serialize)]
struct AlignmentReport<'a> {
    mode: AlignmentMode,
    matrix: &'a str,
    score: i32,
    count: usize,
    alignments: &'a [AlignedPair],
}

pub fn render_json(
    result: &AlignmentResult,
    mode: AlignmentMode,
    matrix: &str,
) -> PetasosResult<String> {
    let report = AlignmentReport {
        mode,
        matrix,
        score: result.score,
        count: result.len(),
        alignments: &result.alignments,
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

pub fn run(args: AlignArgs, config: &Config) -> anyhow::Result<()> {
    let request = AlignRequest::from_args(&args, config)?;
    let result = execute(&args, &request)?;

    match request.format {
        OutputFormat::Text => print!("{}", render_text(&result, request.mode)),
        OutputFormat::Json => println!(
            "{}",
            render_json(&result, request.mode, request.table.name())?
        ),
    }
    Ok(())
}
