use std::path::PathBuf;

use clap::Args;
use tracing::info;

use crate::cli::{read_input, write_output, OutputFormat, RunSummary};
use crate::operations::dedup::deduplicate;
use crate::utils::naming::{default_output_path, UNIQUE_SUFFIX};

#[derive(Args)]
pub struct UniqArgs {
    /// Input FASTA file
    #[arg(required = true)]
    pub input: PathBuf,

    /// Output FASTA file (default: <input-stem>_unique.fasta)
    pub output: Option<PathBuf>,
}

/// Execute uniq subcommand
///
/// # Errors
///
/// Returns an error if the input cannot be parsed or the output cannot be written.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: UniqArgs, format: OutputFormat, line_width: usize) -> anyhow::Result<()> {
    let output = match args.output {
        Some(path) => path,
        None => default_output_path(&args.input, UNIQUE_SUFFIX)?,
    };

    let records = read_input(&args.input)?;
    let mut summary = RunSummary::new("uniq", &args.input, records.len());

    let unique = deduplicate(records);
    info!(
        "Removed {} duplicate entries",
        summary.records_read - unique.len()
    );
    summary
        .outputs
        .push(write_output(&output, &unique, line_width)?);

    summary.print(format)
}
