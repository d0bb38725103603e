use std::path::PathBuf;

use clap::Args;

use crate::cli::{read_input, write_output, OutputFormat, RunSummary};
use crate::operations::sort::sort_by_length;
use crate::utils::naming::{default_output_path, SORTED_SUFFIX};

#[derive(Args)]
pub struct SortArgs {
    /// Input FASTA file
    #[arg(required = true)]
    pub input: PathBuf,

    /// Output FASTA file (default: <input-stem>_sorted.fasta)
    pub output: Option<PathBuf>,
}

/// Execute sort subcommand
///
/// # Errors
///
/// Returns an error if the input cannot be parsed or the output cannot be written.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: SortArgs, format: OutputFormat, line_width: usize) -> anyhow::Result<()> {
    let output = match args.output {
        Some(path) => path,
        None => default_output_path(&args.input, SORTED_SUFFIX)?,
    };

    let records = read_input(&args.input)?;
    let mut summary = RunSummary::new("sort", &args.input, records.len());

    let sorted = sort_by_length(records);
    summary
        .outputs
        .push(write_output(&output, &sorted, line_width)?);

    summary.print(format)
}
