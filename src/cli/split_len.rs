use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use tracing::info;

use crate::cli::{read_input, write_output, OutputFormat, RunSummary};
use crate::operations::bucket::{bucket_by_length, validate_thresholds};
use crate::utils::naming::{bucket_file_name, input_stem, output_path};
use crate::utils::validation::parse_length_thresholds;

#[derive(Args)]
pub struct SplitLenArgs {
    /// Input FASTA file
    #[arg(required = true)]
    pub input: PathBuf,

    /// Comma-separated length thresholds, e.g. '60,90,120'
    #[arg(short, long, required = true)]
    pub lengths: String,

    /// Directory to write the output files to
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,
}

/// Execute split-len subcommand
///
/// Buckets without any sequence are reported but no file is written for them.
///
/// # Errors
///
/// Returns an error if the thresholds are invalid, the input cannot be parsed,
/// or an output cannot be written.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: SplitLenArgs, format: OutputFormat, line_width: usize) -> anyhow::Result<()> {
    let stem = input_stem(&args.input)?;
    let thresholds = parse_length_thresholds(&args.lengths)?;
    validate_thresholds(&thresholds)?;

    let records = read_input(&args.input)?;
    let mut summary = RunSummary::new("split-len", &args.input, records.len());

    std::fs::create_dir_all(&args.output_dir).with_context(|| {
        format!(
            "Failed to create output directory {}",
            args.output_dir.display()
        )
    })?;

    for bucket in bucket_by_length(records, &thresholds)? {
        let path = output_path(&args.output_dir, &bucket_file_name(&stem, &bucket.label()));
        if bucket.records.is_empty() {
            info!("No entries for {}", path.display());
            summary.skipped.push(path.display().to_string());
            continue;
        }
        summary
            .outputs
            .push(write_output(&path, &bucket.records, line_width)?);
    }

    summary.print(format)
}
