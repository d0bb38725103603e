use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use tracing::debug;

use crate::cli::{confirm, read_input, write_output, OutputFormat, RunSummary};
use crate::operations::chunk::{chunk, chunk_count, validate_chunk_size};
use crate::utils::naming::{chunk_file_name, input_stem, output_path};
use crate::utils::validation::check_output_count;

#[derive(Args)]
pub struct SplitEveryArgs {
    /// Input FASTA file
    #[arg(required = true)]
    pub input: PathBuf,

    /// Number of sequences per file
    #[arg(short, long, required = true)]
    pub count: usize,

    /// Directory to write the output files to
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Create many output files without asking
    #[arg(short, long)]
    pub yes: bool,
}

/// Execute split-every subcommand
///
/// # Errors
///
/// Returns an error if the count is zero, the input cannot be parsed, the user
/// declines to create many files, or an output cannot be written.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: SplitEveryArgs, format: OutputFormat, line_width: usize) -> anyhow::Result<()> {
    let stem = input_stem(&args.input)?;
    validate_chunk_size(args.count)?;

    let records = read_input(&args.input)?;
    let mut summary = RunSummary::new("split-every", &args.input, records.len());

    let file_count = chunk_count(records.len(), args.count)?;
    if let Some(warning) = check_output_count(file_count) {
        if !args.yes && !confirm(&warning)? {
            anyhow::bail!(
                "Aborted before creating {file_count} files (use --yes to skip this check)"
            );
        }
    }

    std::fs::create_dir_all(&args.output_dir).with_context(|| {
        format!(
            "Failed to create output directory {}",
            args.output_dir.display()
        )
    })?;

    for piece in chunk(records, args.count)? {
        let path = output_path(
            &args.output_dir,
            &chunk_file_name(&stem, piece.start, args.count),
        );
        debug!("Chunk {}..{} -> {}", piece.start, piece.end(), path.display());
        summary
            .outputs
            .push(write_output(&path, &piece.records, line_width)?);
    }

    summary.print(format)
}
