//! Command-line interface for fasta-utils.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **sort**: Sort records by sequence length
//! - **uniq**: Drop records with a repeated id or sequence
//! - **split-every**: Split into files of a fixed number of records
//! - **split-len**: Split into files by sequence length ranges
//!
//! ## Usage
//!
//! ```text
//! # Shortest sequences first, written to reads_sorted.fasta
//! fasta-utils sort reads.fasta
//!
//! # Deduplicate into an explicit output file
//! fasta-utils uniq reads.fasta reads.dedup.fasta
//!
//! # 500 records per file
//! fasta-utils split-every reads.fasta --count 500
//!
//! # Lengths 0-49, 50-99 and 100+
//! fasta-utils split-len reads.fasta --lengths 50,100
//!
//! # JSON summary of the files written
//! fasta-utils --format json sort reads.fasta
//! ```

use std::io::Write;
use std::path::Path;

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::core::record::Record;
use crate::parsing::fasta::{is_fasta_file, FastaReader};
use crate::writing::fasta::{write_fasta_file, DEFAULT_LINE_WIDTH};

pub mod sort;
pub mod split_every;
pub mod split_len;
pub mod uniq;

#[derive(Parser)]
#[command(name = "fasta-utils")]
#[command(version)]
#[command(about = "Sort, split, and deduplicate FASTA files")]
#[command(
    long_about = "fasta-utils applies one transformation to a FASTA file and writes the result to one or more new FASTA files.\n\nRecords are read in full, transformed, and written with their original header lines; sequences are rewrapped to a fixed line width."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Summary output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Sequence characters per output line (0 disables wrapping)
    #[arg(short = 'w', long, global = true, default_value_t = DEFAULT_LINE_WIDTH)]
    pub line_width: usize,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Sort sequences by length, shortest first
    Sort(sort::SortArgs),

    /// Remove entries with duplicate ids or sequences
    Uniq(uniq::UniqArgs),

    /// Split into files holding a fixed number of sequences
    SplitEvery(split_every::SplitEveryArgs),

    /// Split into files by sequence length
    SplitLen(split_len::SplitLenArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}

/// One file produced by a run
#[derive(Debug, Clone, Serialize)]
pub struct OutputFile {
    pub path: String,
    pub records: usize,
}

/// What a command read and wrote
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub command: &'static str,
    pub input: String,
    pub records_read: usize,
    pub outputs: Vec<OutputFile>,
    /// Outputs not written because they would have been empty
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<String>,
}

impl RunSummary {
    pub fn new(command: &'static str, input: &Path, records_read: usize) -> Self {
        Self {
            command,
            input: input.display().to_string(),
            records_read,
            outputs: Vec::new(),
            skipped: Vec::new(),
        }
    }

    /// Print the summary to stdout.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn print(&self, format: OutputFormat) -> anyhow::Result<()> {
        match format {
            OutputFormat::Text => print!("{}", self.to_text()),
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(self)?),
            OutputFormat::Tsv => print!("{}", self.to_tsv()),
        }
        Ok(())
    }

    fn to_text(&self) -> String {
        let mut text = format!("Read {} sequences from {}\n", self.records_read, self.input);
        for output in &self.outputs {
            text.push_str(&format!(
                "Wrote {} sequences to {}\n",
                output.records, output.path
            ));
        }
        for path in &self.skipped {
            text.push_str(&format!("No entries for {path}\n"));
        }
        text
    }

    fn to_tsv(&self) -> String {
        let mut text = String::from("path\trecords\tstatus\n");
        for output in &self.outputs {
            text.push_str(&format!("{}\t{}\twritten\n", output.path, output.records));
        }
        for path in &self.skipped {
            text.push_str(&format!("{path}\t0\tskipped\n"));
        }
        text
    }
}

/// Read every record of the input file.
///
/// # Errors
///
/// Returns an error naming the path if it cannot be read or is malformed.
pub fn read_input(path: &Path) -> anyhow::Result<Vec<Record>> {
    if !is_fasta_file(path) {
        warn!(
            "{} does not have a FASTA extension, reading it anyway",
            path.display()
        );
    }

    let context = || format!("Failed to read FASTA file {}", path.display());
    let mut reader = FastaReader::from_path(path).with_context(context)?;
    let records = reader
        .by_ref()
        .collect::<Result<Vec<Record>, _>>()
        .with_context(context)?;
    debug!("Parsed {} lines from {}", reader.line_number(), path.display());
    info!("Read {} sequences from {}", records.len(), path.display());
    Ok(records)
}

/// Write records to a single output file.
///
/// # Errors
///
/// Returns an error naming the path if it cannot be written.
pub fn write_output(
    path: &Path,
    records: &[Record],
    line_width: usize,
) -> anyhow::Result<OutputFile> {
    info!("Writing {} sequences to {}", records.len(), path.display());
    write_fasta_file(path, records, line_width)
        .with_context(|| format!("Failed to write FASTA file {}", path.display()))?;

    Ok(OutputFile {
        path: path.display().to_string(),
        records: records.len(),
    })
}

/// Ask on stderr whether to go ahead, reading the answer from stdin.
///
/// Any line (including an empty one) confirms; end of input declines.
///
/// # Errors
///
/// Returns an error if stdin or stderr fail.
pub fn confirm(message: &str) -> anyhow::Result<bool> {
    let mut stderr = std::io::stderr().lock();
    write!(
        stderr,
        "Warning: {message}. Press Enter to continue or Ctrl+C to abort. "
    )?;
    stderr.flush()?;

    let mut answer = String::new();
    let read = std::io::stdin().read_line(&mut answer)?;
    Ok(read > 0)
}
