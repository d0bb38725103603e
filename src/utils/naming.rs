//! Output file naming conventions.
//!
//! | Utility       | Output name                                  |
//! |---------------|----------------------------------------------|
//! | `sort`        | `<stem>_sorted.fasta`                        |
//! | `uniq`        | `<stem>_unique.fasta`                        |
//! | `split-every` | `<stem>_<start>-<start + count>.fasta`       |
//! | `split-len`   | `<stem>_length_<lo>-<hi>.fasta`, `<stem>_length_<max>plus.fasta` |
//!
//! `<stem>` is the input file name without its final extension.

use std::path::{Path, PathBuf};

use crate::utils::validation::ValidationError;

pub const FASTA_EXTENSION: &str = "fasta";
pub const SORTED_SUFFIX: &str = "sorted";
pub const UNIQUE_SUFFIX: &str = "unique";

/// File name of `input` without directories or its final extension.
///
/// # Errors
///
/// Returns `ValidationError::InvalidInputPath` if the path has no file name.
pub fn input_stem(input: &Path) -> Result<String, ValidationError> {
    input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .filter(|stem| !stem.is_empty())
        .ok_or_else(|| ValidationError::InvalidInputPath(input.display().to_string()))
}

/// Default single-file output, `<stem>_<suffix>.fasta`, relative to the
/// working directory.
///
/// # Errors
///
/// Returns `ValidationError::InvalidInputPath` if the path has no file name.
pub fn default_output_path(input: &Path, suffix: &str) -> Result<PathBuf, ValidationError> {
    let stem = input_stem(input)?;
    Ok(PathBuf::from(format!("{stem}_{suffix}.{FASTA_EXTENSION}")))
}

/// Place `name` in `dir`, leaving it bare when `dir` is the working directory.
#[must_use]
pub fn output_path(dir: &Path, name: &str) -> PathBuf {
    if dir == Path::new(".") {
        PathBuf::from(name)
    } else {
        dir.join(name)
    }
}

/// Name for the chunk starting at record `start`.
///
/// The end is the nominal `start + size`, also for a short final chunk.
#[must_use]
pub fn chunk_file_name(stem: &str, start: usize, size: usize) -> String {
    format!("{stem}_{start}-{}.{FASTA_EXTENSION}", start + size)
}

/// Name for a length bucket, given its label such as `0-49` or `100plus`.
#[must_use]
pub fn bucket_file_name(stem: &str, label: &str) -> String {
    format!("{stem}_length_{label}.{FASTA_EXTENSION}")
}
