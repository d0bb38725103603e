//! Centralized validation of command-line parameters.

/// Number of output files that may be created without asking first
pub const MAX_FILES_WITHOUT_CONFIRMATION: usize = 10;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid length threshold '{0}': expected a positive integer")]
    InvalidThreshold(String),

    #[error("Cannot derive an output name from input path '{0}'")]
    InvalidInputPath(String),
}

/// Parse a comma-separated list of length thresholds, e.g. `"60,90,120"`.
///
/// Surrounding whitespace is allowed around each entry. The result is sorted
/// ascending so that callers may list thresholds in any order; duplicates are
/// kept and rejected later by the bucketing step. An empty string yields an
/// empty list.
///
/// # Examples
///
/// ```
/// use fasta_utils::utils::validation::parse_length_thresholds;
///
/// assert_eq!(parse_length_thresholds("100, 50").unwrap(), vec![50, 100]);
/// assert!(parse_length_thresholds("50,abc").is_err());
/// ```
///
/// # Errors
///
/// Returns `ValidationError::InvalidThreshold` for any entry that is not a
/// non-negative integer.
pub fn parse_length_thresholds(list: &str) -> Result<Vec<usize>, ValidationError> {
    if list.trim().is_empty() {
        return Ok(Vec::new());
    }

    let mut thresholds = list
        .split(',')
        .map(str::trim)
        .map(|entry| {
            entry
                .parse::<usize>()
                .map_err(|_| ValidationError::InvalidThreshold(entry.to_string()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    thresholds.sort_unstable();
    Ok(thresholds)
}

/// Check whether creating `count` files needs confirmation.
///
/// Returns a warning message if `count` exceeds
/// [`MAX_FILES_WITHOUT_CONFIRMATION`], None if it is safe to go ahead.
#[must_use]
pub fn check_output_count(count: usize) -> Option<String> {
    if count > MAX_FILES_WITHOUT_CONFIRMATION {
        Some(format!("This will create {count} files"))
    } else {
        None
    }
}
