//! Operations over a fully materialized collection of records.
//!
//! - [`sort::sort_by_length`]: stable ascending sort by sequence length
//! - [`chunk::chunk`]: consecutive groups of a fixed size
//! - [`bucket::bucket_by_length`]: half-open length ranges between thresholds
//! - [`dedup::deduplicate`]: drop records whose id or sequence was already kept
//!
//! Every operation consumes its input and returns a new collection. Arguments
//! are validated before any record is looked at.
//!
//! ## Example
//!
//! ```rust
//! use fasta_utils::operations::bucket::bucket_by_length;
//! use fasta_utils::parsing::fasta::parse_fasta_text;
//!
//! let records = parse_fasta_text(">short\nACGT\n>long\nACGTACGTACGT\n").unwrap();
//! let buckets = bucket_by_length(records, &[10]).unwrap();
//!
//! assert_eq!(buckets[0].label(), "0-9");
//! assert_eq!(buckets[0].records[0].id(), "short");
//! assert_eq!(buckets[1].label(), "10plus");
//! assert_eq!(buckets[1].records[0].id(), "long");
//! ```

use thiserror::Error;

pub mod bucket;
pub mod chunk;
pub mod dedup;
pub mod sort;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OperationError {
    #[error("Invalid chunk size: {0} (must be at least 1)")]
    InvalidChunkSize(usize),

    #[error("No length thresholds given")]
    EmptyThresholds,

    #[error("Length thresholds must be positive")]
    ZeroThreshold,

    #[error("Length thresholds must be strictly increasing: {current} follows {previous}")]
    NonIncreasingThresholds { previous: usize, current: usize },
}
