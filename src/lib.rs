//! # fasta-utils
//!
//! A small library and command-line tool for reshaping FASTA files.
//!
//! Every utility follows the same pattern: read all records from one input
//! file, apply a single transformation, and write the result to one or more
//! new FASTA files. Header lines are carried through untouched and sequences
//! are rewrapped to a fixed width.
//!
//! ## Features
//!
//! - **Streaming parser**: [`FastaReader`] yields records lazily from any `BufRead`
//! - **Canonical writer**: [`FastaWriter`] with configurable line wrapping
//! - **Length sort**: stable, shortest first
//! - **Chunking**: fixed number of records per file
//! - **Length buckets**: half-open ranges between user-supplied thresholds
//! - **Deduplication**: first record wins per id and per sequence
//!
//! ## Example
//!
//! ```rust
//! use fasta_utils::parsing::fasta::parse_fasta_text;
//! use fasta_utils::operations::sort::sort_by_length;
//! use fasta_utils::writing::fasta::to_fasta_string;
//!
//! let records = parse_fasta_text(">a\nACGT\n>b\nAC\n>c\nACGTAC\n").unwrap();
//! let sorted = sort_by_length(records);
//!
//! assert_eq!(to_fasta_string(&sorted, 60), ">b\nAC\n>a\nACGT\n>c\nACGTAC\n");
//! ```
//!
//! ## Modules
//!
//! - [`core`]: The record data model
//! - [`parsing`]: Streaming FASTA parser
//! - [`writing`]: FASTA serialization and file output
//! - [`operations`]: Sort, chunk, bucket, and deduplicate
//! - [`utils`]: Parameter validation and output naming
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod core;
pub mod operations;
pub mod parsing;
pub mod utils;
pub mod writing;

// Re-export commonly used types for convenience
pub use crate::core::record::Record;
pub use crate::operations::OperationError;
pub use crate::parsing::fasta::{FastaReader, ParseError};
pub use crate::writing::fasta::{FastaWriter, WriteError};
