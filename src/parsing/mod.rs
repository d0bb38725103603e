//! Readers for FASTA input.
//!
//! ## Example
//!
//! ```rust,no_run
//! use fasta_utils::parsing::fasta::{parse_fasta_text, read_fasta_file, FastaReader};
//! use std::path::Path;
//!
//! // Materialize every record of a file
//! let records = read_fasta_file(Path::new("proteins.fasta")).unwrap();
//!
//! // Or stream records one at a time
//! for record in FastaReader::from_path(Path::new("reads.fa")).unwrap() {
//!     let record = record.unwrap();
//!     println!("{}\t{}", record.id(), record.len());
//! }
//!
//! // Or parse text already in memory
//! let records = parse_fasta_text(">seq1\nACGT\n").unwrap();
//! ```
//!
//! ## Accepted Input
//!
//! | Line kind              | Handling                                        |
//! |------------------------|-------------------------------------------------|
//! | `>` header             | Closes the previous record, starts a new one    |
//! | Sequence line          | Whitespace removed, appended to current record  |
//! | Blank line             | Ignored                                         |
//! | Data before any header | `ParseError::Malformed`                         |

pub mod fasta;
