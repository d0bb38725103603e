//! Writers for FASTA output.
//!
//! ## Example
//!
//! ```rust,no_run
//! use fasta_utils::core::record::Record;
//! use fasta_utils::writing::fasta::{write_fasta_file, FastaWriter, DEFAULT_LINE_WIDTH};
//! use std::path::Path;
//!
//! let records = vec![Record::new("seq1 sample A", "ACGTACGT")];
//!
//! // Write a whole file, replacing it only once everything is on disk
//! write_fasta_file(Path::new("out.fasta"), &records, DEFAULT_LINE_WIDTH).unwrap();
//!
//! // Or stream into any `Write` sink
//! let mut writer = FastaWriter::new(std::io::stdout().lock()).with_line_width(80);
//! writer.write_all_records(&records).unwrap();
//! writer.finish().unwrap();
//! ```

pub mod fasta;
