//! Streaming FASTA parser.
//!
//! [`FastaReader`] walks its input one line at a time and yields a [`Record`]
//! each time a header closes the previous entry (or the input ends). Nothing
//! beyond the record under construction is held in memory.
//!
//! Supported extensions for [`is_fasta_file`]: `.fa`, `.fasta`, `.fna`, `.faa`,
//! `.ffn`, `.fas`

use std::ffi::OsStr;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use thiserror::Error;

use crate::core::record::Record;

const BYTE_ORDER_MARK: char = '\u{feff}';

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed FASTA at line {line}: {message}")]
    Malformed { line: usize, message: String },
}

/// Check if the path has a FASTA extension
pub fn is_fasta_file(path: &Path) -> bool {
    matches!(
        path.extension()
            .and_then(OsStr::to_str)
            .map(str::to_lowercase)
            .as_deref(),
        Some("fa" | "fasta" | "fna" | "faa" | "ffn" | "fas")
    )
}

/// Lazy iterator over the records of a FASTA stream.
///
/// The reader is single-pass: once it has returned `None` or an error it stays
/// exhausted.
pub struct FastaReader<R> {
    inner: R,
    line: String,
    line_number: usize,
    /// Header of the record being assembled; `None` until the first `>` line
    header: Option<String>,
    sequence: String,
    done: bool,
}

impl<R: BufRead> FastaReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            line: String::new(),
            line_number: 0,
            header: None,
            sequence: String::new(),
            done: false,
        }
    }

    /// Number of lines consumed so far
    #[must_use]
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Close the in-progress record, if a header has been seen.
    fn flush(&mut self) -> Option<Record> {
        let header = self.header.take()?;
        let sequence = std::mem::take(&mut self.sequence);
        Some(Record::new(header, sequence))
    }

    fn fail(&mut self, error: ParseError) -> Option<Result<Record, ParseError>> {
        self.done = true;
        Some(Err(error))
    }
}

impl FastaReader<BufReader<File>> {
    /// Open a FASTA file for streaming.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::Io` if the file cannot be opened.
    pub fn from_path(path: &Path) -> Result<Self, ParseError> {
        let file = File::open(path)?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> Iterator for FastaReader<R> {
    type Item = Result<Record, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        loop {
            self.line.clear();
            match self.inner.read_line(&mut self.line) {
                Ok(0) => {
                    self.done = true;
                    return self.flush().map(Ok);
                }
                Ok(_) => self.line_number += 1,
                Err(e) => return self.fail(e.into()),
            }

            if self.line_number == 1 && self.line.starts_with(BYTE_ORDER_MARK) {
                self.line.drain(..BYTE_ORDER_MARK.len_utf8());
            }

            let line = self.line.trim_end();
            if line.trim_start().is_empty() {
                continue;
            }

            if let Some(header) = line.strip_prefix('>') {
                let header = header.to_string();
                let finished = self.flush();
                self.header = Some(header);
                if let Some(record) = finished {
                    return Some(Ok(record));
                }
                continue;
            }

            if self.header.is_none() {
                let line = self.line_number;
                return self.fail(ParseError::Malformed {
                    line,
                    message: "content before first header".to_string(),
                });
            }

            self.sequence
                .extend(self.line.chars().filter(|c| !c.is_whitespace()));
        }
    }
}

/// Parse a FASTA file and collect all of its records.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read or is not valid UTF-8,
/// or `ParseError::Malformed` if sequence data appears before the first header.
pub fn read_fasta_file(path: &Path) -> Result<Vec<Record>, ParseError> {
    FastaReader::from_path(path)?.collect()
}

/// Parse FASTA records from in-memory text.
///
/// # Errors
///
/// Returns `ParseError::Malformed` if sequence data appears before the first header.
pub fn parse_fasta_text(text: &str) -> Result<Vec<Record>, ParseError> {
    FastaReader::new(text.as_bytes()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_is_fasta_file() {
        assert!(is_fasta_file(Path::new("test.fa")));
        assert!(is_fasta_file(Path::new("test.fasta")));
        assert!(is_fasta_file(Path::new("test.fna")));
        assert!(is_fasta_file(Path::new("proteins.faa")));
        assert!(is_fasta_file(Path::new("/path/to/Reference.FA")));

        assert!(!is_fasta_file(Path::new("test.fa.gz")));
        assert!(!is_fasta_file(Path::new("test.fastq")));
        assert!(!is_fasta_file(Path::new("test")));
    }

    #[test]
    fn test_parse_multiline_records() {
        let records =
            parse_fasta_text(">chr1 description\nACGTACGT\nACGT\n>chr2\nGGGG\n").unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id(), "chr1");
        assert_eq!(records[0].description(), "chr1 description");
        assert_eq!(records[0].sequence(), "ACGTACGTACGT");
        assert_eq!(records[0].len(), 12);
        assert_eq!(records[1].id(), "chr2");
        assert_eq!(records[1].sequence(), "GGGG");
    }

    #[test]
    fn test_empty_input_yields_no_records() {
        assert!(parse_fasta_text("").unwrap().is_empty());
        assert!(parse_fasta_text("\n  \n\t\n").unwrap().is_empty());
    }

    #[test]
    fn test_header_only_records() {
        let records = parse_fasta_text(">a\n>b\nAC\n>c").unwrap();

        assert_eq!(records.len(), 3);
        assert_eq!(records[0].sequence(), "");
        assert_eq!(records[1].sequence(), "AC");
        assert_eq!(records[2].id(), "c");
        assert!(records[2].is_empty());
    }

    #[test]
    fn test_blank_lines_are_ignored() {
        let records = parse_fasta_text("\n\n>a\nAC\n\nGT\n\n>b\n\nTT\n").unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].sequence(), "ACGT");
        assert_eq!(records[1].sequence(), "TT");
    }

    #[test]
    fn test_whitespace_stripped_from_sequence() {
        let records = parse_fasta_text(">a\r\n  AC GT \r\nnn-*\t\r\n").unwrap();

        assert_eq!(records[0].description(), "a");
        assert_eq!(records[0].sequence(), "ACGTnn-*");
    }

    #[test]
    fn test_content_before_header_is_malformed() {
        let err = parse_fasta_text("\nACGT\n>a\nAC\n").unwrap_err();

        match err {
            ParseError::Malformed { line, message } => {
                assert_eq!(line, 2);
                assert!(message.contains("before first header"));
            }
            ParseError::Io(e) => panic!("Unexpected IO error: {e}"),
        }
    }

    #[test]
    fn test_reader_is_lazy_and_stops_after_error() {
        let mut reader = FastaReader::new("junk\n>a\nAC\n".as_bytes());

        assert!(matches!(reader.next(), Some(Err(ParseError::Malformed { .. }))));
        assert!(reader.next().is_none());
    }

    #[test]
    fn test_reader_yields_records_incrementally() {
        let mut reader = FastaReader::new(">a\nAC\n>b\nGT\n".as_bytes());

        let first = reader.next().unwrap().unwrap();
        assert_eq!(first.id(), "a");
        // Only the next header has been consumed so far
        assert_eq!(reader.line_number(), 3);

        let second = reader.next().unwrap().unwrap();
        assert_eq!(second.id(), "b");
        assert!(reader.next().is_none());
        assert!(reader.next().is_none());
    }

    #[test]
    fn test_leading_byte_order_mark_is_skipped() {
        let records = parse_fasta_text("\u{feff}>a\nAC\n").unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id(), "a");
        assert_eq!(records[0].description(), "a");
        assert_eq!(records[0].sequence(), "AC");
    }

    #[test]
    fn test_byte_order_mark_only_stripped_on_first_line() {
        let records = parse_fasta_text(">a\n\u{feff}AC\n").unwrap();

        // Not whitespace, so it stays part of the sequence
        assert_eq!(records[0].sequence(), "\u{feff}AC");
    }

    #[test]
    fn test_invalid_utf8_is_io_error() {
        let bytes: &[u8] = b">a\nAC\xff\xfeGT\n";
        let result: Result<Vec<Record>, ParseError> = FastaReader::new(bytes).collect();

        assert!(matches!(result, Err(ParseError::Io(_))));
    }

    #[test]
    fn test_read_fasta_file() {
        let mut temp = NamedTempFile::with_suffix(".fa").unwrap();
        temp.write_all(b">chr1\nACGT\nAC\n>chr2 second\nGG\n").unwrap();
        temp.flush().unwrap();

        let records = read_fasta_file(temp.path()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].len(), 6);
        assert_eq!(records[1].description(), "chr2 second");
    }

    #[test]
    fn test_read_missing_file() {
        let result = read_fasta_file(Path::new("/nonexistent/input.fasta"));
        assert!(matches!(result, Err(ParseError::Io(_))));
    }
}
