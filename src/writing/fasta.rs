//! FASTA serialization.
//!
//! Headers are written verbatim from [`Record::description`] and sequences are
//! wrapped to a fixed number of characters per line.

use std::io::{BufWriter, Write};
use std::path::Path;

use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::debug;

use crate::core::record::Record;

/// Default number of sequence characters per line
pub const DEFAULT_LINE_WIDTH: usize = 60;

#[derive(Error, Debug)]
pub enum WriteError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to move output into place: {0}")]
    Persist(#[from] tempfile::PersistError),
}

/// Writes records as canonical FASTA text to any sink.
pub struct FastaWriter<W: Write> {
    inner: W,
    line_width: usize,
    records_written: usize,
}

impl<W: Write> FastaWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            line_width: DEFAULT_LINE_WIDTH,
            records_written: 0,
        }
    }

    /// Set the number of sequence characters per line; `0` disables wrapping.
    #[must_use]
    pub fn with_line_width(mut self, width: usize) -> Self {
        self.line_width = width;
        self
    }

    #[must_use]
    pub fn records_written(&self) -> usize {
        self.records_written
    }

    /// Write a single record.
    ///
    /// # Errors
    ///
    /// Returns any error raised by the underlying sink.
    pub fn write_record(&mut self, record: &Record) -> std::io::Result<()> {
        writeln!(self.inner, ">{}", record.description())?;

        let sequence = record.sequence();
        if self.line_width == 0 {
            if !sequence.is_empty() {
                writeln!(self.inner, "{sequence}")?;
            }
        } else {
            // Break on character boundaries so multi-byte symbols stay intact
            let mut start = 0;
            for (count, (offset, _)) in sequence.char_indices().enumerate() {
                if count > 0 && count % self.line_width == 0 {
                    writeln!(self.inner, "{}", &sequence[start..offset])?;
                    start = offset;
                }
            }
            if start < sequence.len() {
                writeln!(self.inner, "{}", &sequence[start..])?;
            }
        }

        self.records_written += 1;
        Ok(())
    }

    /// Write records in the given order.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by the underlying sink.
    pub fn write_all_records<'a, I>(&mut self, records: I) -> std::io::Result<()>
    where
        I: IntoIterator<Item = &'a Record>,
    {
        for record in records {
            self.write_record(record)?;
        }
        Ok(())
    }

    /// Flush and hand back the sink.
    ///
    /// # Errors
    ///
    /// Returns any error raised while flushing.
    pub fn finish(mut self) -> std::io::Result<W> {
        self.inner.flush()?;
        Ok(self.inner)
    }
}

/// Write records to `path`.
///
/// The records are first written to a temporary file next to `path`, which is
/// renamed over `path` only after every record has been flushed. A failure
/// part-way through leaves any existing file at `path` untouched.
///
/// # Errors
///
/// Returns `WriteError::Io` if the temporary file cannot be created or written,
/// or `WriteError::Persist` if it cannot be renamed into place.
pub fn write_fasta_file(
    path: &Path,
    records: &[Record],
    line_width: usize,
) -> Result<(), WriteError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let temp = NamedTempFile::new_in(dir)?;
    let mut writer = FastaWriter::new(BufWriter::new(temp)).with_line_width(line_width);
    writer.write_all_records(records)?;
    let written = writer.records_written();

    let temp = writer
        .finish()?
        .into_inner()
        .map_err(std::io::IntoInnerError::into_error)?;
    temp.as_file().sync_all()?;
    temp.persist(path)?;

    debug!("Wrote {written} records to {}", path.display());
    Ok(())
}

/// Render records to a FASTA string.
#[must_use]
pub fn to_fasta_string(records: &[Record], line_width: usize) -> String {
    let mut writer = FastaWriter::new(Vec::new()).with_line_width(line_width);
    // A Vec sink cannot fail
    let bytes = writer
        .write_all_records(records)
        .and_then(|()| writer.finish())
        .expect("writing to a Vec cannot fail");
    String::from_utf8(bytes).expect("records hold valid UTF-8")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::fasta::{parse_fasta_text, read_fasta_file};
    use tempfile::TempDir;

    fn records() -> Vec<Record> {
        vec![
            Record::new("chr1 first contig", "ACGTACGTAC"),
            Record::new("empty", ""),
            Record::new("chr2", "GGGG"),
        ]
    }

    #[test]
    fn test_wraps_sequence() {
        let text = to_fasta_string(&records(), 4);
        assert_eq!(
            text,
            ">chr1 first contig\nACGT\nACGT\nAC\n>empty\n>chr2\nGGGG\n"
        );
    }

    #[test]
    fn test_no_wrapping() {
        let text = to_fasta_string(&records(), 0);
        assert_eq!(text, ">chr1 first contig\nACGTACGTAC\n>empty\n>chr2\nGGGG\n");
    }

    #[test]
    fn test_default_line_width() {
        let sequence = "A".repeat(130);
        let mut writer = FastaWriter::new(Vec::new());
        writer
            .write_record(&Record::new("long", sequence.as_str()))
            .unwrap();
        assert_eq!(writer.records_written(), 1);

        let text = String::from_utf8(writer.finish().unwrap()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[1].len(), 60);
        assert_eq!(lines[2].len(), 60);
        assert_eq!(lines[3].len(), 10);
    }

    #[test]
    fn test_wrapping_keeps_multibyte_characters() {
        let text = to_fasta_string(&[Record::new("x", "\u{e9}\u{e9}\u{e9}")], 2);
        assert_eq!(text, ">x\n\u{e9}\u{e9}\n\u{e9}\n");
    }

    #[test]
    fn test_round_trip_any_width() {
        let input = ">a desc here\nACGTNNacgt\n>b\n>c\nMKV*\nLLQ\n";
        let original = parse_fasta_text(input).unwrap();

        for width in [0, 1, 3, 60] {
            let text = to_fasta_string(&original, width);
            let reparsed = parse_fasta_text(&text).unwrap();
            assert_eq!(reparsed, original, "width {width}");
        }
    }

    #[test]
    fn test_write_fasta_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.fasta");

        write_fasta_file(&path, &records(), DEFAULT_LINE_WIDTH).unwrap();

        let reparsed = read_fasta_file(&path).unwrap();
        assert_eq!(reparsed, records());
        // Only the final file remains, no stray temporaries
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_write_fasta_file_overwrites() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.fasta");
        std::fs::write(&path, "old content").unwrap();

        write_fasta_file(&path, &records()[..1], 0).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text, ">chr1 first contig\nACGTACGTAC\n");
    }

    #[test]
    fn test_write_to_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("out.fasta");

        let result = write_fasta_file(&path, &records(), DEFAULT_LINE_WIDTH);
        assert!(matches!(result, Err(WriteError::Io(_))));
        assert!(!path.exists());
    }
}
