/// A single FASTA entry: one header line plus its (possibly empty) sequence.
///
/// Records are immutable once built. The `id` is derived from the header and
/// the length is computed up front so that sorting and bucketing never rescan
/// the sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    id: String,
    description: String,
    sequence: String,
    length: usize,
}

impl Record {
    /// Build a record from the header content (without the leading `>`) and
    /// an already-concatenated sequence.
    pub fn new(description: impl Into<String>, sequence: impl Into<String>) -> Self {
        let description = description.into();
        let sequence = sequence.into();
        let id = header_id(&description).to_string();
        let length = sequence.chars().count();

        Self {
            id,
            description,
            sequence,
            length,
        }
    }

    /// First whitespace-delimited token of the header
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Full header content after `>`, including the id
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn sequence(&self) -> &str {
        &self.sequence
    }

    /// Number of characters in the sequence
    #[must_use]
    pub fn len(&self) -> usize {
        self.length
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }
}

/// Extract the id token from header content.
///
/// Leading whitespace is skipped; the id runs up to the next whitespace
/// character, or to the end of the header if there is none.
#[must_use]
pub fn header_id(description: &str) -> &str {
    description.split_whitespace().next().unwrap_or("")
}
