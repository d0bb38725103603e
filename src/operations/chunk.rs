use crate::core::record::Record;
use crate::operations::OperationError;

/// A contiguous run of records cut from the input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    /// Zero-based index of the first record in the input
    pub start: usize,
    pub records: Vec<Record>,
}

impl Chunk {
    /// Index one past the last record in the input
    #[must_use]
    pub fn end(&self) -> usize {
        self.start + self.records.len()
    }
}

/// Check that a chunk holds at least one record.
///
/// # Errors
///
/// Returns `OperationError::InvalidChunkSize` if `size` is zero.
pub fn validate_chunk_size(size: usize) -> Result<(), OperationError> {
    if size == 0 {
        return Err(OperationError::InvalidChunkSize(size));
    }
    Ok(())
}

/// Number of chunks `chunk` would produce for `count` records.
///
/// # Errors
///
/// Returns `OperationError::InvalidChunkSize` if `size` is zero.
pub fn chunk_count(count: usize, size: usize) -> Result<usize, OperationError> {
    validate_chunk_size(size)?;
    Ok(count.div_ceil(size))
}

/// Split records into consecutive groups of `size`.
///
/// Every chunk holds exactly `size` records except the last, which holds
/// between 1 and `size`. No records means no chunks.
///
/// # Errors
///
/// Returns `OperationError::InvalidChunkSize` if `size` is zero.
pub fn chunk(records: Vec<Record>, size: usize) -> Result<Vec<Chunk>, OperationError> {
    let mut chunks = Vec::with_capacity(chunk_count(records.len(), size)?);
    let mut current = Vec::with_capacity(size.min(records.len()));
    let mut start = 0;

    for (index, record) in records.into_iter().enumerate() {
        if current.len() == size {
            chunks.push(Chunk {
                start,
                records: std::mem::take(&mut current),
            });
            start = index;
        }
        current.push(record);
    }

    if !current.is_empty() {
        chunks.push(Chunk {
            start,
            records: current,
        });
    }

    Ok(chunks)
}
