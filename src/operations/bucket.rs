use crate::core::record::Record;
use crate::operations::OperationError;

/// Records whose length falls in `[lower, upper)`.
///
/// The final bucket of a split has no upper bound and holds every record at
/// least as long as the largest threshold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LengthBucket {
    pub lower: usize,
    /// Exclusive upper bound; `None` for the open-ended bucket
    pub upper: Option<usize>,
    pub records: Vec<Record>,
}

impl LengthBucket {
    /// Human-readable range, e.g. `0-49` or `100plus`.
    #[must_use]
    pub fn label(&self) -> String {
        match self.upper {
            Some(upper) => format!("{}-{}", self.lower, upper - 1),
            None => format!("{}plus", self.lower),
        }
    }

    #[must_use]
    pub fn contains(&self, length: usize) -> bool {
        length >= self.lower && self.upper.map_or(true, |upper| length < upper)
    }
}

/// Check that thresholds are non-empty, positive, and strictly increasing.
///
/// # Errors
///
/// Returns the first violation found as an `OperationError`.
pub fn validate_thresholds(thresholds: &[usize]) -> Result<(), OperationError> {
    let Some(&first) = thresholds.first() else {
        return Err(OperationError::EmptyThresholds);
    };
    if first == 0 {
        return Err(OperationError::ZeroThreshold);
    }
    for pair in thresholds.windows(2) {
        if pair[1] <= pair[0] {
            return Err(OperationError::NonIncreasingThresholds {
                previous: pair[0],
                current: pair[1],
            });
        }
    }
    Ok(())
}

/// Distribute records into length buckets.
///
/// Returns `thresholds.len() + 1` buckets in ascending order. A record goes to
/// the bucket of the smallest threshold strictly greater than its length, or to
/// the final open-ended bucket if there is none. Input order is kept within
/// each bucket. Empty buckets are returned too.
///
/// # Errors
///
/// Returns an `OperationError` if the thresholds fail [`validate_thresholds`].
pub fn bucket_by_length(
    records: Vec<Record>,
    thresholds: &[usize],
) -> Result<Vec<LengthBucket>, OperationError> {
    validate_thresholds(thresholds)?;

    let mut buckets: Vec<LengthBucket> = Vec::with_capacity(thresholds.len() + 1);
    let mut lower = 0;
    for &threshold in thresholds {
        buckets.push(LengthBucket {
            lower,
            upper: Some(threshold),
            records: Vec::new(),
        });
        lower = threshold;
    }
    buckets.push(LengthBucket {
        lower,
        upper: None,
        records: Vec::new(),
    });

    for record in records {
        let index = thresholds.partition_point(|&threshold| threshold <= record.len());
        debug_assert!(buckets[index].contains(record.len()));
        buckets[index].records.push(record);
    }

    Ok(buckets)
}
