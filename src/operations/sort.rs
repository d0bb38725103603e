use crate::core::record::Record;

/// Sort records by ascending sequence length.
///
/// The sort is stable: records of equal length keep their input order.
#[must_use]
pub fn sort_by_length(mut records: Vec<Record>) -> Vec<Record> {
    records.sort_by_key(Record::len);
    records
}
