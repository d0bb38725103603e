use std::collections::HashSet;

use crate::core::record::Record;

/// Keep the first record for every id and every exact sequence.
///
/// A record is dropped when its id matches a record already kept, or when its
/// sequence does. The two are tracked separately, so a record can be dropped
/// for either reason. Kept records stay in input order.
#[must_use]
pub fn deduplicate(records: Vec<Record>) -> Vec<Record> {
    let mut seen_ids: HashSet<String> = HashSet::new();
    let mut seen_sequences: HashSet<String> = HashSet::new();
    let mut unique = Vec::with_capacity(records.len());

    for record in records {
        if seen_ids.contains(record.id()) || seen_sequences.contains(record.sequence()) {
            continue;
        }
        seen_ids.insert(record.id().to_string());
        seen_sequences.insert(record.sequence().to_string());
        unique.push(record);
    }

    unique
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::fasta::parse_fasta_text;

    #[test]
    fn test_first_occurrence_wins() {
        let records = parse_fasta_text(">x\nACGT\n>y\nACGT\n>x\nTTTT\n").unwrap();
        let unique = deduplicate(records);

        assert_eq!(unique.len(), 1);
        assert_eq!(unique[0].id(), "x");
        assert_eq!(unique[0].sequence(), "ACGT");
    }

    #[test]
    fn test_id_compares_first_token_only() {
        let records = parse_fasta_text(">x sample one\nAAAA\n>x sample two\nCCCC\n").unwrap();
        let unique = deduplicate(records);

        assert_eq!(unique.len(), 1);
        assert_eq!(unique[0].description(), "x sample one");
    }

    #[test]
    fn test_sequence_match_is_exact() {
        let records = parse_fasta_text(">a\nACGT\n>b\nacgt\n>c\nACG\n").unwrap();
        assert_eq!(deduplicate(records).len(), 3);
    }

    #[test]
    fn test_idempotent_and_unique() {
        let records = parse_fasta_text(
            ">a\nAC\n>b\nGT\n>a\nTT\n>c\nGT\n>d\n>e\n>f\nAC\n>g\nCC\n",
        )
        .unwrap();

        let once = deduplicate(records);
        let twice = deduplicate(once.clone());
        assert_eq!(once, twice);

        let ids: Vec<&str> = once.iter().map(Record::id).collect();
        assert_eq!(ids, vec!["a", "b", "d", "g"]);

        let id_set: HashSet<&str> = once.iter().map(Record::id).collect();
        let seq_set: HashSet<&str> = once.iter().map(Record::sequence).collect();
        assert_eq!(id_set.len(), once.len());
        assert_eq!(seq_set.len(), once.len());
    }

    #[test]
    fn test_dropped_records_do_not_mark_seen() {
        // The second `b` is only a duplicate if the dropped `b AAA` counted
        let records = parse_fasta_text(">a\nAAA\n>b\nAAA\n>b\nCCC\n").unwrap();
        let unique = deduplicate(records);

        let kept: Vec<(&str, &str)> = unique.iter().map(|r| (r.id(), r.sequence())).collect();
        assert_eq!(kept, vec![("a", "AAA"), ("b", "CCC")]);
    }

    #[test]
    fn test_empty_input() {
        assert!(deduplicate(Vec::new()).is_empty());
    }
}
