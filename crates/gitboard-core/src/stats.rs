use gitboard_git::StatusRecord;

use crate::model::ChangeCounts;

/// Reduce a provider's status records to the four dashboard counters.
///
/// Each recognised flag increments its own counter, so a record that is both
/// renamed and modified counts once in each category. A record with no
/// recognised flag is counted as unclassified.
pub fn aggregate(records: &[StatusRecord]) -> ChangeCounts {
    let mut counts = ChangeCounts::default();

    for record in records {
        let flags = record.flags;
        if flags.is_empty() {
            counts.unclassified += 1;
            continue;
        }
        if flags.new {
            counts.added += 1;
        }
        if flags.deleted {
            counts.removed += 1;
        }
        if flags.modified {
            counts.edited += 1;
        }
        if flags.renamed {
            counts.renamed += 1;
        }
    }

    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use gitboard_git::ChangeFlags;

    #[test]
    fn test_aggregate_empty_is_clean() {
        let counts = aggregate(&[]);
        assert_eq!(counts, ChangeCounts::default());
        assert!(counts.is_clean());
    }

    #[test]
    fn test_aggregate_one_per_category() {
        let records = vec![
            StatusRecord::new("a.txt", ChangeFlags::NEW),
            StatusRecord::new("b.txt", ChangeFlags::NEW),
            StatusRecord::new("c.txt", ChangeFlags::MODIFIED),
            StatusRecord::new("d.txt", ChangeFlags::DELETED),
            StatusRecord::new("e.txt", ChangeFlags::RENAMED),
        ];

        let counts = aggregate(&records);
        assert_eq!(counts.added, 2);
        assert_eq!(counts.edited, 1);
        assert_eq!(counts.removed, 1);
        assert_eq!(counts.renamed, 1);
    }

    #[test]
    fn test_aggregate_overlapping_flags_count_independently() {
        let records = vec![StatusRecord::new(
            "moved.rs",
            ChangeFlags::RENAMED.union(ChangeFlags::MODIFIED),
        )];

        let counts = aggregate(&records);
        assert_eq!(counts.renamed, 1);
        assert_eq!(counts.edited, 1);
        // Totals may exceed the number of distinct paths.
        assert_eq!(counts.total(), 2);
    }

    #[test]
    fn test_aggregate_is_idempotent() {
        let records = vec![
            StatusRecord::new("a", ChangeFlags::NEW),
            StatusRecord::new("b", ChangeFlags::DELETED),
        ];

        assert_eq!(aggregate(&records), aggregate(&records));
    }

    #[test]
    fn test_aggregate_flagless_record_is_unclassified() {
        let records = vec![StatusRecord::new("link", ChangeFlags::default())];

        let counts = aggregate(&records);
        assert_eq!(counts.total(), 0);
        assert_eq!(counts.unclassified, 1);
        assert!(!counts.is_clean());
    }
}
