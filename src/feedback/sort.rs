use crate::feedback::FeedbackRecord;

/// Presentation order for the feedback list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Newest,
    Oldest,
    Rating,
}

impl SortOrder {
    pub const ALL: [SortOrder; 3] = [SortOrder::Newest, SortOrder::Oldest, SortOrder::Rating];

    /// Value attribute used by the sort dropdown.
    pub fn value(&self) -> &'static str {
        match self {
            SortOrder::Newest => "newest",
            SortOrder::Oldest => "oldest",
            SortOrder::Rating => "rating",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortOrder::Newest => "Newest First",
            SortOrder::Oldest => "Oldest First",
            SortOrder::Rating => "Highest Rated",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        SortOrder::ALL.iter().copied().find(|o| o.value() == value)
    }
}

/// Reorder a snapshot of the records for display. The input is never
/// mutated; other consumers (statistics) keep seeing storage order.
///
/// Each criterion is a single-key stable sort, so records that tie on the
/// key keep their original relative order.
pub fn sorted(records: &[FeedbackRecord], order: SortOrder) -> Vec<FeedbackRecord> {
    let mut snapshot = records.to_vec();
    match order {
        SortOrder::Newest => {
            snapshot.sort_by(|a, b| b.timestamp_ms.total_cmp(&a.timestamp_ms));
        }
        SortOrder::Oldest => {
            snapshot.sort_by(|a, b| a.timestamp_ms.total_cmp(&b.timestamp_ms));
        }
        SortOrder::Rating => {
            // None (unrated) orders below every rated record.
            snapshot.sort_by(|a, b| b.rating.cmp(&a.rating));
        }
    }
    snapshot
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feedback::{Category, Sentiment};

    fn record(id: &str, rating: Option<u8>, timestamp_ms: f64) -> FeedbackRecord {
        FeedbackRecord {
            id: id.to_string(),
            rating,
            sentiment: Sentiment::Neutral,
            message: "msg".to_string(),
            category: Category::GeneralFeedback,
            timestamp_ms,
            user_name: None,
        }
    }

    fn ids(records: &[FeedbackRecord]) -> Vec<&str> {
        records.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn test_sort_order_value_roundtrip() {
        for order in SortOrder::ALL {
            assert_eq!(SortOrder::from_value(order.value()), Some(order));
        }
        assert_eq!(SortOrder::from_value("bogus"), None);
    }

    #[test]
    fn test_newest_first() {
        let records = vec![
            record("a", None, 1000.0),
            record("b", None, 3000.0),
            record("c", None, 2000.0),
        ];
        let result = sorted(&records, SortOrder::Newest);
        assert_eq!(ids(&result), vec!["b", "c", "a"]);
    }

    #[test]
    fn test_oldest_first() {
        let records = vec![
            record("a", None, 1000.0),
            record("b", None, 3000.0),
            record("c", None, 2000.0),
        ];
        let result = sorted(&records, SortOrder::Oldest);
        assert_eq!(ids(&result), vec!["a", "c", "b"]);
    }

    #[test]
    fn test_highest_rated_first() {
        let records = vec![
            record("a", Some(2), 1000.0),
            record("b", None, 2000.0),
            record("c", Some(5), 3000.0),
        ];
        let result = sorted(&records, SortOrder::Rating);
        assert_eq!(ids(&result), vec!["c", "a", "b"]);
    }

    #[test]
    fn test_distinct_timestamps_reverse() {
        let records = vec![
            record("a", None, 1000.0),
            record("b", None, 2000.0),
            record("c", None, 3000.0),
        ];
        let newest = sorted(&records, SortOrder::Newest);
        let oldest = sorted(&records, SortOrder::Oldest);

        let reversed: Vec<&str> = ids(&newest).into_iter().rev().collect();
        assert_eq!(ids(&oldest), reversed);
    }

    #[test]
    fn test_tied_keys_keep_input_order() {
        let records = vec![
            record("a", Some(3), 1000.0),
            record("b", Some(3), 1000.0),
            record("c", Some(3), 1000.0),
        ];
        // All keys tie, so every criterion must reproduce the input order.
        for order in SortOrder::ALL {
            assert_eq!(ids(&sorted(&records, order)), vec!["a", "b", "c"]);
        }
    }

    #[test]
    fn test_input_is_untouched() {
        let records = vec![record("a", Some(1), 2000.0), record("b", Some(5), 1000.0)];
        let before = records.clone();
        let _ = sorted(&records, SortOrder::Rating);
        assert_eq!(records, before);
    }

    #[test]
    fn test_sorting_empty_is_empty() {
        for order in SortOrder::ALL {
            assert!(sorted(&[], order).is_empty());
        }
    }
}
