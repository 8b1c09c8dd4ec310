use crate::feedback::{FeedbackRecord, Sentiment};

/// Summary numbers shown above the feedback list. Recomputed from the full
/// record set on every render; nothing is cached.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedbackStats {
    pub count: usize,
    /// Mean rating, None when there are no records (the "no data" state).
    pub average_rating: Option<f64>,
    pub positive_count: usize,
}

impl FeedbackStats {
    pub fn from_records(records: &[FeedbackRecord]) -> Self {
        let count = records.len();
        let average_rating = if count == 0 {
            None
        } else {
            // Unrated entries count as zero stars, matching the display sum.
            let sum: f64 = records
                .iter()
                .map(|r| f64::from(r.rating.unwrap_or(0)))
                .sum();
            Some(sum / count as f64)
        };
        let positive_count = records
            .iter()
            .filter(|r| r.sentiment == Sentiment::Positive)
            .count();

        Self {
            count,
            average_rating,
            positive_count,
        }
    }

    /// Average rendered to one decimal place, e.g. "4.0".
    pub fn average_label(&self) -> Option<String> {
        self.average_rating.map(|avg| format!("{:.1}", avg))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feedback::{Category, FeedbackDraft, FeedbackLog};

    fn log_with_ratings(ratings: &[Option<u8>]) -> FeedbackLog {
        let mut log = FeedbackLog::new();
        for (i, rating) in ratings.iter().enumerate() {
            let draft = FeedbackDraft {
                rating: *rating,
                sentiment: rating.map(Sentiment::from_rating).unwrap_or_default(),
                message: format!("entry {}", i),
                category: Some(Category::GeneralFeedback),
                user_name: None,
            };
            log.submit(draft, 1000.0 + i as f64).unwrap();
        }
        log
    }

    #[test]
    fn test_average_of_five_and_three() {
        let log = log_with_ratings(&[Some(5), Some(3)]);
        let stats = FeedbackStats::from_records(log.records());

        assert_eq!(stats.count, 2);
        assert_eq!(stats.average_rating, Some(4.0));
        assert_eq!(stats.average_label().as_deref(), Some("4.0"));
    }

    #[test]
    fn test_empty_set_has_no_average() {
        let stats = FeedbackStats::from_records(&[]);
        assert_eq!(stats.count, 0);
        assert_eq!(stats.average_rating, None);
        assert_eq!(stats.average_label(), None);
        assert_eq!(stats.positive_count, 0);
    }

    #[test]
    fn test_positive_count() {
        let log = log_with_ratings(&[Some(5), Some(4), Some(3), Some(1)]);
        let stats = FeedbackStats::from_records(log.records());
        assert_eq!(stats.positive_count, 2);
    }

    #[test]
    fn test_unrated_counts_as_zero() {
        let log = log_with_ratings(&[Some(4), None]);
        let stats = FeedbackStats::from_records(log.records());
        assert_eq!(stats.count, 2);
        assert_eq!(stats.average_rating, Some(2.0));
    }

    #[test]
    fn test_stats_after_clear() {
        let mut log = log_with_ratings(&[Some(5), Some(3)]);
        log.clear_all();

        let stats = FeedbackStats::from_records(log.records());
        assert_eq!(stats.count, 0);
        assert_eq!(stats.average_rating, None);
    }
}
