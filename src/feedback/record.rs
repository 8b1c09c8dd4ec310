use serde::{Deserialize, Serialize};

/// Tone classification for a feedback entry. Derived from the rating by
/// default, but the user can override it before submitting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    #[default]
    Neutral,
}

impl Sentiment {
    /// Rating of 4-5 reads as positive, 1-2 as negative, 3 as neutral.
    pub fn from_rating(rating: u8) -> Self {
        if rating >= 4 {
            Sentiment::Positive
        } else if rating <= 2 {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Negative => "Negative",
            Sentiment::Neutral => "Neutral",
        }
    }
}

/// Closed set of feedback categories offered by the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    ProductQuality,
    CustomerService,
    WebsiteExperience,
    DeliveryPricing,
    FeatureRequest,
    BugReport,
    GeneralFeedback,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::ProductQuality,
        Category::CustomerService,
        Category::WebsiteExperience,
        Category::DeliveryPricing,
        Category::FeatureRequest,
        Category::BugReport,
        Category::GeneralFeedback,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::ProductQuality => "Product Quality",
            Category::CustomerService => "Customer Service",
            Category::WebsiteExperience => "Website Experience",
            Category::DeliveryPricing => "Delivery/Pricing",
            Category::FeatureRequest => "Feature Request",
            Category::BugReport => "Bug Report",
            Category::GeneralFeedback => "General Feedback",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Category::ALL.iter().copied().find(|c| c.label() == label)
    }
}

/// A single submitted feedback entry. Immutable once stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackRecord {
    /// Unique identifier, assigned by the store at submission time.
    pub id: String,
    /// Star rating 1-5; None means the user never rated.
    pub rating: Option<u8>,
    pub sentiment: Sentiment,
    pub message: String,
    pub category: Category,
    /// Submission time, milliseconds since the Unix epoch.
    pub timestamp_ms: f64,
    /// Optional display name of the submitter.
    pub user_name: Option<String>,
}

/// Form output handed to the store; id and timestamp are assigned on accept.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeedbackDraft {
    pub rating: Option<u8>,
    pub sentiment: Sentiment,
    pub message: String,
    pub category: Option<Category>,
    pub user_name: Option<String>,
}

/// Why a draft was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitError {
    EmptyMessage,
    MissingCategory,
}

impl std::fmt::Display for SubmitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubmitError::EmptyMessage => write!(f, "message is empty"),
            SubmitError::MissingCategory => write!(f, "no category selected"),
        }
    }
}

/// In-memory store of feedback records, newest first.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedbackLog {
    records: Vec<FeedbackRecord>,
    /// ID counter; raw timestamps could collide on fast repeat submissions.
    next_id: u64,
}

impl Default for FeedbackLog {
    fn default() -> Self {
        Self::new()
    }
}

impl FeedbackLog {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            next_id: 1,
        }
    }

    /// Seed the store with the demo entries shown on first load.
    pub fn with_samples(now_ms: f64) -> Self {
        const DAY_MS: f64 = 86_400_000.0;
        let mut log = Self::new();
        log.push_record(
            Some(5),
            Sentiment::Positive,
            "This feedback system is amazing! Very intuitive and easy to use. \
             The design is clean and the submission process is smooth.",
            Category::WebsiteExperience,
            now_ms - DAY_MS,
        );
        log.push_record(
            Some(3),
            Sentiment::Neutral,
            "The interface is okay, but I think it could use some improvements. \
             Loading times seem a bit slow sometimes.",
            Category::WebsiteExperience,
            now_ms - 2.0 * DAY_MS,
        );
        log
    }

    /// Validate a draft and prepend it as a new record.
    ///
    /// Rejections leave the store untouched: a blank or whitespace-only
    /// message is `EmptyMessage`, an unset category is `MissingCategory`.
    pub fn submit(
        &mut self,
        draft: FeedbackDraft,
        timestamp_ms: f64,
    ) -> Result<&FeedbackRecord, SubmitError> {
        if draft.message.trim().is_empty() {
            return Err(SubmitError::EmptyMessage);
        }
        let category = draft.category.ok_or(SubmitError::MissingCategory)?;

        let record = FeedbackRecord {
            id: self.next_id.to_string(),
            rating: draft.rating.map(|r| r.clamp(1, 5)),
            sentiment: draft.sentiment,
            message: draft.message,
            category,
            timestamp_ms,
            user_name: draft.user_name,
        };
        self.next_id += 1;
        self.records.insert(0, record);
        Ok(&self.records[0])
    }

    /// Drop every record. No confirmation, no undo.
    pub fn clear_all(&mut self) {
        self.records.clear();
    }

    pub fn records(&self) -> &[FeedbackRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn push_record(
        &mut self,
        rating: Option<u8>,
        sentiment: Sentiment,
        message: &str,
        category: Category,
        timestamp_ms: f64,
    ) {
        let record = FeedbackRecord {
            id: self.next_id.to_string(),
            rating,
            sentiment,
            message: message.to_string(),
            category,
            timestamp_ms,
            user_name: None,
        };
        self.next_id += 1;
        self.records.push(record);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_draft() -> FeedbackDraft {
        FeedbackDraft {
            rating: Some(4),
            sentiment: Sentiment::Positive,
            message: "Great experience overall".to_string(),
            category: Some(Category::ProductQuality),
            user_name: None,
        }
    }

    #[test]
    fn test_sentiment_from_rating() {
        assert_eq!(Sentiment::from_rating(5), Sentiment::Positive);
        assert_eq!(Sentiment::from_rating(4), Sentiment::Positive);
        assert_eq!(Sentiment::from_rating(3), Sentiment::Neutral);
        assert_eq!(Sentiment::from_rating(2), Sentiment::Negative);
        assert_eq!(Sentiment::from_rating(1), Sentiment::Negative);
    }

    #[test]
    fn test_category_label_parse() {
        for category in Category::ALL {
            assert_eq!(Category::from_label(category.label()), Some(category));
        }
        assert_eq!(Category::from_label("Select a category"), None);
        assert_eq!(Category::from_label(""), None);
    }

    #[test]
    fn test_submit_valid_draft() {
        let mut log = FeedbackLog::new();
        let record = log.submit(sample_draft(), 1000.0).unwrap();

        assert_eq!(record.id, "1");
        assert_eq!(record.rating, Some(4));
        assert_eq!(record.timestamp_ms, 1000.0);
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn test_submit_prepends() {
        let mut log = FeedbackLog::new();
        log.submit(sample_draft(), 1000.0).unwrap();

        let mut second = sample_draft();
        second.message = "Second entry".to_string();
        log.submit(second, 2000.0).unwrap();

        assert_eq!(log.len(), 2);
        assert_eq!(log.records()[0].message, "Second entry");
        assert_ne!(log.records()[0].id, log.records()[1].id);
    }

    #[test]
    fn test_submit_rejects_empty_message() {
        let mut log = FeedbackLog::new();
        let mut draft = sample_draft();
        draft.message = String::new();
        assert_eq!(log.submit(draft, 1000.0), Err(SubmitError::EmptyMessage));

        let mut draft = sample_draft();
        draft.message = "   \n\t ".to_string();
        assert_eq!(log.submit(draft, 1000.0), Err(SubmitError::EmptyMessage));
        assert!(log.is_empty());
    }

    #[test]
    fn test_submit_rejects_missing_category() {
        let mut log = FeedbackLog::new();
        let mut draft = sample_draft();
        draft.category = None;
        assert_eq!(log.submit(draft, 1000.0), Err(SubmitError::MissingCategory));
        assert!(log.is_empty());
    }

    #[test]
    fn test_submit_clamps_rating() {
        let mut log = FeedbackLog::new();
        let mut draft = sample_draft();
        draft.rating = Some(9);
        let record = log.submit(draft, 1000.0).unwrap();
        assert_eq!(record.rating, Some(5));
    }

    #[test]
    fn test_clear_all() {
        let mut log = FeedbackLog::with_samples(1_000_000.0);
        assert_eq!(log.len(), 2);

        log.clear_all();
        assert!(log.is_empty());

        // Store still accepts new submissions after a clear.
        log.submit(sample_draft(), 2_000_000.0).unwrap();
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn test_with_samples_seed() {
        let log = FeedbackLog::with_samples(1_000_000_000.0);
        assert_eq!(log.len(), 2);
        assert_eq!(log.records()[0].rating, Some(5));
        assert_eq!(log.records()[1].sentiment, Sentiment::Neutral);
        assert!(log.records()[0].timestamp_ms > log.records()[1].timestamp_ms);
    }
}
