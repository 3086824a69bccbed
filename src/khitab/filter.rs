//! Records table filtering.
//!
//! A [`RecordRow`] is a record with its workflow badges already resolved,
//! which is what both the table renderer and the filters operate on, so a
//! filter always matches exactly what is displayed.

use crate::model::{letter_type_to_arabic, LetterRecord, ReviewRecord, ReviewStatus, SendStatus};

/// A record ready for display: the stored row plus reconciled workflow state.
#[derive(Debug, Clone)]
pub struct RecordRow {
    pub record: LetterRecord,
    pub review: Option<ReviewRecord>,
    pub send_status: SendStatus,
}

impl RecordRow {
    pub fn new(record: LetterRecord, review: Option<ReviewRecord>) -> Self {
        Self {
            record,
            review,
            send_status: SendStatus::default(),
        }
    }

    pub fn review_status(&self) -> ReviewStatus {
        self.review
            .as_ref()
            .map(|review| review.status)
            .unwrap_or(ReviewStatus::Pending)
    }

    /// The Arabic display form of the stored (English) letter type.
    pub fn display_type(&self) -> &str {
        letter_type_to_arabic(&self.record.letter_type)
    }
}

/// Conjunction of the active table filters; an unset filter always matches.
#[derive(Debug, Clone, Default)]
pub struct RecordFilter {
    /// Case-insensitive substring match against id and recipient.
    pub search: Option<String>,
    /// Exact match against the Arabic display type.
    pub letter_type: Option<String>,
    /// Exact match against the review badge label.
    pub review_status: Option<String>,
    /// Exact match against the send badge label.
    pub send_status: Option<String>,
}

impl RecordFilter {
    pub fn is_empty(&self) -> bool {
        self.search.is_none()
            && self.letter_type.is_none()
            && self.review_status.is_none()
            && self.send_status.is_none()
    }

    pub fn matches(&self, row: &RecordRow) -> bool {
        self.matches_search(row)
            && self.matches_exact(self.letter_type.as_deref(), row.display_type())
            && self.matches_exact(self.review_status.as_deref(), row.review_status().label())
            && self.matches_exact(self.send_status.as_deref(), row.send_status.label())
    }

    fn matches_search(&self, row: &RecordRow) -> bool {
        match self.search.as_deref() {
            None | Some("") => true,
            Some(term) => {
                let term = term.to_lowercase();
                row.record.id.to_lowercase().contains(&term)
                    || row.record.recipient.to_lowercase().contains(&term)
            }
        }
    }

    fn matches_exact(&self, filter: Option<&str>, value: &str) -> bool {
        match filter {
            None | Some("") => true,
            Some(expected) => expected == value,
        }
    }
}
