//! Review workflow: the pending → approved / needs-improvement transition
//! and the local side store that holds review state.
//!
//! Review status lives canonically here, not on the record row: a letter
//! with no entry in the log is pending. Writing a new decision for the same
//! letter overwrites the previous one (last write wins).

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;

use crate::error::{KhitabError, Result};
use crate::model::{ReviewRecord, ReviewStatus};

const REVIEWS_FILENAME: &str = "reviews.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewAction {
    Approve,
    NeedsImprovement,
}

/// Apply a review transition, enforcing its guards:
/// approval needs a reviewer; needs-improvement additionally needs notes.
pub fn transition(
    letter_id: &str,
    action: ReviewAction,
    reviewer: &str,
    notes: &str,
) -> Result<ReviewRecord> {
    if reviewer.trim().is_empty() {
        return Err(KhitabError::Api("Reviewer name is required".to_string()));
    }
    if action == ReviewAction::NeedsImprovement && notes.trim().is_empty() {
        return Err(KhitabError::Api(
            "Notes are required when requesting improvements".to_string(),
        ));
    }

    let status = match action {
        ReviewAction::Approve => ReviewStatus::Approved,
        ReviewAction::NeedsImprovement => ReviewStatus::NeedsImprovement,
    };

    Ok(ReviewRecord {
        letter_id: letter_id.to_string(),
        status,
        reviewer: reviewer.trim().to_string(),
        notes: notes.trim().to_string(),
        review_date: Utc::now().to_rfc3339(),
    })
}

/// JSON side store mapping letter id → latest [`ReviewRecord`].
pub struct ReviewLog {
    dir: PathBuf,
}

impl ReviewLog {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    /// Record a decision, overwriting any prior one for the same letter.
    pub fn record(&self, review: &ReviewRecord) -> Result<()> {
        let mut reviews = self.load_map()?;
        reviews.insert(review.letter_id.clone(), review.clone());
        self.save_map(&reviews)
    }

    pub fn get(&self, letter_id: &str) -> Result<Option<ReviewRecord>> {
        Ok(self.load_map()?.remove(letter_id))
    }

    /// The effective status of a letter: pending when no decision exists.
    pub fn status_of(&self, letter_id: &str) -> Result<ReviewStatus> {
        Ok(self
            .get(letter_id)?
            .map(|review| review.status)
            .unwrap_or(ReviewStatus::Pending))
    }

    /// Drop a letter's review entry, if any. Called when the letter itself
    /// is deleted.
    pub fn remove(&self, letter_id: &str) -> Result<()> {
        let mut reviews = self.load_map()?;
        if reviews.remove(letter_id).is_some() {
            self.save_map(&reviews)?;
        }
        Ok(())
    }

    fn reviews_path(&self) -> PathBuf {
        self.dir.join(REVIEWS_FILENAME)
    }

    fn load_map(&self) -> Result<HashMap<String, ReviewRecord>> {
        let path = self.reviews_path();
        if !path.exists() {
            return Ok(HashMap::new());
        }
        let content = fs::read_to_string(path).map_err(KhitabError::Io)?;
        let reviews: HashMap<String, ReviewRecord> =
            serde_json::from_str(&content).map_err(KhitabError::Serialization)?;
        Ok(reviews)
    }

    fn save_map(&self, reviews: &HashMap<String, ReviewRecord>) -> Result<()> {
        if !self.dir.exists() {
            fs::create_dir_all(&self.dir).map_err(KhitabError::Io)?;
        }
        let content = serde_json::to_string_pretty(reviews).map_err(KhitabError::Serialization)?;
        fs::write(self.reviews_path(), content).map_err(KhitabError::Io)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn approve_requires_a_reviewer() {
        for reviewer in ["", " ", "\t"] {
            let err = transition("LTR-1-AAAAA", ReviewAction::Approve, reviewer, "");
            assert!(err.is_err(), "reviewer {:?} should be rejected", reviewer);
        }
        let review = transition("LTR-1-AAAAA", ReviewAction::Approve, "سارة", "").unwrap();
        assert_eq!(review.status, ReviewStatus::Approved);
        assert_eq!(review.reviewer, "سارة");
    }

    #[test]
    fn needs_improvement_additionally_requires_notes() {
        let err = transition("LTR-1-AAAAA", ReviewAction::NeedsImprovement, "سارة", "  ");
        assert!(err.is_err());

        let review = transition(
            "LTR-1-AAAAA",
            ReviewAction::NeedsImprovement,
            "سارة",
            "الافتتاحية ضعيفة",
        )
        .unwrap();
        assert_eq!(review.status, ReviewStatus::NeedsImprovement);
        assert_eq!(review.notes, "الافتتاحية ضعيفة");
    }

    #[test]
    fn log_round_trips_and_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let log = ReviewLog::new(dir.path());

        assert_eq!(log.status_of("LTR-1-AAAAA").unwrap(), ReviewStatus::Pending);

        let approved = transition("LTR-1-AAAAA", ReviewAction::Approve, "سارة", "").unwrap();
        log.record(&approved).unwrap();
        assert_eq!(log.status_of("LTR-1-AAAAA").unwrap(), ReviewStatus::Approved);

        // A later decision overwrites the earlier one.
        let redone = transition(
            "LTR-1-AAAAA",
            ReviewAction::NeedsImprovement,
            "خالد",
            "يحتاج تفاصيل",
        )
        .unwrap();
        log.record(&redone).unwrap();
        let stored = log.get("LTR-1-AAAAA").unwrap().unwrap();
        assert_eq!(stored.status, ReviewStatus::NeedsImprovement);
        assert_eq!(stored.reviewer, "خالد");
    }

    #[test]
    fn remove_clears_the_entry() {
        let dir = tempfile::tempdir().unwrap();
        let log = ReviewLog::new(dir.path());

        let review = transition("LTR-1-AAAAA", ReviewAction::Approve, "سارة", "").unwrap();
        log.record(&review).unwrap();
        log.remove("LTR-1-AAAAA").unwrap();
        assert!(log.get("LTR-1-AAAAA").unwrap().is_none());

        // Removing an absent entry is a no-op.
        log.remove("LTR-2-BBBBB").unwrap();
    }
}
