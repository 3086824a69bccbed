use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::review::{transition, ReviewAction, ReviewLog};

/// Apply a review decision and persist it in the review log. The guards
/// live in the state machine; an invalid transition never reaches the log.
pub fn run(
    reviews: &ReviewLog,
    letter_id: &str,
    action: ReviewAction,
    reviewer: &str,
    notes: &str,
) -> Result<CmdResult> {
    let review = transition(letter_id, action, reviewer, notes)?;
    reviews.record(&review)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Review status updated: {}",
        review.status
    )));
    Ok(result.with_review(review))
}
