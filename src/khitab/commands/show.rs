use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::filter::RecordRow;
use crate::review::ReviewLog;
use crate::service::LetterService;
use crate::store::RecordStore;

/// Load one letter for review: the stored record when it exists, otherwise
/// the remote fetch-by-id path (which itself degrades to placeholder
/// content).
pub fn run<S: RecordStore>(
    store: &S,
    service: &LetterService,
    reviews: &ReviewLog,
    id: &str,
) -> Result<CmdResult> {
    if let Some(record) = store.find(id)? {
        let review = reviews.get(id)?;
        let row = RecordRow::new(record, review);
        return Ok(CmdResult::default().with_rows(vec![row]));
    }

    let outcome = service.fetch_letter(id);
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::warning(format!(
        "Record {} is not in the store; showing the service copy.",
        id
    )));
    if outcome.is_degraded() {
        result.add_message(CmdMessage::info(
            "Letter service unreachable; content is a placeholder.",
        ));
    }
    Ok(result.with_letter(outcome.into_value().content))
}
