use crate::commands::CmdResult;
use crate::error::Result;
use crate::filter::{RecordFilter, RecordRow};
use crate::review::ReviewLog;
use crate::store::RecordStore;

/// List records newest first, reconcile each row's badges from the review
/// log, then apply the table filters.
pub fn run<S: RecordStore>(
    store: &S,
    reviews: &ReviewLog,
    filter: &RecordFilter,
) -> Result<CmdResult> {
    let records = store.list()?;

    let mut rows = Vec::with_capacity(records.len());
    for record in records {
        let review = reviews.get(&record.id)?;
        rows.push(RecordRow::new(record, review));
    }

    let rows = rows.into_iter().filter(|row| filter.matches(row)).collect();
    Ok(CmdResult::default().with_rows(rows))
}
