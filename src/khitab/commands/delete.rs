use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::review::ReviewLog;
use crate::store::RecordStore;

/// Delete a record by id and drop its review-log entry with it.
pub fn run<S: RecordStore>(store: &mut S, reviews: &ReviewLog, id: &str) -> Result<CmdResult> {
    store.delete(id)?;
    reviews.remove(id)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Record deleted: {}", id)));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::KhitabError;
    use crate::review::{transition, ReviewAction};
    use crate::store::memory::fixtures::store_with_records;

    #[test]
    fn deletes_the_record_and_its_review() {
        let mut store = store_with_records(&["الأول", "الثاني"]);
        let dir = tempfile::tempdir().unwrap();
        let log = ReviewLog::new(dir.path());

        let id = store.list().unwrap()[0].id.clone();
        log.record(&transition(&id, ReviewAction::Approve, "سارة", "").unwrap())
            .unwrap();

        run(&mut store, &log, &id).unwrap();
        assert_eq!(store.list().unwrap().len(), 1);
        assert!(log.get(&id).unwrap().is_none());
    }

    #[test]
    fn missing_ids_are_reported() {
        let mut store = store_with_records(&["الأول"]);
        let dir = tempfile::tempdir().unwrap();
        let log = ReviewLog::new(dir.path());

        let err = run(&mut store, &log, "LTR-0-XXXXX").unwrap_err();
        assert!(matches!(err, KhitabError::RecordNotFound(_)));
        assert_eq!(store.list().unwrap().len(), 1);
    }
}
