//! # API Facade
//!
//! The single entry point for all khitab operations, regardless of the UI
//! driving it. The facade dispatches to the command layer and returns
//! structured `Result<CmdResult>` values; it never prints, never exits, and
//! never assumes a terminal.
//!
//! `KhitabApi<S: RecordStore>` is generic over the storage backend:
//! production wires in `SheetsStore`, tests wire in `InMemoryStore`.

use crate::commands;
use crate::error::Result;
use crate::filter::RecordFilter;
use crate::model::LetterRequest;
use crate::review::{ReviewAction, ReviewLog};
use crate::service::LetterService;
use crate::store::RecordStore;
use crate::template::Tone;
use crate::theme::Theme;

pub struct KhitabApi<S: RecordStore> {
    store: S,
    service: LetterService,
    reviews: ReviewLog,
    paths: commands::KhitabPaths,
}

impl<S: RecordStore> KhitabApi<S> {
    pub fn new(
        store: S,
        service: LetterService,
        reviews: ReviewLog,
        paths: commands::KhitabPaths,
    ) -> Self {
        Self {
            store,
            service,
            reviews,
            paths,
        }
    }

    pub fn draft(
        &mut self,
        request: &LetterRequest,
        tone: Tone,
        save_with_template: Option<&str>,
    ) -> Result<commands::CmdResult> {
        commands::draft::run(
            &mut self.store,
            &self.service,
            request,
            tone,
            save_with_template,
        )
    }

    pub fn list_records(&self, filter: &RecordFilter) -> Result<commands::CmdResult> {
        commands::list::run(&self.store, &self.reviews, filter)
    }

    pub fn show_letter(&self, id: &str) -> Result<commands::CmdResult> {
        commands::show::run(&self.store, &self.service, &self.reviews, id)
    }

    pub fn review_letter(
        &self,
        id: &str,
        action: ReviewAction,
        reviewer: &str,
        notes: &str,
    ) -> Result<commands::CmdResult> {
        commands::review::run(&self.reviews, id, action, reviewer, notes)
    }

    pub fn delete_record(&mut self, id: &str) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, &self.reviews, id)
    }

    pub fn export_letter(&self, id: &str, kind: commands::export::ExportKind) -> Result<commands::CmdResult> {
        commands::export::run(&self.service, id, kind)
    }

    pub fn options(&self) -> Result<commands::CmdResult> {
        commands::options::run(&self.store)
    }

    pub fn config(&self, action: commands::config::ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, action)
    }

    pub fn theme(&self, set: Option<Theme>) -> Result<commands::CmdResult> {
        commands::theme::run(&self.paths, set)
    }

    pub fn paths(&self) -> &commands::KhitabPaths {
        &self.paths
    }
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::export::ExportKind;
pub use crate::commands::{CmdMessage, CmdResult, KhitabPaths, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    fn api(dir: &std::path::Path) -> KhitabApi<InMemoryStore> {
        KhitabApi::new(
            InMemoryStore::new(),
            LetterService::new("http://127.0.0.1:9".into()),
            ReviewLog::new(dir),
            KhitabPaths {
                data_dir: dir.to_path_buf(),
            },
        )
    }

    fn leave_request() -> LetterRequest {
        LetterRequest {
            letter_type: "جديد".into(),
            letter_category: "طلب".into(),
            letter_purpose: "اجتماع".into(),
            first_correspondence: "نعم".into(),
            recipient: "الإدارة".into(),
            subject: "طلب اجازة".into(),
            content: "أرجو الموافقة".into(),
        }
    }

    #[test]
    fn draft_save_review_delete_flow() {
        let dir = tempfile::tempdir().unwrap();
        let mut api = api(dir.path());

        let saved = api
            .draft(&leave_request(), Tone::Formal, Some("قالب رسمي"))
            .unwrap();
        let id = saved.record_id.unwrap();

        let listed = api.list_records(&RecordFilter::default()).unwrap();
        assert_eq!(listed.rows.len(), 1);

        api.review_letter(&id, ReviewAction::Approve, "سارة", "")
            .unwrap();
        let shown = api.show_letter(&id).unwrap();
        assert_eq!(
            shown.rows[0].review_status(),
            crate::model::ReviewStatus::Approved
        );

        api.delete_record(&id).unwrap();
        let listed = api.list_records(&RecordFilter::default()).unwrap();
        assert!(listed.rows.is_empty());
    }
}
