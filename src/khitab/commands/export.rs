use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::service::LetterService;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportKind {
    /// The PDF download endpoint.
    Download,
    /// The print view.
    Print,
}

/// Emit the navigable URL for a letter's PDF or print view. The URL is
/// opened by the user, not fetched here.
pub fn run(service: &LetterService, id: &str, kind: ExportKind) -> Result<CmdResult> {
    let (url, label) = match kind {
        ExportKind::Download => (service.download_url(id), "download"),
        ExportKind::Print => (service.print_url(id), "print"),
    };

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info(format!("Open to {} the letter:", label)));
    Ok(result.with_urls(vec![url]))
}
