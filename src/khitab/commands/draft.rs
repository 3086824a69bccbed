use crate::commands::{CmdMessage, CmdResult};
use crate::error::{KhitabError, Result};
use crate::model::{letter_type_to_english, today_arabic, LetterRecord, LetterRequest};
use crate::service::{LetterService, PdfRequest};
use crate::store::RecordStore;
use crate::template::Tone;

/// Generate a letter and, when a template is chosen, save it: PDF creation
/// assigns the letter id, then the record is appended to the store.
pub fn run<S: RecordStore>(
    store: &mut S,
    service: &LetterService,
    request: &LetterRequest,
    tone: Tone,
    save_with_template: Option<&str>,
) -> Result<CmdResult> {
    if !request.validate() {
        return Err(KhitabError::Api(
            "All seven letter fields are required".to_string(),
        ));
    }

    let outcome = service.generate(request, tone);
    let mut result = CmdResult::default();
    if outcome.is_degraded() {
        result.add_message(CmdMessage::info(
            "Letter service unreachable; generated with the local template.",
        ));
    }
    let letter = outcome.into_value().generated_text;

    let Some(template) = save_with_template else {
        return Ok(result.with_letter(letter));
    };
    if template.trim().is_empty() {
        return Err(KhitabError::Api(
            "A template must be chosen to save the letter".to_string(),
        ));
    }

    let receipt = service.create_pdf(&PdfRequest {
        content: letter.clone(),
        template: template.to_string(),
        request: request.clone(),
    });
    if receipt.is_degraded() {
        result.add_message(CmdMessage::info(
            "PDF service unreachable; assigned a local letter id.",
        ));
    }
    let receipt = receipt.into_value();

    let record = LetterRecord {
        id: receipt.letter_id.clone(),
        date: today_arabic(),
        subject: request.subject.clone(),
        letter_type: letter_type_to_english(&request.letter_type).to_string(),
        recipient: request.recipient.clone(),
        template: template.to_string(),
        content: letter.clone(),
        category: request.letter_category.clone(),
        purpose: request.letter_purpose.clone(),
        first_correspondence: request.first_correspondence.clone(),
    };
    store.append(&record)?;

    result.add_message(CmdMessage::success(format!("Letter saved: {}", record.id)));
    Ok(result.with_letter(letter).with_record_id(receipt.letter_id))
}
