//! Spreadsheet-backed record store.
//!
//! Records are rows in a fixed 10-column `Submissions` range; the `Settings`
//! range provides the drafting-form vocabularies. All access goes through
//! the spreadsheet's HTTP values API with an API-key query parameter.

use serde::Deserialize;
use serde_json::json;
use tracing::info;

use super::{DropdownOptions, RecordStore};
use crate::error::{KhitabError, Result};
use crate::model::LetterRecord;

const SUBMISSIONS_RANGE: &str = "Submissions!A:J";
const SETTINGS_RANGE: &str = "Settings!A:F";

pub struct SheetsStore {
    client: reqwest::blocking::Client,
    base_url: String,
    api_key: String,
}

#[derive(Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<String>>,
}

impl SheetsStore {
    pub fn new(spreadsheet_id: &str, api_key: &str) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            base_url: format!(
                "https://sheets.googleapis.com/v4/spreadsheets/{}",
                spreadsheet_id
            ),
            api_key: api_key.to_string(),
        }
    }

    fn get_values(&self, range: &str) -> Result<Vec<Vec<String>>> {
        let url = format!("{}/values/{}?key={}", self.base_url, range, self.api_key);
        info!(range, "reading sheet range");
        let resp = self.client.get(&url).send()?;
        let status = resp.status();
        if !status.is_success() {
            return Err(KhitabError::Server {
                status: status.as_u16(),
                body: resp.text().unwrap_or_default(),
            });
        }
        let parsed: ValueRange = resp.json()?;
        Ok(parsed.values)
    }
}

impl RecordStore for SheetsStore {
    fn append(&mut self, record: &LetterRecord) -> Result<()> {
        let url = format!(
            "{}/values/{}:append?valueInputOption=RAW&key={}",
            self.base_url, SUBMISSIONS_RANGE, self.api_key
        );
        info!(id = %record.id, "appending record row");
        let resp = self
            .client
            .post(&url)
            .json(&json!({ "values": [record_to_row(record)] }))
            .send()?;
        let status = resp.status();
        if !status.is_success() {
            return Err(KhitabError::Server {
                status: status.as_u16(),
                body: resp.text().unwrap_or_default(),
            });
        }
        Ok(())
    }

    fn list(&self) -> Result<Vec<LetterRecord>> {
        let values = self.get_values(SUBMISSIONS_RANGE)?;
        if values.len() < 2 {
            return Ok(Vec::new());
        }
        // Skip the header row; reverse so the newest append comes first.
        let mut records: Vec<LetterRecord> = values[1..].iter().map(|row| row_to_record(row)).collect();
        records.reverse();
        Ok(records)
    }

    /// Delete the row holding `id`.
    ///
    /// The sheet only supports deletion by physical row position, so this
    /// reads the raw range, locates the id, and deletes that row index. The
    /// read-then-delete window means a concurrent editor can shift rows in
    /// between; within one process deletes are serialized by construction.
    fn delete(&mut self, id: &str) -> Result<()> {
        let values = self.get_values(SUBMISSIONS_RANGE)?;
        let row_index = find_row_index(&values, id)
            .ok_or_else(|| KhitabError::RecordNotFound(id.to_string()))?;

        let url = format!("{}:batchUpdate?key={}", self.base_url, self.api_key);
        info!(id, row_index, "deleting record row");
        let resp = self
            .client
            .post(&url)
            .json(&json!({
                "requests": [{
                    "deleteDimension": {
                        "range": {
                            "sheetId": 0,
                            "dimension": "ROWS",
                            "startIndex": row_index,
                            "endIndex": row_index + 1
                        }
                    }
                }]
            }))
            .send()?;
        let status = resp.status();
        if !status.is_success() {
            return Err(KhitabError::Server {
                status: status.as_u16(),
                body: resp.text().unwrap_or_default(),
            });
        }
        Ok(())
    }

    fn load_options(&self) -> Result<DropdownOptions> {
        let values = self.get_values(SETTINGS_RANGE)?;
        if values.len() < 2 {
            return Err(KhitabError::Store(
                "No data found in the settings range".to_string(),
            ));
        }
        Ok(options_from_rows(&values[1..]))
    }
}

/// Zero-based physical row index (header included) of the record whose id
/// column matches, as the deletion API counts rows.
fn find_row_index(values: &[Vec<String>], id: &str) -> Option<usize> {
    values
        .iter()
        .enumerate()
        .skip(1)
        .find(|(_, row)| row.first().map(String::as_str) == Some(id))
        .map(|(index, _)| index)
}

fn record_to_row(record: &LetterRecord) -> Vec<String> {
    vec![
        record.id.clone(),
        record.date.clone(),
        record.subject.clone(),
        record.letter_type.clone(),
        record.recipient.clone(),
        record.template.clone(),
        record.content.clone(),
        record.category.clone(),
        record.purpose.clone(),
        record.first_correspondence.clone(),
    ]
}

fn row_to_record(row: &[String]) -> LetterRecord {
    let cell = |i: usize| row.get(i).cloned().unwrap_or_default();
    LetterRecord {
        id: cell(0),
        date: cell(1),
        subject: cell(2),
        letter_type: cell(3),
        recipient: cell(4),
        template: cell(5),
        content: cell(6),
        category: cell(7),
        purpose: cell(8),
        first_correspondence: cell(9),
    }
}

fn options_from_rows(rows: &[Vec<String>]) -> DropdownOptions {
    let mut options = DropdownOptions::default();
    for row in rows {
        push_unique(&mut options.letter_types, row.first());
        push_unique(&mut options.letter_categories, row.get(1));
        push_unique(&mut options.letter_purposes, row.get(2));
        push_unique(&mut options.templates, row.get(5));
    }
    options
}

fn push_unique(values: &mut Vec<String>, cell: Option<&String>) {
    if let Some(value) = cell {
        if !value.is_empty() && !values.iter().any(|existing| existing == value) {
            values.push(value.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn row_mapping_round_trips() {
        let record = LetterRecord {
            id: "LTR-1722760000000-A3K9Z".into(),
            date: "الثلاثاء، 4 أغسطس 2026".into(),
            subject: "طلب اجازة".into(),
            letter_type: "New".into(),
            recipient: "الإدارة".into(),
            template: "قالب رسمي".into(),
            content: "نص الخطاب".into(),
            category: "طلب".into(),
            purpose: "اجتماع".into(),
            first_correspondence: "نعم".into(),
        };
        let cells = record_to_row(&record);
        assert_eq!(cells.len(), 10);
        assert_eq!(row_to_record(&cells), record);
    }

    #[test]
    fn short_rows_map_missing_cells_to_empty() {
        let record = row_to_record(&row(&["LTR-1-AAAAA", "تاريخ", "موضوع"]));
        assert_eq!(record.id, "LTR-1-AAAAA");
        assert_eq!(record.letter_type, "");
        assert_eq!(record.first_correspondence, "");
    }

    #[test]
    fn find_row_index_skips_header_and_matches_id() {
        let values = vec![
            row(&["id", "date", "subject"]),
            row(&["LTR-1-AAAAA"]),
            row(&["LTR-2-BBBBB"]),
        ];
        assert_eq!(find_row_index(&values, "LTR-2-BBBBB"), Some(2));
        assert_eq!(find_row_index(&values, "LTR-9-ZZZZZ"), None);
        // A record id appearing in the header position is never matched.
        assert_eq!(find_row_index(&values, "id"), None);
    }

    #[test]
    fn options_dedup_preserving_order() {
        let rows = vec![
            row(&["جديد", "طلب", "اجتماع", "x", "y", "قالب رسمي"]),
            row(&["رد", "طلب", "تعاون", "x", "y", "قالب حديث"]),
            row(&["جديد", "تهنئة", "", "x", "y", "قالب رسمي"]),
        ];
        let options = options_from_rows(&rows);
        assert_eq!(options.letter_types, vec!["جديد", "رد"]);
        assert_eq!(options.letter_categories, vec!["طلب", "تهنئة"]);
        assert_eq!(options.letter_purposes, vec!["اجتماع", "تعاون"]);
        assert_eq!(options.templates, vec!["قالب رسمي", "قالب حديث"]);
    }
}
