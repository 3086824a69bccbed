use super::{DropdownOptions, RecordStore};
use crate::error::{KhitabError, Result};
use crate::model::LetterRecord;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    records: Vec<LetterRecord>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RecordStore for InMemoryStore {
    fn append(&mut self, record: &LetterRecord) -> Result<()> {
        self.records.push(record.clone());
        Ok(())
    }

    fn list(&self) -> Result<Vec<LetterRecord>> {
        // Newest first, like the production store.
        Ok(self.records.iter().rev().cloned().collect())
    }

    fn delete(&mut self, id: &str) -> Result<()> {
        let position = self
            .records
            .iter()
            .position(|record| record.id == id)
            .ok_or_else(|| KhitabError::RecordNotFound(id.to_string()))?;
        self.records.remove(position);
        Ok(())
    }

    fn load_options(&self) -> Result<DropdownOptions> {
        Ok(DropdownOptions {
            letter_types: arabic_vec(&["جديد", "رد", "متابعة", "تعاون"]),
            letter_categories: arabic_vec(&["طلب", "جدولة اجتماع", "تهنئة", "دعوة حضور"]),
            letter_purposes: arabic_vec(&["اجتماع", "تعاون", "دعم", "استفسار"]),
            templates: arabic_vec(&["قالب رسمي", "قالب حديث"]),
        })
    }
}

fn arabic_vec(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::generate_id;

    pub fn record(subject: &str, recipient: &str) -> LetterRecord {
        LetterRecord {
            id: generate_id(),
            date: "الثلاثاء، 4 أغسطس 2026".to_string(),
            subject: subject.to_string(),
            letter_type: "New".to_string(),
            recipient: recipient.to_string(),
            template: "قالب رسمي".to_string(),
            content: "نص الخطاب".to_string(),
            category: "طلب".to_string(),
            purpose: "اجتماع".to_string(),
            first_correspondence: "نعم".to_string(),
        }
    }

    pub fn store_with_records(subjects: &[&str]) -> InMemoryStore {
        let mut store = InMemoryStore::new();
        for subject in subjects {
            store.append(&record(subject, "الإدارة")).unwrap();
        }
        store
    }
}
