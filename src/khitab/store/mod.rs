//! # Record Storage Layer
//!
//! This module defines the storage abstraction for letter records. The
//! [`RecordStore`] trait lets the command layer work with different backends.
//!
//! ## Implementations
//!
//! - [`sheets::SheetsStore`]: Production spreadsheet-backed storage.
//!   Records live as rows in a fixed 10-column range; a settings range
//!   provides the dropdown vocabularies.
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing.
//!   No persistence. Fast, isolated test execution.
//!
//! ## Error policy
//!
//! Unlike the letter service, store failures are never masked: they
//! propagate to the caller, which surfaces them to the user.

use crate::error::Result;
use crate::model::LetterRecord;

pub mod memory;
pub mod sheets;

/// Dropdown vocabularies for the drafting form, sourced from the settings
/// range (or built-in defaults for the in-memory store).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DropdownOptions {
    pub letter_types: Vec<String>,
    pub letter_categories: Vec<String>,
    pub letter_purposes: Vec<String>,
    pub templates: Vec<String>,
}

/// Abstract interface for letter-record storage.
pub trait RecordStore {
    /// Append one record. Records are immutable once appended.
    fn append(&mut self, record: &LetterRecord) -> Result<()>;

    /// List all records, newest first.
    fn list(&self) -> Result<Vec<LetterRecord>>;

    /// Delete the record with the given id; `RecordNotFound` if absent.
    fn delete(&mut self, id: &str) -> Result<()>;

    /// Load the drafting-form vocabularies.
    fn load_options(&self) -> Result<DropdownOptions>;

    /// Find a record by exact id.
    fn find(&self, id: &str) -> Result<Option<LetterRecord>> {
        Ok(self.list()?.into_iter().find(|record| record.id == id))
    }
}
