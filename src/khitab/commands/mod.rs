use crate::config::KhitabConfig;
use crate::filter::RecordRow;
use crate::model::ReviewRecord;
use crate::store::DropdownOptions;
use std::path::PathBuf;

pub mod config;
pub mod delete;
pub mod draft;
pub mod export;
pub mod list;
pub mod options;
pub mod review;
pub mod show;
pub mod theme;

/// Where khitab keeps its local state (config and the review log).
#[derive(Debug, Clone)]
pub struct KhitabPaths {
    pub data_dir: PathBuf,
}

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub rows: Vec<RecordRow>,
    pub letter: Option<String>,
    pub record_id: Option<String>,
    pub review: Option<ReviewRecord>,
    pub options: Option<DropdownOptions>,
    pub config: Option<KhitabConfig>,
    pub urls: Vec<String>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_rows(mut self, rows: Vec<RecordRow>) -> Self {
        self.rows = rows;
        self
    }

    pub fn with_letter(mut self, letter: impl Into<String>) -> Self {
        self.letter = Some(letter.into());
        self
    }

    pub fn with_record_id(mut self, id: impl Into<String>) -> Self {
        self.record_id = Some(id.into());
        self
    }

    pub fn with_review(mut self, review: ReviewRecord) -> Self {
        self.review = Some(review);
        self
    }

    pub fn with_options(mut self, options: DropdownOptions) -> Self {
        self.options = Some(options);
        self
    }

    pub fn with_config(mut self, config: KhitabConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn with_urls(mut self, urls: Vec<String>) -> Self {
        self.urls = urls;
        self
    }
}
