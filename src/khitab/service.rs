//! HTTP client for the remote letter-generation service.
//!
//! Every operation degrades gracefully: a network error or non-2xx status
//! is swallowed, logged, and replaced with locally fabricated data. Callers
//! always get a usable value; the [`Outcome`] type records whether it came
//! from the service or from the local fallback.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{KhitabError, Result};
use crate::model::{generate_id, today_arabic, LetterRequest};
use crate::template::{self, Tone};

/// The result of a degrade-gracefully call: either the remote answer, or a
/// local substitute together with the error that forced it.
#[derive(Debug)]
pub enum Outcome<T> {
    Remote(T),
    Degraded { value: T, cause: KhitabError },
}

impl<T> Outcome<T> {
    pub fn into_value(self) -> T {
        match self {
            Outcome::Remote(value) => value,
            Outcome::Degraded { value, .. } => value,
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, Outcome::Degraded { .. })
    }

    pub fn degraded_cause(&self) -> Option<&KhitabError> {
        match self {
            Outcome::Remote(_) => None,
            Outcome::Degraded { cause, .. } => Some(cause),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeneratedLetter {
    #[serde(rename = "generatedText")]
    pub generated_text: String,
}

/// Payload for PDF creation: the approved letter text, the chosen visual
/// template, and the drafting request fields.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PdfRequest {
    pub content: String,
    pub template: String,
    #[serde(flatten)]
    pub request: LetterRequest,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PdfReceipt {
    pub letter_id: String,
    pub pdf_url: String,
    pub success: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FetchedLetter {
    pub id: String,
    pub content: String,
    pub date: String,
}

/// Client for the generation service's three endpoints, plus the navigable
/// download/print URLs.
pub struct LetterService {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl LetterService {
    /// `base_url` should be like `http://localhost:5000` (no trailing slash).
    pub fn new(base_url: String) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Generate a letter remotely; fall back to the local template engine.
    pub fn generate(&self, request: &LetterRequest, tone: Tone) -> Outcome<GeneratedLetter> {
        match self.post_json("generate-letter", request) {
            Ok(letter) => Outcome::Remote(letter),
            Err(cause) => {
                warn!(error = %cause, "generate-letter failed, using the local template");
                Outcome::Degraded {
                    value: GeneratedLetter {
                        generated_text: template::render(request, tone),
                    },
                    cause,
                }
            }
        }
    }

    /// Create a PDF remotely; fall back to a fresh id and a placeholder URL.
    pub fn create_pdf(&self, payload: &PdfRequest) -> Outcome<PdfReceipt> {
        match self.post_json("create-pdf", payload) {
            Ok(receipt) => Outcome::Remote(receipt),
            Err(cause) => {
                warn!(error = %cause, "create-pdf failed, fabricating a receipt");
                Outcome::Degraded {
                    value: PdfReceipt {
                        letter_id: generate_id(),
                        pdf_url: "#".to_string(),
                        success: true,
                    },
                    cause,
                }
            }
        }
    }

    /// Fetch a letter by id; fall back to placeholder content.
    pub fn fetch_letter(&self, id: &str) -> Outcome<FetchedLetter> {
        let url = format!("{}/letter/{}", self.base_url, id);
        match self.get_json(&url) {
            Ok(letter) => Outcome::Remote(letter),
            Err(cause) => {
                warn!(error = %cause, id, "letter fetch failed, using placeholder content");
                Outcome::Degraded {
                    value: FetchedLetter {
                        id: id.to_string(),
                        content: "محتوى الخطاب سيظهر هنا للمراجعة...".to_string(),
                        date: today_arabic(),
                    },
                    cause,
                }
            }
        }
    }

    /// Navigable URL for downloading the letter's PDF. Not fetched here.
    pub fn download_url(&self, id: &str) -> String {
        format!("{}/download-pdf/{}", self.base_url, id)
    }

    /// Navigable URL for the print view. Not fetched here.
    pub fn print_url(&self, id: &str) -> String {
        format!("{}/print/{}", self.base_url, id)
    }

    fn post_json<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T> {
        let url = format!("{}/{}", self.base_url, path);
        info!(url = %url, "posting to letter service");
        let resp = self.client.post(&url).json(body).send()?;
        let status = resp.status();
        if !status.is_success() {
            return Err(KhitabError::Server {
                status: status.as_u16(),
                body: resp.text().unwrap_or_default(),
            });
        }
        Ok(resp.json()?)
    }

    fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        info!(url = %url, "fetching from letter service");
        let resp = self.client.get(url).send()?;
        let status = resp.status();
        if !status.is_success() {
            return Err(KhitabError::Server {
                status: status.as_u16(),
                body: resp.text().unwrap_or_default(),
            });
        }
        Ok(resp.json()?)
    }
}
