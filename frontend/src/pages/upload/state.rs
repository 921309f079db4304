//! State of the upload page.
//!
//! `UploadForm` is generic over the file handle so the submit rules can be
//! exercised without a browser; the page itself stores `web_sys::File`.

use common::catalog::{Language, ScriptType};
use common::model::upload::{OcrUploadResponse, SpeechUploadResponse};
use web_sys::File;

use crate::api::ApiError;

/// Which sub-form is visible. Both share one file slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UploadMode {
    #[default]
    Document,
    Audio,
}

impl UploadMode {
    /// Value of the file picker's `accept` attribute.
    pub fn accept(&self) -> &'static str {
        match self {
            UploadMode::Document => "image/*,.pdf",
            UploadMode::Audio => "audio/*",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            UploadMode::Document => "📄 Manuscript (OCR)",
            UploadMode::Audio => "🎵 Folk Song (Audio)",
        }
    }
}

/// Successful answer of either upload endpoint.
#[derive(Debug, Clone, PartialEq)]
pub enum UploadOutcome {
    Document(OcrUploadResponse),
    Song(SpeechUploadResponse),
}

pub struct UploadForm<F> {
    pub mode: UploadMode,
    pub file: Option<F>,
    pub script_type: ScriptType,
    pub language: Language,
    pub performer: String,
    pub region: String,
    /// An upload is in flight; at most one at a time.
    pub loading: bool,
    pub outcome: Option<UploadOutcome>,
}

impl<F> Default for UploadForm<F> {
    fn default() -> Self {
        Self {
            mode: UploadMode::default(),
            file: None,
            script_type: ScriptType::default(),
            language: Language::default(),
            performer: String::new(),
            region: String::new(),
            loading: false,
            outcome: None,
        }
    }
}

impl<F> UploadForm<F> {
    /// Submit is blocked while nothing is chosen or a request is pending.
    pub fn submit_disabled(&self) -> bool {
        self.file.is_none() || self.loading
    }

    /// Marks the form busy. Returns `false` when submission is not allowed,
    /// in which case no request may be issued.
    pub fn begin(&mut self) -> bool {
        if self.submit_disabled() {
            return false;
        }
        self.loading = true;
        true
    }

    /// Stores a successful outcome. A failure leaves the previous outcome in
    /// place and is handed back for reporting.
    pub fn finish(&mut self, result: Result<UploadOutcome, ApiError>) -> Result<(), ApiError> {
        self.loading = false;
        self.outcome = Some(result?);
        Ok(())
    }
}

/// Component state for the upload page.
#[derive(Default)]
pub struct UploadPage {
    pub form: UploadForm<File>,
}
