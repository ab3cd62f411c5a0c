//! Application state using Sycamore signals
//!
//! The orchestrator owns the run; the signals here mirror just enough
//! of it for UI binding, plus the staged-upload metadata the result
//! header and status line display.

use std::rc::Rc;

use craterscan_core::analyzer::{AnalysisOutcome, Analyzer};
use craterscan_core::clients::{HostingClient, InferenceClient};
use craterscan_core::config::CollaboratorConfig;
use craterscan_core::models::{AnalysisResult, SourceImage};
use sycamore::prelude::*;

/// Media types the upload control accepts.
pub const ACCEPTED_MEDIA_TYPES: &str = "image/jpeg,image/png,image/tiff,image/bmp";

/// Upload size ceiling in bytes (50 MiB).
pub const MAX_UPLOAD_BYTES: u64 = 50 * 1024 * 1024;

/// Analysis status for the status bar.
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisStatus {
    /// Nothing staged yet.
    Empty,
    /// An image is staged and ready to analyze.
    ImageLoaded,
    /// A run is in flight.
    Analyzing,
    /// Run complete, carrying the completion notice.
    Complete(String),
    /// Run failed, carrying the human-readable cause.
    Error(String),
}

/// Orchestrator wired to the real collaborators.
pub type AppAnalyzer = Analyzer<HostingClient, InferenceClient>;

/// Application state context
#[derive(Clone)]
pub struct AppState {
    /// The analysis orchestrator, shared with async handlers.
    pub analyzer: Rc<AppAnalyzer>,

    /// Name of the staged upload; empty when nothing is staged.
    pub filename: Signal<String>,

    /// Size of the staged upload in bytes.
    pub file_size: Signal<u64>,

    /// True while a run is in flight; disables re-triggering.
    pub analyzing: Signal<bool>,

    /// Last committed result, mirrored from the orchestrator.
    pub result: Signal<Option<AnalysisResult>>,

    /// Status line state.
    pub status: Signal<AnalysisStatus>,
}

impl AppState {
    /// Create new application state wired to the given collaborators.
    pub fn new(config: CollaboratorConfig) -> Self {
        Self {
            analyzer: Rc::new(Analyzer::new(
                HostingClient::new(config.clone()),
                InferenceClient::new(config),
            )),
            filename: create_signal(String::new()),
            file_size: create_signal(0),
            analyzing: create_signal(false),
            result: create_signal(None),
            status: create_signal(AnalysisStatus::Empty),
        }
    }

    /// Whether an upload is staged.
    pub fn has_upload(&self) -> bool {
        !self.filename.with(String::is_empty)
    }

    /// Stage a freshly read upload, discarding any previous result.
    pub fn set_upload(&self, image: SourceImage) {
        self.filename.set(image.filename.clone());
        self.file_size.set(image.size_bytes() as u64);
        self.result.set(None);
        self.analyzer.set_source(image);
        self.status.set(AnalysisStatus::ImageLoaded);
    }

    /// Run one analysis and mirror the outcome into the signals.
    pub async fn run_analysis(&self) {
        if self.analyzing.get() {
            return;
        }
        self.analyzing.set(true);
        self.status.set(AnalysisStatus::Analyzing);

        match self.analyzer.analyze().await {
            AnalysisOutcome::Completed(result) => {
                let notice = format!(
                    "Detected {} craters with {}% confidence",
                    result.crater_count,
                    (result.confidence * 100.0).round() as u32
                );
                self.result.set(Some(result));
                self.status.set(AnalysisStatus::Complete(notice));
            }
            AnalysisOutcome::Failed(cause) => {
                self.status.set(AnalysisStatus::Error(cause));
            }
            // An ignored trigger changes nothing; a superseded run was
            // already cleaned up by the reset that superseded it.
            AnalysisOutcome::Ignored | AnalysisOutcome::Superseded => {}
        }

        self.analyzing.set(false);
    }

    /// Discard the staged upload and result and show the upload view.
    pub fn reset(&self) {
        self.analyzer.reset();
        self.filename.set(String::new());
        self.file_size.set(0);
        self.result.set(None);
        self.analyzing.set(false);
        self.status.set(AnalysisStatus::Empty);
    }

    /// Staged file size for display, e.g. "2.41 MB".
    pub fn file_size_string(&self) -> String {
        format!("{:.2} MB", self.file_size.get() as f64 / 1024.0 / 1024.0)
    }
}
