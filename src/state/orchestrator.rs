// Request orchestrator state.
// Owns the three request workflows (search, upload-and-summarize, text/URL
// summarize), their input buffers, loading flags, and the shared summary slot.

use ratatui::widgets::ListState;

use crate::error::SiftError;
use crate::service::SearchResult;

use super::diagnostics::{Diagnostic, DiagnosticLog, DiagnosticSink};

/// In-flight marker shown while a summary is being generated.
pub const SUMMARY_PENDING_TEXT: &str = "Loading summary...";
/// Failure marker for the document workflow.
pub const PDF_FAILED_TEXT: &str = "Failed to summarize PDF.";
/// Failure marker for the text/URL workflow.
pub const SUMMARIZE_FAILED_TEXT: &str = "Failed to summarize.";
/// Placeholder shown before any summary has been requested.
pub const SUMMARY_PLACEHOLDER_TEXT: &str = "Summary will appear here...";

/// The shared summary output slot. Exactly one exists; every summarization
/// workflow writes it unconditionally, so the last completion wins.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SummaryState {
    #[default]
    Empty,
    Pending,
    Ready(String),
    Failed(&'static str),
}

impl SummaryState {
    /// Text to display for the current phase.
    pub fn text(&self) -> &str {
        match self {
            SummaryState::Empty => SUMMARY_PLACEHOLDER_TEXT,
            SummaryState::Pending => SUMMARY_PENDING_TEXT,
            SummaryState::Ready(summary) => summary,
            SummaryState::Failed(marker) => marker,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, SummaryState::Pending)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, SummaryState::Failed(_))
    }
}

/// The currently selected document, kept so "summarize again" can re-send it
/// without re-selection. Replaced wholesale on each new selection.
#[derive(Debug, Clone)]
pub struct UploadSlot {
    pub name: String,
    pub data: Vec<u8>,
}

/// State machine for the three request workflows.
///
/// Each workflow is a `begin_*` / `finish_*` pair: the caller flips the state
/// with `begin_*`, performs the single network round trip, and applies the
/// outcome with `finish_*`. Nothing here blocks a second `begin_*` while a
/// request is in flight; the UI disables the trigger instead.
#[derive(Debug)]
pub struct Orchestrator<S: DiagnosticSink = DiagnosticLog> {
    /// Unsubmitted search input; mutated on every keystroke, never cleared
    /// implicitly.
    pub query: String,
    /// Current result list, in service-provided order.
    pub results: Vec<SearchResult>,
    /// Selection state for the result list.
    pub results_state: ListState,
    /// Search request in flight.
    pub searching: bool,
    /// Document upload in flight.
    pub uploading: bool,
    /// Last selected document, if any.
    pub upload: Option<UploadSlot>,
    /// Shared summary output.
    pub summary: SummaryState,
    /// Sink for failures that are not surfaced in the UI.
    pub diagnostics: S,
}

impl Orchestrator<DiagnosticLog> {
    pub fn new() -> Self {
        Self::with_sink(DiagnosticLog::new())
    }
}

impl Default for Orchestrator<DiagnosticLog> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: DiagnosticSink> Orchestrator<S> {
    pub fn with_sink(diagnostics: S) -> Self {
        Self {
            query: String::new(),
            results: Vec::new(),
            results_state: ListState::default(),
            searching: false,
            uploading: false,
            upload: None,
            summary: SummaryState::Empty,
            diagnostics,
        }
    }

    // --- Search workflow ---

    pub fn begin_search(&mut self) {
        self.searching = true;
    }

    /// Apply a search outcome. Success replaces the result list wholesale;
    /// failure keeps the previous list and records a diagnostic only.
    pub fn finish_search(&mut self, outcome: Result<Vec<SearchResult>, SiftError>) {
        match outcome {
            Ok(results) => {
                self.results = results;
                self.reset_selection();
            }
            Err(err) => {
                self.diagnostics
                    .record(Diagnostic::error(format!("Search failed: {err}")));
            }
        }
        self.searching = false;
    }

    // --- Upload-and-summarize workflow ---

    /// Store a freshly selected document, replacing any previous one.
    pub fn set_upload_slot(&mut self, name: impl Into<String>, data: Vec<u8>) {
        self.upload = Some(UploadSlot {
            name: name.into(),
            data,
        });
    }

    pub fn begin_upload(&mut self) {
        self.uploading = true;
        self.summary = SummaryState::Pending;
    }

    pub fn finish_upload(&mut self, outcome: Result<String, SiftError>) {
        match outcome {
            Ok(summary) => self.summary = SummaryState::Ready(summary),
            Err(err) => {
                self.diagnostics
                    .record(Diagnostic::error(format!("PDF summarization failed: {err}")));
                self.summary = SummaryState::Failed(PDF_FAILED_TEXT);
            }
        }
        self.uploading = false;
    }

    // --- Text/URL summarize workflow ---

    pub fn begin_summarize(&mut self) {
        self.summary = SummaryState::Pending;
    }

    pub fn finish_summarize(&mut self, outcome: Result<String, SiftError>) {
        match outcome {
            Ok(summary) => self.summary = SummaryState::Ready(summary),
            Err(err) => {
                self.diagnostics
                    .record(Diagnostic::error(format!("Summarization failed: {err}")));
                self.summary = SummaryState::Failed(SUMMARIZE_FAILED_TEXT);
            }
        }
    }

    // --- Result list selection ---

    pub fn selected_result(&self) -> Option<&SearchResult> {
        let index = self.results_state.selected()?;
        self.results.get(index)
    }

    pub fn select_next(&mut self) {
        if self.results.is_empty() {
            return;
        }
        let i = match self.results_state.selected() {
            Some(i) if i >= self.results.len() - 1 => i,
            Some(i) => i + 1,
            None => 0,
        };
        self.results_state.select(Some(i));
    }

    pub fn select_prev(&mut self) {
        if self.results.is_empty() {
            return;
        }
        let i = match self.results_state.selected() {
            Some(i) => i.saturating_sub(1),
            None => 0,
        };
        self.results_state.select(Some(i));
    }

    fn reset_selection(&mut self) {
        if self.results.is_empty() {
            self.results_state.select(None);
        } else {
            self.results_state.select(Some(0));
        }
    }
}
