// App state and main event loop.
// Routes keyboard input to the active panel, spawns request tasks, and applies
// their completion events back onto the orchestrator.

use std::io;
use std::path::Path;
use std::sync::mpsc;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::prelude::*;

use crate::error::SiftError;
use crate::service::{ResearchClient, SearchResult};
use crate::state::{Diagnostic, DiagnosticSink, Orchestrator, Panel, TabController};
use crate::ui;

/// Completion event from a spawned request task. Each task sends exactly one.
#[derive(Debug)]
pub enum AppEvent {
    SearchFinished(Result<Vec<SearchResult>, SiftError>),
    SummarizeFinished(Result<String, SiftError>),
    UploadFinished(Result<String, SiftError>),
}

/// How keyboard input is currently interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    /// Typing into the search query field.
    EditQuery,
    /// Typing a PDF path into the upload prompt.
    EditPath,
}

/// Main application state.
pub struct App {
    /// Which panel is visible.
    pub tabs: TabController,
    /// Request workflows and their state.
    pub orchestrator: Orchestrator,
    /// Current input interpretation.
    pub input_mode: InputMode,
    /// Path being typed in the upload prompt.
    pub path_input: String,
    /// Whether the app should exit.
    pub should_quit: bool,
    client: ResearchClient,
    events_tx: mpsc::Sender<AppEvent>,
    events_rx: mpsc::Receiver<AppEvent>,
}

impl App {
    pub fn new(client: ResearchClient) -> Self {
        let (events_tx, events_rx) = mpsc::channel();
        Self {
            tabs: TabController::new(Panel::default()),
            orchestrator: Orchestrator::new(),
            input_mode: InputMode::default(),
            path_input: String::new(),
            should_quit: false,
            client,
            events_tx,
            events_rx,
        }
    }

    /// Main event loop.
    pub fn run(&mut self, terminal: &mut Terminal<impl Backend>) -> io::Result<()> {
        while !self.should_quit {
            self.drain_completions();
            terminal.draw(|frame| ui::draw(frame, self))?;
            self.handle_terminal_events()?;
        }
        Ok(())
    }

    /// Apply any completion events that have arrived since the last tick.
    fn drain_completions(&mut self) {
        while let Ok(event) = self.events_rx.try_recv() {
            self.handle_app_event(event);
        }
    }

    /// Apply one completion event. Whichever event arrives last owns the
    /// shared summary slot; there is no request fencing.
    pub fn handle_app_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::SearchFinished(outcome) => self.orchestrator.finish_search(outcome),
            AppEvent::SummarizeFinished(outcome) => self.orchestrator.finish_summarize(outcome),
            AppEvent::UploadFinished(outcome) => self.orchestrator.finish_upload(outcome),
        }
    }

    /// Handle keyboard events.
    #[allow(clippy::collapsible_if)]
    fn handle_terminal_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match self.input_mode {
                        InputMode::Normal => self.handle_normal_key(key.code),
                        InputMode::EditQuery => self.handle_query_key(key.code),
                        InputMode::EditPath => self.handle_path_key(key.code),
                    }
                }
            }
        }
        Ok(())
    }

    fn handle_normal_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Tab => self.tabs.activate(self.tabs.active().next()),
            KeyCode::BackTab => self.tabs.activate(self.tabs.active().prev()),
            _ => match self.tabs.active() {
                Panel::Search => self.handle_search_panel_key(code),
                Panel::Upload => self.handle_upload_panel_key(code),
            },
        }
    }

    fn handle_search_panel_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('e') | KeyCode::Char('/') => self.input_mode = InputMode::EditQuery,
            KeyCode::Enter => self.submit_search(),
            KeyCode::Up | KeyCode::Char('k') => self.orchestrator.select_prev(),
            KeyCode::Down | KeyCode::Char('j') => self.orchestrator.select_next(),
            KeyCode::Char('s') => self.summarize_selected(),
            _ => {}
        }
    }

    fn handle_upload_panel_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('o') => {
                self.path_input.clear();
                self.input_mode = InputMode::EditPath;
            }
            KeyCode::Enter => self.re_upload(),
            _ => {}
        }
    }

    fn handle_query_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc => self.input_mode = InputMode::Normal,
            KeyCode::Enter => {
                self.input_mode = InputMode::Normal;
                self.submit_search();
            }
            KeyCode::Backspace => {
                self.orchestrator.query.pop();
            }
            KeyCode::Char(c) => self.orchestrator.query.push(c),
            _ => {}
        }
    }

    fn handle_path_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc => self.input_mode = InputMode::Normal,
            KeyCode::Enter => {
                self.input_mode = InputMode::Normal;
                let path = self.path_input.clone();
                self.select_file(Path::new(&path));
            }
            KeyCode::Backspace => {
                self.path_input.pop();
            }
            KeyCode::Char(c) => self.path_input.push(c),
            _ => {}
        }
    }

    // --- Workflow triggers ---

    /// Run a search with the current query. The trigger is disabled while a
    /// search is in flight, so a second press is ignored here rather than in
    /// the orchestrator.
    pub fn submit_search(&mut self) {
        if self.orchestrator.searching {
            return;
        }
        self.orchestrator.begin_search();

        let client = self.client.clone();
        let query = self.orchestrator.query.clone();
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            let outcome = client.search(&query).await;
            let _ = tx.send(AppEvent::SearchFinished(outcome));
        });
    }

    /// Summarize the selected search result, preferring its full abstract
    /// over a bare URL. No-op when nothing is selected or the result carries
    /// neither.
    pub fn summarize_selected(&mut self) {
        let Some(input) = self
            .orchestrator
            .selected_result()
            .and_then(|r| r.summarize_input())
            .map(str::to_string)
        else {
            return;
        };
        self.orchestrator.begin_summarize();

        let client = self.client.clone();
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            let outcome = client.summarize(&input).await;
            let _ = tx.send(AppEvent::SummarizeFinished(outcome));
        });
    }

    /// Store a newly selected document and immediately upload it. Non-PDF
    /// paths and unreadable files only record a diagnostic; no request state
    /// is touched.
    pub fn select_file(&mut self, path: &Path) {
        let is_pdf = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"));
        if !is_pdf {
            self.orchestrator.diagnostics.record(Diagnostic::error(format!(
                "Not a PDF file: {}",
                path.display()
            )));
            return;
        }

        let data = match std::fs::read(path) {
            Ok(data) => data,
            Err(err) => {
                self.orchestrator.diagnostics.record(Diagnostic::error(format!(
                    "Could not read {}: {err}",
                    path.display()
                )));
                return;
            }
        };

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "document.pdf".to_string());

        self.orchestrator.set_upload_slot(name, data);
        self.start_upload();
    }

    /// Re-send the stored document. No-op when nothing has been selected;
    /// ignored while an upload is already in flight (the trigger is disabled).
    pub fn re_upload(&mut self) {
        if self.orchestrator.uploading || self.orchestrator.upload.is_none() {
            return;
        }
        self.start_upload();
    }

    fn start_upload(&mut self) {
        let Some(slot) = self.orchestrator.upload.clone() else {
            return;
        };
        self.orchestrator.begin_upload();

        let client = self.client.clone();
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            let outcome = client.summarize_pdf(&slot.name, slot.data).await;
            let _ = tx.send(AppEvent::UploadFinished(outcome));
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::state::SummaryState;
    use std::io::Write;

    fn test_app() -> App {
        let config = Config::new("http://127.0.0.1:9");
        App::new(ResearchClient::new(&config).unwrap())
    }

    fn sample_result(title: &str) -> SearchResult {
        SearchResult {
            title: title.to_string(),
            source: "PubMed".to_string(),
            year: 2020,
            abstract_text: Some("Long text...".to_string()),
            url: None,
        }
    }

    #[test]
    fn test_tab_switching_preserves_workflow_state() {
        let mut app = test_app();
        app.orchestrator.query.push_str("diabetes");
        app.orchestrator.results = vec![sample_result("T1")];
        app.orchestrator.set_upload_slot("paper.pdf", vec![1, 2]);
        app.orchestrator.summary = SummaryState::Ready("Short.".to_string());

        app.tabs.activate(Panel::Upload);
        app.tabs.activate(Panel::Search);
        app.tabs.activate(Panel::Upload);

        assert!(app.tabs.is_active(Panel::Upload));
        assert!(!app.tabs.is_active(Panel::Search));
        assert_eq!(app.orchestrator.query, "diabetes");
        assert_eq!(app.orchestrator.results.len(), 1);
        assert!(app.orchestrator.upload.is_some());
        assert_eq!(app.orchestrator.summary.text(), "Short.");
    }

    #[test]
    fn test_re_upload_without_selection_is_noop() {
        let mut app = test_app();
        app.re_upload();

        assert!(!app.orchestrator.uploading);
        assert_eq!(app.orchestrator.summary, SummaryState::Empty);
    }

    #[test]
    fn test_select_file_rejects_non_pdf() {
        let mut app = test_app();
        app.select_file(Path::new("/tmp/notes.txt"));

        assert!(app.orchestrator.upload.is_none());
        assert!(!app.orchestrator.uploading);
        assert_eq!(app.orchestrator.summary, SummaryState::Empty);
        assert_eq!(app.orchestrator.diagnostics.error_count(), 1);
    }

    #[tokio::test]
    async fn test_select_file_stores_slot_and_starts_upload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("paper.pdf");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(b"%PDF-1.4 stub").unwrap();

        let mut app = test_app();
        app.select_file(&path);

        let slot = app.orchestrator.upload.as_ref().unwrap();
        assert_eq!(slot.name, "paper.pdf");
        assert_eq!(slot.data, b"%PDF-1.4 stub");
        assert!(app.orchestrator.uploading);
        assert!(app.orchestrator.summary.is_pending());
    }

    #[test]
    fn test_overlapping_completions_last_one_wins() {
        // Two summarize requests in flight; the first-started request
        // resolves second and overwrites the other's result.
        let mut app = test_app();
        app.orchestrator.begin_summarize();
        app.orchestrator.begin_summarize();

        app.handle_app_event(AppEvent::SummarizeFinished(Ok("summary of B".to_string())));
        app.handle_app_event(AppEvent::SummarizeFinished(Ok("summary of A".to_string())));

        assert_eq!(app.orchestrator.summary.text(), "summary of A");
    }

    #[test]
    fn test_search_completion_applies_silent_fail_policy() {
        let mut app = test_app();
        app.orchestrator.results = vec![sample_result("Kept")];
        app.orchestrator.begin_search();

        app.handle_app_event(AppEvent::SearchFinished(Err(SiftError::Other(
            "connection refused".to_string(),
        ))));

        assert_eq!(app.orchestrator.results[0].title, "Kept");
        assert!(!app.orchestrator.searching);
        assert_eq!(app.orchestrator.summary, SummaryState::Empty);
    }

    #[test]
    fn test_query_keystrokes_mutate_buffer() {
        let mut app = test_app();
        app.input_mode = InputMode::EditQuery;
        for c in "flu".chars() {
            app.handle_query_key(KeyCode::Char(c));
        }
        app.handle_query_key(KeyCode::Backspace);
        assert_eq!(app.orchestrator.query, "fl");

        // Leaving edit mode does not clear the buffer.
        app.handle_query_key(KeyCode::Esc);
        assert_eq!(app.orchestrator.query, "fl");
        assert_eq!(app.input_mode, InputMode::Normal);
    }
}
