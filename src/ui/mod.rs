// UI module for rendering the TUI.
// Composes the tab bar, the active panel, the shared summary pane, and the
// status bar.

mod search;
mod summary;
mod tabs;
mod upload;

use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::{App, InputMode};
use crate::state::Panel;

/// Main draw function that renders the entire UI.
pub fn draw(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Tab bar
            Constraint::Min(1),     // Active panel
            Constraint::Length(10), // Shared summary pane
            Constraint::Length(1),  // Status bar
        ])
        .split(frame.area());

    tabs::draw_tabs(frame, app, chunks[0]);
    draw_content(frame, app, chunks[1]);
    summary::draw_summary(frame, app, chunks[2]);
    draw_status_bar(frame, app, chunks[3]);
}

/// Draw the content area for whichever panel is active.
fn draw_content(frame: &mut Frame, app: &mut App, area: Rect) {
    match app.tabs.active() {
        Panel::Search => search::draw_search_panel(frame, app, area),
        Panel::Upload => upload::draw_upload_panel(frame, app, area),
    }
}

/// Draw the status bar with keybinding hints for the current mode.
fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let hints = match app.input_mode {
        InputMode::EditQuery | InputMode::EditPath => vec![
            Span::raw(" ↵ "),
            Span::styled("Submit", Style::default().fg(Color::DarkGray)),
            Span::raw("  Esc "),
            Span::styled("Done", Style::default().fg(Color::DarkGray)),
        ],
        InputMode::Normal => match app.tabs.active() {
            Panel::Search => vec![
                Span::raw(" e "),
                Span::styled("Edit query", Style::default().fg(Color::DarkGray)),
                Span::raw("  ↵ "),
                Span::styled("Search", Style::default().fg(Color::DarkGray)),
                Span::raw("  ↑↓ "),
                Span::styled("Select", Style::default().fg(Color::DarkGray)),
                Span::raw("  s "),
                Span::styled("Summarize", Style::default().fg(Color::DarkGray)),
                Span::raw("  Tab "),
                Span::styled("Switch", Style::default().fg(Color::DarkGray)),
                Span::raw("  q "),
                Span::styled("Quit", Style::default().fg(Color::DarkGray)),
            ],
            Panel::Upload => vec![
                Span::raw(" o "),
                Span::styled("Choose PDF", Style::default().fg(Color::DarkGray)),
                Span::raw("  ↵ "),
                Span::styled("Summarize again", Style::default().fg(Color::DarkGray)),
                Span::raw("  Tab "),
                Span::styled("Switch", Style::default().fg(Color::DarkGray)),
                Span::raw("  q "),
                Span::styled("Quit", Style::default().fg(Color::DarkGray)),
            ],
        },
    };

    let status = Paragraph::new(Line::from(hints));
    frame.render_widget(status, area);
}
