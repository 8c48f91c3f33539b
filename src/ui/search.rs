// Search panel rendering.
// Query field, submit control, and the result list with per-entry summarize hint.

use ratatui::{prelude::*, widgets::*};

use crate::app::{App, InputMode};

/// Abstracts longer than this are truncated in the list; the full text is
/// still what gets sent for summarization.
const PREVIEW_LEN: usize = 300;

/// Draw the search panel: query input, submit control, result list.
pub fn draw_search_panel(frame: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Query input
            Constraint::Length(1), // Submit control
            Constraint::Min(1),    // Result list
        ])
        .split(area);

    draw_query_input(frame, app, chunks[0]);
    draw_submit_control(frame, app, chunks[1]);
    draw_results(frame, app, chunks[2]);
}

fn draw_query_input(frame: &mut Frame, app: &App, area: Rect) {
    let editing = app.input_mode == InputMode::EditQuery;

    let mut spans = vec![Span::raw(app.orchestrator.query.as_str())];
    if editing {
        spans.push(Span::styled("█", Style::default().fg(Color::Yellow)));
    } else if app.orchestrator.query.is_empty() {
        spans = vec![Span::styled(
            "Search PubMed / Semantic Scholar / DOI / Keywords",
            Style::default().fg(Color::DarkGray),
        )];
    }

    let border_style = if editing {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let input = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(" Query "),
    );
    frame.render_widget(input, area);
}

fn draw_submit_control(frame: &mut Frame, app: &App, area: Rect) {
    // The trigger is disabled while a search is in flight.
    let (label, style) = if app.orchestrator.searching {
        ("⏳ Searching...", Style::default().fg(Color::DarkGray))
    } else {
        (
            "[ Search & Fetch ]",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )
    };
    frame.render_widget(Paragraph::new(Span::styled(label, style)), area);
}

fn draw_results(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(" Results ");

    if app.orchestrator.results.is_empty() {
        let text = Paragraph::new("No results")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(text, area);
        return;
    }

    let items: Vec<ListItem> = app
        .orchestrator
        .results
        .iter()
        .map(|result| {
            let mut lines = vec![
                Line::from(Span::styled(
                    result.title.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    format!("{} — {}", result.source, result.year),
                    Style::default().fg(Color::DarkGray),
                )),
            ];
            if let Some(abstract_text) = &result.abstract_text {
                lines.push(Line::from(Span::raw(preview(abstract_text))));
            }
            ListItem::new(lines)
        })
        .collect();

    let list_widget = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    frame.render_stateful_widget(list_widget, area, &mut app.orchestrator.results_state);
}

/// Display-only truncation of an abstract.
fn preview(text: &str) -> String {
    if text.chars().count() <= PREVIEW_LEN {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(PREVIEW_LEN).collect();
        format!("{truncated}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_truncates_long_abstracts_only() {
        assert_eq!(preview("short"), "short");

        let long = "a".repeat(400);
        let shown = preview(&long);
        assert_eq!(shown.chars().count(), PREVIEW_LEN + 3);
        assert!(shown.ends_with("..."));
    }
}
