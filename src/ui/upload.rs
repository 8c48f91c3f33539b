// Upload panel rendering.
// Shows the selected document, the path prompt, and the re-summarize control.

use ratatui::{prelude::*, widgets::*};

use crate::app::{App, InputMode};

/// Draw the upload panel.
pub fn draw_upload_panel(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(" Upload PDF ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Selected file
            Constraint::Length(1), // Path prompt (when editing)
            Constraint::Length(1), // Re-trigger control
        ])
        .split(inner);

    let file_line = match &app.orchestrator.upload {
        Some(slot) => Line::from(vec![
            Span::raw("⇪ "),
            Span::styled(slot.name.clone(), Style::default().fg(Color::White)),
        ]),
        None => Line::from(Span::styled(
            "Choose a medical PDF to upload",
            Style::default().fg(Color::DarkGray),
        )),
    };
    frame.render_widget(Paragraph::new(file_line), chunks[0]);

    if app.input_mode == InputMode::EditPath {
        let prompt = Line::from(vec![
            Span::styled("Path: ", Style::default().fg(Color::Yellow)),
            Span::raw(app.path_input.as_str()),
            Span::styled("█", Style::default().fg(Color::Yellow)),
        ]);
        frame.render_widget(Paragraph::new(prompt), chunks[1]);
    }

    // The re-trigger is disabled while an upload is in flight.
    let (label, style) = if app.orchestrator.uploading {
        ("⏳ Summarizing PDF...", Style::default().fg(Color::DarkGray))
    } else {
        (
            "[ Summarize PDF ]",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )
    };
    frame.render_widget(Paragraph::new(Span::styled(label, style)), chunks[2]);
}
