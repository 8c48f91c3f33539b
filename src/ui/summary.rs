// Shared summary pane.
// Read-only view of the current summary phase, visible from both panels.

use ratatui::{prelude::*, widgets::*};

use crate::app::App;
use crate::state::SummaryState;

/// Draw the summary pane below the active panel.
pub fn draw_summary(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(" Summary ");

    let style = match &app.orchestrator.summary {
        SummaryState::Empty => Style::default().fg(Color::DarkGray),
        SummaryState::Pending => Style::default().fg(Color::Yellow),
        SummaryState::Ready(_) => Style::default(),
        SummaryState::Failed(_) => Style::default().fg(Color::Red),
    };

    let text = Paragraph::new(app.orchestrator.summary.text())
        .style(style)
        .wrap(Wrap { trim: false })
        .block(block);
    frame.render_widget(text, area);
}
