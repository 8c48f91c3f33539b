// Tab bar rendering.
// Highlights whichever panel the controller reports as active.

use ratatui::{prelude::*, widgets::*};

use crate::app::App;
use crate::state::Panel;

/// Draw the tab bar at the top of the screen.
pub fn draw_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let panels = Panel::all();

    let titles: Vec<Line> = panels
        .iter()
        .map(|panel| {
            let style = if app.tabs.is_active(*panel) {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            Line::from(Span::styled(panel.title(), style))
        })
        .collect();

    let selected_index = panels
        .iter()
        .position(|p| app.tabs.is_active(*p))
        .unwrap_or(0);

    let tabs_widget = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(" sift ")
                .title_style(
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
        )
        .select(selected_index)
        .highlight_style(Style::default().fg(Color::Yellow))
        .divider(Span::raw(" │ "));

    frame.render_widget(tabs_widget, area);
}
