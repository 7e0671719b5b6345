// Tab bar rendering.
// Highlights the active view and shows a marker while analyses are running.

use ratatui::{prelude::*, widgets::*};

use crate::app::App;
use crate::state::View;

/// Draw the tab bar at the top of the screen.
pub fn draw_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let active = app.session.view();
    let running = app.session.in_flight();

    let tab_titles: Vec<Line> = View::ALL
        .iter()
        .enumerate()
        .map(|(i, view)| {
            let title = if *view == View::Analysis && running > 0 {
                format!("{} {} (running {})", i + 1, view.title(), running)
            } else {
                format!("{} {}", i + 1, view.title())
            };

            let style = if *view == active {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };

            Line::from(Span::styled(title, style))
        })
        .collect();

    let tabs_widget = Tabs::new(tab_titles)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(" Playonme · AI Tennis Coach ")
                .title_style(
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
        )
        .select(active.index())
        .highlight_style(Style::default().fg(Color::Yellow))
        .divider(Span::raw(" │ "));

    frame.render_widget(tabs_widget, area);
}
