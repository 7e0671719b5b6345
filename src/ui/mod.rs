// UI module for rendering the TUI.
// Contains the tab bar, one renderer per view, status bar, and help overlay.

mod analysis;
mod pricing;
mod profile;
mod tabs;
mod upload;
mod widgets;

use ratatui::{prelude::*, widgets::*};

use crate::app::{App, NOTICE_SECS};
use crate::state::{NoticeLevel, View};

/// Main draw function that renders the entire UI.
pub fn draw(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Tab bar
            Constraint::Min(1),    // Main content
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    tabs::draw_tabs(frame, app, chunks[0]);
    draw_content(frame, app, chunks[1]);
    draw_status_bar(frame, app, chunks[2]);

    // Help overlay (rendered last, on top of everything)
    if app.show_help {
        draw_help_overlay(frame);
    }
}

/// Draw the main content area based on the active view.
fn draw_content(frame: &mut Frame, app: &mut App, area: Rect) {
    match app.session.view() {
        View::Upload => upload::draw_upload(frame, &app.upload, area),
        View::Analysis => analysis::draw_analysis(frame, app.session.artifact(), area),
        View::Profile => profile::draw_profile(frame, &mut app.profile, area),
        View::Pricing => pricing::draw_pricing(frame, &app.pricing, area),
    }
}

/// Keybinding hints for the active view.
fn view_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    if app.upload.is_browsing() {
        return vec![("↵", "Select"), ("Esc", "Cancel")];
    }
    let mut hints = match app.session.view() {
        View::Upload => vec![("o", "Browse"), ("←→/m", "Model"), ("a", "Analyze")],
        View::Analysis => vec![],
        View::Profile => vec![("↑↓", "Navigate")],
        View::Pricing => vec![("←→", "Plan"), ("b", "Billing"), ("↵", "Subscribe")],
    };
    hints.extend([("Tab", "Switch"), ("?", "Help"), ("q", "Quit")]);
    hints
}

/// Draw the status bar: the latest notice if fresh, otherwise key hints.
fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let line = match app.notices.current(NOTICE_SECS) {
        Some(notice) => {
            let (icon, color) = match notice.level {
                NoticeLevel::Error => ("✗", Color::Red),
                NoticeLevel::Warn => ("!", Color::Yellow),
                NoticeLevel::Info => ("i", Color::Cyan),
            };
            Line::from(Span::styled(
                format!(" {} {}", icon, notice.message),
                Style::default().fg(color),
            ))
        }
        None => Line::from(
            view_hints(app)
                .into_iter()
                .flat_map(|(key, label)| {
                    [
                        Span::raw(format!(" {} ", key)),
                        Span::styled(format!("{} ", label), Style::default().fg(Color::DarkGray)),
                    ]
                })
                .collect::<Vec<_>>(),
        ),
    };

    frame.render_widget(Paragraph::new(line), area);
}

/// Draw the help overlay.
fn draw_help_overlay(frame: &mut Frame) {
    let popup_area = widgets::centered_rect(frame.area(), 52, 18);

    // Clear the area behind the popup
    frame.render_widget(Clear, popup_area);

    let key = |k: &'static str, text: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {:<14}", k), Style::default().fg(Color::Cyan)),
            Span::raw(text),
        ])
    };

    let help_text = vec![
        Line::from(vec![Span::styled(
            "Keyboard Shortcuts",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from(""),
        key("Tab/Shift+Tab", "Switch views"),
        key("1-4", "Jump to view"),
        key("o / Enter", "Browse for a video (Upload)"),
        key("paste path", "Drop a video (Upload)"),
        key("←/→ or m", "Change model (Upload)"),
        key("a", "Analyze stroke (Upload)"),
        key("↑/↓ or j/k", "Select history (Profile)"),
        key("←/→", "Select plan (Pricing)"),
        key("b", "Toggle billing (Pricing)"),
        key("Enter", "Subscribe (Pricing)"),
        key("?", "Show/hide this help"),
        key("q", "Quit"),
        Line::from(""),
        Line::from(vec![
            Span::styled("Press ", Style::default().fg(Color::DarkGray)),
            Span::styled("Esc", Style::default().fg(Color::Yellow)),
            Span::styled(" or ", Style::default().fg(Color::DarkGray)),
            Span::styled("?", Style::default().fg(Color::Yellow)),
            Span::styled(" to close", Style::default().fg(Color::DarkGray)),
        ]),
    ];

    let help_paragraph = Paragraph::new(help_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(" Help ")
                .title_style(
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
        )
        .alignment(Alignment::Left);

    frame.render_widget(help_paragraph, popup_area);
}
