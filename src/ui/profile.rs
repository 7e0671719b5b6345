// Profile view rendering.
// Stats cards over the practice history list.

use ratatui::{prelude::*, widgets::*};

use crate::analysis::ScoreBand;
use crate::state::ProfilePanel;

use super::widgets::{render_empty, score_color, titled_block};

pub fn draw_profile(frame: &mut Frame, panel: &mut ProfilePanel, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(4), // Stats
            Constraint::Min(5),    // History
        ])
        .split(area);

    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            "Your Tennis Journey",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Keep practicing to improve your technique",
            Style::default().fg(Color::DarkGray),
        )),
    ]);
    frame.render_widget(header, chunks[0]);

    draw_stats(frame, panel, chunks[1]);

    if panel.history.is_empty() {
        render_empty(frame, chunks[2], "Recent Analyses", &["No analyses yet"]);
        return;
    }

    let items: Vec<ListItem> = panel
        .history
        .iter()
        .map(|record| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:<28}", record.filename),
                    Style::default().fg(Color::Cyan),
                ),
                Span::styled(
                    format!("{}  Model: {:<9}", record.date.format("%Y-%m-%d"), record.model),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(
                    format!("Score: {}", record.score),
                    Style::default().fg(score_color(ScoreBand::of(record.score))),
                ),
            ]))
        })
        .collect();

    let title = match panel.selected_record() {
        Some(record) => format!(
            "Recent Analyses · {} ({} model)",
            record.filename, record.model
        ),
        None => "Recent Analyses".to_string(),
    };
    let list_widget = List::new(items)
        .block(titled_block(&title))
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    frame.render_stateful_widget(list_widget, chunks[2], &mut panel.list_state);
}

fn draw_stats(frame: &mut Frame, panel: &ProfilePanel, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3); 3])
        .split(area);

    let dash = || "-".to_string();
    let cards = [
        ("Total Videos", panel.total().to_string(), "Analyzed sessions"),
        (
            "Average Score",
            panel.average_score().map_or_else(dash, |s| s.to_string()),
            "↑ Improving",
        ),
        (
            "Best Score",
            panel.best_score().map_or_else(dash, |s| s.to_string()),
            "Personal best",
        ),
    ];

    for ((title, value, caption), column) in cards.into_iter().zip(columns.iter()) {
        let card = Paragraph::new(vec![
            Line::from(Span::styled(
                value,
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(caption, Style::default().fg(Color::DarkGray))),
        ])
        .block(titled_block(title));
        frame.render_widget(card, *column);
    }
}
