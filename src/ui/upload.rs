// Upload view rendering.
// Drop zone, browse prompt, model cards, and the analyze button.

use ratatui::{prelude::*, widgets::*};

use crate::catalog::ModelSelection;
use crate::state::UploadPanel;

use super::widgets::titled_block;

pub fn draw_upload(frame: &mut Frame, panel: &UploadPanel, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Hero
            Constraint::Min(6),    // Drop zone
            Constraint::Length(3), // Browse prompt
            Constraint::Length(5), // Model cards
            Constraint::Length(3), // Analyze button
        ])
        .split(area);

    draw_hero(frame, chunks[0]);
    draw_drop_zone(frame, panel, chunks[1]);
    draw_browse_prompt(frame, panel, chunks[2]);
    draw_models(frame, panel.model, chunks[3]);
    draw_analyze_button(frame, panel.can_submit(), chunks[4]);
}

fn draw_hero(frame: &mut Frame, area: Rect) {
    let hero = Paragraph::new(vec![
        Line::from(vec![
            Span::styled(
                "Your personal tennis coach, ",
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                "anytime, anywhere",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            "Upload your practice videos and get instant AI-powered analysis to improve your technique like the pros",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true });
    frame.render_widget(hero, area);
}

fn draw_drop_zone(frame: &mut Frame, panel: &UploadPanel, area: Rect) {
    let border_color = if panel.is_dragging() {
        Color::Cyan
    } else if panel.selected().is_some() {
        Color::Green
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color))
        .title(" Upload Practice Video ");

    let lines = match panel.selected() {
        Some(file) => vec![
            Line::from(""),
            Line::from(Span::styled(
                format!("▶ {}", file.name),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                file.size_label(),
                Style::default().fg(Color::Green),
            )),
        ],
        None => vec![
            Line::from(""),
            Line::from("Drop your video here or press o to browse"),
            Line::from(Span::styled(
                "MP4, WebM up to 50MB",
                Style::default().fg(Color::DarkGray),
            )),
        ],
    };

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(paragraph, area);
}

fn draw_browse_prompt(frame: &mut Frame, panel: &UploadPanel, area: Rect) {
    let line = if panel.is_browsing() {
        Line::from(vec![
            Span::styled("Path: ", Style::default().fg(Color::DarkGray)),
            Span::raw(panel.path_input.as_str()),
            Span::styled("█", Style::default().fg(Color::Yellow)),
        ])
    } else {
        Line::from(Span::styled(
            "Record your tennis stroke and let AI analyze your technique",
            Style::default().fg(Color::DarkGray),
        ))
    };

    let border = if panel.is_browsing() {
        Color::Cyan
    } else {
        Color::DarkGray
    };
    let prompt = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .title(" Browse "),
    );
    frame.render_widget(prompt, area);
}

fn draw_models(frame: &mut Frame, selected: ModelSelection, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3); 3])
        .split(area);

    for (model, column) in ModelSelection::ALL.iter().zip(columns.iter()) {
        let is_selected = *model == selected;
        let block = titled_block(model.name()).border_style(if is_selected {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        });
        let style = if is_selected {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::Gray)
        };
        let card = Paragraph::new(model.description())
            .style(style)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block);
        frame.render_widget(card, *column);
    }
}

fn draw_analyze_button(frame: &mut Frame, enabled: bool, area: Rect) {
    let style = if enabled {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let button = Paragraph::new(Line::from(Span::styled("  Analyze Stroke (a)  ", style)))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::NONE));
    frame.render_widget(button, area);
}
