// Analysis view rendering.
// Either the empty state or the full result for the latest artifact.

use ratatui::{prelude::*, widgets::*};

use crate::analysis::AnalysisArtifact;

use super::widgets::{
    format_relative_time, format_timestamp, render_empty, score_color, severity_color,
    titled_block,
};

pub fn draw_analysis(frame: &mut Frame, artifact: Option<&AnalysisArtifact>, area: Rect) {
    match artifact {
        None => render_empty(
            frame,
            area,
            "Analysis",
            &[
                "",
                "No Analysis Available",
                "Upload and analyze a video to see results here",
            ],
        ),
        Some(artifact) => draw_results(frame, artifact, area),
    }
}

fn draw_results(frame: &mut Frame, artifact: &AnalysisArtifact, area: Rect) {
    let report = artifact.report();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),                                // Summary
            Constraint::Length(report.feedback.len() as u16 + 2), // Feedback
            Constraint::Length(report.mistakes.len() as u16 + 2), // Issues
            Constraint::Min(3),                                   // Improvements
        ])
        .split(area);

    let score_style = Style::default()
        .fg(score_color(report.band()))
        .add_modifier(Modifier::BOLD);
    let summary = Paragraph::new(vec![
        Line::from(vec![
            Span::styled(format!("Score {}", report.score), score_style),
            Span::raw("  "),
            Span::styled(&artifact.file().name, Style::default().fg(Color::Cyan)),
            Span::styled(
                format!("  {} model", artifact.model()),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        Line::from(Span::styled(
            format!(
                "Analyzed {} ({})",
                format_timestamp(&artifact.created_at()),
                format_relative_time(&artifact.created_at())
            ),
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .block(titled_block("Analysis Results"));
    frame.render_widget(summary, chunks[0]);

    let feedback: Vec<ListItem> = report
        .feedback
        .iter()
        .map(|item| {
            ListItem::new(Line::from(vec![
                Span::styled("✓ ", Style::default().fg(Color::Cyan)),
                Span::raw(item.as_str()),
            ]))
        })
        .collect();
    frame.render_widget(List::new(feedback).block(titled_block("Feedback")), chunks[1]);

    let mistakes: Vec<ListItem> = report
        .mistakes
        .iter()
        .map(|mistake| {
            let color = severity_color(mistake.severity);
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:<7}", mistake.severity.label()),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("At {}s  ", mistake.timestamp_secs),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(mistake.description.as_str(), Style::default().fg(color)),
            ]))
        })
        .collect();
    frame.render_widget(
        List::new(mistakes).block(titled_block("Detected Issues")),
        chunks[2],
    );

    let improvements: Vec<ListItem> = report
        .improvements
        .iter()
        .map(|item| {
            ListItem::new(Line::from(vec![
                Span::styled("↗ ", Style::default().fg(Color::Green)),
                Span::styled(item.as_str(), Style::default().fg(Color::Green)),
            ]))
        })
        .collect();
    frame.render_widget(
        List::new(improvements).block(titled_block("Recommended Improvements")),
        chunks[3],
    );
}
