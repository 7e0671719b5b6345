// Shared rendering helpers.
// Empty states, score and severity colours, and time formatting.

use chrono::{DateTime, Local, Utc};
use ratatui::{prelude::*, widgets::*};

use crate::analysis::{ScoreBand, Severity};

/// Format a timestamp as relative time (e.g., "2h ago").
pub fn format_relative_time(dt: &DateTime<Utc>) -> String {
    let now = Utc::now();
    let duration = now.signed_duration_since(*dt);

    if duration.num_days() > 0 {
        format!("{}d ago", duration.num_days())
    } else if duration.num_hours() > 0 {
        format!("{}h ago", duration.num_hours())
    } else if duration.num_minutes() > 0 {
        format!("{}m ago", duration.num_minutes())
    } else {
        "just now".to_string()
    }
}

/// Format a timestamp in local time.
pub fn format_timestamp(dt: &DateTime<Utc>) -> String {
    dt.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S").to_string()
}

pub fn score_color(band: ScoreBand) -> Color {
    match band {
        ScoreBand::Strong => Color::Green,
        ScoreBand::Fair => Color::Yellow,
        ScoreBand::Weak => Color::Red,
    }
}

pub fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::High => Color::Red,
        Severity::Medium => Color::LightRed,
        Severity::Low => Color::Yellow,
    }
}

/// Bordered block with a padded title.
pub fn titled_block(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(format!(" {} ", title))
}

/// Render a centered, dimmed message.
pub fn render_empty(frame: &mut Frame, area: Rect, title: &str, lines: &[&str]) {
    let text: Vec<Line> = lines.iter().map(|l| Line::from(*l)).collect();
    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray))
        .block(titled_block(title));
    frame.render_widget(paragraph, area);
}

/// Rect of the given size centered in `area`, clamped to fit.
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_relative_time() {
        assert_eq!(format_relative_time(&Utc::now()), "just now");
        let earlier = Utc::now() - chrono::Duration::minutes(5);
        assert_eq!(format_relative_time(&earlier), "5m ago");
        let yesterday = Utc::now() - chrono::Duration::hours(30);
        assert_eq!(format_relative_time(&yesterday), "1d ago");
    }

    #[test]
    fn test_centered_rect_clamps() {
        let area = Rect::new(0, 0, 40, 10);
        assert_eq!(centered_rect(area, 20, 4), Rect::new(10, 3, 20, 4));
        assert_eq!(centered_rect(area, 100, 100), area);
    }
}
