// Practice history fixtures for the Profile view.
// Sample analyzed sessions plus the aggregate stats shown above them.

use chrono::NaiveDate;

use super::models::ModelSelection;

/// A previously analyzed practice video.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRecord {
    pub id: &'static str,
    pub filename: &'static str,
    pub date: NaiveDate,
    pub model: ModelSelection,
    pub score: u8,
}

/// Sample history, newest first.
pub fn sample_history() -> Vec<HistoryRecord> {
    vec![
        HistoryRecord {
            id: "1",
            filename: "forehand_practice_01.mp4",
            date: date(2024, 1, 15),
            model: ModelSelection::Federer,
            score: 78,
        },
        HistoryRecord {
            id: "2",
            filename: "backhand_drill.mp4",
            date: date(2024, 1, 12),
            model: ModelSelection::Standard,
            score: 65,
        },
        HistoryRecord {
            id: "3",
            filename: "serve_practice.mp4",
            date: date(2024, 1, 10),
            model: ModelSelection::Nadal,
            score: 82,
        },
    ]
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// Mean score rounded to the nearest integer, or None for an empty history.
pub fn average_score(records: &[HistoryRecord]) -> Option<u32> {
    if records.is_empty() {
        return None;
    }
    let total: u32 = records.iter().map(|r| u32::from(r.score)).sum();
    let count = records.len() as u32;
    Some((total * 2 + count) / (count * 2))
}

/// Highest score in the history.
pub fn best_score(records: &[HistoryRecord]) -> Option<u8> {
    records.iter().map(|r| r.score).max()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_history_stats() {
        let history = sample_history();
        assert_eq!(history.len(), 3);
        // (78 + 65 + 82) / 3 = 75
        assert_eq!(average_score(&history), Some(75));
        assert_eq!(best_score(&history), Some(82));
    }

    #[test]
    fn test_average_rounds_half_up() {
        let mut history = sample_history();
        history.truncate(2);
        // (78 + 65) / 2 = 71.5
        assert_eq!(average_score(&history), Some(72));
    }

    #[test]
    fn test_empty_history() {
        assert_eq!(average_score(&[]), None);
        assert_eq!(best_score(&[]), None);
    }

    #[test]
    fn test_history_newest_first() {
        let history = sample_history();
        assert!(history.windows(2).all(|w| w[0].date > w[1].date));
        assert_eq!(history[0].model, ModelSelection::Federer);
    }
}
