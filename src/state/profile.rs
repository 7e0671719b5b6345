// Profile view state.
// Practice history list with selection and aggregate stats.

use ratatui::widgets::ListState;

use crate::catalog::{self, HistoryRecord};

/// State for the Profile view.
#[derive(Debug)]
pub struct ProfilePanel {
    pub history: Vec<HistoryRecord>,
    pub list_state: ListState,
}

impl Default for ProfilePanel {
    fn default() -> Self {
        Self::with_history(catalog::sample_history())
    }
}

impl ProfilePanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_history(history: Vec<HistoryRecord>) -> Self {
        let mut list_state = ListState::default();
        if !history.is_empty() {
            list_state.select(Some(0));
        }
        Self {
            history,
            list_state,
        }
    }

    pub fn total(&self) -> usize {
        self.history.len()
    }

    pub fn average_score(&self) -> Option<u32> {
        catalog::average_score(&self.history)
    }

    pub fn best_score(&self) -> Option<u8> {
        catalog::best_score(&self.history)
    }

    pub fn selected_record(&self) -> Option<&HistoryRecord> {
        self.list_state.selected().and_then(|i| self.history.get(i))
    }

    /// Select the next record, stopping at the end.
    pub fn select_next(&mut self) {
        if self.history.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) if i + 1 < self.history.len() => i + 1,
            Some(i) => i,
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    /// Select the previous record, stopping at the start.
    pub fn select_prev(&mut self) {
        if self.history.is_empty() {
            return;
        }
        let i = self.list_state.selected().map_or(0, |i| i.saturating_sub(1));
        self.list_state.select(Some(i));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_from_sample_history() {
        let panel = ProfilePanel::new();
        assert_eq!(panel.total(), 3);
        assert_eq!(panel.average_score(), Some(75));
        assert_eq!(panel.best_score(), Some(82));
    }

    #[test]
    fn test_selection_bounds() {
        let mut panel = ProfilePanel::new();
        assert_eq!(panel.selected_record().unwrap().filename, "forehand_practice_01.mp4");

        panel.select_prev();
        assert_eq!(panel.list_state.selected(), Some(0));

        for _ in 0..5 {
            panel.select_next();
        }
        assert_eq!(panel.list_state.selected(), Some(2));
        assert_eq!(panel.selected_record().unwrap().filename, "serve_practice.mp4");
    }

    #[test]
    fn test_empty_history() {
        let mut panel = ProfilePanel::with_history(Vec::new());
        panel.select_next();
        assert!(panel.selected_record().is_none());
        assert_eq!(panel.average_score(), None);
    }
}
