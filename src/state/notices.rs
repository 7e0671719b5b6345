// User-facing notices.
// Short messages shown in the status bar (rejections, completions, errors).

use chrono::{DateTime, Utc};

/// Notice severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warn,
    Error,
}

/// A single notice.
#[derive(Debug, Clone)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Info, message)
    }

    pub fn warn(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Warn, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Error, message)
    }

    fn new(level: NoticeLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Bounded history of notices, oldest first.
#[derive(Debug, Default)]
pub struct NoticeLog {
    notices: Vec<Notice>,
}

impl NoticeLog {
    const MAX: usize = 50;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, notice: Notice) {
        self.notices.push(notice);
        if self.notices.len() > Self::MAX {
            let excess = self.notices.len() - Self::MAX;
            self.notices.drain(..excess);
        }
    }

    pub fn latest(&self) -> Option<&Notice> {
        self.notices.last()
    }

    /// Latest notice if it is younger than `max_age_secs`.
    pub fn current(&self, max_age_secs: i64) -> Option<&Notice> {
        self.latest()
            .filter(|n| Utc::now().signed_duration_since(n.timestamp).num_seconds() < max_age_secs)
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.notices.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }
}
