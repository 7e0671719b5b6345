// App state and main event loop.
// Routes keyboard, paste, and focus events to the session and view panels.

use std::io;
use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::prelude::*;
use tracing::debug;

use crate::analysis::AnalysisBackend;
use crate::config::AppConfig;
use crate::error::CoachError;
use crate::state::{
    Completion, Notice, NoticeLog, PricingPanel, ProfilePanel, Session, UploadPanel, View,
};
use crate::ui;

/// How long a notice stays in the status bar.
pub const NOTICE_SECS: i64 = 6;

/// Main application state.
pub struct App {
    /// Active view and latest analysis.
    pub session: Session,
    pub upload: UploadPanel,
    pub profile: ProfilePanel,
    pub pricing: PricingPanel,
    pub notices: NoticeLog,
    /// Whether the help overlay is shown.
    pub show_help: bool,
    /// Whether the app should exit.
    pub should_quit: bool,
}

impl App {
    pub fn new(config: &AppConfig, backend: Arc<dyn AnalysisBackend>) -> Self {
        Self {
            session: Session::new(backend),
            upload: UploadPanel::new(config.default_model),
            profile: ProfilePanel::new(),
            pricing: PricingPanel::new(config.current_plan),
            notices: NoticeLog::new(),
            show_help: false,
            should_quit: false,
        }
    }

    /// Main event loop. Must run inside a tokio runtime.
    pub fn run(&mut self, terminal: &mut Terminal<impl Backend>) -> io::Result<()> {
        debug!(session = self.session.id(), "event loop started");
        while !self.should_quit {
            self.tick();
            terminal.draw(|frame| ui::draw(frame, self))?;
            self.handle_events()?;
        }
        self.session.close();
        Ok(())
    }

    /// Apply analyses that finished since the last tick.
    pub fn tick(&mut self) {
        let completions = self.session.poll_completions();
        self.record_completions(completions);
    }

    fn record_completions(&mut self, completions: Vec<Completion>) {
        for completion in completions {
            match completion {
                Completion::Committed { file, model, .. } => {
                    self.notices
                        .push(Notice::info(format!("Analysis ready: {} ({})", file, model)));
                }
                Completion::Failed { file, error, .. } => {
                    self.notices
                        .push(Notice::error(format!("Analysis of {} failed: {}", file, error)));
                }
                Completion::Discarded { .. } => {}
            }
        }
    }

    /// Read one terminal event, if any arrives within the tick.
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
                Event::Paste(text) => self.handle_paste(&text),
                Event::FocusGained => self.handle_focus(true),
                Event::FocusLost => self.handle_focus(false),
                _ => {}
            }
        }
        Ok(())
    }

    /// Handle a key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Typing means nothing is being dragged over the window
        self.upload.drag_leave();

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        if self.show_help {
            match key.code {
                KeyCode::Esc | KeyCode::Char('?') => self.show_help = false,
                KeyCode::Char('q') => self.should_quit = true,
                _ => {}
            }
            return;
        }

        if self.upload.is_browsing() {
            self.handle_browse_key(key);
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('?') => self.show_help = true,
            KeyCode::Tab => self.navigate(self.session.view().next()),
            KeyCode::BackTab => self.navigate(self.session.view().prev()),
            KeyCode::Char(c @ '1'..='4') => {
                if let Some(view) = c.to_digit(10).and_then(View::from_number) {
                    self.navigate(view);
                }
            }
            _ => self.handle_view_key(key),
        }
    }

    fn handle_view_key(&mut self, key: KeyEvent) {
        match self.session.view() {
            View::Upload => match key.code {
                KeyCode::Char('o') | KeyCode::Enter => self.upload.open_browser(),
                KeyCode::Char('m') | KeyCode::Right | KeyCode::Char('l') => {
                    self.upload.next_model()
                }
                KeyCode::Left | KeyCode::Char('h') => self.upload.prev_model(),
                KeyCode::Char('a') => {
                    self.analyze();
                }
                _ => {}
            },
            View::Analysis => {}
            View::Profile => match key.code {
                KeyCode::Down | KeyCode::Char('j') => self.profile.select_next(),
                KeyCode::Up | KeyCode::Char('k') => self.profile.select_prev(),
                _ => {}
            },
            View::Pricing => match key.code {
                KeyCode::Char('b') => self.pricing.toggle_billing(),
                KeyCode::Right | KeyCode::Char('l') => self.pricing.select_next(),
                KeyCode::Left | KeyCode::Char('h') => self.pricing.select_prev(),
                KeyCode::Enter => {
                    if let Some(message) = self.pricing.subscribe() {
                        self.notices.push(Notice::info(message));
                    }
                }
                _ => {}
            },
        }
    }

    fn handle_browse_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.upload.cancel_browse(),
            KeyCode::Enter => {
                if let Err(e) = self.upload.confirm_browse() {
                    self.report(e);
                }
            }
            KeyCode::Backspace => self.upload.input_backspace(),
            KeyCode::Char(c) => self.upload.input_char(c),
            _ => {}
        }
    }

    /// Terminal focus changes. A file dragged in from a file manager gives
    /// the window focus before the drop arrives as a paste, so focus gained
    /// on the Upload view lights up the drop zone.
    pub fn handle_focus(&mut self, gained: bool) {
        let accepts_drop =
            self.session.view() == View::Upload && !self.show_help && !self.upload.is_browsing();
        if gained && accepts_drop {
            self.upload.drag_enter();
        } else {
            self.upload.drag_leave();
        }
    }

    /// Pasted text is typed into the browse prompt, or treated as a file
    /// dropped onto the Upload view.
    pub fn handle_paste(&mut self, text: &str) {
        if self.show_help {
            debug!("ignoring paste behind help overlay");
            return;
        }
        if self.upload.is_browsing() {
            text.chars()
                .filter(|c| !c.is_control())
                .for_each(|c| self.upload.input_char(c));
            return;
        }
        if self.session.view() != View::Upload {
            debug!(view = self.session.view().id(), "ignoring paste outside Upload");
            return;
        }
        if let Err(e) = self.upload.drop_text(text) {
            self.report(e);
        }
    }

    /// User navigation to a view.
    pub fn navigate(&mut self, view: View) {
        self.session.navigate(view);
    }

    /// Submit the held file for analysis. Does nothing without a file.
    pub fn analyze(&mut self) -> bool {
        let Some(submission) = self.upload.submission() else {
            return false;
        };
        let message = format!(
            "Analyzing {} with the {} model...",
            submission.file.name, submission.model
        );
        match self.session.submit(submission) {
            Ok(_) => {
                self.notices.push(Notice::info(message));
                true
            }
            Err(e) => {
                self.report(e);
                false
            }
        }
    }

    /// Surface a recoverable error in the status bar.
    fn report(&mut self, error: CoachError) {
        debug!(error = %error, "reported to user");
        let notice = match error {
            CoachError::UnsupportedFileType { .. } | CoachError::NotAFile(_) => {
                Notice::warn(error.to_string())
            }
            _ => Notice::error(error.to_string()),
        };
        self.notices.push(notice);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    use tempfile::TempDir;

    use crate::analysis::SimulatedBackend;
    use crate::catalog::ModelSelection;
    use crate::state::NoticeLevel;

    fn app() -> App {
        App::new(&AppConfig::default(), Arc::new(SimulatedBackend::default()))
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[tokio::test]
    async fn test_tab_navigation() {
        let mut app = app();
        assert_eq!(app.session.view(), View::Upload);

        press(&mut app, KeyCode::Tab);
        assert_eq!(app.session.view(), View::Analysis);
        press(&mut app, KeyCode::BackTab);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.session.view(), View::Pricing);
        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.session.view(), View::Profile);
    }

    #[tokio::test]
    async fn test_analyze_without_file_is_noop() {
        let mut app = app();
        press(&mut app, KeyCode::Char('a'));

        assert!(!app.analyze());
        assert_eq!(app.session.view(), View::Upload);
        assert!(app.session.artifact().is_none());
        assert_eq!(app.session.in_flight(), 0);
        assert!(app.notices.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_browse_select_and_analyze() {
        let temp_dir = TempDir::new().unwrap();
        let clip = temp_dir.path().join("forehand.mp4");
        fs::write(&clip, b"video").unwrap();

        let mut app = app();
        press(&mut app, KeyCode::Char('o'));
        assert!(app.upload.is_browsing());
        // 'q' is typed into the prompt, not treated as quit
        type_text(&mut app, &clip.display().to_string());
        press(&mut app, KeyCode::Enter);
        assert!(!app.should_quit);
        assert_eq!(app.upload.selected().unwrap().name, "forehand.mp4");

        press(&mut app, KeyCode::Char('m'));
        assert_eq!(app.upload.model, ModelSelection::Federer);
        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.session.in_flight(), 1);

        // User wanders off before the analysis finishes
        press(&mut app, KeyCode::Char('4'));
        tokio::time::sleep(Duration::from_millis(1100)).await;
        app.tick();

        assert_eq!(app.session.view(), View::Analysis);
        assert_eq!(app.session.artifact().unwrap().model(), ModelSelection::Federer);
        assert!(app.notices.latest().unwrap().message.contains("Analysis ready"));
    }

    #[tokio::test]
    async fn test_paste_non_video_warns_and_keeps_file() {
        let temp_dir = TempDir::new().unwrap();
        let clip = temp_dir.path().join("serve.mp4");
        let notes = temp_dir.path().join("notes.txt");
        fs::write(&clip, b"video").unwrap();
        fs::write(&notes, b"text").unwrap();

        let mut app = app();
        app.handle_paste(&clip.display().to_string());
        assert_eq!(app.upload.selected().unwrap().name, "serve.mp4");
        assert!(app.notices.is_empty());

        app.handle_paste(&notes.display().to_string());
        assert_eq!(app.upload.selected().unwrap().name, "serve.mp4");
        assert!(!app.upload.is_dragging());
        let notice = app.notices.latest().unwrap();
        assert_eq!(notice.level, NoticeLevel::Warn);
        assert!(notice.message.contains("Unsupported file type"));
    }

    #[tokio::test]
    async fn test_paste_ignored_outside_upload() {
        let temp_dir = TempDir::new().unwrap();
        let clip = temp_dir.path().join("serve.mp4");
        fs::write(&clip, b"video").unwrap();

        let mut app = app();
        app.navigate(View::Profile);
        app.handle_paste(&clip.display().to_string());
        assert!(app.upload.selected().is_none());
    }

    #[tokio::test]
    async fn test_help_overlay_swallows_keys() {
        let mut app = app();
        press(&mut app, KeyCode::Char('?'));
        assert!(app.show_help);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.session.view(), View::Upload);
        press(&mut app, KeyCode::Esc);
        assert!(!app.show_help);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[tokio::test]
    async fn test_paste_ignored_behind_help_overlay() {
        let temp_dir = TempDir::new().unwrap();
        let clip = temp_dir.path().join("serve.mp4");
        let other = temp_dir.path().join("volley.mp4");
        fs::write(&clip, b"video").unwrap();
        fs::write(&other, b"video").unwrap();

        let mut app = app();
        app.handle_paste(&clip.display().to_string());
        press(&mut app, KeyCode::Char('?'));
        app.handle_paste(&other.display().to_string());

        assert!(app.show_help);
        assert_eq!(app.upload.selected().unwrap().name, "serve.mp4");
    }

    #[tokio::test]
    async fn test_focus_gained_marks_drop_target() {
        let temp_dir = TempDir::new().unwrap();
        let clip = temp_dir.path().join("serve.mp4");
        fs::write(&clip, b"video").unwrap();

        let mut app = app();
        app.handle_focus(true);
        assert!(app.upload.is_dragging());
        app.handle_focus(false);
        assert!(!app.upload.is_dragging());

        // Dragged in, then dropped
        app.handle_focus(true);
        app.handle_paste(&clip.display().to_string());
        assert!(!app.upload.is_dragging());
        assert_eq!(app.upload.selected().unwrap().name, "serve.mp4");

        // A key press clears a stale highlight
        app.handle_focus(true);
        press(&mut app, KeyCode::Char('m'));
        assert!(!app.upload.is_dragging());

        app.navigate(View::Profile);
        app.handle_focus(true);
        assert!(!app.upload.is_dragging());
    }

    #[tokio::test]
    async fn test_pricing_subscribe_notice() {
        let mut app = app();
        app.navigate(View::Pricing);
        press(&mut app, KeyCode::Enter);
        assert!(app.notices.is_empty(), "current plan cannot be subscribed");

        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Char('b'));
        press(&mut app, KeyCode::Enter);
        assert_eq!(
            app.notices.latest().unwrap().message,
            "Redirecting to payment for ADVANCED plan (yearly billing)"
        );
    }
}
