// Upload view state.
// Holds the chosen video and model until the user asks for an analysis.

use std::path::Path;

use tracing::{debug, info};

use crate::analysis::PendingSubmission;
use crate::catalog::ModelSelection;
use crate::error::{CoachError, Result};
use crate::media::{self, VideoFile};

/// Whether keystrokes go to the path prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Browsing,
}

/// Local, unsaved state of the Upload view.
#[derive(Debug, Default)]
pub struct UploadPanel {
    selected: Option<VideoFile>,
    /// Model to compare against.
    pub model: ModelSelection,
    dragging: bool,
    /// Path being typed in the browse prompt.
    pub path_input: String,
    pub mode: InputMode,
}

impl UploadPanel {
    pub fn new(model: ModelSelection) -> Self {
        Self {
            model,
            ..Self::default()
        }
    }

    pub fn selected(&self) -> Option<&VideoFile> {
        self.selected.as_ref()
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Submit is only enabled with a file held.
    pub fn can_submit(&self) -> bool {
        self.selected.is_some()
    }

    /// Hold a file if it is declared as video. Anything else is rejected and
    /// the previously held file stays selected.
    pub fn select(&mut self, file: VideoFile) -> Result<()> {
        let file = file.require_video()?;
        info!(file = %file.name, media_type = %file.media_type, "video selected");
        self.selected = Some(file);
        Ok(())
    }

    /// Resolve a path on disk and hold it.
    pub fn select_path(&mut self, path: &Path) -> Result<()> {
        let file = VideoFile::from_path(path)?;
        self.select(file)
    }

    pub fn next_model(&mut self) {
        self.model = self.model.next();
    }

    pub fn prev_model(&mut self) {
        self.model = self.model.prev();
    }

    /// Build the submission for the held file, if any.
    pub fn submission(&self) -> Option<PendingSubmission> {
        self.selected
            .as_ref()
            .map(|file| PendingSubmission::new(file.clone(), self.model))
    }

    // Browse prompt

    pub fn open_browser(&mut self) {
        self.mode = InputMode::Browsing;
        self.path_input.clear();
    }

    pub fn is_browsing(&self) -> bool {
        self.mode == InputMode::Browsing
    }

    pub fn input_char(&mut self, c: char) {
        self.path_input.push(c);
    }

    pub fn input_backspace(&mut self) {
        self.path_input.pop();
    }

    pub fn cancel_browse(&mut self) {
        self.mode = InputMode::Normal;
        self.path_input.clear();
    }

    /// Select the typed path and close the prompt. The prompt stays open
    /// on failure so the path can be corrected.
    pub fn confirm_browse(&mut self) -> Result<()> {
        let path = media::parse_dropped_path(&self.path_input)
            .ok_or_else(|| CoachError::NotAFile(self.path_input.clone()))?;
        self.select_path(&path)?;
        self.cancel_browse();
        Ok(())
    }

    // Drop zone

    pub fn drag_enter(&mut self) {
        self.dragging = true;
    }

    pub fn drag_leave(&mut self) {
        self.dragging = false;
    }

    /// Accept dropped text. Only the first path is considered.
    pub fn drop_text(&mut self, text: &str) -> Result<()> {
        self.dragging = false;
        let path = media::parse_dropped_path(text)
            .ok_or_else(|| CoachError::NotAFile(text.trim().to_string()))?;
        debug!(path = %path.display(), "file dropped");
        self.select_path(&path)
    }
}
