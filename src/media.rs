// Media file intake.
// Resolves a path into a file reference with a declared media type.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CoachError, Result};

/// Extension to media type table. Lookups are case-insensitive.
const MEDIA_TYPES: &[(&str, &str)] = &[
    ("mp4", "video/mp4"),
    ("m4v", "video/x-m4v"),
    ("webm", "video/webm"),
    ("mov", "video/quicktime"),
    ("mkv", "video/x-matroska"),
    ("avi", "video/x-msvideo"),
    ("ogv", "video/ogg"),
    ("mpeg", "video/mpeg"),
    ("mpg", "video/mpeg"),
    ("3gp", "video/3gpp"),
    ("wmv", "video/x-ms-wmv"),
    ("mp3", "audio/mpeg"),
    ("wav", "audio/wav"),
    ("ogg", "audio/ogg"),
    ("png", "image/png"),
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("gif", "image/gif"),
    ("txt", "text/plain"),
    ("csv", "text/csv"),
    ("json", "application/json"),
    ("pdf", "application/pdf"),
];

/// Declared media type for a path, derived from its extension.
/// Returns an empty string when the type is unknown.
pub fn media_type_for(path: &Path) -> &'static str {
    let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
        return "";
    };
    MEDIA_TYPES
        .iter()
        .find(|(known, _)| known.eq_ignore_ascii_case(ext))
        .map(|(_, media_type)| *media_type)
        .unwrap_or("")
}

/// Check whether a media type belongs to the video category.
pub fn is_video(media_type: &str) -> bool {
    media_type.starts_with("video/")
}

/// A selected file reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoFile {
    pub path: PathBuf,
    /// File name without directories.
    pub name: String,
    pub size_bytes: u64,
    pub media_type: String,
}

impl VideoFile {
    /// Build a file reference from a path on disk.
    ///
    /// The file must exist and be a regular file. The media type is not
    /// checked here; see [`VideoFile::require_video`].
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let metadata =
            fs::metadata(path).map_err(|_| CoachError::NotAFile(path.display().to_string()))?;
        if !metadata.is_file() {
            return Err(CoachError::NotAFile(path.display().to_string()));
        }

        Ok(Self {
            path: path.to_path_buf(),
            name: display_name(path),
            size_bytes: metadata.len(),
            media_type: media_type_for(path).to_string(),
        })
    }

    /// Build a file reference without touching the filesystem.
    #[cfg(test)]
    pub fn new(name: impl Into<String>, size_bytes: u64, media_type: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            path: PathBuf::from(&name),
            name,
            size_bytes,
            media_type: media_type.into(),
        }
    }

    pub fn is_video(&self) -> bool {
        is_video(&self.media_type)
    }

    /// Reject anything that is not declared as video.
    pub fn require_video(self) -> Result<Self> {
        if self.is_video() {
            Ok(self)
        } else {
            Err(CoachError::UnsupportedFileType {
                name: self.name,
                media_type: if self.media_type.is_empty() {
                    "unknown".to_string()
                } else {
                    self.media_type
                },
            })
        }
    }

    /// Size in megabytes with one decimal.
    pub fn size_label(&self) -> String {
        format!("{:.1} MB", self.size_bytes as f64 / (1024.0 * 1024.0))
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Turn pasted or typed text into a path.
///
/// Terminals paste dropped files as shell-quoted or `file://` paths, and a
/// drop of several files arrives as one line per file. Only the first is used.
pub fn parse_dropped_path(text: &str) -> Option<PathBuf> {
    let first = text.lines().map(str::trim).find(|l| !l.is_empty())?;
    let unquoted = first
        .strip_prefix('\'')
        .and_then(|s| s.strip_suffix('\''))
        .or_else(|| first.strip_prefix('"').and_then(|s| s.strip_suffix('"')))
        .unwrap_or(first);
    let path = unquoted.strip_prefix("file://").unwrap_or(unquoted);
    let unescaped = path.replace("\\ ", " ");
    if unescaped.is_empty() {
        None
    } else {
        Some(PathBuf::from(unescaped))
    }
}
