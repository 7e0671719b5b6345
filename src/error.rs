// Error types for playonme.
// Covers file intake, session teardown, configuration, and general IO errors.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoachError {
    #[error("Unsupported file type for {name}: {media_type}")]
    UnsupportedFileType { name: String, media_type: String },

    #[error("Not a readable file: {0}")]
    NotAFile(String),

    #[error("Analysis session is closed")]
    SessionClosed,

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CoachError>;
