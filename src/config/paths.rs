// Platform directory utilities.
// Resolves where the config file and log files live.

use std::path::PathBuf;

use directories::ProjectDirs;

const APP_NAME: &str = "playonme";

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", APP_NAME)
}

/// Base config directory (~/.config/playonme on Linux).
pub fn config_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().to_path_buf())
}

/// Path to the config file.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.json"))
}

/// Default log directory (~/.local/share/playonme/logs on Linux).
pub fn log_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.data_local_dir().join("logs"))
}
