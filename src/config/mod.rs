// Application configuration.
// Loads config.json from the platform config dir, with env overrides.

pub mod paths;
pub mod store;

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::catalog::{ModelSelection, PlanId};
use crate::error::{CoachError, Result};

/// Env var overriding the simulated analysis delay, in milliseconds.
pub const DELAY_ENV: &str = "PLAYONME_ANALYSIS_DELAY_MS";
/// Env var overriding the preselected model (`standard`, `federer`, `nadal`).
pub const MODEL_ENV: &str = "PLAYONME_DEFAULT_MODEL";
/// Env var overriding the current plan (`free`, `advanced`, `pro`, `elite`).
pub const PLAN_ENV: &str = "PLAYONME_CURRENT_PLAN";

/// User configuration. Missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// How long the simulated analysis takes.
    pub analysis_delay_ms: u64,
    /// Model preselected on the Upload view.
    pub default_model: ModelSelection,
    /// Plan marked as current on the Pricing view.
    pub current_plan: PlanId,
    /// Log filter used when PLAYONME_LOG is unset.
    pub log_level: String,
    /// Overrides the platform log directory.
    pub log_dir: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            analysis_delay_ms: 1000,
            default_model: ModelSelection::Standard,
            current_plan: PlanId::Free,
            log_level: "info".to_string(),
            log_dir: None,
        }
    }
}

impl AppConfig {
    /// Load from the platform config path, writing defaults on first run.
    /// Environment overrides are applied afterwards.
    ///
    /// Rejected overrides are returned alongside the config; the file values
    /// stay in effect for those settings.
    pub fn load() -> Result<(Self, Vec<CoachError>)> {
        Self::load_from(paths::config_path().as_deref(), |key| std::env::var(key).ok())
    }

    /// Load from `path` (defaults when None) and apply overrides read
    /// through `var`.
    pub fn load_from(
        path: Option<&Path>,
        var: impl Fn(&str) -> Option<String>,
    ) -> Result<(Self, Vec<CoachError>)> {
        let mut config = match path {
            Some(path) => Self::load_or_init(path)?,
            None => Self::default(),
        };
        let rejected = config.apply_env_overrides(var);
        Ok((config, rejected))
    }

    /// Read the config at `path`, or write defaults there if it is missing.
    pub fn load_or_init(path: &Path) -> Result<Self> {
        if let Some(config) = store::read_json(path)? {
            return Ok(config);
        }
        let config = Self::default();
        if let Err(e) = store::write_json(path, &config) {
            warn!(path = %path.display(), error = %e, "could not write default config");
        }
        Ok(config)
    }

    /// Apply every override `var` yields. A value that does not parse is
    /// skipped and reported; the other overrides still apply.
    pub fn apply_env_overrides(&mut self, var: impl Fn(&str) -> Option<String>) -> Vec<CoachError> {
        let mut rejected = Vec::new();

        if let Some(raw) = var(DELAY_ENV) {
            match raw.trim().parse() {
                Ok(ms) => self.analysis_delay_ms = ms,
                Err(_) => rejected.push(CoachError::Config(format!(
                    "{} must be milliseconds, got {:?}",
                    DELAY_ENV, raw
                ))),
            }
        }
        if let Some(raw) = var(MODEL_ENV) {
            match raw.parse() {
                Ok(model) => self.default_model = model,
                Err(e) => rejected.push(CoachError::Config(format!("{}: {}", MODEL_ENV, e))),
            }
        }
        if let Some(raw) = var(PLAN_ENV) {
            match raw.parse() {
                Ok(plan) => self.current_plan = plan,
                Err(e) => rejected.push(CoachError::Config(format!("{}: {}", PLAN_ENV, e))),
            }
        }

        rejected
    }

    pub fn analysis_delay(&self) -> Duration {
        Duration::from_millis(self.analysis_delay_ms)
    }

    /// Directory for log files, if one can be determined.
    pub fn resolved_log_dir(&self) -> Option<PathBuf> {
        self.log_dir.clone().or_else(paths::log_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.analysis_delay(), Duration::from_millis(1000));
        assert_eq!(config.default_model, ModelSelection::Standard);
        assert_eq!(config.current_plan, PlanId::Free);
    }

    #[test]
    fn test_load_or_init_writes_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");

        let config = AppConfig::load_or_init(&path).unwrap();
        assert_eq!(config, AppConfig::default());
        assert!(path.exists());

        let reread = AppConfig::load_or_init(&path).unwrap();
        assert_eq!(reread, config);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        fs::write(
            &path,
            r#"{ "default_model": "nadal", "current_plan": "pro", "unknown": true }"#,
        )
        .unwrap();

        let config = AppConfig::load_or_init(&path).unwrap();
        assert_eq!(config.default_model, ModelSelection::Nadal);
        assert_eq!(config.current_plan, PlanId::Pro);
        assert_eq!(config.analysis_delay_ms, 1000);
        assert_eq!(config.log_level, "info");
    }

    fn env<'a>(vars: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |key: &str| {
            vars.iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn test_env_overrides() {
        let mut config = AppConfig::default();
        assert!(config.apply_env_overrides(env(&[])).is_empty());
        assert_eq!(config, AppConfig::default());

        let rejected = config.apply_env_overrides(env(&[
            (DELAY_ENV, " 250 "),
            (MODEL_ENV, "Federer"),
            (PLAN_ENV, "pro"),
        ]));
        assert!(rejected.is_empty());
        assert_eq!(config.analysis_delay(), Duration::from_millis(250));
        assert_eq!(config.default_model, ModelSelection::Federer);
        assert_eq!(config.current_plan, PlanId::Pro);
    }

    #[test]
    fn test_bad_override_keeps_file_settings() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        fs::write(
            &path,
            r#"{ "default_model": "nadal", "current_plan": "elite", "analysis_delay_ms": 400 }"#,
        )
        .unwrap();

        let (config, rejected) = AppConfig::load_from(
            Some(&path),
            env(&[(DELAY_ENV, "soon"), (PLAN_ENV, "platinum")]),
        )
        .unwrap();

        assert_eq!(rejected.len(), 2);
        assert!(rejected.iter().all(|e| matches!(e, CoachError::Config(_))));
        assert!(rejected[0].to_string().contains(DELAY_ENV));
        assert_eq!(config.analysis_delay_ms, 400);
        assert_eq!(config.default_model, ModelSelection::Nadal);
        assert_eq!(config.current_plan, PlanId::Elite);
    }

    #[test]
    fn test_load_from_without_path_uses_defaults() {
        let (config, rejected) = AppConfig::load_from(None, env(&[(MODEL_ENV, "nadal")])).unwrap();
        assert!(rejected.is_empty());
        assert_eq!(config.default_model, ModelSelection::Nadal);
        assert_eq!(config.analysis_delay_ms, 1000);
    }

    #[test]
    fn test_log_dir_override() {
        let config = AppConfig {
            log_dir: Some(PathBuf::from("/tmp/playonme-logs")),
            ..AppConfig::default()
        };
        assert_eq!(
            config.resolved_log_dir(),
            Some(PathBuf::from("/tmp/playonme-logs"))
        );
    }
}
