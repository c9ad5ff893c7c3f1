//! Configuration loading for foco
//!
//! Everything is optional: a missing file yields the defaults and a partial
//! file only overrides the keys it names.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::paths::Paths;

/// foco configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub timer: TimerSection,
    pub haptic: HapticSection,
    pub mood: MoodSection,
}

/// `[timer]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TimerSection {
    /// Duration the countdown starts with, in minutes
    pub default_minutes: u32,
}

impl Default for TimerSection {
    fn default() -> Self {
        Self { default_minutes: 25 }
    }
}

/// `[haptic]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HapticSection {
    /// Backend name: auto, command, notify-send, bell or none
    pub backend: String,
    /// Command for the `command` backend; `{ms}` is replaced by the duration
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
}

impl Default for HapticSection {
    fn default() -> Self {
        Self {
            backend: "auto".to_string(),
            command: None,
        }
    }
}

/// `[mood]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MoodSection {
    /// chrono format string for entry times
    pub time_format: String,
    /// Label overrides keyed by mood key
    pub labels: BTreeMap<String, String>,
}

impl Default for MoodSection {
    fn default() -> Self {
        Self {
            time_format: "%H:%M".to_string(),
            labels: BTreeMap::new(),
        }
    }
}

impl Config {
    /// Load configuration from the default location, or use defaults
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from `path`, falling back to defaults when absent
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;

        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Get the default config file path
    pub fn config_path() -> std::path::PathBuf {
        Paths::new().config_file()
    }

    /// Render the effective configuration as TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("nope.toml")).unwrap();
        assert_eq!(config.timer.default_minutes, 25);
        assert_eq!(config.haptic.backend, "auto");
        assert!(config.haptic.command.is_none());
        assert_eq!(config.mood.time_format, "%H:%M");
        assert!(config.mood.labels.is_empty());
    }

    #[test]
    fn test_partial_file_overrides() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            r#"
[timer]
default_minutes = 50

[haptic]
backend = "command"
command = "termux-vibrate -d {ms}"

[mood.labels]
tired = "zzz"
"#,
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.timer.default_minutes, 50);
        assert_eq!(config.haptic.backend, "command");
        assert_eq!(config.haptic.command.as_deref(), Some("termux-vibrate -d {ms}"));
        assert_eq!(config.mood.time_format, "%H:%M");
        assert_eq!(config.mood.labels.get("tired").map(String::as_str), Some("zzz"));
    }

    #[test]
    fn test_malformed_file_reports_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[timer\ndefault_minutes = ").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(format!("{err}").contains("config.toml"));
    }

    #[test]
    fn test_to_toml_roundtrips_defaults() {
        let rendered = Config::default().to_toml().unwrap();
        assert!(rendered.contains("default_minutes = 25"));
        let parsed: Config = toml::from_str(&rendered).unwrap();
        assert_eq!(parsed.haptic.backend, "auto");
    }
}
