use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::history::{RetentionPolicy, DEFAULT_HIGH_WATER, DEFAULT_LOW_WATER};
use crate::puzzle::MAX_DISK_COUNT;
use crate::rephrase::{HttpRephraser, Rephraser, TemplateRephraser, DEFAULT_TIMEOUT_MS};
use crate::session::SessionSettings;
use crate::tutor::DEFAULT_CONVERSATION_LIMIT;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub game: GameConfig,
    #[serde(default)]
    pub history: HistoryConfig,
    #[serde(default)]
    pub rephrase: RephraseConfig,
    #[serde(default)]
    pub tutor: TutorConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub disk_count: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self { disk_count: 3 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    pub high_water: usize,
    pub low_water: usize,
    pub conversation_limit: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            high_water: DEFAULT_HIGH_WATER,
            low_water: DEFAULT_LOW_WATER,
            conversation_limit: DEFAULT_CONVERSATION_LIMIT,
        }
    }
}

/// Where tutor replies get rephrased
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RephraseMode {
    /// Local formatting only
    #[default]
    Off,
    /// Offline phrase templates
    Templates,
    /// Remote service at `endpoint`
    Http,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RephraseConfig {
    pub mode: RephraseMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    pub timeout_ms: u64,
}

impl Default for RephraseConfig {
    fn default() -> Self {
        Self {
            mode: RephraseMode::Off,
            endpoint: None,
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TutorConfig {
    pub idle_after_secs: u64,
}

impl Default for TutorConfig {
    fn default() -> Self {
        Self { idle_after_secs: 30 }
    }
}

impl Config {
    /// Load configuration from file, creating default if it doesn't exist
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load from an explicit path, writing defaults there on first use
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            let config = Config::default();
            config.save_to(path)?;
            return Ok(config);
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        let config: Config = toml::from_str(&contents).context("Failed to parse config file")?;
        config.validate()?;

        Ok(config)
    }

    /// Save configuration to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let toml_string = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(path, toml_string).context("Failed to write config file")?;

        Ok(())
    }

    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir().context("Could not determine home directory")?;

        Ok(home.join(".hanoibuddy").join("config.toml"))
    }

    pub fn validate(&self) -> Result<()> {
        if self.game.disk_count == 0 || self.game.disk_count > MAX_DISK_COUNT {
            bail!("game.disk_count must be between 1 and {}", MAX_DISK_COUNT);
        }
        self.retention()?;
        if self.history.conversation_limit == 0 {
            bail!("history.conversation_limit must be at least 1");
        }
        if self.rephrase.mode == RephraseMode::Http
            && self.rephrase.endpoint.as_deref().map_or(true, |e| e.trim().is_empty())
        {
            bail!("rephrase.endpoint is required when rephrase.mode = \"http\"");
        }
        if self.rephrase.timeout_ms == 0 {
            bail!("rephrase.timeout_ms must be positive");
        }
        Ok(())
    }

    pub fn retention(&self) -> Result<RetentionPolicy> {
        Ok(RetentionPolicy::new(self.history.high_water, self.history.low_water)?)
    }

    pub fn session_settings(&self) -> Result<SessionSettings> {
        Ok(SessionSettings {
            retention: self.retention()?,
            conversation_limit: self.history.conversation_limit,
            idle_after: Duration::from_secs(self.tutor.idle_after_secs),
        })
    }

    /// Build the configured rephraser, if any
    pub fn rephraser(&self) -> Result<Option<Box<dyn Rephraser>>> {
        match self.rephrase.mode {
            RephraseMode::Off => Ok(None),
            RephraseMode::Templates => Ok(Some(Box::new(TemplateRephraser::new()))),
            RephraseMode::Http => {
                let endpoint = self
                    .rephrase
                    .endpoint
                    .as_deref()
                    .context("rephrase.endpoint is not set")?;
                let rephraser = HttpRephraser::with_timeout(
                    endpoint,
                    Duration::from_millis(self.rephrase.timeout_ms),
                )?;
                Ok(Some(Box::new(rephraser)))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.game.disk_count, 3);
        assert_eq!(config.history.high_water, 50);
        assert_eq!(config.history.low_water, 30);
        assert_eq!(config.rephrase.mode, RephraseMode::Off);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config: Config = toml::from_str("[game]\ndisk_count = 5\n").unwrap();
        assert_eq!(config.game.disk_count, 5);
        assert_eq!(config.tutor.idle_after_secs, 30);
        assert_eq!(config.rephrase.timeout_ms, 8000);
    }

    #[test]
    fn test_http_mode_requires_endpoint() {
        let mut config = Config::default();
        config.rephrase.mode = RephraseMode::Http;
        assert!(config.validate().is_err());

        config.rephrase.endpoint = Some("http://localhost:8888/rephrase".to_string());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_watermarks_rejected() {
        let mut config = Config::default();
        config.history.low_water = 60;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_creates_default_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config, Config::default());
        assert!(path.exists());
    }

    #[test]
    fn test_save_and_reload() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.game.disk_count = 6;
        config.rephrase.mode = RephraseMode::Templates;
        config.save_to(&path).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("mode = \"templates\""));

        let reloaded = Config::load_from(&path).unwrap();
        assert_eq!(reloaded, config);
    }

    #[test]
    fn test_invalid_file_rejected_on_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[game]\ndisk_count = 0\n").unwrap();

        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn test_huge_disk_count_rejected() {
        let mut config = Config::default();
        config.game.disk_count = MAX_DISK_COUNT;
        assert!(config.validate().is_ok());

        config.game.disk_count = 4_000_000_000;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rephraser_selection() {
        let mut config = Config::default();
        assert!(config.rephraser().unwrap().is_none());

        config.rephrase.mode = RephraseMode::Templates;
        assert_eq!(config.rephraser().unwrap().map(|r| r.name()), Some("templates"));
    }
}
