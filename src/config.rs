//! Configuration management for dlhub

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::assistant::DEFAULT_FALLBACK_MESSAGE;
use crate::ranking::{ScoringProfile, MAX_RESULTS};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub search: SearchConfig,
    pub remote: RemoteConfig,
    pub navigation: NavigationConfig,
    pub assistant: AssistantConfig,
    #[serde(skip)]
    pub verbose: bool,
    /// File this configuration was read from, or would be written to
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Site root every catalog path is resolved against
    pub base_url: String,
    /// Read assistant replies aloud
    pub speech: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub profile: ScoringProfile,
    pub limit: usize,
    pub debounce_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RemoteConfig {
    pub enabled: bool,
    pub endpoint: Option<String>,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    pub delay_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssistantConfig {
    pub fallback_message: String,
    /// Where learned answers are kept; the cache directory when unset
    pub knowledge_file: Option<String>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            base_url: "https://downloadhub.example.com".to_string(),
            speech: false,
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            profile: ScoringProfile::Standard,
            limit: MAX_RESULTS,
            debounce_ms: 200,
        }
    }
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            endpoint: None,
            timeout_secs: 10,
        }
    }
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self { delay_ms: 1000 }
    }
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            fallback_message: DEFAULT_FALLBACK_MESSAGE.to_string(),
            knowledge_file: None,
        }
    }
}

impl Config {
    /// Result cap, never above the site-wide maximum
    pub fn result_limit(&self) -> usize {
        self.search.limit.clamp(1, MAX_RESULTS)
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.search.debounce_ms)
    }

    pub fn navigation_delay(&self) -> Duration {
        Duration::from_millis(self.navigation.delay_ms)
    }

    pub fn remote_timeout(&self) -> Duration {
        Duration::from_secs(self.remote.timeout_secs)
    }

    /// Endpoint to fetch from, if remote fetching is on and configured
    pub fn remote_endpoint(&self) -> Option<&str> {
        if !self.remote.enabled {
            return None;
        }
        self.remote
            .endpoint
            .as_deref()
            .map(str::trim)
            .filter(|e| !e.is_empty())
    }
}

fn project_dirs() -> Option<directories::ProjectDirs> {
    directories::ProjectDirs::from("com", "downloadhub", "dlhub")
}

/// Get the configuration file path
pub fn config_path() -> Result<PathBuf> {
    let config_dir = project_dirs()
        .context("Failed to determine config directory")?
        .config_dir()
        .to_path_buf();

    Ok(config_dir.join("config.toml"))
}

/// Load configuration from file or use defaults
pub fn load_config(custom_path: Option<&str>) -> Result<Config> {
    let path = if let Some(p) = custom_path {
        PathBuf::from(p)
    } else {
        config_path()?
    };

    let mut config = if path.exists() {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;
        toml::from_str::<Config>(&content)
            .with_context(|| format!("Failed to parse config from {:?}", path))?
    } else {
        Config::default()
    };
    config.source = Some(path);
    Ok(config)
}

/// Store the speech preference, leaving the rest of the file as it is
pub fn save_speech_preference(path: &Path, enabled: bool) -> Result<()> {
    let mut table: toml::Table = if path.exists() {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config from {:?}", path))?
    } else {
        toml::Table::new()
    };

    if !table.get("general").is_some_and(toml::Value::is_table) {
        table.insert("general".to_string(), toml::Value::Table(toml::Table::new()));
    }
    if let Some(general) = table.get_mut("general").and_then(toml::Value::as_table_mut) {
        general.insert("speech".to_string(), toml::Value::Boolean(enabled));
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory {:?}", parent))?;
    }
    let content = toml::to_string_pretty(&table)
        .context("Failed to serialize config")?;
    std::fs::write(path, content)
        .with_context(|| format!("Failed to write config to {:?}", path))?;

    tracing::debug!(?path, enabled, "Saved speech preference");
    Ok(())
}

/// Initialize configuration file with defaults
pub fn init_config(custom_path: Option<&str>) -> Result<PathBuf> {
    let path = match custom_path {
        Some(p) => PathBuf::from(p),
        None => config_path()?,
    };

    if path.exists() {
        println!("Configuration file already exists at {:?}", path);
        return Ok(path);
    }

    // Create directory if needed
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory {:?}", parent))?;
    }

    let content = toml::to_string_pretty(&Config::default())
        .context("Failed to serialize default config")?;

    std::fs::write(&path, content)
        .with_context(|| format!("Failed to write config to {:?}", path))?;

    println!("Configuration initialized at {:?}", path);
    Ok(path)
}

/// Show current configuration
pub fn show_config(config: &Config) -> Result<()> {
    let content = toml::to_string_pretty(config)
        .context("Failed to serialize config")?;
    println!("{}", content);
    Ok(())
}
