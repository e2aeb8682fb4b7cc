// src/infra/config.rs — Configuration loading (TOML)

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::infra::errors::DeckError;
use crate::infra::paths;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub backend: BackendConfig,

    #[serde(default)]
    pub assets: AssetsConfig,

    #[serde(default)]
    pub transitions: TransitionsConfig,

    #[serde(default)]
    pub auth: AuthConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Gateway API root, including the `/api` prefix.
    pub base_url: String,
    pub timeout_seconds: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000/api".into(),
            timeout_seconds: 10,
        }
    }
}

impl BackendConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetsConfig {
    pub video_base: String,
    pub icon_host: String,
    /// Condition whose scene is loaded before the first search.
    pub initial_condition: String,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            video_base: "/static/videos".into(),
            icon_host: "http://openweathermap.org/img/wn".into(),
            initial_condition: "clear".into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransitionsConfig {
    pub greeting_fade_ms: u64,
    pub video_fade_ms: u64,
}

impl Default for TransitionsConfig {
    fn default() -> Self {
        Self {
            greeting_fade_ms: 800,
            video_fade_ms: 300,
        }
    }
}

impl TransitionsConfig {
    pub fn greeting_fade(&self) -> Duration {
        Duration::from_millis(self.greeting_fade_ms)
    }

    pub fn video_fade(&self) -> Duration {
        Duration::from_millis(self.video_fade_ms)
    }
}

pub const DEFAULT_DEMO_HINT: &str = "Demo: admin@weather.com / admin123";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Shown under the login form. An empty string hides it.
    pub demo_hint: Option<String>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            demo_hint: Some(DEFAULT_DEMO_HINT.into()),
        }
    }
}

impl AuthConfig {
    pub fn hint(&self) -> Option<&str> {
        self.demo_hint.as_deref().filter(|h| !h.trim().is_empty())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    /// Dashboard log file; defaults to the data directory.
    pub file: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".into(),
            file: None,
        }
    }
}

impl Config {
    /// Load config from file, falling back to defaults.
    pub fn load() -> anyhow::Result<Self> {
        let path = paths::config_file_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), DeckError> {
        let url = url::Url::parse(&self.backend.base_url)
            .map_err(|e| DeckError::Config(format!("backend.base_url: {e}")))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(DeckError::Config(format!(
                "backend.base_url: unsupported scheme '{}'",
                url.scheme()
            )));
        }
        if self.backend.timeout_seconds == 0 {
            return Err(DeckError::Config(
                "backend.timeout_seconds must be positive".into(),
            ));
        }
        Ok(())
    }

    /// Dashboard log file, honoring `[logging] file`.
    pub fn log_file(&self) -> std::path::PathBuf {
        match &self.logging.file {
            Some(f) => std::path::PathBuf::from(f),
            None => paths::log_file_path(),
        }
    }
}
