use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::{env, fs, path::Path};

/// Default upstream endpoint for current weather.
pub const DEFAULT_API_URL: &str = "https://api.openweathermap.org/data/2.5/weather";

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Upstream provider settings: base endpoint and credential. Supplied once
/// at startup and immutable for the lifetime of the service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// API key for the upstream provider. Treated as a secret: never logged.
    #[serde(default)]
    pub api_key: String,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            api_key: String::new(),
        }
    }
}

/// Top-level configuration.
///
/// Example TOML:
/// ```toml
/// bind_addr = "127.0.0.1:8080"
///
/// [provider]
/// api_key = "..."
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    #[serde(default)]
    pub provider: ProviderConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            provider: ProviderConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration: optional TOML file, then environment overrides
    /// (`OPENWEATHER_API_KEY`, `OPENWEATHER_API_URL`, `WEATHER_BIND_ADDR`),
    /// then validation.
    ///
    /// With an explicit `path` the file must exist; without one, a missing
    /// file just means defaults plus environment.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut cfg = match path {
            Some(p) => Self::from_file(p)?,
            None => {
                let default_path = Path::new("weather.toml");
                if default_path.exists() {
                    Self::from_file(default_path)?
                } else {
                    Self::default()
                }
            }
        };

        cfg.apply_env_overrides();
        cfg.validate()?;

        Ok(cfg)
    }

    fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(key) = env::var("OPENWEATHER_API_KEY") {
            self.provider.api_key = key;
        }
        if let Ok(url) = env::var("OPENWEATHER_API_URL") {
            self.provider.api_url = url;
        }
        if let Ok(addr) = env::var("WEATHER_BIND_ADDR") {
            self.bind_addr = addr;
        }
    }

    /// Reject configurations that cannot serve a single request.
    pub fn validate(&self) -> Result<()> {
        if self.provider.api_key.trim().is_empty() {
            bail!(
                "No API key configured.\n\
                 Hint: set OPENWEATHER_API_KEY or add `api_key` under [provider] in the config file."
            );
        }
        if self.provider.api_url.trim().is_empty() {
            bail!("Provider API URL must not be empty.");
        }
        Ok(())
    }
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_bind_addr() -> String {
    DEFAULT_BIND_ADDR.to_string()
}
