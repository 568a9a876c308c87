//! Configuration loading: TOML file with environment variable overrides.
//!
//! Looks for `quill.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use std::time::Duration;

use serde::Deserialize;

use quill_adapter_storage_memory::Latency;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Artificial storage delays.
    pub latency: LatencyConfig,
    /// Page rendering settings.
    pub pages: PagesConfig,
    /// Sample data.
    pub seed: SeedConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// TCP port.
    pub port: u16,
    /// Directory served under `/assets`, if any.
    pub assets_dir: Option<String>,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// Delay applied to each repository operation, in milliseconds.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LatencyConfig {
    pub list_ms: u64,
    pub get_ms: u64,
    pub create_ms: u64,
}

/// Page rendering configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct PagesConfig {
    /// How long a page waits for its data before rendering a loading page.
    pub render_budget_ms: u64,
}

/// Sample data toggle.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SeedConfig {
    /// Start with the six sample tales.
    pub enabled: bool,
}

impl Config {
    /// Load configuration from `quill.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("quill.toml")?;
        config.apply_overrides(|name| std::env::var(name).ok());
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(val) = var("QUILL_HOST") {
            self.server.host = val;
        }
        if let Some(val) = var("QUILL_PORT")
            && let Ok(port) = val.parse()
        {
            self.server.port = port;
        }
        if let Some(val) = var("QUILL_BIND")
            && let Some((host, port)) = val.rsplit_once(':')
        {
            self.server.host = host.to_string();
            if let Ok(port) = port.parse() {
                self.server.port = port;
            }
        }
        if let Some(val) = var("QUILL_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = var("RUST_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = var("QUILL_LATENCY_MS")
            && let Ok(ms) = val.parse()
        {
            self.latency = LatencyConfig::uniform(ms);
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        Ok(())
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Repository delays.
    #[must_use]
    pub fn latency(&self) -> Latency {
        Latency {
            list: Duration::from_millis(self.latency.list_ms),
            get: Duration::from_millis(self.latency.get_ms),
            create: Duration::from_millis(self.latency.create_ms),
        }
    }

    /// How long a page waits for a query before showing the loading page.
    #[must_use]
    pub fn render_budget(&self) -> Duration {
        Duration::from_millis(self.pages.render_budget_ms)
    }
}

impl LatencyConfig {
    fn uniform(ms: u64) -> Self {
        Self {
            list_ms: ms,
            get_ms: ms,
            create_ms: ms,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            assets_dir: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "quilld=info,quill=info,tower_http=debug".to_string(),
        }
    }
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self {
            list_ms: 500,
            get_ms: 300,
            create_ms: 500,
        }
    }
}

impl Default for PagesConfig {
    fn default() -> Self {
        Self {
            render_budget_ms: 750,
        }
    }
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
