//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `<service>.toml` (`m1.toml`, `m2.toml`) in the working
//! directory. Every field has a sensible default so the file is optional.
//! Environment variables take precedence over file values. Fields left
//! unset fall back to the service's [`ServiceProfile`].

use serde::Deserialize;
use twinsvc_app::seed::{SeedMode, UnknownSeedMode};

use crate::service::ServiceProfile;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Startup seed settings.
    pub seed: SeedConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// TCP port. Unset means the profile's default port.
    pub port: Option<u16>,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// Startup seed configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SeedConfig {
    /// Run the seed routine at all.
    pub enabled: bool,
    /// Seed policy. Unset means the profile's default mode.
    pub mode: Option<SeedMode>,
}

impl Config {
    /// Load configuration for `profile` from its TOML file (if present)
    /// then apply environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration is invalid.
    pub fn load(profile: &ServiceProfile) -> Result<Self, ConfigError> {
        let mut config = Self::from_file(&profile.config_file())?;
        config.apply_overrides(profile, |key| std::env::var(key).ok())?;
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

    fn apply_overrides(
        &mut self,
        profile: &ServiceProfile,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(val) = lookup(&profile.env_var("HOST")) {
            self.server.host = val;
        }
        let port_key = profile.env_var("PORT");
        if let Some(val) = lookup(&port_key) {
            self.server.port = Some(parse_port(&port_key, &val)?);
        }
        let bind_key = profile.env_var("BIND");
        if let Some(val) = lookup(&bind_key) {
            let (host, port) = val.rsplit_once(':').ok_or_else(|| {
                ConfigError::Validation(format!("{bind_key}: expected host:port, got `{val}`"))
            })?;
            self.server.host = host.to_string();
            self.server.port = Some(parse_port(&bind_key, port)?);
        }
        if let Some(val) = lookup(&profile.env_var("LOG")) {
            self.logging.filter = val;
        }
        if let Some(val) = lookup("RUST_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = lookup(&profile.env_var("SEED_MODE")) {
            let mode: SeedMode = val
                .parse()
                .map_err(|err: UnknownSeedMode| ConfigError::Validation(err.to_string()))?;
            self.seed.mode = Some(mode);
        }
        Ok(())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == Some(0) {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        Ok(())
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self, profile: &ServiceProfile) -> String {
        let port = self.server.port.unwrap_or(profile.default_port);
        format!("{}:{port}", self.server.host)
    }

    /// Return the seed policy to apply, or `None` when seeding is disabled.
    #[must_use]
    pub fn seed_mode(&self, profile: &ServiceProfile) -> Option<SeedMode> {
        self.seed
            .enabled
            .then(|| self.seed.mode.unwrap_or(profile.default_seed_mode))
    }
}

fn parse_port(key: &str, raw: &str) -> Result<u16, ConfigError> {
    raw.parse()
        .map_err(|_| ConfigError::Validation(format!("{key}: invalid port `{raw}`")))
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "twinsvcd=info,twinsvc=info,tower_http=debug".to_string(),
        }
    }
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            mode: None,
        }
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
