//! Layered service configuration.
//!
//! Sources, highest priority last:
//! 1. Built-in defaults
//! 2. `aztro.toml` in the working directory, or the file passed with `--config`
//! 3. Environment variables (`AZTRO_*`, `__` separates sections)
//!
//! `AZTRO_SERVER__PORT=9000` maps to `server.port`. `AZTRO_LOG` on its own is
//! the log filter directive and is left to the subscriber.

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ephemeris::{DEFAULT_STRENGTH_JITTER, LAHIRI_AYANAMSA};
use crate::locations;
use crate::profile::parse_birth_time;

pub const DEFAULT_CONFIG_FILE: &str = "aztro.toml";
pub const ENV_PREFIX: &str = "AZTRO_";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration error: {0}")]
    Figment(#[from] figment::Error),

    #[error("Invalid configuration value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}

impl ConfigError {
    fn invalid(field: &str, reason: impl Into<String>) -> Self {
        ConfigError::InvalidValue {
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            workers: 4,
        }
    }
}

impl ServerConfig {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Degrees subtracted from tropical longitudes.
    pub ayanamsa: f64,
    /// Half-width of the seeded strength jitter; 0 disables it.
    pub strength_jitter: u32,
    pub default_location_id: String,
    pub default_time_of_birth: String,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            ayanamsa: LAHIRI_AYANAMSA,
            strength_jitter: DEFAULT_STRENGTH_JITTER,
            default_location_id: "delhi".to_string(),
            default_time_of_birth: "12:00".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub chart: ChartConfig,
    #[serde(default)]
    pub log: LogConfig,
}

impl AppConfig {
    /// Provider chain; public so callers and tests can layer more on top.
    pub fn figment(path: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        let file = path
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
        if file.exists() {
            figment = figment.merge(Toml::file(file));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).ignore(&["log"]).split("__"))
    }

    /// Load and validate. An explicit `path` must exist.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            if !path.exists() {
                return Err(ConfigError::invalid(
                    "config",
                    format!("file {} does not exist", path.display()),
                ));
            }
        }
        let config: AppConfig = Self::figment(path).extract()?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.workers == 0 {
            return Err(ConfigError::invalid("server.workers", "must be at least 1"));
        }
        let ayanamsa = self.chart.ayanamsa;
        if !(ayanamsa > 0.0 && ayanamsa < 30.0) {
            return Err(ConfigError::invalid(
                "chart.ayanamsa",
                format!("{ayanamsa} is outside (0, 30) degrees"),
            ));
        }
        if locations::get(&self.chart.default_location_id).is_none() {
            return Err(ConfigError::invalid(
                "chart.default_location_id",
                format!("unknown location '{}'", self.chart.default_location_id),
            ));
        }
        if parse_birth_time(&self.chart.default_time_of_birth).is_err() {
            return Err(ConfigError::invalid(
                "chart.default_time_of_birth",
                format!("'{}' is not HH:MM", self.chart.default_time_of_birth),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn defaults_are_valid() {
        let config = AppConfig::default();
        config.validate().unwrap();
        assert_eq!(config.server.address(), "0.0.0.0:3000");
        assert_eq!(config.chart.strength_jitter, 5);
    }

    #[test]
    fn toml_and_env_layers_merge() {
        Jail::expect_with(|jail| {
            jail.create_file(
                DEFAULT_CONFIG_FILE,
                r#"
[server]
port = 8080
workers = 2

[chart]
default_location_id = "pune"
"#,
            )?;
            jail.set_env("AZTRO_SERVER__PORT", "9090");
            jail.set_env("AZTRO_CHART__STRENGTH_JITTER", "0");
            jail.set_env("AZTRO_LOG", "debug");

            let config = AppConfig::load(None).map_err(|e| e.to_string())?;
            assert_eq!(config.server.port, 9090);
            assert_eq!(config.server.workers, 2);
            assert_eq!(config.chart.default_location_id, "pune");
            assert_eq!(config.chart.strength_jitter, 0);
            assert_eq!(config.log.level, "info");
            Ok(())
        });
    }

    #[test]
    fn explicit_file_is_read() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[chart]\nayanamsa = 23.85\n[log]\nlevel = \"warn\"").unwrap();
        let config = AppConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.chart.ayanamsa, 23.85);
        assert_eq!(config.log.level, "warn");
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let err = AppConfig::load(Some(Path::new("/nonexistent/aztro.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }

    #[test]
    fn validation_rejects_bad_values() {
        let mut config = AppConfig::default();
        config.server.workers = 0;
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.chart.ayanamsa = 31.0;
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.chart.default_location_id = "atlantis".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("chart.default_location_id"));

        let mut config = AppConfig::default();
        config.chart.default_time_of_birth = "noon".to_string();
        assert!(config.validate().is_err());
    }
}
