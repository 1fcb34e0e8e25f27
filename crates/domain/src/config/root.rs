use serde::{Deserialize, Serialize};

use super::backend::BackendConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;

/// Main configuration structure for geowrr
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Data sources and protocol settings
    #[serde(default)]
    pub backend: BackendConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. geowrr.toml in current directory
    /// 3. /etc/geowrr/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new("geowrr.toml").exists() {
            Self::from_file("geowrr.toml")?
        } else if std::path::Path::new("/etc/geowrr/config.toml").exists() {
            Self::from_file("/etc/geowrr/config.toml")?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(zones) = overrides.zones {
            self.backend.zones = zones;
        }
        if let Some(sites) = overrides.sites {
            self.backend.sites = sites;
        }
        if let Some(geoip) = overrides.geoip_database {
            self.backend.geoip_database = geoip;
        }
        if let Some(seed) = overrides.seed {
            self.backend.seed = Some(seed);
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let paths = [
            ("zones", &self.backend.zones),
            ("sites", &self.backend.sites),
            ("geoip_database", &self.backend.geoip_database),
        ];
        for (key, value) in paths {
            if value.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "backend.{} cannot be empty",
                    key
                )));
            }
        }

        if self.logging.level.trim().is_empty() {
            return Err(ConfigError::Validation(
                "logging.level cannot be empty".to_string(),
            ));
        }

        let banner = &self.backend.banner;
        if banner.is_empty() {
            return Err(ConfigError::Validation(
                "backend.banner cannot be empty".to_string(),
            ));
        }
        if banner.contains(['\t', '\n', '\r']) {
            return Err(ConfigError::Validation(
                "backend.banner cannot contain tabs or line breaks".to_string(),
            ));
        }

        Ok(())
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub zones: Option<String>,
    pub sites: Option<String>,
    pub geoip_database: Option<String>,
    pub seed: Option<u64>,
    pub log_level: Option<String>,
}
