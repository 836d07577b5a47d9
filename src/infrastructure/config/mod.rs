//! Configuration management

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::application::errors::ConfigError;

/// Service configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub bot: BotConfig,
    pub database: DatabaseConfig,
    pub adapters: AdaptersConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct BotConfig {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct DatabaseConfig {
    pub path: PathBuf,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct AdaptersConfig {
    pub http: Option<HttpConfig>,
    pub console: Option<ConsoleConfig>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct HttpConfig {
    pub enabled: bool,
    pub bind: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ConsoleConfig {
    pub enabled: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bot: BotConfig {
                name: "listr".to_string(),
            },
            database: DatabaseConfig {
                path: PathBuf::from("listr.db"),
            },
            adapters: AdaptersConfig {
                http: Some(HttpConfig {
                    enabled: true,
                    bind: "0.0.0.0:8080".to_string(),
                }),
                console: Some(ConsoleConfig { enabled: true }),
            },
        }
    }
}

impl Config {
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let content = std::fs::read_to_string(&path)
            .map_err(|e| ConfigError::Parse(format!("Failed to read config: {}", e)))?;

        serde_yaml::from_str(&content)
            .map_err(|e| ConfigError::Parse(format!("Failed to parse config: {}", e)))
    }

    pub fn save(&self, path: impl Into<PathBuf>) -> Result<(), ConfigError> {
        let content = serde_yaml::to_string(self)
            .map_err(|e| ConfigError::Parse(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path.into(), content)
            .map_err(|e| ConfigError::Parse(format!("Failed to write config: {}", e)))
    }

    /// Build a config from environment variables, for deployments that
    /// ship no config file. `PORT` rebinds the webhook (the hosting
    /// platform assigns it), `LISTR_DB` relocates the database.
    pub fn load_env() -> Self {
        let mut config = Config::default();

        if let Ok(db) = std::env::var("LISTR_DB") {
            config.database.path = PathBuf::from(db);
        }

        if let Ok(port) = std::env::var("PORT") {
            if let Some(ref mut http) = config.adapters.http {
                http.bind = format!("0.0.0.0:{}", port);
                http.enabled = true;
            }
        }

        config
    }

    /// The webhook bind address, when the http adapter is enabled.
    pub fn http_bind(&self) -> Option<&str> {
        self.adapters
            .http
            .as_ref()
            .filter(|http| http.enabled)
            .map(|http| http.bind.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_roundtrips_through_yaml() {
        let config = Config::default();
        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed: Config = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed.bot.name, "listr");
        assert_eq!(parsed.database.path, PathBuf::from("listr.db"));
        assert_eq!(parsed.http_bind(), Some("0.0.0.0:8080"));
    }

    #[test]
    fn test_disabled_http_yields_no_bind() {
        let mut config = Config::default();
        config.adapters.http.as_mut().unwrap().enabled = false;
        assert_eq!(config.http_bind(), None);
    }
}
