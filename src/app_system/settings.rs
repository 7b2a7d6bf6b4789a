use std::sync::Arc;
use std::time::Duration;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use thiserror::Error;

use crate::remote::{seed, MemoryTable, RemoteError, RemoteTable, RestTableClient, Table};

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("remote.url and remote.api_key are required in rest mode")]
    MissingCredentials,
    #[error("could not connect remote tables: {0}")]
    Remote(#[from] RemoteError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RemoteMode {
    /// Seeded in-process tables, for demos and offline use.
    Memory,
    Rest,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub remote: RemoteSettings,
    pub store: StoreSettings,
    pub interaction: InteractionSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RemoteSettings {
    pub mode: RemoteMode,
    pub url: String,
    pub api_key: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StoreSettings {
    pub queue_depth: usize,
}

#[derive(Debug, Deserialize, Clone)]
pub struct InteractionSettings {
    /// Answer given to delete confirmations when no user is present.
    pub auto_confirm: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingSettings {
    pub level: String,
    pub format: LogFormat,
}

impl Settings {
    /// Defaults, then `config/laundry-desk.*` if present, then
    /// `LAUNDRY_DESK__SECTION__KEY` environment variables.
    pub fn load() -> Result<Self, SettingsError> {
        let config = Self::defaults()?
            .add_source(File::with_name("config/laundry-desk").required(false))
            .add_source(Environment::with_prefix("LAUNDRY_DESK").prefix_separator("__").separator("__"))
            .build()?;
        Ok(config.try_deserialize()?)
    }

    fn defaults() -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        Config::builder()
            .set_default("remote.mode", "memory")?
            .set_default("remote.url", "")?
            .set_default("remote.api_key", "")?
            .set_default("remote.timeout_secs", 10)?
            .set_default("store.queue_depth", 32)?
            .set_default("interaction.auto_confirm", false)?
            .set_default("logging.level", "info")?
            .set_default("logging.format", "text")
    }
}

impl RemoteSettings {
    /// Builds the table backend selected by `mode`. Memory mode starts with
    /// the services seed and no orders.
    pub async fn connect(&self) -> Result<Arc<dyn RemoteTable>, SettingsError> {
        match self.mode {
            RemoteMode::Memory => {
                let table = MemoryTable::new();
                table.seed(Table::Services, seed::service_rows()?).await;
                Ok(Arc::new(table))
            }
            RemoteMode::Rest => {
                if self.url.is_empty() || self.api_key.is_empty() {
                    return Err(SettingsError::MissingCredentials);
                }
                let client = RestTableClient::new(&self.url, &self.api_key, Duration::from_secs(self.timeout_secs))?;
                Ok(Arc::new(client))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::remote::Query;

    fn default_settings() -> Settings {
        Settings::defaults().unwrap().build().unwrap().try_deserialize().unwrap()
    }

    #[test]
    fn defaults_deserialize() {
        let settings = default_settings();
        assert_eq!(settings.remote.mode, RemoteMode::Memory);
        assert_eq!(settings.remote.timeout_secs, 10);
        assert_eq!(settings.store.queue_depth, 32);
        assert!(!settings.interaction.auto_confirm);
        assert_eq!(settings.logging.format, LogFormat::Text);
    }

    #[tokio::test]
    async fn memory_mode_is_seeded_with_services() {
        let remote = default_settings().remote.connect().await.unwrap();
        let services = remote.select(Table::Services, &Query::all()).await.unwrap();
        assert_eq!(services.len(), 14);
        assert!(remote.select(Table::Orders, &Query::all()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn rest_mode_requires_credentials() {
        let mut settings = default_settings().remote;
        settings.mode = RemoteMode::Rest;
        assert!(matches!(settings.connect().await, Err(SettingsError::MissingCredentials)));
    }
}
