use std::fs;
use std::path::PathBuf;

use tracing::{debug, info, warn};

use crate::domain::{DetectorConfig, DomainError};
use crate::ports::ConfigStore;

/// TOML-based configuration store.
pub struct TomlConfigStore {
    data_dir: PathBuf,
}

impl TomlConfigStore {
    /// Create a store in the OS-specific configuration directory.
    /// - Linux: ~/.config/raspberry-pi-info/
    pub fn new() -> Result<Self, DomainError> {
        let data_dir = dirs::config_dir()
            .map(|p| p.join("raspberry-pi-info"))
            .ok_or_else(|| {
                DomainError::Config("Could not find configuration directory".to_string())
            })?;

        Ok(Self::with_dir(data_dir))
    }

    /// Create a store rooted at `data_dir`.
    pub fn with_dir(data_dir: impl Into<PathBuf>) -> Self {
        let data_dir = data_dir.into();
        debug!(data_dir = ?data_dir, "ConfigStore initialized");
        Self { data_dir }
    }
}

impl ConfigStore for TomlConfigStore {
    fn load(&self) -> Result<DetectorConfig, DomainError> {
        let config_path = self.config_path();

        if config_path.exists() {
            debug!(path = ?config_path, "Loading configuration");
            let content = fs::read_to_string(&config_path)?;
            let config: DetectorConfig = toml::from_str(&content)?;

            for (code, info) in &config.revisions {
                if info.has_empty_field() {
                    warn!(code = %code, "Revision override has empty fields");
                }
            }

            info!(
                path = ?config_path,
                overrides = config.revisions.len(),
                "Configuration loaded"
            );
            Ok(config)
        } else {
            info!(path = ?config_path, "Configuration file not found, creating default");
            let config = DetectorConfig::new();
            self.save(&config)?;
            Ok(config)
        }
    }

    fn save(&self, config: &DetectorConfig) -> Result<(), DomainError> {
        let config_path = self.config_path();

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(config)?;
        fs::write(&config_path, content)?;

        info!(path = ?config_path, "Configuration saved");
        Ok(())
    }

    fn config_path(&self) -> PathBuf {
        self.data_dir.join("config.toml")
    }

    fn logs_dir(&self) -> PathBuf {
        self.data_dir.join("logs")
    }
}
