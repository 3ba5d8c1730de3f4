use std::path::PathBuf;

use crate::domain::{DetectorConfig, DomainError};

/// Configuration store port for persisting and loading detector configuration.
pub trait ConfigStore: Send + Sync {
    /// Load configuration from persistent storage.
    /// Creates default config if none exists.
    fn load(&self) -> Result<DetectorConfig, DomainError>;

    /// Save configuration to persistent storage.
    fn save(&self, config: &DetectorConfig) -> Result<(), DomainError>;

    /// Get the path to the configuration file.
    fn config_path(&self) -> PathBuf;

    /// Get the path to the logs directory.
    fn logs_dir(&self) -> PathBuf;
}
