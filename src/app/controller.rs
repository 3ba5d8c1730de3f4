use std::path::PathBuf;
use std::sync::Arc;

use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;

use crate::adapters::{RaspberryPiInfo, TomlConfigStore};
use crate::domain::{DetectionResult, DetectorConfig, DomainError};
use crate::infrastructure::init_logging;
use crate::ports::{BoardDetector, ConfigStore};

/// Wires configuration, logging and the detector together for host applications.
pub struct DetectorController {
    config: DetectorConfig,
    config_store: Arc<dyn ConfigStore>,
    detector: Arc<dyn BoardDetector>,
    _log_guard: Option<WorkerGuard>,
}

impl DetectorController {
    /// Initialize from the default configuration directory.
    pub fn new() -> Result<Self, DomainError> {
        Self::with_store(Arc::new(TomlConfigStore::new()?))
    }

    /// Initialize from an explicit configuration store.
    pub fn with_store(config_store: Arc<dyn ConfigStore>) -> Result<Self, DomainError> {
        let config = config_store.load()?;

        let log_guard = init_logging(
            &config_store.logs_dir(),
            &config.logging.level,
            config.logging.file_logging,
        )?;

        let detector = Arc::new(RaspberryPiInfo::from_config(&config));

        info!(
            cpuinfo = ?config.cpuinfo_path,
            base_label = %config.base_label,
            overrides = config.revisions.len(),
            "DetectorController initialized"
        );

        Ok(Self {
            config,
            config_store,
            detector,
            _log_guard: log_guard,
        })
    }

    /// Run a detection with the configured detector.
    pub fn detect(&self) -> DetectionResult {
        self.detector.detect()
    }

    pub fn detector(&self) -> Arc<dyn BoardDetector> {
        Arc::clone(&self.detector)
    }

    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    pub fn config_path(&self) -> PathBuf {
        self.config_store.config_path()
    }

    pub fn logs_dir(&self) -> PathBuf {
        self.config_store.logs_dir()
    }
}
