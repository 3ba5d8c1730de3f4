use std::collections::HashMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::detection::DEFAULT_BASE_LABEL;
use super::revision::RevisionInfo;

/// Default location of the kernel CPU info file.
pub const DEFAULT_CPUINFO_PATH: &str = "/proc/cpuinfo";

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: "trace", "debug", "info", "warn", "error".
    pub level: String,
    /// Enable file logging with daily rotation.
    pub file_logging: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file_logging: false,
        }
    }
}

/// Detector configuration.
///
/// ```toml
/// base_label = "Raspberry Pi"
/// cpuinfo_path = "/proc/cpuinfo"
///
/// [revisions.c04170]
/// model = "5"
/// ram = "4GB"
/// manufacturer = "Sony UK"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectorConfig {
    /// Prefix for the full model name.
    pub base_label: String,
    /// File to read revision data from.
    pub cpuinfo_path: PathBuf,
    /// Extra or replacement catalog entries, keyed by revision code.
    pub revisions: HashMap<String, RevisionInfo>,
    pub logging: LoggingConfig,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            base_label: DEFAULT_BASE_LABEL.to_string(),
            cpuinfo_path: PathBuf::from(DEFAULT_CPUINFO_PATH),
            revisions: HashMap::new(),
            logging: LoggingConfig::default(),
        }
    }
}

impl DetectorConfig {
    /// Create a new DetectorConfig with default values.
    pub fn new() -> Self {
        Self::default()
    }
}
