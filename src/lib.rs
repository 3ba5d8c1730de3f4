#![forbid(unsafe_code)]

//! Raspberry Pi board detection.
//!
//! Reads the `Revision` line from `/proc/cpuinfo` and resolves it against a
//! catalog of known revision codes.
//!
//! ```no_run
//! use raspberry_pi_info::RaspberryPiInfo;
//!
//! let result = RaspberryPiInfo::new().detect();
//! if result.is_detected {
//!     println!("{}", result);
//! }
//! ```

pub mod adapters;
pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod ports;

pub use adapters::{FileCpuInfoSource, RaspberryPiInfo, StaticCpuInfoSource, TomlConfigStore};
pub use app::DetectorController;
pub use domain::{
    base_revisions, extract_revision_code, DetectionResult, DetectorConfig, DomainError,
    LoggingConfig, RevisionCatalog, RevisionInfo, DEFAULT_BASE_LABEL, DEFAULT_CPUINFO_PATH,
};
pub use infrastructure::init_logging;
pub use ports::{BoardDetector, ConfigStore, CpuInfoSource};
