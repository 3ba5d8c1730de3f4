pub mod config;
pub mod detection;
pub mod error;
pub mod revision;

pub use config::{DetectorConfig, LoggingConfig, DEFAULT_CPUINFO_PATH};
pub use detection::{DetectionResult, DEFAULT_BASE_LABEL};
pub use error::DomainError;
pub use revision::{base_revisions, extract_revision_code, RevisionCatalog, RevisionInfo};
