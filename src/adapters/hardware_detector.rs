use std::collections::HashMap;

use tracing::{debug, info};

use crate::adapters::FileCpuInfoSource;
use crate::domain::{
    extract_revision_code, DetectionResult, DetectorConfig, DomainError, RevisionCatalog,
    RevisionInfo, DEFAULT_BASE_LABEL,
};
use crate::ports::{BoardDetector, CpuInfoSource};

/// Raspberry Pi detector.
///
/// Reads the revision code from CPU info and resolves it against the built-in
/// catalog merged with caller overrides. Configuration is fixed at
/// construction and nothing is cached between calls.
pub struct RaspberryPiInfo<S = FileCpuInfoSource> {
    source: S,
    catalog: RevisionCatalog,
    base_name: String,
}

impl RaspberryPiInfo<FileCpuInfoSource> {
    /// Detector over `/proc/cpuinfo` with the built-in catalog.
    pub fn new() -> Self {
        Self::with_source(FileCpuInfoSource::new())
    }

    /// Detector over `/proc/cpuinfo` with extra revisions and a custom label.
    pub fn with_options(
        additional_revisions: HashMap<String, RevisionInfo>,
        base_name: impl Into<String>,
    ) -> Self {
        Self::with_source(FileCpuInfoSource::new())
            .with_revisions(additional_revisions)
            .with_base_name(base_name)
    }

    /// Detector built from a loaded configuration.
    pub fn from_config(config: &DetectorConfig) -> Self {
        Self::with_source(FileCpuInfoSource::with_path(&config.cpuinfo_path))
            .with_revisions(config.revisions.clone())
            .with_base_name(config.base_label.clone())
    }
}

impl Default for RaspberryPiInfo<FileCpuInfoSource> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: CpuInfoSource> RaspberryPiInfo<S> {
    /// Detector over an arbitrary source with the built-in catalog.
    pub fn with_source(source: S) -> Self {
        Self {
            source,
            catalog: RevisionCatalog::base(),
            base_name: DEFAULT_BASE_LABEL.to_string(),
        }
    }

    /// Merge `additional_revisions` over the built-in catalog.
    ///
    /// Replaces any overrides applied earlier.
    pub fn with_revisions(mut self, additional_revisions: HashMap<String, RevisionInfo>) -> Self {
        self.catalog = RevisionCatalog::with_overrides(additional_revisions);
        self
    }

    /// Set the label prefixed to model names.
    pub fn with_base_name(mut self, base_name: impl Into<String>) -> Self {
        self.base_name = base_name.into();
        self
    }

    /// The merged revision catalog.
    pub fn revisions(&self) -> &RevisionCatalog {
        &self.catalog
    }

    /// The label prefixed to model names.
    pub fn base_name(&self) -> &str {
        &self.base_name
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Detect the board. Never fails.
    pub fn detect(&self) -> DetectionResult {
        match self.resolve() {
            Ok((code, revision)) => {
                let result = DetectionResult::detected(&self.base_name, &code, revision);
                info!(
                    revision = %code,
                    model = %revision.model,
                    ram = %revision.ram,
                    manufacturer = %revision.manufacturer,
                    "Raspberry Pi detected"
                );
                result
            }
            Err(e) => {
                debug!(cpuinfo = %self.source.describe(), error = %e, "Raspberry Pi not detected");
                DetectionResult::not_detected()
            }
        }
    }

    fn resolve(&self) -> Result<(String, &RevisionInfo), DomainError> {
        let code = self.read_revision_code()?;
        match self.catalog.get(&code) {
            Some(revision) => Ok((code, revision)),
            None => Err(DomainError::UnknownRevision(code)),
        }
    }

    fn read_revision_code(&self) -> Result<String, DomainError> {
        let cpuinfo = self.source.read()?;
        extract_revision_code(&cpuinfo).ok_or(DomainError::RevisionLineMissing)
    }
}

impl<S: CpuInfoSource> BoardDetector for RaspberryPiInfo<S> {
    fn detect(&self) -> DetectionResult {
        RaspberryPiInfo::detect(self)
    }

    fn catalog(&self) -> &RevisionCatalog {
        &self.catalog
    }
}
