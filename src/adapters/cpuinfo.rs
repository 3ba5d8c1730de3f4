use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::{DomainError, DEFAULT_CPUINFO_PATH};
use crate::ports::CpuInfoSource;

/// Reads CPU info from a file, `/proc/cpuinfo` by default.
#[derive(Debug, Clone)]
pub struct FileCpuInfoSource {
    path: PathBuf,
}

impl FileCpuInfoSource {
    /// Source backed by `/proc/cpuinfo`.
    pub fn new() -> Self {
        Self::with_path(DEFAULT_CPUINFO_PATH)
    }

    /// Source backed by an arbitrary file.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileCpuInfoSource {
    fn default() -> Self {
        Self::new()
    }
}

impl CpuInfoSource for FileCpuInfoSource {
    fn read(&self) -> Result<String, DomainError> {
        let content = fs::read_to_string(&self.path).map_err(|e| DomainError::SourceUnavailable {
            path: self.path.display().to_string(),
            reason: e.to_string(),
        })?;

        debug!(path = ?self.path, bytes = content.len(), "Read CPU info");
        Ok(content)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Serves fixed CPU info text, for hosts that obtain it some other way.
#[derive(Debug, Clone)]
pub struct StaticCpuInfoSource {
    content: String,
}

impl StaticCpuInfoSource {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

impl CpuInfoSource for StaticCpuInfoSource {
    fn read(&self) -> Result<String, DomainError> {
        Ok(self.content.clone())
    }

    fn describe(&self) -> String {
        "<static>".to_string()
    }
}
