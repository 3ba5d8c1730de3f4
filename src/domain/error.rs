use thiserror::Error;

/// Domain-level errors for revision detection.
///
/// None of these reach the caller of `detect()`; they describe why a
/// detection attempt degraded to "not detected".
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("IO error: {0}")]
    Io(String),

    #[error("CPU info source unavailable at {path}: {reason}")]
    SourceUnavailable { path: String, reason: String },

    #[error("No Revision line found in CPU info")]
    RevisionLineMissing,

    #[error("Unknown revision code: {0}")]
    UnknownRevision(String),
}

impl From<std::io::Error> for DomainError {
    fn from(err: std::io::Error) -> Self {
        DomainError::Io(err.to_string())
    }
}

impl From<toml::de::Error> for DomainError {
    fn from(err: toml::de::Error) -> Self {
        DomainError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for DomainError {
    fn from(err: toml::ser::Error) -> Self {
        DomainError::Serialization(err.to_string())
    }
}
