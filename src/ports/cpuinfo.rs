use crate::domain::DomainError;

/// Port for acquiring raw CPU information text.
pub trait CpuInfoSource: Send + Sync {
    /// Read the whole source as a string.
    fn read(&self) -> Result<String, DomainError>;

    /// Human-readable description of where the text comes from.
    fn describe(&self) -> String;
}
