use serde::{Deserialize, Serialize};

use super::revision::RevisionInfo;

/// Default label prefixed to the model name.
pub const DEFAULT_BASE_LABEL: &str = "Raspberry Pi";

/// Outcome of a single detection attempt.
///
/// Either every optional field is set (detected) or none is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionResult {
    /// Whether a revision code was found and resolved.
    pub is_detected: bool,
    pub model: Option<String>,
    /// Base label and model, e.g. "Raspberry Pi 5".
    pub full_name: Option<String>,
    /// Full name and RAM, e.g. "Raspberry Pi 5 - 4GB".
    pub full_name_with_ram: Option<String>,
    pub ram: Option<String>,
    pub manufacturer: Option<String>,
    /// The code as read from the source.
    pub revision_code: Option<String>,
}

impl DetectionResult {
    /// The canonical "not detected" record.
    pub fn not_detected() -> Self {
        Self::default()
    }

    /// Build a successful result from a resolved revision.
    pub fn detected(base_label: &str, code: &str, info: &RevisionInfo) -> Self {
        let full_name = format!("{} {}", base_label, info.model);
        Self {
            is_detected: true,
            model: Some(info.model.clone()),
            full_name_with_ram: Some(format!("{} - {}", full_name, info.ram)),
            full_name: Some(full_name),
            ram: Some(info.ram.clone()),
            manufacturer: Some(info.manufacturer.clone()),
            revision_code: Some(code.to_string()),
        }
    }
}

impl std::fmt::Display for DetectionResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.full_name_with_ram {
            Some(name) => write!(f, "{}", name),
            None => write!(f, "not detected"),
        }
    }
}
