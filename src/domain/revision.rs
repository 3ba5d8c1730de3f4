use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Hardware described by a single revision code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevisionInfo {
    /// Short model name (e.g., "4B", "Zero 2 W").
    pub model: String,
    /// RAM capacity (e.g., "4GB").
    pub ram: String,
    /// Manufacturer that assembled the board.
    pub manufacturer: String,
}

impl RevisionInfo {
    /// Create a new revision descriptor.
    pub fn new(
        model: impl Into<String>,
        ram: impl Into<String>,
        manufacturer: impl Into<String>,
    ) -> Self {
        Self {
            model: model.into(),
            ram: ram.into(),
            manufacturer: manufacturer.into(),
        }
    }

    /// Check if any field is empty.
    pub fn has_empty_field(&self) -> bool {
        self.model.is_empty() || self.ram.is_empty() || self.manufacturer.is_empty()
    }
}

// (code, model, ram, manufacturer)
// https://www.raspberrypi.com/documentation/computers/raspberry-pi.html#new-style-revision-codes
const BASE_TABLE: &[(&str, &str, &str, &str)] = &[
    ("900021", "A+", "512MB", "Sony UK"),
    ("900032", "B+", "512MB", "Sony UK"),
    ("900092", "Zero", "512MB", "Sony UK"),
    ("900093", "Zero", "512MB", "Sony UK"),
    ("9000c1", "Zero W", "512MB", "Sony UK"),
    ("9020e0", "3A+", "512MB", "Sony UK"),
    ("9020e1", "3A+", "512MB", "Sony UK"),
    ("920092", "Zero", "512MB", "Embest"),
    ("920093", "Zero", "512MB", "Embest"),
    ("900061", "CM1", "512MB", "Sony UK"),
    ("a01040", "2B", "1GB", "Sony UK"),
    ("a01041", "2B", "1GB", "Sony UK"),
    ("a02082", "3B", "1GB", "Sony UK"),
    ("a020a0", "CM3", "1GB", "Sony UK"),
    ("a020d3", "3B+", "1GB", "Sony UK"),
    ("a020d4", "3B+", "1GB", "Sony UK"),
    ("a02042", "2B (with BCM2837)", "1GB", "Sony UK"),
    ("a21041", "2B", "1GB", "Embest"),
    ("a22042", "2B (with BCM2837)", "1GB", "Embest"),
    ("a22082", "3B", "1GB", "Embest"),
    ("a220a0", "CM3", "1GB", "Embest"),
    ("a32082", "3B", "1GB", "Sony Japan"),
    ("a52082", "3B", "1GB", "Stadium"),
    ("a22083", "3B", "1GB", "Embest"),
    ("a02100", "CM3+", "1GB", "Sony UK"),
    ("a03111", "4B", "1GB", "Sony UK"),
    ("b03111", "4B", "2GB", "Sony UK"),
    ("b03112", "4B", "2GB", "Sony UK"),
    ("b03114", "4B", "2GB", "Sony UK"),
    ("b03115", "4B", "2GB", "Sony UK"),
    ("c03111", "4B", "4GB", "Sony UK"),
    ("c03112", "4B", "4GB", "Sony UK"),
    ("c03114", "4B", "4GB", "Sony UK"),
    ("c03115", "4B", "4GB", "Sony UK"),
    ("d03114", "4B", "8GB", "Sony UK"),
    ("d03115", "4B", "8GB", "Sony UK"),
    ("c03130", "Pi 400", "4GB", "Sony UK"),
    ("a03140", "CM4", "1GB", "Sony UK"),
    ("b03140", "CM4", "2GB", "Sony UK"),
    ("c03140", "CM4", "4GB", "Sony UK"),
    ("d03140", "CM4", "8GB", "Sony UK"),
    ("902120", "Zero 2 W", "512MB", "Sony UK"),
    ("c04170", "5", "4GB", "Sony UK"),
    ("d04170", "5", "8GB", "Sony UK"),
];

/// Built-in revision catalog, initialized once per process and never mutated.
static BASE_REVISIONS: Lazy<HashMap<String, RevisionInfo>> = Lazy::new(|| {
    BASE_TABLE
        .iter()
        .map(|&(code, model, ram, manufacturer)| {
            (code.to_string(), RevisionInfo::new(model, ram, manufacturer))
        })
        .collect()
});

/// Read access to the built-in revision catalog.
pub fn base_revisions() -> &'static HashMap<String, RevisionInfo> {
    &BASE_REVISIONS
}

/// Mapping from revision code to hardware descriptor.
///
/// Codes are stored as given and looked up case-sensitively. The built-in
/// entries use lowercase hex, matching what the kernel reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevisionCatalog {
    revisions: HashMap<String, RevisionInfo>,
}

impl RevisionCatalog {
    /// The built-in catalog.
    pub fn base() -> Self {
        Self {
            revisions: base_revisions().clone(),
        }
    }

    /// The built-in catalog with `overrides` merged on top.
    ///
    /// An override replaces the whole descriptor of an existing code; unknown
    /// codes are added. Override values are taken as-is.
    pub fn with_overrides(overrides: HashMap<String, RevisionInfo>) -> Self {
        let mut catalog = Self::base();
        catalog.revisions.extend(overrides);
        catalog
    }

    /// Find a revision by code.
    pub fn get(&self, code: &str) -> Option<&RevisionInfo> {
        self.revisions.get(code)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.revisions.contains_key(code)
    }

    pub fn len(&self) -> usize {
        self.revisions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.revisions.is_empty()
    }

    /// List all revision codes, sorted.
    pub fn codes(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self.revisions.keys().map(String::as_str).collect();
        codes.sort_unstable();
        codes
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &RevisionInfo)> {
        self.revisions.iter().map(|(code, info)| (code.as_str(), info))
    }
}

impl Default for RevisionCatalog {
    fn default() -> Self {
        Self::base()
    }
}

/// Pull the revision code out of `/proc/cpuinfo` text.
///
/// Per-core blocks come first and the machine block last, so lines are
/// scanned bottom-up and the first one starting with `Revision` wins. All
/// whitespace is stripped from that line before dropping the `Revision:`
/// prefix. Case is preserved.
pub fn extract_revision_code(cpuinfo: &str) -> Option<String> {
    let line = cpuinfo
        .split('\n')
        .rev()
        .find(|line| line.trim().starts_with("Revision"))?;

    let compact: String = line.chars().filter(|c| !c.is_whitespace()).collect();
    Some(compact.replacen("Revision:", "", 1))
}
