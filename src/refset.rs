//! Reference Set persistence.
//!
//! The Reference Set is the set of citation keys actually used by a document
//! collection. It is written once by the collector as a flat YAML mapping
//! from key to the literal value 1, and read back by the cleaner as an
//! inclusion filter.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;

use thiserror::Error;

/// Errors that can occur when loading or saving a Reference Set.
#[derive(Error, Debug)]
pub enum RefSetError {
    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),
}

/// The set of citation keys used by a document collection.
///
/// Case-sensitive, deduplicated, no ordering invariant. Write-once by the
/// collector, read-only by the cleaner.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RefSet {
    keys: BTreeSet<String>,
}

impl RefSet {
    /// Builds a Reference Set from a collected key set.
    pub fn from_keys(keys: BTreeSet<String>) -> Self {
        RefSet { keys }
    }

    /// Loads a Reference Set from a flat YAML key-value file.
    ///
    /// The values are presence markers and are ignored; only the keys
    /// matter. An empty file yields an empty set.
    pub fn load(path: &Path) -> Result<Self, RefSetError> {
        let content = fs::read_to_string(path)?;

        if content.trim().is_empty() {
            return Ok(RefSet::default());
        }

        let mapping: BTreeMap<String, serde_yaml::Value> = serde_yaml::from_str(&content)?;
        Ok(RefSet {
            keys: mapping.into_keys().collect(),
        })
    }

    /// Saves the set as a YAML mapping from each key to the literal value 1,
    /// overwriting any existing file at `path`.
    pub fn save(&self, path: &Path) -> Result<(), RefSetError> {
        let mapping: BTreeMap<&str, u32> = self.keys.iter().map(|k| (k.as_str(), 1)).collect();
        let yaml = serde_yaml::to_string(&mapping)?;
        fs::write(path, yaml)?;
        Ok(())
    }

    /// Returns true if `key` is a member of the set.
    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    /// Number of keys in the set.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns true if the set holds no keys.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Iterates over the keys in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.keys.iter()
    }
}
