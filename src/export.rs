//! Base catalog export.
//!
//! Writes every used string into the base catalog so translators have a
//! single file listing all keys. Existing values are preserved.

use std::{
    collections::BTreeSet,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde_json::{Map, Value};

use crate::core::{ExtractedStrings, ScanWarning, read_catalog};

/// Outcome of a successful export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub path: PathBuf,
    /// Used strings written (reserved keys and the placeholder excluded).
    pub exported_count: usize,
    pub reserved_count: usize,
    /// Every key in the written file, placeholder included.
    pub total_keys: usize,
    /// Keys the previous file did not have, in file order.
    pub added: Vec<String>,
}

/// Base catalog contents before and after the merge.
#[derive(Debug)]
pub struct BaseCatalog {
    path: PathBuf,
    previous: Map<String, Value>,
}

impl BaseCatalog {
    /// Read the existing base catalog.
    ///
    /// A missing file starts empty. An unreadable or malformed file is
    /// reported through the returned warning and also starts empty.
    pub fn open(path: &Path) -> (Self, Option<ScanWarning>) {
        let (previous, warning) = if path.exists() {
            match read_catalog(path) {
                Ok(map) => (map, None),
                Err(e) => (
                    Map::new(),
                    Some(ScanWarning::new(path.to_string_lossy(), e)),
                ),
            }
        } else {
            (Map::new(), None)
        };

        (
            Self {
                path: path.to_path_buf(),
                previous,
            },
            warning,
        )
    }

    /// Build the merged catalog: reserved keys, then used strings, then the
    /// trailing placeholder. Each key keeps its previous value or gets `""`.
    pub fn merge(
        &self,
        kept: &ExtractedStrings,
        reserved_keys: &BTreeSet<String>,
    ) -> Map<String, Value> {
        let mut merged = Map::new();

        let keys = reserved_keys
            .iter()
            .map(String::as_str)
            .chain(kept.texts().filter(|text| !reserved_keys.contains(*text)))
            .chain(std::iter::once(""));

        for key in keys {
            let value = self
                .previous
                .get(key)
                .cloned()
                .unwrap_or_else(|| Value::String(String::new()));
            merged.insert(key.to_string(), value);
        }

        merged
    }

    /// Merge and write the catalog with 2-space indentation and a trailing
    /// newline.
    pub fn export(
        &self,
        kept: &ExtractedStrings,
        reserved_keys: &BTreeSet<String>,
    ) -> Result<ExportSummary> {
        let merged = self.merge(kept, reserved_keys);

        let added: Vec<String> = merged
            .keys()
            .filter(|key| !key.is_empty() && !self.previous.contains_key(*key))
            .cloned()
            .collect();

        let summary = ExportSummary {
            path: self.path.clone(),
            exported_count: kept
                .texts()
                .filter(|text| !reserved_keys.contains(*text))
                .count(),
            reserved_count: reserved_keys.len(),
            total_keys: merged.len(),
            added,
        };

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        let content = serde_json::to_string_pretty(&Value::Object(merged))
            .context("Failed to serialize JSON")?;

        fs::write(&self.path, format!("{}\n", content))
            .with_context(|| format!("Failed to write file: {}", self.path.display()))?;

        Ok(summary)
    }
}
