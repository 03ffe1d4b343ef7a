//! Shared data types for the scanning pipeline.

use std::{
    collections::{BTreeMap, btree_map},
    fmt, io,
};

use serde::Serialize;
use thiserror::Error;

/// A place where an extracted string was found.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct Occurrence {
    pub file: String,
    pub line: usize,
    pub col: usize,
}

impl Occurrence {
    pub fn new(file: impl Into<String>, line: usize, col: usize) -> Self {
        Self {
            file: file.into(),
            line,
            col,
        }
    }
}

impl fmt::Display for Occurrence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.col)
    }
}

/// Extracted strings keyed by their exact text.
///
/// Every entry holds at least one occurrence. Iteration is sorted by text,
/// so the result does not depend on the order files were scanned in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedStrings {
    entries: BTreeMap<String, Vec<Occurrence>>,
}

impl ExtractedStrings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, text: impl Into<String>, occurrence: Occurrence) {
        self.entries.entry(text.into()).or_default().push(occurrence);
    }

    /// Append `other`'s occurrences after the ones already recorded.
    pub fn merge(&mut self, other: ExtractedStrings) {
        for (text, occurrences) in other.entries {
            self.entries.entry(text).or_default().extend(occurrences);
        }
    }

    /// Split into `(matching, rest)` by a predicate on the text.
    pub fn partition(self, mut predicate: impl FnMut(&str) -> bool) -> (Self, Self) {
        let (matching, rest) = self
            .entries
            .into_iter()
            .partition(|(text, _)| predicate(text.as_str()));
        (Self { entries: matching }, Self { entries: rest })
    }

    pub fn contains(&self, text: &str) -> bool {
        self.entries.contains_key(text)
    }

    pub fn occurrences(&self, text: &str) -> Option<&[Occurrence]> {
        self.entries.get(text).map(Vec::as_slice)
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, Vec<Occurrence>> {
        self.entries.iter()
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Why a single file contributed nothing to a run.
#[derive(Error, Debug)]
pub enum FileError {
    #[error("failed to read file: {0}")]
    Read(#[from] io::Error),

    #[error("failed to parse JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("root of a catalog file must be a JSON object")]
    NotAnObject,
}

/// A per-file problem that was reported and skipped.
#[derive(Debug)]
pub struct ScanWarning {
    pub file_path: String,
    pub error: FileError,
}

impl ScanWarning {
    pub fn new(file_path: impl Into<String>, error: impl Into<FileError>) -> Self {
        Self {
            file_path: file_path.into(),
            error: error.into(),
        }
    }
}

/// Counts gathered while scanning sources, shown before the results.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanStats {
    pub markup_files: usize,
    pub script_files: usize,
    /// Unique strings found by the markup-tag rule.
    pub markup_strings: usize,
    /// Unique strings found by the function-call rule.
    pub call_strings: usize,
    /// Unique strings found in markup built inside scripts.
    pub embedded_strings: usize,
    pub marker_class: String,
    pub translation_function: String,
}
