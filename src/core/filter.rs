//! Drops extracted strings that are not translatable text, such as CSS
//! selectors passed to helper functions or hex escapes.

use anyhow::{Context, Result};
use regex::Regex;

use crate::core::ExtractedStrings;

/// Extracted strings split by the exclusion patterns.
#[derive(Debug, Default)]
pub struct FilteredStrings {
    pub kept: ExtractedStrings,
    pub excluded: ExtractedStrings,
}

#[derive(Debug, Clone)]
pub struct ExclusionFilter {
    patterns: Vec<Regex>,
}

impl ExclusionFilter {
    pub fn new(patterns: &[String]) -> Result<Self> {
        let patterns = patterns
            .iter()
            .map(|p| {
                Regex::new(p).with_context(|| format!("Invalid exclusion pattern: \"{}\"", p))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { patterns })
    }

    /// True if any pattern matches at the start of `text`.
    ///
    /// The leftmost match is reported first, so a pattern matches at offset 0
    /// exactly when its first match starts there. A single trailing newline
    /// is also tried without it, so `$` matches just before a final `\n`.
    pub fn is_excluded(&self, text: &str) -> bool {
        let trimmed = text.strip_suffix('\n').unwrap_or(text);
        self.patterns.iter().any(|p| {
            [text, trimmed]
                .iter()
                .any(|t| p.find(t).is_some_and(|m| m.start() == 0))
        })
    }

    pub fn apply(&self, strings: ExtractedStrings) -> FilteredStrings {
        let (excluded, kept) = strings.partition(|text| self.is_excluded(text));
        FilteredStrings { kept, excluded }
    }
}
