//! Missing translation detection rule.
//!
//! A string used in source is missing when at least one catalog lacks it.
//! Strings that no catalog defines are missing from every language.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::core::{Catalogs, ExtractedStrings, Occurrence};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MissingTranslation {
    pub string: String,
    /// Sorted language codes lacking the string.
    pub missing_from_languages: Vec<String>,
    pub locations: Vec<Occurrence>,
}

impl MissingTranslation {
    /// True when the string is absent from every loaded language.
    pub fn missing_everywhere(&self, language_count: usize) -> bool {
        self.missing_from_languages.len() == language_count
    }
}

/// Check used strings against every catalog.
///
/// Reserved keys are skipped. Results are sorted by string.
pub fn check_missing_translations(
    kept: &ExtractedStrings,
    catalogs: &Catalogs,
    reserved_keys: &BTreeSet<String>,
) -> Vec<MissingTranslation> {
    kept.iter()
        .filter(|(text, _)| !reserved_keys.contains(*text))
        .filter_map(|(text, occurrences)| {
            let missing_from_languages: Vec<String> = catalogs
                .keys_by_language
                .iter()
                .filter(|(_, keys)| !keys.contains(text))
                .map(|(language, _)| language.clone())
                .collect();

            let absent = !catalogs.all_keys.contains(text);
            (absent || !missing_from_languages.is_empty()).then(|| MissingTranslation {
                string: text.clone(),
                missing_from_languages,
                locations: occurrences.clone(),
            })
        })
        .collect()
}
