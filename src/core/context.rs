//! Source scanning pipeline: discover files, extract strings, filter them.

use anyhow::Result;

use crate::{
    config::Settings,
    core::{
        ExclusionFilter, ExtractedStrings, Extractor, ScanStats, ScanWarning,
        file_scanner::scan_files,
    },
};

/// Strings used in source code, ready for comparison or export.
#[derive(Debug)]
pub struct SourceScan {
    pub stats: ScanStats,
    /// Translatable strings with their occurrences.
    pub kept: ExtractedStrings,
    /// Strings dropped by the exclusion patterns.
    pub excluded: ExtractedStrings,
    /// Paths and files that were skipped.
    pub warnings: Vec<ScanWarning>,
    /// Compiled exclusion patterns, reused when comparing catalog keys.
    pub filter: ExclusionFilter,
}

/// Run the scanner, the three extraction rules, and the exclusion filter.
///
/// Fails only if the configured patterns cannot be compiled; per-file
/// problems end up in `warnings`.
pub fn scan_sources(settings: &Settings) -> Result<SourceScan> {
    let config = &settings.config;
    let extractor = Extractor::new(config)?;
    let filter = ExclusionFilter::new(&config.exclude_patterns)?;

    let files = scan_files(settings);
    let extraction = extractor.extract(&files);

    let stats = ScanStats {
        markup_files: files.markup.len(),
        script_files: files.scripts.len(),
        markup_strings: extraction.markup.len(),
        call_strings: extraction.calls.len(),
        embedded_strings: extraction.embedded.len(),
        marker_class: config.marker_class.clone(),
        translation_function: config.translation_function.clone(),
    };

    let filtered = filter.apply(extraction.merged());

    let mut warnings = files.warnings;
    warnings.extend(extraction.warnings);

    Ok(SourceScan {
        stats,
        kept: filtered.kept,
        excluded: filtered.excluded,
        warnings,
        filter,
    })
}
