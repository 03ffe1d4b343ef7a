//! Machine-readable output for `--json`.

use std::io::Write;

use serde::Serialize;

use super::commands::{CheckSummary, ExportOutcome, ExportReport};
use crate::rules::MissingTranslation;

#[derive(Debug, Serialize)]
struct CheckCounts {
    total_strings_used: usize,
    total_translation_keys: usize,
    total_languages: usize,
    missing_count: usize,
    unused_count: usize,
    excluded_count: usize,
    whitelisted_count: usize,
}

#[derive(Debug, Serialize)]
struct CheckDocument<'a> {
    summary: CheckCounts,
    missing_translations: &'a [MissingTranslation],
    unused_translations: &'a [String],
    excluded_strings: &'a [String],
    whitelisted_strings: &'a [String],
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum ExportDocument<'a> {
    Written {
        path: String,
        exported_count: usize,
        reserved_count: usize,
        total_keys: usize,
        added: &'a [String],
        excluded_count: usize,
    },
    Failed {
        path: String,
        error: &'a str,
    },
}

pub fn print_check_to<W: Write>(summary: &CheckSummary, writer: &mut W) {
    let comparison = &summary.comparison;
    let document = CheckDocument {
        summary: CheckCounts {
            total_strings_used: summary.scan.used_count,
            total_translation_keys: summary.compared_key_count,
            total_languages: summary.language_count,
            missing_count: comparison.missing.len(),
            unused_count: comparison.unused.len(),
            excluded_count: summary.scan.excluded.len(),
            whitelisted_count: summary.allow_list.len(),
        },
        missing_translations: &comparison.missing,
        unused_translations: &comparison.unused,
        excluded_strings: &summary.scan.excluded,
        whitelisted_strings: &summary.allow_list,
    };
    write_document(&document, writer);
}

pub fn print_export_to<W: Write>(report: &ExportReport, writer: &mut W) {
    let document = match &report.outcome {
        ExportOutcome::Written(summary) => ExportDocument::Written {
            path: summary.path.to_string_lossy().to_string(),
            exported_count: summary.exported_count,
            reserved_count: summary.reserved_count,
            total_keys: summary.total_keys,
            added: &summary.added,
            excluded_count: report.scan.excluded.len(),
        },
        ExportOutcome::Failed { path, error } => ExportDocument::Failed {
            path: path.to_string_lossy().to_string(),
            error: error.as_str(),
        },
    };
    write_document(&document, writer);
}

fn write_document<T: Serialize, W: Write>(document: &T, writer: &mut W) {
    match serde_json::to_string_pretty(document) {
        Ok(json) => {
            let _ = writeln!(writer, "{}", json);
        }
        Err(e) => eprintln!("Error: Failed to serialize JSON: {}", e),
    }
}
