//! Text report formatting and printing.
//!
//! Results go to stdout, warnings to stderr. Every printer has a `_to`
//! variant taking a writer so output can be tested.

use std::io::{self, Write};

use colored::Colorize;

use super::{
    commands::{
        CheckSummary, CommandResult, CommandSummary, ExportOutcome, ExportReport, InitSummary,
        ScanSummary,
    },
    json_output,
};
use crate::{config::OutputOptions, core::ScanWarning, rules::MissingTranslation};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Maximum number of language codes listed per missing string.
const MAX_LANGUAGES_DISPLAY: usize = 5;

const RULE_WIDTH: usize = 80;

/// Print a command result: warnings to stderr, the report to stdout.
pub fn print(result: &CommandResult, output: OutputOptions) {
    print_warnings_to(&result.warnings, &mut io::stderr().lock());

    let stdout = &mut io::stdout().lock();
    match &result.summary {
        CommandSummary::Check(summary) => {
            if let Some(dir) = &summary.empty_lang_dir {
                print_warning_to(
                    &format!("No language files found in {}", dir.display()),
                    &mut io::stderr().lock(),
                );
            }
            if output.json {
                json_output::print_check_to(summary, stdout);
            } else {
                print_check_to(summary, output, stdout);
            }
        }
        CommandSummary::Export(report) => {
            if output.json {
                json_output::print_export_to(report, stdout);
            } else {
                print_export_to(report, output, stdout);
            }
        }
        CommandSummary::Init(summary) => print_init(summary),
    }
}

pub fn print_warnings_to<W: Write>(warnings: &[ScanWarning], writer: &mut W) {
    for warning in warnings {
        print_warning_to(
            &format!("{}: {}", warning.file_path, warning.error),
            writer,
        );
    }
}

fn print_warning_to<W: Write>(message: &str, writer: &mut W) {
    let _ = writeln!(writer, "{} {}", "warning:".bold().yellow(), message);
}

/// Print the full comparison report.
pub fn print_check_to<W: Write>(summary: &CheckSummary, output: OutputOptions, writer: &mut W) {
    print_scan_to(&summary.scan, output, writer);

    let _ = writeln!(writer, "Loading translation keys from language files...");
    let _ = writeln!(
        writer,
        "Found {} keys in translation files",
        summary.catalog_key_count
    );
    let _ = writeln!(writer, "Found {} language files", summary.language_count);
    let _ = writeln!(writer);

    print_heading_to("RESULTS", writer);
    let _ = writeln!(writer);

    let comparison = &summary.comparison;
    if comparison.missing.is_empty() {
        print_success_to("No missing translations found!", writer);
    } else {
        let _ = writeln!(
            writer,
            "{} {}",
            FAILURE_MARK.yellow(),
            format!(
                "MISSING TRANSLATIONS ({} strings)",
                comparison.missing.len()
            )
            .bold()
            .yellow()
        );
        let _ = writeln!(
            writer,
            "These strings are used in code but not found in translation files:"
        );
        let _ = writeln!(writer, "{}", "-".repeat(RULE_WIDTH));
        for missing in &comparison.missing {
            print_missing_to(missing, summary.language_count, output, writer);
        }
    }
    let _ = writeln!(writer);

    if comparison.unused.is_empty() {
        print_success_to("No unused translations found!", writer);
    } else {
        let _ = writeln!(
            writer,
            "{}",
            format!("UNUSED TRANSLATIONS ({} strings)", comparison.unused.len())
                .bold()
                .cyan()
        );
        let _ = writeln!(
            writer,
            "These strings are in translation files but not used in code:"
        );
        let _ = writeln!(writer, "{}", "-".repeat(RULE_WIDTH));
        for unused in &comparison.unused {
            let _ = writeln!(writer, "  - \"{}\"", unused);
        }
    }
    let _ = writeln!(writer);

    print_heading_to("SUMMARY", writer);
    let _ = writeln!(
        writer,
        "Total strings used in code: {}",
        summary.scan.used_count
    );
    let _ = writeln!(
        writer,
        "Total keys in translation files: {}",
        summary.compared_key_count
    );
    let _ = writeln!(writer, "Missing translations: {}", comparison.missing.len());
    let _ = writeln!(writer, "Unused translations: {}", comparison.unused.len());
    let _ = writeln!(writer, "Whitelisted strings: {}", summary.allow_list.len());
    let _ = writeln!(writer);

    if comparison.is_in_sync() {
        print_success_to("All translations are in sync!", writer);
    } else {
        print_failure_to("Translation files need updates!", writer);
    }
}

/// Print the scan summary and the export result.
pub fn print_export_to<W: Write>(report: &ExportReport, output: OutputOptions, writer: &mut W) {
    print_scan_to(&report.scan, output, writer);

    match &report.outcome {
        ExportOutcome::Written(summary) => {
            print_success_to(
                &format!(
                    "Exported {} strings + {} reserved keys to {}",
                    summary.exported_count,
                    summary.reserved_count,
                    summary.path.display()
                ),
                writer,
            );
            let _ = writeln!(
                writer,
                "   Total keys in file: {} (including empty key)",
                summary.total_keys
            );
            if output.verbose {
                for key in &summary.added {
                    let _ = writeln!(writer, "   {} Added: \"{}\"", "+".green(), key);
                }
            } else if !summary.added.is_empty() {
                let _ = writeln!(writer, "   Added {} new strings", summary.added.len());
            }
        }
        ExportOutcome::Failed { path, error } => {
            print_failure_to(
                &format!("Failed to export to {}: {}", path.display(), error),
                writer,
            );
        }
    }
}

fn print_init(summary: &InitSummary) {
    if summary.created {
        print_success_to(
            &format!("Created {}", summary.path.display()),
            &mut io::stdout().lock(),
        );
    } else {
        eprintln!("Error: {} already exists", summary.path.display());
    }
}

/// Header, file counts, per-rule counts and exclusions.
fn print_scan_to<W: Write>(scan: &ScanSummary, output: OutputOptions, writer: &mut W) {
    let stats = &scan.stats;

    print_heading_to("Translation String Checker", writer);
    let _ = writeln!(writer);

    let _ = writeln!(writer, "Scanning source files...");
    let _ = writeln!(writer, "Found {} HTML files", stats.markup_files);
    let _ = writeln!(writer, "Found {} JavaScript files", stats.script_files);
    let _ = writeln!(writer);

    let _ = writeln!(writer, "Extracting translation strings from source files...");
    let _ = writeln!(
        writer,
        "Found {} strings with {} class in HTML files",
        stats.markup_strings, stats.marker_class
    );
    let _ = writeln!(
        writer,
        "Found {} strings in {}() function calls",
        stats.call_strings, stats.translation_function
    );
    let _ = writeln!(
        writer,
        "Found {} strings with {} class in JavaScript files",
        stats.embedded_strings, stats.marker_class
    );
    let _ = writeln!(writer);

    if !scan.excluded.is_empty() {
        let _ = writeln!(
            writer,
            "Excluded {} non-translatable strings (CSS selectors, etc.)",
            scan.excluded.len()
        );
        if output.verbose {
            for excluded in &scan.excluded {
                let _ = writeln!(writer, "  - \"{}\"", excluded);
            }
        }
        let _ = writeln!(writer);
    }
}

fn print_missing_to<W: Write>(
    missing: &MissingTranslation,
    language_count: usize,
    output: OutputOptions,
    writer: &mut W,
) {
    let _ = writeln!(writer, "  - \"{}\"", missing.string);
    if output.compact {
        return;
    }

    if let Some(first) = missing.locations.first() {
        let _ = writeln!(writer, "    {} {}", "-->".blue(), first);
        let more = missing.locations.len() - 1;
        if more > 0 {
            let _ = writeln!(
                writer,
                "    (and {} more {})",
                more,
                if more == 1 { "location" } else { "locations" }
            );
        }
    }

    let languages = &missing.missing_from_languages;
    if missing.missing_everywhere(language_count) {
        let _ = writeln!(
            writer,
            "    Missing from: {} ({})",
            "ALL languages".red(),
            languages.len()
        );
    } else if languages.len() <= MAX_LANGUAGES_DISPLAY {
        let _ = writeln!(writer, "    Missing from: {}", languages.join(", "));
    } else {
        let _ = writeln!(
            writer,
            "    Missing from: {} (and {} more)",
            languages[..MAX_LANGUAGES_DISPLAY].join(", "),
            languages.len() - MAX_LANGUAGES_DISPLAY
        );
    }
}

fn print_heading_to<W: Write>(title: &str, writer: &mut W) {
    let rule = "=".repeat(RULE_WIDTH);
    let _ = writeln!(writer, "{}", rule);
    let _ = writeln!(writer, "{}", title.bold());
    let _ = writeln!(writer, "{}", rule);
}

fn print_success_to<W: Write>(message: &str, writer: &mut W) {
    let _ = writeln!(writer, "{} {}", SUCCESS_MARK.green(), message.green());
}

fn print_failure_to<W: Write>(message: &str, writer: &mut W) {
    let _ = writeln!(writer, "{} {}", FAILURE_MARK.red(), message.red());
}
