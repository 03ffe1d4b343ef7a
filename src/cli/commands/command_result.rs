use std::path::PathBuf;

use crate::{
    cli::ExitStatus,
    core::{ScanStats, ScanWarning},
    export::ExportSummary,
    rules::Comparison,
};

/// What the source scan found, shared by check and export.
#[derive(Debug)]
pub struct ScanSummary {
    pub stats: ScanStats,
    /// Number of translatable strings after exclusion.
    pub used_count: usize,
    /// Sorted strings dropped by the exclusion patterns.
    pub excluded: Vec<String>,
}

#[derive(Debug)]
pub struct CheckSummary {
    pub scan: ScanSummary,
    /// Union of catalog keys, reserved keys included.
    pub catalog_key_count: usize,
    /// Union of catalog keys without reserved keys.
    pub compared_key_count: usize,
    pub language_count: usize,
    /// Set when the language directory holds no catalog files.
    pub empty_lang_dir: Option<PathBuf>,
    /// Sorted allow-list, reported as is.
    pub allow_list: Vec<String>,
    pub comparison: Comparison,
}

#[derive(Debug)]
pub enum ExportOutcome {
    Written(ExportSummary),
    Failed { path: PathBuf, error: String },
}

#[derive(Debug)]
pub struct ExportReport {
    pub scan: ScanSummary,
    pub outcome: ExportOutcome,
}

#[derive(Debug)]
pub struct InitSummary {
    pub path: PathBuf,
    /// False when a configuration file was already there.
    pub created: bool,
}

#[derive(Debug)]
pub enum CommandSummary {
    Check(CheckSummary),
    Export(ExportReport),
    Init(InitSummary),
}

/// Result of running one transcheck command.
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    /// Files and paths that were skipped.
    pub warnings: Vec<ScanWarning>,
}

impl CommandResult {
    pub fn exit_status(&self) -> ExitStatus {
        let failed = match &self.summary {
            CommandSummary::Check(summary) => !summary.comparison.is_in_sync(),
            CommandSummary::Export(report) => {
                matches!(report.outcome, ExportOutcome::Failed { .. })
            }
            CommandSummary::Init(summary) => !summary.created,
        };

        if failed {
            ExitStatus::Failure
        } else {
            ExitStatus::Success
        }
    }
}
