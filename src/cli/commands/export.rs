use anyhow::Result;

use super::{CommandResult, CommandSummary, ExportOutcome, ExportReport, helper::scan_summary};
use crate::{config::Settings, core::scan_sources, export::BaseCatalog};

/// Scan sources and merge the used strings into the base catalog.
///
/// A failed write is reported in the outcome rather than returned as an
/// error, so the scan summary is still printed.
pub fn export(settings: &Settings) -> Result<CommandResult> {
    let scan = scan_sources(settings)?;
    let summary = scan_summary(&scan);

    let (catalog, warning) = BaseCatalog::open(&settings.base_catalog);

    let outcome = match catalog.export(&scan.kept, &settings.reserved_keys) {
        Ok(summary) => ExportOutcome::Written(summary),
        Err(e) => ExportOutcome::Failed {
            path: settings.base_catalog.clone(),
            error: format!("{:#}", e),
        },
    };

    let mut warnings = scan.warnings;
    warnings.extend(warning);

    Ok(CommandResult {
        summary: CommandSummary::Export(ExportReport {
            scan: summary,
            outcome,
        }),
        warnings,
    })
}
