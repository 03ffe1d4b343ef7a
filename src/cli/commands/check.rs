use anyhow::Result;

use super::{CheckSummary, CommandResult, CommandSummary, helper::scan_summary};
use crate::{
    config::Settings,
    core::{load_catalogs, scan_sources},
    rules::compare,
};

/// Scan sources, load catalogs and compare both sides.
pub fn check(settings: &Settings) -> Result<CommandResult> {
    let scan = scan_sources(settings)?;
    let catalogs = load_catalogs(&settings.lang_dir);

    let comparison = compare(
        &scan.kept,
        &catalogs,
        &settings.reserved_keys,
        &settings.unused_allow_list,
        &scan.filter,
    );

    let summary = CheckSummary {
        scan: scan_summary(&scan),
        catalog_key_count: catalogs.all_keys.len(),
        compared_key_count: catalogs.keys_without(&settings.reserved_keys).count(),
        language_count: catalogs.language_count(),
        empty_lang_dir: (catalogs.files_found == 0).then(|| settings.lang_dir.clone()),
        allow_list: settings.unused_allow_list.iter().cloned().collect(),
        comparison,
    };

    let mut warnings = scan.warnings;
    warnings.extend(catalogs.warnings);

    Ok(CommandResult {
        summary: CommandSummary::Check(summary),
        warnings,
    })
}
