use anyhow::{Context, Result};

use super::{
    args::Arguments,
    commands::{CommandResult, check::check, export::export, init::init},
};
use crate::config::{CONFIG_FILE_NAME, Mode, Settings, load_config};

/// Dispatch to the command selected by the flags.
///
/// # Returns
/// - `Ok(CommandResult)` with the findings to report
/// - `Err` if the run cannot start (missing root, invalid configuration)
pub fn run(args: &Arguments) -> Result<CommandResult> {
    if !args.root.is_dir() {
        anyhow::bail!("Project root not found: {}", args.root.display());
    }

    if args.init {
        return init(&args.root);
    }

    // Search from the absolute root so parent directories are reachable
    let search_dir = args
        .root
        .canonicalize()
        .with_context(|| format!("Failed to resolve root: {}", args.root.display()))?;
    let config_result = load_config(&search_dir)?;

    // In verbose mode, inform user if using default config
    if args.verbose && !config_result.from_file {
        eprintln!(
            "Note: No {} found, using default configuration",
            CONFIG_FILE_NAME
        );
    }

    let settings = Settings::new(
        &args.root,
        config_result.config,
        args.lang_dir.as_deref(),
        args.mode(),
    );

    match settings.mode {
        Mode::Check => check(&settings),
        Mode::ExportBase => export(&settings),
    }
}
