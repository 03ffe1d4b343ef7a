use std::{fs, path::Path};

use anyhow::{Context, Result};

use super::{CommandResult, CommandSummary, InitSummary};
use crate::config::{CONFIG_FILE_NAME, default_config_json};

/// Write the default configuration into `root`, unless one is there already.
pub fn init(root: &Path) -> Result<CommandResult> {
    let path = root.join(CONFIG_FILE_NAME);

    let created = if path.exists() {
        false
    } else {
        fs::write(&path, format!("{}\n", default_config_json()?))
            .with_context(|| format!("Failed to write file: {}", path.display()))?;
        true
    };

    Ok(CommandResult {
        summary: CommandSummary::Init(InitSummary { path, created }),
        warnings: Vec::new(),
    })
}
