use std::path::{Path, PathBuf};

use glob::{Pattern, glob};
use walkdir::WalkDir;

use crate::{
    config::Settings,
    core::{FileError, ScanWarning},
};

/// A discovered source file.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct SourceFile {
    /// Path used to open the file.
    pub path: PathBuf,
    /// Path relative to the project root, used in reports.
    pub display: String,
}

impl SourceFile {
    pub fn new(root: &Path, path: PathBuf) -> Self {
        let display = path
            .strip_prefix(root)
            .unwrap_or(&path)
            .to_string_lossy()
            .to_string();
        Self { path, display }
    }
}

/// Result of scanning for source files.
#[derive(Debug, Default)]
pub struct SourceFiles {
    pub markup: Vec<SourceFile>,
    pub scripts: Vec<SourceFile>,
    /// Paths that could not be visited.
    pub warnings: Vec<ScanWarning>,
}

pub fn scan_files(settings: &Settings) -> SourceFiles {
    let config = &settings.config;
    let root = settings.root.as_path();
    let mut result = SourceFiles::default();

    // Patterns were validated with the config; invalid ones never get here
    let ignores: Vec<Pattern> = config
        .ignores
        .iter()
        .filter_map(|p| Pattern::new(p).ok())
        .collect();
    let is_ignored = |file: &SourceFile| ignores.iter().any(|p| p.matches(&file.display));

    for pattern in &config.markup_patterns {
        let full_pattern = settings.resolve(pattern);
        let Ok(entries) = glob(&full_pattern.to_string_lossy()) else {
            continue;
        };
        for entry in entries {
            match entry {
                Ok(path) if path.is_file() => {
                    let file = SourceFile::new(root, path);
                    if !is_ignored(&file) {
                        result.markup.push(file);
                    }
                }
                Ok(_) => {}
                Err(e) => {
                    let path = e.path().to_string_lossy().to_string();
                    result.warnings.push(ScanWarning::new(path, e.into_error()));
                }
            }
        }
    }

    let script_root = settings.resolve(&config.script_root);
    if script_root.is_dir() {
        for entry in WalkDir::new(&script_root).sort_by_file_name() {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    let path = e
                        .path()
                        .map(|p| p.to_string_lossy().to_string())
                        .unwrap_or_else(|| script_root.to_string_lossy().to_string());
                    result
                        .warnings
                        .push(ScanWarning::new(path, FileError::Read(e.into())));
                    continue;
                }
            };

            let path = entry.path();
            if entry.file_type().is_file() && is_script_file(path, &config.script_extensions) {
                let file = SourceFile::new(root, path.to_path_buf());
                if !is_ignored(&file) {
                    result.scripts.push(file);
                }
            }
        }
    }

    // Overlapping patterns may list a file twice
    result.markup.sort();
    result.markup.dedup();
    result.scripts.sort();

    result
}

fn is_script_file(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| extensions.iter().any(|allowed| allowed == ext))
}
