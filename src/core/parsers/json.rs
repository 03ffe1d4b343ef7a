use std::{
    collections::{BTreeMap, BTreeSet},
    fs,
    path::{Path, PathBuf},
};

use serde_json::{Map, Value};

use crate::core::{FileError, ScanWarning};

/// Keys of every catalog that could be loaded.
#[derive(Debug, Default)]
pub struct Catalogs {
    /// Union of keys across all languages.
    pub all_keys: BTreeSet<String>,
    /// Keys per language code.
    pub keys_by_language: BTreeMap<String, BTreeSet<String>>,
    /// Catalog files that failed to load.
    pub warnings: Vec<ScanWarning>,
    /// Number of `*.json` files found, loaded or not.
    pub files_found: usize,
}

impl Catalogs {
    pub fn language_count(&self) -> usize {
        self.keys_by_language.len()
    }

    /// Union of keys with `reserved` removed.
    pub fn keys_without<'a>(
        &'a self,
        reserved: &'a BTreeSet<String>,
    ) -> impl Iterator<Item = &'a String> + 'a {
        self.all_keys.difference(reserved)
    }
}

/// Read a catalog file into a JSON object.
pub fn read_catalog(path: &Path) -> Result<Map<String, Value>, FileError> {
    let content = fs::read_to_string(path)?;
    let value: Value = serde_json::from_str(&content)?;
    match value {
        Value::Object(map) => Ok(map),
        _ => Err(FileError::NotAnObject),
    }
}

/// Keys of a catalog file; the empty-string key is a trailing placeholder
/// and is dropped.
pub fn parse_catalog_keys(path: &Path) -> Result<BTreeSet<String>, FileError> {
    let map = read_catalog(path)?;
    Ok(map.into_iter().map(|(k, _)| k).filter(|k| !k.is_empty()).collect())
}

/// Extracts the language code from a catalog filename.
///
/// Examples:
/// - "en.json" -> Some("en")
/// - "zh_CN.json" -> Some("zh_CN")
/// - "/path/to/lang/ja.json" -> Some("ja")
pub fn extract_language(path: impl AsRef<Path>) -> Option<String> {
    let path = path.as_ref();
    path.file_stem()
        .and_then(|s| s.to_str())
        .map(|s| s.to_string())
}

/// Load every `*.json` file directly inside `lang_dir`.
///
/// A missing directory is treated like an empty one. Files that fail to load
/// are reported in `warnings` and do not count as languages.
pub fn load_catalogs(lang_dir: impl AsRef<Path>) -> Catalogs {
    let lang_dir = lang_dir.as_ref();
    let mut result = Catalogs::default();

    let mut paths: Vec<PathBuf> = match fs::read_dir(lang_dir) {
        Ok(entries) => entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file() && path.extension().and_then(|e| e.to_str()) == Some("json")
            })
            .collect(),
        Err(_) => Vec::new(),
    };
    paths.sort();
    result.files_found = paths.len();

    for path in paths {
        let Some(language) = extract_language(&path) else {
            continue;
        };
        match parse_catalog_keys(&path) {
            Ok(keys) => {
                result.all_keys.extend(keys.iter().cloned());
                result.keys_by_language.insert(language, keys);
            }
            Err(e) => {
                result
                    .warnings
                    .push(ScanWarning::new(path.to_string_lossy(), e));
            }
        }
    }

    result
}
