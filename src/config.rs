use std::{
    collections::BTreeSet,
    fs,
    path::{Component, Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use glob::Pattern;
use regex::Regex;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".transcheckrc.json";

/// Catalog keys that carry metadata rather than source strings.
pub const DEFAULT_RESERVED_KEYS: &[&str] = &[".authorMsg", ".title"];

/// Catalog entries that may stay unused: they are referenced dynamically,
/// only in comments, or kept for upcoming releases.
pub const DEFAULT_UNUSED_ALLOW_LIST: &[&str] = &[
    "(beta)",
    "30th Anniversary",
    "Astro Bot",
    "Chroma Indigo",
    "Chroma Pearl",
    "Chroma Teal",
    "Cobalt Blue",
    "Cosmic Red",
    "Fortnite",
    "Galactic Purple",
    "God of War Ragnarok",
    "Grey Camouflage",
    "Midnight Black",
    "Nova Pink",
    "Spider-Man 2",
    "Starlight Blue",
    "Sterling Silver",
    "The Last of Us",
    "Volcanic Red",
    "White",
    "Sony DualSense",
    "Sony DualSense Edge",
    "Sony DualShock 4 V1",
    "Sony DualShock 4 V2",
    "Calibration in progress",
    "Continue",
    "Start",
    "Initializing...",
    "Sampling...",
    "left module",
    "right module",
    "Your device might not be a genuine Sony controller. If it is not a clone then please report this issue.",
    "Adaptive Trigger",
    "Buttons",
    "Haptic Vibration",
    "Headphone Jack",
    "Lights",
    "Microphone",
    "Speaker",
    "USB Connector",
];

/// Strings matching any of these (from their first character) are not translatable.
pub const DEFAULT_EXCLUDE_PATTERNS: &[&str] = &[
    r"^\.[\w-]+$",          // class selectors: .alert, .hide
    r"^#[\w-]+$",           // id selectors
    r"^[\w-]+\.[\w-]+$",    // compound selectors: circle.ds-touch
    r"^path,rect,circle",   // svg element lists
    r"^\\x[0-9a-fA-F]+$",   // hex escapes
];

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default)]
    pub ignores: Vec<String>,
    #[serde(default = "default_markup_patterns")]
    pub markup_patterns: Vec<String>,
    #[serde(default = "default_script_root")]
    pub script_root: String,
    #[serde(default = "default_script_extensions")]
    pub script_extensions: Vec<String>,
    #[serde(default = "default_lang_dir")]
    pub lang_dir: String,
    #[serde(default = "default_base_catalog")]
    pub base_catalog: String,
    #[serde(default = "default_marker_class")]
    pub marker_class: String,
    #[serde(default = "default_translation_function")]
    pub translation_function: String,
    #[serde(default = "default_receiver_prefixes")]
    pub receiver_prefixes: Vec<String>,
    #[serde(default = "default_inline_tags")]
    pub inline_tags: Vec<String>,
    #[serde(default = "default_reserved_keys")]
    pub reserved_keys: Vec<String>,
    #[serde(default = "default_unused_allow_list", alias = "whitelist")]
    pub unused_allow_list: Vec<String>,
    #[serde(default = "default_exclude_patterns")]
    pub exclude_patterns: Vec<String>,
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn default_markup_patterns() -> Vec<String> {
    to_strings(&["*.html", "templates/*.html"])
}

fn default_script_root() -> String {
    "js".to_string()
}

fn default_script_extensions() -> Vec<String> {
    to_strings(&["js"])
}

fn default_lang_dir() -> String {
    "lang".to_string()
}

fn default_base_catalog() -> String {
    "base.json".to_string()
}

fn default_marker_class() -> String {
    "ds-i18n".to_string()
}

fn default_translation_function() -> String {
    "l".to_string()
}

fn default_receiver_prefixes() -> Vec<String> {
    to_strings(&["this"])
}

fn default_inline_tags() -> Vec<String> {
    to_strings(&["b", "i", "em", "strong", "span"])
}

fn default_reserved_keys() -> Vec<String> {
    to_strings(DEFAULT_RESERVED_KEYS)
}

fn default_unused_allow_list() -> Vec<String> {
    to_strings(DEFAULT_UNUSED_ALLOW_LIST)
}

fn default_exclude_patterns() -> Vec<String> {
    to_strings(DEFAULT_EXCLUDE_PATTERNS)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ignores: Vec::new(),
            markup_patterns: default_markup_patterns(),
            script_root: default_script_root(),
            script_extensions: default_script_extensions(),
            lang_dir: default_lang_dir(),
            base_catalog: default_base_catalog(),
            marker_class: default_marker_class(),
            translation_function: default_translation_function(),
            receiver_prefixes: default_receiver_prefixes(),
            inline_tags: default_inline_tags(),
            reserved_keys: default_reserved_keys(),
            unused_allow_list: default_unused_allow_list(),
            exclude_patterns: default_exclude_patterns(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if a glob pattern or exclusion regex is invalid, or if
    /// the marker class or translation function is empty.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        for pattern in &self.markup_patterns {
            Pattern::new(pattern).with_context(|| {
                format!("Invalid glob pattern in 'markupPatterns': \"{}\"", pattern)
            })?;
        }

        for pattern in &self.exclude_patterns {
            Regex::new(pattern).with_context(|| {
                format!("Invalid regex in 'excludePatterns': \"{}\"", pattern)
            })?;
        }

        if self.marker_class.trim().is_empty() {
            bail!("'markerClass' must not be empty");
        }
        if self.translation_function.trim().is_empty() {
            bail!("'translationFunction' must not be empty");
        }

        Ok(())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}

/// How results are presented.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutputOptions {
    pub verbose: bool,
    pub json: bool,
    pub compact: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Compare extracted strings with the catalogs.
    Check,
    /// Merge extracted strings into the base catalog.
    ExportBase,
}

/// Everything a run needs, resolved once at startup.
#[derive(Debug, Clone)]
pub struct Settings {
    pub root: PathBuf,
    pub lang_dir: PathBuf,
    pub base_catalog: PathBuf,
    pub config: Config,
    pub reserved_keys: BTreeSet<String>,
    pub unused_allow_list: BTreeSet<String>,
    pub mode: Mode,
}

impl Settings {
    pub fn new(
        root: impl Into<PathBuf>,
        mut config: Config,
        lang_dir: Option<&Path>,
        mode: Mode,
    ) -> Self {
        let root = root.into();

        // CLI > config file > defaults
        if let Some(lang_dir) = lang_dir {
            config.lang_dir = lang_dir.to_string_lossy().to_string();
        }

        let lang_dir = resolve_path(&root, Path::new(&config.lang_dir));
        let base_catalog = lang_dir.join(&config.base_catalog);

        Self {
            reserved_keys: config.reserved_keys.iter().cloned().collect(),
            unused_allow_list: config.unused_allow_list.iter().cloned().collect(),
            root,
            lang_dir,
            base_catalog,
            config,
            mode,
        }
    }

    /// Resolve a config-relative path against the project root.
    pub fn resolve(&self, path: impl AsRef<Path>) -> PathBuf {
        resolve_path(&self.root, path.as_ref())
    }
}

/// Join `path` onto `root`, keeping it untouched when it is absolute or when
/// the root is the current directory (so reported paths stay short).
fn resolve_path(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    let is_cur_dir = root.components().all(|c| matches!(c, Component::CurDir));
    if is_cur_dir {
        path.to_path_buf()
    } else {
        let rel = path.strip_prefix(Path::new(".")).unwrap_or(path);
        root.join(rel)
    }
}
