//! File parsers for translation catalogs.
//!
//! - `json`: per-language JSON catalogs (one file per language in the language directory)

pub mod json;
