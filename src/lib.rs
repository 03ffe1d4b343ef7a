//! transcheck - translation string checker
//!
//! Cross-checks UI strings used in HTML templates and JavaScript sources
//! against per-language JSON catalogs. It reports strings used in code but
//! missing from catalogs, and catalog keys no longer used in code. It can
//! also export every used string into a base catalog for translators.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface (arguments, commands, reports)
//! - `config`: Configuration file loading and run settings
//! - `core`: Scanning engine (file discovery, extraction, filtering, catalogs)
//! - `export`: Base catalog export
//! - `rules`: Missing and unused translation detection
//! - `utils`: Shared utility functions

pub mod cli;
pub mod config;
pub mod core;
pub mod export;
pub mod rules;
pub mod utils;
