//! Scanning engine: file discovery, string extraction, filtering and
//! catalog loading.
//!
//! The pipeline is driven by [`context::scan_sources`]; catalogs are loaded
//! separately with [`load_catalogs`] since export mode never needs them.

pub mod context;
pub mod extract;
pub mod file_scanner;
pub mod filter;
pub mod parsers;
mod types;

pub use context::{SourceScan, scan_sources};
pub use extract::{ExtractionResult, Extractor};
pub use file_scanner::{SourceFile, SourceFiles, scan_files};
pub use filter::{ExclusionFilter, FilteredStrings};
pub use parsers::json::{Catalogs, load_catalogs, read_catalog};
pub use types::*;
