//! Comparison rules between strings used in source and catalog keys.
//!
//! Pure functions: each takes the inputs it needs and returns sorted results.
//!
//! - `missing`: used strings that one or more catalogs lack
//! - `unused`: catalog keys no longer referenced from source

use std::collections::BTreeSet;

use crate::core::{Catalogs, ExclusionFilter, ExtractedStrings};

pub mod missing;
pub mod unused;

pub use missing::{MissingTranslation, check_missing_translations};
pub use unused::check_unused_translations;

/// Both comparison results for one run.
#[derive(Debug, Default)]
pub struct Comparison {
    pub missing: Vec<MissingTranslation>,
    pub unused: Vec<String>,
}

impl Comparison {
    pub fn is_in_sync(&self) -> bool {
        self.missing.is_empty() && self.unused.is_empty()
    }
}

pub fn compare(
    kept: &ExtractedStrings,
    catalogs: &Catalogs,
    reserved_keys: &BTreeSet<String>,
    allow_list: &BTreeSet<String>,
    filter: &ExclusionFilter,
) -> Comparison {
    Comparison {
        missing: check_missing_translations(kept, catalogs, reserved_keys),
        unused: check_unused_translations(kept, catalogs, reserved_keys, allow_list, filter),
    }
}
