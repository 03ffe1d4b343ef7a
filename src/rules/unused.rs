//! Unused translation detection rule.
//!
//! Detects catalog keys that no source string references any more.

use std::collections::BTreeSet;

use crate::core::{Catalogs, ExclusionFilter, ExtractedStrings};

/// Keys defined in any catalog but not used in source.
///
/// Reserved keys, allow-listed strings and keys matching an exclusion
/// pattern are never reported. Sorted.
pub fn check_unused_translations(
    kept: &ExtractedStrings,
    catalogs: &Catalogs,
    reserved_keys: &BTreeSet<String>,
    allow_list: &BTreeSet<String>,
    filter: &ExclusionFilter,
) -> Vec<String> {
    catalogs
        .keys_without(reserved_keys)
        .filter(|key| !kept.contains(key) && !allow_list.contains(*key))
        .filter(|key| !filter.is_excluded(key))
        .cloned()
        .collect()
}
