//! String extraction from markup and script sources.
//!
//! Three rules feed the result:
//!
//! - markup rule: text of elements carrying the marker class in HTML files
//! - call rule: single string-literal arguments of the translation function
//! - embedded rule: marked elements inside script string literals, where
//!   `${l("...")}` substitutions are extracted individually
//!
//! Comments are stripped before matching. Positions are computed on the
//! stripped content.

mod calls;
mod comments;
mod markup;

use std::{fs, path::Path};

use anyhow::{Context, Result};
use regex::Regex;

pub use calls::unescape_literal;
pub use comments::{strip_markup_comments, strip_script_comments};

use self::{
    calls::{call_pattern, literal_content, substitution_pattern},
    markup::{
        find_tagged_elements, inline_tags_pattern, is_too_complex, markup_open_tag_pattern,
        script_open_tag_pattern,
    },
};
use crate::{
    config::Config,
    core::{ExtractedStrings, FileError, Occurrence, ScanWarning, SourceFiles},
    utils::LineIndex,
};

/// Strings found by each rule, kept apart so their sizes can be reported.
#[derive(Debug, Default)]
pub struct ExtractionResult {
    pub markup: ExtractedStrings,
    pub calls: ExtractedStrings,
    pub embedded: ExtractedStrings,
    pub warnings: Vec<ScanWarning>,
}

impl ExtractionResult {
    /// Merge the three rule results (markup, then calls, then embedded).
    pub fn merged(&self) -> ExtractedStrings {
        let mut all = self.markup.clone();
        all.merge(self.calls.clone());
        all.merge(self.embedded.clone());
        all
    }
}

/// Compiled extraction patterns.
#[derive(Debug, Clone)]
pub struct Extractor {
    markup_open_tag: Regex,
    script_open_tag: Regex,
    call: Regex,
    substitution: Regex,
    inline_tags: Regex,
}

impl Extractor {
    pub fn new(config: &Config) -> Result<Self> {
        let marker = &config.marker_class;
        let function = &config.translation_function;

        Ok(Self {
            markup_open_tag: Regex::new(&markup_open_tag_pattern(marker))
                .context("Failed to build markup element pattern")?,
            script_open_tag: Regex::new(&script_open_tag_pattern(marker))
                .context("Failed to build script element pattern")?,
            call: Regex::new(&call_pattern(function, &config.receiver_prefixes))
                .context("Failed to build translation call pattern")?,
            substitution: Regex::new(&substitution_pattern(function))
                .context("Failed to build substitution pattern")?,
            inline_tags: Regex::new(&inline_tags_pattern(&config.inline_tags))
                .context("Failed to build inline tag pattern")?,
        })
    }

    /// Run every rule over the discovered files.
    ///
    /// Unreadable files are recorded as warnings and skipped.
    pub fn extract(&self, files: &SourceFiles) -> ExtractionResult {
        let mut result = ExtractionResult::default();

        for file in &files.markup {
            match read_source(&file.path) {
                Ok(content) => {
                    self.extract_markup(&file.display, &content, &mut result.markup);
                }
                Err(e) => result.warnings.push(ScanWarning::new(&file.display, e)),
            }
        }

        for file in &files.scripts {
            match read_source(&file.path) {
                Ok(content) => {
                    let stripped = strip_script_comments(&content);
                    self.extract_calls(&file.display, &stripped, &mut result.calls);
                    self.extract_embedded(&file.display, &stripped, &mut result.embedded);
                }
                Err(e) => result.warnings.push(ScanWarning::new(&file.display, e)),
            }
        }

        result
    }

    /// Markup rule over raw HTML content (comments are stripped here).
    pub fn extract_markup(&self, file: &str, content: &str, out: &mut ExtractedStrings) {
        let content = strip_markup_comments(content);
        let index = LineIndex::new(&content);

        for element in find_tagged_elements(&self.markup_open_tag, &content) {
            if is_too_complex(element.inner, &self.inline_tags) || element.inner.is_empty() {
                continue;
            }
            let (line, col) = index.position(element.start);
            out.record(element.inner, Occurrence::new(file, line, col));
        }
    }

    /// Call rule over comment-stripped script content.
    pub fn extract_calls(&self, file: &str, content: &str, out: &mut ExtractedStrings) {
        let index = LineIndex::new(content);

        for caps in self.call.captures_iter(content) {
            let (Some(whole), Some(raw)) = (caps.get(0), literal_content(&caps)) else {
                continue;
            };
            if raw.is_empty() {
                continue;
            }
            let (line, col) = index.position(whole.start());
            out.record(unescape_literal(raw), Occurrence::new(file, line, col));
        }
    }

    /// Embedded rule over comment-stripped script content.
    ///
    /// Every occurrence is reported at the position of the enclosing element.
    pub fn extract_embedded(&self, file: &str, content: &str, out: &mut ExtractedStrings) {
        let index = LineIndex::new(content);

        for element in find_tagged_elements(&self.script_open_tag, content) {
            if is_too_complex(element.inner, &self.inline_tags) || element.inner.is_empty() {
                continue;
            }
            let (line, col) = index.position(element.start);

            let mut substituted = false;
            for caps in self.substitution.captures_iter(element.inner) {
                substituted = true;
                if let Some(raw) = literal_content(&caps)
                    && !raw.is_empty()
                {
                    out.record(unescape_literal(raw), Occurrence::new(file, line, col));
                }
            }

            if !substituted {
                out.record(element.inner, Occurrence::new(file, line, col));
            }
        }
    }
}

fn read_source(path: &Path) -> Result<String, FileError> {
    Ok(fs::read_to_string(path)?)
}
