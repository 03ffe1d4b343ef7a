//! Tagged-element matching shared by the markup rule and the
//! markup-in-script rule.

use regex::Regex;

/// An element carrying the marker class, with its raw inner text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaggedElement<'a> {
    /// Byte offset of the opening `<`.
    pub start: usize,
    pub inner: &'a str,
}

/// Find marked elements in `content`.
///
/// `open_tag` must capture the tag name in group 1. The inner text runs up to
/// the first matching closing tag, so nested elements of the same name are
/// not balanced. Scanning resumes after that closing tag; an opening tag with
/// no closing tag is skipped.
pub fn find_tagged_elements<'a>(open_tag: &Regex, content: &'a str) -> Vec<TaggedElement<'a>> {
    let mut elements = Vec::new();
    let mut pos = 0;

    while let Some(caps) = open_tag.captures_at(content, pos) {
        let (Some(open), Some(tag)) = (caps.get(0), caps.get(1)) else {
            break;
        };
        let closing = format!("</{}>", tag.as_str());

        match content[open.end()..].find(&closing) {
            Some(rel) => {
                let inner_end = open.end() + rel;
                elements.push(TaggedElement {
                    start: open.start(),
                    inner: &content[open.end()..inner_end],
                });
                pos = inner_end + closing.len();
            }
            // Opening tags start with the single-byte '<'
            None => pos = open.start() + 1,
        }
    }

    elements
}

/// True when the inner text holds markup other than inline formatting tags.
///
/// Such elements are skipped; their translatable parts are expected to be
/// marked individually.
pub fn is_too_complex(inner: &str, inline_tags: &Regex) -> bool {
    if !(inner.contains('<') && inner.contains('>')) {
        return false;
    }
    inline_tags.replace_all(inner, "").contains('<')
}

/// Opening-tag pattern for markup files: `class="..."` with double quotes.
pub fn markup_open_tag_pattern(marker_class: &str) -> String {
    format!(
        r#"<(\w+)[^>]*class="[^"]*{}[^"]*"[^>]*>"#,
        regex::escape(marker_class)
    )
}

/// Opening-tag pattern for markup inside script literals, where the class
/// attribute may be quoted with `"`, `'` or a back-tick.
pub fn script_open_tag_pattern(marker_class: &str) -> String {
    format!(
        r#"<(\w+)[^>]*class=["'`][^"'`]*{}[^"'`]*["'`][^>]*>"#,
        regex::escape(marker_class)
    )
}

/// Pattern matching opening or closing inline formatting tags such as
/// `<b>` or `</span>`.
pub fn inline_tags_pattern(tags: &[String]) -> String {
    let alternatives: Vec<String> = tags.iter().map(|t| regex::escape(t)).collect();
    format!(r"</?(?:{})>", alternatives.join("|"))
}
