//! Comment stripping applied before extraction, so commented-out markup and
//! calls are never reported.

use std::{borrow::Cow, sync::LazyLock};

use regex::Regex;

static MARKUP_COMMENT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->").unwrap());

static LINE_COMMENT_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"//[^\n]*").unwrap());

static BLOCK_COMMENT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)/\*.*?\*/").unwrap());

/// Remove `<!-- ... -->` comments, including multi-line ones.
pub fn strip_markup_comments(content: &str) -> Cow<'_, str> {
    MARKUP_COMMENT_REGEX.replace_all(content, "")
}

/// Remove `// ...` comments, then `/* ... */` comments.
///
/// This is textual: a `//` inside a string literal (a URL, say) also starts a
/// comment. Positions computed on the result are therefore approximate.
pub fn strip_script_comments(content: &str) -> String {
    let without_line_comments = LINE_COMMENT_REGEX.replace_all(content, "");
    BLOCK_COMMENT_REGEX
        .replace_all(&without_line_comments, "")
        .into_owned()
}
