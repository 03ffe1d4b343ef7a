//! Translation function calls: `l("Text")`, `this.l('Text')`, `` l(`Text`) ``.

use std::borrow::Cow;

use regex::Captures;

/// A single quoted string literal in any of the three JavaScript quote
/// styles. Exactly one of the three groups participates in a match.
const QUOTED_LITERAL: &str = r#"(?:"((?:\\.|[^"\\])*)"|'((?:\\.|[^'\\])*)'|`((?:\\.|[^`\\])*)`)"#;

/// Pattern for `[receiver.]name( LITERAL )` with a single literal argument.
pub fn call_pattern(function: &str, receivers: &[String]) -> String {
    let receiver = if receivers.is_empty() {
        String::new()
    } else {
        let alternatives: Vec<String> = receivers.iter().map(|r| regex::escape(r)).collect();
        format!(r"(?:(?:{})\.)?", alternatives.join("|"))
    };
    format!(
        r"(?s){}\b{}\s*\(\s*{}\s*\)",
        receiver,
        regex::escape(function),
        QUOTED_LITERAL
    )
}

/// Pattern for a `${name( LITERAL )}` substitution inside a template literal.
pub fn substitution_pattern(function: &str) -> String {
    format!(
        r"(?s)\$\{{{}\s*\(\s*{}\s*\)\}}",
        regex::escape(function),
        QUOTED_LITERAL
    )
}

/// The raw (still escaped) literal text of a call or substitution match.
pub fn literal_content<'h>(caps: &Captures<'h>) -> Option<&'h str> {
    caps.iter().skip(1).flatten().next().map(|m| m.as_str())
}

/// Undo `\'`, `\"` and `\\` escapes in one left-to-right pass.
///
/// Other escape sequences are kept as written.
///
/// # Examples
///
/// ```
/// use transcheck::core::extract::unescape_literal;
///
/// assert_eq!(unescape_literal(r"It\'s"), "It's");
/// assert_eq!(unescape_literal(r"C:\\temp"), r"C:\temp");
/// assert_eq!(unescape_literal(r"a\nb"), r"a\nb");
/// ```
pub fn unescape_literal(raw: &str) -> Cow<'_, str> {
    if !raw.contains('\\') {
        return Cow::Borrowed(raw);
    }

    let mut text = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\\'
            && let Some(&next) = chars.peek()
            && matches!(next, '\'' | '"' | '\\')
        {
            text.push(next);
            chars.next();
            continue;
        }
        text.push(c);
    }
    Cow::Owned(text)
}
