//! Common utility functions shared across the codebase.

/// Maps byte offsets in a text to 1-based line/column positions.
///
/// Line starts are computed once, so each lookup is a binary search.
/// Columns are counted in characters, not bytes.
pub struct LineIndex<'a> {
    content: &'a str,
    line_starts: Vec<usize>,
}

impl<'a> LineIndex<'a> {
    pub fn new(content: &'a str) -> Self {
        let mut line_starts = vec![0];
        for (i, c) in content.char_indices() {
            if c == '\n' {
                line_starts.push(i + 1);
            }
        }
        Self {
            content,
            line_starts,
        }
    }

    /// Returns the 1-based `(line, column)` of a byte offset.
    ///
    /// `offset` must lie on a character boundary.
    ///
    /// # Examples
    ///
    /// ```
    /// use transcheck::utils::LineIndex;
    ///
    /// let index = LineIndex::new("ab\ncd");
    /// assert_eq!(index.position(0), (1, 1));
    /// assert_eq!(index.position(4), (2, 2));
    /// ```
    pub fn position(&self, offset: usize) -> (usize, usize) {
        let line = match self.line_starts.binary_search(&offset) {
            Ok(line) => line + 1,
            Err(line) => line,
        };
        let line_start = self.line_starts[line - 1];
        let col = self.content[line_start..offset].chars().count() + 1;
        (line, col)
    }
}
