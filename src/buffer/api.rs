//! Buffer abstraction layer
//!
//! Read-only line API a document host hands to the live decoration pass.
//!
//! ## Indexing model
//!
//! All offsets are **byte offsets** into the UTF-8 text. Line text never
//! includes the line terminator (`\n` or `\r\n`).
//!
//! ## Revision semantics
//!
//! Revision increments only on text mutations. Cursor movement does **not**
//! increment revision, so anything keyed on the revision recomputes after
//! edits anywhere in the document and never after pure navigation.

/// One line of a document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    /// 1-based line number
    pub number: usize,
    /// Byte offset of the first character of the line
    pub from: usize,
    /// Line content without the terminator
    pub text: &'a str,
}

impl Line<'_> {
    /// Byte offset just past the last character of the line
    #[must_use]
    pub fn to(&self) -> usize {
        self.from + self.text.len()
    }
}

/// Read‑only view of a document at a specific revision.
pub trait BufferView {
    /// Total number of bytes in the document.
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of logical lines. An empty document has one empty line.
    fn line_count(&self) -> usize;

    /// Byte offset of the start of `line` (0‑based).
    fn line_start(&self, line: usize) -> usize;

    /// Contents of `line` (0‑based) without the trailing terminator.
    fn line_text(&self, line: usize) -> &str;

    /// Revision identifier; increments on text mutations only.
    fn revision(&self) -> u64;

    /// Line by 1‑based `number`.
    fn line(&self, number: usize) -> Line<'_> {
        let idx = number - 1;
        Line {
            number,
            from: self.line_start(idx),
            text: self.line_text(idx),
        }
    }

    /// All lines in document order.
    fn lines(&self) -> impl Iterator<Item = Line<'_>> + '_ {
        (1..=self.line_count()).map(move |number| self.line(number))
    }
}
