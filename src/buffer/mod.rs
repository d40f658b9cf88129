//! Text buffer for the live decoration pass
//!
//! `TextBuffer` keeps the document as one UTF-8 string plus a [`LineIndex`]
//! that is updated incrementally on every edit. The cursor is a byte offset
//! that always sits on a character boundary.

use crate::buffer::api::BufferView;
use crate::constants::errors;
use crate::error::{ErrorType, Result, SwatchError};
use std::fmt::{self, Display};
use std::ops::Range;
use std::path::Path;

pub mod api;
pub mod line_index;
use line_index::LineIndex;

/// Editable document with revision tracking
#[derive(Debug, Clone, Default)]
pub struct TextBuffer {
    text: String,
    line_index: LineIndex,
    /// Cursor position (byte offset)
    cursor: usize,
    /// Monotonic revision counter for change detection
    revision: u64,
}

impl TextBuffer {
    /// Create an empty buffer
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a buffer holding `text`, cursor at the start, revision 0
    #[must_use]
    pub fn from_text(text: impl Into<String>) -> Self {
        let text = text.into();
        TextBuffer {
            line_index: LineIndex::from_text(&text),
            text,
            cursor: 0,
            revision: 0,
        }
    }

    /// Load a UTF-8 file into a new buffer
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(Self::from_text(text))
    }

    /// Get the current cursor position
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Move the cursor. Navigation is not an edit: revision is unchanged.
    pub fn set_cursor(&mut self, pos: usize) -> Result<()> {
        if !self.text.is_char_boundary(pos) {
            return Err(SwatchError::new(
                ErrorType::Buffer,
                errors::INVALID_CURSOR,
                format!(
                    "Cursor position {} is not a character boundary (len: {})",
                    pos,
                    self.text.len()
                ),
            ));
        }
        self.cursor = pos;
        Ok(())
    }

    /// Total length in bytes
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Current revision
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Whole document text
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Number of lines (at least 1)
    #[must_use]
    pub fn get_total_lines(&self) -> usize {
        self.line_index.line_count()
    }

    /// 0-based line containing the cursor
    #[must_use]
    pub fn get_line(&self) -> usize {
        self.line_index.get_line_at(self.cursor)
    }

    /// Move cursor left by one character
    pub fn move_left(&mut self) -> bool {
        match self.text[..self.cursor].chars().next_back() {
            Some(ch) => {
                self.cursor -= ch.len_utf8();
                true
            }
            None => false,
        }
    }

    /// Move cursor right by one character
    pub fn move_right(&mut self) -> bool {
        match self.text[self.cursor..].chars().next() {
            Some(ch) => {
                self.cursor += ch.len_utf8();
                true
            }
            None => false,
        }
    }

    pub fn move_to_start(&mut self) {
        self.cursor = 0;
    }

    pub fn move_to_end(&mut self) {
        self.cursor = self.text.len();
    }

    /// Insert a string at the cursor and move the cursor past it
    pub fn insert_str(&mut self, s: &str) -> Result<()> {
        if s.is_empty() {
            return Ok(());
        }
        self.line_index.insert(self.cursor, s.as_bytes());
        self.text.insert_str(self.cursor, s);
        self.cursor += s.len();
        self.revision += 1;
        Ok(())
    }

    /// Insert a character at the cursor
    pub fn insert_char(&mut self, ch: char) -> Result<()> {
        let mut utf8 = [0u8; 4];
        self.insert_str(ch.encode_utf8(&mut utf8))
    }

    /// Delete the character before the cursor
    pub fn delete_backward(&mut self) -> bool {
        let end = self.cursor;
        if !self.move_left() {
            return false;
        }
        self.remove(self.cursor..end);
        true
    }

    /// Delete the character at the cursor
    pub fn delete_forward(&mut self) -> bool {
        let Some(ch) = self.text[self.cursor..].chars().next() else {
            return false;
        };
        self.remove(self.cursor..self.cursor + ch.len_utf8());
        true
    }

    /// Delete an arbitrary byte range. The cursor is clamped to stay valid.
    pub fn delete_range(&mut self, range: Range<usize>) -> Result<()> {
        let valid = range.start <= range.end
            && range.end <= self.text.len()
            && self.text.is_char_boundary(range.start)
            && self.text.is_char_boundary(range.end);
        if !valid {
            return Err(SwatchError::new(
                ErrorType::Buffer,
                errors::INVALID_DELETE,
                format!(
                    "Cannot delete {}..{} (len: {})",
                    range.start,
                    range.end,
                    self.text.len()
                ),
            ));
        }
        if range.is_empty() {
            return Ok(());
        }

        if self.cursor >= range.end {
            self.cursor -= range.len();
        } else if self.cursor > range.start {
            self.cursor = range.start;
        }
        self.remove(range);
        Ok(())
    }

    /// Expects a validated, non-empty range
    fn remove(&mut self, range: Range<usize>) {
        self.line_index.delete(range.start, range.len());
        self.text.replace_range(range, "");
        self.revision += 1;
    }
}

impl Display for TextBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl BufferView for TextBuffer {
    fn len(&self) -> usize {
        self.text.len()
    }

    fn line_count(&self) -> usize {
        self.line_index.line_count()
    }

    fn line_start(&self, line: usize) -> usize {
        self.line_index.get_start(line).unwrap_or(self.text.len())
    }

    fn line_text(&self, line: usize) -> &str {
        let start = self.line_start(line);
        let end = self
            .line_index
            .get_end(line, self.text.len())
            .unwrap_or(self.text.len());
        let text = &self.text[start..end];
        text.strip_suffix('\r').unwrap_or(text)
    }

    fn revision(&self) -> u64 {
        self.revision
    }
}
