//! Line indexing for TextBuffer
//! Tracks byte offsets of line starts

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineIndex {
    /// Byte offsets of the start of each line
    /// Always contains at least [0]
    line_starts: Vec<usize>,
}

impl LineIndex {
    /// Create a new LineIndex starting with a single empty line
    #[must_use]
    pub fn new() -> Self {
        Self {
            line_starts: vec![0],
        }
    }

    /// Index an existing text in one pass
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        let mut idx = Self::new();
        idx.insert(0, text.as_bytes());
        idx
    }

    /// Total number of lines
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Get start of a line (0-indexed)
    #[must_use]
    pub fn get_start(&self, line_idx: usize) -> Option<usize> {
        self.line_starts.get(line_idx).copied()
    }

    /// Get end of a line: position of its newline, or `total_len` for the
    /// last line
    #[must_use]
    pub fn get_end(&self, line_idx: usize, total_len: usize) -> Option<usize> {
        if line_idx >= self.line_starts.len() {
            return None;
        }
        match self.line_starts.get(line_idx + 1) {
            Some(&next) => Some(next - 1),
            None => Some(total_len),
        }
    }

    /// Get line number for a byte position (binary search)
    #[must_use]
    pub fn get_line_at(&self, pos: usize) -> usize {
        match self.line_starts.binary_search(&pos) {
            Ok(idx) => idx,
            Err(idx) => idx.saturating_sub(1),
        }
    }

    /// Update index for insertion of `bytes` at `pos`
    pub fn insert(&mut self, pos: usize, bytes: &[u8]) {
        let len = bytes.len();
        if len == 0 {
            return;
        }

        let line_idx = self.get_line_at(pos);

        for start in self.line_starts.iter_mut().skip(line_idx + 1) {
            *start += len;
        }

        let new_starts: Vec<usize> = bytes
            .iter()
            .enumerate()
            .filter(|&(_, &byte)| byte == b'\n')
            .map(|(i, _)| pos + i + 1)
            .collect();

        if !new_starts.is_empty() {
            self.line_starts
                .splice(line_idx + 1..line_idx + 1, new_starts);
        }
    }

    /// Update index for deletion of `len` bytes at `pos`
    pub fn delete(&mut self, pos: usize, len: usize) {
        if len == 0 {
            return;
        }

        let delete_end = pos + len;

        // Lines starting inside the deleted range are merged into the line at `pos`
        self.line_starts
            .retain(|&start| start <= pos || start > delete_end);

        for start in self.line_starts.iter_mut() {
            if *start > pos {
                *start -= len;
            }
        }
    }
}

impl Default for LineIndex {
    fn default() -> Self {
        Self::new()
    }
}
