//! Incremental span locator
//!
//! Finds inline code spans in a [`BufferView`] whose text is a color
//! literal and turns them into swatch decorations.
//!
//! ## locator/ Invariants
//!
//! - Every recompute rescans the whole document; nothing is diffed.
//! - A mark covers exactly the inner text of a span, never the backticks.
//! - Marks are produced in document order, so the builder never sees an
//!   out-of-order range; if it does, the recompute fails and publishes nothing.
//! - The field recomputes when the revision changes and only then.

use crate::buffer::api::BufferView;
use crate::color;
use crate::constants::editor::CODE_DELIMITER;
use crate::decoration::{Decoration, DecorationSet, RangeSetBuilder};
use crate::error::Result;
use regex::Regex;
use std::ops::Range;
use std::sync::LazyLock;

/// A backtick, at least one non-backtick character, a backtick
static CODE_SPAN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("{d}([^{d}]+){d}", d = CODE_DELIMITER)).expect("code span pattern is valid")
});

/// Inline code span within one line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeSpan<'a> {
    /// Inner range relative to the line start, delimiters excluded
    pub range: Range<usize>,
    /// Text between the delimiters
    pub text: &'a str,
}

/// Iterate the inline code spans of a single line, left to right.
///
/// Spans never nest: each opening backtick pairs with the next one. Two
/// adjacent backticks never form a span; the second one may open the next.
pub fn find_code_spans(line: &str) -> impl Iterator<Item = CodeSpan<'_>> + '_ {
    CODE_SPAN.captures_iter(line).filter_map(|caps| {
        let inner = caps.get(1)?;
        Some(CodeSpan {
            range: inner.start()..inner.end(),
            text: inner.as_str(),
        })
    })
}

/// Compute the swatch decorations of a whole document.
pub fn color_swatch_decorations(doc: &impl BufferView) -> Result<DecorationSet> {
    let mut builder = RangeSetBuilder::new();

    for line in doc.lines() {
        for span in find_code_spans(line.text) {
            if span.text.is_empty() {
                continue;
            }
            let Some(color) = color::normalize(span.text) else {
                log::trace!(
                    "line {}: `{}` is not a color ({:?})",
                    line.number,
                    span.text,
                    color::classify(span.text)
                );
                continue;
            };

            let from = line.from + span.range.start;
            let to = from + span.text.len();
            builder.add(from, to, Decoration::color_swatch(color))?;
        }
    }

    Ok(builder.finish())
}

/// Decoration state kept by a live editor view
///
/// Holds the set for the revision it was computed from. Call
/// [`ColorSwatchField::update`] whenever the host notifies a change; it only
/// rescans when the document content actually changed.
#[derive(Debug, Default)]
pub struct ColorSwatchField {
    decorations: DecorationSet,
    revision: Option<u64>,
    recomputes: u64,
}

impl ColorSwatchField {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bring the field up to date with `doc` and return the current set.
    pub fn update(&mut self, doc: &impl BufferView) -> Result<&DecorationSet> {
        let revision = doc.revision();
        if self.revision == Some(revision) {
            return Ok(&self.decorations);
        }

        // Drop the previous revision's ranges before rescanning
        self.decorations = DecorationSet::empty();
        self.revision = None;
        self.recomputes += 1;

        let decorations = color_swatch_decorations(doc).inspect_err(|e| {
            log::error!("swatch recompute failed at revision {}: {}", revision, e);
        })?;
        log::debug!(
            "revision {}: {} color swatches",
            revision,
            decorations.len()
        );

        self.decorations = decorations;
        self.revision = Some(revision);
        Ok(&self.decorations)
    }

    /// Set computed by the last successful update
    #[must_use]
    pub fn decorations(&self) -> &DecorationSet {
        &self.decorations
    }

    /// Revision the current set belongs to
    #[must_use]
    pub fn revision(&self) -> Option<u64> {
        self.revision
    }

    /// Number of full rescans performed so far
    #[must_use]
    pub fn recomputes(&self) -> u64 {
        self.recomputes
    }
}

#[cfg(test)]
mod tests;
