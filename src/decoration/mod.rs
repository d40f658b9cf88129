//! Decorations and ordered range sets
//!
//! ## decoration/ Invariants
//!
//! - Ranges are added to a [`RangeSetBuilder`] in strictly increasing start order.
//! - Ranges in one set never overlap and are never empty.
//! - A finished [`RangeSet`] is immutable; a new document revision gets a new set.

use crate::color::CanonicalColor;
use crate::constants::{editor, errors};
use crate::error::{ErrorType, Result, SwatchError};
use std::ops::Range;

pub mod interval_tree;
use interval_tree::IntervalTree;

/// Mark decoration telling the host to paint a swatch after the range
#[derive(Debug, Clone, PartialEq)]
pub struct Decoration {
    /// Class the host stylesheet hooks the swatch onto
    pub class: &'static str,
    /// Color the swatch is painted with
    pub color: CanonicalColor,
}

impl Decoration {
    #[must_use]
    pub fn color_swatch(color: CanonicalColor) -> Self {
        Decoration {
            class: editor::MARK_CLASS,
            color,
        }
    }

    /// Inline style attribute, e.g. `--color-swatch: rgb(255, 0, 0);`
    #[must_use]
    pub fn style(&self) -> String {
        format!("{}: {};", editor::SWATCH_VAR, self.color)
    }

    /// Attributes the host puts on the marked text
    #[must_use]
    pub fn attributes(&self) -> Vec<(&'static str, String)> {
        vec![("class", self.class.to_string()), ("style", self.style())]
    }
}

/// Annotation set for one document revision
pub type DecorationSet = RangeSet<Decoration>;

/// Immutable, ordered, non-overlapping set of ranged values
#[derive(Debug, Clone)]
pub struct RangeSet<T> {
    tree: IntervalTree<T>,
}

impl<T> RangeSet<T> {
    /// Set with no ranges
    #[must_use]
    pub fn empty() -> Self {
        RangeSet {
            tree: IntervalTree::default(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Ranges in ascending order
    pub fn iter(&self) -> impl Iterator<Item = (&Range<usize>, &T)> {
        self.tree.iter()
    }

    /// Ranges overlapping `range`, ascending
    #[must_use]
    pub fn query(&self, range: Range<usize>) -> Vec<(Range<usize>, &T)> {
        self.tree.query(range)
    }
}

impl<T> Default for RangeSet<T> {
    fn default() -> Self {
        Self::empty()
    }
}

/// Single forward pass builder for a [`RangeSet`]
#[derive(Debug)]
pub struct RangeSetBuilder<T> {
    items: Vec<(Range<usize>, T)>,
}

impl<T> RangeSetBuilder<T> {
    #[must_use]
    pub fn new() -> Self {
        RangeSetBuilder { items: Vec::new() }
    }

    /// Append `[from, to)`.
    ///
    /// `from` must be greater than the previous start and not inside the
    /// previous range; the range must be non-empty.
    pub fn add(&mut self, from: usize, to: usize, value: T) -> Result<()> {
        if from >= to {
            return Err(SwatchError::critical(
                ErrorType::Internal,
                errors::RANGE_ORDER,
                format!("Empty or inverted range {}..{}", from, to),
            ));
        }
        if let Some((last, _)) = self.items.last() {
            if from < last.end {
                return Err(SwatchError::critical(
                    ErrorType::Internal,
                    errors::RANGE_ORDER,
                    format!(
                        "Range {}..{} added after {}..{}",
                        from, to, last.start, last.end
                    ),
                ));
            }
        }
        self.items.push((from..to, value));
        Ok(())
    }

    /// Number of ranges added so far
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn finish(self) -> RangeSet<T> {
        RangeSet {
            tree: IntervalTree::from_sorted(self.items),
        }
    }
}

impl<T> Default for RangeSetBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}
