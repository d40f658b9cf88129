//! monster-swatch - Inline color swatches for CSS color literals
//!
//! Two passes share one color normalizer: a static pass that annotates
//! rendered `code` elements, and a live pass that recomputes swatch marks
//! for an editor buffer whenever its content changes.

pub mod buffer;
pub mod color;
pub mod constants;
pub mod decoration;
pub mod error;
pub mod locator;
pub mod markup;
pub mod plugin;
pub mod render;
