//! Host integration
//!
//! The host application owns registration bookkeeping; the plugin only hands
//! it the two passes. Nothing is torn down on unload because the host
//! revokes registrations itself.

use crate::locator::ColorSwatchField;
use crate::markup::{self, Element};

/// Static post-processor run over each rendered fragment
pub type PostProcessor = Box<dyn Fn(&mut Element)>;

/// Registration surface a host exposes to plugins
pub trait PluginHost {
    /// Run `processor` over every rendered document fragment.
    fn register_markdown_post_processor(&mut self, processor: PostProcessor);

    /// Attach a live decoration field to the editor.
    fn register_editor_extension(&mut self, field: ColorSwatchField);
}

/// Inline color swatch plugin
#[derive(Debug, Default, Clone, Copy)]
pub struct InlineColorSwatchPlugin;

impl InlineColorSwatchPlugin {
    #[must_use]
    pub fn new() -> Self {
        InlineColorSwatchPlugin
    }

    /// Register the static and live passes with `host`
    pub fn onload(&self, host: &mut impl PluginHost) {
        host.register_markdown_post_processor(Box::new(markup::annotate_inline_code));
        host.register_editor_extension(ColorSwatchField::new());
        log::info!("inline color swatches loaded");
    }

    pub fn onunload(&self) {
        log::info!("inline color swatches unloaded");
    }
}

#[cfg(test)]
mod tests;
