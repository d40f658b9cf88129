//! swatch - paint inline color swatches into a markdown file
//! Main entry point

use anyhow::Context;
use monster_swatch::buffer::TextBuffer;
use monster_swatch::locator::ColorSwatchField;
use monster_swatch::plugin::{InlineColorSwatchPlugin, PluginHost, PostProcessor};
use monster_swatch::render;
use std::io;

/// Host that only runs the live pass; a terminal has no rendered markup
#[derive(Default)]
struct TerminalHost {
    field: Option<ColorSwatchField>,
}

impl PluginHost for TerminalHost {
    fn register_markdown_post_processor(&mut self, _processor: PostProcessor) {
        log::debug!("terminal host ignores markup post-processors");
    }

    fn register_editor_extension(&mut self, field: ColorSwatchField) {
        self.field = Some(field);
    }
}

fn run() -> anyhow::Result<()> {
    let path = std::env::args().nth(1).context("usage: swatch <FILE>")?;
    let doc = TextBuffer::from_file(&path).with_context(|| format!("Failed to open {}", path))?;

    let plugin = InlineColorSwatchPlugin::new();
    let mut host = TerminalHost::default();
    plugin.onload(&mut host);

    let field = host
        .field
        .as_mut()
        .context("plugin registered no editor extension")?;
    let set = field.update(&doc)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    render::paint_document(&mut out, &doc, set).context("Failed to write to terminal")?;

    plugin.onunload();
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = run() {
        eprintln!("swatch error: {:#}", e);
        std::process::exit(1);
    }
}
