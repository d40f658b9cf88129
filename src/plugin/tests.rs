use super::*;
use crate::buffer::TextBuffer;

#[derive(Default)]
struct RecordingHost {
    processors: Vec<PostProcessor>,
    fields: Vec<ColorSwatchField>,
}

impl PluginHost for RecordingHost {
    fn register_markdown_post_processor(&mut self, processor: PostProcessor) {
        self.processors.push(processor);
    }

    fn register_editor_extension(&mut self, field: ColorSwatchField) {
        self.fields.push(field);
    }
}

#[test]
fn test_onload_registers_both_passes() {
    let mut host = RecordingHost::default();
    let plugin = InlineColorSwatchPlugin::new();
    plugin.onload(&mut host);

    assert_eq!(host.processors.len(), 1);
    assert_eq!(host.fields.len(), 1);
    assert!(host.fields[0].decorations().is_empty());
    assert_eq!(host.fields[0].revision(), None);
}

#[test]
fn test_registered_post_processor_annotates() {
    let mut host = RecordingHost::default();
    InlineColorSwatchPlugin::new().onload(&mut host);

    let mut root = Element::new("p").with_child(Element::new("code").with_text("#0000ff"));
    (host.processors[0])(&mut root);
    assert!(root.to_html().contains("background-color: rgb(0, 0, 255);"));
}

#[test]
fn test_registered_field_tracks_document() {
    let mut host = RecordingHost::default();
    InlineColorSwatchPlugin::new().onload(&mut host);

    let doc = TextBuffer::from_text("`hsl(0, 100%, 50%)`");
    let set = host.fields[0].update(&doc).unwrap();
    assert_eq!(set.len(), 1);
}

#[test]
fn test_onunload_is_harmless() {
    let plugin = InlineColorSwatchPlugin::new();
    plugin.onunload();
    plugin.onunload();
}
