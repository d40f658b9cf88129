use super::*;
use crate::buffer::TextBuffer;

fn spans(line: &str) -> Vec<(Range<usize>, &str)> {
    find_code_spans(line).map(|s| (s.range, s.text)).collect()
}

fn marks(doc: &TextBuffer) -> Vec<(Range<usize>, String)> {
    color_swatch_decorations(doc)
        .unwrap()
        .iter()
        .map(|(r, d)| (r.clone(), d.color.to_string()))
        .collect()
}

/// Every mark is ordered, disjoint and re-normalizes to its own color
fn assert_well_formed(doc: &TextBuffer, set: &DecorationSet) {
    let text = doc.as_str();
    let mut prev_end = 0;
    for (i, (range, deco)) in set.iter().enumerate() {
        if i > 0 {
            assert!(range.start >= prev_end, "overlap at {:?}", range);
        }
        prev_end = range.end;
        assert_eq!(&text[range.start - 1..range.start], "`");
        assert_eq!(&text[range.end..range.end + 1], "`");
        assert_eq!(color::normalize(&text[range.clone()]), Some(deco.color));
    }
}

#[test]
fn test_find_code_spans_basic() {
    assert_eq!(spans("a `b` c `d`"), vec![(3..4, "b"), (9..10, "d")]);
    assert!(spans("no code here").is_empty());
    assert!(spans("`unterminated").is_empty());
}

#[test]
fn test_find_code_spans_empty_pairs() {
    // "``" never forms a span; the second backtick opens the next one
    assert_eq!(spans("``x`"), vec![(2..3, "x")]);
    assert!(spans("````").is_empty());
}

#[test]
fn test_find_code_spans_non_greedy() {
    assert_eq!(spans("`a` b `c`"), vec![(1..2, "a"), (7..8, "c")]);
    assert_eq!(spans("`a`b`c`"), vec![(1..2, "a"), (5..6, "c")]);
}

#[test]
fn test_two_colors_on_one_line() {
    let doc = TextBuffer::from_text("`#fff` and `rgb(0,0,0)`");
    assert_eq!(
        marks(&doc),
        vec![
            (1..5, "rgb(255, 255, 255)".to_string()),
            (12..22, "rgb(0, 0, 0)".to_string()),
        ]
    );
}

#[test]
fn test_offsets_across_lines() {
    let doc = TextBuffer::from_text("# Palette\n\nprimary: `#ff0000`\n  `hsl(0, 100%, 50%)`\n");
    let set = color_swatch_decorations(&doc).unwrap();
    let texts: Vec<&str> = set.iter().map(|(r, _)| &doc.as_str()[r.clone()]).collect();
    assert_eq!(texts, vec!["#ff0000", "hsl(0, 100%, 50%)"]);
    assert_well_formed(&doc, &set);
}

#[test]
fn test_skips_non_colors() {
    let doc = TextBuffer::from_text("`let x = 1` `red` `#12` `rgb(1,2)` `#0f0`");
    let found = marks(&doc);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].1, "rgb(0, 255, 0)");
}

#[test]
fn test_inner_whitespace_keeps_raw_range() {
    let doc = TextBuffer::from_text("` #fff `");
    assert_eq!(marks(&doc), vec![(1..7, "rgb(255, 255, 255)".to_string())]);
}

#[test]
fn test_multibyte_offsets() {
    let doc = TextBuffer::from_text("héllo `#abc`\n€ `#000000ff`");
    let set = color_swatch_decorations(&doc).unwrap();
    assert_eq!(set.len(), 2);
    assert_well_formed(&doc, &set);
}

#[test]
fn test_crlf_lines() {
    let doc = TextBuffer::from_text("`#fff`\r\n`#000`\r\n");
    let set = color_swatch_decorations(&doc).unwrap();
    assert_eq!(set.len(), 2);
    assert_well_formed(&doc, &set);
}

#[test]
fn test_empty_document() {
    let doc = TextBuffer::new();
    assert!(color_swatch_decorations(&doc).unwrap().is_empty());
}

#[test]
fn test_well_formed_on_mixed_document() {
    let mut text = String::new();
    for i in 0..50 {
        text.push_str(&format!(
            "row {i}: `#{:02x}{:02x}{:02x}` `not` `rgba({i}, 0, 0, 0.{i})` ``\n",
            i * 3,
            i * 5,
            255 - i
        ));
    }
    let doc = TextBuffer::from_text(text);
    let set = color_swatch_decorations(&doc).unwrap();
    assert_eq!(set.len(), 100);
    assert_well_formed(&doc, &set);
}

#[test]
fn test_field_recomputes_on_edit_only() {
    let mut doc = TextBuffer::from_text("intro\n\n`#fff`");
    let mut field = ColorSwatchField::new();

    assert_eq!(field.update(&doc).unwrap().len(), 1);
    assert_eq!(field.recomputes(), 1);
    assert_eq!(field.revision(), Some(0));

    // Navigation does not trigger a rescan
    doc.move_to_end();
    doc.set_cursor(2).unwrap();
    field.update(&doc).unwrap();
    assert_eq!(field.recomputes(), 1);

    // An edit far away from the span still rescans and shifts the range
    doc.move_to_start();
    doc.insert_str("> ").unwrap();
    let set = field.update(&doc).unwrap();
    let ranges: Vec<Range<usize>> = set.iter().map(|(r, _)| r.clone()).collect();
    assert_eq!(ranges, vec![10..14]);
    assert_eq!(field.recomputes(), 2);
    assert_eq!(field.revision(), Some(1));
}

#[test]
fn test_field_replaces_previous_set() {
    let mut doc = TextBuffer::from_text("`#fff` `#000`");
    let mut field = ColorSwatchField::new();
    assert_eq!(field.update(&doc).unwrap().len(), 2);

    doc.delete_range(0..7).unwrap();
    assert_eq!(doc.as_str(), "`#000`");
    let set = field.update(&doc).unwrap();
    assert_eq!(set.len(), 1);
    assert_eq!(field.decorations().len(), 1);

    doc.move_to_end();
    doc.insert_str(" `hsla(120, 100%, 25%, 0.5)`").unwrap();
    let colors: Vec<String> = field
        .update(&doc)
        .unwrap()
        .iter()
        .map(|(_, d)| d.color.to_string())
        .collect();
    assert_eq!(colors, vec!["rgb(0, 0, 0)", "rgba(0, 128, 0, 0.5)"]);
}
