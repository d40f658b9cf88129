//! Terminal painter
//! Draws a document with a swatch after every decorated range

/// ## render/ Invariants
///
/// - Rendering reads the document and its decoration set only.
/// - Rendering never mutates the buffer or the set.
/// - Line text is printed verbatim; swatches are extra cells, never replacements.
/// - Colors are reset after every swatch so plain text keeps the terminal's colors.
use crate::buffer::api::{BufferView, Line};
use crate::constants::render::SWATCH_CELLS;
use crate::decoration::DecorationSet;
use crossterm::queue;
use crossterm::style::{Print, ResetColor, SetBackgroundColor};
use std::io::{self, Write};

/// Backdrop translucent swatches are blended over
pub const BACKDROP: (u8, u8, u8) = (0, 0, 0);

/// Paint every line of `doc`, inserting a swatch after each decorated range.
pub fn paint_document<W: Write>(
    out: &mut W,
    doc: &impl BufferView,
    set: &DecorationSet,
) -> io::Result<()> {
    for line in doc.lines() {
        paint_line(out, &line, set)?;
    }
    out.flush()
}

/// Paint a single line followed by a newline
pub fn paint_line<W: Write>(out: &mut W, line: &Line<'_>, set: &DecorationSet) -> io::Result<()> {
    let mut printed = 0;
    for (range, deco) in set.query(line.from..line.to()) {
        // Marks never cross a line, but stay inside the text if one did
        let end = range.end.min(line.to()) - line.from;
        if end < printed {
            continue;
        }
        queue!(
            out,
            Print(&line.text[printed..end]),
            SetBackgroundColor(deco.color.to_crossterm(BACKDROP)),
            Print(SWATCH_CELLS),
            ResetColor
        )?;
        printed = end;
    }
    queue!(out, Print(&line.text[printed..]), Print("\n"))
}
