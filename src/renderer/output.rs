//! Output buffering and stateful cell emission.
//!
//! The OutputBuffer accumulates a whole frame's escape sequences in memory so
//! the final write to the terminal is a single syscall. The
//! StatefulCellRenderer tracks the last emitted colors, attributes, and
//! cursor position, and only writes the escape sequences that actually
//! change terminal state.

use std::io::{self, Write};

use unicode_width::UnicodeWidthChar;

use super::ansi;
use crate::types::{Attr, Cell, Rgba};

// =============================================================================
// OUTPUT BUFFER
// =============================================================================

/// In-memory byte buffer for one frame of terminal output.
#[derive(Debug, Default)]
pub struct OutputBuffer {
    buf: Vec<u8>,
}

impl OutputBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Discard buffered bytes.
    pub fn reset(&mut self) {
        self.buf.clear();
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Write the buffered frame to the sink in one shot and clear the buffer.
    pub fn flush_to<W: Write>(&mut self, sink: &mut W) -> io::Result<()> {
        sink.write_all(&self.buf)?;
        sink.flush()?;
        self.buf.clear();
        Ok(())
    }
}

impl Write for OutputBuffer {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

// =============================================================================
// STATEFUL CELL RENDERER
// =============================================================================

/// Emits cells while tracking terminal state to minimize escape traffic.
///
/// Consecutive cells on the same row with the same style cost one character
/// each; a cursor jump or style change costs only the sequences that differ.
#[derive(Debug)]
pub struct StatefulCellRenderer {
    fg: Rgba,
    bg: Rgba,
    attrs: Attr,
    /// Where the terminal cursor will be after the last emitted cell.
    cursor: Option<(u16, u16)>,
}

impl StatefulCellRenderer {
    pub fn new() -> Self {
        Self {
            fg: Rgba::TERMINAL_DEFAULT,
            bg: Rgba::TERMINAL_DEFAULT,
            attrs: Attr::empty(),
            cursor: None,
        }
    }

    /// Forget all tracked state. Call at the start of a frame, after any
    /// output that may have moved the cursor or changed SGR state.
    pub fn reset(&mut self) {
        self.fg = Rgba::TERMINAL_DEFAULT;
        self.bg = Rgba::TERMINAL_DEFAULT;
        self.attrs = Attr::empty();
        self.cursor = None;
    }

    /// Emit one cell at (x, y).
    pub fn render_cell<W: Write>(
        &mut self,
        out: &mut W,
        x: u16,
        y: u16,
        cell: &Cell,
    ) -> io::Result<()> {
        if self.cursor != Some((x, y)) {
            ansi::cursor_to(out, x, y)?;
        }

        // Attributes can only be cleared with a full reset, which also
        // clobbers colors, so a reset forces both to be re-emitted.
        if cell.attrs != self.attrs {
            ansi::sgr_reset(out)?;
            ansi::set_attrs(out, cell.attrs)?;
            self.attrs = cell.attrs;
            self.fg = Rgba::TERMINAL_DEFAULT;
            self.bg = Rgba::TERMINAL_DEFAULT;
        }

        if cell.fg != self.fg {
            ansi::set_fg(out, cell.fg)?;
            self.fg = cell.fg;
        }
        if cell.bg != self.bg {
            ansi::set_bg(out, cell.bg)?;
            self.bg = cell.bg;
        }

        write!(out, "{}", cell.ch)?;
        // The terminal cursor advances by the glyph's display width, not by
        // one column; track the same amount or the next cell drifts.
        let advance = cell.ch.width().unwrap_or(1).max(1) as u16;
        self.cursor = Some((x + advance, y));
        Ok(())
    }
}

impl Default for StatefulCellRenderer {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_consecutive_same_style_cells_skip_escapes() {
        let mut out = Vec::new();
        let mut r = StatefulCellRenderer::new();
        let cell = Cell::new('a', Rgba::WHITE, Rgba::BLACK);

        r.render_cell(&mut out, 0, 0, &cell).unwrap();
        let first_len = out.len();
        r.render_cell(&mut out, 1, 0, &cell).unwrap();

        // Second cell is the bare glyph: no cursor move, no SGR.
        assert_eq!(out.len(), first_len + 1);
    }

    #[test]
    fn test_cursor_jump_emits_move() {
        let mut out = Vec::new();
        let mut r = StatefulCellRenderer::new();
        let cell = Cell::new('a', Rgba::WHITE, Rgba::BLACK);

        r.render_cell(&mut out, 0, 0, &cell).unwrap();
        out.clear();
        r.render_cell(&mut out, 5, 3, &cell).unwrap();

        let s = String::from_utf8(out).unwrap();
        assert!(s.contains("\x1b[4;6H"));
    }

    #[test]
    fn test_attr_change_resets_colors() {
        let mut out = Vec::new();
        let mut r = StatefulCellRenderer::new();
        let plain = Cell::new('a', Rgba::WHITE, Rgba::BLACK);
        let bold = plain.with_attrs(Attr::BOLD);

        r.render_cell(&mut out, 0, 0, &plain).unwrap();
        out.clear();
        r.render_cell(&mut out, 1, 0, &bold).unwrap();

        let s = String::from_utf8(out).unwrap();
        assert!(s.contains("\x1b[0m"));
        assert!(s.contains("\x1b[1m"));
        // colors re-emitted after the reset
        assert!(s.contains("38;2;255;255;255"));
    }

    #[test]
    fn test_wide_glyph_forces_reposition_for_next_column() {
        let mut out = Vec::new();
        let mut r = StatefulCellRenderer::new();
        let wide = Cell::new('ア', Rgba::WHITE, Rgba::BLACK);
        let narrow = Cell::new('x', Rgba::WHITE, Rgba::BLACK);

        r.render_cell(&mut out, 0, 0, &wide).unwrap();
        out.clear();
        // the terminal cursor sits at column 2 now; column 1 needs a move
        r.render_cell(&mut out, 1, 0, &narrow).unwrap();
        assert!(String::from_utf8(out).unwrap().contains("\x1b[1;2H"));
    }

    #[test]
    fn test_cell_after_wide_glyph_continues_without_move() {
        let mut out = Vec::new();
        let mut r = StatefulCellRenderer::new();
        let wide = Cell::new('ア', Rgba::WHITE, Rgba::BLACK);
        let narrow = Cell::new('x', Rgba::WHITE, Rgba::BLACK);

        r.render_cell(&mut out, 0, 0, &wide).unwrap();
        out.clear();
        r.render_cell(&mut out, 2, 0, &narrow).unwrap();
        // same style, cursor already there: bare glyph
        assert_eq!(String::from_utf8(out).unwrap(), "x");
    }

    #[test]
    fn test_flush_to_drains_buffer() {
        let mut buf = OutputBuffer::new();
        buf.write_all(b"frame").unwrap();
        let mut sink = Vec::new();
        buf.flush_to(&mut sink).unwrap();
        assert_eq!(sink, b"frame");
        assert!(buf.is_empty());
    }
}
