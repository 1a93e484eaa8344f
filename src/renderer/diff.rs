//! Differential renderer.
//!
//! The DiffRenderer compares the current frame to the previous frame and only
//! outputs cells that have changed. This dramatically reduces terminal I/O
//! and provides smooth, flicker-free updates.
//!
//! # Algorithm
//!
//! 1. Wrap output in a synchronized block (begin_sync/end_sync)
//! 2. For each cell in the new frame:
//!    - If a previous frame exists and the cell is unchanged: skip
//!    - Otherwise: render the cell with StatefulCellRenderer
//! 3. Flush the output buffer (single syscall)
//! 4. Store the current frame as previous for the next comparison

use std::io::{self, Write};

use super::ansi;
use super::buffer::FrameBuffer;
use super::output::{OutputBuffer, StatefulCellRenderer};

/// Diff-based frame renderer.
///
/// Keeps the previous frame so only changed cells are written.
pub struct DiffRenderer {
    output: OutputBuffer,
    cell_renderer: StatefulCellRenderer,
    previous: Option<FrameBuffer>,
}

impl DiffRenderer {
    pub fn new() -> Self {
        Self {
            output: OutputBuffer::new(),
            cell_renderer: StatefulCellRenderer::new(),
            previous: None,
        }
    }

    /// Drop the stored previous frame so the next render repaints everything.
    pub fn invalidate(&mut self) {
        self.previous = None;
    }

    /// Render a frame to the sink, outputting only changed cells.
    ///
    /// Returns true if any cell was written.
    pub fn render<W: Write>(&mut self, buffer: &FrameBuffer, sink: &mut W) -> io::Result<bool> {
        let mut has_changes = false;

        ansi::begin_sync(&mut self.output)?;
        self.cell_renderer.reset();

        let width = buffer.width();
        let height = buffer.height();
        let same_size = self
            .previous
            .as_ref()
            .is_some_and(|p| p.width() == width && p.height() == height);

        if !same_size {
            ansi::clear_screen(&mut self.output)?;
        }

        for y in 0..height {
            for x in 0..width {
                let cell = match buffer.get(x, y) {
                    Some(c) => c,
                    None => continue,
                };

                if same_size {
                    if let Some(prev) = self.previous.as_ref().and_then(|p| p.get(x, y)) {
                        if prev == cell {
                            continue;
                        }
                    }
                }

                self.cell_renderer.render_cell(&mut self.output, x, y, cell)?;
                has_changes = true;
            }
        }

        ansi::sgr_reset(&mut self.output)?;
        ansi::end_sync(&mut self.output)?;
        self.output.flush_to(sink)?;

        self.previous = Some(buffer.clone());
        Ok(has_changes)
    }
}

impl Default for DiffRenderer {
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
    use crate::types::{Cell, Rgba};

    #[test]
    fn test_identical_frame_emits_no_cells() {
        let mut r = DiffRenderer::new();
        let mut frame = FrameBuffer::new(4, 2);
        frame.set(1, 1, Cell::new('x', Rgba::WHITE, Rgba::BLACK));

        let mut sink = Vec::new();
        assert!(r.render(&frame, &mut sink).unwrap());

        sink.clear();
        assert!(!r.render(&frame, &mut sink).unwrap());
        let s = String::from_utf8(sink).unwrap();
        assert!(!s.contains('x'));
    }

    #[test]
    fn test_changed_cell_is_emitted() {
        let mut r = DiffRenderer::new();
        let mut frame = FrameBuffer::new(4, 2);
        let mut sink = Vec::new();
        r.render(&frame, &mut sink).unwrap();

        frame.set(2, 0, Cell::new('z', Rgba::WHITE, Rgba::BLACK));
        sink.clear();
        assert!(r.render(&frame, &mut sink).unwrap());
        assert!(String::from_utf8(sink).unwrap().contains('z'));
    }

    #[test]
    fn test_cell_following_wide_glyph_is_readdressed() {
        let mut r = DiffRenderer::new();
        let mut frame = FrameBuffer::new(4, 1);
        frame.set(0, 0, Cell::new('ア', Rgba::WHITE, Rgba::BLACK));
        frame.set(1, 0, Cell::new('x', Rgba::WHITE, Rgba::BLACK));

        let mut sink = Vec::new();
        r.render(&frame, &mut sink).unwrap();
        // the cell at column 1 must carry an explicit cursor move, not ride
        // the two-column advance of the wide glyph before it
        assert!(String::from_utf8(sink).unwrap().contains("\x1b[1;2H"));
    }

    #[test]
    fn test_invalidate_forces_full_repaint() {
        let mut r = DiffRenderer::new();
        let frame = FrameBuffer::new(2, 1);
        let mut sink = Vec::new();
        r.render(&frame, &mut sink).unwrap();

        r.invalidate();
        sink.clear();
        r.render(&frame, &mut sink).unwrap();
        // full repaint starts with a clear
        assert!(String::from_utf8(sink).unwrap().contains("\x1b[2J"));
    }
}
