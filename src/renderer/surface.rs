//! Surface - the per-face drawing target.
//!
//! The engine allocates one surface per registered face at mount time and
//! hands it back to that face on every lifecycle call. Between calls the
//! surface belongs exclusively to its face: the engine only blits it into
//! the screen during composition and never edits the contents.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::buffer::FrameBuffer;
use crate::types::{Cell, Rgba, Style};

/// A face's private cell buffer plus drawing helpers.
#[derive(Debug, Clone)]
pub struct Surface {
    buf: FrameBuffer,
}

impl Surface {
    pub(crate) fn new(width: u16, height: u16) -> Self {
        Self {
            buf: FrameBuffer::new(width, height),
        }
    }

    pub fn width(&self) -> u16 {
        self.buf.width()
    }

    pub fn height(&self) -> u16 {
        self.buf.height()
    }

    /// The underlying buffer, for composition.
    pub(crate) fn buffer(&self) -> &FrameBuffer {
        &self.buf
    }

    /// Fill the surface with spaces on the given background.
    pub fn clear(&mut self, bg: Rgba) {
        self.buf.fill(Cell {
            ch: ' ',
            fg: Rgba::TERMINAL_DEFAULT,
            bg,
            attrs: Default::default(),
        });
    }

    /// Set one cell directly.
    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        self.buf.set(x, y, cell);
    }

    /// Read one cell back.
    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        self.buf.get(x, y)
    }

    /// Draw a single glyph.
    pub fn put_char(&mut self, x: u16, y: u16, ch: char, style: Style) {
        self.buf.set(x, y, style.cell(ch));
    }

    /// Draw a string starting at (x, y), advancing by display width.
    ///
    /// Wide glyphs occupy their first cell; continuation cells are left
    /// untouched. Text past the right edge is clipped.
    pub fn put_str(&mut self, x: u16, y: u16, text: &str, style: Style) {
        let mut cx = x as usize;
        for ch in text.chars() {
            let w = ch.width().unwrap_or(0);
            if w == 0 {
                continue;
            }
            if cx >= self.buf.width() as usize {
                break;
            }
            self.buf.set(cx as u16, y, style.cell(ch));
            cx += w;
        }
    }

    /// Draw a string horizontally centered on row y.
    pub fn put_str_centered(&mut self, y: u16, text: &str, style: Style) {
        let w = text.width() as u16;
        let x = (self.buf.width().saturating_sub(w)) / 2;
        self.put_str(x, y, text, style);
    }

    /// Fill a rectangle with one cell, clipped to the surface.
    pub fn fill_rect(&mut self, x: u16, y: u16, w: u16, h: u16, cell: Cell) {
        for ry in y..y.saturating_add(h) {
            for rx in x..x.saturating_add(w) {
                self.buf.set(rx, ry, cell);
            }
        }
    }

    /// Darken a rectangle by blending translucent black over both the
    /// foreground and background of every cell in it.
    pub fn dim_rect(&mut self, x: u16, y: u16, w: u16, h: u16, alpha: u8) {
        let shade = Rgba::new(0, 0, 0, alpha);
        for ry in y..y.saturating_add(h).min(self.buf.height()) {
            for rx in x..x.saturating_add(w).min(self.buf.width()) {
                if let Some(cell) = self.buf.get(rx, ry) {
                    let mut dimmed = *cell;
                    dimmed.fg = Rgba::blend(shade, dimmed.fg);
                    dimmed.bg = Rgba::blend(shade, dimmed.bg);
                    self.buf.set(rx, ry, dimmed);
                }
            }
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_put_str_clips_at_right_edge() {
        let mut s = Surface::new(4, 1);
        s.put_str(2, 0, "abcdef", Style::fg(Rgba::WHITE));
        assert_eq!(s.get(2, 0).unwrap().ch, 'a');
        assert_eq!(s.get(3, 0).unwrap().ch, 'b');
    }

    #[test]
    fn test_put_str_centered() {
        let mut s = Surface::new(10, 1);
        s.put_str_centered(0, "abcd", Style::fg(Rgba::WHITE));
        assert_eq!(s.get(3, 0).unwrap().ch, 'a');
        assert_eq!(s.get(6, 0).unwrap().ch, 'd');
    }

    #[test]
    fn test_wide_glyph_advances_two_cells() {
        let mut s = Surface::new(6, 1);
        s.put_str(0, 0, "ア1", Style::fg(Rgba::WHITE));
        assert_eq!(s.get(0, 0).unwrap().ch, 'ア');
        // continuation cell untouched, next glyph lands at column 2
        assert_eq!(s.get(2, 0).unwrap().ch, '1');
    }

    #[test]
    fn test_clear_sets_background() {
        let mut s = Surface::new(2, 2);
        s.clear(Rgba::BLACK);
        assert_eq!(s.get(1, 1).unwrap().bg, Rgba::BLACK);
        assert_eq!(s.get(1, 1).unwrap().ch, ' ');
    }

    #[test]
    fn test_dim_rect_darkens_colors() {
        let mut s = Surface::new(2, 1);
        s.put_char(0, 0, 'x', Style::new(Rgba::WHITE, Rgba::WHITE));
        s.dim_rect(0, 0, 2, 1, 128);
        let cell = s.get(0, 0).unwrap();
        assert!(cell.fg.r < 255);
        assert!(cell.bg.r < 255);
    }
}
