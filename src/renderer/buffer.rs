//! Frame buffer - a rectangular grid of terminal cells.
//!
//! Both the engine's composited screen and each face's surface are frame
//! buffers. Blitting one buffer into another at a horizontal offset is the
//! whole layout model: faces sit side by side and navigation is an offset
//! transform.

use crate::types::Cell;

/// A width x height grid of cells, row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    /// Create a buffer filled with blank cells.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::default(); width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    #[inline]
    fn index(&self, x: u16, y: u16) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Get the cell at (x, y). Out-of-bounds reads return None.
    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        if x < self.width && y < self.height {
            let i = self.index(x, y);
            Some(&self.cells[i])
        } else {
            None
        }
    }

    /// Set the cell at (x, y). Out-of-bounds writes are ignored.
    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if x < self.width && y < self.height {
            let i = self.index(x, y);
            self.cells[i] = cell;
        }
    }

    /// Fill the whole buffer with one cell.
    pub fn fill(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    /// Reset every cell to blank.
    pub fn clear(&mut self) {
        self.fill(Cell::default());
    }

    /// Blit `src` into this buffer with its top-left corner at (x_off, y_off).
    ///
    /// Offsets may be negative; anything outside this buffer is clipped.
    pub fn blit(&mut self, src: &FrameBuffer, x_off: i32, y_off: i32) {
        for sy in 0..src.height {
            let dy = sy as i32 + y_off;
            if dy < 0 || dy >= self.height as i32 {
                continue;
            }
            for sx in 0..src.width {
                let dx = sx as i32 + x_off;
                if dx < 0 || dx >= self.width as i32 {
                    continue;
                }
                let i = src.index(sx, sy);
                self.set(dx as u16, dy as u16, src.cells[i]);
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
    use crate::types::Rgba;

    fn mark(ch: char) -> Cell {
        Cell::new(ch, Rgba::WHITE, Rgba::BLACK)
    }

    #[test]
    fn test_new_buffer_is_blank() {
        let buf = FrameBuffer::new(4, 3);
        assert_eq!(buf.get(0, 0), Some(&Cell::default()));
        assert_eq!(buf.get(3, 2), Some(&Cell::default()));
        assert_eq!(buf.get(4, 0), None);
    }

    #[test]
    fn test_out_of_bounds_set_is_ignored() {
        let mut buf = FrameBuffer::new(2, 2);
        buf.set(5, 5, mark('x'));
        assert!(buf.cells.iter().all(|c| c.ch == ' '));
    }

    #[test]
    fn test_blit_with_negative_offset_clips() {
        let mut dst = FrameBuffer::new(3, 1);
        let mut src = FrameBuffer::new(3, 1);
        src.set(0, 0, mark('a'));
        src.set(1, 0, mark('b'));
        src.set(2, 0, mark('c'));

        dst.blit(&src, -2, 0);
        assert_eq!(dst.get(0, 0).unwrap().ch, 'c');
        assert_eq!(dst.get(1, 0).unwrap().ch, ' ');
    }

    #[test]
    fn test_blit_beyond_right_edge_clips() {
        let mut dst = FrameBuffer::new(3, 1);
        let mut src = FrameBuffer::new(3, 1);
        src.set(0, 0, mark('a'));

        dst.blit(&src, 2, 0);
        assert_eq!(dst.get(2, 0).unwrap().ch, 'a');
    }
}
