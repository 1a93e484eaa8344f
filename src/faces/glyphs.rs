//! Big-digit glyphs shared by the digital-style faces.
//!
//! A 3x5 block font for `0`-`9` plus a 1-column colon, drawn with full
//! blocks so the time reads from across the room.

use crate::renderer::Surface;
use crate::types::Style;

/// Glyph height in rows.
pub const GLYPH_H: u16 = 5;

const DIGITS: [[&str; 5]; 10] = [
    ["███", "█ █", "█ █", "█ █", "███"], // 0
    [" █ ", "██ ", " █ ", " █ ", "███"], // 1
    ["███", "  █", "███", "█  ", "███"], // 2
    ["███", "  █", "███", "  █", "███"], // 3
    ["█ █", "█ █", "███", "  █", "  █"], // 4
    ["███", "█  ", "███", "  █", "███"], // 5
    ["███", "█  ", "███", "█ █", "███"], // 6
    ["███", "  █", "  █", "  █", "  █"], // 7
    ["███", "█ █", "███", "█ █", "███"], // 8
    ["███", "█ █", "███", "  █", "███"], // 9
];

const COLON: [&str; 5] = [" ", "█", " ", "█", " "];

fn glyph(ch: char) -> Option<(&'static [&'static str; 5], u16)> {
    match ch {
        '0'..='9' => {
            let d = ch as usize - '0' as usize;
            Some((&DIGITS[d], 3))
        }
        ':' => Some((&COLON, 1)),
        _ => None,
    }
}

/// Display width of `text` rendered in the big font (1 column between glyphs).
pub fn big_text_width(text: &str) -> u16 {
    let mut width = 0;
    for ch in text.chars() {
        if let Some((_, w)) = glyph(ch) {
            width += w + 1;
        }
    }
    width.saturating_sub(1)
}

/// Draw `text` in the big font with its top-left corner at (x, y).
///
/// Characters outside the font are skipped.
pub fn draw_big_text(surface: &mut Surface, x: u16, y: u16, text: &str, style: Style) {
    let mut cx = x;
    for ch in text.chars() {
        let Some((rows, w)) = glyph(ch) else { continue };
        for (dy, row) in rows.iter().enumerate() {
            for (dx, cell_ch) in row.chars().enumerate() {
                if cell_ch != ' ' {
                    surface.put_char(cx + dx as u16, y + dy as u16, cell_ch, style);
                }
            }
        }
        cx += w + 1;
    }
}

/// Draw `text` in the big font horizontally centered at row y.
pub fn draw_big_text_centered(surface: &mut Surface, y: u16, text: &str, style: Style) {
    let w = big_text_width(text);
    let x = surface.width().saturating_sub(w) / 2;
    draw_big_text(surface, x, y, text, style);
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Rgba;

    #[test]
    fn test_big_text_width() {
        assert_eq!(big_text_width("0"), 3);
        assert_eq!(big_text_width("12:34"), 3 + 1 + 3 + 1 + 1 + 1 + 3 + 1 + 3);
        assert_eq!(big_text_width(""), 0);
    }

    #[test]
    fn test_unknown_chars_are_skipped() {
        assert_eq!(big_text_width("1a2"), big_text_width("12"));
    }

    #[test]
    fn test_draw_fills_blocks() {
        let mut s = Surface::new(10, 6);
        draw_big_text(&mut s, 0, 0, "7", Style::fg(Rgba::WHITE));
        // top bar of the 7
        assert_eq!(s.get(0, 0).unwrap().ch, '█');
        assert_eq!(s.get(2, 0).unwrap().ch, '█');
        // stem on the right only
        assert_eq!(s.get(0, 4).unwrap().ch, ' ');
        assert_eq!(s.get(2, 4).unwrap().ch, '█');
    }
}
