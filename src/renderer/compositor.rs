//! Frame composition.
//!
//! Builds one screen frame from the face strip, the position indicator dots,
//! and the alert overlay. Faces are laid out side by side; the navigation
//! offset (in face-widths) decides which one or two surfaces are visible and
//! where their columns land. The dots row is fully rebuilt every frame -
//! cheap at this scale, no diffing needed here (the DiffRenderer handles
//! change detection downstream).

use super::buffer::FrameBuffer;
use super::surface::Surface;
use crate::types::{Attr, Cell, Rgba, Style};

const DOT_ACTIVE: char = '●';
const DOT_INACTIVE: char = '○';

/// Compose a full frame into `screen`.
///
/// `offset` is the strip position in face-widths: 0.0 shows face 0 flush,
/// 1.5 shows faces 1 and 2 half-and-half. `alert` is the visible overlay
/// message and its color, if any.
pub(crate) fn compose(
    screen: &mut Surface,
    surfaces: &[&FrameBuffer],
    offset: f32,
    current: usize,
    alert: Option<(&str, Rgba)>,
) {
    screen.clear(Rgba::TERMINAL_DEFAULT);

    let face_w = screen.width();
    let face_h = screen.height().saturating_sub(1);

    // Face strip: each surface sits at (i - offset) face-widths.
    for (i, surface) in surfaces.iter().enumerate() {
        let x_off = ((i as f32 - offset) * face_w as f32).round() as i32;
        if x_off <= -(face_w as i32) || x_off >= face_w as i32 {
            continue;
        }
        blit_clipped(screen, surface, x_off, face_h);
    }

    draw_dots(screen, surfaces.len(), current, face_h);

    if let Some((message, color)) = alert {
        draw_alert(screen, message, color, face_h);
    }
}

fn blit_clipped(screen: &mut Surface, src: &FrameBuffer, x_off: i32, face_h: u16) {
    let w = screen.width() as i32;
    for sy in 0..src.height().min(face_h) {
        for sx in 0..src.width() {
            let dx = sx as i32 + x_off;
            if dx < 0 || dx >= w {
                continue;
            }
            if let Some(cell) = src.get(sx, sy) {
                screen.set(dx as u16, sy, *cell);
            }
        }
    }
}

/// One marker per face, active marker distinguished, centered on the bottom row.
fn draw_dots(screen: &mut Surface, count: usize, current: usize, row: u16) {
    if count == 0 {
        return;
    }
    let total = (count * 2 - 1) as u16;
    let start = (screen.width().saturating_sub(total)) / 2;
    for i in 0..count {
        let (ch, fg) = if i == current {
            (DOT_ACTIVE, Rgba::WHITE)
        } else {
            (DOT_INACTIVE, Rgba::rgb(85, 85, 85))
        };
        screen.put_char(start + (i * 2) as u16, row, ch, Style::fg(fg));
    }
}

/// Centered banner in the upper third of the viewport.
fn draw_alert(screen: &mut Surface, message: &str, color: Rgba, face_h: u16) {
    let row = face_h / 4;
    let bg = Rgba::rgb(24, 24, 24);
    let padded = format!("  {message}  ");
    let style = Style::new(color, bg).with_attrs(Attr::BOLD);

    // backdrop rows above and below the text line
    let width = unicode_width::UnicodeWidthStr::width(padded.as_str()) as u16;
    let x = (screen.width().saturating_sub(width)) / 2;
    for dy in [row.wrapping_sub(1), row, row + 1] {
        if dy < face_h {
            screen.fill_rect(x, dy, width, 1, Cell::new(' ', color, bg));
        }
    }
    screen.put_str_centered(row, &padded, style);
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn marked_surface(w: u16, h: u16, ch: char) -> FrameBuffer {
        let mut buf = FrameBuffer::new(w, h);
        for y in 0..h {
            for x in 0..w {
                buf.set(x, y, Cell::new(ch, Rgba::WHITE, Rgba::BLACK));
            }
        }
        buf
    }

    #[test]
    fn test_offset_zero_shows_first_face_only() {
        let mut screen = Surface::new(8, 4);
        let a = marked_surface(8, 3, 'a');
        let b = marked_surface(8, 3, 'b');

        compose(&mut screen, &[&a, &b], 0.0, 0, None);
        assert_eq!(screen.get(0, 0).unwrap().ch, 'a');
        assert_eq!(screen.get(7, 2).unwrap().ch, 'a');
    }

    #[test]
    fn test_half_offset_shows_both_faces() {
        let mut screen = Surface::new(8, 4);
        let a = marked_surface(8, 3, 'a');
        let b = marked_surface(8, 3, 'b');

        compose(&mut screen, &[&a, &b], 0.5, 1, None);
        assert_eq!(screen.get(0, 0).unwrap().ch, 'a');
        assert_eq!(screen.get(7, 0).unwrap().ch, 'b');
    }

    #[test]
    fn test_dots_mark_active_face() {
        let mut screen = Surface::new(9, 4);
        let a = marked_surface(9, 3, 'a');
        let b = marked_surface(9, 3, 'b');

        compose(&mut screen, &[&a, &b], 1.0, 1, None);
        // two dots, a space apart, centered: columns 3 and 5
        assert_eq!(screen.get(3, 3).unwrap().ch, DOT_INACTIVE);
        assert_eq!(screen.get(5, 3).unwrap().ch, DOT_ACTIVE);
    }

    #[test]
    fn test_alert_draws_over_face() {
        let mut screen = Surface::new(20, 9);
        let a = marked_surface(20, 8, 'a');

        compose(&mut screen, &[&a], 0.0, 0, Some(("hi", Rgba::RED)));
        let row = 2; // face_h 8 / 4
        let hit = (0..20).any(|x| screen.get(x, row).unwrap().ch == 'h');
        assert!(hit);
    }
}
