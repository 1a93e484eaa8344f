//! Face: Minimal Analog
//!
//! A clean analog clock in the Braun / Dieter Rams spirit: thin markers, no
//! numerals, a smooth sweeping second hand, and a small date window. Drawn
//! into the cell grid with a 2:1 horizontal stretch so the dial reads as a
//! circle in typical terminal fonts.

use std::f32::consts::PI;

use chrono::{Datelike, Timelike};

use crate::engine::Face;
use crate::renderer::Surface;
use crate::types::{Attr, Rgba, Style};

const DIAL_BG: Rgba = Rgba::rgb(10, 10, 10);
const MARKER: Rgba = Rgba::rgb(224, 224, 224);
const SECOND_RED: Rgba = Rgba::rgb(255, 59, 48);

pub struct MinimalAnalogFace;

impl MinimalAnalogFace {
    pub fn new() -> Self {
        Self
    }

    /// Dial geometry for a surface: center and vertical radius in rows.
    fn geometry(surface: &Surface) -> (f32, f32, f32) {
        let cx = surface.width() as f32 / 2.0;
        let cy = surface.height() as f32 / 2.0;
        // Horizontal radius is twice the vertical one to compensate for
        // cell aspect ratio.
        let ry = (cy - 1.0).min(surface.width() as f32 / 4.0 - 1.0).max(1.0);
        (cx, cy, ry)
    }

    /// Point on the dial at `angle` (radians from 12 o'clock, clockwise)
    /// and `radius` (fraction of the dial radius).
    fn point(cx: f32, cy: f32, ry: f32, angle: f32, radius: f32) -> (i32, i32) {
        let a = angle - PI / 2.0;
        let x = cx + a.cos() * ry * radius * 2.0;
        let y = cy + a.sin() * ry * radius;
        (x.round() as i32, y.round() as i32)
    }

    fn draw_dial(surface: &mut Surface) {
        surface.clear(DIAL_BG);
        let (cx, cy, ry) = Self::geometry(surface);

        for i in 0..12 {
            let angle = i as f32 * PI / 6.0;
            let quarter = i % 3 == 0;
            let (ch, style) = if quarter {
                ('█', Style::new(MARKER, DIAL_BG).with_attrs(Attr::BOLD))
            } else {
                ('·', Style::new(Rgba::rgb(140, 140, 140), DIAL_BG))
            };
            let (x, y) = Self::point(cx, cy, ry, angle, 1.0);
            if x >= 0 && y >= 0 {
                surface.put_char(x as u16, y as u16, ch, style);
            }
        }
    }

    fn draw_hand(surface: &mut Surface, angle: f32, length: f32, ch: char, color: Rgba) {
        let (cx, cy, ry) = Self::geometry(surface);
        let style = Style::new(color, DIAL_BG);
        // Sample along the hand; the grid is coarse, so 2 samples per row
        // of reach is plenty.
        let steps = (ry * length * 2.0).ceil().max(1.0) as i32;
        for step in 1..=steps {
            let r = length * step as f32 / steps as f32;
            let (x, y) = Self::point(cx, cy, ry, angle, r);
            if x >= 0 && y >= 0 {
                surface.put_char(x as u16, y as u16, ch, style);
            }
        }
    }
}

impl Default for MinimalAnalogFace {
    fn default() -> Self {
        Self::new()
    }
}

impl Face for MinimalAnalogFace {
    fn name(&self) -> &str {
        "Minimal Analog"
    }

    fn create(&mut self, surface: &mut Surface) {
        Self::draw_dial(surface);
    }

    fn update(&mut self, surface: &mut Surface, now_ms: u64) {
        let now = super::local_time(now_ms);
        let h = (now.hour() % 12) as f32;
        let m = now.minute() as f32;
        let s = now.second() as f32 + now.timestamp_subsec_millis() as f32 / 1000.0;

        // Full redraw each tick: erasing the previous hand positions is
        // costlier than repainting a dial this small.
        Self::draw_dial(surface);

        // Date window at 3 o'clock.
        let (cx, cy, ry) = Self::geometry(surface);
        let (dx, dy) = Self::point(cx, cy, ry, PI / 2.0, 0.72);
        if dx >= 0 && dy >= 0 {
            surface.put_str(
                dx as u16,
                dy as u16,
                &format!("{:2}", now.day()),
                Style::new(Rgba::rgb(204, 204, 204), Rgba::rgb(26, 26, 26)),
            );
        }

        // Smooth sweep: seconds carry milliseconds, minutes carry seconds,
        // hours carry minutes.
        let sweep = 2.0 * PI;
        Self::draw_hand(surface, (h + m / 60.0) / 12.0 * sweep, 0.55, '█', MARKER);
        Self::draw_hand(surface, (m + s / 60.0) / 60.0 * sweep, 0.85, '▪', MARKER);
        Self::draw_hand(surface, s / 60.0 * sweep, 0.95, '·', SECOND_RED);

        // Center cap
        surface.put_char(
            cx as u16,
            cy as u16,
            '●',
            Style::new(SECOND_RED, DIAL_BG),
        );
    }
}

// =============================================================================
// TESTS
// =============================================================================
