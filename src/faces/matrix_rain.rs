//! Face: Matrix Rain
//!
//! Digital rain of glowing green katakana and numerals cascading down the
//! screen, with a crisp time display burning through the center. Column
//! positions derive from the timestamp, not from a per-tick step, so the
//! rain keeps correct speed no matter how irregular the tick spacing is.

use chrono::{Datelike, Timelike};

use super::glyphs;
use crate::engine::Face;
use crate::renderer::Surface;
use crate::types::{Attr, Rgba, Style};

const CHARS: &[char] = &[
    'ｱ', 'ｲ', 'ｳ', 'ｴ', 'ｵ', 'ｶ', 'ｷ', 'ｸ', 'ｹ', 'ｺ', 'ｻ', 'ｼ', 'ｽ', 'ｾ', 'ｿ', 'ﾀ', 'ﾁ', 'ﾂ',
    'ﾃ', 'ﾄ', 'ﾅ', 'ﾆ', 'ﾇ', 'ﾈ', 'ﾉ', 'ﾊ', 'ﾋ', 'ﾌ', 'ﾍ', 'ﾎ', 'ﾏ', 'ﾐ', 'ﾑ', 'ﾒ', 'ﾓ', 'ﾔ',
    'ﾕ', 'ﾖ', 'ﾗ', 'ﾘ', 'ﾙ', 'ﾚ', 'ﾛ', 'ﾜ', 'ｦ', 'ﾝ', '0', '1', '2', '3', '4', '5', '6', '7',
    '8', '9', 'A', 'B', 'C', 'D', 'E', 'F',
];

const MATRIX_GREEN: Rgba = Rgba::rgb(0, 255, 65);

/// Tiny xorshift PRNG; the rain needs variety, not quality.
struct XorShift(u64);

impl XorShift {
    fn new(seed: u64) -> Self {
        Self(seed.max(1))
    }

    fn next_u32(&mut self) -> u32 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        (x >> 32) as u32
    }

    fn next_f32(&mut self) -> f32 {
        (self.next_u32() as f32) / (u32::MAX as f32)
    }

    fn pick(&mut self, chars: &[char]) -> char {
        chars[(self.next_u32() as usize) % chars.len()]
    }
}

struct RainColumn {
    x: u16,
    len: u16,
    /// Fall speed in rows per second.
    speed: f32,
    /// Starting phase so columns begin mid-fall.
    phase: f32,
    brightness: f32,
    glyphs: Vec<char>,
}

pub struct MatrixRainFace {
    columns: Vec<RainColumn>,
    rng: XorShift,
    /// Timestamp of the first update; fall distance derives from it.
    t0: Option<u64>,
}

impl MatrixRainFace {
    pub fn new() -> Self {
        Self {
            columns: Vec::new(),
            rng: XorShift::new(0x5DEECE66D),
            t0: None,
        }
    }
}

impl Default for MatrixRainFace {
    fn default() -> Self {
        Self::new()
    }
}

impl Face for MatrixRainFace {
    fn name(&self) -> &str {
        "Matrix Rain"
    }

    fn create(&mut self, surface: &mut Surface) {
        surface.clear(Rgba::BLACK);

        // One column every other cell, each with its own length, speed,
        // phase, and brightness.
        let height = surface.height().max(1);
        self.columns.clear();
        for x in (0..surface.width()).step_by(2) {
            let len = 4 + (self.rng.next_u32() % 8) as u16;
            let glyph_count = (height + len) as usize;
            let glyphs = (0..glyph_count).map(|_| self.rng.pick(CHARS)).collect();
            self.columns.push(RainColumn {
                x,
                len,
                speed: 3.0 + self.rng.next_f32() * 9.0,
                phase: self.rng.next_f32() * (height + len) as f32,
                brightness: 0.35 + self.rng.next_f32() * 0.55,
                glyphs,
            });
        }
    }

    fn update(&mut self, surface: &mut Surface, now_ms: u64) {
        let t0 = *self.t0.get_or_insert(now_ms);
        let elapsed_s = now_ms.saturating_sub(t0) as f32 / 1000.0;
        let now = super::local_time(now_ms);

        surface.clear(Rgba::BLACK);
        let height = surface.height();

        for col in &mut self.columns {
            let cycle = (height + col.len) as f32;
            let head = (col.phase + elapsed_s * col.speed) % cycle;

            // Occasionally mutate a glyph mid-fall.
            if self.rng.next_f32() < 0.15 {
                let i = (self.rng.next_u32() as usize) % col.glyphs.len();
                col.glyphs[i] = self.rng.pick(CHARS);
            }

            for trail in 0..col.len {
                let y = head - trail as f32;
                if y < 0.0 || y >= height as f32 {
                    continue;
                }
                // Head is brightest; the tail fades out.
                let fade = if trail == 0 {
                    1.0
                } else {
                    (1.0 - trail as f32 * 0.12).max(0.05)
                };
                let fg = MATRIX_GREEN.scaled(fade * col.brightness);
                let ch = col.glyphs[(y as usize) % col.glyphs.len()];
                surface.put_char(col.x, y as u16, ch, Style::new(fg, Rgba::BLACK));
            }
        }

        // Darken behind the center display so the time pops.
        let time = format!("{:02}:{:02}", now.hour(), now.minute());
        let time_w = glyphs::big_text_width(&time) + 4;
        let time_y = height.saturating_sub(glyphs::GLYPH_H + 2) / 2;
        let x0 = surface.width().saturating_sub(time_w) / 2;
        surface.fill_rect(
            x0,
            time_y.saturating_sub(1),
            time_w,
            glyphs::GLYPH_H + 4,
            Style::new(MATRIX_GREEN, Rgba::BLACK).cell(' '),
        );

        let glow = Style::new(MATRIX_GREEN, Rgba::BLACK).with_attrs(Attr::BOLD);
        glyphs::draw_big_text_centered(surface, time_y, &time, glow);

        let date = format!("{}.{:02}.{:02}", now.year(), now.month(), now.day());
        let date_style = Style::new(MATRIX_GREEN.scaled(0.45), Rgba::BLACK);
        surface.put_str_centered(time_y + glyphs::GLYPH_H + 1, &date, date_style);
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn face_on(w: u16, h: u16) -> (MatrixRainFace, Surface) {
        let mut surface = Surface::new(w, h);
        let mut face = MatrixRainFace::new();
        face.create(&mut surface);
        (face, surface)
    }

    #[test]
    fn test_create_builds_columns() {
        let (face, _) = face_on(40, 20);
        assert_eq!(face.columns.len(), 20);
        assert!(face.columns.iter().all(|c| c.len >= 4));
    }

    #[test]
    fn test_rain_advances_with_time_not_ticks() {
        let (mut face, mut surface) = face_on(20, 12);

        face.update(&mut surface, 1_000);
        let early: Vec<_> = snapshot(&surface);

        // one huge delta, as if the host was suspended
        face.update(&mut surface, 61_000);
        let late: Vec<_> = snapshot(&surface);
        assert_ne!(early, late);
    }

    #[test]
    fn test_center_time_is_drawn() {
        let (mut face, mut surface) = face_on(40, 20);
        face.update(&mut surface, 1_700_000_000_000);
        let blocks = (0..40)
            .flat_map(|x| (0..20).map(move |y| (x, y)))
            .filter(|&(x, y)| surface.get(x, y).unwrap().ch == '█')
            .count();
        assert!(blocks > 10);
    }

    fn snapshot(surface: &Surface) -> Vec<char> {
        (0..surface.height())
            .flat_map(|y| (0..surface.width()).map(move |x| surface.get(x, y).unwrap().ch))
            .collect()
    }
}
