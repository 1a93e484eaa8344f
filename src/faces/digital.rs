//! Face: Pebble Digital
//!
//! Retro digital face inspired by the Pebble smartwatch aesthetic. Chunky
//! block digits, minimal layout: day/date line, separator, big HH:MM, a
//! seconds progress bar that pulses at the top of the minute, and a
//! week/day-of-year decoration line.

use chrono::{Datelike, Timelike};

use super::glyphs;
use crate::engine::Face;
use crate::renderer::Surface;
use crate::types::{Attr, Rgba, Style};

const DAYS: [&str; 7] = ["MON", "TUE", "WED", "THU", "FRI", "SAT", "SUN"];
const MONTHS: [&str; 12] = [
    "JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC",
];

const BAR_GREEN: Rgba = Rgba::rgb(85, 191, 59);
const BAR_PULSE: Rgba = Rgba::rgb(124, 252, 0);

pub struct DigitalFace;

impl DigitalFace {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DigitalFace {
    fn default() -> Self {
        Self::new()
    }
}

impl Face for DigitalFace {
    fn name(&self) -> &str {
        "Pebble Digital"
    }

    fn create(&mut self, surface: &mut Surface) {
        surface.clear(Rgba::BLACK);
    }

    fn update(&mut self, surface: &mut Surface, now_ms: u64) {
        let now = super::local_time(now_ms);
        surface.clear(Rgba::BLACK);

        let h = surface.height();
        let top = h.saturating_sub(glyphs::GLYPH_H + 6) / 2;
        let dim = Style::new(Rgba::rgb(170, 170, 170), Rgba::BLACK);
        let faint = Style::new(Rgba::rgb(102, 102, 102), Rgba::BLACK);
        let line = Style::new(Rgba::rgb(51, 51, 51), Rgba::BLACK);

        // Day / date
        let daydate = format!(
            "{}  {} {}",
            DAYS[now.weekday().num_days_from_monday() as usize],
            MONTHS[now.month0() as usize],
            now.day()
        );
        surface.put_str_centered(top, &daydate, dim);

        // Separator
        let half = surface.width() / 2;
        let rule: String = "─".repeat(half as usize);
        surface.put_str_centered(top + 1, &rule, line);

        // Time
        let time = format!("{:02}:{:02}", now.hour(), now.minute());
        let bold = Style::new(Rgba::WHITE, Rgba::BLACK).with_attrs(Attr::BOLD);
        glyphs::draw_big_text_centered(surface, top + 2, &time, bold);

        // Seconds bar: fills over the minute. Right after the minute rolls
        // the fill is still empty, so the pulse lights the whole track
        // instead - a two-second flash at :00.
        let s = now.second();
        let bar_y = top + 2 + glyphs::GLYPH_H + 1;
        let bar_x = surface.width().saturating_sub(half) / 2;
        let filled = ((s as f32 / 59.0) * half as f32).round() as u16;
        for x in 0..half {
            let fg = if s < 2 {
                BAR_PULSE
            } else if x < filled {
                BAR_GREEN
            } else {
                Rgba::rgb(26, 26, 26)
            };
            surface.put_char(bar_x + x, bar_y, '━', Style::new(fg, Rgba::BLACK));
        }

        // Week number and day-of-year decoration
        let info = format!("W{}  D{}", now.iso_week().week(), now.ordinal());
        surface.put_str_centered(bar_y + 2, &info, faint);
    }
}

// =============================================================================
// TESTS
// =============================================================================
