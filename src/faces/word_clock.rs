//! Face: Word Clock
//!
//! Classic QLOCKTWO-style word clock: a grid of letters where the current
//! time is spelled out in English. Active letters glow white; inactive
//! letters are nearly invisible. Minutes round to the nearest five-minute
//! bucket and "TO" phrases borrow the next hour.

use chrono::Timelike;

use crate::engine::Face;
use crate::renderer::Surface;
use crate::types::{Attr, Rgba, Style};

// 10 rows x 11 columns
const GRID: [&str; 10] = [
    "ITLISASAMPM",
    "ACQUARTERDC",
    "TWENTYFIVEX",
    "HALFBTENETO",
    "PASTERUNINE",
    "ONESIXTHREE",
    "FOURFIVETWO",
    "EIGHTELEVEN",
    "SEVENTWELVE",
    "TENSEOCLOCK",
];

/// A word on the grid: (row, start column, length).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Word {
    It,
    Is,
    Am,
    Pm,
    A,
    Quarter,
    Twenty,
    MinFive,
    Half,
    MinTen,
    To,
    Past,
    Nine,
    One,
    Six,
    Three,
    Four,
    HourFive,
    Two,
    Eight,
    Eleven,
    Seven,
    Twelve,
    HourTen,
    OClock,
}

impl Word {
    /// Grid placement: (row, start column, length).
    fn placement(self) -> (u16, u16, u16) {
        match self {
            Word::It => (0, 0, 2),
            Word::Is => (0, 3, 2),
            Word::Am => (0, 7, 2),
            Word::Pm => (0, 9, 2),
            Word::A => (1, 0, 1),
            Word::Quarter => (1, 2, 7),
            Word::Twenty => (2, 0, 6),
            Word::MinFive => (2, 6, 4),
            Word::Half => (3, 0, 4),
            Word::MinTen => (3, 5, 3),
            Word::To => (3, 9, 2),
            Word::Past => (4, 0, 4),
            Word::Nine => (4, 7, 4),
            Word::One => (5, 0, 3),
            Word::Six => (5, 3, 3),
            Word::Three => (5, 6, 5),
            Word::Four => (6, 0, 4),
            Word::HourFive => (6, 4, 4),
            Word::Two => (6, 8, 3),
            Word::Eight => (7, 0, 5),
            Word::Eleven => (7, 5, 6),
            Word::Seven => (8, 0, 5),
            Word::Twelve => (8, 5, 6),
            Word::HourTen => (9, 0, 3),
            Word::OClock => (9, 5, 6),
        }
    }
}

const HOUR_WORDS: [Word; 12] = [
    Word::Twelve,
    Word::One,
    Word::Two,
    Word::Three,
    Word::Four,
    Word::HourFive,
    Word::Six,
    Word::Seven,
    Word::Eight,
    Word::Nine,
    Word::HourTen,
    Word::Eleven,
];

/// The words lit for a given time of day.
pub fn active_words(h24: u32, m: u32) -> Vec<Word> {
    let mut words = vec![Word::It, Word::Is];

    // Round to the nearest 5 minutes; 58 rounds up to the next hour's OCLOCK.
    let bucket = (m + 2) / 5 * 5;

    let mut h = h24 % 12;
    if bucket > 30 {
        h = (h + 1) % 12;
    }

    match bucket % 60 {
        0 => words.push(Word::OClock),
        5 => words.extend([Word::MinFive, Word::Past]),
        10 => words.extend([Word::MinTen, Word::Past]),
        15 => words.extend([Word::A, Word::Quarter, Word::Past]),
        20 => words.extend([Word::Twenty, Word::Past]),
        25 => words.extend([Word::Twenty, Word::MinFive, Word::Past]),
        30 => words.extend([Word::Half, Word::Past]),
        35 => words.extend([Word::Twenty, Word::MinFive, Word::To]),
        40 => words.extend([Word::Twenty, Word::To]),
        45 => words.extend([Word::A, Word::Quarter, Word::To]),
        50 => words.extend([Word::MinTen, Word::To]),
        55 => words.extend([Word::MinFive, Word::To]),
        _ => unreachable!("bucket is a multiple of 5"),
    }

    words.push(if h24 < 12 { Word::Am } else { Word::Pm });
    words.push(HOUR_WORDS[h as usize]);
    words
}

pub struct WordClockFace {
    /// Last lit set, to skip redundant repaints.
    last: Option<Vec<Word>>,
}

impl WordClockFace {
    pub fn new() -> Self {
        Self { last: None }
    }

    fn paint(&self, surface: &mut Surface, active: &[Word]) {
        let mut lit = [[false; 11]; 10];
        for word in active {
            let (row, col, len) = word.placement();
            for c in col..col + len {
                lit[row as usize][c as usize] = true;
            }
        }

        // Letters spaced 2 columns apart so the grid reads as a grid.
        let grid_w = 11 * 2 - 1;
        let x0 = surface.width().saturating_sub(grid_w) / 2;
        let y0 = surface.height().saturating_sub(10) / 2;

        let on = Style::new(Rgba::WHITE, Rgba::rgb(8, 8, 8)).with_attrs(Attr::BOLD);
        let off = Style::new(Rgba::rgb(45, 45, 45), Rgba::rgb(8, 8, 8));

        for (r, row) in GRID.iter().enumerate() {
            for (c, ch) in row.chars().enumerate() {
                let style = if lit[r][c] { on } else { off };
                surface.put_char(x0 + (c * 2) as u16, y0 + r as u16, ch, style);
            }
        }
    }
}

impl Default for WordClockFace {
    fn default() -> Self {
        Self::new()
    }
}

impl Face for WordClockFace {
    fn name(&self) -> &str {
        "Word Clock"
    }

    fn create(&mut self, surface: &mut Surface) {
        surface.clear(Rgba::rgb(8, 8, 8));
        self.paint(surface, &[]);
    }

    fn update(&mut self, surface: &mut Surface, now_ms: u64) {
        let now = super::local_time(now_ms);
        let active = active_words(now.hour(), now.minute());

        // The surface keeps its cells between ticks; repaint only when the
        // lit set changes.
        if self.last.as_deref() == Some(active.as_slice()) {
            return;
        }
        self.paint(surface, &active);
        self.last = Some(active);
    }

    fn on_deactivate(&mut self) {
        // Force a repaint on the next activation in case the surface went
        // stale while hidden.
        self.last = None;
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_on_the_hour() {
        let words = active_words(9, 0);
        assert!(words.contains(&Word::OClock));
        assert!(words.contains(&Word::Nine));
        assert!(words.contains(&Word::Am));
        assert!(!words.contains(&Word::Past));
    }

    #[test]
    fn test_quarter_past() {
        let words = active_words(15, 15);
        assert!(words.contains(&Word::A));
        assert!(words.contains(&Word::Quarter));
        assert!(words.contains(&Word::Past));
        assert!(words.contains(&Word::Three));
        assert!(words.contains(&Word::Pm));
    }

    #[test]
    fn test_to_phrases_use_next_hour() {
        let words = active_words(9, 45);
        assert!(words.contains(&Word::To));
        assert!(words.contains(&Word::HourTen));
        assert!(!words.contains(&Word::Nine));
    }

    #[test]
    fn test_rounding_to_nearest_bucket() {
        // 9:58 rounds up to 10 o'clock
        let words = active_words(9, 58);
        assert!(words.contains(&Word::OClock));
        assert!(words.contains(&Word::HourTen));

        // 9:32 rounds down to half past nine
        let words = active_words(9, 32);
        assert!(words.contains(&Word::Half));
        assert!(words.contains(&Word::Nine));
    }

    #[test]
    fn test_midnight_is_twelve_am() {
        let words = active_words(0, 0);
        assert!(words.contains(&Word::Twelve));
        assert!(words.contains(&Word::Am));
    }

    #[test]
    fn test_twenty_five_uses_minute_five() {
        let words = active_words(12, 25);
        assert!(words.contains(&Word::Twenty));
        assert!(words.contains(&Word::MinFive));
        assert!(!words.contains(&Word::HourFive));
    }

    #[test]
    fn test_paint_lights_only_active_cells() {
        let mut surface = Surface::new(40, 14);
        let face = WordClockFace::new();
        face.paint(&mut surface, &[Word::It]);

        let x0 = (40 - 21) / 2;
        let y0 = (14 - 10) / 2;
        assert_eq!(surface.get(x0, y0).unwrap().fg, Rgba::WHITE);
        // "L" at column 2 stays dim
        assert_eq!(surface.get(x0 + 4, y0).unwrap().fg, Rgba::rgb(45, 45, 45));
    }
}
