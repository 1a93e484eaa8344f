//! Bundled clock faces.
//!
//! Each face is an independent scene implementing [`crate::Face`]; none of
//! them is part of the engine core. They double as reference
//! implementations of the contract: draw the static scene in `create`,
//! re-render from the supplied timestamp in `update`, and never assume a
//! fixed delta between ticks.

mod analog;
mod digital;
pub mod glyphs;
mod matrix_rain;
mod word_clock;

pub use analog::MinimalAnalogFace;
pub use digital::DigitalFace;
pub use matrix_rain::MatrixRainFace;
pub use word_clock::WordClockFace;

use chrono::{DateTime, Local, TimeZone};

/// Convert engine wall-clock milliseconds to local civil time.
pub(crate) fn local_time(now_ms: u64) -> DateTime<Local> {
    Local
        .timestamp_millis_opt(now_ms as i64)
        .single()
        .unwrap_or_else(Local::now)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn test_local_time_roundtrip() {
        let t = local_time(0);
        // epoch converts without falling back to the current instant
        assert!(t.timestamp_millis() == 0);
        let _ = t.hour();
    }
}
