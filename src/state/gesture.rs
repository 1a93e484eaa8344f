//! Gesture Module - Swipe detection from pointer press/release pairs
//!
//! Records the press coordinate and, on release, classifies the movement.
//! A swipe counts only when the horizontal delta exceeds the threshold AND
//! dominates the vertical delta, so vertical drags and accidental clicks are
//! never misread as navigation. Sub-threshold moves are ignored. No
//! mid-drag feedback; only the release decides.

/// Minimum horizontal delta, in cells, for a drag to count as a swipe.
///
/// Terminal cells are far coarser than browser pixels, so the threshold is
/// small; it is a constructor parameter for hosts with different geometry.
pub const SWIPE_THRESHOLD: i32 = 3;

/// Direction of a completed swipe.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Swipe {
    /// Drag to the left - advance to the next face.
    Left,
    /// Drag to the right - go back to the previous face.
    Right,
}

/// Classify a release delta. Pure function, unit-testable without a terminal.
pub fn classify(dx: i32, dy: i32, threshold: i32) -> Option<Swipe> {
    if dx.abs() > threshold && dx.abs() > dy.abs() {
        if dx < 0 { Some(Swipe::Left) } else { Some(Swipe::Right) }
    } else {
        None
    }
}

/// Tracks one in-flight pointer gesture.
#[derive(Debug)]
pub struct GestureTracker {
    threshold: i32,
    start: Option<(u16, u16)>,
}

impl GestureTracker {
    pub fn new(threshold: i32) -> Self {
        Self {
            threshold,
            start: None,
        }
    }

    /// Record a press; begins tracking.
    pub fn press(&mut self, x: u16, y: u16) {
        self.start = Some((x, y));
    }

    /// Record a release; returns the swipe, if any, and stops tracking.
    ///
    /// A release without a preceding press is ignored.
    pub fn release(&mut self, x: u16, y: u16) -> Option<Swipe> {
        let (sx, sy) = self.start.take()?;
        let dx = x as i32 - sx as i32;
        let dy = y as i32 - sy as i32;
        classify(dx, dy, self.threshold)
    }

    /// Abandon any in-flight gesture.
    pub fn cancel(&mut self) {
        self.start = None;
    }
}

impl Default for GestureTracker {
    fn default() -> Self {
        Self::new(SWIPE_THRESHOLD)
    }
}

// =============================================================================
// TESTS
// =============================================================================
