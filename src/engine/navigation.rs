//! Navigation state machine.
//!
//! The engine is always "at" exactly one index. Transitions clamp into
//! bounds - moving past the last face or before the first is a no-op, not a
//! wraparound; that boundary behavior is observable and deliberately kept.
//! The strip offset (in face-widths) is what the compositor consumes: it
//! slides from the old index to the new one over a fixed duration, or jumps
//! instantly when the move is not animated (the initial jump to index 0).

use spark_signals::{Signal, signal};

/// Duration of an animated slide between adjacent faces.
pub const SLIDE_MS: u64 = 250;

#[derive(Debug, Clone, Copy)]
struct Transition {
    from: f32,
    to: f32,
    started_at: u64,
}

/// Index plus strip-offset state.
pub struct NavState {
    len: usize,
    current: Signal<usize>,
    transition: Option<Transition>,
    /// Offset the strip currently sits at, in face-widths.
    offset: f32,
}

impl NavState {
    pub fn new() -> Self {
        Self {
            len: 0,
            current: signal(0),
            transition: None,
            offset: 0.0,
        }
    }

    /// Fix the number of faces. Called once when the engine starts; the
    /// face list does not change while running.
    pub fn seal(&mut self, len: usize) {
        self.len = len;
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The active index.
    pub fn current(&self) -> usize {
        self.current.get()
    }

    /// Reactive handle to the active index, for hosts that want to observe
    /// navigation.
    pub fn current_signal(&self) -> Signal<usize> {
        self.current.clone()
    }

    /// Move to `index`, clamped into `[0, len-1]`.
    ///
    /// Returns `Some((old, new))` when the index actually changed. When
    /// `animate` is false the strip is repositioned instantly (no easing) -
    /// used for the initial jump so no visible slide occurs on load.
    pub fn go_to(&mut self, index: isize, animate: bool, now_ms: u64) -> Option<(usize, usize)> {
        if self.len == 0 {
            return None;
        }
        let clamped = index.clamp(0, self.len as isize - 1) as usize;
        let old = self.current.get();

        if animate && clamped != old {
            self.transition = Some(Transition {
                from: self.offset,
                to: clamped as f32,
                started_at: now_ms,
            });
        } else if !animate {
            self.transition = None;
            self.offset = clamped as f32;
        }

        if clamped == old {
            return None;
        }
        self.current.set(clamped);
        Some((old, clamped))
    }

    /// Convenience wrapper: advance one face. No-op at the last index.
    pub fn next(&mut self, now_ms: u64) -> Option<(usize, usize)> {
        let current = self.current.get();
        if current + 1 < self.len {
            self.go_to(current as isize + 1, true, now_ms)
        } else {
            None
        }
    }

    /// Convenience wrapper: go back one face. No-op at index 0.
    pub fn prev(&mut self, now_ms: u64) -> Option<(usize, usize)> {
        let current = self.current.get();
        if current > 0 {
            self.go_to(current as isize - 1, true, now_ms)
        } else {
            None
        }
    }

    /// Whether a slide is still in flight.
    pub fn in_transition(&self) -> bool {
        self.transition.is_some()
    }

    /// Advance the slide and return the strip offset for this tick.
    pub fn advance(&mut self, now_ms: u64) -> f32 {
        if let Some(t) = self.transition {
            let elapsed = now_ms.saturating_sub(t.started_at);
            if elapsed >= SLIDE_MS {
                self.offset = t.to;
                self.transition = None;
            } else {
                let progress = smoothstep(elapsed as f32 / SLIDE_MS as f32);
                self.offset = t.from + (t.to - t.from) * progress;
            }
        }
        self.offset
    }

    /// The strip offset as of the last advance.
    pub fn offset(&self) -> f32 {
        self.offset
    }
}

impl Default for NavState {
    fn default() -> Self {
        Self::new()
    }
}

#[inline]
fn smoothstep(t: f32) -> f32 {
    t * t * (3.0 - 2.0 * t)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn nav(len: usize) -> NavState {
        let mut n = NavState::new();
        n.seal(len);
        n.go_to(0, false, 0);
        n
    }

    #[test]
    fn test_initial_jump_is_instant() {
        let mut n = nav(3);
        assert_eq!(n.current(), 0);
        assert!(!n.in_transition());
        assert_eq!(n.advance(0), 0.0);
    }

    #[test]
    fn test_next_prev_stay_in_bounds() {
        let mut n = nav(2);
        assert!(n.prev(0).is_none());
        assert_eq!(n.current(), 0);

        assert_eq!(n.next(0), Some((0, 1)));
        assert!(n.next(10).is_none());
        assert_eq!(n.current(), 1);
    }

    #[test]
    fn test_boundary_noop_triggers_no_transition() {
        let mut n = nav(2);
        n.advance(1000);
        assert!(n.prev(1000).is_none());
        assert!(!n.in_transition());
    }

    #[test]
    fn test_go_to_clamps_out_of_range() {
        let mut n = nav(3);
        assert_eq!(n.go_to(99, false, 0), Some((0, 2)));
        assert_eq!(n.current(), 2);
        assert_eq!(n.go_to(-5, false, 0), Some((2, 0)));
        assert_eq!(n.current(), 0);
    }

    #[test]
    fn test_animated_slide_reaches_target() {
        let mut n = nav(3);
        n.next(1000);
        assert!(n.in_transition());

        let mid = n.advance(1000 + SLIDE_MS / 2);
        assert!(mid > 0.0 && mid < 1.0);

        assert_eq!(n.advance(1000 + SLIDE_MS), 1.0);
        assert!(!n.in_transition());
    }

    #[test]
    fn test_index_changes_immediately_even_while_sliding() {
        let mut n = nav(3);
        n.next(0);
        // index is already the destination; only the offset lags
        assert_eq!(n.current(), 1);
    }

    #[test]
    fn test_slide_retarget_mid_flight() {
        let mut n = nav(3);
        n.next(0);
        n.advance(SLIDE_MS / 2);
        n.next(SLIDE_MS / 2);
        assert_eq!(n.current(), 2);
        assert_eq!(n.advance(SLIDE_MS / 2 + SLIDE_MS), 2.0);
    }

    #[test]
    fn test_empty_list_is_inert() {
        let mut n = NavState::new();
        assert!(n.go_to(0, false, 0).is_none());
        assert!(n.next(0).is_none());
        assert_eq!(n.current(), 0);
    }
}
