//! Alert overlay - transient message display with timed auto-dismiss.
//!
//! At most one message is visible at a time. Showing a new message while one
//! is up replaces it immediately and resets the dismissal deadline, so at
//! most one deadline is ever live. A zero or negative duration means the
//! message persists until [`AlertOverlay::dismiss`] is called.
//!
//! The overlay is an explicit stateful object owned by the engine - no
//! module-level globals. Expiry is deadline-by-value: the render loop calls
//! [`AlertOverlay::expire`] each tick with the current wall-clock time, which
//! is the single-threaded rendition of a dismissal timer.

use crate::types::Rgba;

/// Default auto-dismiss duration when the caller does not specify one.
pub const DEFAULT_DURATION_MS: i64 = 4000;

/// Options for showing an alert.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlertOptions {
    /// Auto-dismiss after this many milliseconds; `<= 0` persists until an
    /// explicit dismiss.
    pub duration_ms: i64,
    /// Message color.
    pub color: Rgba,
}

impl Default for AlertOptions {
    fn default() -> Self {
        Self {
            duration_ms: DEFAULT_DURATION_MS,
            color: Rgba::WHITE,
        }
    }
}

/// The currently visible message.
#[derive(Debug, Clone, PartialEq)]
pub struct Alert {
    pub message: String,
    pub color: Rgba,
}

/// Single-active-message overlay state.
#[derive(Debug, Default)]
pub struct AlertOverlay {
    active: Option<Alert>,
    /// Wall-clock ms at which the active message auto-dismisses.
    /// Invariant: `Some` only while a message is active.
    deadline: Option<u64>,
}

impl AlertOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a message, replacing any visible one and resetting its deadline.
    pub fn show(&mut self, message: impl Into<String>, options: AlertOptions, now_ms: u64) {
        self.active = Some(Alert {
            message: message.into(),
            color: options.color,
        });
        self.deadline = if options.duration_ms > 0 {
            Some(now_ms.saturating_add(options.duration_ms as u64))
        } else {
            None
        };
    }

    /// Hide immediately and cancel any pending auto-dismissal.
    pub fn dismiss(&mut self) {
        self.active = None;
        self.deadline = None;
    }

    /// Auto-dismiss if the deadline has passed. Returns true if the overlay
    /// was dismissed by this call.
    pub fn expire(&mut self, now_ms: u64) -> bool {
        match self.deadline {
            Some(deadline) if now_ms >= deadline => {
                self.dismiss();
                true
            }
            _ => false,
        }
    }

    /// The visible message, if any.
    pub fn active(&self) -> Option<&Alert> {
        self.active.as_ref()
    }

    pub fn is_visible(&self) -> bool {
        self.active.is_some()
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn opts(duration_ms: i64) -> AlertOptions {
        AlertOptions {
            duration_ms,
            ..Default::default()
        }
    }

    #[test]
    fn test_show_then_expire_at_deadline() {
        let mut overlay = AlertOverlay::new();
        overlay.show("X", opts(100), 1000);
        assert!(overlay.is_visible());

        assert!(!overlay.expire(1099));
        assert!(overlay.expire(1100));
        assert!(!overlay.is_visible());
    }

    #[test]
    fn test_replacement_resets_deadline() {
        // show X for 100ms, then Y for 5000ms 50ms later: Y survives X's
        // deadline and dismisses ~5000ms after the second call.
        let mut overlay = AlertOverlay::new();
        overlay.show("X", opts(100), 0);
        overlay.show("Y", opts(5000), 50);

        assert!(!overlay.expire(100));
        assert_eq!(overlay.active().unwrap().message, "Y");

        assert!(!overlay.expire(5049));
        assert!(overlay.expire(5050));
    }

    #[test]
    fn test_zero_duration_persists_until_dismissed() {
        let mut overlay = AlertOverlay::new();
        overlay.show("X", opts(0), 0);

        assert!(!overlay.expire(u64::MAX));
        assert!(overlay.is_visible());

        overlay.dismiss();
        assert!(!overlay.is_visible());
    }

    #[test]
    fn test_negative_duration_persists() {
        let mut overlay = AlertOverlay::new();
        overlay.show("X", opts(-1), 0);
        assert!(!overlay.expire(u64::MAX));
    }

    #[test]
    fn test_dismiss_cancels_pending_deadline() {
        let mut overlay = AlertOverlay::new();
        overlay.show("X", opts(100), 0);
        overlay.dismiss();
        // the old deadline must not resurrect anything
        assert!(!overlay.expire(200));
        assert!(!overlay.is_visible());
    }

    #[test]
    fn test_color_applied() {
        let mut overlay = AlertOverlay::new();
        overlay.show(
            "X",
            AlertOptions {
                duration_ms: 0,
                color: Rgba::RED,
            },
            0,
        );
        assert_eq!(overlay.active().unwrap().color, Rgba::RED);
    }
}
