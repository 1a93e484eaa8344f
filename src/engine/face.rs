//! The face plugin contract.
//!
//! A face is one self-contained animated scene bound to wall-clock time.
//! The engine owns the lifecycle; the face owns everything it draws into
//! its surface and every resource it allocates.

use crate::renderer::Surface;

/// A pluggable clock face.
///
/// Lifecycle, enforced by the engine:
/// - `create` runs exactly once per face, in registration order, when the
///   engine starts. Side effects begin immediately even for faces that are
///   not yet visible.
/// - `update` runs once per tick, but only while this face is the active
///   one. Calls are never concurrent and arrive in increasing time order,
///   but the spacing between timestamps is unbounded - interpolate from
///   `now_ms`, never from an assumed frame delta.
/// - `destroy` runs exactly once at engine teardown, in registration order.
///   Release timers, handles, and any other owned resources here.
/// - `on_activate`/`on_deactivate` fire when the face gains or loses the
///   active slot; pause periodic background work in `on_deactivate` so cost
///   scales with visibility, not registration.
pub trait Face {
    /// Display label. Not required to be unique.
    fn name(&self) -> &str;

    /// One-time setup; draw initial content into the surface.
    fn create(&mut self, surface: &mut Surface);

    /// Idempotent re-render for the given wall-clock time (ms since epoch).
    fn update(&mut self, surface: &mut Surface, now_ms: u64);

    /// Release owned resources. Default: nothing to release.
    fn destroy(&mut self, _surface: &mut Surface) {}

    /// The face just became the active one.
    fn on_activate(&mut self) {}

    /// The face just stopped being the active one.
    fn on_deactivate(&mut self) {}
}

/// A registered face plus the engine-owned pieces of its lifecycle.
pub(crate) struct FaceEntry {
    pub(crate) face: Box<dyn Face>,
    pub(crate) surface: Surface,
    /// Set when a lifecycle call panicked; the face is skipped from then on
    /// (stale or blank content in its slot, per the error model).
    pub(crate) failed: bool,
}

impl FaceEntry {
    pub(crate) fn new(face: Box<dyn Face>, surface: Surface) -> Self {
        Self {
            face,
            surface,
            failed: false,
        }
    }
}
