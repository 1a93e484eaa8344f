//! Face engine - lifecycle, navigation, and the shared render loop.
//!
//! The engine owns the ordered list of registered faces, mounts one surface
//! per face, tracks the active index, translates gesture/keyboard input into
//! navigation, and runs one continuous loop that updates only the active
//! face. Everything runs on the loop thread; the only cross-thread door is
//! the [`EngineHandle`] command channel, drained at the start of each tick.
//!
//! Lifecycle: construct → register faces → `start()` (mounts all surfaces,
//! `create` in registration order, jump to index 0 without animation) →
//! `run()` / `tick()` → `destroy()` (`destroy` on every face in
//! registration order). The engine is not restartable.

mod face;
mod navigation;
mod remote;

use std::any::Any;
use std::io::{self, Write};
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::mpsc::Receiver;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use spark_signals::{Signal, signal};
use thiserror::Error;
use tracing::{debug, error, info};

use crate::renderer::{DiffRenderer, FrameBuffer, Surface, compositor};
use crate::state::input::{InputEvent, PointerAction, poll_event};
use crate::state::keyboard::{self, NavCommand};
use crate::state::{AlertOptions, AlertOverlay, GestureTracker, Swipe};
use crate::terminal::TerminalSession;

pub use face::Face;
pub(crate) use face::FaceEntry;
pub use navigation::{NavState, SLIDE_MS};
pub use remote::{Command, EngineHandle};

/// Frame interval for the render loop. The terminal has no vsync; this is
/// the host refresh signal. Deltas between ticks are still unbounded - a
/// suspended or throttled host delivers ticks late, and faces must
/// interpolate from the supplied timestamp.
pub const FRAME_MS: u64 = 33;

/// Current wall-clock time in milliseconds since the Unix epoch.
pub fn wall_clock_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

// =============================================================================
// ERRORS
// =============================================================================

/// Engine misuse and I/O failures.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("face \"{0}\" registered after start")]
    RegisterAfterStart(String),

    #[error("engine already started")]
    AlreadyStarted,

    #[error("engine has not been started")]
    NotStarted,

    #[error("engine was destroyed and cannot be restarted")]
    Destroyed,

    #[error(transparent)]
    Io(#[from] io::Error),
}

// =============================================================================
// ENGINE
// =============================================================================

/// The face gallery engine.
pub struct Engine {
    /// Faces registered but not yet mounted.
    pending: Vec<Box<dyn Face>>,
    /// Mounted faces, in registration order.
    faces: Vec<FaceEntry>,
    nav: NavState,
    alerts: AlertOverlay,
    gesture: GestureTracker,
    screen: Surface,
    renderer: DiffRenderer,
    handle: EngineHandle,
    commands: Receiver<Command>,
    running: Signal<bool>,
    started: bool,
    destroyed: bool,
    face_size: (u16, u16),
    /// Timestamp of the most recent tick; navigation and alert calls made
    /// between ticks anchor their timing here.
    last_now: u64,
}

impl Engine {
    /// Create an engine for a viewport of `width` x `height` cells.
    ///
    /// The bottom row is reserved for the position indicator dots; faces
    /// get the rest.
    pub fn new(width: u16, height: u16) -> Self {
        let (handle, commands) = EngineHandle::channel();
        Self {
            pending: Vec::new(),
            faces: Vec::new(),
            nav: NavState::new(),
            alerts: AlertOverlay::new(),
            gesture: GestureTracker::default(),
            screen: Surface::new(width, height),
            renderer: DiffRenderer::new(),
            handle,
            commands,
            running: signal(false),
            started: false,
            destroyed: false,
            face_size: (width, height.saturating_sub(1)),
            last_now: 0,
        }
    }

    // =========================================================================
    // Registration & mount
    // =========================================================================

    /// Register a face. Valid only before [`Engine::start`]; registration
    /// order is navigation order. No de-duplication.
    pub fn register(&mut self, face: Box<dyn Face>) -> Result<(), EngineError> {
        if self.started {
            return Err(EngineError::RegisterAfterStart(face.name().to_string()));
        }
        self.pending.push(face);
        Ok(())
    }

    /// Mount every registered face and enter the running state.
    ///
    /// For each face in registration order: allocate a fresh surface and
    /// call `create` synchronously. Side effects of `create` begin
    /// immediately, even for faces not yet visible. A panic in one face's
    /// `create` poisons only that face. Afterwards the engine jumps to
    /// index 0 without a visible slide and activates that face.
    pub fn start(&mut self, now_ms: u64) -> Result<(), EngineError> {
        if self.destroyed {
            return Err(EngineError::Destroyed);
        }
        if self.started {
            return Err(EngineError::AlreadyStarted);
        }
        self.started = true;
        self.last_now = now_ms;

        let (face_w, face_h) = self.face_size;
        for mut face in self.pending.drain(..) {
            let mut surface = Surface::new(face_w, face_h);
            let name = face.name().to_string();
            let ok = guarded(&name, "create", || face.create(&mut surface));
            let mut entry = FaceEntry::new(face, surface);
            entry.failed = !ok;
            self.faces.push(entry);
        }

        self.nav.seal(self.faces.len());
        self.nav.go_to(0, false, now_ms);
        self.fire_hook(0, true);
        self.running.set(true);
        info!(faces = self.faces.len(), "engine started");
        Ok(())
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    /// Advance to the next face. No-op at the last index (not a ring).
    pub fn next(&mut self) {
        if self.destroyed {
            return;
        }
        let change = self.nav.next(self.last_now);
        self.fire_hooks(change);
    }

    /// Go back to the previous face. No-op at index 0.
    pub fn prev(&mut self) {
        if self.destroyed {
            return;
        }
        let change = self.nav.prev(self.last_now);
        self.fire_hooks(change);
    }

    /// Jump to a face by index, clamped into bounds.
    pub fn go_to(&mut self, index: usize, animate: bool) {
        if self.destroyed {
            return;
        }
        let change = self.nav.go_to(index as isize, animate, self.last_now);
        self.fire_hooks(change);
    }

    fn fire_hooks(&mut self, change: Option<(usize, usize)>) {
        let Some((old, new)) = change else { return };
        debug!(from = old, to = new, "face changed");
        self.fire_hook(old, false);
        self.fire_hook(new, true);
    }

    fn fire_hook(&mut self, index: usize, activate: bool) {
        let Some(entry) = self.faces.get_mut(index) else {
            return;
        };
        let FaceEntry { face, failed, .. } = entry;
        let name = face.name().to_string();
        let phase = if activate { "on_activate" } else { "on_deactivate" };
        let ok = guarded(&name, phase, || {
            if activate {
                face.on_activate()
            } else {
                face.on_deactivate()
            }
        });
        if !ok {
            *failed = true;
        }
    }

    // =========================================================================
    // Alerts
    // =========================================================================

    /// Show an alert, replacing any visible one.
    pub fn show_alert(&mut self, message: impl Into<String>, options: AlertOptions) {
        self.alerts.show(message, options, self.last_now);
    }

    /// Dismiss the visible alert and cancel its auto-dismissal.
    pub fn dismiss_alert(&mut self) {
        self.alerts.dismiss();
    }

    /// The alert overlay state.
    pub fn alerts(&self) -> &AlertOverlay {
        &self.alerts
    }

    // =========================================================================
    // Render loop
    // =========================================================================

    /// One loop iteration: drain remote commands, expire the alert deadline,
    /// update only the active face, advance the slide, and composite the
    /// frame. `now_ms` is captured once by the caller and used throughout
    /// the tick.
    pub fn tick(&mut self, now_ms: u64) {
        if self.destroyed {
            return;
        }
        self.last_now = now_ms;
        self.drain_commands();

        if self.alerts.expire(now_ms) {
            debug!("alert auto-dismissed");
        }

        // Only the active face is ticked; hidden faces receive no update
        // calls while inactive.
        let current = self.nav.current();
        if let Some(entry) = self.faces.get_mut(current) {
            if !entry.failed {
                let FaceEntry { face, surface, failed } = entry;
                let name = face.name().to_string();
                if !guarded(&name, "update", || face.update(surface, now_ms)) {
                    *failed = true;
                }
            }
        }

        let offset = self.nav.advance(now_ms);
        let surfaces: Vec<&FrameBuffer> = self.faces.iter().map(|f| f.surface.buffer()).collect();
        let alert = self
            .alerts
            .active()
            .map(|a| (a.message.as_str(), a.color));
        compositor::compose(&mut self.screen, &surfaces, offset, current, alert);
    }

    /// Write the composited frame to `sink`, diffing against the previous
    /// frame.
    pub fn render<W: Write>(&mut self, sink: &mut W) -> io::Result<bool> {
        self.renderer.render(self.screen.buffer(), sink)
    }

    /// Drive the engine against the real terminal until shutdown, then tear
    /// it down. Requires [`Engine::start`] to have been called.
    pub fn run(&mut self) -> Result<(), EngineError> {
        if self.destroyed {
            return Err(EngineError::Destroyed);
        }
        if !self.started {
            return Err(EngineError::NotStarted);
        }

        let session = TerminalSession::enter()?;
        self.renderer.invalidate();
        let mut stdout = io::stdout();
        let frame = Duration::from_millis(FRAME_MS);

        while self.running.get() {
            let deadline = Instant::now() + frame;
            self.tick(wall_clock_ms());
            self.render(&mut stdout)?;

            // Soak up input until the next frame is due.
            loop {
                let now = Instant::now();
                if now >= deadline {
                    break;
                }
                match poll_event(deadline - now)? {
                    Some(event) => self.handle_input(event),
                    None => break,
                }
            }
        }

        self.destroy();
        drop(session);
        Ok(())
    }

    // =========================================================================
    // Input
    // =========================================================================

    /// Feed one input event into the navigation state machine.
    pub fn handle_input(&mut self, event: InputEvent) {
        match event {
            InputEvent::Key(key) => {
                match keyboard::nav_command(&key) {
                    Some(NavCommand::Next) => self.next(),
                    Some(NavCommand::Prev) => self.prev(),
                    Some(NavCommand::Quit) => {
                        self.running.set(false);
                    }
                    None => {}
                }
            }
            InputEvent::Pointer(pointer) => match pointer.action {
                PointerAction::Down => self.gesture.press(pointer.x, pointer.y),
                PointerAction::Up => match self.gesture.release(pointer.x, pointer.y) {
                    Some(Swipe::Left) => self.next(),
                    Some(Swipe::Right) => self.prev(),
                    None => {}
                },
            },
            InputEvent::Resize(w, h) => {
                // Surfaces keep their mounted size; just repaint fully.
                debug!(width = w, height = h, "terminal resized");
                self.renderer.invalidate();
            }
            InputEvent::None => {}
        }
    }

    fn drain_commands(&mut self) {
        while let Ok(command) = self.commands.try_recv() {
            match command {
                Command::Next => self.next(),
                Command::Prev => self.prev(),
                Command::GoTo(index) => self.go_to(index, true),
                Command::Alert { message, options } => self.show_alert(message, options),
                Command::Dismiss => self.dismiss_alert(),
                Command::Shutdown => {
                    self.running.set(false);
                }
            }
        }
    }

    // =========================================================================
    // Teardown
    // =========================================================================

    /// Stop the loop and call `destroy` on every face, in registration
    /// order, regardless of which face was active. A panic in one face's
    /// `destroy` does not prevent the rest from being torn down.
    /// Idempotent; the engine cannot be restarted afterwards.
    pub fn destroy(&mut self) {
        if self.destroyed {
            return;
        }
        self.destroyed = true;
        self.running.set(false);

        for entry in &mut self.faces {
            let FaceEntry { face, surface, .. } = entry;
            let name = face.name().to_string();
            guarded(&name, "destroy", || face.destroy(surface));
        }
        info!("engine destroyed");
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The active face index.
    pub fn current_index(&self) -> usize {
        self.nav.current()
    }

    /// Reactive handle to the active index.
    pub fn current_signal(&self) -> Signal<usize> {
        self.nav.current_signal()
    }

    /// Number of registered faces (mounted or pending).
    pub fn face_count(&self) -> usize {
        self.faces.len() + self.pending.len()
    }

    /// Strip offset in face-widths, as of the last tick.
    pub fn strip_offset(&self) -> f32 {
        self.nav.offset()
    }

    /// Whether the loop is (still) running.
    pub fn is_running(&self) -> bool {
        self.running.get()
    }

    /// A remote control handle for this engine.
    pub fn handle(&self) -> EngineHandle {
        self.handle.clone()
    }

    /// The last composited frame.
    pub fn frame(&self) -> &FrameBuffer {
        self.screen.buffer()
    }
}

// =============================================================================
// PANIC ISOLATION
// =============================================================================

/// Run one face lifecycle call, catching panics so a misbehaving face cannot
/// take down the shared loop. Returns false when the call panicked.
fn guarded(name: &str, phase: &str, f: impl FnOnce()) -> bool {
    match catch_unwind(AssertUnwindSafe(f)) {
        Ok(()) => true,
        Err(payload) => {
            error!(
                face = name,
                phase,
                panic = panic_message(&payload),
                "face lifecycle call panicked"
            );
            false
        }
    }
}

fn panic_message(payload: &Box<dyn Any + Send>) -> &str {
    payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("opaque panic payload")
}
