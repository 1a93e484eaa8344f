//! tick-tui - a rotating gallery of clock faces for the terminal.
//!
//! One engine owns the whole pipeline: it drives a single frame loop,
//! ticks exactly one active face per frame, composes the face strip with
//! slide transitions, and diff-renders only changed cells to the terminal.
//! Faces are small plugins implementing [`Face`]; they draw into a private
//! [`Surface`] and never talk to the terminal directly.
//!
//! # Architecture
//!
//! ```text
//!   Faces (plugins)                    Engine (owns everything)
//!   ───────────────                    ────────────────────────
//!   impl Face for MyFace                 input → navigation → tick →
//!     create(surface)                    compositor → diff → terminal
//!     update(surface, now_ms)                   │
//!          │                                    │
//!          │ draws cells                        │ swaps active face
//!          ▼                                    ▼
//!   ┌──────────────┐   blit    ┌─────────────────────────────────┐
//!   │ Surface      │ ────────► │ screen: strip offset + dots row  │
//!   │ (per face)   │           │ + alert banner, then diff render │
//!   └──────────────┘           └─────────────────────────────────┘
//! ```
//!
//! # Quick start
//!
//! ```no_run
//! use tick_tui::{Engine, EngineError, faces};
//!
//! fn main() -> Result<(), EngineError> {
//!     let (width, height) = tick_tui::terminal::TerminalSession::size()?;
//!     let mut engine = Engine::new(width, height);
//!     engine.register(Box::new(faces::DigitalFace::new()))?;
//!     engine.register(Box::new(faces::WordClockFace::new()))?;
//!     engine.start(tick_tui::wall_clock_ms())?;
//!     engine.run()
//! }
//! ```

pub mod engine;
pub mod faces;
pub mod renderer;
pub mod state;
pub mod terminal;
pub mod types;

pub use engine::{
    Command, Engine, EngineError, EngineHandle, Face, FRAME_MS, SLIDE_MS, wall_clock_ms,
};
pub use renderer::{DiffRenderer, FrameBuffer, Surface};
pub use state::{
    Alert, AlertOptions, AlertOverlay, GestureTracker, NavCommand, SWIPE_THRESHOLD, Swipe,
};
pub use terminal::TerminalSession;
pub use types::{Attr, Cell, Rgba, Style};
