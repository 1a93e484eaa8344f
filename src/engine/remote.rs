//! Remote control handle.
//!
//! The host-level integration surface: a clonable, `Send` handle that lets
//! external automation (another thread, a webhook bridge, a scripted demo)
//! navigate the gallery and raise alerts. Commands queue on a channel and
//! are applied by the render loop at the start of each tick, so all engine
//! mutation stays on the loop thread.

use std::sync::mpsc::{Receiver, Sender, channel};

use crate::state::AlertOptions;

/// A queued engine command.
#[derive(Debug, Clone)]
pub enum Command {
    Next,
    Prev,
    GoTo(usize),
    Alert {
        message: String,
        options: AlertOptions,
    },
    Dismiss,
    Shutdown,
}

/// Clonable remote control for a running engine.
///
/// Sends are fire-and-forget: once the engine is gone, commands are
/// silently dropped.
#[derive(Debug, Clone)]
pub struct EngineHandle {
    tx: Sender<Command>,
}

impl EngineHandle {
    pub(crate) fn channel() -> (Self, Receiver<Command>) {
        let (tx, rx) = channel();
        (Self { tx }, rx)
    }

    /// Advance to the next face on the next tick.
    pub fn next_face(&self) {
        let _ = self.tx.send(Command::Next);
    }

    /// Go back to the previous face on the next tick.
    pub fn prev_face(&self) {
        let _ = self.tx.send(Command::Prev);
    }

    /// Jump to a face by index (clamped by the engine).
    pub fn go_to(&self, index: usize) {
        let _ = self.tx.send(Command::GoTo(index));
    }

    /// Show an alert message.
    pub fn alert(&self, message: impl Into<String>, options: AlertOptions) {
        let _ = self.tx.send(Command::Alert {
            message: message.into(),
            options,
        });
    }

    /// Dismiss the visible alert, if any.
    pub fn dismiss(&self) {
        let _ = self.tx.send(Command::Dismiss);
    }

    /// Ask the render loop to stop and tear the gallery down.
    pub fn shutdown(&self) {
        let _ = self.tx.send(Command::Shutdown);
    }
}

// =============================================================================
// TESTS
// =============================================================================
