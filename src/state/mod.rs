//! Input and overlay state - keyboard, gestures, alerts, event conversion.

pub mod alerts;
pub mod gesture;
pub mod input;
pub mod keyboard;

pub use alerts::{Alert, AlertOptions, AlertOverlay};
pub use gesture::{GestureTracker, SWIPE_THRESHOLD, Swipe};
pub use input::{InputEvent, PointerAction, PointerEvent};
pub use keyboard::{KeyState, KeyboardEvent, Modifiers, NavCommand};
