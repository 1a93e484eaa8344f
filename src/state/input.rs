//! Input Module - Event conversion and polling
//!
//! Bridges crossterm's event system with the keyboard and gesture modules.
//! Provides event polling and conversion; routing lives in the engine, which
//! owns the navigation state machine both input sources feed.
//!
//! # API
//!
//! - `convert_key_event` - Convert crossterm KeyEvent to our KeyboardEvent
//! - `convert_mouse_event` - Convert crossterm MouseEvent to a PointerEvent
//! - `poll_event` - Non-blocking event check with timeout
//! - `read_event` - Blocking event read

use std::time::Duration;

use crossterm::event::{
    Event as CrosstermEvent, KeyCode, KeyEvent as CrosstermKeyEvent, KeyEventKind, KeyModifiers,
    MouseButton as CrosstermMouseButton, MouseEvent as CrosstermMouseEvent, MouseEventKind, poll,
    read,
};

use super::keyboard::{KeyState, KeyboardEvent, Modifiers};

// =============================================================================
// TYPES
// =============================================================================

/// Pointer press/release, the only mouse actions the gallery cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerAction {
    Down,
    Up,
}

/// A pointer event in cell coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerEvent {
    pub action: PointerAction,
    pub x: u16,
    pub y: u16,
}

/// Unified event type for the engine loop.
#[derive(Debug, Clone)]
pub enum InputEvent {
    /// Keyboard event (key press, release, etc.)
    Key(KeyboardEvent),
    /// Pointer press or release (swipe gesture endpoints)
    Pointer(PointerEvent),
    /// Terminal resize event (new width, height)
    Resize(u16, u16),
    /// No event or unhandled event type
    None,
}

// =============================================================================
// KEY EVENT CONVERSION
// =============================================================================

/// Convert crossterm KeyEvent to our KeyboardEvent
pub fn convert_key_event(event: CrosstermKeyEvent) -> KeyboardEvent {
    let key = match event.code {
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::Esc => "Escape".to_string(),
        KeyCode::Up => "ArrowUp".to_string(),
        KeyCode::Down => "ArrowDown".to_string(),
        KeyCode::Left => "ArrowLeft".to_string(),
        KeyCode::Right => "ArrowRight".to_string(),
        KeyCode::Home => "Home".to_string(),
        KeyCode::End => "End".to_string(),
        KeyCode::PageUp => "PageUp".to_string(),
        KeyCode::PageDown => "PageDown".to_string(),
        KeyCode::F(n) => format!("F{}", n),
        _ => String::new(),
    };

    let state = match event.kind {
        KeyEventKind::Press => KeyState::Press,
        KeyEventKind::Repeat => KeyState::Repeat,
        KeyEventKind::Release => KeyState::Release,
    };

    KeyboardEvent {
        key,
        modifiers: convert_modifiers(event.modifiers),
        state,
    }
}

/// Convert crossterm KeyModifiers to our Modifiers
fn convert_modifiers(mods: KeyModifiers) -> Modifiers {
    Modifiers {
        ctrl: mods.contains(KeyModifiers::CONTROL),
        alt: mods.contains(KeyModifiers::ALT),
        shift: mods.contains(KeyModifiers::SHIFT),
    }
}

// =============================================================================
// MOUSE EVENT CONVERSION
// =============================================================================

/// Convert crossterm MouseEvent to a PointerEvent.
///
/// Only left-button press and release matter for swipe detection; drags,
/// moves, scrolls, and other buttons map to None.
pub fn convert_mouse_event(event: CrosstermMouseEvent) -> Option<PointerEvent> {
    let action = match event.kind {
        MouseEventKind::Down(CrosstermMouseButton::Left) => PointerAction::Down,
        MouseEventKind::Up(CrosstermMouseButton::Left) => PointerAction::Up,
        _ => return None,
    };
    Some(PointerEvent {
        action,
        x: event.column,
        y: event.row,
    })
}

// =============================================================================
// EVENT POLLING
// =============================================================================

/// Poll for an event with timeout.
/// Returns None if no event within timeout.
pub fn poll_event(timeout: Duration) -> std::io::Result<Option<InputEvent>> {
    if poll(timeout)? {
        Ok(Some(read_event()?))
    } else {
        Ok(None)
    }
}

/// Read the next event (blocking).
pub fn read_event() -> std::io::Result<InputEvent> {
    match read()? {
        CrosstermEvent::Key(key) => Ok(InputEvent::Key(convert_key_event(key))),
        CrosstermEvent::Mouse(mouse) => Ok(convert_mouse_event(mouse)
            .map(InputEvent::Pointer)
            .unwrap_or(InputEvent::None)),
        CrosstermEvent::Resize(w, h) => Ok(InputEvent::Resize(w, h)),
        _ => Ok(InputEvent::None),
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_arrow_key() {
        let event = convert_key_event(CrosstermKeyEvent::new(
            KeyCode::Right,
            KeyModifiers::empty(),
        ));
        assert_eq!(event.key, "ArrowRight");
        assert_eq!(event.state, KeyState::Press);
    }

    #[test]
    fn test_convert_ctrl_c() {
        let event = convert_key_event(CrosstermKeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
        ));
        assert_eq!(event.key, "c");
        assert!(event.modifiers.ctrl);
    }

    #[test]
    fn test_convert_left_button_down() {
        let event = convert_mouse_event(CrosstermMouseEvent {
            kind: MouseEventKind::Down(CrosstermMouseButton::Left),
            column: 10,
            row: 5,
            modifiers: KeyModifiers::empty(),
        })
        .unwrap();
        assert_eq!(event.action, PointerAction::Down);
        assert_eq!((event.x, event.y), (10, 5));
    }

    #[test]
    fn test_moves_and_scrolls_are_ignored() {
        let moved = convert_mouse_event(CrosstermMouseEvent {
            kind: MouseEventKind::Moved,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::empty(),
        });
        assert!(moved.is_none());

        let scroll = convert_mouse_event(CrosstermMouseEvent {
            kind: MouseEventKind::ScrollDown,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::empty(),
        });
        assert!(scroll.is_none());
    }

    #[test]
    fn test_right_button_is_ignored() {
        let event = convert_mouse_event(CrosstermMouseEvent {
            kind: MouseEventKind::Down(CrosstermMouseButton::Right),
            column: 0,
            row: 0,
            modifiers: KeyModifiers::empty(),
        });
        assert!(event.is_none());
    }
}
