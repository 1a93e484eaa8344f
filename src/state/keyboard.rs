//! Keyboard Module - Keyboard event types and navigation mapping
//!
//! Owns the keyboard event types and the mapping from key events to engine
//! navigation commands. Does NOT own stdin (that is the input module).
//!
//! # API
//!
//! - `nav_command` - Map an event to a navigation command

// =============================================================================
// TYPES
// =============================================================================

/// Keyboard modifier state
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
}

impl Modifiers {
    /// Create empty modifiers
    pub fn none() -> Self {
        Self::default()
    }

    /// Create modifiers with ctrl
    pub fn ctrl() -> Self {
        Self {
            ctrl: true,
            ..Self::default()
        }
    }
}

/// Key event state (press, repeat, release)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum KeyState {
    #[default]
    Press,
    Repeat,
    Release,
}

/// Keyboard event
#[derive(Clone, Debug, PartialEq)]
pub struct KeyboardEvent {
    /// The key that was pressed (e.g., "a", "Enter", "ArrowUp")
    pub key: String,
    /// Modifier keys state
    pub modifiers: Modifiers,
    /// Press/repeat/release state
    pub state: KeyState,
}

impl KeyboardEvent {
    /// Create a simple key press event
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            modifiers: Modifiers::default(),
            state: KeyState::Press,
        }
    }

    /// Create a key press with modifiers
    pub fn with_modifiers(key: impl Into<String>, modifiers: Modifiers) -> Self {
        Self {
            key: key.into(),
            modifiers,
            state: KeyState::Press,
        }
    }

    /// Check if this is a press or repeat event
    pub fn is_press(&self) -> bool {
        matches!(self.state, KeyState::Press | KeyState::Repeat)
    }
}

/// What a key event asks the engine to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavCommand {
    /// Advance to the next face.
    Next,
    /// Go back to the previous face.
    Prev,
    /// Shut the gallery down.
    Quit,
}

// =============================================================================
// NAVIGATION MAPPING
// =============================================================================

/// Map a keyboard event to a navigation command.
///
/// Right/Down arrows advance, Left/Up arrows go back; no repeat-rate
/// throttling beyond the terminal's own key repeat. `q`, `Escape`, and
/// Ctrl+C quit. Release events never navigate.
pub fn nav_command(event: &KeyboardEvent) -> Option<NavCommand> {
    if !event.is_press() {
        return None;
    }
    match event.key.as_str() {
        "ArrowRight" | "ArrowDown" => Some(NavCommand::Next),
        "ArrowLeft" | "ArrowUp" => Some(NavCommand::Prev),
        "q" | "Escape" => Some(NavCommand::Quit),
        "c" if event.modifiers.ctrl => Some(NavCommand::Quit),
        _ => None,
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrows_map_to_navigation() {
        assert_eq!(
            nav_command(&KeyboardEvent::new("ArrowRight")),
            Some(NavCommand::Next)
        );
        assert_eq!(
            nav_command(&KeyboardEvent::new("ArrowDown")),
            Some(NavCommand::Next)
        );
        assert_eq!(
            nav_command(&KeyboardEvent::new("ArrowLeft")),
            Some(NavCommand::Prev)
        );
        assert_eq!(
            nav_command(&KeyboardEvent::new("ArrowUp")),
            Some(NavCommand::Prev)
        );
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(nav_command(&KeyboardEvent::new("q")), Some(NavCommand::Quit));
        assert_eq!(
            nav_command(&KeyboardEvent::new("Escape")),
            Some(NavCommand::Quit)
        );
        assert_eq!(
            nav_command(&KeyboardEvent::with_modifiers("c", Modifiers::ctrl())),
            Some(NavCommand::Quit)
        );
        assert_eq!(nav_command(&KeyboardEvent::new("c")), None);
    }

    #[test]
    fn test_release_does_not_navigate() {
        let mut event = KeyboardEvent::new("ArrowRight");
        event.state = KeyState::Release;
        assert_eq!(nav_command(&event), None);
    }
}
