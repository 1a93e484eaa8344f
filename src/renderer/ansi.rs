//! ANSI escape sequences for terminal control.
//!
//! The subset of sequences the renderer needs:
//! - Cursor movement and visibility
//! - Screen clearing
//! - TrueColor foreground/background
//! - Text attributes (bold, dim, italic, underline, reverse)
//! - Synchronized output for flicker-free rendering

use std::io::Write;

use crate::types::{Attr, Rgba};

/// Control Sequence Introducer.
pub const CSI: &str = "\x1b[";

// =============================================================================
// Cursor
// =============================================================================

/// Move cursor to absolute position (0-indexed input, 1-indexed sequence).
#[inline]
pub fn cursor_to<W: Write>(w: &mut W, x: u16, y: u16) -> std::io::Result<()> {
    write!(w, "\x1b[{};{}H", y + 1, x + 1)
}

/// Move cursor to the home position.
#[inline]
pub fn cursor_home<W: Write>(w: &mut W) -> std::io::Result<()> {
    write!(w, "\x1b[H")
}

/// Hide cursor.
#[inline]
pub fn cursor_hide<W: Write>(w: &mut W) -> std::io::Result<()> {
    write!(w, "\x1b[?25l")
}

/// Show cursor.
#[inline]
pub fn cursor_show<W: Write>(w: &mut W) -> std::io::Result<()> {
    write!(w, "\x1b[?25h")
}

// =============================================================================
// Screen
// =============================================================================

/// Clear the entire screen.
#[inline]
pub fn clear_screen<W: Write>(w: &mut W) -> std::io::Result<()> {
    write!(w, "\x1b[2J")
}

// =============================================================================
// Synchronized output
// =============================================================================

/// Begin a synchronized update block (DEC 2026).
///
/// Terminals that support it hold output until [`end_sync`], eliminating
/// tearing mid-frame. Terminals that don't simply ignore the sequence.
#[inline]
pub fn begin_sync<W: Write>(w: &mut W) -> std::io::Result<()> {
    write!(w, "\x1b[?2026h")
}

/// End a synchronized update block.
#[inline]
pub fn end_sync<W: Write>(w: &mut W) -> std::io::Result<()> {
    write!(w, "\x1b[?2026l")
}

// =============================================================================
// Colors and attributes
// =============================================================================

/// Reset all SGR state.
#[inline]
pub fn sgr_reset<W: Write>(w: &mut W) -> std::io::Result<()> {
    write!(w, "\x1b[0m")
}

/// Set the foreground color (TrueColor, or default for the marker value).
#[inline]
pub fn set_fg<W: Write>(w: &mut W, color: Rgba) -> std::io::Result<()> {
    if color.is_terminal_default() {
        write!(w, "\x1b[39m")
    } else {
        write!(w, "\x1b[38;2;{};{};{}m", color.r, color.g, color.b)
    }
}

/// Set the background color (TrueColor, or default for the marker value).
#[inline]
pub fn set_bg<W: Write>(w: &mut W, color: Rgba) -> std::io::Result<()> {
    if color.is_terminal_default() {
        write!(w, "\x1b[49m")
    } else {
        write!(w, "\x1b[48;2;{};{};{}m", color.r, color.g, color.b)
    }
}

/// Set text attributes from a clean slate.
///
/// The caller is expected to have emitted a reset (or to know the previous
/// attribute state is empty); this only turns attributes ON.
pub fn set_attrs<W: Write>(w: &mut W, attrs: Attr) -> std::io::Result<()> {
    if attrs.contains(Attr::BOLD) {
        write!(w, "\x1b[1m")?;
    }
    if attrs.contains(Attr::DIM) {
        write!(w, "\x1b[2m")?;
    }
    if attrs.contains(Attr::ITALIC) {
        write!(w, "\x1b[3m")?;
    }
    if attrs.contains(Attr::UNDERLINE) {
        write!(w, "\x1b[4m")?;
    }
    if attrs.contains(Attr::REVERSE) {
        write!(w, "\x1b[7m")?;
    }
    Ok(())
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn emit(f: impl Fn(&mut Vec<u8>) -> std::io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_cursor_to_is_one_indexed() {
        assert_eq!(emit(|w| cursor_to(w, 0, 0)), "\x1b[1;1H");
        assert_eq!(emit(|w| cursor_to(w, 9, 4)), "\x1b[5;10H");
    }

    #[test]
    fn test_truecolor_fg() {
        assert_eq!(
            emit(|w| set_fg(w, Rgba::rgb(0, 255, 65))),
            "\x1b[38;2;0;255;65m"
        );
    }

    #[test]
    fn test_default_colors_use_39_49() {
        assert_eq!(emit(|w| set_fg(w, Rgba::TERMINAL_DEFAULT)), "\x1b[39m");
        assert_eq!(emit(|w| set_bg(w, Rgba::TERMINAL_DEFAULT)), "\x1b[49m");
    }

    #[test]
    fn test_attrs_emit_in_order() {
        assert_eq!(
            emit(|w| set_attrs(w, Attr::BOLD | Attr::REVERSE)),
            "\x1b[1m\x1b[7m"
        );
    }
}
