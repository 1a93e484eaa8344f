//! Core types for tick-tui.
//!
//! These types define the foundation that everything builds on: the color
//! model, cell attributes, and the terminal cell that flows through the
//! frame buffers and out the renderer.

use bitflags::bitflags;

// =============================================================================
// Color
// =============================================================================

/// RGBA color with 8-bit channels (0-255).
///
/// Using integers for exact comparison - no floating point epsilon needed.
/// Alpha 255 = fully opaque, 0 = fully transparent.
/// Special value: r=-1 means "terminal default" (let terminal pick).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgba {
    pub r: i16,
    pub g: i16,
    pub b: i16,
    pub a: i16,
}

impl Rgba {
    /// Create a new RGBA color.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as i16,
            g: g as i16,
            b: b as i16,
            a: a as i16,
        }
    }

    /// Create an opaque RGB color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Terminal default color (let terminal decide).
    pub const TERMINAL_DEFAULT: Self = Self {
        r: -1,
        g: -1,
        b: -1,
        a: -1,
    };

    /// Transparent color.
    pub const TRANSPARENT: Self = Self {
        r: 0,
        g: 0,
        b: 0,
        a: 0,
    };

    // Standard colors
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const RED: Self = Self::rgb(255, 0, 0);
    pub const GREEN: Self = Self::rgb(0, 255, 0);
    pub const GRAY: Self = Self::rgb(128, 128, 128);

    /// Check if this is the terminal default color.
    #[inline]
    pub const fn is_terminal_default(&self) -> bool {
        self.r == -1
    }

    /// Check if color is fully opaque.
    #[inline]
    pub const fn is_opaque(&self) -> bool {
        self.a == 255
    }

    /// Check if color is fully transparent.
    #[inline]
    pub const fn is_transparent(&self) -> bool {
        self.a == 0
    }

    /// Alpha blend src over dst (Porter-Duff "over" operation).
    ///
    /// Returns the blended color. The terminal default as either operand is
    /// treated as opaque black for blending purposes.
    #[inline]
    pub fn blend(src: Self, dst: Self) -> Self {
        // Fast path: fully opaque source
        if src.is_opaque() || src.is_terminal_default() {
            return src;
        }

        // Fast path: fully transparent source
        if src.is_transparent() {
            return dst;
        }

        let (dr, dg, db, da) = if dst.is_terminal_default() {
            (0i16, 0i16, 0i16, 255i16)
        } else {
            (dst.r, dst.g, dst.b, dst.a)
        };

        let sa = src.a as i32;
        let inv_sa = 255 - sa;

        // out_a = src_a + dst_a * (1 - src_a)
        let out_a = sa + (da as i32 * inv_sa) / 255;

        if out_a == 0 {
            return Self::TRANSPARENT;
        }

        // out_rgb = (src_rgb * src_a + dst_rgb * dst_a * (1 - src_a)) / out_a
        let out_r = ((src.r as i32 * sa) + (dr as i32 * da as i32 * inv_sa / 255)) / out_a;
        let out_g = ((src.g as i32 * sa) + (dg as i32 * da as i32 * inv_sa / 255)) / out_a;
        let out_b = ((src.b as i32 * sa) + (db as i32 * da as i32 * inv_sa / 255)) / out_a;

        Self {
            r: out_r as i16,
            g: out_g as i16,
            b: out_b as i16,
            a: out_a as i16,
        }
    }

    /// Scale the RGB channels by a factor in [0, 1], keeping alpha.
    ///
    /// Used by faces for brightness trails (e.g. fading rain glyphs).
    #[inline]
    pub fn scaled(self, factor: f32) -> Self {
        if self.is_terminal_default() {
            return self;
        }
        let f = factor.clamp(0.0, 1.0);
        Self {
            r: (self.r as f32 * f) as i16,
            g: (self.g as f32 * f) as i16,
            b: (self.b as f32 * f) as i16,
            a: self.a,
        }
    }
}

// =============================================================================
// Attributes
// =============================================================================

bitflags! {
    /// Text attribute flags for a terminal cell.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Attr: u8 {
        const BOLD      = 1 << 0;
        const DIM       = 1 << 1;
        const ITALIC    = 1 << 2;
        const UNDERLINE = 1 << 3;
        const REVERSE   = 1 << 4;
    }
}

// =============================================================================
// Cell
// =============================================================================

/// One terminal character cell: glyph plus styling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    pub ch: char,
    pub fg: Rgba,
    pub bg: Rgba,
    pub attrs: Attr,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            fg: Rgba::TERMINAL_DEFAULT,
            bg: Rgba::TERMINAL_DEFAULT,
            attrs: Attr::empty(),
        }
    }
}

impl Cell {
    /// Create a cell with a glyph and colors.
    pub fn new(ch: char, fg: Rgba, bg: Rgba) -> Self {
        Self {
            ch,
            fg,
            bg,
            attrs: Attr::empty(),
        }
    }

    /// Builder-style attribute setter.
    pub fn with_attrs(mut self, attrs: Attr) -> Self {
        self.attrs = attrs;
        self
    }
}

/// Combined style for drawing text into a surface.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Style {
    pub fg: Rgba,
    pub bg: Rgba,
    pub attrs: Attr,
}

impl Style {
    /// Foreground-only style over the terminal default background.
    pub fn fg(fg: Rgba) -> Self {
        Self {
            fg,
            bg: Rgba::TERMINAL_DEFAULT,
            attrs: Attr::empty(),
        }
    }

    /// Full style.
    pub fn new(fg: Rgba, bg: Rgba) -> Self {
        Self {
            fg,
            bg,
            attrs: Attr::empty(),
        }
    }

    /// Builder-style attribute setter.
    pub fn with_attrs(mut self, attrs: Attr) -> Self {
        self.attrs = attrs;
        self
    }

    /// The cell this style produces for a given glyph.
    pub fn cell(&self, ch: char) -> Cell {
        Cell {
            ch,
            fg: self.fg,
            bg: self.bg,
            attrs: self.attrs,
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blend_opaque_src_wins() {
        let out = Rgba::blend(Rgba::WHITE, Rgba::BLACK);
        assert_eq!(out, Rgba::WHITE);
    }

    #[test]
    fn test_blend_transparent_src_keeps_dst() {
        let out = Rgba::blend(Rgba::TRANSPARENT, Rgba::GREEN);
        assert_eq!(out, Rgba::GREEN);
    }

    #[test]
    fn test_blend_half_black_darkens() {
        let shade = Rgba::new(0, 0, 0, 128);
        let out = Rgba::blend(shade, Rgba::WHITE);
        assert!(out.r < 255 && out.r > 64);
        assert!(out.is_opaque());
    }

    #[test]
    fn test_scaled_clamps_factor() {
        assert_eq!(Rgba::WHITE.scaled(2.0), Rgba::WHITE);
        assert_eq!(Rgba::WHITE.scaled(-1.0), Rgba::rgb(0, 0, 0));
    }

    #[test]
    fn test_default_cell_is_blank() {
        let cell = Cell::default();
        assert_eq!(cell.ch, ' ');
        assert!(cell.fg.is_terminal_default());
        assert!(cell.attrs.is_empty());
    }
}
