//! Color palette definitions for Candidex's TUI.
//!
//! This module exposes a small, opinionated theme used throughout the user
//! interface. Colors are grouped into neutrals, muted overlays, and accents
//! for highlighting and semantic states.
use ratatui::style::Color;

/// Application theme palette used by rendering code.
///
/// All colors are provided as [`ratatui::style::Color`] and are suitable for
/// direct use with widgets and styles.
pub struct Theme {
    /// Darkest background shade, used behind selected rows' text.
    pub crust: Color,
    /// Subtle surface color for inactive control backgrounds.
    pub surface: Color,
    /// Muted line/border and secondary label color.
    pub overlay: Color,
    /// Primary foreground text color.
    pub text: Color,
    /// Secondary text for less prominent content.
    pub subtext: Color,
    /// Accent color for selection highlights.
    pub sapphire: Color,
    /// Accent color for emphasized headings and active controls.
    pub mauve: Color,
    /// Positive state color (flag set, filter active).
    pub green: Color,
    /// Attention color (empty result hint).
    pub yellow: Color,
    /// Accent color for subtle emphasis and borders.
    pub lavender: Color,
}

/// Construct a [`Color::Rgb`] from an 8-bit RGB triplet.
///
/// This is a small helper to keep the palette definition concise.
const fn hex(rgb: (u8, u8, u8)) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

/// Return the application's default theme palette.
///
/// Example
///
/// ```rust
/// use candidex::theme::theme;
/// let t = theme();
/// let primary_text = t.text;
/// ```
#[must_use]
pub const fn theme() -> Theme {
    Theme {
        crust: hex((0x11, 0x11, 0x1b)),
        surface: hex((0x58, 0x5b, 0x70)),
        overlay: hex((0x7f, 0x84, 0x9c)),
        text: hex((0xcd, 0xd6, 0xf4)),
        subtext: hex((0xa6, 0xad, 0xc8)),
        sapphire: hex((0x74, 0xc7, 0xec)),
        mauve: hex((0xcb, 0xa6, 0xf7)),
        green: hex((0xa6, 0xe3, 0xa1)),
        yellow: hex((0xf9, 0xe2, 0xaf)),
        lavender: hex((0xb4, 0xbe, 0xfe)),
    }
}
