//! Centralized theme and styling for the TUI
//!
//! Single source of truth for all colors and styles used throughout the
//! application. The palette mirrors the product branding: near-black
//! backgrounds with a warm gold accent.

use ratatui::style::{Color, Modifier, Style};

/// Core color palette for the application
pub struct Colors;

impl Colors {
    /// Primary dark background
    pub const BG_PRIMARY: Color = Color::Rgb(10, 10, 10);

    /// Panel/card background
    pub const BG_PANEL: Color = Color::Rgb(20, 20, 20);

    /// Default foreground text color
    pub const FG_PRIMARY: Color = Color::Rgb(245, 245, 245);

    /// Secondary/muted text color
    pub const FG_SECONDARY: Color = Color::Rgb(115, 115, 115);

    /// Disabled/inactive text color
    pub const FG_MUTED: Color = Color::Rgb(64, 64, 64);

    /// Brand gold — borders, prices, the accent ring on the preview
    pub const ACCENT: Color = Color::Rgb(201, 169, 98);

    /// Lighter gold for highlighted rows
    pub const ACCENT_LIGHT: Color = Color::Rgb(232, 212, 168);

    /// Success/selected feedback
    pub const SUCCESS: Color = Color::Green;

    /// Error/rejection feedback in the status line
    pub const ERROR: Color = Color::Red;

    /// Inactive border color
    pub const BORDER_INACTIVE: Color = Color::Rgb(38, 38, 38);
}

/// Pre-built styles for common UI elements
pub struct Styles;

impl Styles {
    /// Section/step titles
    pub fn title() -> Style {
        Style::default()
            .fg(Colors::ACCENT)
            .add_modifier(Modifier::BOLD)
    }

    /// The highlighted option row under the cursor
    pub fn highlighted() -> Style {
        Style::default()
            .fg(Colors::ACCENT_LIGHT)
            .add_modifier(Modifier::BOLD)
    }

    /// A selected (checked) option row
    pub fn selected() -> Style {
        Style::default().fg(Colors::SUCCESS)
    }

    /// Plain option row
    pub fn normal() -> Style {
        Style::default().fg(Colors::FG_PRIMARY)
    }

    /// Muted helper text and descriptions
    pub fn muted() -> Style {
        Style::default().fg(Colors::FG_SECONDARY)
    }

    /// Price tags
    pub fn price() -> Style {
        Style::default().fg(Colors::ACCENT)
    }

    /// Status-line errors
    pub fn error() -> Style {
        Style::default().fg(Colors::ERROR)
    }
}

/// Map a `#rrggbb` hex string to a terminal color, falling back to the
/// primary foreground when the hex does not parse.
pub fn hex_color(hex: &str) -> Color {
    match crate::scene::parse_hex(hex) {
        Some((r, g, b)) => Color::Rgb(r, g, b),
        None => Colors::FG_PRIMARY,
    }
}
