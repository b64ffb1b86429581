//! Theme palettes and color helpers for the TUI.

use ratatui::style::Color;

/// Resolved color set for one theme.
///
/// Styling variants are configuration, not separate code paths: each
/// theme is a palette selected through `ui.theme`.
pub struct Palette {
    /// Header bar foreground.
    pub header_fg: Color,
    /// Header bar background.
    pub header_bg: Color,
    /// Accent color for the selected input control.
    pub accent: Color,
    /// Input slider fill color.
    pub slider: Color,
    /// Pre-optimization bar color.
    pub bar_before: Color,
    /// Post-optimization bar color.
    pub bar_after: Color,
    /// Metric value highlight color.
    pub positive: Color,
    /// Footer help text color.
    pub footer_fg: Color,
}

/// Returns the palette for a theme name, falling back to neon.
pub fn palette(theme: &str) -> Palette {
    match theme {
        "aurora" => Palette {
            header_fg: Color::Black,
            header_bg: Color::Magenta,
            accent: Color::Magenta,
            slider: Color::LightMagenta,
            bar_before: Color::Magenta,
            bar_after: Color::Green,
            positive: Color::LightGreen,
            footer_fg: Color::DarkGray,
        },
        "classic" => Palette {
            header_fg: Color::White,
            header_bg: Color::Blue,
            accent: Color::Blue,
            slider: Color::LightBlue,
            bar_before: Color::Gray,
            bar_after: Color::Blue,
            positive: Color::Green,
            footer_fg: Color::DarkGray,
        },
        "midnight" => Palette {
            header_fg: Color::White,
            header_bg: Color::DarkGray,
            accent: Color::LightBlue,
            slider: Color::Gray,
            bar_before: Color::DarkGray,
            bar_after: Color::LightBlue,
            positive: Color::LightCyan,
            footer_fg: Color::DarkGray,
        },
        _ => Palette {
            header_fg: Color::Black,
            header_bg: Color::Cyan,
            accent: Color::Cyan,
            slider: Color::LightCyan,
            bar_before: Color::Cyan,
            bar_after: Color::LightGreen,
            positive: Color::LightGreen,
            footer_fg: Color::DarkGray,
        },
    }
}

/// Returns a color based on how large the savings percentage is.
pub fn savings_color(percent: f64) -> Color {
    if percent >= 20.0 {
        Color::Green
    } else if percent >= 5.0 {
        Color::Yellow
    } else {
        Color::Gray
    }
}
