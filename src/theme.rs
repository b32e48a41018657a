//! Theme and styling for the xLink Bridge TUI.
//!
//! Two palettes (light and dark) plus the blue-to-green brand gradient used
//! by the title and the primary button.

use std::fmt;

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use serde::{Deserialize, Serialize};

// ============================================================================
// Brand Colors
// ============================================================================

/// Gradient start (blue).
pub const GRADIENT_START: Color = Color::Rgb(0x34, 0x98, 0xdb);

/// Gradient end (green).
pub const GRADIENT_END: Color = Color::Rgb(0x2e, 0xcc, 0x71);

/// Success indicator color.
pub const SUCCESS_COLOR: Color = Color::Rgb(0x27, 0xae, 0x60);

/// Error indicator color.
pub const ERROR_COLOR: Color = Color::Rgb(0xe5, 0x3e, 0x3e);

/// Info indicator color.
pub const INFO_COLOR: Color = Color::Rgb(0x29, 0x80, 0xb9);

// ============================================================================
// Theme Mode
// ============================================================================

/// Light or dark color mode.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// The other mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Indicator for the toggle: a moon offers dark mode, a sun offers light.
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Light => "☾",
            Self::Dark => "☀",
        }
    }

    #[must_use]
    pub const fn palette(self) -> Palette {
        match self {
            Self::Light => LIGHT,
            Self::Dark => DARK,
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Light => write!(f, "light"),
            Self::Dark => write!(f, "dark"),
        }
    }
}

// ============================================================================
// Palette
// ============================================================================

/// Colors for one theme mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Page background.
    pub background: Color,
    /// Card background.
    pub surface: Color,
    pub text: Color,
    pub muted: Color,
    pub border: Color,
    /// Border of the focused field.
    pub focus: Color,
}

pub const LIGHT: Palette = Palette {
    background: Color::Rgb(0xf7, 0xfa, 0xfc),
    surface: Color::Rgb(0xff, 0xff, 0xff),
    text: Color::Rgb(0x1a, 0x20, 0x2c),
    muted: Color::Rgb(0x71, 0x80, 0x96),
    border: Color::Rgb(0xe2, 0xe8, 0xf0),
    focus: GRADIENT_START,
};

pub const DARK: Palette = Palette {
    background: Color::Rgb(0x17, 0x19, 0x23),
    surface: Color::Rgb(0x1a, 0x20, 0x2c),
    text: Color::Rgb(0xff, 0xff, 0xff),
    muted: Color::Rgb(0xa0, 0xae, 0xc0),
    border: Color::Rgb(0x4a, 0x55, 0x68),
    focus: GRADIENT_END,
};

impl Palette {
    #[must_use]
    pub const fn text_style(&self) -> Style {
        Style::new().fg(self.text).bg(self.surface)
    }

    #[must_use]
    pub const fn muted_style(&self) -> Style {
        Style::new().fg(self.muted)
    }

    #[must_use]
    pub const fn border_style(&self, focused: bool) -> Style {
        if focused {
            Style::new().fg(self.focus)
        } else {
            Style::new().fg(self.border)
        }
    }

    #[must_use]
    pub const fn title_style(&self) -> Style {
        Style::new().fg(self.text).add_modifier(Modifier::BOLD)
    }
}

// ============================================================================
// Gradient
// ============================================================================

fn lerp(start: u8, end: u8, t: f32) -> u8 {
    let value = f32::from(start) + (f32::from(end) - f32::from(start)) * t;
    value.round().clamp(0.0, 255.0) as u8
}

fn rgb(color: Color) -> (u8, u8, u8) {
    match color {
        Color::Rgb(r, g, b) => (r, g, b),
        _ => (0, 0, 0),
    }
}

/// Color at position `t` (0.0..=1.0) between two RGB colors.
#[must_use]
pub fn blend(start: Color, end: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    let (r1, g1, b1) = rgb(start);
    let (r2, g2, b2) = rgb(end);
    Color::Rgb(lerp(r1, r2, t), lerp(g1, g2, t), lerp(b1, b2, t))
}

/// `text` with each character colored along the brand gradient.
#[must_use]
pub fn gradient_line(text: &str) -> Line<'static> {
    let chars: Vec<char> = text.chars().collect();
    let steps = chars.len().saturating_sub(1).max(1) as f32;

    chars
        .into_iter()
        .enumerate()
        .map(|(i, c)| {
            Span::styled(
                c.to_string(),
                Style::new()
                    .fg(blend(GRADIENT_START, GRADIENT_END, i as f32 / steps))
                    .add_modifier(Modifier::BOLD),
            )
        })
        .collect::<Vec<_>>()
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle() {
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
        assert_eq!(ThemeMode::default(), ThemeMode::Light);
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(
            serde_json::to_string(&ThemeMode::Dark).unwrap(),
            "\"dark\""
        );
        let mode: ThemeMode = serde_json::from_str("\"light\"").unwrap();
        assert_eq!(mode, ThemeMode::Light);
    }

    #[test]
    fn test_palettes_differ() {
        assert_ne!(ThemeMode::Light.palette(), ThemeMode::Dark.palette());
        assert_eq!(ThemeMode::Dark.palette().text, Color::Rgb(255, 255, 255));
    }

    #[test]
    fn test_blend_endpoints() {
        assert_eq!(blend(GRADIENT_START, GRADIENT_END, 0.0), GRADIENT_START);
        assert_eq!(blend(GRADIENT_START, GRADIENT_END, 1.0), GRADIENT_END);
        assert_eq!(
            blend(Color::Rgb(0, 0, 0), Color::Rgb(200, 100, 50), 0.5),
            Color::Rgb(100, 50, 25)
        );
    }

    #[test]
    fn test_gradient_line_spans() {
        let line = gradient_line("xLink");
        assert_eq!(line.spans.len(), 5);
        assert_eq!(line.spans[0].style.fg, Some(GRADIENT_START));
        assert_eq!(line.spans[4].style.fg, Some(GRADIENT_END));
        assert_eq!(line.to_string(), "xLink");
    }
}
