//! UI helper functions for creating styled blocks and widgets.
//!
//! This module provides reusable helper functions for creating consistent
//! UI elements in both palettes.

use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    symbols::border,
    text::Span,
    widgets::{Block, Borders},
};

use crate::theme::Palette;

// ============================================================================
// Border Block Helpers
// ============================================================================

/// Creates a card block: rounded borders, palette background, and a
/// double border with a marker when focused.
#[must_use]
pub fn create_border_block<'a>(title: &str, focused: bool, palette: &Palette) -> Block<'a> {
    let (border_set, display_title) = match (focused, title.is_empty()) {
        (_, true) => (border::ROUNDED, String::new()),
        (true, false) => (border::DOUBLE, format!(" ● {title} ")),
        (false, false) => (border::ROUNDED, format!(" {title} ")),
    };

    Block::default()
        .borders(Borders::ALL)
        .title(display_title)
        .title_style(palette.title_style())
        .border_set(border_set)
        .border_style(palette.border_style(focused))
        .style(palette.text_style())
}

/// Creates a popup-style block with centered title and rounded borders.
#[must_use]
pub fn create_popup_block<'a>(title: &str, palette: &Palette) -> Block<'a> {
    Block::default()
        .title(format!(" {title} "))
        .title_alignment(Alignment::Center)
        .title_style(palette.title_style())
        .borders(Borders::ALL)
        .border_set(border::ROUNDED)
        .border_style(palette.border_style(true))
        .style(palette.text_style())
}

// ============================================================================
// Key Hints
// ============================================================================

/// `key:label` with the key highlighted, followed by two spaces.
#[must_use]
pub fn key_hint(key: &'static str, label: &'static str, palette: &Palette) -> Vec<Span<'static>> {
    vec![
        Span::styled(
            key,
            Style::new().fg(palette.focus).add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!(":{label}  "), palette.muted_style()),
    ]
}

// ============================================================================
// Tests
// ============================================================================
