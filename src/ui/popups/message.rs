//! Message popup rendering.
//!
//! A generic modal for errors the user should acknowledge, such as a
//! browser that failed to open.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::Line,
    widgets::{Clear, Paragraph, Wrap},
};

use crate::theme::Palette;
use crate::ui::helpers::{create_popup_block, key_hint};
use crate::ui::layout::centered_popup_area;

// ============================================================================
// Public API
// ============================================================================

/// Renders a message popup sized to its content.
pub fn render(frame: &mut Frame, area: Rect, message: &str, palette: &Palette) {
    let message_lines = message.lines().count().max(1) as u16;
    let longest_line = message
        .lines()
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0) as u16;

    let popup_width = 40.max(longest_line + 6).min(area.width * 8 / 10);
    let popup_height = 6.max(message_lines + 4);

    let popup_area = centered_popup_area(area, popup_width, popup_height);

    let popup_block = create_popup_block("Message", palette);
    frame.render_widget(Clear, popup_area);
    frame.render_widget(popup_block.clone(), popup_area);

    let inner_area = popup_block.inner(popup_area);

    let message_area = Rect::new(
        inner_area.x,
        inner_area.y,
        inner_area.width,
        inner_area.height.saturating_sub(2),
    );
    let prompt = Paragraph::new(message)
        .style(palette.text_style())
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(prompt, message_area);

    let help_area = Rect::new(
        inner_area.x,
        inner_area.bottom().saturating_sub(1),
        inner_area.width,
        1,
    );
    let help = Paragraph::new(Line::from(key_hint("Esc", "Close", palette)))
        .alignment(Alignment::Center);
    frame.render_widget(help, help_area);
}
