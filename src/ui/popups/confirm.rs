//! Bridge confirmation popup rendering.
//!
//! Asks the user to confirm the amount and direction captured when the
//! dialog opened.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::Line,
    widgets::{Clear, Paragraph, Wrap},
};

use crate::state::ConfirmBridge;
use crate::theme::Palette;
use crate::ui::helpers::{create_popup_block, key_hint};
use crate::ui::layout::centered_popup_area;

const POPUP_WIDTH: u16 = 64;
const POPUP_HEIGHT: u16 = 10;

const NETWORK_WARNING: &str =
    "Please make sure you're connected to the correct network before proceeding.";

// ============================================================================
// Public API
// ============================================================================

/// Renders the "Confirm Bridge Transaction" popup.
pub fn render(frame: &mut Frame, area: Rect, confirm: &ConfirmBridge, palette: &Palette) {
    let popup_area = centered_popup_area(area, POPUP_WIDTH, POPUP_HEIGHT);

    let popup_block = create_popup_block("Confirm Bridge Transaction", palette);
    frame.render_widget(Clear, popup_area);
    frame.render_widget(popup_block.clone(), popup_area);

    let inner_area = popup_block.inner(popup_area);

    let body = vec![
        Line::default(),
        Line::styled(confirm.question(), palette.title_style()),
        Line::default(),
        Line::styled(NETWORK_WARNING, palette.muted_style()),
    ];
    let body_area = Rect::new(
        inner_area.x + 1,
        inner_area.y,
        inner_area.width.saturating_sub(2),
        inner_area.height.saturating_sub(2),
    );
    frame.render_widget(
        Paragraph::new(body)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        body_area,
    );

    // Separator
    let separator_area = Rect::new(
        inner_area.x,
        inner_area.bottom().saturating_sub(2),
        inner_area.width,
        1,
    );
    frame.render_widget(
        Paragraph::new("─".repeat(inner_area.width as usize)).style(palette.muted_style()),
        separator_area,
    );

    let help_area = Rect::new(
        inner_area.x,
        inner_area.bottom().saturating_sub(1),
        inner_area.width,
        1,
    );
    let help: Vec<_> = [("y", "Confirm"), ("n/Esc", "Cancel")]
        .into_iter()
        .flat_map(|(key, label)| key_hint(key, label, palette))
        .collect();
    frame.render_widget(
        Paragraph::new(Line::from(help)).alignment(Alignment::Center),
        help_area,
    );
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Token;
    use crate::test_utils::buffer_to_string;
    use crate::theme::DARK;
    use ratatui::{Terminal, backend::TestBackend};

    #[test]
    fn test_confirm_popup_content() {
        let backend = TestBackend::new(100, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        let confirm = ConfirmBridge::new("2.5", Token::Brupx, Token::Rupx);

        terminal
            .draw(|frame| render(frame, frame.area(), &confirm, &DARK))
            .unwrap();

        let content = buffer_to_string(terminal.backend().buffer());
        assert!(content.contains("Confirm Bridge Transaction"));
        assert!(content.contains("Are you sure you want to bridge 2.5 BRUPX to RUPX?"));
        assert!(content.contains("Please make sure you're connected to the correct network"));
        assert!(content.contains("y:Confirm"));
        assert!(content.contains("n/Esc:Cancel"));
    }

    #[test]
    fn test_confirm_popup_small_terminal() {
        let backend = TestBackend::new(30, 8);
        let mut terminal = Terminal::new(backend).unwrap();
        let confirm = ConfirmBridge::new("1", Token::Rupx, Token::Brupx);

        terminal
            .draw(|frame| render(frame, frame.area(), &confirm, &DARK))
            .unwrap();
    }
}
