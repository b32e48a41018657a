//! Footer rendering module for the xLink Bridge TUI.
//!
//! Displays the keyboard shortcuts for the current input context. The
//! wallet and theme keys live in the header next to what they toggle.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::Line,
    widgets::Paragraph,
};

use crate::client::WalletProvider;
use crate::commands::InputContext;
use crate::state::App;

use super::helpers::key_hint;

// ============================================================================
// Footer Rendering
// ============================================================================

/// Renders the footer bar with keyboard shortcuts.
pub fn render<W: WalletProvider>(frame: &mut Frame, area: Rect, app: &App<W>) {
    let palette = app.theme.palette();

    let hints: &[(&'static str, &'static str)] = match app.get_input_context() {
        InputContext::Main => &[
            ("q", "Quit"),
            ("Tab", "Field"),
            ("←→", "Token"),
            ("s", "Swap"),
            ("Enter", "Bridge"),
            ("r", "Refresh"),
            ("o", "Explorer"),
        ],
        InputContext::AmountInput => &[
            ("0-9 .", "Type"),
            ("Tab", "Field"),
            ("Enter", "Bridge"),
            ("Ctrl+C", "Quit"),
        ],
        InputContext::ConfirmDialog => &[("y", "Confirm"), ("n/Esc", "Cancel")],
        InputContext::MessagePopup => &[("Esc", "Close")],
    };

    let spans: Vec<_> = hints
        .iter()
        .flat_map(|&(key, label)| key_hint(key, label, &palette))
        .collect();

    let footer = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    frame.render_widget(footer, area);
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Token;
    use crate::state::{ConfirmBridge, FormField};
    use crate::test_utils::{AppMother, MockWallet, buffer_to_string};
    use ratatui::{Terminal, backend::TestBackend};

    fn render_footer(app: &App<MockWallet>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 1)).unwrap();
        terminal
            .draw(|frame| render(frame, frame.area(), app))
            .unwrap();
        buffer_to_string(terminal.backend().buffer())
    }

    #[test]
    fn test_main_shortcuts() {
        let content = render_footer(&AppMother::app());

        for shortcut in ["q:Quit", "Tab:Field", "s:Swap", "Enter:Bridge", "o:Explorer"] {
            assert!(
                content.contains(shortcut),
                "Footer should contain '{shortcut}', got: {content}"
            );
        }
    }

    #[test]
    fn test_amount_input_shortcuts() {
        let mut app = AppMother::app();
        app.form.focus = FormField::Amount;

        let content = render_footer(&app);
        assert!(content.contains("Ctrl+C:Quit"));
        assert!(!content.contains("q:Quit"));
    }

    #[test]
    fn test_confirm_shortcuts() {
        let mut app = AppMother::app();
        app.ui
            .show_confirm(ConfirmBridge::new("1", Token::Rupx, Token::Brupx));

        let content = render_footer(&app);
        assert!(content.contains("y:Confirm"));
        assert!(content.contains("n/Esc:Cancel"));
    }
}
