//! Header rendering for the xLink Bridge TUI
//!
//! Renders the gradient title, the detected network, the wallet button and
//! the theme indicator.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::client::WalletProvider;
use crate::state::App;
use crate::theme::{GRADIENT_START, Palette, SUCCESS_COLOR, gradient_line};

use super::helpers::create_border_block;

const TITLE: &str = "xLink Bridge";

/// Render the application header
pub fn render<W: WalletProvider>(frame: &mut Frame, area: Rect, app: &App<W>) {
    let palette = app.theme.palette();
    let header_block = create_border_block("", false, &palette);
    let inner = header_block.inner(area);
    frame.render_widget(header_block, area);

    if inner.height == 0 {
        return;
    }

    let title_area = Rect::new(inner.x + 1, inner.y, inner.width.saturating_sub(1), 1);
    frame.render_widget(Paragraph::new(gradient_line(TITLE)), title_area);

    let status_width = inner.width.saturating_sub(TITLE.len() as u16 + 2);
    if status_width > 0 {
        let status_area = Rect::new(
            inner.right() - status_width,
            inner.y,
            status_width.saturating_sub(1),
            1,
        );
        let status = Paragraph::new(status_line(app, &palette)).alignment(Alignment::Right);
        frame.render_widget(status, status_area);
    }
}

/// Network label, wallet button and theme icon, right to left.
fn status_line<W: WalletProvider>(app: &App<W>, palette: &Palette) -> Line<'static> {
    let mut spans = Vec::new();

    let network = app.session.network.label();
    if app.session.is_connected() && !network.is_empty() {
        spans.push(Span::styled(
            format!("Network: {network}"),
            Style::new().fg(SUCCESS_COLOR).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw("  "));
    }

    let key_style = Style::new().fg(palette.focus).add_modifier(Modifier::BOLD);
    spans.push(Span::styled("[c] ", key_style));
    match app.session.short_account() {
        Some(short) => spans.push(Span::styled(
            format!("Disconnect {short}"),
            palette.text_style(),
        )),
        None => spans.push(Span::styled(
            "Connect Wallet",
            Style::new().fg(GRADIENT_START).add_modifier(Modifier::BOLD),
        )),
    }

    spans.push(Span::raw("  "));
    spans.push(Span::styled("[t] ", key_style));
    spans.push(Span::styled(app.theme.icon(), palette.text_style()));

    Line::from(spans)
}

// ============================================================================
// Tests
// ============================================================================
