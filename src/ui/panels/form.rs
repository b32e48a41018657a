//! Bridge form card.
//!
//! Each field is one row; the focused row is marked and drawn in the focus
//! color. The form card itself is always drawn focused unless a popup is open.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::client::WalletProvider;
use crate::domain::Token;
use crate::state::{App, FormField};
use crate::theme::{GRADIENT_END, GRADIENT_START, Palette};
use crate::ui::helpers::create_border_block;

/// Width reserved for field labels.
const LABEL_WIDTH: usize = 8;

const AMOUNT_PLACEHOLDER: &str = "0.0";

/// Renders the bridge form.
pub fn render<W: WalletProvider>(frame: &mut Frame, area: Rect, app: &App<W>) {
    let palette = app.theme.palette();
    let focused = !app.ui.has_active_popup();
    let block = create_border_block("Bridge", focused, &palette);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let form = &app.form;
    let lines = vec![
        Line::default(),
        token_line(FormField::From, form.pair.from, form.focus, &palette),
        Line::from(vec![
            Span::raw(" ".repeat(LABEL_WIDTH + 4)),
            Span::styled("⇅ swap (s)", palette.muted_style()),
        ]),
        token_line(FormField::To, form.pair.to, form.focus, &palette),
        Line::default(),
        amount_line(&form.amount, form.focus == FormField::Amount, &palette),
        Line::default(),
        button_line(app.loading),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}

fn field_label(field: FormField, focused: bool, palette: &Palette) -> Vec<Span<'static>> {
    let marker = if focused { "> " } else { "  " };
    let style = if focused {
        Style::new().fg(palette.focus).add_modifier(Modifier::BOLD)
    } else {
        palette.muted_style()
    };
    vec![
        Span::styled(marker, style),
        Span::styled(format!("{:<LABEL_WIDTH$}", field.label()), style),
    ]
}

fn token_line(
    field: FormField,
    token: Token,
    focus: FormField,
    palette: &Palette,
) -> Line<'static> {
    let focused = field == focus;
    let mut spans = field_label(field, focused, palette);
    let arrows = if focused {
        Style::new().fg(palette.focus)
    } else {
        palette.muted_style()
    };
    spans.push(Span::styled("< ", arrows));
    spans.push(Span::styled(token.symbol(), palette.title_style()));
    spans.push(Span::styled(" >", arrows));
    Line::from(spans)
}

fn amount_line(amount: &str, focused: bool, palette: &Palette) -> Line<'static> {
    let mut spans = field_label(FormField::Amount, focused, palette);
    if amount.is_empty() {
        spans.push(Span::styled(AMOUNT_PLACEHOLDER, palette.muted_style()));
    } else {
        spans.push(Span::styled(amount.to_string(), palette.title_style()));
    }
    if focused {
        spans.push(Span::styled(
            "▏",
            Style::new()
                .fg(palette.focus)
                .add_modifier(Modifier::SLOW_BLINK),
        ));
    }
    Line::from(spans)
}

fn button_line(loading: bool) -> Line<'static> {
    let (label, color) = if loading {
        ("[ Bridging... ]", GRADIENT_END)
    } else {
        ("[ Bridge Tokens (Enter) ]", GRADIENT_START)
    };
    Line::from(Span::styled(
        label,
        Style::new().fg(color).add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center)
}
