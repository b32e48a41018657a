//! Toast notification component.
//!
//! Provides a non-blocking toast overlay that appears in the bottom-right
//! corner of the screen. The border and title take the color of the toast
//! kind.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    symbols::border,
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::state::{Toast, ToastKind};
use crate::theme::{ERROR_COLOR, INFO_COLOR, Palette, SUCCESS_COLOR};

// ============================================================================
// Constants
// ============================================================================

/// Minimum width for toast notifications.
const MIN_TOAST_WIDTH: u16 = 24;

/// Height of toast notifications: borders, title and description.
const TOAST_HEIGHT: u16 = 4;

/// Horizontal padding from the right edge.
const TOAST_PADDING_RIGHT: u16 = 2;

/// Vertical padding from the bottom edge.
const TOAST_PADDING_BOTTOM: u16 = 2;

/// Borders plus one column of inner padding on each side.
const TOAST_WIDTH_PADDING: u16 = 4;

// ============================================================================
// Public API
// ============================================================================

/// Renders a toast notification in the bottom-right corner of `area`.
pub fn render_toast(frame: &mut Frame, area: Rect, toast: &Toast, palette: &Palette) {
    let toast_area = calculate_toast_position(area, toast);
    let color = kind_color(toast.kind);

    frame.render_widget(Clear, toast_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(border::ROUNDED)
        .border_style(Style::new().fg(color))
        .style(palette.text_style());
    let inner = block.inner(toast_area);
    frame.render_widget(block, toast_area);

    let lines = vec![
        Line::styled(
            format!(" {}", toast.title),
            Style::new().fg(color).add_modifier(Modifier::BOLD),
        ),
        Line::styled(format!(" {}", toast.description), palette.text_style()),
    ];
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

// ============================================================================
// Internal Helpers
// ============================================================================

/// Positions the toast in the bottom-right corner, sized to its longest
/// line and capped at half the area width.
#[must_use]
fn calculate_toast_position(area: Rect, toast: &Toast) -> Rect {
    let longest = toast
        .title
        .chars()
        .count()
        .max(toast.description.chars().count()) as u16;
    let toast_width = (longest + TOAST_WIDTH_PADDING)
        .min(area.width / 2)
        .max(MIN_TOAST_WIDTH)
        .min(area.width);

    let toast_x = area.x + area.width.saturating_sub(toast_width + TOAST_PADDING_RIGHT);
    let toast_y = area.y
        + area
            .height
            .saturating_sub(TOAST_HEIGHT + TOAST_PADDING_BOTTOM);

    Rect::new(
        toast_x,
        toast_y,
        toast_width,
        TOAST_HEIGHT.min(area.height),
    )
}

#[must_use]
const fn kind_color(kind: ToastKind) -> Color {
    match kind {
        ToastKind::Success => SUCCESS_COLOR,
        ToastKind::Error => ERROR_COLOR,
        ToastKind::Info => INFO_COLOR,
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;
    use crate::theme::LIGHT;
    use ratatui::{Terminal, backend::TestBackend};
    use rstest::rstest;

    #[rstest]
    #[case::short(Toast::info("Hi", "Hey"), MIN_TOAST_WIDTH)]
    #[case::sized_to_description(Toast::bridge_failed(), 44)]
    #[case::capped(Toast::error("Error", "x".repeat(80)), 50)]
    fn test_toast_width(#[case] toast: Toast, #[case] expected_width: u16) {
        let toast_area = calculate_toast_position(Rect::new(0, 0, 100, 50), &toast);

        assert_eq!(toast_area.width, expected_width);
        assert_eq!(toast_area.height, TOAST_HEIGHT);
        assert_eq!(toast_area.x, 100 - expected_width - TOAST_PADDING_RIGHT);
        assert_eq!(toast_area.y, 50 - TOAST_HEIGHT - TOAST_PADDING_BOTTOM);
    }

    #[test]
    fn test_toast_stays_in_small_area() {
        let area = Rect::new(0, 0, 20, 3);
        let toast_area = calculate_toast_position(area, &Toast::bridge_failed());

        assert!(toast_area.right() <= area.right());
        assert!(toast_area.bottom() <= area.bottom());
    }

    #[rstest]
    #[case(ToastKind::Success, SUCCESS_COLOR)]
    #[case(ToastKind::Error, ERROR_COLOR)]
    #[case(ToastKind::Info, INFO_COLOR)]
    fn test_kind_color(#[case] kind: ToastKind, #[case] expected: Color) {
        assert_eq!(kind_color(kind), expected);
    }

    #[test]
    fn test_render_toast() {
        let mut terminal = Terminal::new(TestBackend::new(100, 20)).unwrap();
        let toast = Toast::success("Bridge Successful", "Bridged 1 RUPX to BRUPX");

        terminal
            .draw(|frame| render_toast(frame, frame.area(), &toast, &LIGHT))
            .unwrap();

        let content = buffer_to_string(terminal.backend().buffer());
        assert!(content.contains("Bridge Successful"));
        assert!(content.contains("Bridged 1 RUPX to BRUPX"));
    }
}
