//! Layout calculations for the xLink Bridge TUI
//!
//! This module provides layout structs and helper functions for
//! calculating UI element positions and sizes.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

// ============================================================================
// Constants
// ============================================================================

/// Height of the header area in terminal rows
pub const HEADER_HEIGHT: u16 = 3;

/// Height of the bridge form card
pub const FORM_HEIGHT: u16 = 11;

/// Height of the balances card
pub const BALANCES_HEIGHT: u16 = 5;

/// Height of the footer area in terminal rows
pub const FOOTER_HEIGHT: u16 = 1;

/// Widest the content column grows, like a centered page container.
pub const MAX_CONTENT_WIDTH: u16 = 80;

/// Borders, title and header row of the history table.
const HISTORY_CHROME_HEIGHT: u16 = 4;

// ============================================================================
// Layout Structs
// ============================================================================

/// Main application layout areas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppLayout {
    /// Title, wallet status, theme indicator
    pub header: Rect,
    /// Bridge form card
    pub form: Rect,
    /// Balances card
    pub balances: Rect,
    /// Recent transactions, only when there are any
    pub history: Option<Rect>,
    /// Key hints
    pub footer: Rect,
}

// ============================================================================
// Layout Calculations
// ============================================================================

/// Splits the screen into the page sections.
///
/// `history_rows` is the number of history entries; zero hides the table.
#[must_use]
pub fn calculate_app_layout(area: Rect, history_rows: usize) -> AppLayout {
    let column = centered_column(area, MAX_CONTENT_WIDTH);
    let history_height = if history_rows == 0 {
        0
    } else {
        HISTORY_CHROME_HEIGHT + u16::try_from(history_rows).unwrap_or(u16::MAX)
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Length(FORM_HEIGHT),
            Constraint::Length(BALANCES_HEIGHT),
            Constraint::Length(history_height),
            Constraint::Min(0),
            Constraint::Length(FOOTER_HEIGHT),
        ])
        .split(column);

    AppLayout {
        header: chunks[0],
        form: chunks[1],
        balances: chunks[2],
        history: (history_rows > 0).then_some(chunks[3]),
        footer: chunks[5],
    }
}

/// Horizontally centered column at most `max_width` wide.
#[must_use]
pub fn centered_column(area: Rect, max_width: u16) -> Rect {
    let width = area.width.min(max_width);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y,
        width,
        area.height,
    )
}

/// Centered rectangle of the given size, shrunk to leave a margin.
#[must_use]
pub fn centered_popup_area(parent: Rect, width: u16, height: u16) -> Rect {
    let popup_width = width.min(parent.width.saturating_sub(4));
    let popup_height = height.min(parent.height.saturating_sub(4));

    let popup_x = parent.x + (parent.width.saturating_sub(popup_width)) / 2;
    let popup_y = parent.y + (parent.height.saturating_sub(popup_height)) / 2;

    Rect::new(popup_x, popup_y, popup_width, popup_height)
}

// ============================================================================
// Tests
// ============================================================================
