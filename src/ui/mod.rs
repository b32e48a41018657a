//! UI rendering module for the xLink Bridge TUI.
//!
//! This module provides the main rendering entry point and orchestrates
//! rendering of the page cards, popups, and overlays.
//!
//! # Module Structure
//!
//! - `panels` - Page cards (bridge form, balances, history)
//! - `popups` - Modal dialogs (bridge confirmation, messages)
//! - `components` - Reusable UI components (toast notifications)
//! - `layout` - Layout calculations and structs
//! - `header` - Header bar rendering
//! - `footer` - Footer bar rendering
//! - `helpers` - Shared helper functions for creating styled blocks

pub mod components;
pub mod footer;
pub mod header;
pub mod helpers;
pub mod layout;
pub mod panels;
pub mod popups;

use ratatui::{Frame, layout::Rect, widgets::Block};

use crate::client::WalletProvider;
use crate::state::{App, PopupState};
use crate::theme::Palette;

// ============================================================================
// Main Render Entry Point
// ============================================================================

/// Main render function that orchestrates all UI rendering.
///
/// Draws, in order: the page background, header, form, balances, history
/// (when non-empty) and footer, then the active popup, then the toast on
/// top of everything.
pub fn render<W: WalletProvider>(app: &App<W>, frame: &mut Frame) {
    let size = frame.area();
    let palette = app.theme.palette();

    let background = Block::default().style(palette.text_style().bg(palette.background));
    frame.render_widget(background, size);

    let areas = layout::calculate_app_layout(size, app.history.len());

    header::render(frame, areas.header, app);
    panels::render_form(frame, areas.form, app);
    panels::render_balances(frame, areas.balances, app);
    if let Some(history_area) = areas.history {
        panels::render_history(frame, history_area, app);
    }
    footer::render(frame, areas.footer, app);

    render_popups(app, frame, size, &palette);

    if let Some(toast) = app.ui.current_toast() {
        components::render_toast(frame, size, toast, &palette);
    }
}

/// Renders the active popup, if any.
fn render_popups<W: WalletProvider>(
    app: &App<W>,
    frame: &mut Frame,
    area: Rect,
    palette: &Palette,
) {
    match &app.ui.popup_state {
        PopupState::ConfirmBridge(confirm) => {
            popups::render_confirm_popup(frame, area, confirm, palette);
        }
        PopupState::Message(message) => {
            popups::render_message_popup(frame, area, message, palette);
        }
        PopupState::None => {}
    }
}

// ============================================================================
// Tests
// ============================================================================
