//! Key bindings for the bridge TUI.
//!
//! Keys are first classified by [`InputContext`] (form, amount field, dialog,
//! message) and then mapped to an [`AppCommand`]. The mapping is pure, so
//! bindings are tested without an `App`.
//!
//! ```ignore
//! let command = KeyMapper::map_key(key_event, &app.get_input_context());
//! app.execute_command(command);
//! ```

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

// ============================================================================
// Input Context
// ============================================================================

/// Represents the current input context for key mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputContext {
    /// Bridge form with a token selector focused.
    Main,
    /// Bridge form with the amount field focused.
    AmountInput,
    /// Bridge confirmation dialog is open.
    ConfirmDialog,
    /// Viewing a message/notification popup.
    MessagePopup,
}

// ============================================================================
// App Commands
// ============================================================================

/// All possible commands the application can execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppCommand {
    // === Application Control ===
    /// Exit the application.
    Quit,
    /// Re-read network and balances now.
    Refresh,
    /// Flip between light and dark mode.
    ToggleTheme,
    /// Connect the wallet, or disconnect when connected.
    ToggleConnection,
    /// Open the latest transaction in the block explorer.
    OpenExplorer,

    // === Form ===
    /// Move focus to the next form field.
    NextField,
    /// Move focus to the previous form field.
    PreviousField,
    /// Select the next token in the focused selector.
    NextToken,
    /// Select the previous token in the focused selector.
    PreviousToken,
    /// Swap the from and to tokens.
    SwapTokens,
    /// Type a character in the amount field.
    TypeChar(char),
    /// Delete the last character of the amount field.
    Backspace,
    /// Open the confirmation dialog for the current form.
    OpenConfirm,

    // === Popup/Modal Control ===
    /// Confirm the bridge in the confirmation dialog.
    Confirm,
    /// Dismiss/close the current popup.
    Dismiss,

    // === No Operation ===
    /// No action to perform (unhandled key).
    Noop,
}

// ============================================================================
// Key Mapper
// ============================================================================

/// Maps key events to [`AppCommand`]s based on the [`InputContext`].
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyMapper;

impl KeyMapper {
    /// Maps a key event to a command based on the current input context.
    #[must_use]
    pub fn map_key(key: KeyEvent, context: &InputContext) -> AppCommand {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return AppCommand::Quit;
        }

        match context {
            InputContext::Main => Self::map_main_keys(key),
            InputContext::AmountInput => Self::map_amount_input_keys(key),
            InputContext::ConfirmDialog => Self::map_confirm_dialog_keys(key),
            InputContext::MessagePopup => Self::map_message_popup_keys(key),
        }
    }

    fn map_main_keys(key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Char('q') => AppCommand::Quit,
            KeyCode::Char('r') => AppCommand::Refresh,
            KeyCode::Char('t') => AppCommand::ToggleTheme,
            KeyCode::Char('c') => AppCommand::ToggleConnection,
            KeyCode::Char('o') => AppCommand::OpenExplorer,
            KeyCode::Char('s') => AppCommand::SwapTokens,
            KeyCode::Tab | KeyCode::Down => AppCommand::NextField,
            KeyCode::BackTab | KeyCode::Up => AppCommand::PreviousField,
            KeyCode::Right | KeyCode::Char(' ') => AppCommand::NextToken,
            KeyCode::Left => AppCommand::PreviousToken,
            KeyCode::Enter => AppCommand::OpenConfirm,
            _ => AppCommand::Noop,
        }
    }

    fn map_amount_input_keys(key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Char(c) if c.is_ascii_digit() || c == '.' => AppCommand::TypeChar(c),
            KeyCode::Backspace => AppCommand::Backspace,
            // Selector keys have no meaning inside the amount field.
            KeyCode::Left | KeyCode::Right | KeyCode::Char(' ') => AppCommand::Noop,
            _ => Self::map_main_keys(key),
        }
    }

    fn map_confirm_dialog_keys(key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Char('y') | KeyCode::Enter => AppCommand::Confirm,
            KeyCode::Char('n') | KeyCode::Esc => AppCommand::Dismiss,
            KeyCode::Char('q') => AppCommand::Quit,
            _ => AppCommand::Noop,
        }
    }

    fn map_message_popup_keys(key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char(' ') => AppCommand::Dismiss,
            KeyCode::Char('q') => AppCommand::Quit,
            _ => AppCommand::Noop,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
