//! Command execution and input handling for the xLink Bridge application.
//!
//! This module maps keyboard input to commands and executes those commands
//! to update application state.

use crossterm::event::KeyEvent;

use super::{App, FormField, PopupState};
use crate::client::WalletProvider;
use crate::commands::{AppCommand, InputContext, KeyMapper};

impl<W: WalletProvider> App<W> {
    pub(crate) fn handle_key_event(&mut self, key_event: KeyEvent) {
        let context = self.get_input_context();
        let command = KeyMapper::map_key(key_event, &context);
        self.execute_command(command);
    }

    /// Determines the current input context based on application state.
    ///
    /// Popups take precedence over the form.
    #[must_use]
    pub fn get_input_context(&self) -> InputContext {
        match &self.ui.popup_state {
            PopupState::ConfirmBridge(_) => InputContext::ConfirmDialog,
            PopupState::Message(_) => InputContext::MessagePopup,
            PopupState::None if self.form.focus == FormField::Amount => {
                InputContext::AmountInput
            }
            PopupState::None => InputContext::Main,
        }
    }

    /// Executes an application command.
    pub(crate) fn execute_command(&mut self, command: AppCommand) {
        match command {
            // === Application Control ===
            AppCommand::Quit => {
                self.exit = true;
            }
            AppCommand::Refresh => {
                self.request_refresh();
            }
            AppCommand::ToggleTheme => {
                self.toggle_theme();
            }
            AppCommand::ToggleConnection => {
                self.toggle_connection();
            }
            AppCommand::OpenExplorer => {
                self.open_explorer();
            }

            // === Form ===
            AppCommand::NextField => {
                self.form.next_field();
            }
            AppCommand::PreviousField => {
                self.form.prev_field();
            }
            AppCommand::NextToken | AppCommand::PreviousToken => {
                // Two tokens: both directions flip the selection.
                self.form.cycle_focused_token();
            }
            AppCommand::SwapTokens => {
                self.form.swap();
            }
            AppCommand::TypeChar(c) => {
                self.form.push_char(c);
            }
            AppCommand::Backspace => {
                self.form.backspace();
            }
            AppCommand::OpenConfirm => {
                self.open_confirm();
            }

            // === Popup/Modal Control ===
            AppCommand::Confirm => {
                self.confirm_bridge();
            }
            AppCommand::Dismiss => {
                self.ui.dismiss_popup();
            }

            AppCommand::Noop => {}
        }
    }
}
