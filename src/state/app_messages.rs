//! Message processing for the xLink Bridge application.
//!
//! Background tasks report back through [`AppMessage`]s; this module applies
//! them to the app state.

use alloy_primitives::Address;

use crate::client::WalletProvider;
use crate::domain::{BalanceSnapshot, BridgeError};

use super::ui_state::TOAST_TICKS;
use super::{App, AppMessage, Toast};

impl<W: WalletProvider> App<W> {
    pub(crate) fn process_messages(&mut self) {
        while let Ok(message) = self.message_rx.try_recv() {
            self.handle_message(message);
        }
    }

    fn start_session(&mut self, account: Address) {
        self.session.connect(account);
        self.balances = BalanceSnapshot::placeholder();
        self.start_polling(account);
    }

    pub(crate) fn handle_message(&mut self, message: AppMessage) {
        match message {
            AppMessage::Connected(account) => {
                tracing::info!("Connected {account}");
                self.start_session(account);
            }
            AppMessage::SessionRestored(account) => {
                if self.session_chosen {
                    tracing::info!("Ignoring restored session for {account}");
                } else {
                    tracing::info!("Restored session for {account}");
                    self.start_session(account);
                }
            }
            AppMessage::WalletNotDetected => {
                tracing::error!("Failed to connect: wallet provider unreachable");
                self.ui.show_toast(Toast::wallet_not_detected(), TOAST_TICKS);
            }
            AppMessage::ConnectFailed(error) => {
                tracing::error!("Failed to connect: {error}");
            }
            AppMessage::BalancesUpdated { account, snapshot } => {
                // Late reads from a previous session are dropped.
                if self.session.account == Some(account) {
                    self.session.network = snapshot.network;
                    self.balances = snapshot;
                }
            }
            AppMessage::BridgeCompleted(record) => {
                self.loading = false;
                let description =
                    format!("Bridged {} {} to {}", record.amount, record.from, record.to);
                tracing::info!("{description} ({})", record.hash);
                self.history.push(record);
                self.ui
                    .show_toast(Toast::success("Bridge Successful", description), TOAST_TICKS);
                self.request_refresh();
            }
            AppMessage::BridgeFailed(error) => {
                self.loading = false;
                tracing::error!("Bridge failed: {error}");
                let toast = match error {
                    BridgeError::NotConnected => Toast::wallet_not_detected(),
                    _ => Toast::bridge_failed(),
                };
                self.ui.show_toast(toast, TOAST_TICKS);
            }
        }
    }
}
