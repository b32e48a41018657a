//! User-triggered actions: wallet session, refresh, bridge submission,
//! theme toggle and explorer links.

use crate::bridge::BridgeRequest;
use crate::client::WalletProvider;
use crate::domain::{BalanceSnapshot, TokenPair};

use super::ui_state::TOAST_TICKS;
use super::{App, AppMessage, ConfirmBridge, PopupState, Toast};

impl<W: WalletProvider> App<W> {
    // ========================================================================
    // Wallet Session
    // ========================================================================

    /// Connects when disconnected, disconnects otherwise.
    pub(crate) fn toggle_connection(&mut self) {
        if self.session.is_connected() {
            self.disconnect();
        } else {
            self.connect();
        }
    }

    /// Asks the wallet for account access in the background.
    pub(crate) fn connect(&mut self) {
        self.session_chosen = true;
        let service = self.service.clone();
        let message_tx = self.message_tx.clone();

        tokio::spawn(async move {
            let result = service.request_account().await;
            let _ = message_tx.send(AppMessage::from_connect_result(result));
        });
    }

    /// Forgets the session locally. Wallet permissions stay as they are.
    pub(crate) fn disconnect(&mut self) {
        self.session_chosen = true;
        self.stop_polling();
        self.session.clear();
        self.balances = BalanceSnapshot::placeholder();
        tracing::info!("Disconnected");
    }

    /// Asks the poller for an immediate network and balance read.
    pub(crate) fn request_refresh(&self) {
        if self.is_polling() {
            self.refresh_tx.send_modify(|generation| {
                *generation = generation.wrapping_add(1);
            });
        }
    }

    // ========================================================================
    // Bridge
    // ========================================================================

    /// Opens the confirmation dialog for the current form.
    pub(crate) fn open_confirm(&mut self) {
        if self.loading {
            return;
        }
        let pair = self.form.pair;
        self.ui
            .show_confirm(ConfirmBridge::new(self.form.amount.trim(), pair.from, pair.to));
    }

    /// Submits the confirmed bridge in the background.
    pub(crate) fn confirm_bridge(&mut self) {
        let PopupState::ConfirmBridge(confirm) = &self.ui.popup_state else {
            return;
        };
        let confirm = confirm.clone();
        self.ui.dismiss_popup();

        let request = BridgeRequest {
            account: self.session.account,
            pair: TokenPair::new(confirm.from, confirm.to),
            amount: confirm.amount,
            current_network: self.session.network,
        };

        self.loading = true;
        let service = self.service.clone();
        let message_tx = self.message_tx.clone();

        tokio::spawn(async move {
            let message = match service.submit(&request).await {
                Ok(record) => AppMessage::BridgeCompleted(record),
                Err(e) => AppMessage::BridgeFailed(e),
            };
            let _ = message_tx.send(message);
        });
    }

    // ========================================================================
    // Theme
    // ========================================================================

    /// Flips light/dark and saves the choice.
    pub(crate) fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        self.config.theme = self.theme;

        if let Some(path) = &self.config_path
            && let Err(e) = self.config.save_to(path)
        {
            tracing::warn!("Failed to save config: {e}");
        }
    }

    // ========================================================================
    // Explorer
    // ========================================================================

    /// Explorer URL of the most recent bridge transaction.
    #[must_use]
    pub fn latest_transaction_url(&self) -> Option<String> {
        self.history
            .latest()
            .map(|record| record.from.source_network().transaction_url(&record.hash))
    }

    /// Opens the most recent bridge transaction in the browser.
    pub(crate) fn open_explorer(&mut self) {
        let Some(url) = self.latest_transaction_url() else {
            self.ui.show_toast(
                Toast::info("No transactions", "Bridge some tokens first."),
                TOAST_TICKS,
            );
            return;
        };

        if let Err(e) = open::that(&url) {
            tracing::warn!("Failed to open {url}: {e}");
            self.ui.show_message(format!("Open in browser failed.\n\n{url}"));
        }
    }
}
