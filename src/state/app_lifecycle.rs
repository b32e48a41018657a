//! Application lifecycle management.
//!
//! This module contains the core lifecycle methods for the `App`:
//! - `new()` - Creates a new application instance
//! - `run()` - Main event loop
//! - Balance poller start/stop
//! - Startup connection check

use std::path::PathBuf;
use std::time::{Duration, Instant};

use alloy_primitives::Address;
use color_eyre::Result;
use crossterm::event::{self, Event, KeyEventKind};
use tokio::sync::{mpsc, watch};
use tokio::time::interval;

use crate::bridge::BridgeService;
use crate::client::{RpcWallet, WalletProvider};
use crate::domain::{BalanceSnapshot, TransactionHistory};
use crate::tui::Tui;
use crate::ui;

use super::{App, AppConfig, AppMessage, BridgeForm, SessionState, UiState};

/// Interval of the UI loop.
const TICK_RATE: Duration = Duration::from_millis(100);

// ============================================================================
// Lifecycle Methods
// ============================================================================

impl App<RpcWallet> {
    /// Creates an App talking to the configured JSON-RPC endpoint.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: AppConfig, config_path: Option<PathBuf>) -> Result<Self> {
        let wallet = RpcWallet::new(config.rpc_url.clone())?;
        Ok(Self::with_wallet(config, config_path, wallet))
    }
}

impl<W: WalletProvider> App<W> {
    /// Creates an App around any wallet provider.
    #[must_use]
    pub fn with_wallet(config: AppConfig, config_path: Option<PathBuf>, wallet: W) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        let (refresh_tx, _refresh_rx) = watch::channel(0);

        let service = BridgeService::new(wallet, config.contracts)
            .with_receipt_timing(crate::bridge::RECEIPT_POLL_INTERVAL, config.receipt_timeout());

        Self {
            session: SessionState::new(),
            balances: BalanceSnapshot::placeholder(),
            form: BridgeForm::new(),
            history: TransactionHistory::new(),
            ui: UiState::new(),
            theme: config.theme,
            loading: false,
            exit: false,
            session_chosen: false,
            config,
            config_path,
            message_tx,
            message_rx,
            refresh_tx,
            poller: None,
            service,
        }
    }

    /// Runs the main application loop.
    ///
    /// # Errors
    /// Returns an error if the terminal operations fail.
    pub async fn run(&mut self, terminal: &mut Tui) -> Result<()> {
        self.check_connection();

        let mut last_tick = Instant::now();

        while !self.exit {
            self.process_messages();

            let timeout = TICK_RATE
                .checked_sub(last_tick.elapsed())
                .unwrap_or(Duration::from_secs(0));

            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key)
                        if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) =>
                    {
                        self.handle_key_event(key);
                    }
                    Event::Resize(_, _) => {
                        terminal.draw(|frame| ui::render(self, frame))?;
                    }
                    _ => {}
                }
            }

            if last_tick.elapsed() >= TICK_RATE {
                self.ui.tick_toast();
                terminal.draw(|frame| ui::render(self, frame))?;
                last_tick = Instant::now();
            }
        }

        self.stop_polling();
        Ok(())
    }

    // ========================================================================
    // Startup
    // ========================================================================

    /// Restores a session if the wallet already authorized an account.
    pub(crate) fn check_connection(&self) {
        let service = self.service.clone();
        let message_tx = self.message_tx.clone();

        tokio::spawn(async move {
            match service.authorized_account().await {
                Ok(Some(account)) => {
                    let _ = message_tx.send(AppMessage::SessionRestored(account));
                }
                Ok(None) => tracing::info!("No authorized account"),
                Err(e) => tracing::error!("Failed to check connection: {e}"),
            }
        });
    }

    // ========================================================================
    // Balance Poller
    // ========================================================================

    /// (Re)starts the poller for `account`. Its first pass runs immediately.
    pub(crate) fn start_polling(&mut self, account: Address) {
        self.stop_polling();

        let service = self.service.clone();
        let message_tx = self.message_tx.clone();
        let refresh_rx = self.refresh_tx.subscribe();
        let poll_interval = self.config.poll_interval();
        let check_interval = self.config.network_check_interval();

        self.poller = Some(tokio::spawn(async move {
            Self::polling_task(
                service,
                account,
                message_tx,
                refresh_rx,
                poll_interval,
                check_interval,
            )
            .await;
        }));
    }

    pub(crate) fn stop_polling(&mut self) {
        if let Some(handle) = self.poller.take() {
            handle.abort();
        }
    }

    async fn polling_task(
        service: BridgeService<W>,
        account: Address,
        message_tx: mpsc::UnboundedSender<AppMessage>,
        mut refresh_rx: watch::Receiver<u64>,
        poll_interval: Duration,
        check_interval: Duration,
    ) {
        let mut balance_interval = interval(poll_interval);
        let mut network_check_interval = interval(check_interval);
        let mut last_chain_id: Option<u64> = None;

        loop {
            let refresh = tokio::select! {
                _ = balance_interval.tick() => true,

                changed = refresh_rx.changed() => {
                    if changed.is_err() {
                        break;
                    }
                    true
                }

                _ = network_check_interval.tick() => {
                    match service.wallet().chain_id().await {
                        Ok(chain_id) => {
                            let switched = last_chain_id.is_some_and(|last| last != chain_id);
                            last_chain_id = Some(chain_id);
                            if switched {
                                tracing::info!("Network changed to chain {chain_id}");
                            }
                            switched
                        }
                        Err(e) => {
                            tracing::debug!("Network check failed: {e}");
                            false
                        }
                    }
                }
            };

            if refresh {
                let snapshot = service.fetch_balances(account).await;
                if let Some(chain_id) = snapshot.network.chain_id() {
                    last_chain_id = Some(chain_id);
                }
                if message_tx
                    .send(AppMessage::BalancesUpdated { account, snapshot })
                    .is_err()
                {
                    break;
                }
            }
        }
    }
}
