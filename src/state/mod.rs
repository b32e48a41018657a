//! State management module for the xLink Bridge TUI application.
//!
//! This module provides a decomposed state architecture, separating concerns into:
//!
//! - [`SessionState`] - connected account and detected network
//! - [`BridgeForm`] - token selectors, amount input, field focus
//! - [`UiState`] - popups and toasts
//! - [`AppConfig`] - persistent configuration with load/save capabilities
//!
//! Balances and the transaction history are plain domain values held by [`App`].
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                           App                              │
//! ├──────────────┬──────────────┬──────────────┬───────────────┤
//! │ SessionState │  BridgeForm  │   UiState    │ BridgeService │
//! │  - account   │  - pair      │  - popup     │  - wallet     │
//! │  - network   │  - amount    │  - toast     │  - contracts  │
//! └──────────────┴──────────────┴──────────────┴───────────────┘
//!          ▲ AppMessage (mpsc)            │ spawned tasks
//!          └──────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```ignore
//! use crate::state::{App, AppConfig};
//!
//! let app = App::new(AppConfig::load())?;
//! ```

use std::path::PathBuf;

use alloy_primitives::Address;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

use crate::bridge::BridgeService;
use crate::client::{RpcWallet, WalletProvider};
use crate::domain::{
    BalanceSnapshot, BridgeError, TransactionHistory, TransactionRecord, WalletError,
};
use crate::theme::ThemeMode;

// ============================================================================
// Module Declarations
// ============================================================================

mod app_lifecycle;

pub mod config;
pub mod form;
pub mod session;
pub mod ui_state;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::AppConfig;
pub use form::{BridgeForm, FormField};
pub use session::SessionState;
pub use ui_state::{ConfirmBridge, PopupState, Toast, ToastKind, UiState};

// ============================================================================
// App Message Types
// ============================================================================

/// Messages sent from background tasks to the main app loop.
#[derive(Debug)]
pub enum AppMessage {
    /// The user granted access to an account.
    Connected(Address),
    /// The startup check found an already authorized account.
    SessionRestored(Address),
    /// The wallet endpoint could not be reached while connecting.
    WalletNotDetected,
    /// Connecting failed for another reason (rejection, empty account list).
    ConnectFailed(String),
    /// The poller read network and balances for `account`.
    BalancesUpdated {
        account: Address,
        snapshot: BalanceSnapshot,
    },
    /// A bridge transaction was included and succeeded.
    BridgeCompleted(TransactionRecord),
    /// The bridge flow failed at some step.
    BridgeFailed(BridgeError),
}

impl AppMessage {
    /// Classifies the outcome of a connect request.
    #[must_use]
    pub fn from_connect_result(result: Result<Option<Address>, WalletError>) -> Self {
        match result {
            Ok(Some(account)) => Self::Connected(account),
            Ok(None) => Self::ConnectFailed("wallet returned no accounts".to_string()),
            Err(e) if e.is_unavailable() => Self::WalletNotDetected,
            Err(e) => Self::ConnectFailed(e.to_string()),
        }
    }
}

// ============================================================================
// Main App State
// ============================================================================

/// The main application state container.
///
/// Generic over the wallet so tests can drive it with an in-memory provider.
#[derive(Debug)]
pub struct App<W: WalletProvider = RpcWallet> {
    // ========================================================================
    // Sub-states (decomposed concerns)
    // ========================================================================
    /// Connected account and detected network.
    pub session: SessionState,

    /// Last balance read, or the placeholder.
    pub balances: BalanceSnapshot,

    /// Bridge form inputs.
    pub form: BridgeForm,

    /// Successful bridges of this run, most recent first.
    pub history: TransactionHistory,

    /// UI state - popups, toasts.
    pub ui: UiState,

    // ========================================================================
    // App-level state
    // ========================================================================
    /// Current color mode.
    pub theme: ThemeMode,

    /// Whether a bridge submission is in flight.
    pub loading: bool,

    /// Whether the application should exit.
    pub exit: bool,

    /// Set once the user connects or disconnects; later startup restores
    /// are ignored.
    pub(crate) session_chosen: bool,

    /// Loaded configuration.
    pub(crate) config: AppConfig,

    /// Where config changes are saved; `None` keeps them in memory.
    pub(crate) config_path: Option<PathBuf>,

    // ========================================================================
    // Async Communication Channels
    // ========================================================================
    // Channel sends use `let _ = tx.send(...)`: receivers may be dropped
    // during shutdown.
    /// Sender for app messages (cloned for background tasks).
    pub(crate) message_tx: mpsc::UnboundedSender<AppMessage>,

    /// Receiver for app messages.
    pub(crate) message_rx: mpsc::UnboundedReceiver<AppMessage>,

    /// Bumped to ask the poller for an immediate refresh.
    pub(crate) refresh_tx: watch::Sender<u64>,

    /// Balance poller, running while connected.
    pub(crate) poller: Option<JoinHandle<()>>,

    // ========================================================================
    // Wallet
    // ========================================================================
    pub(crate) service: BridgeService<W>,
}

impl<W: WalletProvider> App<W> {
    /// Returns `true` while the balance poller task is alive.
    #[must_use]
    pub fn is_polling(&self) -> bool {
        self.poller.as_ref().is_some_and(|handle| !handle.is_finished())
    }
}

impl<W: WalletProvider> Drop for App<W> {
    fn drop(&mut self) {
        self.stop_polling();
    }
}

// ============================================================================
// Implementation Modules
// ============================================================================

// Message processing
mod app_messages;

// Command execution, input handling
mod app_commands;

// Connect, refresh, bridge, theme and browser actions
mod app_actions;

// ============================================================================
// Tests
// ============================================================================
