//! Domain types for the xLink bridge.
//!
//! # Module Organization
//!
//! - [`amount`] - Ether amount parsing and formatting
//! - [`balance`] - Balance snapshot read by the poller
//! - [`contracts`] - Bridge contract interfaces and call encoding
//! - [`error`] - Wallet and bridge error types
//! - [`history`] - In-memory transaction history
//! - [`network`] - Supported chains and chain registration parameters
//! - [`token`] - RUPX / BRUPX and the form's token pair

// ============================================================================
// Module Declarations
// ============================================================================

pub mod amount;
pub mod balance;
pub mod contracts;
pub mod error;
pub mod history;
pub mod network;
pub mod token;

// ============================================================================
// Re-exports
// ============================================================================

pub use amount::{ZERO_BALANCE, display_balance, format_ether, parse_ether};
pub use balance::BalanceSnapshot;
pub use contracts::{BridgeContracts, ContractCall};
pub use error::{BridgeError, WalletError};
pub use history::{MAX_HISTORY, TransactionHistory, TransactionRecord};
pub use network::{BridgeNetwork, ChainParams, NetworkStatus};
pub use token::{Token, TokenPair};
