//! Clients for the wallet provider.
//!
//! - [`http`] - reqwest wrapper with read and interactive timeouts
//! - [`rpc`] - JSON-RPC 2.0 request/response handling
//! - [`wallet`] - the [`WalletProvider`] trait and its JSON-RPC implementation
//!
//! # Example
//!
//! ```ignore
//! use crate::client::{RpcWallet, WalletProvider};
//!
//! let wallet = RpcWallet::new("http://127.0.0.1:1248")?;
//! let chain_id = wallet.chain_id().await?;
//! ```

pub mod http;
pub mod rpc;
pub mod wallet;

// ============================================================================
// Re-exports
// ============================================================================

pub use wallet::{RpcWallet, TransactionReceipt, TransactionRequest, WalletProvider};
