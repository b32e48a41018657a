//! Error types for wallet and bridge operations.
//!
//! [`WalletError`] covers everything that can go wrong talking to the wallet
//! provider. [`BridgeError`] wraps it together with the failures of the
//! bridge flow itself (validation, reverted transactions, confirmation timeout).

use thiserror::Error;

// ============================================================================
// Provider Error Codes
// ============================================================================

/// Provider error code returned when the user rejects a request.
pub const USER_REJECTED_CODE: i64 = 4001;

/// Provider error code returned by `wallet_switchEthereumChain` when the
/// wallet does not know the requested chain.
pub const UNRECOGNIZED_CHAIN_CODE: i64 = 4902;

// ============================================================================
// Wallet Errors
// ============================================================================

/// Errors raised while talking to the wallet provider.
#[derive(Debug, Error)]
pub enum WalletError {
    /// The provider endpoint could not be reached.
    #[error("Wallet provider unavailable: {0}")]
    Unavailable(#[source] reqwest::Error),

    /// The provider accepted the request but gave no answer in time.
    #[error("Wallet provider timed out: {0}")]
    Timeout(#[source] reqwest::Error),

    /// The provider answered with a non-success HTTP status.
    #[error("Wallet provider returned HTTP {status}")]
    Http {
        /// HTTP status code.
        status: u16,
    },

    /// The provider answered with a JSON-RPC error object.
    #[error("Wallet provider error {code}: {message}")]
    Rpc {
        /// JSON-RPC / EIP-1193 error code.
        code: i64,
        /// Message supplied by the provider.
        message: String,
    },

    /// The provider answered with something we could not interpret.
    #[error("Parse error: {message}")]
    Parse {
        /// Description of what failed to parse.
        message: String,
    },
}

impl From<reqwest::Error> for WalletError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(err)
        } else if let Some(status) = err.status() {
            Self::Http {
                status: status.as_u16(),
            }
        } else {
            Self::Unavailable(err)
        }
    }
}

impl WalletError {
    /// Create a new parse error with the given message.
    #[must_use]
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Create a new provider error.
    #[must_use]
    pub fn rpc(code: i64, message: impl Into<String>) -> Self {
        Self::Rpc {
            code,
            message: message.into(),
        }
    }

    /// Returns the provider error code, if the provider supplied one.
    #[must_use]
    pub const fn code(&self) -> Option<i64> {
        match self {
            Self::Rpc { code, .. } => Some(*code),
            _ => None,
        }
    }

    /// Returns `true` if the wallet does not know the requested chain.
    #[must_use]
    pub const fn is_unrecognized_chain(&self) -> bool {
        matches!(self.code(), Some(UNRECOGNIZED_CHAIN_CODE))
    }

    /// Returns `true` if the user rejected the request in the wallet.
    #[must_use]
    pub const fn is_user_rejection(&self) -> bool {
        matches!(self.code(), Some(USER_REJECTED_CODE))
    }

    /// Returns `true` if no provider is listening at the configured endpoint.
    ///
    /// A provider that answers with an error status or lets the request time
    /// out is reachable and does not count.
    #[must_use]
    pub const fn is_unavailable(&self) -> bool {
        matches!(self, Self::Unavailable(_))
    }
}

// ============================================================================
// Bridge Errors
// ============================================================================

/// Errors raised by the bridge submission flow.
#[derive(Debug, Error)]
pub enum BridgeError {
    /// No wallet account is connected.
    #[error("Wallet not connected")]
    NotConnected,

    /// The amount typed by the user is not a valid positive ether value.
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// The wallet provider failed.
    #[error(transparent)]
    Wallet(#[from] WalletError),

    /// The transaction was mined but reverted.
    #[error("Transaction {hash} reverted")]
    Reverted {
        /// Hash of the reverted transaction.
        hash: String,
    },

    /// No receipt arrived within the configured timeout.
    #[error("Timed out waiting for transaction {hash}")]
    ReceiptTimeout {
        /// Hash of the pending transaction.
        hash: String,
    },
}

impl BridgeError {
    /// Create a new invalid amount error.
    #[must_use]
    pub fn invalid_amount(message: impl Into<String>) -> Self {
        Self::InvalidAmount(message.into())
    }

    /// Convert to a `color_eyre::Report` for the application boundary.
    #[must_use = "this converts the error into a Report for display"]
    pub fn into_report(self) -> color_eyre::Report {
        color_eyre::eyre::eyre!("{}", self)
    }
}

// ============================================================================
// Tests
// ============================================================================
