//! HTTP client shared by the wallet provider transport.

use reqwest::Client;
use std::time::Duration;

use crate::domain::WalletError;

// ============================================================================
// Constants
// ============================================================================

/// Default timeout for plain reads (balances, chain id, receipts) in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Timeout for requests that wait on the user in the wallet (account access,
/// chain switching, signing) in seconds.
pub const INTERACTION_TIMEOUT_SECS: u64 = 300;

// ============================================================================
// Configuration
// ============================================================================

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// Timeout for reads
    pub timeout: Duration,
    /// Timeout for requests that need user approval
    pub interaction_timeout: Duration,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            interaction_timeout: Duration::from_secs(INTERACTION_TIMEOUT_SECS),
        }
    }
}

/// How long a request may take.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    /// Answered by the node without user involvement.
    Read,
    /// Blocks until the user approves or rejects in the wallet.
    Interactive,
}

// ============================================================================
// HTTP Client
// ============================================================================

/// Base HTTP client wrapper
#[derive(Debug, Clone)]
pub struct HttpClient {
    inner: Client,
    config: HttpConfig,
}

impl HttpClient {
    /// Create a new HTTP client with custom configuration
    ///
    /// # Errors
    ///
    /// Returns [`WalletError::Unavailable`] if the underlying client cannot be
    /// built (e.g. TLS backend unavailable).
    pub fn with_config(config: HttpConfig) -> Result<Self, WalletError> {
        let inner = Client::builder()
            .pool_max_idle_per_host(4)
            .pool_idle_timeout(Duration::from_secs(30))
            .build()?;
        Ok(Self { inner, config })
    }

    /// Build a JSON POST request with the timeout matching `kind`
    pub fn post(&self, url: &str, kind: RequestKind) -> reqwest::RequestBuilder {
        let timeout = match kind {
            RequestKind::Read => self.config.timeout,
            RequestKind::Interactive => self.config.interaction_timeout,
        };
        self.inner
            .post(url)
            .header("accept", "application/json")
            .timeout(timeout)
    }
}
