//! Bridge operations on top of a [`WalletProvider`].
//!
//! [`BridgeService`] owns the three behaviours the UI needs:
//!
//! - session: reading or requesting the authorized account
//! - polling: detecting the network and reading both balances
//! - submission: switching network, sending the lock/burn transaction and
//!   waiting for its receipt
//!
//! The service never touches UI state; results flow back to the app as values.

use std::time::Duration;

use alloy_primitives::{Address, B256, hex};

use crate::client::{TransactionReceipt, TransactionRequest, WalletProvider};
use crate::domain::contracts::decode_uint256;
use crate::domain::{
    BalanceSnapshot, BridgeContracts, BridgeError, BridgeNetwork, NetworkStatus, TokenPair,
    TransactionRecord, WalletError, format_ether, parse_ether,
};

// ============================================================================
// Constants
// ============================================================================

/// Interval between receipt polls while waiting for inclusion.
pub const RECEIPT_POLL_INTERVAL: Duration = Duration::from_secs(2);

/// Default bound on the wait for a receipt.
pub const DEFAULT_RECEIPT_TIMEOUT: Duration = Duration::from_secs(300);

// ============================================================================
// Bridge Request
// ============================================================================

/// Everything the submission flow needs from the form and session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BridgeRequest {
    /// Connected account, if any.
    pub account: Option<Address>,
    /// Source and destination token.
    pub pair: TokenPair,
    /// Amount as typed.
    pub amount: String,
    /// Network the poller last detected.
    pub current_network: NetworkStatus,
}

// ============================================================================
// Bridge Service
// ============================================================================

/// Wallet-facing operations of the bridge UI.
#[derive(Debug, Clone)]
pub struct BridgeService<W> {
    wallet: W,
    contracts: BridgeContracts,
    receipt_poll_interval: Duration,
    receipt_timeout: Duration,
}

impl<W: WalletProvider> BridgeService<W> {
    #[must_use]
    pub fn new(wallet: W, contracts: BridgeContracts) -> Self {
        Self {
            wallet,
            contracts,
            receipt_poll_interval: RECEIPT_POLL_INTERVAL,
            receipt_timeout: DEFAULT_RECEIPT_TIMEOUT,
        }
    }

    /// Overrides receipt polling cadence and bound.
    #[must_use]
    pub fn with_receipt_timing(mut self, poll_interval: Duration, timeout: Duration) -> Self {
        self.receipt_poll_interval = poll_interval;
        self.receipt_timeout = timeout;
        self
    }

    #[must_use]
    pub fn wallet(&self) -> &W {
        &self.wallet
    }

    // ========================================================================
    // Session
    // ========================================================================

    /// First account the wallet has already authorized, without prompting.
    ///
    /// # Errors
    ///
    /// Propagates provider failures.
    pub async fn authorized_account(&self) -> Result<Option<Address>, WalletError> {
        Ok(self.wallet.accounts().await?.first().copied())
    }

    /// Prompts the wallet for account access and returns the first account.
    ///
    /// # Errors
    ///
    /// Propagates provider failures, including user rejection.
    pub async fn request_account(&self) -> Result<Option<Address>, WalletError> {
        Ok(self.wallet.request_accounts().await?.first().copied())
    }

    // ========================================================================
    // Polling
    // ========================================================================

    /// Reads the chain id and classifies it.
    ///
    /// # Errors
    ///
    /// Propagates provider failures.
    pub async fn network_status(&self) -> Result<NetworkStatus, WalletError> {
        Ok(NetworkStatus::from_chain_id(self.wallet.chain_id().await?))
    }

    /// Reads network and balances for `account`.
    ///
    /// On BSC only the wrapped balance exists; on Rupaya the native balance
    /// and the amount locked in the bridge are read. Unknown chains get zeros.
    ///
    /// # Errors
    ///
    /// Propagates provider failures.
    pub async fn try_fetch_balances(
        &self,
        account: Address,
    ) -> Result<BalanceSnapshot, WalletError> {
        let network = self.network_status().await?;
        let mut snapshot = BalanceSnapshot::zero(network);

        match network.network() {
            Some(BridgeNetwork::BscTestnet) => {
                let data = self.wallet.call(&self.contracts.balance_of(account)).await?;
                snapshot.brupx = format_ether(decode_uint256(&data)?);
            }
            Some(BridgeNetwork::RupayaTestnet) => {
                snapshot.rupx = format_ether(self.wallet.balance(account).await?);
                let data = self
                    .wallet
                    .call(&self.contracts.locked_tokens(account))
                    .await?;
                snapshot.brupx = format_ether(decode_uint256(&data)?);
            }
            None => {
                tracing::info!("Network is unknown. Cannot fetch balances.");
            }
        }

        tracing::info!(
            "Network: {}, RUPX Balance: {}, BRUPX Balance: {}",
            snapshot.network.label(),
            snapshot.rupx,
            snapshot.brupx
        );
        Ok(snapshot)
    }

    /// Like [`Self::try_fetch_balances`], but errors become the placeholder.
    pub async fn fetch_balances(&self, account: Address) -> BalanceSnapshot {
        match self.try_fetch_balances(account).await {
            Ok(snapshot) => snapshot,
            Err(e) => {
                tracing::error!("Error fetching balances and network: {e}");
                BalanceSnapshot::placeholder()
            }
        }
    }

    // ========================================================================
    // Submission
    // ========================================================================

    /// Asks the wallet to switch to `target`, registering the chain first if
    /// the wallet does not know it.
    ///
    /// # Errors
    ///
    /// Returns the switch error, or the registration error after a 4902.
    pub async fn switch_network(&self, target: BridgeNetwork) -> Result<(), WalletError> {
        match self.wallet.switch_chain(&target.chain_id_hex()).await {
            Ok(()) => Ok(()),
            Err(e) if e.is_unrecognized_chain() => {
                tracing::info!("Wallet does not know {target}, registering it");
                self.wallet.add_chain(&target.chain_params()).await
            }
            Err(e) => Err(e),
        }
    }

    /// Runs the whole bridge flow and returns the history record on success.
    ///
    /// Network switch failures are logged and the flow continues; the wallet
    /// rejects the transaction itself if it is still on the wrong chain.
    ///
    /// # Errors
    ///
    /// - [`BridgeError::NotConnected`] before any wallet request when no account is set
    /// - [`BridgeError::InvalidAmount`] for unparseable or zero amounts
    /// - [`BridgeError::Wallet`] for provider failures while sending or polling
    /// - [`BridgeError::Reverted`] / [`BridgeError::ReceiptTimeout`] after sending
    pub async fn submit(&self, request: &BridgeRequest) -> Result<TransactionRecord, BridgeError> {
        let account = request.account.ok_or(BridgeError::NotConnected)?;
        let amount = parse_ether(&request.amount)?;

        let target = request.pair.from.source_network();
        if request.current_network.network() != Some(target) {
            if let Err(e) = self.switch_network(target).await {
                tracing::warn!("Failed to switch network to {target}: {e}");
            }
        }

        let call = self
            .contracts
            .bridge_call(request.pair.from, account, amount);
        let hash = self
            .wallet
            .send_transaction(TransactionRequest::new(account, &call))
            .await?;
        tracing::info!("Submitted bridge transaction {hash}");

        let receipt = self.wait_for_receipt(hash).await?;
        let hash = hex::encode_prefixed(receipt.transaction_hash);
        if !receipt.succeeded() {
            return Err(BridgeError::Reverted { hash });
        }

        Ok(TransactionRecord::new(
            request.pair.from,
            request.pair.to,
            request.amount.trim(),
            hash,
        ))
    }

    /// Polls for the receipt of `hash` until it appears or the timeout hits.
    async fn wait_for_receipt(&self, hash: B256) -> Result<TransactionReceipt, BridgeError> {
        let poll = async {
            loop {
                if let Some(receipt) = self.wallet.transaction_receipt(hash).await? {
                    return Ok::<_, WalletError>(receipt);
                }
                tokio::time::sleep(self.receipt_poll_interval).await;
            }
        };

        match tokio::time::timeout(self.receipt_timeout, poll).await {
            Ok(receipt) => Ok(receipt?),
            Err(_) => Err(BridgeError::ReceiptTimeout {
                hash: hex::encode_prefixed(hash),
            }),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
