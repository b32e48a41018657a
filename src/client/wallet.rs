//! Wallet provider abstraction.
//!
//! [`WalletProvider`] mirrors the request methods of the widely adopted
//! injected-provider convention. [`RpcWallet`] speaks them as JSON-RPC over
//! HTTP to a wallet that exposes a local endpoint (or a development node with
//! unlocked accounts).

use std::future::Future;

use alloy_primitives::{Address, B256, Bytes, U64, U256};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::http::{HttpClient, HttpConfig, RequestKind};
use super::rpc::RpcClient;
use crate::domain::{ChainParams, ContractCall, WalletError};

// ============================================================================
// Wire Types
// ============================================================================

/// Transaction object of `eth_sendTransaction`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransactionRequest {
    pub from: Address,
    pub to: Address,
    pub value: U256,
    pub data: Bytes,
}

impl TransactionRequest {
    #[must_use]
    pub fn new(from: Address, call: &ContractCall) -> Self {
        Self {
            from,
            to: call.to,
            value: call.value,
            data: call.data.clone(),
        }
    }
}

/// The parts of a transaction receipt the bridge looks at.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionReceipt {
    pub transaction_hash: B256,
    /// `0x1` on success, `0x0` when reverted. Missing on pre-Byzantium chains.
    #[serde(default)]
    pub status: Option<U64>,
}

impl TransactionReceipt {
    /// Returns `true` unless the receipt explicitly reports a revert.
    #[must_use]
    pub fn succeeded(&self) -> bool {
        self.status.is_none_or(|status| !status.is_zero())
    }
}

// ============================================================================
// Provider Trait
// ============================================================================

/// Request surface of a wallet provider.
pub trait WalletProvider: Clone + Send + Sync + 'static {
    /// `eth_accounts`: accounts already authorized, without prompting.
    fn accounts(&self) -> impl Future<Output = Result<Vec<Address>, WalletError>> + Send;

    /// `eth_requestAccounts`: prompts the user for account access.
    fn request_accounts(&self) -> impl Future<Output = Result<Vec<Address>, WalletError>> + Send;

    /// `eth_chainId`.
    fn chain_id(&self) -> impl Future<Output = Result<u64, WalletError>> + Send;

    /// `wallet_switchEthereumChain`.
    fn switch_chain(
        &self,
        chain_id_hex: &str,
    ) -> impl Future<Output = Result<(), WalletError>> + Send;

    /// `wallet_addEthereumChain`.
    fn add_chain(&self, params: &ChainParams)
    -> impl Future<Output = Result<(), WalletError>> + Send;

    /// `eth_getBalance` at the latest block.
    fn balance(&self, address: Address) -> impl Future<Output = Result<U256, WalletError>> + Send;

    /// `eth_call` at the latest block.
    fn call(&self, call: &ContractCall) -> impl Future<Output = Result<Bytes, WalletError>> + Send;

    /// `eth_sendTransaction`, returning the transaction hash.
    fn send_transaction(
        &self,
        request: TransactionRequest,
    ) -> impl Future<Output = Result<B256, WalletError>> + Send;

    /// `eth_getTransactionReceipt`; `None` while pending.
    fn transaction_receipt(
        &self,
        hash: B256,
    ) -> impl Future<Output = Result<Option<TransactionReceipt>, WalletError>> + Send;
}

// ============================================================================
// JSON-RPC Wallet
// ============================================================================

/// Wallet provider reached over HTTP JSON-RPC.
#[derive(Debug, Clone)]
pub struct RpcWallet {
    rpc: RpcClient,
}

impl RpcWallet {
    /// Creates a provider for the given endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(url: impl Into<String>) -> Result<Self, WalletError> {
        let http = HttpClient::with_config(HttpConfig::default())?;
        Ok(Self {
            rpc: RpcClient::new(http, url),
        })
    }
}

impl WalletProvider for RpcWallet {
    async fn accounts(&self) -> Result<Vec<Address>, WalletError> {
        self.rpc
            .request("eth_accounts", json!([]), RequestKind::Read)
            .await
    }

    async fn request_accounts(&self) -> Result<Vec<Address>, WalletError> {
        self.rpc
            .request("eth_requestAccounts", json!([]), RequestKind::Interactive)
            .await
    }

    async fn chain_id(&self) -> Result<u64, WalletError> {
        let chain_id: U64 = self
            .rpc
            .request("eth_chainId", json!([]), RequestKind::Read)
            .await?;
        Ok(chain_id.to::<u64>())
    }

    async fn switch_chain(&self, chain_id_hex: &str) -> Result<(), WalletError> {
        let _: serde_json::Value = self
            .rpc
            .request(
                "wallet_switchEthereumChain",
                json!([{ "chainId": chain_id_hex }]),
                RequestKind::Interactive,
            )
            .await?;
        Ok(())
    }

    async fn add_chain(&self, params: &ChainParams) -> Result<(), WalletError> {
        let _: serde_json::Value = self
            .rpc
            .request(
                "wallet_addEthereumChain",
                json!([params]),
                RequestKind::Interactive,
            )
            .await?;
        Ok(())
    }

    async fn balance(&self, address: Address) -> Result<U256, WalletError> {
        self.rpc
            .request("eth_getBalance", json!([address, "latest"]), RequestKind::Read)
            .await
    }

    async fn call(&self, call: &ContractCall) -> Result<Bytes, WalletError> {
        self.rpc
            .request(
                "eth_call",
                json!([{ "to": call.to, "data": call.data }, "latest"]),
                RequestKind::Read,
            )
            .await
    }

    async fn send_transaction(&self, request: TransactionRequest) -> Result<B256, WalletError> {
        self.rpc
            .request(
                "eth_sendTransaction",
                json!([request]),
                RequestKind::Interactive,
            )
            .await
    }

    async fn transaction_receipt(
        &self,
        hash: B256,
    ) -> Result<Option<TransactionReceipt>, WalletError> {
        self.rpc
            .request(
                "eth_getTransactionReceipt",
                json!([hash]),
                RequestKind::Read,
            )
            .await
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::BridgeContracts;

    #[test]
    fn test_transaction_request_wire_shape() {
        let from = Address::repeat_byte(0x11);
        let call = BridgeContracts::default().lock_tokens(U256::from(255));
        let value = serde_json::to_value(TransactionRequest::new(from, &call)).unwrap();

        assert_eq!(value["value"], "0xff");
        assert_eq!(
            value["data"],
            alloy_primitives::hex::encode_prefixed(&call.data)
        );
        assert_eq!(
            value["to"].as_str().map(str::to_lowercase),
            Some(call.to.to_string().to_lowercase())
        );
    }

    #[test]
    fn test_receipt_status() {
        let ok: TransactionReceipt = serde_json::from_value(json!({
            "transactionHash": format!("0x{}", "ab".repeat(32)),
            "blockNumber": "0x10",
            "status": "0x1",
        }))
        .unwrap();
        assert!(ok.succeeded());

        let reverted: TransactionReceipt = serde_json::from_value(json!({
            "transactionHash": format!("0x{}", "cd".repeat(32)),
            "status": "0x0",
        }))
        .unwrap();
        assert!(!reverted.succeeded());
    }

    #[test]
    fn test_receipt_without_status_counts_as_success() {
        let legacy: TransactionReceipt = serde_json::from_value(json!({
            "transactionHash": format!("0x{}", "ef".repeat(32)),
        }))
        .unwrap();
        assert!(legacy.succeeded());
    }
}
