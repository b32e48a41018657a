//! JSON-RPC 2.0 transport to the wallet provider.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::http::{HttpClient, RequestKind};
use crate::domain::WalletError;

// ============================================================================
// Wire Types
// ============================================================================

#[derive(Debug, Serialize)]
struct RpcRequest<'a, P> {
    jsonrpc: &'static str,
    id: u64,
    method: &'a str,
    params: P,
}

#[derive(Debug, Deserialize)]
struct RpcResponse {
    #[serde(default)]
    result: Option<Value>,
    #[serde(default)]
    error: Option<RpcErrorObject>,
}

#[derive(Debug, Deserialize)]
struct RpcErrorObject {
    code: i64,
    #[serde(default)]
    message: String,
}

// ============================================================================
// Client
// ============================================================================

/// Minimal JSON-RPC client bound to one endpoint.
#[derive(Debug, Clone)]
pub struct RpcClient {
    http: HttpClient,
    url: String,
    next_id: Arc<AtomicU64>,
}

impl RpcClient {
    #[must_use]
    pub fn new(http: HttpClient, url: impl Into<String>) -> Self {
        Self {
            http,
            url: url.into(),
            next_id: Arc::new(AtomicU64::new(1)),
        }
    }

    /// Performs one request and decodes its `result`.
    ///
    /// A `null` result is handed to the decoder, so `R = Option<T>` models
    /// methods that legitimately return nothing (pending receipts).
    ///
    /// # Errors
    ///
    /// - [`WalletError::Unavailable`] when the endpoint cannot be reached
    /// - [`WalletError::Timeout`] when no answer arrives within the timeout for `kind`
    /// - [`WalletError::Http`] on non-2xx statuses
    /// - [`WalletError::Rpc`] when the provider returns an error object
    /// - [`WalletError::Parse`] when the body or result cannot be decoded
    pub async fn request<P, R>(
        &self,
        method: &str,
        params: P,
        kind: RequestKind,
    ) -> Result<R, WalletError>
    where
        P: Serialize + Send,
        R: DeserializeOwned,
    {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let body = RpcRequest {
            jsonrpc: "2.0",
            id,
            method,
            params,
        };

        tracing::debug!("rpc #{id} -> {method}");
        let response = self
            .http
            .post(&self.url, kind)
            .json(&body)
            .send()
            .await?
            .error_for_status()?;

        let text = response.text().await?;
        decode_response(method, &text)
    }
}

/// Decodes a JSON-RPC response body.
fn decode_response<R: DeserializeOwned>(method: &str, body: &str) -> Result<R, WalletError> {
    let response: RpcResponse = serde_json::from_str(body)
        .map_err(|e| WalletError::parse(format!("{method}: invalid JSON-RPC response: {e}")))?;

    if let Some(error) = response.error {
        tracing::debug!("rpc {method} failed with {}: {}", error.code, error.message);
        return Err(WalletError::rpc(error.code, error.message));
    }

    serde_json::from_value(response.result.unwrap_or(Value::Null))
        .map_err(|e| WalletError::parse(format!("{method}: unexpected result: {e}")))
}

// ============================================================================
// Tests
// ============================================================================
