//! Shared test utilities and Mother pattern factories.
//!
//! [`MockWallet`] is an in-memory [`WalletProvider`] that records every
//! request it receives. Clones share state, so a test can hand one clone to
//! the code under test and inspect the other.
#![allow(dead_code)]

use std::sync::{Arc, Mutex, MutexGuard};

use alloy_primitives::{Address, B256, Bytes, U64, U256, address, b256};
use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};

use crate::bridge::BridgeRequest;
use crate::client::{TransactionReceipt, TransactionRequest, WalletProvider};
use crate::domain::{
    BridgeContracts, ChainParams, ContractCall, NetworkStatus, TokenPair, WalletError,
};
use crate::state::{App, AppConfig};

/// `n` whole ether in wei.
#[must_use]
pub fn ether(n: u64) -> U256 {
    U256::from(n) * U256::from(10u64).pow(U256::from(18))
}

// ============================================================================
// Mock Wallet
// ============================================================================

#[derive(Debug)]
struct MockState {
    authorized: bool,
    unavailable: bool,
    chain_id: u64,
    known_chains: bool,
    native_balance: U256,
    locked: U256,
    wrapped: U256,
    switch_error: Option<i64>,
    send_error: Option<i64>,
    reverted: bool,
    pending_polls: usize,
    requests: Vec<&'static str>,
    sent: Vec<TransactionRequest>,
    added: Vec<ChainParams>,
}

/// Recording in-memory wallet.
#[derive(Debug, Clone)]
pub struct MockWallet {
    state: Arc<Mutex<MockState>>,
}

impl MockWallet {
    /// Hash returned for every sent transaction.
    pub const TX_HASH: B256 =
        b256!("00000000000000000000000000000000000000000000000000000000000000aa");

    /// A reachable wallet on `chain_id` with no account authorized yet.
    #[must_use]
    pub fn on_chain(chain_id: u64) -> Self {
        Self {
            state: Arc::new(Mutex::new(MockState {
                authorized: false,
                unavailable: false,
                chain_id,
                known_chains: true,
                native_balance: U256::ZERO,
                locked: U256::ZERO,
                wrapped: U256::ZERO,
                switch_error: None,
                send_error: None,
                reverted: false,
                pending_polls: 0,
                requests: Vec::new(),
                sent: Vec::new(),
                added: Vec::new(),
            })),
        }
    }

    /// A wallet whose endpoint cannot be reached.
    #[must_use]
    pub fn unavailable() -> Self {
        let wallet = Self::on_chain(0);
        wallet.lock().unavailable = true;
        wallet
    }

    /// Account already authorized, as after an earlier session.
    #[must_use]
    pub fn authorized(self) -> Self {
        self.lock().authorized = true;
        self
    }

    #[must_use]
    pub fn with_native_balance(self, balance: U256) -> Self {
        self.lock().native_balance = balance;
        self
    }

    /// Amount reported by `lockedTokens`.
    #[must_use]
    pub fn with_locked(self, amount: U256) -> Self {
        self.lock().locked = amount;
        self
    }

    /// Amount reported by `balanceOf`.
    #[must_use]
    pub fn with_wrapped(self, amount: U256) -> Self {
        self.lock().wrapped = amount;
        self
    }

    /// Switch requests fail with 4902 until the chain is added.
    #[must_use]
    pub fn with_unknown_chains(self) -> Self {
        self.lock().known_chains = false;
        self
    }

    #[must_use]
    pub fn with_switch_error(self, code: i64) -> Self {
        self.lock().switch_error = Some(code);
        self
    }

    #[must_use]
    pub fn with_send_error(self, code: i64) -> Self {
        self.lock().send_error = Some(code);
        self
    }

    #[must_use]
    pub fn with_reverted_receipts(self) -> Self {
        self.lock().reverted = true;
        self
    }

    /// Number of receipt polls that report the transaction as pending.
    #[must_use]
    pub fn with_pending_polls(self, polls: usize) -> Self {
        self.lock().pending_polls = polls;
        self
    }

    /// Simulates the user switching network in the wallet.
    pub fn set_chain(&self, chain_id: u64) {
        self.lock().chain_id = chain_id;
    }

    pub fn set_native_balance(&self, balance: U256) {
        self.lock().native_balance = balance;
    }

    #[must_use]
    pub fn chain(&self) -> u64 {
        self.lock().chain_id
    }

    /// Method names of every request received, in order.
    #[must_use]
    pub fn requests(&self) -> Vec<&'static str> {
        self.lock().requests.clone()
    }

    #[must_use]
    pub fn sent_transactions(&self) -> Vec<TransactionRequest> {
        self.lock().sent.clone()
    }

    #[must_use]
    pub fn added_chains(&self) -> Vec<ChainParams> {
        self.lock().added.clone()
    }

    fn lock(&self) -> MutexGuard<'_, MockState> {
        self.state
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    /// Records `method` and fails if the endpoint is unreachable.
    fn begin(&self, method: &'static str) -> Result<MutexGuard<'_, MockState>, WalletError> {
        let mut state = self.lock();
        state.requests.push(method);
        if state.unavailable {
            return Err(unreachable_endpoint());
        }
        Ok(state)
    }
}

/// A transport-level error, as reqwest reports an unreachable endpoint.
fn unreachable_endpoint() -> WalletError {
    match reqwest::Client::new().get("not a url").build() {
        Err(e) => WalletError::Unavailable(e),
        Ok(_) => WalletError::parse("unreachable"),
    }
}

fn word(value: U256) -> Bytes {
    Bytes::from(value.to_be_bytes::<32>().to_vec())
}

impl WalletProvider for MockWallet {
    async fn accounts(&self) -> Result<Vec<Address>, WalletError> {
        let state = self.begin("eth_accounts")?;
        Ok(if state.authorized {
            vec![RequestMother::ACCOUNT]
        } else {
            Vec::new()
        })
    }

    async fn request_accounts(&self) -> Result<Vec<Address>, WalletError> {
        let mut state = self.begin("eth_requestAccounts")?;
        state.authorized = true;
        Ok(vec![RequestMother::ACCOUNT])
    }

    async fn chain_id(&self) -> Result<u64, WalletError> {
        Ok(self.begin("eth_chainId")?.chain_id)
    }

    async fn switch_chain(&self, chain_id_hex: &str) -> Result<(), WalletError> {
        let mut state = self.begin("wallet_switchEthereumChain")?;
        if let Some(code) = state.switch_error {
            return Err(WalletError::rpc(code, "switch failed"));
        }
        let chain_id = u64::from_str_radix(chain_id_hex.trim_start_matches("0x"), 16)
            .map_err(|e| WalletError::parse(e.to_string()))?;
        let added = state.added.iter().any(|p| p.chain_id == chain_id_hex);
        if !state.known_chains && !added {
            return Err(WalletError::rpc(4902, "Unrecognized chain ID"));
        }
        state.chain_id = chain_id;
        Ok(())
    }

    async fn add_chain(&self, params: &ChainParams) -> Result<(), WalletError> {
        let mut state = self.begin("wallet_addEthereumChain")?;
        state.chain_id = u64::from_str_radix(params.chain_id.trim_start_matches("0x"), 16)
            .map_err(|e| WalletError::parse(e.to_string()))?;
        state.added.push(params.clone());
        Ok(())
    }

    async fn balance(&self, _address: Address) -> Result<U256, WalletError> {
        Ok(self.begin("eth_getBalance")?.native_balance)
    }

    async fn call(&self, call: &ContractCall) -> Result<Bytes, WalletError> {
        let state = self.begin("eth_call")?;
        let contracts = BridgeContracts::default();
        let selector = call.selector();
        if selector == contracts.locked_tokens(Address::ZERO).selector() {
            Ok(word(state.locked))
        } else if selector == contracts.balance_of(Address::ZERO).selector() {
            Ok(word(state.wrapped))
        } else {
            Err(WalletError::rpc(-32000, "execution reverted"))
        }
    }

    async fn send_transaction(&self, request: TransactionRequest) -> Result<B256, WalletError> {
        let mut state = self.begin("eth_sendTransaction")?;
        if let Some(code) = state.send_error {
            return Err(WalletError::rpc(code, "User denied transaction signature."));
        }
        state.sent.push(request);
        Ok(Self::TX_HASH)
    }

    async fn transaction_receipt(
        &self,
        hash: B256,
    ) -> Result<Option<TransactionReceipt>, WalletError> {
        let mut state = self.begin("eth_getTransactionReceipt")?;
        if state.pending_polls > 0 {
            state.pending_polls -= 1;
            return Ok(None);
        }
        Ok(Some(TransactionReceipt {
            transaction_hash: hash,
            status: Some(U64::from(u64::from(!state.reverted))),
        }))
    }
}

// ============================================================================
// Mother Pattern Factories
// ============================================================================

pub struct RequestMother;

impl RequestMother {
    /// Account every [`MockWallet`] authorizes.
    pub const ACCOUNT: Address = address!("1234567890abcdef1234567890abcdef12345678");

    /// Connected on Rupaya, moving RUPX to BRUPX.
    #[must_use]
    pub fn rupx_to_brupx(amount: &str) -> BridgeRequest {
        BridgeRequest {
            account: Some(Self::ACCOUNT),
            pair: TokenPair::default(),
            amount: amount.to_string(),
            current_network: NetworkStatus::from_chain_id(799),
        }
    }
}

pub struct AppMother;

impl AppMother {
    /// Disconnected app on a Rupaya wallet, config kept in memory.
    #[must_use]
    pub fn app() -> App<MockWallet> {
        App::with_wallet(AppConfig::default(), None, MockWallet::on_chain(799))
    }

    /// App with a session already established on `chain_id`.
    #[must_use]
    pub fn connected(chain_id: u64) -> App<MockWallet> {
        let mut app = Self::app();
        app.session.connect(RequestMother::ACCOUNT);
        app.session.network = NetworkStatus::from_chain_id(chain_id);
        app
    }
}

// ============================================================================
// Rendering
// ============================================================================

/// Buffer contents as text, one line per row, trailing blanks trimmed.
#[must_use]
pub fn buffer_to_string(buffer: &Buffer) -> String {
    let area = buffer.area;
    (area.top()..area.bottom())
        .map(|y| {
            let line: String = (area.left()..area.right())
                .map(|x| buffer[(x, y)].symbol())
                .collect();
            line.trim_end().to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders the whole app into a fresh test terminal.
#[must_use]
pub fn render_app(app: &App<MockWallet>, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|frame| crate::ui::render(app, frame)).unwrap();
    buffer_to_string(terminal.backend().buffer())
}
