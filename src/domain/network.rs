//! Networks the bridge operates on.
//!
//! The bridge only knows two chains. Chain ids are mapped through a fixed
//! table; anything else is reported as `unknown` and gets no balances.

use serde::{Deserialize, Serialize};

// ============================================================================
// Constants
// ============================================================================

/// Chain id of the Rupaya testnet.
pub const RUPAYA_TESTNET_CHAIN_ID: u64 = 799;

/// Chain id of the BSC testnet.
pub const BSC_TESTNET_CHAIN_ID: u64 = 97;

/// Label shown for chain ids outside the lookup table.
pub const UNKNOWN_NETWORK_LABEL: &str = "unknown";

// ============================================================================
// Bridge Network
// ============================================================================

/// One of the two chains connected by the bridge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BridgeNetwork {
    /// Rupaya testnet, home of native RUPX.
    RupayaTestnet,
    /// BSC testnet, home of wrapped BRUPX.
    BscTestnet,
}

impl BridgeNetwork {
    /// Looks a chain id up in the fixed table.
    #[must_use]
    pub const fn from_chain_id(chain_id: u64) -> Option<Self> {
        match chain_id {
            RUPAYA_TESTNET_CHAIN_ID => Some(Self::RupayaTestnet),
            BSC_TESTNET_CHAIN_ID => Some(Self::BscTestnet),
            _ => None,
        }
    }

    /// Numeric chain id.
    #[must_use]
    pub const fn chain_id(self) -> u64 {
        match self {
            Self::RupayaTestnet => RUPAYA_TESTNET_CHAIN_ID,
            Self::BscTestnet => BSC_TESTNET_CHAIN_ID,
        }
    }

    /// Chain id as the `0x`-prefixed hex quantity wallets expect.
    #[must_use]
    pub fn chain_id_hex(self) -> String {
        format!("{:#x}", self.chain_id())
    }

    /// Short label used in the UI and to compare against the detected network.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::RupayaTestnet => "rupaya-testnet",
            Self::BscTestnet => "bsc-testnet",
        }
    }

    /// Block explorer base URL.
    #[must_use]
    pub const fn explorer_url(self) -> &'static str {
        match self {
            Self::RupayaTestnet => "https://testnet-explorer.rupaya.io",
            Self::BscTestnet => "https://testnet.bscscan.com",
        }
    }

    /// Explorer page for a transaction hash.
    #[must_use]
    pub fn transaction_url(self, hash: &str) -> String {
        format!("{}/tx/{hash}", self.explorer_url())
    }

    /// Parameters for `wallet_addEthereumChain`.
    #[must_use]
    pub fn chain_params(self) -> ChainParams {
        match self {
            Self::RupayaTestnet => ChainParams {
                chain_id: self.chain_id_hex(),
                chain_name: "Rupaya Testnet".to_string(),
                native_currency: NativeCurrency::new("RUPX", "RUPX", 18),
                rpc_urls: vec!["https://testnet-rpc.rupaya.io".to_string()],
                block_explorer_urls: vec![self.explorer_url().to_string()],
            },
            Self::BscTestnet => ChainParams {
                chain_id: self.chain_id_hex(),
                chain_name: "BSC Testnet".to_string(),
                native_currency: NativeCurrency::new("tBNB", "tBNB", 18),
                rpc_urls: vec!["https://data-seed-prebsc-1-s1.binance.org:8545/".to_string()],
                block_explorer_urls: vec![self.explorer_url().to_string()],
            },
        }
    }
}

impl std::fmt::Display for BridgeNetwork {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// Network Status
// ============================================================================

/// What the poller last detected about the wallet's current chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NetworkStatus {
    /// Nothing detected yet, or the last read failed.
    #[default]
    Undetected,
    /// A chain from the lookup table.
    Known(BridgeNetwork),
    /// A chain id outside the lookup table.
    Unknown(u64),
}

impl NetworkStatus {
    /// Classifies a chain id.
    #[must_use]
    pub const fn from_chain_id(chain_id: u64) -> Self {
        match BridgeNetwork::from_chain_id(chain_id) {
            Some(network) => Self::Known(network),
            None => Self::Unknown(chain_id),
        }
    }

    /// Network label: empty when undetected, `unknown` for foreign chains.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Undetected => "",
            Self::Known(network) => network.label(),
            Self::Unknown(_) => UNKNOWN_NETWORK_LABEL,
        }
    }

    /// The bridge network, if the chain is supported.
    #[must_use]
    pub const fn network(&self) -> Option<BridgeNetwork> {
        match self {
            Self::Known(network) => Some(*network),
            _ => None,
        }
    }

    /// The detected chain id, if any.
    #[must_use]
    pub const fn chain_id(&self) -> Option<u64> {
        match self {
            Self::Undetected => None,
            Self::Known(network) => Some(network.chain_id()),
            Self::Unknown(chain_id) => Some(*chain_id),
        }
    }
}

// ============================================================================
// Chain Registration Parameters
// ============================================================================

/// Native currency block of `wallet_addEthereumChain`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NativeCurrency {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
}

impl NativeCurrency {
    #[must_use]
    pub fn new(name: &str, symbol: &str, decimals: u8) -> Self {
        Self {
            name: name.to_string(),
            symbol: symbol.to_string(),
            decimals,
        }
    }
}

/// Parameter object of `wallet_addEthereumChain`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainParams {
    pub chain_id: String,
    pub chain_name: String,
    pub native_currency: NativeCurrency,
    pub rpc_urls: Vec<String>,
    pub block_explorer_urls: Vec<String>,
}

// ============================================================================
// Tests
// ============================================================================
