//! Bridgeable tokens and the source/destination pair selected in the form.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::network::BridgeNetwork;

// ============================================================================
// Token
// ============================================================================

/// A token that can appear on either side of the bridge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Token {
    /// Native Rupaya coin.
    #[serde(rename = "RUPX")]
    Rupx,
    /// Wrapped RUPX living on BSC.
    #[serde(rename = "BRUPX")]
    Brupx,
}

impl Token {
    /// Ticker symbol shown in the UI and stored in history records.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Rupx => "RUPX",
            Self::Brupx => "BRUPX",
        }
    }

    /// The other token.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Rupx => Self::Brupx,
            Self::Brupx => Self::Rupx,
        }
    }

    /// Network a transfer must be submitted on when this token is the source.
    #[must_use]
    pub const fn source_network(self) -> BridgeNetwork {
        match self {
            Self::Rupx => BridgeNetwork::RupayaTestnet,
            Self::Brupx => BridgeNetwork::BscTestnet,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

// ============================================================================
// Token Pair
// ============================================================================

/// Source and destination selection of the bridge form.
///
/// The two sides are independent selections and may be equal; only
/// [`TokenPair::swap`] exchanges them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenPair {
    pub from: Token,
    pub to: Token,
}

impl Default for TokenPair {
    fn default() -> Self {
        Self {
            from: Token::Rupx,
            to: Token::Brupx,
        }
    }
}

impl TokenPair {
    #[must_use]
    pub const fn new(from: Token, to: Token) -> Self {
        Self { from, to }
    }

    /// Exchanges source and destination.
    pub fn swap(&mut self) {
        std::mem::swap(&mut self.from, &mut self.to);
    }

    /// Cycles the source selection.
    pub fn cycle_from(&mut self) {
        self.from = self.from.other();
    }

    /// Cycles the destination selection.
    pub fn cycle_to(&mut self) {
        self.to = self.to.other();
    }
}

// ============================================================================
// Tests
// ============================================================================
