//! Balance snapshot read by the poller.

use super::amount::ZERO_BALANCE;
use super::network::NetworkStatus;

/// Network and both token balances as of the last read.
///
/// Balances are ether decimal strings. Anything that could not be read is
/// the `"0"` placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BalanceSnapshot {
    pub network: NetworkStatus,
    pub rupx: String,
    pub brupx: String,
}

impl Default for BalanceSnapshot {
    fn default() -> Self {
        Self::placeholder()
    }
}

impl BalanceSnapshot {
    /// Undetected network, zero balances.
    #[must_use]
    pub fn placeholder() -> Self {
        Self::zero(NetworkStatus::Undetected)
    }

    /// Zero balances on the given network.
    #[must_use]
    pub fn zero(network: NetworkStatus) -> Self {
        Self {
            network,
            rupx: ZERO_BALANCE.to_string(),
            brupx: ZERO_BALANCE.to_string(),
        }
    }

    /// Returns `true` if both balances are the placeholder.
    #[cfg(test)]
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.rupx == ZERO_BALANCE && self.brupx == ZERO_BALANCE
    }
}
