//! Bridge contract interfaces and call construction.
//!
//! The contracts are external, pre-deployed artifacts. This module only knows
//! their addresses and the functions the UI invokes.

use alloy_primitives::{Address, Bytes, U256, address};
use alloy_sol_types::{SolCall, sol};
use serde::{Deserialize, Serialize};

use super::error::WalletError;
use super::token::Token;

sol! {
    /// Lock side of the bridge, deployed on the Rupaya testnet.
    interface IRupayaBridge {
        function lockTokens() external payable;
        function unlockTokens(address user, uint256 amount) external;
        function lockedTokens(address user) external view returns (uint256);

        event TokensLocked(address indexed user, uint256 amount, uint256 timestamp);
        event TokensUnlocked(address indexed user, uint256 amount, uint256 timestamp);
    }

    /// Mint/burn side of the bridge, deployed on the BSC testnet.
    interface IBscBridge {
        function mintTokens(address user, uint256 amount) external;
        function burnTokens(address user, uint256 amount) external;
        function balanceOf(address account) external view returns (uint256);

        event TokensMinted(address indexed user, uint256 amount, uint256 timestamp);
        event TokensBurned(address indexed user, uint256 amount, uint256 timestamp);
    }
}

/// Default address of the Rupaya-side bridge.
pub const RUPAYA_BRIDGE_ADDRESS: Address = address!("8d89eB69A35C4573EeEC3D6a24Ff678858C24d41");

/// Default address of the BSC-side bridge.
pub const BSC_BRIDGE_ADDRESS: Address = address!("D8889654A3DF5E154247AaE60FE0fE8B089482D6");

// ============================================================================
// Contract Call
// ============================================================================

/// An encoded contract invocation, ready for `eth_call` or `eth_sendTransaction`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractCall {
    pub to: Address,
    pub value: U256,
    pub data: Bytes,
}

impl ContractCall {
    fn new<C: SolCall>(to: Address, value: U256, call: &C) -> Self {
        Self {
            to,
            value,
            data: Bytes::from(call.abi_encode()),
        }
    }

    /// The 4-byte function selector.
    #[cfg(test)]
    #[must_use]
    pub fn selector(&self) -> [u8; 4] {
        let mut selector = [0u8; 4];
        let len = self.data.len().min(4);
        selector[..len].copy_from_slice(&self.data[..len]);
        selector
    }
}

// ============================================================================
// Bridge Contracts
// ============================================================================

/// Addresses of the two bridge contracts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BridgeContracts {
    /// Lock/unlock contract on the Rupaya testnet.
    pub rupaya_bridge: Address,
    /// Mint/burn contract on the BSC testnet.
    pub bsc_bridge: Address,
}

impl Default for BridgeContracts {
    fn default() -> Self {
        Self {
            rupaya_bridge: RUPAYA_BRIDGE_ADDRESS,
            bsc_bridge: BSC_BRIDGE_ADDRESS,
        }
    }
}

impl BridgeContracts {
    /// `lockTokens()` carrying `amount` as value.
    #[must_use]
    pub fn lock_tokens(&self, amount: U256) -> ContractCall {
        ContractCall::new(
            self.rupaya_bridge,
            amount,
            &IRupayaBridge::lockTokensCall {},
        )
    }

    /// `burnTokens(user, amount)`.
    #[must_use]
    pub fn burn_tokens(&self, user: Address, amount: U256) -> ContractCall {
        ContractCall::new(
            self.bsc_bridge,
            U256::ZERO,
            &IBscBridge::burnTokensCall { user, amount },
        )
    }

    /// `lockedTokens(user)` read.
    #[must_use]
    pub fn locked_tokens(&self, user: Address) -> ContractCall {
        ContractCall::new(
            self.rupaya_bridge,
            U256::ZERO,
            &IRupayaBridge::lockedTokensCall { user },
        )
    }

    /// `balanceOf(account)` read.
    #[must_use]
    pub fn balance_of(&self, account: Address) -> ContractCall {
        ContractCall::new(
            self.bsc_bridge,
            U256::ZERO,
            &IBscBridge::balanceOfCall { account },
        )
    }

    /// The transaction that moves `amount` out of `from`.
    ///
    /// RUPX is locked with value on the Rupaya bridge; BRUPX is burned on the
    /// BSC bridge.
    #[must_use]
    pub fn bridge_call(&self, from: Token, account: Address, amount: U256) -> ContractCall {
        match from {
            Token::Rupx => self.lock_tokens(amount),
            Token::Brupx => self.burn_tokens(account, amount),
        }
    }
}

/// Decodes a single `uint256` return value.
///
/// # Errors
///
/// Returns a parse error if fewer than 32 bytes were returned.
pub fn decode_uint256(data: &[u8]) -> Result<U256, WalletError> {
    let word = data.get(..32).ok_or_else(|| {
        WalletError::parse(format!("expected a 32-byte word, got {} bytes", data.len()))
    })?;
    Ok(U256::from_be_slice(word))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::{hex, keccak256};

    fn selector_of(signature: &str) -> [u8; 4] {
        let hash = keccak256(signature.as_bytes());
        [hash[0], hash[1], hash[2], hash[3]]
    }

    const USER: Address = address!("00000000000000000000000000000000000000aa");

    #[test]
    fn test_lock_tokens_carries_value_and_no_arguments() {
        let call = BridgeContracts::default().lock_tokens(U256::from(10));
        assert_eq!(call.to, RUPAYA_BRIDGE_ADDRESS);
        assert_eq!(call.value, U256::from(10));
        assert_eq!(call.data.len(), 4);
        assert_eq!(call.selector(), selector_of("lockTokens()"));
    }

    #[test]
    fn test_burn_tokens_encoding() {
        let call = BridgeContracts::default().burn_tokens(USER, U256::from(5));
        assert_eq!(call.to, BSC_BRIDGE_ADDRESS);
        assert!(call.value.is_zero());
        assert_eq!(call.selector(), selector_of("burnTokens(address,uint256)"));
        assert_eq!(call.data.len(), 4 + 32 * 2);
        assert_eq!(&call.data[4 + 12..4 + 32], USER.as_slice());
        assert_eq!(call.data[4 + 63], 5);
    }

    #[test]
    fn test_read_selectors() {
        let contracts = BridgeContracts::default();
        assert_eq!(
            contracts.locked_tokens(USER).selector(),
            selector_of("lockedTokens(address)")
        );
        assert_eq!(
            contracts.balance_of(USER).selector(),
            selector_of("balanceOf(address)")
        );
    }

    #[test]
    fn test_bridge_call_by_direction() {
        let contracts = BridgeContracts::default();
        let amount = U256::from(7);
        assert_eq!(
            contracts.bridge_call(Token::Rupx, USER, amount),
            contracts.lock_tokens(amount)
        );
        assert_eq!(
            contracts.bridge_call(Token::Brupx, USER, amount),
            contracts.burn_tokens(USER, amount)
        );
    }

    #[test]
    fn test_decode_uint256() {
        let mut word = [0u8; 32];
        word[31] = 42;
        assert_eq!(decode_uint256(&word).unwrap(), U256::from(42));
        assert!(decode_uint256(&hex!("0102")).is_err());
    }

    #[test]
    fn test_contracts_serde_round_trip() {
        let json = serde_json::to_string(&BridgeContracts::default()).unwrap();
        let parsed: BridgeContracts = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, BridgeContracts::default());
    }
}
