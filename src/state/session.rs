//! Wallet session state.

use alloy_primitives::Address;

use crate::domain::NetworkStatus;

/// Connected account and detected network.
///
/// Reset on disconnect; nothing here outlives the process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    pub account: Option<Address>,
    pub network: NetworkStatus,
}

impl SessionState {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            account: None,
            network: NetworkStatus::Undetected,
        }
    }

    #[must_use]
    pub const fn is_connected(&self) -> bool {
        self.account.is_some()
    }

    pub fn connect(&mut self, account: Address) {
        self.account = Some(account);
    }

    /// Forgets the account and network.
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Checksummed account shortened to `0x1234...abcd`.
    #[must_use]
    pub fn short_account(&self) -> Option<String> {
        self.account.map(|account| shorten_address(&account))
    }
}

/// First six and last four characters of the checksummed address.
#[must_use]
pub fn shorten_address(address: &Address) -> String {
    let full = address.to_checksum(None);
    format!("{}...{}", &full[..6], &full[full.len() - 4..])
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::address;

    #[test]
    fn test_shorten_address() {
        let account = address!("1234567890abcdef1234567890abcdef1234abcd");
        let short = shorten_address(&account);
        assert_eq!(short.len(), 13);
        assert!(short.starts_with("0x1234"));
        assert!(short.to_lowercase().ends_with("abcd"));
        assert_eq!(&short[6..9], "...");
    }

    #[test]
    fn test_connect_and_clear() {
        let mut session = SessionState::new();
        assert!(!session.is_connected());
        assert_eq!(session.short_account(), None);

        session.connect(Address::repeat_byte(0x11));
        session.network = NetworkStatus::from_chain_id(97);
        assert!(session.is_connected());

        session.clear();
        assert_eq!(session, SessionState::default());
        assert_eq!(session.network.label(), "");
    }
}
