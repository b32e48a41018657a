//! Popup state types for the xLink Bridge TUI.

use crate::domain::Token;

// ============================================================================
// Confirm Bridge
// ============================================================================

/// Snapshot of the form taken when the confirmation dialog opens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmBridge {
    pub amount: String,
    pub from: Token,
    pub to: Token,
}

impl ConfirmBridge {
    #[must_use]
    pub fn new(amount: impl Into<String>, from: Token, to: Token) -> Self {
        Self {
            amount: amount.into(),
            from,
            to,
        }
    }

    #[must_use]
    pub fn question(&self) -> String {
        format!(
            "Are you sure you want to bridge {} {} to {}?",
            self.amount, self.from, self.to
        )
    }
}

// ============================================================================
// Popup State
// ============================================================================

/// Represents the current popup/modal state.
///
/// Only one popup can be active at a time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PopupState {
    /// No popup is displayed.
    #[default]
    None,
    /// "Confirm Bridge Transaction" dialog.
    ConfirmBridge(ConfirmBridge),
    /// Message/notification popup.
    Message(String),
}

impl PopupState {
    #[must_use]
    pub const fn is_active(&self) -> bool {
        !matches!(self, Self::None)
    }
}
