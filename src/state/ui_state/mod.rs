//! UI state management for the xLink Bridge TUI.
//!
//! This module manages UI presentation concerns including:
//! - Popup/modal state
//! - Toast notifications
//!
//! # Design
//!
//! The UI state is separate from session and form state,
//! focusing purely on presentation layer concerns.

mod popups;

pub use popups::{ConfirmBridge, PopupState};

// ============================================================================
// Toasts
// ============================================================================

/// Default toast lifetime in ticks (each tick is ~100ms in the main loop).
pub const TOAST_TICKS: u8 = 50;

/// Severity of a toast, which decides its color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

/// A titled, non-blocking notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub title: String,
    pub description: String,
    pub kind: ToastKind,
}

impl Toast {
    #[must_use]
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            kind: ToastKind::Success,
        }
    }

    #[must_use]
    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            kind: ToastKind::Error,
        }
    }

    #[must_use]
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            kind: ToastKind::Info,
        }
    }

    /// Provider missing or unreachable.
    #[must_use]
    pub fn wallet_not_detected() -> Self {
        Self::error(
            "Wallet not detected",
            "Please start a wallet provider to use this feature.",
        )
    }

    #[must_use]
    pub fn bridge_failed() -> Self {
        Self::error("Bridge Failed", "An error occurred while bridging tokens.")
    }
}

// ============================================================================
// UI State
// ============================================================================

/// UI state: popup and toast.
///
/// # Example
///
/// ```ignore
/// use crate::state::UiState;
///
/// let mut ui = UiState::new();
/// ui.show_toast(Toast::bridge_failed(), TOAST_TICKS);
/// ```
#[derive(Debug, Default)]
pub struct UiState {
    /// Current popup/modal state.
    pub popup_state: PopupState,

    /// Toast notification and remaining ticks (non-blocking overlay).
    pub toast: Option<(Toast, u8)>,
}

impl UiState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Popups
    // ========================================================================

    #[must_use]
    pub const fn has_active_popup(&self) -> bool {
        self.popup_state.is_active()
    }

    pub fn show_message(&mut self, message: impl Into<String>) {
        self.popup_state = PopupState::Message(message.into());
    }

    pub fn show_confirm(&mut self, confirm: ConfirmBridge) {
        self.popup_state = PopupState::ConfirmBridge(confirm);
    }

    /// Closes whatever popup is open.
    pub fn dismiss_popup(&mut self) {
        self.popup_state = PopupState::None;
    }

    // ========================================================================
    // Toast Notifications
    // ========================================================================

    /// Shows a toast notification (non-blocking overlay that auto-dismisses).
    ///
    /// Duration is in ticks (each tick is ~100ms in the main loop).
    pub fn show_toast(&mut self, toast: Toast, ticks: u8) {
        self.toast = Some((toast, ticks));
    }

    /// Decrements the toast countdown.
    ///
    /// # Returns
    ///
    /// `true` if the toast was removed (countdown reached zero).
    pub fn tick_toast(&mut self) -> bool {
        if let Some((_, ref mut ticks)) = self.toast {
            if *ticks > 1 {
                *ticks -= 1;
                false
            } else {
                self.toast = None;
                true
            }
        } else {
            false
        }
    }

    #[must_use]
    pub fn current_toast(&self) -> Option<&Toast> {
        self.toast.as_ref().map(|(toast, _)| toast)
    }
}
