//! Popup UI components for the xLink Bridge TUI.
//!
//! Popups are modal overlays drawn on top of the page; they capture input
//! until dismissed.

pub mod confirm;
pub mod message;

pub use confirm::render as render_confirm_popup;
pub use message::render as render_message_popup;
