//! Reusable UI components for the xLink Bridge TUI.
//!
//! Components are stateless: they render what they are given and never
//! touch application state.
//!
//! - [`toast`] - Toast notification overlay for non-blocking messages

pub mod toast;

pub use toast::render_toast;
