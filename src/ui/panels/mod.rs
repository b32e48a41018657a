//! Card rendering for the main page.
//!
//! # Panels
//!
//! - **Form**: token selectors, amount input and the bridge button
//! - **Balances**: RUPX and BRUPX balances of the connected account
//! - **History**: recent successful bridges, hidden while empty

pub mod balances;
pub mod form;
pub mod history;

pub use balances::render as render_balances;
pub use form::render as render_form;
pub use history::render as render_history;
