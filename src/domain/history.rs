//! Client-side history of submitted bridge transactions.
//!
//! The history lives only in memory: it is capped at [`MAX_HISTORY`] entries,
//! ordered most-recent-first, and lost when the application exits.

use chrono::{DateTime, Local};

use super::token::Token;

/// Maximum number of transactions kept in the history.
pub const MAX_HISTORY: usize = 5;

/// Format used when rendering record timestamps.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// ============================================================================
// Transaction Record
// ============================================================================

/// A bridge transaction confirmed on the source chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionRecord {
    /// Source token.
    pub from: Token,
    /// Destination token.
    pub to: Token,
    /// Amount exactly as the user typed it.
    pub amount: String,
    /// Transaction hash from the receipt.
    pub hash: String,
    /// Local time of confirmation.
    pub timestamp: DateTime<Local>,
}

impl TransactionRecord {
    #[must_use]
    pub fn new(from: Token, to: Token, amount: impl Into<String>, hash: impl Into<String>) -> Self {
        Self {
            from,
            to,
            amount: amount.into(),
            hash: hash.into(),
            timestamp: Local::now(),
        }
    }

    /// Timestamp rendered for the history table.
    #[must_use]
    pub fn formatted_timestamp(&self) -> String {
        self.timestamp.format(TIMESTAMP_FORMAT).to_string()
    }

    /// Status label. Records only exist for confirmed transactions.
    #[must_use]
    pub const fn status(&self) -> &'static str {
        "Success"
    }
}

// ============================================================================
// Transaction History
// ============================================================================

/// Capped, most-recent-first list of [`TransactionRecord`]s.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionHistory {
    records: Vec<TransactionRecord>,
}

impl TransactionHistory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepends a record, dropping the oldest beyond the cap.
    pub fn push(&mut self, record: TransactionRecord) {
        self.records.insert(0, record);
        self.records.truncate(MAX_HISTORY);
    }

    /// Most recent record.
    #[must_use]
    pub fn latest(&self) -> Option<&TransactionRecord> {
        self.records.first()
    }

    #[must_use]
    pub fn records(&self) -> &[TransactionRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TransactionRecord> {
        self.records.iter()
    }
}

// ============================================================================
// Tests
// ============================================================================
