use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::accounts::Account;
use crate::transactions::Transaction;

/// Merged result of a full load across all linked items.
///
/// `failed_sources` / `total_sources` count per-item capability fetches
/// (accounts and transactions are separate sources), so callers can surface
/// an "N of M sources failed" signal instead of silently rendering partial
/// data.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedSnapshot {
    pub accounts: HashMap<String, Account>,
    pub transactions: Vec<Transaction>,
    pub failed_sources: usize,
    pub total_sources: usize,
}

impl FeedSnapshot {
    pub fn is_partial(&self) -> bool {
        self.failed_sources > 0
    }
}
