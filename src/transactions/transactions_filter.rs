use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::transactions_model::Transaction;
use crate::accounts::Account;

/// Independent filter predicates for the transaction view. All predicates
/// are conjunctive; the default value matches every transaction.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionFilter {
    /// Case-insensitive substring match against the transaction name.
    pub search: String,
    /// Exact match on `account_id`; empty matches all accounts.
    pub account_id: String,
    /// Inclusive lower date bound.
    pub start_date: Option<NaiveDate>,
    /// Inclusive upper date bound.
    pub end_date: Option<NaiveDate>,
    /// Case-insensitive substring match against the primary category.
    /// Transactions without a category never match a non-empty filter.
    pub category: String,
}

impl TransactionFilter {
    pub fn matches(&self, transaction: &Transaction) -> bool {
        if !self.search.is_empty()
            && !transaction
                .name
                .to_lowercase()
                .contains(&self.search.to_lowercase())
        {
            return false;
        }
        if !self.account_id.is_empty() && transaction.account_id != self.account_id {
            return false;
        }
        if let Some(start) = self.start_date {
            if transaction.date < start {
                return false;
            }
        }
        if let Some(end) = self.end_date {
            if transaction.date > end {
                return false;
            }
        }
        if !self.category.is_empty() {
            match &transaction.category {
                Some(category) => {
                    if !category
                        .primary
                        .to_lowercase()
                        .contains(&self.category.to_lowercase())
                    {
                        return false;
                    }
                }
                None => return false,
            }
        }
        true
    }
}

/// Applies the filter to an already-sorted sequence, preserving its order.
pub fn filter_transactions(
    transactions: &[Transaction],
    filter: &TransactionFilter,
) -> Vec<Transaction> {
    transactions
        .iter()
        .filter(|tx| filter.matches(tx))
        .cloned()
        .collect()
}

/// Resolves the display name for a transaction's account, falling back to
/// the raw account id when the account is unknown.
pub fn account_display_name(accounts: &HashMap<String, Account>, account_id: &str) -> String {
    accounts
        .get(account_id)
        .map(|account| account.name.clone())
        .unwrap_or_else(|| account_id.to_string())
}
