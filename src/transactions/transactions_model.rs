use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Domain model representing a ledger entry under one account.
///
/// Transactions are immutable once fetched. `account_id` should resolve to a
/// known [`Account`](crate::accounts::Account), but the engine tolerates
/// orphaned references (see
/// [`account_display_name`](crate::transactions::account_display_name)).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub transaction_id: String,
    pub account_id: String,
    pub name: String,
    pub merchant_name: Option<String>,
    pub amount: Decimal,
    pub currency_code: Option<String>,
    pub date: NaiveDate,
    pub category: Option<TransactionCategory>,
    pub payment_channel: Option<String>,
    pub transaction_type: Option<String>,
}

/// Category label pre-assigned by the data source.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TransactionCategory {
    pub primary: String,
    pub detailed: Option<String>,
}

/// Sorts transactions by date descending, with `transaction_id` ascending as
/// the tie-break for equal dates so the ordering is reproducible.
pub fn sort_newest_first(transactions: &mut [Transaction]) {
    transactions.sort_by(|a, b| {
        b.date
            .cmp(&a.date)
            .then_with(|| a.transaction_id.cmp(&b.transaction_id))
    });
}
