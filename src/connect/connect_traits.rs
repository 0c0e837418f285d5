use async_trait::async_trait;

use super::connect_model::Item;
use crate::accounts::Account;
use crate::connect::Result;
use crate::transactions::Transaction;

/// Trait defining the contract for a remote financial data source.
///
/// Each capability is independently fallible; callers are expected to treat
/// a failure as "this source contributed nothing" rather than aborting.
#[async_trait]
pub trait FinancialDataProvider: Send + Sync {
    /// Lists the items linked by the current user.
    async fn list_items(&self) -> Result<Vec<Item>>;

    /// Lists the accounts under one item. Returned accounts carry the owning
    /// `item_id` even when the wire payload omits it.
    async fn list_accounts(&self, item_id: &str) -> Result<Vec<Account>>;

    /// Lists up to `limit` transactions under one item.
    async fn list_transactions(&self, item_id: &str, limit: usize) -> Result<Vec<Transaction>>;
}
