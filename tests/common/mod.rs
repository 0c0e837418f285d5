use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use async_trait::async_trait;
use rust_decimal::Decimal;

use banklink_core::connect::{ConnectError, FinancialDataProvider, Item, Result};
use banklink_core::{Account, Transaction, TransactionCategory};

/// In-memory stand-in for the remote data source. Per-item data is seeded
/// through the builder methods; individual capabilities can be made to fail.
/// Transaction fetches are recorded so tests can assert fetch scoping.
#[derive(Default)]
pub struct MockProvider {
    items: Option<Vec<Item>>,
    accounts: HashMap<String, Vec<Account>>,
    transactions: HashMap<String, Vec<Transaction>>,
    failing_accounts: HashSet<String>,
    failing_transactions: HashSet<String>,
    account_fetch_log: Mutex<Vec<String>>,
    tx_fetch_log: Mutex<Vec<String>>,
}

impl MockProvider {
    pub fn new() -> Self {
        Self {
            items: Some(Vec::new()),
            ..Default::default()
        }
    }

    /// A provider whose item listing itself fails.
    pub fn failing_items() -> Self {
        Self::default()
    }

    pub fn with_item(mut self, item_id: &str) -> Self {
        self.items
            .get_or_insert_with(Vec::new)
            .push(Item::new(item_id));
        self
    }

    pub fn with_account(mut self, account: Account) -> Self {
        self.accounts
            .entry(account.item_id.clone())
            .or_default()
            .push(account);
        self
    }

    pub fn with_transaction(mut self, item_id: &str, transaction: Transaction) -> Self {
        self.transactions
            .entry(item_id.to_string())
            .or_default()
            .push(transaction);
        self
    }

    pub fn with_failing_accounts(mut self, item_id: &str) -> Self {
        self.failing_accounts.insert(item_id.to_string());
        self
    }

    pub fn with_failing_transactions(mut self, item_id: &str) -> Self {
        self.failing_transactions.insert(item_id.to_string());
        self
    }

    /// Item ids of every account fetch issued so far, in call order.
    pub fn account_fetches(&self) -> Vec<String> {
        self.account_fetch_log.lock().unwrap().clone()
    }

    /// Item ids of every transaction fetch issued so far, in call order.
    pub fn transaction_fetches(&self) -> Vec<String> {
        self.tx_fetch_log.lock().unwrap().clone()
    }
}

#[async_trait]
impl FinancialDataProvider for MockProvider {
    async fn list_items(&self) -> Result<Vec<Item>> {
        self.items
            .clone()
            .ok_or_else(|| ConnectError::Provider("item listing unavailable".to_string()))
    }

    async fn list_accounts(&self, item_id: &str) -> Result<Vec<Account>> {
        self.account_fetch_log.lock().unwrap().push(item_id.to_string());
        if self.failing_accounts.contains(item_id) {
            return Err(ConnectError::Network(format!(
                "connection reset fetching accounts for {}",
                item_id
            )));
        }
        Ok(self.accounts.get(item_id).cloned().unwrap_or_default())
    }

    async fn list_transactions(&self, item_id: &str, limit: usize) -> Result<Vec<Transaction>> {
        self.tx_fetch_log.lock().unwrap().push(item_id.to_string());
        if self.failing_transactions.contains(item_id) {
            return Err(ConnectError::Provider(format!(
                "transactions unavailable for {}",
                item_id
            )));
        }
        let mut batch = self.transactions.get(item_id).cloned().unwrap_or_default();
        batch.truncate(limit);
        Ok(batch)
    }
}

pub fn account(account_id: &str, name: &str, item_id: &str) -> Account {
    Account::new(account_id, name, item_id)
}

pub fn transaction(
    transaction_id: &str,
    account_id: &str,
    name: &str,
    date: &str,
    amount: Decimal,
) -> Transaction {
    Transaction {
        transaction_id: transaction_id.to_string(),
        account_id: account_id.to_string(),
        name: name.to_string(),
        merchant_name: None,
        amount,
        currency_code: Some("USD".to_string()),
        date: date.parse().unwrap(),
        category: Some(TransactionCategory {
            primary: "GENERAL_MERCHANDISE".to_string(),
            detailed: None,
        }),
        payment_channel: Some("in store".to_string()),
        transaction_type: Some("place".to_string()),
    }
}
