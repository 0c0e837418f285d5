use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use futures::future::join_all;
use log::{debug, error};

use super::aggregator_model::FeedSnapshot;
use crate::accounts::Account;
use crate::connect::{ConnectError, FinancialDataProvider, Item};
use crate::transactions::{sort_newest_first, Transaction};

/// Per-item transaction fetch bound for the full feed.
pub const DEFAULT_FETCH_LIMIT: usize = 100;
/// Per-item transaction fetch bound for portfolio-scoped loads.
pub const DEFAULT_SCOPED_FETCH_LIMIT: usize = 50;

/// Orchestrates fetching from the remote data source and merging per-item
/// results into unified collections.
///
/// Every per-item fetch is failure-isolated: an error is logged and the item
/// contributes nothing, but processing of the remaining items continues. The
/// only fatal condition is the item listing itself failing, which yields an
/// empty snapshot.
pub struct AggregatorService {
    provider: Arc<dyn FinancialDataProvider>,
    fetch_limit: usize,
    scoped_fetch_limit: usize,
}

struct ItemFeed {
    item_id: String,
    accounts: Result<Vec<Account>, ConnectError>,
    transactions: Result<Vec<Transaction>, ConnectError>,
}

impl AggregatorService {
    /// Creates a new AggregatorService with the injected data source.
    pub fn new(provider: Arc<dyn FinancialDataProvider>) -> Self {
        Self {
            provider,
            fetch_limit: DEFAULT_FETCH_LIMIT,
            scoped_fetch_limit: DEFAULT_SCOPED_FETCH_LIMIT,
        }
    }

    pub fn with_fetch_limit(mut self, limit: usize) -> Self {
        self.fetch_limit = limit;
        self
    }

    pub fn with_scoped_fetch_limit(mut self, limit: usize) -> Self {
        self.scoped_fetch_limit = limit;
        self
    }

    /// Loads and merges accounts and transactions across all linked items.
    pub async fn load_all(&self) -> FeedSnapshot {
        let items = match self.provider.list_items().await {
            Ok(items) => items,
            Err(e) => {
                error!("unable to load items: {}", e);
                return FeedSnapshot::default();
            }
        };
        debug!("loading feed for {} item(s)", items.len());

        let feeds = join_all(items.iter().map(|item| self.load_item(item))).await;

        let mut accounts: HashMap<String, Account> = HashMap::new();
        let mut transactions: Vec<Transaction> = Vec::new();
        let mut failed_sources = 0;

        for feed in feeds {
            match feed.accounts {
                Ok(batch) => {
                    for account in batch {
                        accounts.insert(account.account_id.clone(), account);
                    }
                }
                Err(e) => {
                    error!("unable to load accounts for item {}: {}", feed.item_id, e);
                    failed_sources += 1;
                }
            }
            match feed.transactions {
                Ok(batch) => transactions.extend(batch),
                Err(e) => {
                    error!(
                        "unable to load transactions for item {}: {}",
                        feed.item_id, e
                    );
                    failed_sources += 1;
                }
            }
        }

        sort_newest_first(&mut transactions);

        FeedSnapshot {
            accounts,
            transactions,
            failed_sources,
            total_sources: items.len() * 2,
        }
    }

    /// Loads the accounts available for selection, in item order.
    pub async fn load_accounts(&self) -> Vec<Account> {
        let items = match self.provider.list_items().await {
            Ok(items) => items,
            Err(e) => {
                error!("unable to load items: {}", e);
                return Vec::new();
            }
        };

        let fetches = items
            .iter()
            .map(|item| self.provider.list_accounts(&item.item_id));
        let results = join_all(fetches).await;

        let mut accounts = Vec::new();
        for (item, result) in items.iter().zip(results) {
            match result {
                Ok(batch) => accounts.extend(batch),
                Err(e) => error!("unable to load accounts for item {}: {}", item.item_id, e),
            }
        }
        accounts
    }

    /// Loads the transactions for the given portfolio selection.
    ///
    /// Issues one transaction fetch per distinct item represented in the
    /// selection and keeps only transactions belonging to selected accounts.
    /// An empty selection returns empty without fetching.
    pub async fn load_scoped(&self, selection: &[Account]) -> Vec<Transaction> {
        if selection.is_empty() {
            return Vec::new();
        }

        // Group selected account ids by owning item, preserving first-seen
        // item order.
        let mut item_order: Vec<String> = Vec::new();
        let mut grouped: HashMap<String, HashSet<String>> = HashMap::new();
        for account in selection {
            let group = grouped.entry(account.item_id.clone()).or_insert_with(|| {
                item_order.push(account.item_id.clone());
                HashSet::new()
            });
            group.insert(account.account_id.clone());
        }

        let fetches = item_order.iter().map(|item_id| {
            self.provider
                .list_transactions(item_id, self.scoped_fetch_limit)
        });
        let results = join_all(fetches).await;

        let mut transactions = Vec::new();
        for (item_id, result) in item_order.iter().zip(results) {
            match result {
                Ok(batch) => {
                    let selected = &grouped[item_id];
                    transactions
                        .extend(batch.into_iter().filter(|tx| selected.contains(&tx.account_id)));
                }
                Err(e) => error!("unable to load transactions for item {}: {}", item_id, e),
            }
        }

        sort_newest_first(&mut transactions);
        transactions
    }

    async fn load_item(&self, item: &Item) -> ItemFeed {
        let (accounts, transactions) = tokio::join!(
            self.provider.list_accounts(&item.item_id),
            self.provider.list_transactions(&item.item_id, self.fetch_limit),
        );
        ItemFeed {
            item_id: item.item_id.clone(),
            accounts,
            transactions,
        }
    }
}
