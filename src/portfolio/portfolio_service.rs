use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use log::debug;
use tokio::sync::RwLock;

use crate::accounts::Account;
use crate::aggregator::AggregatorService;
use crate::transactions::Transaction;

#[derive(Default)]
struct PortfolioState {
    selection: Vec<Account>,
    transactions: Vec<Transaction>,
}

/// Ordered, deduplicated set of user-selected accounts plus the scoped
/// transaction feed derived from it.
///
/// Every mutation settles only after the scoped feed has been recomputed
/// against the new selection, so observers always see a consistent
/// (selection, transactions) pair. Overlapping refreshes are resolved
/// last-request-wins: a refresh commits its result only if no newer refresh
/// has started by the time its fetch resolves.
pub struct PortfolioService {
    aggregator: Arc<AggregatorService>,
    state: RwLock<PortfolioState>,
    generation: AtomicU64,
}

impl PortfolioService {
    /// Creates a new PortfolioService with an empty selection.
    pub fn new(aggregator: Arc<AggregatorService>) -> Self {
        Self {
            aggregator,
            state: RwLock::new(PortfolioState::default()),
            generation: AtomicU64::new(0),
        }
    }

    /// The current selection, in insertion order.
    pub async fn selection(&self) -> Vec<Account> {
        self.state.read().await.selection.clone()
    }

    /// The scoped transaction feed for the current selection, newest first.
    pub async fn transactions(&self) -> Vec<Transaction> {
        self.state.read().await.transactions.clone()
    }

    pub async fn is_selected(&self, account_id: &str) -> bool {
        self.state
            .read()
            .await
            .selection
            .iter()
            .any(|account| account.account_id == account_id)
    }

    /// Adds an account to the selection and refreshes the scoped feed.
    /// Idempotent: adding an already-selected account is a no-op.
    pub async fn add(&self, account: Account) {
        {
            let mut state = self.state.write().await;
            if state
                .selection
                .iter()
                .any(|a| a.account_id == account.account_id)
            {
                debug!("account {} already in portfolio", account.account_id);
                return;
            }
            state.selection.push(account);
        }
        self.refresh().await;
    }

    /// Removes an account from the selection and refreshes the scoped feed.
    /// Removing an unselected account is a no-op and issues no fetch.
    pub async fn remove(&self, account_id: &str) {
        {
            let mut state = self.state.write().await;
            let before = state.selection.len();
            state.selection.retain(|a| a.account_id != account_id);
            if state.selection.len() == before {
                debug!("account {} not in portfolio", account_id);
                return;
            }
        }
        self.refresh().await;
    }

    /// Recomputes the scoped feed against the current selection. Stale
    /// in-flight refreshes are discarded by comparing generations at
    /// resolution time.
    async fn refresh(&self) {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let selection = self.state.read().await.selection.clone();
        let transactions = self.aggregator.load_scoped(&selection).await;

        if self.generation.load(Ordering::SeqCst) != generation {
            debug!("discarding stale scoped load (generation {})", generation);
            return;
        }
        self.state.write().await.transactions = transactions;
    }
}
