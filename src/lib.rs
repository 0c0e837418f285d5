pub mod accounts;
pub mod aggregator;
pub mod connect;
pub mod portfolio;
pub mod transactions;

pub use accounts::Account;
pub use aggregator::{AggregatorService, FeedSnapshot};
pub use connect::{ConnectError, FinancialDataProvider, Item};
pub use portfolio::PortfolioService;
pub use transactions::{
    account_display_name, filter_transactions, sort_newest_first, Transaction,
    TransactionCategory, TransactionFilter,
};
