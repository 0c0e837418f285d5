// Module declarations
pub(crate) mod transactions_filter;
pub(crate) mod transactions_model;

// Re-export the public interface
pub use transactions_filter::{account_display_name, filter_transactions, TransactionFilter};
pub use transactions_model::{sort_newest_first, Transaction, TransactionCategory};
