// Module declarations
pub(crate) mod connect_errors;
pub(crate) mod connect_model;
pub(crate) mod connect_traits;
pub mod providers;

// Re-export the public interface
pub use connect_errors::{ConnectError, Result};
pub use connect_model::Item;
pub use connect_traits::FinancialDataProvider;
pub use providers::RestProvider;
