// Module declarations
pub(crate) mod accounts_model;

// Re-export the public interface
pub use accounts_model::Account;
