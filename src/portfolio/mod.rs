// Module declarations
pub(crate) mod portfolio_service;

// Re-export the public interface
pub use portfolio_service::PortfolioService;
