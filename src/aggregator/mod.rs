// Module declarations
pub(crate) mod aggregator_model;
pub(crate) mod aggregator_service;

// Re-export the public interface
pub use aggregator_model::FeedSnapshot;
pub use aggregator_service::{AggregatorService, DEFAULT_FETCH_LIMIT, DEFAULT_SCOPED_FETCH_LIMIT};
