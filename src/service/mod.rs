pub mod aggregator;
pub mod error;
pub mod pagination;
pub mod pending;
pub mod unifier;

pub use aggregator::TransactionAggregator;
pub use error::{DegradedResult, ExplorerError};
pub use pagination::{PageRequest, Paging};
pub use pending::PendingTransactionAggregator;
pub use unifier::TransactionUnifier;
