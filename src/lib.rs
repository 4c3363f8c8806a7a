pub mod api;
pub mod config;
pub mod db;
pub mod models;
pub mod service;
pub mod state;
pub mod store;
pub mod validation;

#[cfg(test)]
pub mod tests;

// Re-export specific items for convenience
pub use api::error::ApiError;
pub use api::response::ApiResponse;
pub use api::route::{create_router, PendingTransactionsQuery, TransactionsQuery};
pub use db::SqliteStore;
pub use models::{PendingTransaction, Transaction};
pub use service::{ExplorerError, PendingTransactionAggregator, TransactionAggregator, TransactionUnifier};
pub use store::{AddressResolver, StoreError, TransactionStore};
