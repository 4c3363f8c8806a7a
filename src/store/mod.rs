//! Collaborator contracts consumed by the explorer service.
//!
//! The service never writes; it only reads the confirmed store, the pending
//! store and the address metadata through these traits. `crate::db` provides
//! the SQLite implementations.

use async_trait::async_trait;
use std::collections::HashSet;
use thiserror::Error;

use crate::models::{AddressMap, PendingTransaction, Transaction};
use crate::service::pagination::PageRequest;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Malformed record {hash}: {reason}")]
    MalformedRecord { hash: String, reason: String },

    /// For implementations not backed by sqlx to report an unreachable source.
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// Confirmed and pending transaction records.
#[async_trait]
pub trait TransactionStore: Send + Sync {
    async fn count_by_block(&self, height: i64) -> Result<u64, StoreError>;

    /// Counts transactions where `address` is the sender or the recipient.
    async fn count_by_address(&self, address: &str) -> Result<u64, StoreError>;

    async fn count_all(&self) -> Result<u64, StoreError>;

    async fn page_by_block(&self, height: i64, page: PageRequest) -> Result<Vec<Transaction>, StoreError>;

    async fn page_by_address(&self, address: &str, page: PageRequest) -> Result<Vec<Transaction>, StoreError>;

    async fn page_all(&self, page: PageRequest) -> Result<Vec<Transaction>, StoreError>;

    async fn count_pending_by_address(&self, address: &str) -> Result<u64, StoreError>;

    async fn count_pending_all(&self) -> Result<u64, StoreError>;

    async fn page_pending_by_address(
        &self,
        address: &str,
        page: PageRequest,
    ) -> Result<Vec<PendingTransaction>, StoreError>;

    async fn page_pending_all(&self, page: PageRequest) -> Result<Vec<PendingTransaction>, StoreError>;

    async fn get_confirmed_by_hash(&self, hash: &str) -> Result<Option<Transaction>, StoreError>;

    async fn get_pending_by_hash(&self, hash: &str) -> Result<Option<PendingTransaction>, StoreError>;
}

/// Bulk address metadata lookup.
#[async_trait]
pub trait AddressResolver: Send + Sync {
    /// Resolves every address in the set. Unknown addresses are left out of
    /// the returned map instead of failing the lookup.
    async fn resolve_many(&self, addresses: &HashSet<String>) -> Result<AddressMap, StoreError>;
}
