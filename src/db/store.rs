use async_trait::async_trait;
use sqlx::SqlitePool;
use std::collections::HashSet;

use crate::db::{address, pending, transaction};
use crate::models::{AddressMap, PendingTransaction, Transaction};
use crate::service::pagination::PageRequest;
use crate::store::{AddressResolver, StoreError, TransactionStore};

/// SQLite-backed transaction store and address resolver sharing one pool.
#[derive(Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl TransactionStore for SqliteStore {
    async fn count_by_block(&self, height: i64) -> Result<u64, StoreError> {
        transaction::count_by_block(&self.pool, height).await
    }

    async fn count_by_address(&self, address: &str) -> Result<u64, StoreError> {
        transaction::count_by_address(&self.pool, address).await
    }

    async fn count_all(&self) -> Result<u64, StoreError> {
        transaction::count_all(&self.pool).await
    }

    async fn page_by_block(&self, height: i64, page: PageRequest) -> Result<Vec<Transaction>, StoreError> {
        transaction::page_by_block(&self.pool, height, page).await
    }

    async fn page_by_address(&self, address: &str, page: PageRequest) -> Result<Vec<Transaction>, StoreError> {
        transaction::page_by_address(&self.pool, address, page).await
    }

    async fn page_all(&self, page: PageRequest) -> Result<Vec<Transaction>, StoreError> {
        transaction::page_all(&self.pool, page).await
    }

    async fn count_pending_by_address(&self, address: &str) -> Result<u64, StoreError> {
        pending::count_by_address(&self.pool, address).await
    }

    async fn count_pending_all(&self) -> Result<u64, StoreError> {
        pending::count_all(&self.pool).await
    }

    async fn page_pending_by_address(
        &self,
        address: &str,
        page: PageRequest,
    ) -> Result<Vec<PendingTransaction>, StoreError> {
        pending::page_by_address(&self.pool, address, page).await
    }

    async fn page_pending_all(&self, page: PageRequest) -> Result<Vec<PendingTransaction>, StoreError> {
        pending::page_all(&self.pool, page).await
    }

    async fn get_confirmed_by_hash(&self, hash: &str) -> Result<Option<Transaction>, StoreError> {
        transaction::get_transaction(&self.pool, hash).await
    }

    async fn get_pending_by_hash(&self, hash: &str) -> Result<Option<PendingTransaction>, StoreError> {
        pending::get_pending_transaction(&self.pool, hash).await
    }
}

#[async_trait]
impl AddressResolver for SqliteStore {
    async fn resolve_many(&self, addresses: &HashSet<String>) -> Result<AddressMap, StoreError> {
        address::find_address_map(&self.pool, addresses).await
    }
}
