//! Shared fixtures: an in-memory store and helpers to seed SQLite.

use async_trait::async_trait;
use sqlx::SqlitePool;
use std::collections::HashSet;
use std::sync::Mutex;

use crate::models::{Address, AddressMap, PendingTransaction, Transaction, TransactionStatus};
use crate::service::pagination::PageRequest;
use crate::store::{AddressResolver, StoreError, TransactionStore};

pub const ADDR_A: &str = "n1FkntVUMPAsESuCAAPK711omQk19JotBjM";
pub const ADDR_B: &str = "n1JNHZJEUvfBYfjDRD14Q73FX62nJAzXkMR";
pub const ADDR_C: &str = "n1Kjom3J4KPsHKKzZ2xtt8Lc9W5pRDjeLcW";
pub const ADDR_D: &str = "n1TV3sU6jyzR4rJ1D7jCAmtVGSntJagXZHC";

pub fn confirmed(hash: &str, block_height: i64, from: &str, to: &str) -> Transaction {
    Transaction {
        hash: hash.to_string(),
        block_height,
        from: from.to_string(),
        to: to.to_string(),
        value: "1000000000000000000".to_string(),
        nonce: 1,
        gas_price: "1000000".to_string(),
        gas_limit: 200000,
        gas_used: 20000,
        tx_type: "binary".to_string(),
        data: None,
        timestamp: 1_527_000_000 + block_height,
        status: TransactionStatus::Success,
    }
}

pub fn pending(hash: &str, from: &str, to: &str) -> PendingTransaction {
    PendingTransaction {
        hash: hash.to_string(),
        from: from.to_string(),
        to: to.to_string(),
        value: "42".to_string(),
        nonce: 7,
        gas_price: "1000000".to_string(),
        gas_limit: "200000".to_string(),
        tx_type: "call".to_string(),
        data: Some("{\"Function\":\"save\"}".to_string()),
        timestamp: 1_527_100_000,
    }
}

pub fn address(hash: &str, alias: Option<&str>) -> Address {
    Address {
        hash: hash.to_string(),
        alias: alias.map(str::to_string),
        balance: "5000".to_string(),
        nonce: 3,
        address_type: 0,
        created_at: 1_526_000_000,
    }
}

/// In-memory store that records every address set it is asked to resolve.
#[derive(Default)]
pub struct MemoryStore {
    pub confirmed: Vec<Transaction>,
    pub pending: Vec<PendingTransaction>,
    pub addresses: AddressMap,
    pub unavailable: bool,
    pub resolve_calls: Mutex<Vec<HashSet<String>>>,
}

impl MemoryStore {
    pub fn with_addresses(mut self, addresses: &[Address]) -> Self {
        for addr in addresses {
            self.addresses.insert(addr.hash.clone(), addr.clone());
        }
        self
    }

    pub fn resolve_calls(&self) -> Vec<HashSet<String>> {
        self.resolve_calls.lock().unwrap().clone()
    }

    fn check(&self) -> Result<(), StoreError> {
        if self.unavailable {
            return Err(StoreError::Unavailable("connection refused".to_string()));
        }
        Ok(())
    }

    fn confirmed_where(&self, pred: impl Fn(&Transaction) -> bool) -> Vec<Transaction> {
        self.confirmed.iter().filter(|t| pred(t)).cloned().collect()
    }

    fn pending_where(&self, pred: impl Fn(&PendingTransaction) -> bool) -> Vec<PendingTransaction> {
        self.pending.iter().filter(|t| pred(t)).cloned().collect()
    }
}

fn slice<T>(items: Vec<T>, page: PageRequest) -> Vec<T> {
    items
        .into_iter()
        .skip(page.offset() as usize)
        .take(page.limit() as usize)
        .collect()
}

#[async_trait]
impl TransactionStore for MemoryStore {
    async fn count_by_block(&self, height: i64) -> Result<u64, StoreError> {
        self.check()?;
        Ok(self.confirmed_where(|t| t.block_height == height).len() as u64)
    }

    async fn count_by_address(&self, address: &str) -> Result<u64, StoreError> {
        self.check()?;
        Ok(self.confirmed_where(|t| t.from == address || t.to == address).len() as u64)
    }

    async fn count_all(&self) -> Result<u64, StoreError> {
        self.check()?;
        Ok(self.confirmed.len() as u64)
    }

    async fn page_by_block(&self, height: i64, page: PageRequest) -> Result<Vec<Transaction>, StoreError> {
        self.check()?;
        Ok(slice(self.confirmed_where(|t| t.block_height == height), page))
    }

    async fn page_by_address(&self, address: &str, page: PageRequest) -> Result<Vec<Transaction>, StoreError> {
        self.check()?;
        Ok(slice(self.confirmed_where(|t| t.from == address || t.to == address), page))
    }

    async fn page_all(&self, page: PageRequest) -> Result<Vec<Transaction>, StoreError> {
        self.check()?;
        Ok(slice(self.confirmed.clone(), page))
    }

    async fn count_pending_by_address(&self, address: &str) -> Result<u64, StoreError> {
        self.check()?;
        Ok(self.pending_where(|t| t.from == address || t.to == address).len() as u64)
    }

    async fn count_pending_all(&self) -> Result<u64, StoreError> {
        self.check()?;
        Ok(self.pending.len() as u64)
    }

    async fn page_pending_by_address(
        &self,
        address: &str,
        page: PageRequest,
    ) -> Result<Vec<PendingTransaction>, StoreError> {
        self.check()?;
        Ok(slice(self.pending_where(|t| t.from == address || t.to == address), page))
    }

    async fn page_pending_all(&self, page: PageRequest) -> Result<Vec<PendingTransaction>, StoreError> {
        self.check()?;
        Ok(slice(self.pending.clone(), page))
    }

    async fn get_confirmed_by_hash(&self, hash: &str) -> Result<Option<Transaction>, StoreError> {
        self.check()?;
        Ok(self.confirmed.iter().find(|t| t.hash == hash).cloned())
    }

    async fn get_pending_by_hash(&self, hash: &str) -> Result<Option<PendingTransaction>, StoreError> {
        self.check()?;
        Ok(self.pending.iter().find(|t| t.hash == hash).cloned())
    }
}

#[async_trait]
impl AddressResolver for MemoryStore {
    async fn resolve_many(&self, addresses: &HashSet<String>) -> Result<AddressMap, StoreError> {
        self.check()?;
        self.resolve_calls.lock().unwrap().push(addresses.clone());
        Ok(addresses
            .iter()
            .filter_map(|a| self.addresses.get(a).map(|meta| (a.clone(), meta.clone())))
            .collect())
    }
}

// SQLite seeding. The service has no write path, so tests insert rows directly.

pub async fn insert_transactions(pool: &SqlitePool, transactions: &[Transaction]) {
    for txn in transactions {
        sqlx::query(
            "INSERT INTO transactions
             (hash, block_height, from_address, to_address, value, nonce, gas_price, gas_limit,
              gas_used, tx_type, data, timestamp, status)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&txn.hash)
        .bind(txn.block_height)
        .bind(&txn.from)
        .bind(&txn.to)
        .bind(&txn.value)
        .bind(txn.nonce)
        .bind(&txn.gas_price)
        .bind(txn.gas_limit)
        .bind(txn.gas_used)
        .bind(&txn.tx_type)
        .bind(&txn.data)
        .bind(txn.timestamp)
        .bind(txn.status.code())
        .execute(pool)
        .await
        .expect("insert transaction");
    }
}

pub async fn insert_pending(pool: &SqlitePool, transactions: &[PendingTransaction]) {
    for txn in transactions {
        sqlx::query(
            "INSERT INTO pending_transactions
             (hash, from_address, to_address, value, nonce, gas_price, gas_limit, tx_type, data, timestamp)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&txn.hash)
        .bind(&txn.from)
        .bind(&txn.to)
        .bind(&txn.value)
        .bind(txn.nonce)
        .bind(&txn.gas_price)
        .bind(&txn.gas_limit)
        .bind(&txn.tx_type)
        .bind(&txn.data)
        .bind(txn.timestamp)
        .execute(pool)
        .await
        .expect("insert pending transaction");
    }
}

pub async fn insert_addresses(pool: &SqlitePool, addresses: &[Address]) {
    for addr in addresses {
        sqlx::query(
            "INSERT INTO addresses (hash, alias, balance, nonce, address_type, created_at)
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(&addr.hash)
        .bind(&addr.alias)
        .bind(&addr.balance)
        .bind(addr.nonce)
        .bind(addr.address_type)
        .bind(addr.created_at)
        .execute(pool)
        .await
        .expect("insert address");
    }
}
