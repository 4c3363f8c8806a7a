use sqlx::sqlite::SqliteRow;
use sqlx::{Pool, Row, Sqlite};

use crate::models::{Transaction, TransactionStatus};
use crate::service::pagination::PageRequest;
use crate::store::StoreError;

const SELECT_TRANSACTION: &str = "SELECT hash, block_height, from_address, to_address, value, nonce, \
     gas_price, gas_limit, gas_used, tx_type, data, timestamp, status FROM transactions";

const ORDER_TRANSACTIONS: &str = "ORDER BY block_height DESC, timestamp DESC, hash ASC LIMIT ? OFFSET ?";

pub async fn get_transaction(pool: &Pool<Sqlite>, hash: &str) -> Result<Option<Transaction>, StoreError> {
    let row = sqlx::query(&format!("{} WHERE hash = ?", SELECT_TRANSACTION))
        .bind(hash)
        .fetch_optional(pool)
        .await?;

    row.as_ref().map(transaction_from_row).transpose()
}

pub async fn count_by_block(pool: &Pool<Sqlite>, height: i64) -> Result<u64, StoreError> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM transactions WHERE block_height = ?")
        .bind(height)
        .fetch_one(pool)
        .await?;

    Ok(count.max(0) as u64)
}

pub async fn count_by_address(pool: &Pool<Sqlite>, address: &str) -> Result<u64, StoreError> {
    let count: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM transactions WHERE from_address = ? OR to_address = ?")
            .bind(address)
            .bind(address)
            .fetch_one(pool)
            .await?;

    Ok(count.max(0) as u64)
}

pub async fn count_all(pool: &Pool<Sqlite>) -> Result<u64, StoreError> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM transactions")
        .fetch_one(pool)
        .await?;

    Ok(count.max(0) as u64)
}

pub async fn page_by_block(
    pool: &Pool<Sqlite>,
    height: i64,
    page: PageRequest,
) -> Result<Vec<Transaction>, StoreError> {
    let rows = sqlx::query(&format!("{} WHERE block_height = ? {}", SELECT_TRANSACTION, ORDER_TRANSACTIONS))
        .bind(height)
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(pool)
        .await?;

    rows.iter().map(transaction_from_row).collect()
}

pub async fn page_by_address(
    pool: &Pool<Sqlite>,
    address: &str,
    page: PageRequest,
) -> Result<Vec<Transaction>, StoreError> {
    let rows = sqlx::query(&format!(
        "{} WHERE from_address = ? OR to_address = ? {}",
        SELECT_TRANSACTION, ORDER_TRANSACTIONS
    ))
    .bind(address)
    .bind(address)
    .bind(page.limit())
    .bind(page.offset())
    .fetch_all(pool)
    .await?;

    rows.iter().map(transaction_from_row).collect()
}

pub async fn page_all(pool: &Pool<Sqlite>, page: PageRequest) -> Result<Vec<Transaction>, StoreError> {
    let rows = sqlx::query(&format!("{} {}", SELECT_TRANSACTION, ORDER_TRANSACTIONS))
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(pool)
        .await?;

    rows.iter().map(transaction_from_row).collect()
}

fn transaction_from_row(row: &SqliteRow) -> Result<Transaction, StoreError> {
    let hash: String = row.try_get("hash")?;
    let code: i64 = row.try_get("status")?;
    let status = TransactionStatus::from_code(code).ok_or_else(|| StoreError::MalformedRecord {
        hash: hash.clone(),
        reason: format!("unknown status code {}", code),
    })?;

    Ok(Transaction {
        hash,
        block_height: row.try_get("block_height")?,
        from: row.try_get("from_address")?,
        to: row.try_get("to_address")?,
        value: row.try_get("value")?,
        nonce: row.try_get("nonce")?,
        gas_price: row.try_get("gas_price")?,
        gas_limit: row.try_get("gas_limit")?,
        gas_used: row.try_get("gas_used")?,
        tx_type: row.try_get("tx_type")?,
        data: row.try_get("data")?,
        timestamp: row.try_get("timestamp")?,
        status,
    })
}
