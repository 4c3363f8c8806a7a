use sqlx::sqlite::SqliteRow;
use sqlx::{Pool, Row, Sqlite};

use crate::models::PendingTransaction;
use crate::service::pagination::PageRequest;
use crate::store::StoreError;

const SELECT_PENDING: &str = "SELECT hash, from_address, to_address, value, nonce, gas_price, \
     gas_limit, tx_type, data, timestamp FROM pending_transactions";

const ORDER_PENDING: &str = "ORDER BY timestamp DESC, hash ASC LIMIT ? OFFSET ?";

pub async fn get_pending_transaction(
    pool: &Pool<Sqlite>,
    hash: &str,
) -> Result<Option<PendingTransaction>, StoreError> {
    let row = sqlx::query(&format!("{} WHERE hash = ?", SELECT_PENDING))
        .bind(hash)
        .fetch_optional(pool)
        .await?;

    Ok(row.as_ref().map(pending_from_row).transpose()?)
}

pub async fn count_by_address(pool: &Pool<Sqlite>, address: &str) -> Result<u64, StoreError> {
    let count: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM pending_transactions WHERE from_address = ? OR to_address = ?",
    )
    .bind(address)
    .bind(address)
    .fetch_one(pool)
    .await?;

    Ok(count.max(0) as u64)
}

pub async fn count_all(pool: &Pool<Sqlite>) -> Result<u64, StoreError> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM pending_transactions")
        .fetch_one(pool)
        .await?;

    Ok(count.max(0) as u64)
}

pub async fn page_by_address(
    pool: &Pool<Sqlite>,
    address: &str,
    page: PageRequest,
) -> Result<Vec<PendingTransaction>, StoreError> {
    let rows = sqlx::query(&format!(
        "{} WHERE from_address = ? OR to_address = ? {}",
        SELECT_PENDING, ORDER_PENDING
    ))
    .bind(address)
    .bind(address)
    .bind(page.limit())
    .bind(page.offset())
    .fetch_all(pool)
    .await?;

    Ok(rows.iter().map(pending_from_row).collect::<Result<_, _>>()?)
}

pub async fn page_all(pool: &Pool<Sqlite>, page: PageRequest) -> Result<Vec<PendingTransaction>, StoreError> {
    let rows = sqlx::query(&format!("{} {}", SELECT_PENDING, ORDER_PENDING))
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(pool)
        .await?;

    Ok(rows.iter().map(pending_from_row).collect::<Result<_, _>>()?)
}

fn pending_from_row(row: &SqliteRow) -> Result<PendingTransaction, sqlx::Error> {
    Ok(PendingTransaction {
        hash: row.try_get("hash")?,
        from: row.try_get("from_address")?,
        to: row.try_get("to_address")?,
        value: row.try_get("value")?,
        nonce: row.try_get("nonce")?,
        gas_price: row.try_get("gas_price")?,
        gas_limit: row.try_get("gas_limit")?,
        tx_type: row.try_get("tx_type")?,
        data: row.try_get("data")?,
        timestamp: row.try_get("timestamp")?,
    })
}
