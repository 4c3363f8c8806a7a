use sqlx::{Pool, QueryBuilder, Row, Sqlite};
use std::collections::HashSet;
use tracing::debug;

use crate::models::{Address, AddressMap};
use crate::store::StoreError;

// Keeps each IN (...) list well under SQLite's bound-parameter limit.
const RESOLVE_CHUNK_SIZE: usize = 500;

/// Looks up metadata for every address in the set. Addresses with no row are
/// simply absent from the result.
pub async fn find_address_map(pool: &Pool<Sqlite>, addresses: &HashSet<String>) -> Result<AddressMap, StoreError> {
    let mut address_map = AddressMap::with_capacity(addresses.len());
    if addresses.is_empty() {
        return Ok(address_map);
    }

    let hashes: Vec<&str> = addresses.iter().map(String::as_str).collect();
    for chunk in hashes.chunks(RESOLVE_CHUNK_SIZE) {
        let mut builder = QueryBuilder::<Sqlite>::new(
            "SELECT hash, alias, balance, nonce, address_type, created_at FROM addresses WHERE hash IN (",
        );
        let mut separated = builder.separated(", ");
        for hash in chunk {
            separated.push_bind(*hash);
        }
        separated.push_unseparated(")");

        let rows = builder.build().fetch_all(pool).await?;
        for row in rows {
            let address = Address {
                hash: row.try_get("hash")?,
                alias: row.try_get("alias")?,
                balance: row.try_get("balance")?,
                nonce: row.try_get("nonce")?,
                address_type: row.try_get("address_type")?,
                created_at: row.try_get("created_at")?,
            };
            address_map.insert(address.hash.clone(), address);
        }
    }

    debug!("Resolved {} of {} addresses", address_map.len(), addresses.len());
    Ok(address_map)
}
