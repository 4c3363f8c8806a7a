pub mod address;
pub mod connection;
pub mod pending;
pub mod store;
pub mod transaction;

pub use store::SqliteStore;

pub const INIT_SCHEMA: &str = r#"
-- Confirmed transactions
CREATE TABLE IF NOT EXISTS transactions (
    hash TEXT PRIMARY KEY,
    block_height INTEGER NOT NULL,
    from_address TEXT NOT NULL,
    to_address TEXT NOT NULL,
    value TEXT NOT NULL DEFAULT '0',
    nonce INTEGER NOT NULL DEFAULT 0,
    gas_price TEXT NOT NULL DEFAULT '0',
    gas_limit INTEGER NOT NULL DEFAULT 0,
    gas_used INTEGER NOT NULL DEFAULT 0,
    tx_type TEXT NOT NULL DEFAULT 'binary',
    data TEXT,
    timestamp INTEGER NOT NULL,
    status INTEGER NOT NULL
);

-- Submitted transactions not yet in a block
CREATE TABLE IF NOT EXISTS pending_transactions (
    hash TEXT PRIMARY KEY,
    from_address TEXT NOT NULL,
    to_address TEXT NOT NULL,
    value TEXT NOT NULL DEFAULT '0',
    nonce INTEGER NOT NULL DEFAULT 0,
    gas_price TEXT NOT NULL DEFAULT '0',
    gas_limit TEXT NOT NULL DEFAULT '0',
    tx_type TEXT NOT NULL DEFAULT 'binary',
    data TEXT,
    timestamp INTEGER NOT NULL
);

-- Address metadata
CREATE TABLE IF NOT EXISTS addresses (
    hash TEXT PRIMARY KEY,
    alias TEXT,
    balance TEXT NOT NULL DEFAULT '0',
    nonce INTEGER NOT NULL DEFAULT 0,
    address_type INTEGER NOT NULL DEFAULT 0,
    created_at INTEGER NOT NULL DEFAULT 0
);

-- Create indexes for efficient querying
CREATE INDEX IF NOT EXISTS idx_transactions_block ON transactions(block_height);
CREATE INDEX IF NOT EXISTS idx_transactions_from ON transactions(from_address);
CREATE INDEX IF NOT EXISTS idx_transactions_to ON transactions(to_address);
CREATE INDEX IF NOT EXISTS idx_transactions_order ON transactions(block_height DESC, timestamp DESC);
CREATE INDEX IF NOT EXISTS idx_pending_from ON pending_transactions(from_address);
CREATE INDEX IF NOT EXISTS idx_pending_to ON pending_transactions(to_address);
CREATE INDEX IF NOT EXISTS idx_pending_time ON pending_transactions(timestamp);
"#;
