// Transaction, pending transaction and address records as read from the stores,
// plus the structured results returned by the explorer service.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Lifecycle status of a transaction, stored as an integer code.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    #[default]
    Failed,
    Success,
    Pending,
}

impl TransactionStatus {
    pub fn code(self) -> i64 {
        match self {
            Self::Failed => 0,
            Self::Success => 1,
            Self::Pending => 2,
        }
    }

    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Self::Failed),
            1 => Some(Self::Success),
            2 => Some(Self::Pending),
            _ => None,
        }
    }
}

/// A confirmed transaction, or a pending one projected into the same shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub hash: String,
    pub block_height: i64,
    pub from: String,
    pub to: String,
    pub value: String,
    pub nonce: i64,
    pub gas_price: String,
    pub gas_limit: i64,
    pub gas_used: i64,
    pub tx_type: String,
    pub data: Option<String>,
    pub timestamp: i64,
    pub status: TransactionStatus,
}

/// A submitted transaction that is not in any block yet.
///
/// The gas limit is kept as the submitted text; it is only interpreted when the
/// record is projected into a [`Transaction`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PendingTransaction {
    pub hash: String,
    pub from: String,
    pub to: String,
    pub value: String,
    pub nonce: i64,
    pub gas_price: String,
    pub gas_limit: String,
    pub tx_type: String,
    pub data: Option<String>,
    pub timestamp: i64,
}

impl PendingTransaction {
    pub fn status(&self) -> TransactionStatus {
        TransactionStatus::Pending
    }
}

/// Address metadata used to decorate transaction listings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub hash: String,
    pub alias: Option<String>,
    pub balance: String,
    pub nonce: i64,
    pub address_type: i64,
    pub created_at: i64,
}

pub type AddressMap = HashMap<String, Address>;

/// Filter dimension of a confirmed-transaction listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Scope {
    Block { height: i64 },
    Address { address: String },
    Total,
}

impl Scope {
    /// Block wins over address; an empty address counts as absent.
    pub fn classify(block: Option<i64>, address: Option<&str>) -> Self {
        match (block, address) {
            (Some(height), _) => Self::Block { height },
            (None, Some(address)) if !address.is_empty() => Self::Address {
                address: address.to_string(),
            },
            _ => Self::Total,
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            Self::Block { .. } => "block",
            Self::Address { .. } => "address",
            Self::Total => "total",
        }
    }
}

/// Filter dimension of a pending-transaction listing. Pending transactions are
/// not attached to a block, so there is no block variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PendingScope {
    Address { address: String },
    Total,
}

impl PendingScope {
    pub fn classify(address: Option<&str>) -> Self {
        match address {
            Some(address) if !address.is_empty() => Self::Address {
                address: address.to_string(),
            },
            _ => Self::Total,
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            Self::Address { .. } => "address",
            Self::Total => "total",
        }
    }
}

// Service results

#[derive(Debug, Serialize)]
pub struct TransactionList {
    pub scope: Scope,
    pub total_count: u64,
    pub transactions: Vec<Transaction>,
    pub address_map: AddressMap,
    pub current_page: u32,
    pub total_pages: u64,
}

#[derive(Debug, Serialize)]
pub struct TransactionDetail {
    pub transaction: Transaction,
    pub pending: bool,
    pub degraded: bool,
    pub address_map: AddressMap,
}

#[derive(Debug, Serialize)]
pub struct PendingTransactionList {
    pub scope: PendingScope,
    pub address: Option<String>,
    pub total_count: u64,
    pub transactions: Vec<PendingTransaction>,
    pub current_page: u32,
    pub total_pages: u64,
}
