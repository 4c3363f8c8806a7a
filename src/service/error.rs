use thiserror::Error;

use crate::store::StoreError;

#[derive(Error, Debug)]
pub enum ExplorerError {
    #[error("Store unavailable: {0}")]
    StoreUnavailable(#[from] StoreError),

    #[error("Transaction not found: {0}")]
    NotFound(String),
}

/// Some fields could not be copied from a pending record into the unified
/// view. Never propagated: the unifier logs it and returns the partial view.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Degraded result for {hash}: could not copy {}", .fields.join(", "))]
pub struct DegradedResult {
    pub hash: String,
    pub fields: Vec<&'static str>,
}
