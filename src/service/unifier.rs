use std::collections::HashSet;
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::models::{PendingTransaction, Transaction, TransactionDetail};
use crate::service::error::{DegradedResult, ExplorerError};
use crate::store::{AddressResolver, TransactionStore};

/// Resolves a hash against the confirmed store first and the pending store
/// second, returning a single transaction-shaped view either way.
#[derive(Clone)]
pub struct TransactionUnifier {
    store: Arc<dyn TransactionStore>,
    resolver: Arc<dyn AddressResolver>,
}

impl TransactionUnifier {
    pub fn new(store: Arc<dyn TransactionStore>, resolver: Arc<dyn AddressResolver>) -> Self {
        Self { store, resolver }
    }

    pub async fn get_by_hash(&self, hash: &str) -> Result<TransactionDetail, ExplorerError> {
        let (transaction, pending, degraded) = match self.store.get_confirmed_by_hash(hash).await? {
            Some(txn) => {
                debug!("Found confirmed transaction {}", hash);
                (txn, false, false)
            }
            None => {
                let pending_txn = self
                    .store
                    .get_pending_by_hash(hash)
                    .await?
                    .ok_or_else(|| ExplorerError::NotFound(hash.to_string()))?;

                info!("Transaction {} is pending", hash);
                let (view, degraded) = unify_pending(&pending_txn);
                if let Some(report) = &degraded {
                    warn!("{}", report);
                }
                (view, true, degraded.is_some())
            }
        };

        let addresses: HashSet<String> = [transaction.from.clone(), transaction.to.clone()].into_iter().collect();
        let address_map = self.resolver.resolve_many(&addresses).await?;

        Ok(TransactionDetail {
            transaction,
            pending,
            degraded,
            address_map,
        })
    }
}

/// Projects a pending record into the confirmed shape.
///
/// Shared fields are copied, status is forced to pending and confirmed-only
/// fields stay zero. Fields that could not be converted are left at zero as
/// well and reported in the returned [`DegradedResult`].
pub fn unify_pending(pending: &PendingTransaction) -> (Transaction, Option<DegradedResult>) {
    let mut failed = Vec::new();

    let gas_limit = match pending.gas_limit.trim().parse::<i64>() {
        Ok(limit) => limit,
        Err(_) => {
            failed.push("gas_limit");
            0
        }
    };

    let view = Transaction {
        hash: pending.hash.clone(),
        from: pending.from.clone(),
        to: pending.to.clone(),
        value: pending.value.clone(),
        nonce: pending.nonce,
        gas_price: pending.gas_price.clone(),
        gas_limit,
        tx_type: pending.tx_type.clone(),
        data: pending.data.clone(),
        timestamp: pending.timestamp,
        status: pending.status(),
        ..Transaction::default()
    };

    let degraded = (!failed.is_empty()).then(|| DegradedResult {
        hash: pending.hash.clone(),
        fields: failed,
    });

    (view, degraded)
}
