use std::sync::Arc;

use tracing::info;

use crate::models::{PendingScope, PendingTransaction, PendingTransactionList};
use crate::service::error::ExplorerError;
use crate::service::pagination::{PageRequest, Paging};
use crate::store::{StoreError, TransactionStore};

/// Lists pending transactions by address or unscoped. Unlike the confirmed
/// listing, the page is returned without address metadata.
#[derive(Clone)]
pub struct PendingTransactionAggregator {
    store: Arc<dyn TransactionStore>,
    paging: Paging,
}

impl PendingTransactionAggregator {
    pub fn new(store: Arc<dyn TransactionStore>, paging: Paging) -> Self {
        Self { store, paging }
    }

    pub async fn list_pending(
        &self,
        address: Option<&str>,
        page: i64,
    ) -> Result<PendingTransactionList, ExplorerError> {
        let scope = PendingScope::classify(address);
        let request = self.paging.request(page);

        info!("Listing pending transactions, scope: {}, page: {}", scope.tag(), request.page);

        let (total_count, transactions) =
            futures::try_join!(self.count(&scope), self.page(&scope, request))?;

        Ok(PendingTransactionList {
            scope,
            address: address.map(str::to_string),
            total_count,
            transactions,
            current_page: request.page,
            total_pages: self.paging.total_pages(total_count),
        })
    }

    async fn count(&self, scope: &PendingScope) -> Result<u64, StoreError> {
        match scope {
            PendingScope::Address { address } => self.store.count_pending_by_address(address).await,
            PendingScope::Total => self.store.count_pending_all().await,
        }
    }

    async fn page(&self, scope: &PendingScope, request: PageRequest) -> Result<Vec<PendingTransaction>, StoreError> {
        match scope {
            PendingScope::Address { address } => self.store.page_pending_by_address(address, request).await,
            PendingScope::Total => self.store.page_pending_all(request).await,
        }
    }
}
