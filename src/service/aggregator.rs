use std::collections::HashSet;
use std::sync::Arc;

use tracing::{debug, info};

use crate::models::{Scope, Transaction, TransactionList};
use crate::service::error::ExplorerError;
use crate::service::pagination::{PageRequest, Paging};
use crate::store::{AddressResolver, StoreError, TransactionStore};

/// Lists confirmed transactions by block, by address, or unscoped, and
/// decorates the page with the metadata of every participant address.
#[derive(Clone)]
pub struct TransactionAggregator {
    store: Arc<dyn TransactionStore>,
    resolver: Arc<dyn AddressResolver>,
    paging: Paging,
}

impl TransactionAggregator {
    pub fn new(store: Arc<dyn TransactionStore>, resolver: Arc<dyn AddressResolver>, paging: Paging) -> Self {
        Self { store, resolver, paging }
    }

    pub async fn list(
        &self,
        block: Option<i64>,
        address: Option<&str>,
        page: i64,
    ) -> Result<TransactionList, ExplorerError> {
        let scope = Scope::classify(block, address);
        let request = self.paging.request(page);

        info!(
            "Listing transactions, scope: {}, page: {} (requested {})",
            scope.tag(),
            request.page,
            page
        );

        // Count and page are separate reads and may disagree under concurrent writes.
        let (total_count, transactions) =
            futures::try_join!(self.count(&scope), self.page(&scope, request))?;

        let addresses = collect_addresses(&transactions);
        debug!("Resolving {} distinct addresses for {} transactions", addresses.len(), transactions.len());
        let address_map = self.resolver.resolve_many(&addresses).await?;

        Ok(TransactionList {
            scope,
            total_count,
            transactions,
            address_map,
            current_page: request.page,
            total_pages: self.paging.total_pages(total_count),
        })
    }

    async fn count(&self, scope: &Scope) -> Result<u64, StoreError> {
        match scope {
            Scope::Block { height } => self.store.count_by_block(*height).await,
            Scope::Address { address } => self.store.count_by_address(address).await,
            Scope::Total => self.store.count_all().await,
        }
    }

    async fn page(&self, scope: &Scope, request: PageRequest) -> Result<Vec<Transaction>, StoreError> {
        match scope {
            Scope::Block { height } => self.store.page_by_block(*height, request).await,
            Scope::Address { address } => self.store.page_by_address(address, request).await,
            Scope::Total => self.store.page_all(request).await,
        }
    }
}

/// Distinct `from` and `to` values of the page. Empty values are kept; the
/// resolver simply finds nothing for them.
pub fn collect_addresses(transactions: &[Transaction]) -> HashSet<String> {
    transactions
        .iter()
        .flat_map(|txn| [txn.from.clone(), txn.to.clone()])
        .collect()
}
