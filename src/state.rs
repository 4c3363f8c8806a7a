use std::sync::Arc;

use crate::config::Config;
use crate::service::{PendingTransactionAggregator, TransactionAggregator, TransactionUnifier};
use crate::store::{AddressResolver, TransactionStore};

pub struct AppState {
    pub config: Config,
    pub transactions: TransactionAggregator,
    pub unifier: TransactionUnifier,
    pub pending: PendingTransactionAggregator,
}

impl AppState {
    pub fn new(config: Config, store: Arc<dyn TransactionStore>, resolver: Arc<dyn AddressResolver>) -> Self {
        let paging = config.paging();

        Self {
            transactions: TransactionAggregator::new(store.clone(), resolver.clone(), paging),
            unifier: TransactionUnifier::new(store.clone(), resolver),
            pending: PendingTransactionAggregator::new(store, paging),
            config,
        }
    }
}
