//! GetStatsHandler - Query handler for early access capacity.

use crate::application::ServiceError;
use crate::domain::early_access::{CapacityStats, EarlyAccessRecord};
use crate::ports::{Filter, StoreHandle};

/// Query for the early access counter.
#[derive(Debug, Clone, Copy, Default)]
pub struct GetStatsQuery;

/// Handler reporting how many spots remain under the signup cap.
///
/// With no store configured the total is zero and the query succeeds.
pub struct GetStatsHandler {
    store: StoreHandle,
}

impl GetStatsHandler {
    pub fn new(store: StoreHandle) -> Self {
        Self { store }
    }

    pub async fn handle(&self, _query: GetStatsQuery) -> Result<CapacityStats, ServiceError> {
        let total = self
            .store
            .count(EarlyAccessRecord::COLLECTION, &Filter::all())
            .await?;
        Ok(CapacityStats::from_total(total))
    }
}
