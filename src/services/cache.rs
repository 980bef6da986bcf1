use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;

use crate::models::AnalysisFlow;
use crate::services::store::{ResumeStore, StoreError};

/// In-process cache of analysis flows keyed by id
///
/// Flows cannot be edited once created, so entries only leave the cache by
/// capacity eviction or TTL expiry.
#[derive(Clone)]
pub struct FlowCache {
    flows: moka::future::Cache<Uuid, Arc<AnalysisFlow>>,
}

impl FlowCache {
    pub fn new(max_entries: u64, ttl_secs: u64) -> Self {
        let flows = moka::future::CacheBuilder::new(max_entries)
            .time_to_live(Duration::from_secs(ttl_secs))
            .build();

        Self { flows }
    }

    pub async fn get(&self, id: &Uuid) -> Option<Arc<AnalysisFlow>> {
        self.flows.get(id).await
    }

    pub async fn insert(&self, flow: AnalysisFlow) -> Arc<AnalysisFlow> {
        let flow = Arc::new(flow);
        self.flows.insert(flow.id, Arc::clone(&flow)).await;
        flow
    }

    /// Return the cached flow, loading it from `store` on a miss
    pub async fn get_or_load(
        &self,
        id: Uuid,
        store: &dyn ResumeStore,
    ) -> Result<Arc<AnalysisFlow>, StoreError> {
        if let Some(flow) = self.get(&id).await {
            tracing::trace!("Flow cache hit: {}", id);
            return Ok(flow);
        }

        tracing::trace!("Flow cache miss: {}", id);
        let flow = store.get_flow(id).await?;
        Ok(self.insert(flow).await)
    }
}
