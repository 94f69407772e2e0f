use crate::search::{IncidentView, Page};
use moka::future::Cache;
use std::time::Duration;

/// Cache for fully shaped search envelopes, keyed by the serialized request
/// tuple
///
/// Population and eviction policy (capacity, TTL) are configuration; a hit
/// returns the stored envelope without re-running the pipeline.
#[derive(Clone)]
pub struct ResponseCache {
    cache: Cache<String, Page<IncidentView>>,
}

impl ResponseCache {
    pub fn new(max_capacity: u64, ttl: Duration) -> Self {
        let cache = Cache::builder()
            .max_capacity(max_capacity)
            .time_to_live(ttl)
            .build();

        Self { cache }
    }

    pub async fn get(&self, key: &str) -> Option<Page<IncidentView>> {
        self.cache.get(key).await
    }

    pub async fn insert(&self, key: String, value: Page<IncidentView>) {
        self.cache.insert(key, value).await;
    }

    pub async fn invalidate_all(&self) {
        self.cache.invalidate_all();
    }
}
