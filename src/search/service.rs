//! Search pipeline: predicate composition, query execution, shaping,
//! response caching

use crate::error::Result;
use crate::models::Incident;
use crate::search::{shape_incident, IncidentFilter, IncidentView, Page, PageRequest, SortSpec};
use crate::state::{IncidentStore, ResponseCache};
use std::sync::Arc;

/// Placeholder for absent filter values in cache keys. Distinct from every
/// representable query-string value, including the empty string.
const ABSENT: &str = "\u{1}";

/// Cache-key field separator; cannot occur in a query parameter.
const KEY_SEPARATOR: &str = "\u{1f}";

/// The full parameter tuple of one search call
#[derive(Debug, Clone, PartialEq)]
pub struct SearchRequest {
    pub filter: IncidentFilter,
    pub page: i64,
    pub size: i64,
    pub sort: String,
    pub direction: String,
}

impl SearchRequest {
    /// Stable serialization of the 8-tuple. Identical tuples produce
    /// identical keys; any differing component, including case or
    /// whitespace, produces a distinct key.
    pub fn cache_key(&self) -> String {
        let page = self.page.to_string();
        let size = self.size.to_string();

        [
            self.filter.title.as_deref().unwrap_or(ABSENT),
            self.filter.description.as_deref().unwrap_or(ABSENT),
            self.filter.severity.as_deref().unwrap_or(ABSENT),
            self.filter.owner.as_deref().unwrap_or(ABSENT),
            page.as_str(),
            size.as_str(),
            self.sort.as_str(),
            self.direction.as_str(),
        ]
        .join(KEY_SEPARATOR)
    }
}

/// Read-only search over the incident store
///
/// One fully featured pipeline; the reduced endpoint variants fix the sort
/// specification and skip the cache rather than taking separate code paths.
pub struct SearchService {
    store: Arc<dyn IncidentStore>,
    cache: Option<ResponseCache>,
}

impl SearchService {
    pub fn new(store: Arc<dyn IncidentStore>) -> Self {
        Self { store, cache: None }
    }

    /// Enable response caching
    pub fn with_cache(mut self, cache: ResponseCache) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Full variant: filters, pagination, sorting and response caching
    pub async fn search(&self, request: &SearchRequest) -> Result<Page<IncidentView>> {
        let Some(cache) = &self.cache else {
            return self.execute(request).await;
        };

        let key = request.cache_key();
        if let Some(hit) = cache.get(&key).await {
            tracing::debug!(
                page = request.page,
                size = request.size,
                sort = %request.sort,
                "Search cache hit"
            );
            return Ok(hit);
        }

        let page = self.execute(request).await?;
        cache.insert(key, page.clone()).await;
        Ok(page)
    }

    /// Reduced variant: pagination only, newest first, no cache
    pub async fn recent(
        &self,
        filter: IncidentFilter,
        page: i64,
        size: i64,
    ) -> Result<Page<IncidentView>> {
        self.execute(&SearchRequest {
            filter,
            page,
            size,
            sort: "createdAt".to_string(),
            direction: "desc".to_string(),
        })
        .await
    }

    /// Reduced variant: every matching incident as a flat sequence, newest
    /// first, no page metadata
    pub async fn search_all(&self, filter: &IncidentFilter) -> Result<Vec<IncidentView>> {
        let records = self
            .store
            .find_all(filter, &SortSpec::created_at_desc())
            .await?;
        self.shape_all(records).await
    }

    async fn execute(&self, request: &SearchRequest) -> Result<Page<IncidentView>> {
        let sort = SortSpec::new(&request.sort, &request.direction);
        let window = PageRequest::new(request.page, request.size);

        let paged = self.store.find_page(&request.filter, &sort, window).await?;

        tracing::debug!(
            total = paged.total,
            returned = paged.records.len(),
            page = request.page,
            "Search executed"
        );

        let items = self.shape_all(paged.records).await?;
        Ok(Page::new(items, paged.total, request.page, request.size))
    }

    async fn shape_all(&self, records: Vec<Incident>) -> Result<Vec<IncidentView>> {
        let mut items = Vec::with_capacity(records.len());
        for record in records {
            items.push(shape_incident(self.store.as_ref(), record).await?);
        }
        Ok(items)
    }
}
