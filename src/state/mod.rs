pub mod cache;
pub mod memory;
pub mod seed;

pub use cache::ResponseCache;
pub use memory::InMemoryStore;
pub use seed::{load_seed_file, SeedData};

use crate::error::Result;
use crate::models::{Incident, Person};
use crate::search::{IncidentFilter, PageRequest, SortSpec};
use async_trait::async_trait;

/// One page of raw records plus the total match count over the full
/// filtered set (not just the returned page)
#[derive(Debug, Clone)]
pub struct PagedIncidents {
    pub records: Vec<Incident>,
    pub total: u64,
}

/// Trait for incident retrieval operations
///
/// The store owns query execution: it applies the composite filter, the
/// translated sort specification and the page window, and rejects sort
/// fields it does not know and invalid page windows.
#[async_trait]
pub trait IncidentStore: Send + Sync {
    /// Insert a person (seed and test surface; not exposed over HTTP)
    async fn insert_person(&self, person: Person) -> Result<()>;

    /// Insert an incident (seed and test surface; not exposed over HTTP)
    async fn insert_incident(&self, incident: Incident) -> Result<()>;

    /// Resolve a person by id
    async fn get_person(&self, id: i64) -> Result<Option<Person>>;

    /// Retrieve one page of matching incidents, ordered, plus the total
    /// match count
    async fn find_page(
        &self,
        filter: &IncidentFilter,
        sort: &SortSpec,
        window: PageRequest,
    ) -> Result<PagedIncidents>;

    /// Retrieve every matching incident, ordered
    async fn find_all(&self, filter: &IncidentFilter, sort: &SortSpec) -> Result<Vec<Incident>>;

    /// Count incidents matching the filter
    async fn count(&self, filter: &IncidentFilter) -> Result<u64>;
}
