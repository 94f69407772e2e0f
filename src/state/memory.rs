use crate::error::{AppError, Result};
use crate::models::{Incident, Person};
use crate::search::{IncidentFilter, PageRequest, SortDirection, SortSpec};
use crate::state::{IncidentStore, PagedIncidents};
use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::Arc;

/// In-memory incident store
///
/// Stand-in for the external persistent engine: executes the compiled
/// filter, the sort specification and the page window over two concurrent
/// maps.
#[derive(Clone)]
pub struct InMemoryStore {
    incidents: Arc<DashMap<i64, Incident>>,
    persons: Arc<DashMap<i64, Person>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            incidents: Arc::new(DashMap::new()),
            persons: Arc::new(DashMap::new()),
        }
    }

    /// Snapshot the incidents matching the compiled filter
    fn matching(&self, filter: &IncidentFilter) -> Vec<Incident> {
        let compiled = filter.compile();

        self.incidents
            .iter()
            .map(|entry| entry.value().clone())
            .filter(|incident| {
                let owner = self
                    .persons
                    .get(&incident.owner_id)
                    .map(|entry| entry.value().clone());
                compiled.matches(incident, owner.as_ref())
            })
            .collect()
    }

    /// Order records by the aliased field path; unknown fields are a
    /// query-execution failure.
    fn sort_records(&self, records: &mut [Incident], sort: &SortSpec) -> Result<()> {
        match sort.field.as_str() {
            "id" => records.sort_by_key(|i| i.id),
            "title" => records.sort_by(|a, b| a.title.cmp(&b.title)),
            "description" => records.sort_by(|a, b| a.description.cmp(&b.description)),
            "severity" => records.sort_by(|a, b| a.severity.cmp(&b.severity)),
            "createdAt" => records.sort_by_key(|i| i.created_at),
            "owner.lastName" => self.sort_by_owner(records, |p| p.last_name.clone()),
            "owner.firstName" => self.sort_by_owner(records, |p| p.first_name.clone()),
            "owner.email" => self.sort_by_owner(records, |p| p.email.clone()),
            other => {
                return Err(AppError::Query(format!("unknown sort field: {}", other)));
            }
        }

        if sort.direction == SortDirection::Descending {
            records.reverse();
        }

        Ok(())
    }

    fn sort_by_owner(&self, records: &mut [Incident], key: impl Fn(&Person) -> String) {
        // Unresolvable owners order as empty keys; integrity is enforced at
        // the shaping boundary, not here.
        records.sort_by_cached_key(|incident| {
            self.persons
                .get(&incident.owner_id)
                .map(|entry| key(entry.value()))
                .unwrap_or_default()
        });
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl IncidentStore for InMemoryStore {
    async fn insert_person(&self, person: Person) -> Result<()> {
        tracing::debug!(person_id = person.id, "Person inserted");
        self.persons.insert(person.id, person);
        Ok(())
    }

    async fn insert_incident(&self, incident: Incident) -> Result<()> {
        tracing::debug!(incident_id = incident.id, "Incident inserted");
        self.incidents.insert(incident.id, incident);
        Ok(())
    }

    async fn get_person(&self, id: i64) -> Result<Option<Person>> {
        Ok(self.persons.get(&id).map(|entry| entry.value().clone()))
    }

    async fn find_page(
        &self,
        filter: &IncidentFilter,
        sort: &SortSpec,
        window: PageRequest,
    ) -> Result<PagedIncidents> {
        if window.page < 0 || window.size <= 0 {
            return Err(AppError::Query(format!(
                "invalid page window: page={} size={}",
                window.page, window.size
            )));
        }

        let mut records = self.matching(filter);
        let total = records.len() as u64;

        self.sort_records(&mut records, sort)?;

        let start = window.page.saturating_mul(window.size) as usize;
        let records: Vec<Incident> = records
            .into_iter()
            .skip(start)
            .take(window.size as usize)
            .collect();

        Ok(PagedIncidents { records, total })
    }

    async fn find_all(&self, filter: &IncidentFilter, sort: &SortSpec) -> Result<Vec<Incident>> {
        let mut records = self.matching(filter);
        self.sort_records(&mut records, sort)?;
        Ok(records)
    }

    async fn count(&self, filter: &IncidentFilter) -> Result<u64> {
        Ok(self.matching(filter).len() as u64)
    }
}
