use crate::error::Result;
use crate::models::{Incident, Person};
use crate::state::IncidentStore;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Seed fixture contents: persons plus the incidents referencing them
///
/// Stands in for the external system that writes the store; this service
/// itself only reads.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub persons: Vec<Person>,

    #[serde(default)]
    pub incidents: Vec<Incident>,
}

/// Load a JSON seed file into the store. Returns (persons, incidents)
/// counts.
pub async fn load_seed_file(store: &dyn IncidentStore, path: &Path) -> Result<(usize, usize)> {
    let raw = std::fs::read_to_string(path)?;
    let data: SeedData = serde_json::from_str(&raw)?;
    let counts = (data.persons.len(), data.incidents.len());

    for person in data.persons {
        store.insert_person(person).await?;
    }
    for incident in data.incidents {
        store.insert_incident(incident).await?;
    }

    tracing::info!(
        persons = counts.0,
        incidents = counts.1,
        path = %path.display(),
        "Seed data loaded"
    );

    Ok(counts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{IncidentFilter, SortSpec};
    use crate::state::InMemoryStore;
    use std::io::Write;

    #[tokio::test]
    async fn test_load_seed_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "persons": [
                    {{"id": 1, "last_name": "Dupont", "first_name": "Marie", "email": "marie.dupont@example.com"}}
                ],
                "incidents": [
                    {{"id": 1, "title": "Bug", "description": "broken", "severity": "HIGH", "owner_id": 1, "created_at": "2024-03-01T12:00:00Z"}}
                ]
            }}"#
        )
        .unwrap();

        let store = InMemoryStore::new();
        let (persons, incidents) = load_seed_file(&store, file.path()).await.unwrap();

        assert_eq!((persons, incidents), (1, 1));
        assert!(store.get_person(1).await.unwrap().is_some());
        let all = store
            .find_all(&IncidentFilter::default(), &SortSpec::created_at_desc())
            .await
            .unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].title, "Bug");
    }

    #[tokio::test]
    async fn test_malformed_seed_file_is_a_serialization_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let store = InMemoryStore::new();
        let err = load_seed_file(&store, file.path()).await.unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }

    #[tokio::test]
    async fn test_missing_seed_file_is_an_io_error() {
        let store = InMemoryStore::new();
        let err = load_seed_file(&store, Path::new("/no/such/seed.json"))
            .await
            .unwrap_err();
        assert_eq!(err.error_code(), "IO_ERROR");
    }
}
