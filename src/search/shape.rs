//! Result shaping: raw records to the flattened output representation

use crate::error::{AppError, Result};
use crate::models::{Incident, Person};
use crate::state::IncidentStore;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Output representation of an incident with the owner relationship
/// flattened into scalar fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncidentView {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub severity: String,
    pub created_at: DateTime<Utc>,
    pub owner_id: i64,
    pub owner_last_name: String,
    pub owner_first_name: String,
    pub owner_email: String,
}

impl IncidentView {
    pub fn from_parts(incident: Incident, owner: Person) -> Self {
        Self {
            id: incident.id,
            title: incident.title,
            description: incident.description,
            severity: incident.severity,
            created_at: incident.created_at,
            owner_id: owner.id,
            owner_last_name: owner.last_name,
            owner_first_name: owner.first_name,
            owner_email: owner.email,
        }
    }
}

/// Shape one raw record, resolving its owner through the store.
///
/// An unresolvable owner is a data-integrity violation: the whole request
/// fails rather than returning a partial envelope.
pub async fn shape_incident(store: &dyn IncidentStore, incident: Incident) -> Result<IncidentView> {
    let owner = store.get_person(incident.owner_id).await?.ok_or_else(|| {
        AppError::DataIntegrity(format!(
            "incident {} references missing person {}",
            incident.id, incident.owner_id
        ))
    })?;

    Ok(IncidentView::from_parts(incident, owner))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::InMemoryStore;
    use chrono::Utc;

    #[tokio::test]
    async fn test_shape_flattens_owner_fields() {
        let store = InMemoryStore::new();
        store
            .insert_person(Person::new(7, "Martin", "Paul", "paul.martin@example.com"))
            .await
            .unwrap();

        let incident = Incident::new(1, "Bug", "Broken checkout", "HIGH", 7, Utc::now());
        let view = shape_incident(&store, incident.clone()).await.unwrap();

        assert_eq!(view.id, 1);
        assert_eq!(view.title, "Bug");
        assert_eq!(view.severity, "HIGH");
        assert_eq!(view.created_at, incident.created_at);
        assert_eq!(view.owner_id, 7);
        assert_eq!(view.owner_last_name, "Martin");
        assert_eq!(view.owner_first_name, "Paul");
        assert_eq!(view.owner_email, "paul.martin@example.com");
    }

    #[tokio::test]
    async fn test_missing_owner_is_an_integrity_error() {
        let store = InMemoryStore::new();
        let incident = Incident::new(1, "Bug", "x", "HIGH", 99, Utc::now());

        let err = shape_incident(&store, incident).await.unwrap_err();
        assert_eq!(err.error_code(), "DATA_INTEGRITY_ERROR");
    }

    #[test]
    fn test_view_serializes_camel_case() {
        let view = IncidentView::from_parts(
            Incident::new(1, "Bug", "x", "HIGH", 7, Utc::now()),
            Person::new(7, "Martin", "Paul", "paul.martin@example.com"),
        );
        let json = serde_json::to_value(&view).unwrap();

        assert_eq!(json["ownerId"], 7);
        assert_eq!(json["ownerLastName"], "Martin");
        assert_eq!(json["ownerFirstName"], "Paul");
        assert_eq!(json["ownerEmail"], "paul.martin@example.com");
        assert!(json.get("createdAt").is_some());
    }
}
