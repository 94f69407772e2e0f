//! Common test utilities for driving the HTTP API against a seeded store

use axum::Router;
use chrono::{TimeZone, Utc};
use incident_search::api::{build_router, AppState};
use incident_search::config::ServerConfig;
use incident_search::models::{Incident, Person};
use incident_search::search::SearchService;
use incident_search::state::{IncidentStore, InMemoryStore, ResponseCache};
use std::sync::Arc;
use std::time::Duration;

/// Seed a store with three persons and six incidents with known ordering
pub async fn seeded_store() -> Arc<dyn IncidentStore> {
    let store = InMemoryStore::new();

    let persons = [
        Person::new(1, "Dupont", "Marie", "marie.dupont@example.com"),
        Person::new(2, "Martin", "Paul", "paul.martin@example.com"),
        Person::new(3, "Durand", "Sophie", "sophie.durand@example.com"),
    ];
    for person in persons {
        store.insert_person(person).await.unwrap();
    }

    // (id, title, description, severity, owner_id, day-of-month)
    let rows = [
        (1, "Bug in checkout", "payment rejected", "HIGH", 1, 1),
        (2, "Slow dashboard", "page load timeout", "MEDIUM", 2, 2),
        (3, "Crash on login", "NPE in auth filter", "HIGH", 3, 3),
        (4, "Stale cache", "timeout refreshing entries", "LOW", 1, 4),
        (5, "Broken export", "CSV download empty", "MEDIUM", 2, 5),
        (6, "Bug in invoicing", "totals off by one cent", "HIGH", 3, 6),
    ];
    for (id, title, description, severity, owner_id, day) in rows {
        let created_at = Utc.with_ymd_and_hms(2024, 3, day, 12, 0, 0).unwrap();
        store
            .insert_incident(Incident::new(
                id,
                title,
                description,
                severity,
                owner_id,
                created_at,
            ))
            .await
            .unwrap();
    }

    Arc::new(store)
}

/// Build an app over the seeded store, with response caching enabled
pub async fn seeded_app() -> Router {
    let service = SearchService::new(seeded_store().await)
        .with_cache(ResponseCache::new(100, Duration::from_secs(60)));
    build_router(AppState::new(Arc::new(service)), &ServerConfig::default())
}
