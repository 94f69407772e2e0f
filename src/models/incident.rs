use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Represents an incident record
///
/// Every field is mandatory once stored; records are created externally
/// (seed fixtures, tests) and only read through the search pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Incident {
    /// Unique identifier
    pub id: i64,

    /// Human-readable title
    pub title: String,

    /// Detailed description
    pub description: String,

    /// Severity label (free-form, e.g. "HIGH")
    pub severity: String,

    /// Owning person
    pub owner_id: i64,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl Incident {
    /// Create a new incident owned by `owner_id`
    pub fn new(
        id: i64,
        title: impl Into<String>,
        description: impl Into<String>,
        severity: impl Into<String>,
        owner_id: i64,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            severity: severity.into(),
            owner_id,
            created_at,
        }
    }
}
