//! Filter predicate composition

use crate::models::{Incident, Person};
use serde::{Deserialize, Serialize};

/// A single boolean test over a candidate incident and its resolved owner.
///
/// The owner is `None` when the incident's reference cannot be resolved;
/// owner-based predicates then reject the record.
pub type Predicate = Box<dyn Fn(&Incident, Option<&Person>) -> bool + Send + Sync>;

/// Optional free-text filters for incident search
///
/// Each field is either absent/blank (no constraint) or a case-insensitive
/// substring pattern. `owner` matches against the owning person's last name,
/// first name or email.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IncidentFilter {
    pub title: Option<String>,
    pub description: Option<String>,
    pub severity: Option<String>,
    pub owner: Option<String>,
}

impl IncidentFilter {
    /// Compile the active filters into an ordered predicate list
    pub fn compile(&self) -> CompiledFilter {
        let mut predicates: Vec<Predicate> = Vec::new();

        if let Some(pattern) = active_pattern(&self.title) {
            predicates.push(Box::new(move |incident, _| {
                contains_ci(&incident.title, &pattern)
            }));
        }

        if let Some(pattern) = active_pattern(&self.description) {
            predicates.push(Box::new(move |incident, _| {
                contains_ci(&incident.description, &pattern)
            }));
        }

        if let Some(pattern) = active_pattern(&self.severity) {
            predicates.push(Box::new(move |incident, _| {
                contains_ci(&incident.severity, &pattern)
            }));
        }

        // Owner matches on last name OR first name OR email
        if let Some(pattern) = active_pattern(&self.owner) {
            predicates.push(Box::new(move |_, owner| {
                owner.map_or(false, |person| {
                    contains_ci(&person.last_name, &pattern)
                        || contains_ci(&person.first_name, &pattern)
                        || contains_ci(&person.email, &pattern)
                })
            }));
        }

        CompiledFilter { predicates }
    }
}

/// The composite matching condition: every active predicate must hold
pub struct CompiledFilter {
    predicates: Vec<Predicate>,
}

impl CompiledFilter {
    /// True when the incident satisfies every active constraint.
    ///
    /// With zero active constraints every record matches.
    pub fn matches(&self, incident: &Incident, owner: Option<&Person>) -> bool {
        self.predicates.iter().all(|p| p(incident, owner))
    }

    /// Number of active constraints
    pub fn len(&self) -> usize {
        self.predicates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }
}

/// A filter is active iff present and non-blank after trimming; the match
/// pattern is the lowercased original value.
fn active_pattern(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .filter(|v| !v.trim().is_empty())
        .map(|v| v.to_lowercase())
}

fn contains_ci(haystack: &str, pattern_lower: &str) -> bool {
    haystack.to_lowercase().contains(pattern_lower)
}
