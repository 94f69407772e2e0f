//! Sort-field aliasing and direction parsing

use serde::{Deserialize, Serialize};

/// Map a client-facing sort field name to the field path the store
/// understands.
///
/// Owner fields live on the related person, so their flattened names are
/// aliased to a path through the relationship. Every other name, recognized
/// or not, passes through unchanged; the store rejects names it cannot sort
/// by. Total and idempotent.
pub fn map_sort_field(field: &str) -> &str {
    match field {
        "ownerLastName" => "owner.lastName",
        "ownerFirstName" => "owner.firstName",
        "ownerEmail" => "owner.email",
        other => other,
    }
}

/// Sort order for results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    /// "asc" (case-insensitive) selects ascending; anything else, including
    /// blank or malformed values, defaults to descending.
    pub fn parse(direction: &str) -> Self {
        if direction.eq_ignore_ascii_case("asc") {
            SortDirection::Ascending
        } else {
            SortDirection::Descending
        }
    }
}

/// A translated sort specification ready for the store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SortSpec {
    /// Store-side field path (already aliased)
    pub field: String,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn new(field: &str, direction: &str) -> Self {
        Self {
            field: map_sort_field(field).to_string(),
            direction: SortDirection::parse(direction),
        }
    }

    /// The fixed ordering used by the reduced endpoint variants
    pub fn created_at_desc() -> Self {
        Self {
            field: "createdAt".to_string(),
            direction: SortDirection::Descending,
        }
    }
}
