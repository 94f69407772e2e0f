use serde::{Deserialize, Serialize};

/// A person that can own incidents
///
/// Referenced, never owned, by incidents; lifecycle is managed by whatever
/// system writes the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    /// Unique identifier
    pub id: i64,

    /// Family name
    pub last_name: String,

    /// Given name
    pub first_name: String,

    /// Contact email
    pub email: String,
}

impl Person {
    pub fn new(
        id: i64,
        last_name: impl Into<String>,
        first_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id,
            last_name: last_name.into(),
            first_name: first_name.into(),
            email: email.into(),
        }
    }
}
