//! Read-only incident search service
//!
//! Exposes a search endpoint over a collection of incident records, each
//! owned by a person, with optional free-text filters, pagination and
//! sorting (including sorting by fields of the owning person). Requests
//! flow through predicate composition, store-side query execution and
//! result shaping, wrapped by a response cache keyed on the full parameter
//! tuple.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod search;
pub mod state;
