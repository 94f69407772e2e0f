use crate::api::AppState;
use crate::error::Result;
use crate::search::{IncidentFilter, IncidentView, Page, SearchRequest};
use axum::{
    extract::{Query, State},
    http::header,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};

/// Browser-side cacheability directive for search responses: advisory to
/// HTTP intermediaries, orthogonal to the server-side response cache.
const CACHE_CONTROL_VALUE: &str = "private, max-age=300, must-revalidate";

/// Health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Search incidents with optional filters, pagination, sorting and response
/// caching
pub async fn search_incidents(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<impl IntoResponse> {
    let request = SearchRequest::from(params);
    let page = state.service.search(&request).await?;

    Ok(([(header::CACHE_CONTROL, CACHE_CONTROL_VALUE)], Json(page)))
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub title: Option<String>,
    pub description: Option<String>,
    pub severity: Option<String>,
    pub owner: Option<String>,
    #[serde(default)]
    pub page: i64,
    #[serde(default = "default_page_size")]
    pub size: i64,
    #[serde(default = "default_sort_field")]
    pub sort: String,
    #[serde(default = "default_sort_direction")]
    pub direction: String,
}

impl From<SearchParams> for SearchRequest {
    fn from(params: SearchParams) -> Self {
        Self {
            filter: IncidentFilter {
                title: params.title,
                description: params.description,
                severity: params.severity,
                owner: params.owner,
            },
            page: params.page,
            size: params.size,
            sort: params.sort,
            direction: params.direction,
        }
    }
}

/// List recent incidents: filters and pagination only, newest first
pub async fn recent_incidents(
    State(state): State<AppState>,
    Query(params): Query<RecentParams>,
) -> Result<Json<Page<IncidentView>>> {
    let filter = IncidentFilter {
        title: params.title,
        description: params.description,
        severity: params.severity,
        owner: params.owner,
    };

    let page = state.service.recent(filter, params.page, params.size).await?;
    Ok(Json(page))
}

#[derive(Debug, Deserialize)]
pub struct RecentParams {
    pub title: Option<String>,
    pub description: Option<String>,
    pub severity: Option<String>,
    pub owner: Option<String>,
    #[serde(default)]
    pub page: i64,
    #[serde(default = "default_page_size")]
    pub size: i64,
}

/// List every matching incident as a flat sequence, newest first, with no
/// pagination metadata
pub async fn all_incidents(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<IncidentView>>> {
    let filter = IncidentFilter {
        title: params.title,
        description: params.description,
        severity: params.severity,
        owner: params.owner,
    };

    let items = state.service.search_all(&filter).await?;
    Ok(Json(items))
}

#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub title: Option<String>,
    pub description: Option<String>,
    pub severity: Option<String>,
    pub owner: Option<String>,
}

fn default_page_size() -> i64 {
    10
}

fn default_sort_field() -> String {
    "createdAt".to_string()
}

fn default_sort_direction() -> String {
    "desc".to_string()
}
