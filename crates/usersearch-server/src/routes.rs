//! Router and handlers.
//!
//! | Route | Purpose |
//! |-------|---------|
//! | `GET /` | search; parameters in the query string, token in `AccessToken` |
//! | `GET /health` | liveness |

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::{header, HeaderMap, Uri};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use usersearch_core::codec::{self, SearchParams, ACCESS_TOKEN_HEADER};
use usersearch_core::{search, FilterPolicy, Snapshot};

use crate::error::{ApiError, ApiResult};

/// Read-only state shared by every request.
#[derive(Debug)]
pub struct AppState {
    pub snapshot: Snapshot,
    pub access_token: String,
    pub filter_policy: FilterPolicy,
}

impl AppState {
    pub fn new(snapshot: Snapshot, access_token: impl Into<String>) -> Self {
        Self {
            snapshot,
            access_token: access_token.into(),
            filter_policy: FilterPolicy::default(),
        }
    }

    pub fn with_filter_policy(mut self, policy: FilterPolicy) -> Self {
        self.filter_policy = policy;
        self
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(search_users))
        .route("/health", get(health))
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

/// The token is checked before the query string is even decoded, so a bad
/// token wins over every other problem with the request.
async fn search_users(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    uri: Uri,
) -> ApiResult<Response> {
    let token = headers
        .get(ACCESS_TOKEN_HEADER)
        .and_then(|v| v.to_str().ok());
    if token != Some(state.access_token.as_str()) {
        tracing::warn!(path = %uri.path(), "rejected search: bad access token");
        return Err(ApiError::Unauthorized);
    }

    let Query(params) = Query::<SearchParams>::try_from_uri(&uri)
        .map_err(|rejection| ApiError::MalformedQuery(rejection.body_text()))?;
    let request = params.into_request()?;
    let records = search::execute_with(&state.snapshot, &request, state.filter_policy)
        .inspect_err(|err| tracing::debug!(error = %err, "search rejected"))?;

    tracing::debug!(
        query = %request.query,
        order_field = %request.order_field,
        order_by = request.order_by,
        limit = request.limit,
        offset = request.offset,
        results = records.len(),
        "search"
    );

    let body = codec::encode_users(&records).map_err(|err| {
        tracing::error!(error = %err, "cannot encode search results");
        ApiError::Internal(err.to_string())
    })?;
    Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
}
