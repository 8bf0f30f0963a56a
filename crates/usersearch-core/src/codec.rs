//! Protocol codec — maps requests and responses to and from their HTTP shape.
//!
//! The codec never validates. A request that is well-formed on the wire but
//! semantically wrong (unknown field, bad direction) passes through untouched
//! and is rejected by the query engine. The one exception is a numeric
//! parameter that is not a number at all: there is no [`SearchRequest`] that
//! can represent it, so decoding reports the matching [`SearchError`].

use serde::Deserialize;

use crate::search::SearchError;
use crate::types::{ErrorResponse, Record, SearchRequest, User};

/// Request header carrying the access token.
pub const ACCESS_TOKEN_HEADER: &str = "AccessToken";

/// `error` message of a 400 caused by an unknown order field.
pub const ERR_BAD_ORDER_FIELD: &str = "ErrorBadOrderField";
/// `error` message of a 400 caused by an unknown order direction.
pub const ERR_BAD_ORDER_BY: &str = "Wrong OrderBy";

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

/// Encode `request` as a query string. Keys are emitted in sorted order so
/// the same request always produces the same string.
pub fn encode_request(request: &SearchRequest) -> String {
    url::form_urlencoded::Serializer::new(String::new())
        .append_pair("limit", &request.limit.to_string())
        .append_pair("offset", &request.offset.to_string())
        .append_pair("order_by", &request.order_by.to_string())
        .append_pair("order_field", &request.order_field)
        .append_pair("query", &request.query)
        .finish()
}

/// Raw query parameters as received by the server. Anything missing takes
/// its zero value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchParams {
    pub query: Option<String>,
    pub order_field: Option<String>,
    pub order_by: Option<String>,
    pub limit: Option<String>,
    pub offset: Option<String>,
}

impl SearchParams {
    pub fn into_request(self) -> Result<SearchRequest, SearchError> {
        Ok(SearchRequest {
            query: self.query.unwrap_or_default(),
            order_field: self.order_field.unwrap_or_default(),
            order_by: parse_int(self.order_by, SearchError::BadOrderBy)?,
            limit: parse_int(self.limit, SearchError::LimitInvalid)?,
            offset: parse_int(self.offset, SearchError::OffsetInvalid)?,
        })
    }
}

fn parse_int(
    raw: Option<String>,
    err: impl FnOnce(String) -> SearchError,
) -> Result<i64, SearchError> {
    match raw {
        None => Ok(0),
        Some(s) if s.is_empty() => Ok(0),
        Some(s) => s.trim().parse().map_err(|_| err(s)),
    }
}

// ---------------------------------------------------------------------------
// Responses
// ---------------------------------------------------------------------------

/// Serialize a result set as a JSON array of [`User`] objects.
pub fn encode_users(records: &[Record]) -> serde_json::Result<Vec<u8>> {
    let users: Vec<User> = records.iter().map(User::from).collect();
    serde_json::to_vec(&users)
}

/// Serialize `error` as `{"error": "<message>"}`.
pub fn encode_error(error: impl std::fmt::Display) -> Vec<u8> {
    let body = ErrorResponse {
        error: error.to_string(),
    };
    // A struct with a single string field always serializes.
    serde_json::to_vec(&body).unwrap_or_default()
}

/// A decoded response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Users(Vec<User>),
    Failure {
        status: u16,
        /// Message from an `{"error": ...}` body, if the body was one.
        error: Option<String>,
        /// Body as text, for reporting.
        body: String,
    },
}

/// Decode a response by status. A 2xx body must be a user array; anything
/// else becomes [`Reply::Failure`].
pub fn decode_response(status: u16, body: &[u8]) -> serde_json::Result<Reply> {
    if (200..300).contains(&status) {
        return serde_json::from_slice(body).map(Reply::Users);
    }
    let error = serde_json::from_slice::<ErrorResponse>(body)
        .ok()
        .map(|e| e.error);
    Ok(Reply::Failure {
        status,
        error,
        body: String::from_utf8_lossy(body).into_owned(),
    })
}
