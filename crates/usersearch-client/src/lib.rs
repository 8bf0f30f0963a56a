//! usersearch-client — HTTP client for the usersearch API.
//!
//! [`SearchClient::find_users`] checks the request locally, sends one
//! `GET` with the access token header, and turns every status the server can
//! answer with into a [`ClientError`]. It never retries.

mod error;

use std::time::Duration;

use http_body_util::{BodyExt, Empty};
use hyper::body::Bytes;
use hyper::{Request, Uri};
use hyper_util::client::legacy::{connect::HttpConnector, Client};
use hyper_util::rt::TokioExecutor;
use usersearch_core::codec::{self, Reply, ACCESS_TOKEN_HEADER, ERR_BAD_ORDER_BY, ERR_BAD_ORDER_FIELD};
use usersearch_core::config::ClientConfig;
use usersearch_core::{SearchRequest, User};

pub use error::ClientError;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(1);

#[derive(Debug, Clone)]
pub struct SearchClient {
    url: String,
    access_token: String,
    timeout: Duration,
    http: Client<HttpConnector, Empty<Bytes>>,
}

impl SearchClient {
    /// Client for the search endpoint at `url` (e.g. `http://127.0.0.1:8080`).
    pub fn new(url: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            access_token: access_token.into(),
            timeout: DEFAULT_TIMEOUT,
            http: Client::builder(TokioExecutor::new()).build_http(),
        }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(config.url.clone(), config.access_token.clone()).with_timeout(config.timeout())
    }

    /// Upper bound for the whole exchange: connect, send, read body.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub async fn find_users(&self, request: &SearchRequest) -> Result<Vec<User>, ClientError> {
        if request.limit < 0 {
            return Err(ClientError::LimitInvalid);
        }
        if request.offset < 0 {
            return Err(ClientError::OffsetInvalid);
        }

        let params = codec::encode_request(request);
        let target = format!("{}?{}", self.url, params);
        check_scheme(&target).map_err(|reason| transport(&target, reason))?;
        let uri: Uri = target.parse().map_err(|e| transport(&target, e))?;
        let req = Request::get(uri)
            .header(ACCESS_TOKEN_HEADER, &self.access_token)
            .body(Empty::new())
            .map_err(|e| transport(&target, e))?;

        tracing::debug!(url = %self.url, %params, "search request");

        let exchange = async {
            let resp = self
                .http
                .request(req)
                .await
                .map_err(|e| transport(&target, error_chain(&e)))?;
            let status = resp.status().as_u16();
            let body = resp
                .into_body()
                .collect()
                .await
                .map_err(|e| transport(&target, e))?
                .to_bytes();
            Ok::<_, ClientError>((status, body))
        };

        let (status, body) = tokio::time::timeout(self.timeout, exchange)
            .await
            .map_err(|_| ClientError::Transport(format!("timeout for {params}")))??;

        tracing::debug!(status, bytes = body.len(), "search response");
        map_reply(request, status, &body)
    }
}

/// Translate a raw response into users or a [`ClientError`].
fn map_reply(request: &SearchRequest, status: u16, body: &[u8]) -> Result<Vec<User>, ClientError> {
    let reply =
        codec::decode_response(status, body).map_err(|e| ClientError::Decode(e.to_string()))?;
    match reply {
        Reply::Users(users) => Ok(users),
        Reply::Failure { status: 401, .. } => Err(ClientError::Unauthorized),
        Reply::Failure { status: 500, .. } => Err(ClientError::ServerInternal),
        Reply::Failure {
            status: 400,
            error: Some(message),
            ..
        } => Err(match message.as_str() {
            ERR_BAD_ORDER_FIELD => ClientError::BadOrderField(request.order_field.clone()),
            ERR_BAD_ORDER_BY => ClientError::BadOrderBy,
            _ => ClientError::BadRequest(message),
        }),
        Reply::Failure { status, body, .. } => Err(ClientError::UnexpectedStatus { status, body }),
    }
}

/// Only plain `http` endpoints are supported by the connector.
fn check_scheme(target: &str) -> Result<(), String> {
    let scheme = target.split_once("://").map(|(s, _)| s).unwrap_or("");
    if scheme.eq_ignore_ascii_case("http") {
        Ok(())
    } else {
        Err(format!("unsupported protocol scheme {scheme:?}"))
    }
}

fn transport(target: &str, reason: impl std::fmt::Display) -> ClientError {
    ClientError::Transport(format!("Get {target:?}: {reason}"))
}

/// `outer: inner: innermost`, so the root cause (e.g. connection refused)
/// is not lost behind hyper's generic wrapper message.
fn error_chain(err: &dyn std::error::Error) -> String {
    let mut out = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        out.push_str(": ");
        out.push_str(&cause.to_string());
        source = cause.source();
    }
    out
}
