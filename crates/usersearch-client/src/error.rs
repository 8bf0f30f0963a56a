/// Every way a `find_users` call can fail. `Display` is the message shown to
/// the caller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClientError {
    #[error("limit must be > 0")]
    LimitInvalid,
    #[error("offset must be > 0")]
    OffsetInvalid,
    #[error("Bad AccessToken")]
    Unauthorized,
    /// Older clients spelled this `OrderFeld {0} invalid`; match on the
    /// variant, not the text.
    #[error("OrderField {0} invalid")]
    BadOrderField(String),
    /// Not singled out on the wire, so it reads like any other 400 reason.
    #[error("unknown bad request error: Wrong OrderBy")]
    BadOrderBy,
    /// A 400 whose reason the client does not recognise.
    #[error("unknown bad request error: {0}")]
    BadRequest(String),
    #[error("unknown error: internal")]
    ServerInternal,
    #[error("unexpected status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },
    #[error("cant unpack result json: {0}")]
    Decode(String),
    /// The request never produced a response: bad endpoint, connection
    /// failure, timeout.
    #[error("unknown error {0}")]
    Transport(String),
}

