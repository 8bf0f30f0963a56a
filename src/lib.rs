//! usersearch — search a static user dataset over HTTP.
//!
//! This crate ties the workspace together for the binary and the
//! integration harnesses. The pieces live in their own crates:
//!
//! # Architecture
//!
//! ```text
//!            usersearch-client                usersearch-server
//! request ──► validate ──► encode ──► GET ──► auth ──► decode ──► engine
//!                                                                   │
//! users/error ◄── map status ◄── decode ◄────────── encode ◄────────┘
//! ```
//!
//! `usersearch-core` holds everything that does not touch the network: the
//! record model, dataset loading, the query engine and the codec.

pub use usersearch_client::{ClientError, SearchClient};
pub use usersearch_core::{
    codec, config, execute, search, DatasetError, FilterPolicy, OrderBy, OrderField, Record,
    SearchError, SearchRequest, Snapshot, User,
};
pub use usersearch_server::{router, serve, AppState};
