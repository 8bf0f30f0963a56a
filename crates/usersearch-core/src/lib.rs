//! usersearch-core — record model, dataset loading, query engine and codec.
//!
//! # Architecture
//!
//! ```text
//! Dataset ──► Snapshot ──► Search ──► Codec ──► (HTTP)
//! ```
//!
//! The snapshot is loaded once and shared read-only. The search engine is a
//! pure function of `(snapshot, request)`; the codec only translates shapes.

pub mod codec;
pub mod config;
pub mod dataset;
pub mod search;
pub mod store;
pub mod types;

pub use dataset::DatasetError;
pub use search::{execute, FilterPolicy, SearchError, SearchQuery};
pub use store::Snapshot;
pub use types::{ErrorResponse, OrderBy, OrderField, Record, SearchRequest, User};
