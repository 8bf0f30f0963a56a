//! Search layer — query engine over a [`Snapshot`].
//!
//! A [`SearchRequest`] is first validated into a typed [`SearchQuery`]; only
//! then does the pipeline run:
//!
//! ```text
//! filter (substring in name/about) ──► sort (field comparator) ──► paginate
//! ```
//!
//! Every stage builds a new sequence of borrowed records; the snapshot itself
//! is never touched. Validation errors short-circuit before any stage runs.

use std::cmp::Ordering;

use serde::Deserialize;

use crate::store::Snapshot;
use crate::types::{OrderBy, OrderField, Record, SearchRequest};

/// Why a request was rejected. `Display` is the message sent on the wire.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    #[error("ErrorBadOrderField")]
    BadOrderField(String),
    #[error("Wrong OrderBy")]
    BadOrderBy(String),
    #[error("limit must be > 0")]
    LimitInvalid(String),
    #[error("offset must be > 0")]
    OffsetInvalid(String),
}

/// When the `query` substring filter applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterPolicy {
    /// Filter whenever `query` is non-empty.
    #[default]
    Always,
    /// Filter only when an explicit `order_field` was requested. Matches the
    /// behaviour of older servers.
    OrderedOnly,
}

/// A request whose every parameter is known to be valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub query: String,
    pub order_field: OrderField,
    pub order_by: OrderBy,
    pub limit: usize,
    pub offset: usize,
}

impl TryFrom<&SearchRequest> for SearchQuery {
    type Error = SearchError;

    fn try_from(req: &SearchRequest) -> Result<Self, Self::Error> {
        let order_field = OrderField::parse(&req.order_field)
            .ok_or_else(|| SearchError::BadOrderField(req.order_field.clone()))?;
        let order_by = OrderBy::from_code(req.order_by)
            .ok_or_else(|| SearchError::BadOrderBy(req.order_by.to_string()))?;
        let limit = usize::try_from(req.limit)
            .map_err(|_| SearchError::LimitInvalid(req.limit.to_string()))?;
        let offset = usize::try_from(req.offset)
            .map_err(|_| SearchError::OffsetInvalid(req.offset.to_string()))?;
        Ok(Self {
            query: req.query.clone(),
            order_field,
            order_by,
            limit,
            offset,
        })
    }
}

// ---------------------------------------------------------------------------
// Pipeline
// ---------------------------------------------------------------------------

/// Run `request` against `snapshot` with the default [`FilterPolicy`].
pub fn execute(snapshot: &Snapshot, request: &SearchRequest) -> Result<Vec<Record>, SearchError> {
    execute_with(snapshot, request, FilterPolicy::default())
}

/// Run `request` against `snapshot`.
pub fn execute_with(
    snapshot: &Snapshot,
    request: &SearchRequest,
    policy: FilterPolicy,
) -> Result<Vec<Record>, SearchError> {
    let query = SearchQuery::try_from(request)?;
    Ok(query
        .run(snapshot.records(), policy)
        .into_iter()
        .cloned()
        .collect())
}

impl SearchQuery {
    /// Filter, sort and paginate `records`.
    pub fn run<'a>(&self, records: &'a [Record], policy: FilterPolicy) -> Vec<&'a Record> {
        let mut working = self.filter(records, policy);
        if self.order_by != OrderBy::AsIs {
            sort(&mut working, self.order_field, self.order_by);
        }
        paginate(working, self.offset, self.limit)
    }

    fn filter<'a>(&self, records: &'a [Record], policy: FilterPolicy) -> Vec<&'a Record> {
        let applies = match policy {
            FilterPolicy::Always => !self.query.is_empty(),
            FilterPolicy::OrderedOnly => self.order_field != OrderField::Unset,
        };
        if !applies {
            return records.iter().collect();
        }
        records
            .iter()
            .filter(|r| matches_query(r, &self.query))
            .collect()
    }
}

/// Case-sensitive substring match against `name` or `about`.
pub fn matches_query(record: &Record, query: &str) -> bool {
    query.is_empty() || record.name().contains(query) || record.about().contains(query)
}

// ---------------------------------------------------------------------------
// Sorting
// ---------------------------------------------------------------------------

type Comparator = fn(&Record, &Record) -> Ordering;

fn by_id(a: &Record, b: &Record) -> Ordering {
    a.id().cmp(&b.id())
}

fn by_age(a: &Record, b: &Record) -> Ordering {
    a.age().cmp(&b.age())
}

fn by_name(a: &Record, b: &Record) -> Ordering {
    a.name().cmp(b.name())
}

/// Ascending comparator for `field`. An unset field sorts by name.
pub fn comparator(field: OrderField) -> Comparator {
    match field {
        OrderField::Id => by_id,
        OrderField::Age => by_age,
        OrderField::Name | OrderField::Unset => by_name,
    }
}

/// Stable sort; `AsIs` is a no-op.
pub fn sort(records: &mut [&Record], field: OrderField, order: OrderBy) {
    let cmp = comparator(field);
    match order {
        OrderBy::Asc => records.sort_by(|a, b| cmp(a, b)),
        OrderBy::Desc => records.sort_by(|a, b| cmp(b, a)),
        OrderBy::AsIs => {}
    }
}

// ---------------------------------------------------------------------------
// Pagination
// ---------------------------------------------------------------------------

/// Window of at most `limit` items starting at `offset`. Empty when
/// `offset >= items.len()`.
pub fn paginate<T>(items: Vec<T>, offset: usize, limit: usize) -> Vec<T> {
    items.into_iter().skip(offset).take(limit).collect()
}
