//! Store — the immutable, load-once [`Snapshot`] of all [`Record`](crate::Record) values.
//!
//! The snapshot is the single source of truth; the query engine reads from it
//! and never writes. Cloning is cheap (one `Arc` bump), so every request
//! handler can hold its own handle without locking.

use std::sync::Arc;

use crate::types::Record;

#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    records: Arc<[Record]>,
}

impl Snapshot {
    /// Wrap an already-built record sequence. Order is preserved.
    ///
    /// No uniqueness check is made here; use [`Snapshot::try_from_records`]
    /// for untrusted input.
    pub fn from_records(records: Vec<Record>) -> Self {
        Self {
            records: records.into(),
        }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: i64) -> Option<&Record> {
        self.records.iter().find(|r| r.id() == id)
    }
}
