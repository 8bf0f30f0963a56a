//! Dataset loader — parses the XML user dataset into a [`Snapshot`].
//!
//! The dataset is a single document of the shape
//!
//! ```xml
//! <root>
//!   <row>
//!     <id>0</id>
//!     <age>22</age>
//!     <first_name>Boyd</first_name>
//!     <last_name>Wolf</last_name>
//!     <gender>male</gender>
//!     <about>Nulla cillum enim voluptate consequat laborum esse excepteur.</about>
//!   </row>
//! </root>
//! ```
//!
//! Any other child element of `<row>` (guid, email, company, …) is ignored.
//! Loading happens once at startup; every failure is reported to the caller,
//! which is expected to abort.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::store::Snapshot;
use crate::types::Record;

#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("cannot read dataset {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot parse dataset: {0}")]
    Parse(#[from] quick_xml::DeError),
    #[error("duplicate record id {0}")]
    DuplicateId(i64),
}

#[derive(Debug, Deserialize)]
struct Root {
    #[serde(rename = "row", default)]
    rows: Vec<Row>,
}

#[derive(Debug, Deserialize)]
struct Row {
    id: i64,
    age: u32,
    #[serde(default)]
    first_name: String,
    #[serde(default)]
    last_name: String,
    #[serde(default)]
    gender: String,
    #[serde(default)]
    about: String,
}

impl From<Row> for Record {
    fn from(row: Row) -> Self {
        Record::new(
            row.id,
            row.age,
            row.first_name,
            row.last_name,
            row.gender,
            row.about,
        )
    }
}

impl Snapshot {
    /// Read and parse the dataset file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| DatasetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let snapshot = Self::from_xml(&text)?;
        tracing::info!(path = %path.display(), records = snapshot.len(), "dataset loaded");
        Ok(snapshot)
    }

    /// Parse an in-memory dataset document.
    pub fn from_xml(text: &str) -> Result<Self, DatasetError> {
        let root: Root = quick_xml::de::from_str(text)?;
        Self::try_from_records(root.rows.into_iter().map(Record::from).collect())
    }

    /// Build a snapshot, rejecting duplicate ids.
    pub fn try_from_records(records: Vec<Record>) -> Result<Self, DatasetError> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.id()) {
                return Err(DatasetError::DuplicateId(record.id()));
            }
        }
        Ok(Self::from_records(records))
    }
}
