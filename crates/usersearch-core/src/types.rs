//! Core types for usersearch-core.
//!
//! This module defines the data structures shared by the server, the client
//! and the query engine: the immutable [`Record`], the wire-level
//! [`SearchRequest`], and the [`OrderField`] / [`OrderBy`] enums that a
//! request is validated into.

use serde::{Deserialize, Serialize};

/// One entry of the dataset.
///
/// `name` is derived from `first_name` and `last_name` when the record is
/// constructed and is never recomputed. Fields are private so a record cannot
/// be mutated after load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    id: i64,
    age: u32,
    first_name: String,
    last_name: String,
    gender: String,
    about: String,
    name: String,
}

impl Record {
    pub fn new(
        id: i64,
        age: u32,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        gender: impl Into<String>,
        about: impl Into<String>,
    ) -> Self {
        let first_name = first_name.into();
        let last_name = last_name.into();
        let name = format!("{first_name} {last_name}");
        Self {
            id,
            age,
            first_name,
            last_name,
            gender: gender.into(),
            about: about.into(),
            name,
        }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn gender(&self) -> &str {
        &self.gender
    }

    pub fn about(&self) -> &str {
        &self.about
    }

    /// Display name, `first_name + " " + last_name`.
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Which record attribute drives sorting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OrderField {
    /// No explicit field. Sorting (if any) falls back to `name`.
    #[default]
    Unset,
    Id,
    Age,
    Name,
}

impl OrderField {
    /// Wire spelling of the field, as sent in the `order_field` parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderField::Unset => "",
            OrderField::Id => "Id",
            OrderField::Age => "Age",
            OrderField::Name => "Name",
        }
    }

    /// Parse the wire spelling. Matching is exact and case-sensitive.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "" => Some(OrderField::Unset),
            "Id" => Some(OrderField::Id),
            "Age" => Some(OrderField::Age),
            "Name" => Some(OrderField::Name),
            _ => None,
        }
    }
}

impl std::fmt::Display for OrderField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OrderBy {
    Desc = -1,
    /// Keep the filtered order untouched.
    #[default]
    AsIs = 0,
    Asc = 1,
}

impl OrderBy {
    pub fn code(&self) -> i64 {
        *self as i64
    }

    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            -1 => Some(OrderBy::Desc),
            0 => Some(OrderBy::AsIs),
            1 => Some(OrderBy::Asc),
            _ => None,
        }
    }
}

/// A search request as it travels over the wire.
///
/// The fields are deliberately untyped: a client may send any field name or
/// direction code, and it is the query engine that decides whether they are
/// valid. Use the builder methods to fill them from typed values.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchRequest {
    /// Substring to look for in `name` or `about`. Empty means no filter.
    pub query: String,
    pub order_field: String,
    pub order_by: i64,
    pub limit: i64,
    pub offset: i64,
}

impl SearchRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn order_field(mut self, field: OrderField) -> Self {
        self.order_field = field.as_str().to_string();
        self
    }

    pub fn order_by(mut self, order: OrderBy) -> Self {
        self.order_by = order.code();
        self
    }

    pub fn limit(mut self, limit: i64) -> Self {
        self.limit = limit;
        self
    }

    pub fn offset(mut self, offset: i64) -> Self {
        self.offset = offset;
        self
    }
}

/// Wire view of a [`Record`]: the fields a search response exposes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub age: u32,
    pub name: String,
    pub gender: String,
    pub about: String,
}

impl From<&Record> for User {
    fn from(record: &Record) -> Self {
        Self {
            id: record.id,
            age: record.age,
            name: record.name.clone(),
            gender: record.gender.clone(),
            about: record.about.clone(),
        }
    }
}

/// Body of every non-success response that carries a reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
