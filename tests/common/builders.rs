//! Test builders — ergonomic constructors for `Record`, `Snapshot` and
//! requests.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use usersearch::{OrderBy, OrderField, Record, SearchRequest, Snapshot};

// ---------------------------------------------------------------------------
// RecordBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`Record`] test fixtures.
///
/// # Example
///
/// ```rust
/// let record = RecordBuilder::new(7)
///     .name("Boyd", "Wolf")
///     .age(22)
///     .about("likes rust")
///     .build();
/// ```
pub struct RecordBuilder {
    id: i64,
    age: u32,
    first_name: String,
    last_name: String,
    gender: String,
    about: String,
}

impl RecordBuilder {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            age: 30,
            first_name: format!("First{id}"),
            last_name: format!("Last{id}"),
            gender: "female".to_string(),
            about: String::new(),
        }
    }

    pub fn name(mut self, first: impl Into<String>, last: impl Into<String>) -> Self {
        self.first_name = first.into();
        self.last_name = last.into();
        self
    }

    pub fn age(mut self, age: u32) -> Self {
        self.age = age;
        self
    }

    pub fn gender(mut self, gender: impl Into<String>) -> Self {
        self.gender = gender.into();
        self
    }

    pub fn about(mut self, about: impl Into<String>) -> Self {
        self.about = about.into();
        self
    }

    pub fn build(self) -> Record {
        Record::new(
            self.id,
            self.age,
            self.first_name,
            self.last_name,
            self.gender,
            self.about,
        )
    }
}

// ---------------------------------------------------------------------------
// Convenience constructors
// ---------------------------------------------------------------------------

/// Three records whose names sort `A x`, `B x`, `C x`, stored out of order.
pub fn abc_snapshot() -> Snapshot {
    Snapshot::from_records(vec![
        RecordBuilder::new(2).name("B", "x").age(40).build(),
        RecordBuilder::new(3).name("C", "x").age(20).build(),
        RecordBuilder::new(1).name("A", "x").age(30).build(),
    ])
}

/// A request that returns everything in `snapshot` order.
pub fn all(limit: i64) -> SearchRequest {
    SearchRequest::new().limit(limit)
}

/// A sorted request over the whole snapshot.
pub fn sorted(field: OrderField, order: OrderBy) -> SearchRequest {
    SearchRequest::new()
        .order_field(field)
        .order_by(order)
        .limit(i64::MAX)
}
