//! Shared test utilities for usersearch integration harnesses.
//!
//! Import everything you need via `mod common; use common::*;` at the top of
//! each harness file.

pub mod assertions;
pub mod builders;
pub mod fixtures;
pub mod test_server;

pub use assertions::*;
pub use builders::*;
pub use fixtures::*;
pub use test_server::*;
