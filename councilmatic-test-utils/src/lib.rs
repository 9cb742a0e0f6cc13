//! Shared test tooling for the councilmatic workspace.
//!
//! Tests build an in-memory SQLite database with [`TestBuilder`] (or the
//! [`test_setup_with_tables!`] macro), then insert council members and legislation through
//! the fixture helpers exposed on [`TestContext`].

pub mod builder;
pub mod context;
pub mod error;
pub mod fixtures;
pub mod model;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{test_setup_with_tables, TestBuilder, TestContext, TestError};
}
