//! Business logic services.
//!
//! Services compose repositories into the operations exposed over HTTP. The council member
//! merge lives in [`merge`], member listing and search document preparation in [`member`]
//! and [`search`].

pub mod member;
pub mod merge;
pub mod retry;
pub mod search;
