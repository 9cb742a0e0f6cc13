//! Fixture helpers for inserting rows during test execution.
//!
//! - `member` - council members, aliases and tenures
//! - `legislation` - legislative files, sponsorships, actions, votes, topics and minutes

pub mod legislation;
pub mod member;
