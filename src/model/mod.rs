//! API data transfer objects.

pub mod api;
pub mod member;
pub mod search;
