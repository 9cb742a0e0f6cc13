//! Councilmatic legislative tracking service.
//!
//! `model` holds the JSON types shared with API consumers, `server` holds the HTTP surface,
//! services and data access built on SeaORM.

pub mod model;
pub mod server;
