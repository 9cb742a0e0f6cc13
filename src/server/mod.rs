//! Server application core modules.
//!
//! HTTP routing, the council member merge and search document services, and the SeaORM data
//! access layer they are built on.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
