//! HTTP controller endpoints for the councilmatic API.
//!
//! Handlers validate request input, delegate to the services and map their results to DTOs.
//! Errors are returned as [`crate::server::error::Error`], which renders itself as a JSON
//! [`crate::model::api::ErrorDto`] with the matching status code.

pub mod member;
pub mod search;
