//! Data access layer repositories.
//!
//! Repositories wrap SeaORM queries for one table each and are generic over
//! [`sea_orm::ConnectionTrait`], so the same code runs against a pooled connection or inside
//! a transaction.

pub mod legislation;
pub mod member;
