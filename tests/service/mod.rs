//! End-to-end tests for the services against an in-memory database.

mod merge;
mod search;

use std::time::Duration;

use chrono::NaiveDate;
use councilmatic::server::service::{merge::MergeService, retry::RetryContext};
use councilmatic_test_utils::prelude::*;
use sea_orm::DatabaseConnection;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Merge service that retries immediately
fn merge_service(db: &DatabaseConnection) -> MergeService<'_> {
    MergeService::new(db).with_retry(RetryContext::new().with_initial_backoff(Duration::ZERO))
}
