//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with extracted inputs, and both the status code and the JSON
//! body are checked.

mod member;
mod search;

use councilmatic_test_utils::prelude::*;

use crate::util::{body_json, TestContextExt};
