//! Tests for MergeService::merge_members covering the store-level merge guarantees.

mod merge_members;

use super::*;
