//! Tests for council member administration endpoints.

mod get_members;
mod merge_members;

use super::*;
