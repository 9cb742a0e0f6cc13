use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum MergeError {
    /// The primary or a duplicate did not exist when the merge was planned.
    #[error("Unknown council member IDs: {0:?}")]
    UnknownMember(Vec<i32>),
    /// Members changed between planning and execution.
    #[error("Merge plan is stale: {0}")]
    StaleMerge(String),
    #[error("Invalid council member selection: {0}")]
    InvalidSelection(String),
}

/// # Returns
/// - 400 Bad Request - Invalid selection
/// - 404 Not Found - Unknown council member
/// - 409 Conflict - Stale merge plan
impl IntoResponse for MergeError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::UnknownMember(_) => StatusCode::NOT_FOUND,
            Self::StaleMerge(_) => StatusCode::CONFLICT,
            Self::InvalidSelection(_) => StatusCode::BAD_REQUEST,
        };

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
