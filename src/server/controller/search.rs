use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        search::{LegislationDocumentDto, MinutesDocumentDto, UpdatedSinceQuery},
    },
    server::{error::Error, model::app::AppState, service::search::SearchService},
};

pub static SEARCH_TAG: &str = "search";

/// Get index documents for legislation updated since a point in time
#[utoipa::path(
    get,
    path = "/api/search/legislation",
    tag = SEARCH_TAG,
    params(UpdatedSinceQuery),
    responses(
        (status = 200, description = "Documents to (re-)index", body = Vec<LegislationDocumentDto>),
        (status = 400, description = "Missing or malformed timestamp"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_legislation_documents(
    State(state): State<AppState>,
    Query(query): Query<UpdatedSinceQuery>,
) -> Result<impl IntoResponse, Error> {
    let documents = SearchService::new(&state.db)
        .get_documents_updated_since(query.since.naive_utc())
        .await?;

    Ok((StatusCode::OK, Json(documents)).into_response())
}

/// Get index documents for council session minutes updated since a point in time
#[utoipa::path(
    get,
    path = "/api/search/minutes",
    tag = SEARCH_TAG,
    params(UpdatedSinceQuery),
    responses(
        (status = 200, description = "Minutes to (re-)index", body = Vec<MinutesDocumentDto>),
        (status = 400, description = "Missing or malformed timestamp"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_minutes_documents(
    State(state): State<AppState>,
    Query(query): Query<UpdatedSinceQuery>,
) -> Result<impl IntoResponse, Error> {
    let documents = SearchService::new(&state.db)
        .get_minutes_updated_since(query.since.naive_utc())
        .await?;

    Ok((StatusCode::OK, Json(documents)).into_response())
}
