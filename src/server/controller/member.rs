use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        member::{CouncilMemberDto, MemberSelectionQuery, MergeRequestDto, MergeResponseDto},
    },
    server::{
        error::Error,
        model::app::AppState,
        service::{
            member::{parse_member_ids, MemberService},
            merge::MergeService,
        },
    },
};

pub static MEMBER_TAG: &str = "council-member";

/// Merge the selected council members into a primary record
///
/// Aliases, tenures, votes and sponsorships of the other selected members are moved to the
/// primary, after which those members are deleted.
#[utoipa::path(
    post,
    path = "/api/admin/council-members/merge",
    tag = MEMBER_TAG,
    request_body = MergeRequestDto,
    responses(
        (status = 200, description = "Members merged into the primary", body = MergeResponseDto),
        (status = 400, description = "Primary not selected or nothing to merge", body = ErrorDto),
        (status = 404, description = "A selected council member does not exist", body = ErrorDto),
        (status = 409, description = "Members changed while the merge was running", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn merge_members(
    State(state): State<AppState>,
    Json(request): Json<MergeRequestDto>,
) -> Result<impl IntoResponse, Error> {
    let merge_service = MergeService::new(&state.db);

    let outcome = merge_service
        .merge_members(request.primary, &request.members)
        .await?;

    let response = MergeResponseDto {
        message: outcome.message(),
        primary: request.primary,
        members_merged: outcome.result.members_merged,
        aliases_repointed: outcome.result.aliases_repointed,
        aliases_deleted: outcome.result.aliases_deleted,
        tenures_repointed: outcome.result.tenures_repointed,
        votes_repointed: outcome.result.votes_repointed,
        sponsorships_added: outcome.result.sponsorships_added,
        noop: outcome.result.is_noop(),
    };

    Ok((StatusCode::OK, Json(response)).into_response())
}

/// Get the selected council members with their aliases
#[utoipa::path(
    get,
    path = "/api/admin/council-members",
    tag = MEMBER_TAG,
    params(MemberSelectionQuery),
    responses(
        (status = 200, description = "Selected council members, unknown IDs omitted", body = Vec<CouncilMemberDto>),
        (status = 400, description = "Malformed ID list", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_members(
    State(state): State<AppState>,
    Query(query): Query<MemberSelectionQuery>,
) -> Result<impl IntoResponse, Error> {
    let ids = parse_member_ids(&query.ids)?;

    let members = MemberService::new(&state.db).get_members(&ids).await?;

    Ok((StatusCode::OK, Json(members)).into_response())
}
