use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use councilmatic::{model::member::MergeRequestDto, server::controller::member::merge_members};

use super::*;

fn request(primary: i32, members: &[i32]) -> Json<MergeRequestDto> {
    Json(MergeRequestDto {
        primary,
        members: members.to_vec(),
    })
}

/// Tests a successful merge of two records for the same person.
///
/// Expected: 200 OK with the audit message and count breakdown
#[tokio::test]
async fn merges_selected_members() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_member_tables()
        .with_member("Jane Doe", &["Jane Doe"])
        .with_member("Jane Doe", &["Jane Doe", "J. Doe"])
        .with_legislation(1209, "100001", "Resolution honoring Jane Doe")
        .with_sponsorship(1209, 1)
        .build()
        .await?;

    let result = merge_members(State(test.into_app_state()), request(1, &[1, 2])).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    assert_eq!(
        body["message"],
        "Successfully merged 2 council members into Jane Doe"
    );
    assert_eq!(body["primary"], 1);
    assert_eq!(body["members_merged"], 1);
    assert_eq!(body["aliases_repointed"], 1);
    assert_eq!(body["aliases_deleted"], 1);
    assert_eq!(body["sponsorships_added"], 1);
    assert_eq!(body["noop"], false);

    Ok(())
}

/// Tests a selection that does not include the primary.
///
/// Expected: 400 Bad Request
#[tokio::test]
async fn bad_request_when_primary_not_selected() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_member_tables()
        .with_member("Jane Doe", &[])
        .with_member("J. Doe", &[])
        .build()
        .await?;

    let result = merge_members(State(test.into_app_state()), request(1, &[2])).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Tests a selection containing only the primary.
///
/// Expected: 400 Bad Request
#[tokio::test]
async fn bad_request_when_only_primary_selected() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_member_tables()
        .with_member("Jane Doe", &[])
        .build()
        .await?;

    let result = merge_members(State(test.into_app_state()), request(1, &[1])).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Tests a selection containing a member that does not exist.
///
/// Expected: 404 Not Found with the error message naming the missing ID
#[tokio::test]
async fn not_found_for_unknown_member() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_member_tables()
        .with_member("Jane Doe", &[])
        .build()
        .await?;

    let result = merge_members(State(test.into_app_state()), request(1, &[1, 42])).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body = body_json(resp).await;
    assert!(body["error"].as_str().unwrap().contains("42"));

    Ok(())
}

/// Tests the response when the member tables do not exist.
///
/// Expected: 500 Internal Server Error with a generic message
#[tokio::test]
async fn internal_error_without_tables() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;

    let result = merge_members(State(test.into_app_state()), request(1, &[1, 2])).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = body_json(resp).await;
    assert_eq!(body["error"], "Internal server error");

    Ok(())
}
