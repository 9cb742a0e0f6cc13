use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::NaiveDate;
use councilmatic::{model::member::MemberSelectionQuery, server::controller::member::get_members};

use super::*;

fn query(ids: &str) -> Query<MemberSelectionQuery> {
    Query(MemberSelectionQuery {
        ids: ids.to_string(),
    })
}

/// Tests listing the operator's selection.
///
/// Expected: 200 OK with the known members in ID order
#[tokio::test]
async fn lists_selected_members() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_member_tables()
        .with_member("Mjumbe Poe", &["Councilmember Poe"])
        .with_member("Jane Doe", &[])
        .with_tenure(
            0,
            NaiveDate::from_ymd_opt(2008, 12, 14).unwrap(),
            NaiveDate::from_ymd_opt(2010, 12, 14),
        )
        .build()
        .await?;

    let result = get_members(State(test.into_app_state()), query("2,1,7")).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    let members = body.as_array().unwrap();
    assert_eq!(members.len(), 2);
    assert_eq!(members[0]["real_name"], "Mjumbe Poe");
    assert_eq!(members[0]["aliases"][0], "Councilmember Poe");
    assert_eq!(members[0]["tenure_begin"], "2008-12-14");
    assert!(members[1]["tenure_begin"].is_null());

    Ok(())
}

/// Tests a malformed ID list.
///
/// Expected: 400 Bad Request
#[tokio::test]
async fn bad_request_for_malformed_ids() -> Result<(), TestError> {
    let test = TestBuilder::new().with_member_tables().build().await?;

    let result = get_members(State(test.into_app_state()), query("1,abc")).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}
