use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::{Duration, NaiveDate, Utc};
use councilmatic::{
    model::search::UpdatedSinceQuery,
    server::controller::search::{get_legislation_documents, get_minutes_documents},
};

use super::*;

/// Tests retrieving documents for recently updated legislation.
///
/// Expected: 200 OK with sponsor names and aliases in each document
#[tokio::test]
async fn returns_updated_documents() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_member_tables()
        .with_member("Mjumbe Poe", &["Councilmember Poe"])
        .with_legislation(1209, "100001", "Resolution authorizing hearings")
        .with_sponsorship(1209, 0)
        .with_topic(1209, "Public hearings")
        .build()
        .await?;

    let since = Utc::now() - Duration::hours(1);
    let result =
        get_legislation_documents(State(test.into_app_state()), Query(UpdatedSinceQuery { since }))
            .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    let documents = body.as_array().unwrap();
    assert_eq!(documents.len(), 1);
    assert_eq!(documents[0]["key"], 1209);
    assert_eq!(documents[0]["text"], "Resolution authorizing hearings");
    assert_eq!(documents[0]["is_blank"], false);
    assert_eq!(documents[0]["order_date"], "2011-01-27");
    assert_eq!(documents[0]["topics"], serde_json::json!(["Public hearings"]));
    assert_eq!(
        documents[0]["sponsors"],
        serde_json::json!(["Mjumbe Poe", "Councilmember Poe"])
    );

    Ok(())
}

/// Tests that legislation updated before the cutoff is left out.
///
/// Expected: 200 OK with an empty list
#[tokio::test]
async fn omits_documents_updated_before_cutoff() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_member_tables()
        .with_legislation(1209, "100001", "Resolution authorizing hearings")
        .build()
        .await?;

    let since = Utc::now() + Duration::hours(1);
    let result =
        get_legislation_documents(State(test.into_app_state()), Query(UpdatedSinceQuery { since }))
            .await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await, serde_json::json!([]));

    Ok(())
}

/// Tests retrieving documents for recently updated minutes.
///
/// Expected: 200 OK with the full text and session date
#[tokio::test]
async fn returns_updated_minutes() -> Result<(), TestError> {
    let test = TestBuilder::new().with_member_tables().build().await?;
    let now = Utc::now().naive_utc();
    test.legislation()
        .insert_minutes(
            "Stated meeting of City Council",
            NaiveDate::from_ymd_opt(2011, 2, 3),
            now,
        )
        .await?;
    test.legislation()
        .insert_minutes("Older session", None, now - Duration::days(30))
        .await?;

    let since = Utc::now() - Duration::hours(1);
    let result =
        get_minutes_documents(State(test.into_app_state()), Query(UpdatedSinceQuery { since }))
            .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    let documents = body.as_array().unwrap();
    assert_eq!(documents.len(), 1);
    assert_eq!(documents[0]["text"], "Stated meeting of City Council");
    assert_eq!(documents[0]["date_taken"], "2011-02-03");
    assert_eq!(documents[0]["order_date"], "2011-02-03");

    Ok(())
}

/// Tests the response when the minutes table does not exist.
///
/// Expected: 500 Internal Server Error
#[tokio::test]
async fn internal_error_without_minutes_table() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;

    let since = Utc::now();
    let result =
        get_minutes_documents(State(test.into_app_state()), Query(UpdatedSinceQuery { since }))
            .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}
