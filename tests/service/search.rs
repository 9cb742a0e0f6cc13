use chrono::Utc;
use councilmatic::server::service::search::SearchService;

use super::*;

/// Tests that a merge queues the primary's legislation for re-indexing under its new names.
///
/// Expected: files sponsored by either record are returned with the merged alias set
#[tokio::test]
async fn merged_legislation_is_reindexed_with_merged_aliases() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_member_tables()
        .with_member("Mjumbe Poe", &["Councilmember Poe"])
        .with_member("Mjumbe Poe", &["mjumbewu"])
        .build()
        .await?;
    let stale = Utc::now().naive_utc() - chrono::Duration::days(30);
    test.legislation()
        .insert_leg_file_updated_at(1209, "100001", "abc", stale)
        .await?;
    test.legislation()
        .insert_leg_file_updated_at(5665, "100003", "ghi", stale)
        .await?;
    test.legislation()
        .insert_leg_file_updated_at(7000, "100005", "unrelated", stale)
        .await?;
    test.legislation().insert_sponsor(1209, 1).await?;
    test.legislation().insert_sponsor(5665, 2).await?;

    let since = Utc::now().naive_utc() - chrono::Duration::days(1);
    let search = SearchService::new(&test.db);
    assert!(search.get_documents_updated_since(since).await.unwrap().is_empty());

    merge_service(&test.db).merge_members(1, &[1, 2]).await.unwrap();

    let documents = search.get_documents_updated_since(since).await.unwrap();
    let keys: Vec<i32> = documents.iter().map(|d| d.key).collect();
    assert_eq!(keys, vec![1209, 5665]);
    for document in documents {
        assert_eq!(
            document.sponsors,
            vec!["Mjumbe Poe", "Councilmember Poe", "mjumbewu"]
        );
    }

    Ok(())
}
