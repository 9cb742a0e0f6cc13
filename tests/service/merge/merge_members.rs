use councilmatic::server::error::{merge::MergeError, Error};
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder};

use super::*;

/// Tests the basic example: A {"Jane Doe"}, B {"Jane Doe", "J. Doe"} with a tenure, a vote
/// and a sponsorship.
///
/// Expected: A owns both names, the tenure and the vote, sponsors L1, and B is gone
#[tokio::test]
async fn moves_everything_onto_primary() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_member_tables()
        .with_member("Jane Doe", &["Jane Doe"])
        .with_member("Jane Doe", &["Jane Doe", "J. Doe"])
        .with_tenure(1, date(2008, 1, 7), Some(date(2010, 1, 4)))
        .with_legislation(1, "100001", "Bill L1")
        .with_sponsorship(1, 1)
        .build()
        .await?;
    let action = test.legislation().insert_action(Some(1)).await?;
    let vote = test.legislation().insert_vote(2, Some(action.id)).await?;

    merge_service(&test.db).merge_members(1, &[1, 2]).await.unwrap();

    let names: Vec<String> = entity::prelude::CouncilMemberAlias::find()
        .filter(entity::council_member_alias::Column::MemberId.eq(1))
        .order_by_asc(entity::council_member_alias::Column::Id)
        .all(&test.db)
        .await?
        .into_iter()
        .map(|a| a.name)
        .collect();
    assert_eq!(names, vec!["Jane Doe", "J. Doe"]);

    let tenures = entity::prelude::CouncilMemberTenure::find().all(&test.db).await?;
    assert_eq!(tenures.len(), 1);
    assert_eq!(tenures[0].member_id, 1);

    let vote = entity::prelude::LegVote::find_by_id(vote.id)
        .one(&test.db)
        .await?
        .unwrap();
    assert_eq!(vote.voter_id, 1);

    let sponsors = entity::prelude::LegFileSponsor::find().all(&test.db).await?;
    assert_eq!(sponsors.len(), 1);
    assert_eq!(sponsors[0].member_id, 1);

    assert!(entity::prelude::CouncilMember::find_by_id(2)
        .one(&test.db)
        .await?
        .is_none());

    Ok(())
}

/// Tests a three-way merge where the duplicates share names with each other and the primary.
///
/// Expected: one alias per distinct name, every tenure and vote kept, no duplicate sponsor rows
#[tokio::test]
async fn deduplicates_aliases_and_conserves_rows() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_member_tables()
        .with_member("Mjumbe Poe", &["Mjumbe Poe"])
        .with_member("M. Poe", &["Mjumbe Poe", "M. Poe", "mjumbewu"])
        .with_member("Poe", &["M. Poe", "Councilmember Poe"])
        .with_tenure(0, date(2008, 12, 14), Some(date(2010, 12, 13)))
        .with_tenure(1, date(2010, 12, 14), Some(date(2012, 12, 13)))
        .with_tenure(2, date(2012, 12, 14), None)
        .with_legislation(1209, "100001", "abc")
        .with_legislation(3487, "100002", "def")
        .with_sponsorship(1209, 0)
        .with_sponsorship(1209, 1)
        .with_sponsorship(3487, 1)
        .with_sponsorship(3487, 2)
        .build()
        .await?;
    let action = test.legislation().insert_action(Some(1209)).await?;
    for voter in [1, 2, 3, 3] {
        test.legislation().insert_vote(voter, Some(action.id)).await?;
    }

    let outcome = merge_service(&test.db)
        .merge_members(1, &[3, 1, 2])
        .await
        .unwrap();

    assert_eq!(outcome.members_selected, 3);
    assert_eq!(outcome.result.members_merged, 2);

    let mut names: Vec<String> = entity::prelude::CouncilMemberAlias::find()
        .all(&test.db)
        .await?
        .into_iter()
        .map(|a| a.name)
        .collect();
    names.sort();
    assert_eq!(
        names,
        vec!["Councilmember Poe", "M. Poe", "Mjumbe Poe", "mjumbewu"]
    );

    assert_eq!(
        entity::prelude::CouncilMemberTenure::find()
            .filter(entity::council_member_tenure::Column::MemberId.eq(1))
            .count(&test.db)
            .await?,
        3
    );
    assert_eq!(
        entity::prelude::LegVote::find()
            .filter(entity::leg_vote::Column::VoterId.eq(1))
            .count(&test.db)
            .await?,
        4
    );

    let keys: Vec<i32> = entity::prelude::LegFileSponsor::find()
        .order_by_asc(entity::leg_file_sponsor::Column::LegFileKey)
        .all(&test.db)
        .await?
        .into_iter()
        .map(|s| {
            assert_eq!(s.member_id, 1);
            s.leg_file_key
        })
        .collect();
    assert_eq!(keys, vec![1209, 3487]);

    assert_eq!(entity::prelude::CouncilMember::find().count(&test.db).await?, 1);

    Ok(())
}

/// Tests repeating a merge that already completed.
///
/// Expected: Err(UnknownMember) naming the deleted duplicate, nothing changed
#[tokio::test]
async fn repeated_merge_reports_missing_duplicates() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_member_tables()
        .with_member("Jane Doe", &["Jane Doe"])
        .with_member("Jane Doe", &["J. Doe"])
        .build()
        .await?;

    merge_service(&test.db).merge_members(1, &[1, 2]).await.unwrap();
    let result = merge_service(&test.db).merge_members(1, &[1, 2]).await;

    match result {
        Err(Error::MergeError(MergeError::UnknownMember(ids))) => assert_eq!(ids, vec![2]),
        other => panic!("expected UnknownMember, got {:?}", other.map(|o| o.message())),
    }
    assert_eq!(
        entity::prelude::CouncilMemberAlias::find().count(&test.db).await?,
        2
    );

    Ok(())
}
