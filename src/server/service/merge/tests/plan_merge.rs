use super::*;

/// Expect the planner to mirror the Poe merge: shared names dropped, everything else moved
#[tokio::test]
async fn plans_merge_of_shared_aliases() -> Result<(), TestError> {
    let test = poe_setup().await?;
    let registry = SeaOrmMemberRegistry::new(&test.db);

    let plan = plan_merge(&registry, 2, &[1, 2]).await.unwrap();

    assert_eq!(plan.primary, 2);
    assert_eq!(plan.primary_name, "Mjumbe Poe");
    assert_eq!(plan.duplicates, vec![1]);
    assert_eq!(plan.repoint_aliases, vec![2, 3]);
    assert_eq!(plan.delete_aliases, vec![1]);
    assert_eq!(plan.repoint_tenures, vec![1, 2]);
    assert!(plan.repoint_votes.is_empty());
    assert_eq!(plan.add_sponsorships, vec![1209, 3487]);

    Ok(())
}

/// Expect the primary and repeated IDs to be dropped from the duplicate set
#[tokio::test]
async fn normalizes_duplicate_set() -> Result<(), TestError> {
    let test = poe_setup().await?;
    let registry = SeaOrmMemberRegistry::new(&test.db);

    let plan = plan_merge(&registry, 2, &[1, 2, 1]).await.unwrap();

    assert_eq!(plan.duplicates, vec![1]);

    Ok(())
}

/// Expect a no-op plan when the primary is the only member given
#[tokio::test]
async fn returns_noop_for_empty_duplicate_set() -> Result<(), TestError> {
    let test = poe_setup().await?;
    let registry = InstrumentedRegistry::new(SeaOrmMemberRegistry::new(&test.db));

    let plan = plan_merge(&registry, 1, &[1]).await.unwrap();

    assert!(plan.is_noop());
    assert_eq!(plan.primary_name, "Mjumbe Poe");
    assert_eq!(registry.reads(), 1);

    Ok(())
}

/// Expect UnknownMember listing every missing duplicate
#[tokio::test]
async fn fails_for_unknown_duplicate() -> Result<(), TestError> {
    let test = poe_setup().await?;
    let registry = SeaOrmMemberRegistry::new(&test.db);

    let result = plan_merge(&registry, 1, &[2, 42, 41]).await;

    assert!(matches!(
        result,
        Err(Error::MergeError(MergeError::UnknownMember(ids))) if ids == vec![41, 42]
    ));

    Ok(())
}

/// Expect UnknownMember when the primary itself does not exist, even for a no-op
#[tokio::test]
async fn fails_for_unknown_primary() -> Result<(), TestError> {
    let test = poe_setup().await?;
    let registry = SeaOrmMemberRegistry::new(&test.db);

    let result = plan_merge(&registry, 42, &[]).await;

    assert!(matches!(
        result,
        Err(Error::MergeError(MergeError::UnknownMember(ids))) if ids == vec![42]
    ));

    Ok(())
}

/// Expect sponsorships of legislation the primary already sponsors to be skipped
#[tokio::test]
async fn skips_legislation_already_sponsored_by_primary() -> Result<(), TestError> {
    let test = poe_setup().await?;
    test.legislation().insert_sponsor(1209, 2).await?;
    let registry = SeaOrmMemberRegistry::new(&test.db);

    let plan = plan_merge(&registry, 2, &[1]).await.unwrap();

    assert_eq!(plan.add_sponsorships, vec![3487]);

    Ok(())
}

/// Expect the same number of reads whether merging one small or several large duplicates
#[tokio::test]
async fn reads_are_bounded() -> Result<(), TestError> {
    let test = poe_setup().await?;
    for n in 0..5 {
        let (member, _) = test
            .member()
            .insert_member_with_aliases("M. Poe", &["Mjumbe Poe", "M. Poe"])
            .await?;
        for year in 0..n {
            test.member()
                .insert_tenure(member.id, date(1990 + year, 1, 1), None)
                .await?;
            test.legislation().insert_vote(member.id, None).await?;
        }
    }

    let small = InstrumentedRegistry::new(SeaOrmMemberRegistry::new(&test.db));
    plan_merge(&small, 2, &[1]).await.unwrap();

    let large = InstrumentedRegistry::new(SeaOrmMemberRegistry::new(&test.db));
    let plan = plan_merge(&large, 2, &[1, 3, 4, 5, 6, 7]).await.unwrap();

    assert_eq!(plan.repoint_tenures.len(), 2 + 10);
    assert_eq!(plan.repoint_votes.len(), 10);
    assert_eq!(small.reads(), 5);
    assert_eq!(large.reads(), small.reads());
    assert_eq!(large.writes(), 0);

    Ok(())
}
