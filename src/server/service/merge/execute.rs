use std::collections::HashSet;

use crate::server::{
    error::{merge::MergeError, Error},
    service::merge::{
        plan::MergePlan,
        registry::{MemberRegistry, OwnedKind},
    },
};

/// Row counts reported by a completed merge
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MergeResult {
    pub primary: i32,
    pub members_merged: u64,
    pub aliases_repointed: u64,
    pub aliases_deleted: u64,
    pub tenures_repointed: u64,
    pub votes_repointed: u64,
    pub sponsorships_added: u64,
}

impl MergeResult {
    pub fn is_noop(&self) -> bool {
        self.members_merged == 0
    }
}

/// Applies a [`MergePlan`] as a fixed sequence of bulk statements.
///
/// A no-op plan returns immediately without touching the store. Otherwise member existence
/// is checked before any write and again right before the duplicates are deleted, so a plan
/// that raced with another writer, or one that was already executed, fails instead of
/// silently merging a partial set.
///
/// # Errors
/// - [`MergeError::StaleMerge`] if the primary or a duplicate no longer exists
pub async fn execute_merge<R>(registry: &R, plan: &MergePlan) -> Result<MergeResult, Error>
where
    R: MemberRegistry + Sync,
{
    if plan.is_noop() {
        return Ok(MergeResult {
            primary: plan.primary,
            ..Default::default()
        });
    }

    ensure_members_exist(registry, plan).await?;

    let aliases_repointed = registry
        .bulk_update_owner(OwnedKind::Alias, &plan.repoint_aliases, plan.primary)
        .await?;
    let tenures_repointed = registry
        .bulk_update_owner(OwnedKind::Tenure, &plan.repoint_tenures, plan.primary)
        .await?;
    let votes_repointed = registry
        .bulk_update_owner(OwnedKind::Vote, &plan.repoint_votes, plan.primary)
        .await?;

    let aliases_deleted = registry
        .bulk_delete(OwnedKind::Alias, &plan.delete_aliases)
        .await?;

    let sponsorships_added = registry
        .add_sponsors(&plan.add_sponsorships, plan.primary)
        .await?;

    ensure_members_exist(registry, plan).await?;

    registry.delete_sponsorships_of(&plan.duplicates).await?;
    let members_merged = registry.delete_members(&plan.duplicates).await?;

    if members_merged != plan.duplicates.len() as u64 {
        return Err(MergeError::StaleMerge(format!(
            "deleted {} of {} duplicate council members",
            members_merged,
            plan.duplicates.len()
        ))
        .into());
    }

    Ok(MergeResult {
        primary: plan.primary,
        members_merged,
        aliases_repointed,
        aliases_deleted,
        tenures_repointed,
        votes_repointed,
        sponsorships_added,
    })
}

async fn ensure_members_exist<R>(registry: &R, plan: &MergePlan) -> Result<(), Error>
where
    R: MemberRegistry + Sync,
{
    let member_ids = plan.member_ids();
    let found: HashSet<i32> = registry
        .find_members(&member_ids)
        .await?
        .into_iter()
        .map(|m| m.id)
        .collect();

    let missing: Vec<i32> = member_ids
        .into_iter()
        .filter(|id| !found.contains(id))
        .collect();

    if !missing.is_empty() {
        return Err(MergeError::StaleMerge(format!(
            "council members {:?} no longer exist",
            missing
        ))
        .into());
    }

    Ok(())
}
