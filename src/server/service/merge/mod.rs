//! Council member merge.
//!
//! [`plan::plan_merge`] reads the duplicates' aliases, tenures, votes and sponsorships in a
//! constant number of bulk queries and decides what moves and what is dropped.
//! [`execute::execute_merge`] applies that plan as a constant number of bulk writes and then
//! deletes the duplicates. [`MergeService`] runs both inside one transaction.

#[cfg(test)]
mod tests;

pub mod execute;
pub mod plan;
pub mod registry;

use std::collections::BTreeSet;

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::legislation::{sponsor::SponsorRepository, LegislationRepository},
    error::{merge::MergeError, Error},
    service::{
        merge::{
            execute::{execute_merge, MergeResult},
            plan::plan_merge,
            registry::SeaOrmMemberRegistry,
        },
        retry::RetryContext,
    },
};

/// Outcome of an administrative merge
#[derive(Clone, Debug)]
pub struct MergeOutcome {
    pub primary_name: String,
    /// Number of distinct members the operator selected, primary included
    pub members_selected: usize,
    /// Legislative files queued for re-indexing
    pub legislation_marked: u64,
    pub result: MergeResult,
}

impl MergeOutcome {
    /// Audit message shown to the operator
    pub fn message(&self) -> String {
        format!(
            "Successfully merged {} council members into {}",
            self.members_selected, self.primary_name
        )
    }
}

pub struct MergeService<'a> {
    db: &'a DatabaseConnection,
    retry: RetryContext,
}

impl<'a> MergeService<'a> {
    /// Creates a new instance of [`MergeService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            retry: RetryContext::new(),
        }
    }

    pub fn with_retry(mut self, retry: RetryContext) -> Self {
        self.retry = retry;
        self
    }

    /// Merges every selected member into `primary`.
    ///
    /// Planning, execution and re-index marking share a single transaction, so a failure at
    /// any step leaves the store untouched. A stale plan is retried from scratch in a fresh
    /// transaction.
    ///
    /// # Errors
    /// - [`MergeError::InvalidSelection`] if `primary` is not selected or nothing else is
    /// - [`MergeError::UnknownMember`] if a selected member does not exist
    /// - [`MergeError::StaleMerge`] if members kept changing across every attempt
    pub async fn merge_members(&self, primary: i32, selected: &[i32]) -> Result<MergeOutcome, Error> {
        let selected: BTreeSet<i32> = selected.iter().copied().collect();

        if !selected.contains(&primary) {
            return Err(MergeError::InvalidSelection(format!(
                "primary council member {} is not among the selected members",
                primary
            ))
            .into());
        }

        let duplicates: Vec<i32> = selected
            .iter()
            .copied()
            .filter(|id| *id != primary)
            .collect();
        if duplicates.is_empty() {
            return Err(MergeError::InvalidSelection(
                "select at least one council member besides the primary".to_string(),
            )
            .into());
        }

        let db = self.db.clone();

        let (primary_name, legislation_marked, result) = self
            .retry
            .execute_with_retry(
                &format!("merge into council member {}", primary),
                || {
                    let db = db.clone();
                    let duplicates = duplicates.clone();

                    Box::pin(async move {
                        let txn = db.begin().await?;
                        let registry = SeaOrmMemberRegistry::new(&txn);

                        let plan = plan_merge(&registry, primary, &duplicates).await?;
                        let result = execute_merge(&registry, &plan).await?;

                        let sponsored: Vec<i32> = SponsorRepository::new(&txn)
                            .get_keys_by_member_ids(&[primary])
                            .await?
                            .into_iter()
                            .map(|(key, _)| key)
                            .collect();
                        let legislation_marked = LegislationRepository::new(&txn)
                            .mark_updated(&sponsored)
                            .await?;

                        txn.commit().await?;

                        Ok::<_, Error>((plan.primary_name, legislation_marked, result))
                    })
                },
            )
            .await?;

        let outcome = MergeOutcome {
            primary_name,
            members_selected: selected.len(),
            legislation_marked,
            result,
        };

        tracing::info!(
            primary_id = primary,
            members_merged = outcome.result.members_merged,
            aliases_repointed = outcome.result.aliases_repointed,
            aliases_deleted = outcome.result.aliases_deleted,
            tenures_repointed = outcome.result.tenures_repointed,
            votes_repointed = outcome.result.votes_repointed,
            sponsorships_added = outcome.result.sponsorships_added,
            legislation_marked = outcome.legislation_marked,
            "{}",
            outcome.message()
        );

        Ok(outcome)
    }
}
