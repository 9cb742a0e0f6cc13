use std::future::Future;

use sea_orm::{ConnectionTrait, DbErr};

use crate::server::{
    data::{
        legislation::{sponsor::SponsorRepository, vote::VoteRepository},
        member::{alias::AliasRepository, tenure::TenureRepository, CouncilMemberRepository},
    },
    model::db::{CouncilMemberAliasModel, CouncilMemberModel},
};

/// Rows owned by a council member that a merge moves to the primary
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OwnedKind {
    Alias,
    Tenure,
    Vote,
}

/// Store operations the merge planner and executor are built on.
///
/// Every method is a single bulk statement over an ID set, which is what keeps the number
/// of round-trips of a merge independent of how many rows it moves.
pub trait MemberRegistry {
    /// Members with the provided IDs; missing IDs are skipped
    fn find_members(
        &self,
        ids: &[i32],
    ) -> impl Future<Output = Result<Vec<CouncilMemberModel>, DbErr>> + Send;

    /// Aliases owned by the provided members, ordered by alias ID
    fn find_aliases_for(
        &self,
        member_ids: &[i32],
    ) -> impl Future<Output = Result<Vec<CouncilMemberAliasModel>, DbErr>> + Send;

    /// `(tenure_id, member_id)` pairs
    fn find_tenure_ids_for(
        &self,
        member_ids: &[i32],
    ) -> impl Future<Output = Result<Vec<(i32, i32)>, DbErr>> + Send;

    /// `(vote_id, voter_id)` pairs
    fn find_vote_ids_for(
        &self,
        member_ids: &[i32],
    ) -> impl Future<Output = Result<Vec<(i32, i32)>, DbErr>> + Send;

    /// `(leg_file_key, member_id)` pairs
    fn find_sponsored_keys_for(
        &self,
        member_ids: &[i32],
    ) -> impl Future<Output = Result<Vec<(i32, i32)>, DbErr>> + Send;

    /// Moves rows of `kind` to `new_owner`
    fn bulk_update_owner(
        &self,
        kind: OwnedKind,
        ids: &[i32],
        new_owner: i32,
    ) -> impl Future<Output = Result<u64, DbErr>> + Send;

    /// Deletes rows of `kind` by ID
    ///
    /// Accepts every [`OwnedKind`]; a merge only deletes redundant aliases.
    fn bulk_delete(
        &self,
        kind: OwnedKind,
        ids: &[i32],
    ) -> impl Future<Output = Result<u64, DbErr>> + Send;

    /// Adds `member` as a sponsor of every key, skipping links that already exist
    fn add_sponsors(
        &self,
        legislation_keys: &[i32],
        member: i32,
    ) -> impl Future<Output = Result<u64, DbErr>> + Send;

    fn delete_sponsorships_of(
        &self,
        member_ids: &[i32],
    ) -> impl Future<Output = Result<u64, DbErr>> + Send;

    fn delete_members(&self, ids: &[i32]) -> impl Future<Output = Result<u64, DbErr>> + Send;
}

/// [`MemberRegistry`] over the SeaORM repositories
///
/// Pass a [`sea_orm::DatabaseTransaction`] to run a whole merge atomically.
pub struct SeaOrmMemberRegistry<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SeaOrmMemberRegistry<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }
}

impl<'a, C: ConnectionTrait> MemberRegistry for SeaOrmMemberRegistry<'a, C> {
    async fn find_members(&self, ids: &[i32]) -> Result<Vec<CouncilMemberModel>, DbErr> {
        CouncilMemberRepository::new(self.db).find_many(ids).await
    }

    async fn find_aliases_for(
        &self,
        member_ids: &[i32],
    ) -> Result<Vec<CouncilMemberAliasModel>, DbErr> {
        AliasRepository::new(self.db)
            .find_by_member_ids(member_ids)
            .await
    }

    async fn find_tenure_ids_for(&self, member_ids: &[i32]) -> Result<Vec<(i32, i32)>, DbErr> {
        TenureRepository::new(self.db)
            .get_ids_by_member_ids(member_ids)
            .await
    }

    async fn find_vote_ids_for(&self, member_ids: &[i32]) -> Result<Vec<(i32, i32)>, DbErr> {
        VoteRepository::new(self.db)
            .get_ids_by_voter_ids(member_ids)
            .await
    }

    async fn find_sponsored_keys_for(&self, member_ids: &[i32]) -> Result<Vec<(i32, i32)>, DbErr> {
        SponsorRepository::new(self.db)
            .get_keys_by_member_ids(member_ids)
            .await
    }

    async fn bulk_update_owner(
        &self,
        kind: OwnedKind,
        ids: &[i32],
        new_owner: i32,
    ) -> Result<u64, DbErr> {
        match kind {
            OwnedKind::Alias => AliasRepository::new(self.db).update_member(ids, new_owner).await,
            OwnedKind::Tenure => {
                TenureRepository::new(self.db)
                    .update_member(ids, new_owner)
                    .await
            }
            OwnedKind::Vote => VoteRepository::new(self.db).update_voter(ids, new_owner).await,
        }
    }

    async fn bulk_delete(&self, kind: OwnedKind, ids: &[i32]) -> Result<u64, DbErr> {
        match kind {
            OwnedKind::Alias => AliasRepository::new(self.db).delete_many(ids).await,
            OwnedKind::Tenure => TenureRepository::new(self.db).delete_many(ids).await,
            OwnedKind::Vote => VoteRepository::new(self.db).delete_many(ids).await,
        }
    }

    async fn add_sponsors(&self, legislation_keys: &[i32], member: i32) -> Result<u64, DbErr> {
        SponsorRepository::new(self.db)
            .add_sponsor_to_many(legislation_keys, member)
            .await
    }

    async fn delete_sponsorships_of(&self, member_ids: &[i32]) -> Result<u64, DbErr> {
        SponsorRepository::new(self.db)
            .delete_by_member_ids(member_ids)
            .await
    }

    async fn delete_members(&self, ids: &[i32]) -> Result<u64, DbErr> {
        CouncilMemberRepository::new(self.db).delete_many(ids).await
    }
}
