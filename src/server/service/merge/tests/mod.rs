mod plan_merge;

use std::sync::atomic::{AtomicUsize, Ordering};

use chrono::NaiveDate;
use councilmatic_test_utils::prelude::*;
use sea_orm::DbErr;

use super::*;
use crate::server::{
    model::db::{CouncilMemberAliasModel, CouncilMemberModel},
    service::merge::registry::{MemberRegistry, OwnedKind},
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Two records for the same person ingested under different spellings.
///
/// Member 1 owns aliases 1..=3, tenures 1 and 2 and sponsors 1209 and 3487. Member 2 owns
/// aliases 4..=6, tenures 3 and 4 and sponsors 5665 and 7843.
async fn poe_setup() -> Result<TestContext, TestError> {
    TestBuilder::new()
        .with_member_tables()
        .with_member(
            "Mjumbe Poe",
            &["Mjumbe Poe", "Councilmember Poe", "Councilmember M. Poe"],
        )
        .with_member("Mjumbe Poe", &["Mjumbe Poe", "Mjumbe W. Poe", "mjumbewu"])
        .with_tenure(0, date(2008, 12, 14), Some(date(2010, 12, 13)))
        .with_tenure(0, date(2010, 12, 14), Some(date(2012, 12, 13)))
        .with_tenure(1, date(2006, 12, 14), Some(date(2008, 12, 13)))
        .with_tenure(1, date(2012, 12, 14), None)
        .with_legislation(1209, "100001", "abc")
        .with_legislation(3487, "100002", "def")
        .with_legislation(5665, "100003", "ghi")
        .with_legislation(7843, "100004", "jkl")
        .with_sponsorship(1209, 0)
        .with_sponsorship(3487, 0)
        .with_sponsorship(5665, 1)
        .with_sponsorship(7843, 1)
        .build()
        .await
}

/// Registry wrapper counting store round-trips, optionally failing the final delete
struct InstrumentedRegistry<R> {
    inner: R,
    reads: AtomicUsize,
    writes: AtomicUsize,
    fail_on_delete: bool,
}

impl<R> InstrumentedRegistry<R> {
    fn new(inner: R) -> Self {
        Self {
            inner,
            reads: AtomicUsize::new(0),
            writes: AtomicUsize::new(0),
            fail_on_delete: false,
        }
    }

    fn failing_on_delete(inner: R) -> Self {
        Self {
            fail_on_delete: true,
            ..Self::new(inner)
        }
    }

    fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    fn read(&self) {
        self.reads.fetch_add(1, Ordering::SeqCst);
    }

    fn write(&self) {
        self.writes.fetch_add(1, Ordering::SeqCst);
    }
}

impl<R: MemberRegistry + Sync> MemberRegistry for InstrumentedRegistry<R> {
    async fn find_members(&self, ids: &[i32]) -> Result<Vec<CouncilMemberModel>, DbErr> {
        self.read();
        self.inner.find_members(ids).await
    }

    async fn find_aliases_for(
        &self,
        member_ids: &[i32],
    ) -> Result<Vec<CouncilMemberAliasModel>, DbErr> {
        self.read();
        self.inner.find_aliases_for(member_ids).await
    }

    async fn find_tenure_ids_for(&self, member_ids: &[i32]) -> Result<Vec<(i32, i32)>, DbErr> {
        self.read();
        self.inner.find_tenure_ids_for(member_ids).await
    }

    async fn find_vote_ids_for(&self, member_ids: &[i32]) -> Result<Vec<(i32, i32)>, DbErr> {
        self.read();
        self.inner.find_vote_ids_for(member_ids).await
    }

    async fn find_sponsored_keys_for(&self, member_ids: &[i32]) -> Result<Vec<(i32, i32)>, DbErr> {
        self.read();
        self.inner.find_sponsored_keys_for(member_ids).await
    }

    async fn bulk_update_owner(
        &self,
        kind: OwnedKind,
        ids: &[i32],
        new_owner: i32,
    ) -> Result<u64, DbErr> {
        self.write();
        self.inner.bulk_update_owner(kind, ids, new_owner).await
    }

    async fn bulk_delete(&self, kind: OwnedKind, ids: &[i32]) -> Result<u64, DbErr> {
        self.write();
        self.inner.bulk_delete(kind, ids).await
    }

    async fn add_sponsors(&self, legislation_keys: &[i32], member: i32) -> Result<u64, DbErr> {
        self.write();
        self.inner.add_sponsors(legislation_keys, member).await
    }

    async fn delete_sponsorships_of(&self, member_ids: &[i32]) -> Result<u64, DbErr> {
        self.write();
        self.inner.delete_sponsorships_of(member_ids).await
    }

    async fn delete_members(&self, ids: &[i32]) -> Result<u64, DbErr> {
        self.write();
        if self.fail_on_delete {
            return Err(DbErr::Custom("injected failure".to_string()));
        }
        self.inner.delete_members(ids).await
    }
}
