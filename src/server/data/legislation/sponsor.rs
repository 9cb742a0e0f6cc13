use migration::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect,
};

use crate::server::model::db::LegFileSponsorModel;

pub struct SponsorRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SponsorRepository<'a, C> {
    /// Creates a new instance of [`SponsorRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets `(leg_file_key, member_id)` pairs for legislation sponsored by the provided members
    pub async fn get_keys_by_member_ids(
        &self,
        member_ids: &[i32],
    ) -> Result<Vec<(i32, i32)>, DbErr> {
        if member_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::LegFileSponsor::find()
            .select_only()
            .column(entity::leg_file_sponsor::Column::LegFileKey)
            .column(entity::leg_file_sponsor::Column::MemberId)
            .filter(entity::leg_file_sponsor::Column::MemberId.is_in(member_ids.iter().copied()))
            .order_by_asc(entity::leg_file_sponsor::Column::LegFileKey)
            .into_tuple::<(i32, i32)>()
            .all(self.db)
            .await
    }

    /// Gets every sponsorship link row for the provided legislation keys
    pub async fn find_by_leg_file_keys(
        &self,
        keys: &[i32],
    ) -> Result<Vec<LegFileSponsorModel>, DbErr> {
        if keys.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::LegFileSponsor::find()
            .filter(entity::leg_file_sponsor::Column::LegFileKey.is_in(keys.iter().copied()))
            .order_by_asc(entity::leg_file_sponsor::Column::LegFileKey)
            .order_by_asc(entity::leg_file_sponsor::Column::MemberId)
            .all(self.db)
            .await
    }

    /// Adds the member as a sponsor of every provided legislation key
    ///
    /// Keys the member already sponsors are left untouched, making this a set union.
    ///
    /// # Returns
    /// Number of sponsorship links inserted
    pub async fn add_sponsor_to_many(&self, keys: &[i32], member_id: i32) -> Result<u64, DbErr> {
        if keys.is_empty() {
            return Ok(0);
        }

        let sponsors = keys
            .iter()
            .map(|key| entity::leg_file_sponsor::ActiveModel {
                leg_file_key: ActiveValue::Set(*key),
                member_id: ActiveValue::Set(member_id),
            });

        entity::prelude::LegFileSponsor::insert_many(sponsors)
            .on_conflict(
                OnConflict::columns([
                    entity::leg_file_sponsor::Column::LegFileKey,
                    entity::leg_file_sponsor::Column::MemberId,
                ])
                .do_nothing()
                .to_owned(),
            )
            .exec_without_returning(self.db)
            .await
    }

    /// Deletes every sponsorship link held by the provided members
    pub async fn delete_by_member_ids(&self, member_ids: &[i32]) -> Result<u64, DbErr> {
        if member_ids.is_empty() {
            return Ok(0);
        }

        let result = entity::prelude::LegFileSponsor::delete_many()
            .filter(entity::leg_file_sponsor::Column::MemberId.is_in(member_ids.iter().copied()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
