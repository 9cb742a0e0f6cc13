pub mod alias;
pub mod tenure;

use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::server::model::db::CouncilMemberModel;

pub struct CouncilMemberRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CouncilMemberRepository<'a, C> {
    /// Creates a new instance of [`CouncilMemberRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Finds the council members with the provided IDs, ordered by ID
    ///
    /// IDs without a matching record are silently skipped.
    pub async fn find_many(&self, ids: &[i32]) -> Result<Vec<CouncilMemberModel>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::CouncilMember::find()
            .filter(entity::council_member::Column::Id.is_in(ids.iter().copied()))
            .order_by_asc(entity::council_member::Column::Id)
            .all(self.db)
            .await
    }

    /// Deletes the council members with the provided IDs
    ///
    /// Returns the number of rows deleted, which is lower than `ids.len()` when some of
    /// the members no longer exist.
    pub async fn delete_many(&self, ids: &[i32]) -> Result<u64, DbErr> {
        if ids.is_empty() {
            return Ok(0);
        }

        let result = entity::prelude::CouncilMember::delete_many()
            .filter(entity::council_member::Column::Id.is_in(ids.iter().copied()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
