pub mod minutes;
pub mod sponsor;
pub mod topic;
pub mod vote;

use chrono::{NaiveDateTime, Utc};
use migration::Expr;
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::server::model::db::LegFileModel;

pub struct LegislationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> LegislationRepository<'a, C> {
    /// Creates a new instance of [`LegislationRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets legislative files updated at or after `since`, ordered by key
    pub async fn find_updated_since(
        &self,
        since: NaiveDateTime,
    ) -> Result<Vec<LegFileModel>, DbErr> {
        entity::prelude::LegFile::find()
            .filter(entity::leg_file::Column::UpdatedAt.gte(since))
            .order_by_asc(entity::leg_file::Column::Key)
            .all(self.db)
            .await
    }

    /// Bumps `updated_at` for the provided legislation keys so the search indexer picks
    /// them up on its next pull
    ///
    /// # Returns
    /// Number of legislative files marked
    pub async fn mark_updated(&self, keys: &[i32]) -> Result<u64, DbErr> {
        if keys.is_empty() {
            return Ok(0);
        }

        let result = entity::prelude::LegFile::update_many()
            .col_expr(
                entity::leg_file::Column::UpdatedAt,
                Expr::value(Utc::now().naive_utc()),
            )
            .filter(entity::leg_file::Column::Key.is_in(keys.iter().copied()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
