use chrono::NaiveDateTime;
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::server::model::db::LegMinutesModel;

pub struct MinutesRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MinutesRepository<'a, C> {
    /// Creates a new instance of [`MinutesRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets minutes updated at or after `since`, ordered by ID
    pub async fn find_updated_since(
        &self,
        since: NaiveDateTime,
    ) -> Result<Vec<LegMinutesModel>, DbErr> {
        entity::prelude::LegMinutes::find()
            .filter(entity::leg_minutes::Column::UpdatedAt.gte(since))
            .order_by_asc(entity::leg_minutes::Column::Id)
            .all(self.db)
            .await
    }
}
