use migration::Expr;
use sea_orm::{
    ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::db::CouncilMemberTenureModel;

pub struct TenureRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TenureRepository<'a, C> {
    /// Creates a new instance of [`TenureRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn find_by_member_ids(
        &self,
        member_ids: &[i32],
    ) -> Result<Vec<CouncilMemberTenureModel>, DbErr> {
        if member_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::CouncilMemberTenure::find()
            .filter(
                entity::council_member_tenure::Column::MemberId.is_in(member_ids.iter().copied()),
            )
            .order_by_asc(entity::council_member_tenure::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets `(tenure_id, member_id)` pairs for the provided members
    pub async fn get_ids_by_member_ids(&self, member_ids: &[i32]) -> Result<Vec<(i32, i32)>, DbErr> {
        if member_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::CouncilMemberTenure::find()
            .select_only()
            .column(entity::council_member_tenure::Column::Id)
            .column(entity::council_member_tenure::Column::MemberId)
            .filter(
                entity::council_member_tenure::Column::MemberId.is_in(member_ids.iter().copied()),
            )
            .order_by_asc(entity::council_member_tenure::Column::Id)
            .into_tuple::<(i32, i32)>()
            .all(self.db)
            .await
    }

    pub async fn update_member(&self, tenure_ids: &[i32], member_id: i32) -> Result<u64, DbErr> {
        if tenure_ids.is_empty() {
            return Ok(0);
        }

        let result = entity::prelude::CouncilMemberTenure::update_many()
            .col_expr(
                entity::council_member_tenure::Column::MemberId,
                Expr::value(member_id),
            )
            .filter(entity::council_member_tenure::Column::Id.is_in(tenure_ids.iter().copied()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn delete_many(&self, tenure_ids: &[i32]) -> Result<u64, DbErr> {
        if tenure_ids.is_empty() {
            return Ok(0);
        }

        let result = entity::prelude::CouncilMemberTenure::delete_many()
            .filter(entity::council_member_tenure::Column::Id.is_in(tenure_ids.iter().copied()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
