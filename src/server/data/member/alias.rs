use migration::Expr;
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::server::model::db::CouncilMemberAliasModel;

pub struct AliasRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AliasRepository<'a, C> {
    /// Creates a new instance of [`AliasRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets every alias owned by the provided members, ordered by alias ID
    pub async fn find_by_member_ids(
        &self,
        member_ids: &[i32],
    ) -> Result<Vec<CouncilMemberAliasModel>, DbErr> {
        if member_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::CouncilMemberAlias::find()
            .filter(entity::council_member_alias::Column::MemberId.is_in(member_ids.iter().copied()))
            .order_by_asc(entity::council_member_alias::Column::Id)
            .all(self.db)
            .await
    }

    /// Moves the provided aliases to a new owning member in a single statement
    ///
    /// # Returns
    /// Number of aliases updated
    pub async fn update_member(&self, alias_ids: &[i32], member_id: i32) -> Result<u64, DbErr> {
        if alias_ids.is_empty() {
            return Ok(0);
        }

        let result = entity::prelude::CouncilMemberAlias::update_many()
            .col_expr(
                entity::council_member_alias::Column::MemberId,
                Expr::value(member_id),
            )
            .filter(entity::council_member_alias::Column::Id.is_in(alias_ids.iter().copied()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn delete_many(&self, alias_ids: &[i32]) -> Result<u64, DbErr> {
        if alias_ids.is_empty() {
            return Ok(0);
        }

        let result = entity::prelude::CouncilMemberAlias::delete_many()
            .filter(entity::council_member_alias::Column::Id.is_in(alias_ids.iter().copied()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
