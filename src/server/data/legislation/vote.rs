use migration::Expr;
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect};

pub struct VoteRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> VoteRepository<'a, C> {
    /// Creates a new instance of [`VoteRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets `(vote_id, voter_id)` pairs for votes cast by the provided members
    pub async fn get_ids_by_voter_ids(&self, voter_ids: &[i32]) -> Result<Vec<(i32, i32)>, DbErr> {
        if voter_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::LegVote::find()
            .select_only()
            .column(entity::leg_vote::Column::Id)
            .column(entity::leg_vote::Column::VoterId)
            .filter(entity::leg_vote::Column::VoterId.is_in(voter_ids.iter().copied()))
            .order_by_asc(entity::leg_vote::Column::Id)
            .into_tuple::<(i32, i32)>()
            .all(self.db)
            .await
    }

    pub async fn update_voter(&self, vote_ids: &[i32], voter_id: i32) -> Result<u64, DbErr> {
        if vote_ids.is_empty() {
            return Ok(0);
        }

        let result = entity::prelude::LegVote::update_many()
            .col_expr(entity::leg_vote::Column::VoterId, Expr::value(voter_id))
            .filter(entity::leg_vote::Column::Id.is_in(vote_ids.iter().copied()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn delete_many(&self, vote_ids: &[i32]) -> Result<u64, DbErr> {
        if vote_ids.is_empty() {
            return Ok(0);
        }

        let result = entity::prelude::LegVote::delete_many()
            .filter(entity::leg_vote::Column::Id.is_in(vote_ids.iter().copied()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
